pub mod distance;
pub mod logger;
pub mod sample_data;
pub mod visualize;
