// Public modules
pub mod algorithms;
pub mod config;
pub mod error;
pub mod models;
pub mod simulation;
pub mod utils;

// Re-exports for convenience
pub use algorithms::nearest_neighbor::NearestNeighborPlanner;
pub use algorithms::RoutePlanner;
pub use config::{DeliveryConfig, StockEntry};
pub use error::{Error, Result};
pub use models::{DeliveryRoute, Inventory, Location};
pub use simulation::{simulate_deliveries, DeliverySummary};
