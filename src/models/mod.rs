// Models module - exports all model types

mod inventory;
mod location;
mod route;

// Re-export model types
pub use self::inventory::Inventory;
pub use self::location::Location;
pub use self::route::DeliveryRoute;

// Common type aliases for improved code readability
pub type Quantity = u32;
pub type Distance = f64;
