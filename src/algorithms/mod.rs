pub mod nearest_neighbor;

// Common algorithm traits
use crate::error::Result;
use crate::models::{DeliveryRoute, Location};

/// Trait for delivery route planners
pub trait RoutePlanner {
    /// Order the candidate locations into a route that departs from `start`
    ///
    /// An empty candidate list is not an error: the route is just `[start]`.
    fn find_optimal_route(&self, start: Location, candidates: &[Location])
        -> Result<DeliveryRoute>;
}
