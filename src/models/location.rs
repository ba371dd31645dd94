// Location model representing a delivery point as a latitude/longitude pair

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a location with (latitude, longitude) coordinates
///
/// Coordinates are treated as planar values; no great-circle correction is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// Creates a new location with the given coordinates
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Calculates the Euclidean distance between two locations
    pub fn distance_to(&self, other: &Location) -> f64 {
        ((self.latitude - other.latitude).powi(2) + (self.longitude - other.longitude).powi(2))
            .sqrt()
    }

    /// Manhattan distance between two locations
    pub fn manhattan_distance_to(&self, other: &Location) -> f64 {
        (self.latitude - other.latitude).abs() + (self.longitude - other.longitude).abs()
    }

    /// Returns true when both coordinates are finite numbers
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

impl From<(f64, f64)> for Location {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}
