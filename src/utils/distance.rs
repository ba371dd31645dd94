// Distance calculation utilities

use crate::models::{Distance, Location};
use serde::{Deserialize, Serialize};

/// Calculate the Euclidean distance between two points
pub fn euclidean_distance(p1: &Location, p2: &Location) -> Distance {
    p1.distance_to(p2)
}

/// Calculate the Manhattan distance between two points
pub fn manhattan_distance(p1: &Location, p2: &Location) -> Distance {
    p1.manhattan_distance_to(p2)
}

/// Planar metric used to compare delivery locations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceMetric {
    #[default]
    Euclidean,
    Manhattan,
}

impl DistanceMetric {
    pub fn between(self, p1: &Location, p2: &Location) -> Distance {
        match self {
            DistanceMetric::Euclidean => euclidean_distance(p1, p2),
            DistanceMetric::Manhattan => manhattan_distance(p1, p2),
        }
    }
}
