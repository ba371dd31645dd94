// Route model for representing a planned delivery route

use crate::models::{Distance, Location};
use crate::utils::distance::DistanceMetric;
use serde::Serialize;

/// A delivery route: the start location followed by every delivery stop in visiting order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeliveryRoute {
    /// Sequence of locations to visit, start included
    locations: Vec<Location>,
}

impl DeliveryRoute {
    /// Creates a route holding only its start, with room for `stops` deliveries
    pub(crate) fn with_capacity(start: Location, stops: usize) -> Self {
        let mut locations = Vec::with_capacity(stops + 1);
        locations.push(start);
        Self { locations }
    }

    pub(crate) fn push(&mut self, location: Location) {
        self.locations.push(location);
    }

    /// The location the route departs from
    pub fn start(&self) -> Location {
        self.locations[0]
    }

    /// Delivery stops in visiting order, without the start location
    pub fn stops(&self) -> &[Location] {
        &self.locations[1..]
    }

    /// All locations in visiting order, start first
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Number of locations including the start
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// A route always holds its start, so it is never empty
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Location> {
        self.locations.iter()
    }

    /// Sum of the leg lengths under the given metric
    pub fn total_distance(&self, metric: DistanceMetric) -> Distance {
        self.locations
            .windows(2)
            .map(|leg| metric.between(&leg[0], &leg[1]))
            .sum()
    }

    pub fn into_locations(self) -> Vec<Location> {
        self.locations
    }
}

impl<'a> IntoIterator for &'a DeliveryRoute {
    type Item = &'a Location;
    type IntoIter = std::slice::Iter<'a, Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.locations.iter()
    }
}
