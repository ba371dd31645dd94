use tracing::{debug, trace};

use crate::algorithms::RoutePlanner;
use crate::error::{Error, Result};
use crate::models::{DeliveryRoute, Distance, Location};
use crate::utils::distance::DistanceMetric;

/// Greedy nearest-neighbor route planner
///
/// From the current position, always move to the closest unvisited candidate.
/// When several candidates are equally close, the one listed first wins, so the
/// same input always yields the same route.
///
/// Each step scans every remaining candidate: O(n²) distance evaluations for n
/// candidates. Fine for a handful of stops; there is no spatial index or 2-opt pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNeighborPlanner {
    metric: DistanceMetric,
}

impl NearestNeighborPlanner {
    /// Creates a planner using the Euclidean metric
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a planner that compares locations with `metric`
    pub fn with_metric(metric: DistanceMetric) -> Self {
        Self { metric }
    }

    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    /// Index and distance of the closest location, first one on ties
    fn nearest(&self, from: &Location, remaining: &[Location]) -> Option<(usize, Distance)> {
        let mut best: Option<(usize, Distance)> = None;

        for (i, candidate) in remaining.iter().enumerate() {
            let d = self.metric.between(from, candidate);
            // Strict comparison keeps the earliest minimum
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((i, d)),
            }
        }

        best
    }
}

impl RoutePlanner for NearestNeighborPlanner {
    fn find_optimal_route(
        &self,
        start: Location,
        candidates: &[Location],
    ) -> Result<DeliveryRoute> {
        if !start.is_finite() {
            return Err(Error::RouteComputation(format!(
                "start location {} has a non-finite coordinate",
                start
            )));
        }
        if let Some((i, bad)) = candidates
            .iter()
            .enumerate()
            .find(|(_, loc)| !loc.is_finite())
        {
            return Err(Error::RouteComputation(format!(
                "candidate #{} {} has a non-finite coordinate",
                i, bad
            )));
        }

        debug!(
            "Planning route from {} over {} candidates ({:?})",
            start,
            candidates.len(),
            self.metric
        );

        let mut remaining = candidates.to_vec();
        let mut route = DeliveryRoute::with_capacity(start, candidates.len());
        let mut current = start;

        while let Some((index, distance)) = self.nearest(&current, &remaining) {
            // `remove` keeps the original relative order of what is left
            let next = remaining.remove(index);
            trace!("Next stop {} at distance {:.4}", next, distance);

            route.push(next);
            current = next;
        }

        debug!(
            "Route planned with {} stops, total distance {:.4}",
            route.stops().len(),
            route.total_distance(self.metric)
        );

        Ok(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hub() -> Location {
        Location::new(37.7749, -122.4194)
    }

    fn city_deliveries() -> Vec<Location> {
        vec![
            Location::new(40.7128, -74.0060),
            Location::new(34.0522, -118.2437),
            Location::new(41.8781, -87.6298),
            Location::new(29.7604, -95.3698),
        ]
    }

    #[test]
    fn test_city_route_order() {
        let planner = NearestNeighborPlanner::new();
        let route = planner
            .find_optimal_route(hub(), &city_deliveries())
            .unwrap();

        assert_eq!(
            route.locations(),
            &[
                hub(),
                Location::new(34.0522, -118.2437),
                Location::new(29.7604, -95.3698),
                Location::new(41.8781, -87.6298),
                Location::new(40.7128, -74.0060),
            ]
        );
        assert!((route.total_distance(DistanceMetric::Euclidean) - 56.9195).abs() < 1e-3);
    }

    #[test]
    fn test_empty_candidates() {
        let planner = NearestNeighborPlanner::new();
        let route = planner.find_optimal_route(hub(), &[]).unwrap();

        assert_eq!(route.locations(), &[hub()]);
    }

    #[test]
    fn test_ties_pick_first_listed() {
        let planner = NearestNeighborPlanner::new();
        let start = Location::new(0.0, 0.0);
        let east = Location::new(0.0, 1.0);
        let north = Location::new(1.0, 0.0);

        let route = planner.find_optimal_route(start, &[east, north]).unwrap();
        assert_eq!(route.stops(), &[east, north]);

        let route = planner.find_optimal_route(start, &[north, east]).unwrap();
        assert_eq!(route.stops(), &[north, east]);
    }

    #[test]
    fn test_duplicate_candidates_are_all_visited() {
        let planner = NearestNeighborPlanner::new();
        let start = Location::new(0.0, 0.0);
        let spot = Location::new(2.0, 2.0);

        let route = planner.find_optimal_route(start, &[spot, spot]).unwrap();
        assert_eq!(route.stops(), &[spot, spot]);
    }

    #[test]
    fn test_planner_metric() {
        assert_eq!(NearestNeighborPlanner::new().metric(), DistanceMetric::Euclidean);
        assert_eq!(
            NearestNeighborPlanner::with_metric(DistanceMetric::Manhattan).metric(),
            DistanceMetric::Manhattan
        );
    }

    #[test]
    fn test_manhattan_metric_changes_choice() {
        // Euclidean prefers the diagonal point (~2.83 vs 3.0),
        // Manhattan prefers the straight one (3.0 vs 4.0)
        let start = Location::new(0.0, 0.0);
        let diagonal = Location::new(2.0, 2.0);
        let straight = Location::new(3.0, 0.0);
        let candidates = [straight, diagonal];

        let euclid = NearestNeighborPlanner::new()
            .find_optimal_route(start, &candidates)
            .unwrap();
        assert_eq!(euclid.stops()[0], diagonal);

        let manhattan = NearestNeighborPlanner::with_metric(DistanceMetric::Manhattan)
            .find_optimal_route(start, &candidates)
            .unwrap();
        assert_eq!(manhattan.stops()[0], straight);
    }

    #[test]
    fn test_non_finite_start_fails() {
        let planner = NearestNeighborPlanner::new();
        let result = planner.find_optimal_route(Location::new(f64::NAN, 0.0), &city_deliveries());

        assert!(matches!(result, Err(Error::RouteComputation(_))));
    }

    #[test]
    fn test_non_finite_candidate_fails() {
        let planner = NearestNeighborPlanner::new();
        let mut candidates = city_deliveries();
        candidates.push(Location::new(10.0, f64::INFINITY));

        let err = planner.find_optimal_route(hub(), &candidates).unwrap_err();
        assert!(err.to_string().starts_with("route computation failed"));
        assert!(err.to_string().contains("candidate #4"));
    }
}
