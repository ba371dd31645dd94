// Synthetic delivery locations for tests and benchmarks

use rand::Rng;

use crate::models::Location;

/// Rectangular latitude/longitude area that sample locations are drawn from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub min_latitude: f64,
    pub max_latitude: f64,
    pub min_longitude: f64,
    pub max_longitude: f64,
}

impl Region {
    pub fn new(
        min_latitude: f64,
        max_latitude: f64,
        min_longitude: f64,
        max_longitude: f64,
    ) -> Self {
        Self {
            min_latitude,
            max_latitude,
            min_longitude,
            max_longitude,
        }
    }

    /// Roughly the contiguous United States
    pub fn continental_us() -> Self {
        Self::new(25.0, 49.0, -125.0, -67.0)
    }
}

/// Draws `count` uniformly scattered locations inside `region`
pub fn scatter_locations<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    region: &Region,
) -> Vec<Location> {
    (0..count)
        .map(|_| {
            Location::new(
                sample(rng, region.min_latitude, region.max_latitude),
                sample(rng, region.min_longitude, region.max_longitude),
            )
        })
        .collect()
}

// gen_range panics on an empty range, so a zero-width side collapses to its bound
fn sample<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    if low < high {
        rng.gen_range(low..high)
    } else {
        low
    }
}
