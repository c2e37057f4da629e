//! Random point generation for the binary, benchmarks and tests.

use crate::errors::{DelaunayError, DelaunayResult};
use crate::geometry::point::Point2D;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng, random};

/// Generates a random floating-point number between 0.0 and 1.0.
///
/// # Returns
///
/// A random `f64` value in the range [0.0, 1.0).
#[must_use]
pub fn generate_random_float() -> f64 {
    random::<f64>()
}

/// Generates `count` points with both coordinates drawn uniformly from
/// `[range.0, range.1)`.
///
/// With a seed the point set is reproducible across runs and platforms.
///
/// # Errors
///
/// Returns [`DelaunayError::InvalidParameters`] if the range is empty or
/// not finite.
pub fn generate_random_points(
    count: usize,
    range: (f64, f64),
    seed: Option<u64>,
) -> DelaunayResult<Vec<Point2D>> {
    let (min, max) = range;
    if !(min.is_finite() && max.is_finite()) || min >= max {
        return Err(DelaunayError::InvalidParameters(format!(
            "invalid coordinate range [{min}, {max}): expected finite min < max"
        )));
    }

    let points = if let Some(seed) = seed {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..count)
            .map(|_| Point2D::new(rng.random_range(min..max), rng.random_range(min..max)))
            .collect()
    } else {
        let mut rng = rand::rng();
        (0..count)
            .map(|_| Point2D::new(rng.random_range(min..max), rng.random_range(min..max)))
            .collect()
    };

    log::debug!("Generated {count} points in [{min}, {max})");
    Ok(points)
}
