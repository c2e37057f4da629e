#![allow(clippy::multiple_crate_versions)]
#![warn(missing_docs)]

//! Divide-and-conquer Delaunay triangulation on a quad-edge arena.
//!
//! This library computes the Delaunay triangulation of a planar point set with
//! the Guibas-Stolfi algorithm. The subdivision is kept in an index-based
//! quad-edge arena whose freed edges are recycled, and the result is reported
//! as triangles over the caller's original point indices.
//!
//! # Key Features
//!
//! - O(n log n) divide-and-conquer construction
//! - Arena invariant checking and exhaustive Delaunay validation
//! - Incremental Bowyer-Watson baseline for cross-checking
//! - Algorithm-agnostic query and export traits
//!
//! # Example
//!
//! ```rust
//! use quadedge_delaunay::{Point2D, Triangulator, TriangulationOps};
//!
//! let points = [
//!     Point2D::new(0.0, 0.0),
//!     Point2D::new(1.0, 0.0),
//!     Point2D::new(1.0, 1.0),
//!     Point2D::new(0.0, 1.0),
//! ];
//! let triangulator = Triangulator::new(&points)?;
//! assert_eq!(triangulator.triangles().len(), 2);
//! assert!(triangulator.is_delaunay());
//! # Ok::<(), quadedge_delaunay::DelaunayError>(())
//! ```

use std::io::Write;
use std::time::{Duration, Instant};

// Module declarations (avoiding mod.rs files)
/// Error types for the triangulation library.
pub mod errors;

/// Command-line configuration.
pub mod config;

/// Utility functions for random point generation.
pub mod util;

/// Geometry primitives and algorithm-agnostic triangulation traits.
pub mod geometry {
    /// Axis-aligned boxes, circles and enclosing triangles.
    pub mod bounds;
    /// Algorithm-agnostic mesh data structures.
    pub mod mesh;
    /// High-level triangulation operations.
    pub mod operations;
    /// Input point type and conversions.
    pub mod point;
    /// Orientation and in-circle predicates.
    pub mod predicates;
    /// Core traits shared by the triangulation algorithms.
    pub mod traits;
}

/// Index-based quad-edge arena.
pub mod quad_edge {
    /// Edge handles, navigation and topological operators.
    pub mod edge_algebra;
}

/// Delaunay triangulation algorithms.
pub mod delaunay {
    /// Incremental Bowyer-Watson baseline.
    pub mod bowyer_watson;
    /// Face labelling and triangle extraction.
    pub mod faces;
    /// Guibas-Stolfi divide-and-conquer builder.
    pub mod guibas_stolfi;
}

// Re-exports for convenience
pub use config::{Algorithm, TestConfig, TriangulationConfig};
pub use delaunay::bowyer_watson::BowyerWatson;
pub use delaunay::guibas_stolfi::{Triangulator, triangulation};
pub use errors::{DelaunayError, DelaunayResult};
pub use geometry::mesh::{Edge, Mesh, Triangle};
pub use geometry::operations::TriangulationOps;
pub use geometry::point::Point2D;
pub use geometry::traits::TriangulationQuery;
pub use quad_edge::edge_algebra::{EdgeAlgebra, EdgeId};

/// Outcome of a single [`run`].
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Algorithm that produced the triangles
    pub algorithm: Algorithm,
    /// Number of input points
    pub points: usize,
    /// Number of distinct undirected edges
    pub edges: usize,
    /// Triangles in original point indices
    pub triangles: Vec<Triangle>,
    /// Wall-clock time spent triangulating
    pub elapsed: Duration,
    /// Whether the empty-circumcircle check ran and passed
    pub validated: bool,
    /// Whether the cross-check against the other algorithm ran and passed
    pub compared: bool,
}

impl RunSummary {
    /// Number of emitted triangles.
    #[must_use]
    pub const fn triangle_count(&self) -> usize {
        self.triangles.len()
    }
}

fn triangulate_with(
    algorithm: Algorithm,
    points: &[Point2D],
) -> DelaunayResult<Box<dyn TriangulationQuery>> {
    Ok(match algorithm {
        Algorithm::GuibasStolfi => Box::new(Triangulator::new(points)?),
        Algorithm::BowyerWatson => Box::new(BowyerWatson::new(points)?),
    })
}

/// Runs a triangulation with the given configuration.
///
/// Generates the configured random points, triangulates them with the
/// selected algorithm and, if requested, validates the result and
/// cross-checks it against the other algorithm. With `print` set, the
/// triangles are written to stdout as `i j k` lines.
///
/// # Errors
///
/// Returns [`DelaunayError::InvalidParameters`] for an invalid configuration,
/// [`DelaunayError::NotDelaunay`] if validation fails,
/// [`DelaunayError::CrossCheckMismatch`] if the algorithms disagree, and any
/// error raised while building the triangulation.
pub fn run(config: &TriangulationConfig) -> DelaunayResult<RunSummary> {
    config.validate()?;

    let count = usize::try_from(config.points)
        .map_err(|e| DelaunayError::InvalidParameters(e.to_string()))?;
    let points = util::generate_random_points(count, config.range(), config.seed)?;

    log::info!("Number of points: {count}");
    log::info!("Coordinate range: [{}, {})", config.min, config.max);
    if let Some(seed) = config.seed {
        log::info!("Seed: {seed}");
    }

    let start = Instant::now();
    let result = triangulate_with(config.algorithm, &points)?;
    let elapsed = start.elapsed();

    log::info!(
        "{}: {} triangles, {} edges in {:.3?}",
        result.backend_name(),
        result.triangle_count(),
        result.edge_count(),
        elapsed
    );

    if config.validate {
        result.validate_delaunay()?;
        log::info!("Delaunay check passed");
    }

    if config.compare {
        let other = triangulate_with(config.algorithm.other(), &points)?;
        if !result.same_triangles_as(other.as_ref()) {
            return Err(DelaunayError::CrossCheckMismatch(format!(
                "{} produced {} triangles, {} produced {}",
                result.backend_name(),
                result.triangle_count(),
                other.backend_name(),
                other.triangle_count()
            )));
        }
        log::info!("Cross-check against {} passed", other.backend_name());
    }

    if config.print {
        let mut out = std::io::stdout().lock();
        for triangle in result.triangles() {
            let [a, b, c] = triangle.vertices();
            writeln!(out, "{a} {b} {c}").map_err(|e| DelaunayError::Output(e.to_string()))?;
        }
    }

    Ok(RunSummary {
        algorithm: config.algorithm,
        points: count,
        edges: result.edge_count(),
        triangles: result.triangles().to_vec(),
        elapsed,
        validated: config.validate,
        compared: config.compare,
    })
}

#[cfg(test)]
mod lib_tests {
    use super::*;

    #[test]
    fn test_run() {
        let config = TestConfig::small();
        let summary = run(&config).expect("Failed to run triangulation");
        assert_eq!(summary.points, 16);
        assert!(summary.triangle_count() > 0);
        assert!(summary.validated);
        assert!(summary.compared);
    }

    #[test]
    fn test_run_is_deterministic_with_seed() {
        let config = TriangulationConfig::new(200, 5);
        let a = run(&config).expect("Failed to run triangulation");
        let b = run(&config).expect("Failed to run triangulation");
        assert_eq!(a.triangles, b.triangles);
        assert_eq!(a.edges, b.edges);
    }

    #[test]
    fn test_run_bowyer_watson() {
        let config = TriangulationConfig {
            algorithm: Algorithm::BowyerWatson,
            compare: true,
            ..TriangulationConfig::new(64, 11)
        };
        let summary = run(&config).expect("Failed to run triangulation");
        assert_eq!(summary.algorithm, Algorithm::BowyerWatson);
        assert!(summary.triangle_count() > 0);
    }

    #[test]
    fn test_run_with_too_few_points() {
        let config = TriangulationConfig::new(2, 1);
        let summary = run(&config).expect("two points are valid");
        assert_eq!(summary.triangle_count(), 0);
        assert_eq!(summary.edges, 1);
    }

    #[test]
    fn test_run_rejects_invalid_range() {
        let config = TriangulationConfig {
            min: 3.0,
            max: -3.0,
            ..TriangulationConfig::new(10, 1)
        };
        assert!(matches!(
            run(&config),
            Err(DelaunayError::InvalidParameters(_))
        ));
    }
}
