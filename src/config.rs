//! Configuration management for the `qdt` binary.
//!
//! This module provides structured configuration for a triangulation run:
//! - Point generation (count, seed, coordinate range)
//! - Algorithm selection
//! - Optional validation and cross-checking
//! - Output behavior

use crate::errors::{DelaunayError, DelaunayResult};
use clap::{Parser, ValueEnum};

/// Largest point count for which the quadratic checks (`--validate`,
/// `--compare`) are allowed.
pub const MAX_QUADRATIC_CHECK_POINTS: u32 = 20_000;

/// Triangulation algorithm selector.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Divide-and-conquer on a quad-edge arena, O(n log n)
    #[default]
    GuibasStolfi,
    /// Incremental super-triangle insertion, O(n^2)
    BowyerWatson,
}

impl Algorithm {
    /// The algorithm used to cross-check this one.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::GuibasStolfi => Self::BowyerWatson,
            Self::BowyerWatson => Self::GuibasStolfi,
        }
    }
}

/// Main configuration structure for a triangulation run.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct TriangulationConfig {
    /// Number of random points to triangulate
    #[arg(short = 'n', long, default_value = "1000")]
    pub points: u32,

    /// Seed for reproducible point sets
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Lower bound of both coordinates
    #[arg(long, default_value = "0.0", allow_negative_numbers = true)]
    pub min: f64,

    /// Upper bound (exclusive) of both coordinates
    #[arg(long, default_value = "1.0", allow_negative_numbers = true)]
    pub max: f64,

    /// Triangulation algorithm
    #[arg(short, long, value_enum, default_value_t = Algorithm::GuibasStolfi)]
    pub algorithm: Algorithm,

    /// Cross-check the result against the other algorithm
    #[arg(long, default_value = "false")]
    pub compare: bool,

    /// Check the empty-circumcircle property exhaustively
    #[arg(long, default_value = "false")]
    pub validate: bool,

    /// Write triangles to stdout, one `i j k` line each
    #[arg(long, default_value = "false")]
    pub print: bool,
}

impl TriangulationConfig {
    /// Builds a new instance of `TriangulationConfig` from command line arguments.
    #[must_use]
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Creates a seeded configuration over the unit square with default options.
    #[must_use]
    pub const fn new(points: u32, seed: u64) -> Self {
        Self {
            points,
            seed: Some(seed),
            min: 0.0,
            max: 1.0,
            algorithm: Algorithm::GuibasStolfi,
            compare: false,
            validate: false,
            print: false,
        }
    }

    /// Coordinate range as `(min, max)`.
    #[must_use]
    pub const fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Validates the configuration parameters.
    ///
    /// # Errors
    ///
    /// Returns [`DelaunayError::InvalidParameters`] if the coordinate range is
    /// empty or non-finite, or if a quadratic check is requested for too many
    /// points.
    pub fn validate(&self) -> DelaunayResult<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(DelaunayError::InvalidParameters(format!(
                "coordinate range [{}, {}) must be finite",
                self.min, self.max
            )));
        }

        if self.min >= self.max {
            return Err(DelaunayError::InvalidParameters(format!(
                "coordinate range [{}, {}) is empty: min must be less than max",
                self.min, self.max
            )));
        }

        if (self.compare || self.validate) && self.points > MAX_QUADRATIC_CHECK_POINTS {
            return Err(DelaunayError::InvalidParameters(format!(
                "--compare and --validate are limited to {MAX_QUADRATIC_CHECK_POINTS} points, got {}",
                self.points
            )));
        }

        Ok(())
    }
}

/// Configuration preset for quick testing.
#[derive(Debug, Clone)]
pub struct TestConfig;

impl TestConfig {
    /// Creates a small, fast configuration suitable for unit tests.
    #[must_use]
    pub const fn small() -> TriangulationConfig {
        TriangulationConfig {
            validate: true,
            compare: true,
            ..TriangulationConfig::new(16, 42)
        }
    }

    /// Creates a medium-sized configuration for integration tests.
    #[must_use]
    pub const fn medium() -> TriangulationConfig {
        TriangulationConfig {
            validate: true,
            compare: true,
            ..TriangulationConfig::new(256, 42)
        }
    }

    /// Creates a large configuration for performance testing.
    #[must_use]
    pub const fn large() -> TriangulationConfig {
        TriangulationConfig::new(100_000, 42)
    }
}
