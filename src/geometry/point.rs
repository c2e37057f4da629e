//! Planar points and the input conversion boundary.
//!
//! Every other module works on [`Point2D`]; callers with their own vector
//! types convert once, here, through the `From` impls or
//! [`Point2D::from_coords`].

use float_ord::FloatOrd;
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::ops::Sub;

/// An immutable 2D coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point2D {
    /// Creates a new point.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Converts any pair of numeric coordinates into a point.
    ///
    /// Returns `None` when either coordinate cannot be represented as `f64`.
    pub fn from_coords<T: ToPrimitive>(x: T, y: T) -> Option<Self> {
        Some(Self::new(x.to_f64()?, y.to_f64()?))
    }

    /// Returns `true` if both coordinates are finite.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Dot product, treating both points as vectors.
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the cross product, treating both points as vectors.
    #[must_use]
    pub fn cross(self, other: Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Squared Euclidean norm.
    #[must_use]
    pub fn norm_squared(self) -> f64 {
        self.dot(self)
    }

    /// Total lexicographic ordering key: by `x`, then by `y`.
    ///
    /// `-0.0` and `0.0` compare equal, so coincident points sort next to
    /// each other.
    #[must_use]
    pub const fn sort_key(&self) -> (FloatOrd<f64>, FloatOrd<f64>) {
        // Adding 0.0 turns -0.0 into 0.0 and leaves every other value unchanged.
        (FloatOrd(self.x + 0.0), FloatOrd(self.y + 0.0))
    }
}

impl Sub for Point2D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<[f64; 2]> for Point2D {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f32; 2]> for Point2D {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(f64::from(x), f64::from(y))
    }
}

impl From<(f32, f32)> for Point2D {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(f64::from(x), f64::from(y))
    }
}

impl From<Point2D> for [f64; 2] {
    fn from(p: Point2D) -> Self {
        [p.x, p.y]
    }
}
