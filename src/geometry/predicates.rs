//! Floating-point geometric predicates.
//!
//! Both predicates use strict comparisons against zero and no exact-arithmetic
//! fallback. A determinant that evaluates to zero (of either sign) never counts
//! as "left of" or "inside", so collinear and cocircular inputs resolve to
//! `false` deterministically.

use super::point::Point2D;

/// Twice the signed area of the triangle `(a, b, c)`.
///
/// Positive when `c` lies left of the directed line `a -> b`.
#[must_use]
pub fn orientation_determinant(a: Point2D, b: Point2D, c: Point2D) -> f64 {
    (b - a).cross(c - a)
}

/// Returns `true` iff `c` lies strictly left of the directed line `a -> b`.
#[must_use]
pub fn orientation(a: Point2D, b: Point2D, c: Point2D) -> bool {
    orientation_determinant(a, b, c) > 0.0
}

/// Returns `true` iff `c` lies strictly right of the directed line `a -> b`.
#[must_use]
pub fn clockwise(a: Point2D, b: Point2D, c: Point2D) -> bool {
    orientation_determinant(a, b, c) < 0.0
}

/// Lifted-paraboloid determinant for `d` against the circle through `a`, `b`, `c`.
///
/// Coordinates are taken relative to `a`. For a counterclockwise triangle the
/// value is negative when `d` lies inside the circumcircle.
#[must_use]
pub fn in_circle_determinant(a: Point2D, b: Point2D, c: Point2D, d: Point2D) -> f64 {
    let u = b - a;
    let v = c - a;
    let r = d - a;

    let u2 = u.norm_squared();
    let v2 = v.norm_squared();
    let r2 = r.norm_squared();

    r.x * (u.y * v2 - v.y * u2) - r.y * (u.x * v2 - v.x * u2) + r2 * u.cross(v)
}

/// Returns `true` iff `d` lies strictly inside the circle through `a`, `b`, `c`.
///
/// Works for either orientation of `(a, b, c)`: the point is inside when the
/// orientation and the lifted determinant have opposite, non-zero signs.
/// Collinear `(a, b, c)` never encloses anything.
#[must_use]
pub fn in_circle(a: Point2D, b: Point2D, c: Point2D, d: Point2D) -> bool {
    let orient = orientation_determinant(a, b, c);
    let det = in_circle_determinant(a, b, c, d);
    (orient > 0.0 && det < 0.0) || (orient < 0.0 && det > 0.0)
}
