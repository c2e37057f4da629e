//! Incremental Bowyer-Watson triangulation.
//!
//! Quadratic reference implementation used to cross-check the
//! divide-and-conquer builder and as a benchmark baseline.
//!
//! All points are inserted into a super triangle. For each new point every
//! triangle whose circumcircle contains it is removed, and the boundary of the
//! resulting cavity is re-triangulated against the point. Triangles touching a
//! super-triangle corner are dropped at the end.
//!
//! The super-triangle corners are symbolic points at infinity: corner `k`
//! sits at `center + M * direction[k]` for an unbounded `M`, and circumcircle
//! tests involving corners return their limit as `M` grows. No finite super
//! triangle is large enough for every input, since a nearly flat hull
//! triangle has an arbitrarily large circumcircle.

use crate::errors::{DelaunayError, DelaunayResult};
use crate::geometry::bounds::{bounding_box, bounding_circle};
use crate::geometry::mesh::Triangle;
use crate::geometry::point::Point2D;
use crate::geometry::predicates::{in_circle, orientation_determinant};
use crate::geometry::traits::TriangulationQuery;
use std::collections::BTreeMap;

/// `sqrt(3) / 2`
const HALF_SQRT_3: f64 = 0.866_025_403_784_438_6;

/// Unit directions of the super-triangle corners, counterclockwise.
///
/// Any two of them sum to a unit vector.
const DIRECTIONS: [Point2D; 3] = [
    Point2D::new(-HALF_SQRT_3, -0.5),
    Point2D::new(HALF_SQRT_3, -0.5),
    Point2D::new(0.0, 1.0),
];

/// Super-triangle corners at infinity, placed around the bounding circle
/// center of the input.
#[derive(Debug, Clone, Copy)]
struct SuperTriangle {
    /// Index of the first corner; corners are `first`, `first + 1`, `first + 2`
    first: usize,
    center: Point2D,
}

impl SuperTriangle {
    fn enclosing(points: &[Point2D]) -> Self {
        Self {
            first: points.len(),
            center: bounding_circle(&bounding_box(points)).center,
        }
    }

    fn corner(&self, vertex: usize) -> Option<usize> {
        vertex.checked_sub(self.first)
    }

    /// Returns `true` iff `p` lies strictly inside the circumcircle of
    /// `triangle`, some of whose corners may be at infinity.
    fn circumcircle_contains(&self, points: &[Point2D], triangle: Triangle, p: Point2D) -> bool {
        let mut finite = [Point2D::default(); 3];
        let mut corners = [0; 3];
        let (mut finite_count, mut corner_count) = (0, 0);
        for vertex in triangle.vertices() {
            if let Some(corner) = self.corner(vertex) {
                corners[corner_count] = corner;
                corner_count += 1;
            } else {
                finite[finite_count] = points[vertex];
                finite_count += 1;
            }
        }

        match finite_count {
            3 => in_circle(finite[0], finite[1], finite[2], p),
            2 => self.half_plane_contains(finite[0], finite[1], DIRECTIONS[corners[0]], p),
            1 => self.wedge_contains(finite[0], corners[0], corners[1], p),
            _ => true,
        }
    }

    /// Limit of the circle through `a`, `b` and the corner in `direction`:
    /// the open half-plane beyond line `ab` on the corner's side, plus the
    /// open segment `ab` itself.
    fn half_plane_contains(&self, a: Point2D, b: Point2D, direction: Point2D, p: Point2D) -> bool {
        let edge = b - a;
        // Sign of orientation(a, b, center + M * direction) for large M.
        let leading = edge.cross(direction);
        let side = if leading == 0.0 {
            edge.cross(self.center - a)
        } else {
            leading
        };

        let orient = orientation_determinant(a, b, p);
        if orient > 0.0 {
            side > 0.0
        } else if orient < 0.0 {
            side < 0.0
        } else {
            side != 0.0 && (p - a).dot(edge) > 0.0 && (p - b).dot(a - b) > 0.0
        }
    }

    /// Limit of the circle through `a` and corners `s` and `t`: the open
    /// half-plane through `a` facing both corners.
    ///
    /// For every `M` the circle center projects onto the boundary line at the
    /// same point as `center`, so on that line `p` is inside iff it is closer
    /// to that point than `a` is.
    fn wedge_contains(&self, a: Point2D, s: usize, t: usize, p: Point2D) -> bool {
        let normal = Point2D::new(
            DIRECTIONS[s].x + DIRECTIONS[t].x,
            DIRECTIONS[s].y + DIRECTIONS[t].y,
        );
        let offset = p - a;
        let height = offset.dot(normal);
        if height == 0.0 {
            offset.norm_squared() < 2.0 * offset.dot(self.center - a)
        } else {
            height > 0.0
        }
    }
}

/// Delaunay triangulation computed by incremental insertion.
#[derive(Debug, Clone)]
pub struct BowyerWatson {
    points: Vec<Point2D>,
    triangles: Vec<Triangle>,
}

impl BowyerWatson {
    /// Triangulates `points`.
    ///
    /// Triangles are reported with sorted indices, in ascending order.
    /// Zero-area triangles, which only arise from collinear input, are
    /// discarded. A point coinciding with an earlier one lies on, never
    /// inside, every circumcircle and is skipped.
    ///
    /// # Errors
    ///
    /// Returns [`DelaunayError::InvalidInput`] if any coordinate is NaN or
    /// infinite.
    pub fn new(points: &[Point2D]) -> DelaunayResult<Self> {
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(DelaunayError::InvalidInput(format!(
                "point {index} has a non-finite coordinate"
            )));
        }

        let n = points.len();
        let super_triangle = SuperTriangle::enclosing(points);
        let mut triangles = vec![Triangle::new(n, n + 1, n + 2)];
        let mut boundary: BTreeMap<(usize, usize), usize> = BTreeMap::new();
        let mut skipped = 0;

        for (index, &point) in points.iter().enumerate() {
            boundary.clear();
            triangles.retain(|&triangle| {
                let bad = super_triangle.circumcircle_contains(points, triangle, point);
                if bad {
                    for edge in triangle.edges() {
                        *boundary.entry(edge).or_insert(0) += 1;
                    }
                }
                !bad
            });
            if boundary.is_empty() {
                skipped += 1;
                continue;
            }

            triangles.extend(
                boundary
                    .iter()
                    .filter(|&(_, &count)| count == 1)
                    .map(|(&(a, b), _)| Triangle::new(a, b, index).sorted()),
            );
        }

        let before = triangles.len();
        triangles.retain(|triangle| {
            let [a, b, c] = triangle.vertices();
            a < n
                && b < n
                && c < n
                && orientation_determinant(points[a], points[b], points[c]) != 0.0
        });
        triangles.sort_unstable();
        log::debug!(
            "Bowyer-Watson: {} triangles, {} discarded, {} coincident points skipped",
            triangles.len(),
            before - triangles.len(),
            skipped
        );

        Ok(Self {
            points: points.to_vec(),
            triangles,
        })
    }
}

impl TriangulationQuery for BowyerWatson {
    fn backend_name(&self) -> &'static str {
        "bowyer-watson"
    }

    fn vertex_count(&self) -> usize {
        self.points.len()
    }

    fn vertex(&self, index: usize) -> Option<Point2D> {
        self.points.get(index).copied()
    }

    fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }
}
