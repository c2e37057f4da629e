//! Core traits shared by the triangulation algorithms.
//!
//! Both the divide-and-conquer triangulator and the Bowyer-Watson baseline
//! expose their results through [`TriangulationQuery`], so validation,
//! comparison and export code never depends on a particular algorithm.

use super::mesh::Triangle;
use super::point::Point2D;
use std::collections::HashSet;

/// Read-only access to a finished triangulation, in original point indices.
pub trait TriangulationQuery {
    /// Algorithm identifier for logging and diagnostics
    fn backend_name(&self) -> &'static str;

    /// Number of input points
    fn vertex_count(&self) -> usize;

    /// Coordinates of the input point with original index `index`
    fn vertex(&self, index: usize) -> Option<Point2D>;

    /// The emitted triangles
    fn triangles(&self) -> &[Triangle];

    /// Number of emitted triangles
    fn triangle_count(&self) -> usize {
        self.triangles().len()
    }

    /// Number of distinct undirected edges.
    ///
    /// The default derives edges from the triangles, which misses edges that
    /// border no triangle (e.g. on fully collinear input).
    fn edge_count(&self) -> usize {
        self.triangles()
            .iter()
            .flat_map(Triangle::edges)
            .collect::<HashSet<_>>()
            .len()
    }

    /// Euler characteristic V - E + F over the bounded faces
    #[allow(clippy::cast_possible_wrap)]
    fn euler_characteristic(&self) -> i64 {
        let v = self.vertex_count() as i64;
        let e = self.edge_count() as i64;
        let f = self.triangle_count() as i64;
        v - e + f
    }
}
