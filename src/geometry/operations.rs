//! High-level triangulation operations.
//!
//! This module provides validation, comparison and export operations that
//! work across every [`TriangulationQuery`] implementation.

use super::mesh::{Edge, Mesh, Triangle};
use super::predicates::in_circle;
use super::traits::TriangulationQuery;
use crate::errors::{DelaunayError, DelaunayResult};
use std::collections::BTreeSet;

/// Common utility operations for triangulations
pub trait TriangulationOps: TriangulationQuery {
    /// Finds a triangle whose circumcircle strictly contains another input point.
    ///
    /// Exhaustive O(triangles * points) scan, intended for tests and small inputs.
    fn find_delaunay_violation(&self) -> Option<(Triangle, usize)> {
        let n = self.vertex_count();
        self.triangles().iter().find_map(|&triangle| {
            let [a, b, c] = triangle.vertices();
            let (pa, pb, pc) = (self.vertex(a)?, self.vertex(b)?, self.vertex(c)?);
            (0..n)
                .filter(|&s| !triangle.contains(s))
                .find(|&s| self.vertex(s).is_some_and(|ps| in_circle(pa, pb, pc, ps)))
                .map(|s| (triangle, s))
        })
    }

    /// Check if the triangulation satisfies the empty-circumcircle property
    fn is_delaunay(&self) -> bool {
        self.find_delaunay_violation().is_none()
    }

    /// Validates the empty-circumcircle property.
    ///
    /// # Errors
    ///
    /// Returns [`DelaunayError::NotDelaunay`] for the first offending triangle.
    fn validate_delaunay(&self) -> DelaunayResult<()> {
        match self.find_delaunay_violation() {
            Some((triangle, point)) => Err(DelaunayError::NotDelaunay {
                triangle: triangle.vertices(),
                point,
            }),
            None => Ok(()),
        }
    }

    /// Triangles as sorted index triples, in ascending order
    fn canonical_triangles(&self) -> Vec<Triangle> {
        let mut triangles: Vec<_> = self.triangles().iter().map(|t| t.sorted()).collect();
        triangles.sort_unstable();
        triangles
    }

    /// Returns `true` if both triangulations contain the same multiset of triangles
    fn same_triangles_as<O: TriangulationQuery + ?Sized>(&self, other: &O) -> bool {
        let mut theirs: Vec<_> = other.triangles().iter().map(|t| t.sorted()).collect();
        theirs.sort_unstable();
        self.canonical_triangles() == theirs
    }

    /// Exports the triangulation as a self-contained mesh
    fn to_mesh(&self) -> Mesh {
        let edges: BTreeSet<_> = self
            .triangles()
            .iter()
            .flat_map(Triangle::edges)
            .map(|(a, b)| Edge::new(a, b))
            .collect();
        Mesh {
            vertices: (0..self.vertex_count())
                .filter_map(|i| self.vertex(i))
                .collect(),
            edges: edges.into_iter().collect(),
            faces: self.triangles().to_vec(),
        }
    }
}

// Blanket implementation for all types that implement TriangulationQuery
impl<T: TriangulationQuery + ?Sized> TriangulationOps for T {}
