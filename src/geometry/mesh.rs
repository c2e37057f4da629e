//! Algorithm-agnostic mesh data structures.
//!
//! These types describe a finished triangulation in terms of the caller's
//! original point indices, independent of how it was computed.

use super::point::Point2D;
use serde::{Deserialize, Serialize};

/// A triangle given by three original point indices.
///
/// Triangles produced by the divide-and-conquer builder are stored
/// counterclockwise; the Bowyer-Watson baseline stores them sorted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Triangle(pub [usize; 3]);

impl Triangle {
    /// Creates a triangle from three point indices.
    #[must_use]
    pub const fn new(a: usize, b: usize, c: usize) -> Self {
        Self([a, b, c])
    }

    /// The three point indices.
    #[must_use]
    pub const fn vertices(&self) -> [usize; 3] {
        self.0
    }

    /// Canonical form with indices in ascending order.
    #[must_use]
    pub fn sorted(self) -> Self {
        let mut vertices = self.0;
        vertices.sort_unstable();
        Self(vertices)
    }

    /// Returns `true` if `vertex` is a corner of this triangle.
    #[must_use]
    pub fn contains(&self, vertex: usize) -> bool {
        self.0.contains(&vertex)
    }

    /// The three undirected edges, each as `(smaller, larger)`.
    #[must_use]
    pub fn edges(&self) -> [(usize, usize); 3] {
        let [a, b, c] = self.0;
        [(a, b), (b, c), (c, a)].map(|(p, q)| (p.min(q), p.max(q)))
    }
}

impl From<[usize; 3]> for Triangle {
    fn from(vertices: [usize; 3]) -> Self {
        Self(vertices)
    }
}

/// An undirected edge in the mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    /// Indices of the two vertices forming this edge, smaller first
    pub vertex_indices: (usize, usize),
}

impl Edge {
    /// Creates an edge, normalising the endpoint order.
    #[must_use]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            vertex_indices: (a.min(b), a.max(b)),
        }
    }
}

/// Complete mesh representation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Mesh {
    /// All vertices, in the caller's original order
    pub vertices: Vec<Point2D>,
    /// All edges in the mesh
    pub edges: Vec<Edge>,
    /// All triangles in the mesh
    pub faces: Vec<Triangle>,
}

impl Mesh {
    /// Create a new empty mesh
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Get the number of vertices
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of edges
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Get the number of faces
    #[must_use]
    pub const fn face_count(&self) -> usize {
        self.faces.len()
    }
}
