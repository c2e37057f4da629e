//! Divide-and-conquer Delaunay triangulation (Guibas-Stolfi).
//!
//! # Algorithm Overview
//!
//! 1. **Sort**: the input is sorted once by `x`, then `y`; a permutation maps
//!    sorted indices back to the caller's indices. Coincident points collapse
//!    into one vertex before the build.
//! 2. **Recurse**: ranges of two or three points are triangulated directly;
//!    larger ranges are split at the midpoint and both halves triangulated.
//! 3. **Merge**: the lower common tangent of the two hulls becomes the first
//!    cross edge. Cross edges are then added bottom to top, each time picking
//!    the left or right candidate whose circumcircle test wins, and deleting
//!    candidate edges that the new cross edge would make non-Delaunay.
//! 4. **Extract**: once the top-level merge returns, the left-face loops of the
//!    arena are labelled and the triangles reported in original indices.
//!
//! Every recursion level returns the pair `(ldo, rdo)`: the counterclockwise
//! hull edge leaving the leftmost vertex and the clockwise hull edge leaving
//! the rightmost vertex.
//!
//! Expected running time is O(n log n); recursion depth is O(log n).

use super::faces::{EXTERIOR_FACE, FaceSet, extract_faces};
use crate::errors::{DelaunayError, DelaunayResult};
use crate::geometry::mesh::{Edge, Triangle};
use crate::geometry::point::Point2D;
use crate::geometry::predicates::{in_circle, orientation};
use crate::geometry::traits::TriangulationQuery;
use crate::quad_edge::edge_algebra::{EdgeAlgebra, EdgeId};

/// Delaunay triangulation of a planar point set.
///
/// Constructed once from the input; read-only afterwards. Coincident input
/// points share one arena vertex, reported under the lowest original index
/// among them; every original index still resolves through [`TriangulationQuery::vertex`].
#[derive(Debug, Clone)]
pub struct Triangulator {
    algebra: EdgeAlgebra,
    /// Distinct input points in sorted order
    vertices: Vec<Point2D>,
    /// Sorted position -> original index, covering every input point
    permutation: Vec<usize>,
    /// Distinct vertex -> original index it is reported as
    representatives: Vec<usize>,
    /// Original index -> distinct vertex
    inverse: Vec<usize>,
    faces: FaceSet,
    hull_edge: Option<EdgeId>,
}

impl Triangulator {
    /// Triangulates `points`.
    ///
    /// # Errors
    ///
    /// Returns [`DelaunayError::InvalidInput`] if any coordinate is NaN or
    /// infinite, and [`DelaunayError::InvariantViolation`] if the quad-edge
    /// arena ends up corrupt (a defect, never expected).
    pub fn new(points: &[Point2D]) -> DelaunayResult<Self> {
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(DelaunayError::InvalidInput(format!(
                "point {index} has a non-finite coordinate"
            )));
        }

        let mut permutation: Vec<usize> = (0..points.len()).collect();
        permutation.sort_by_key(|&i| points[i].sort_key());

        // Stable sort: the first of each run of coincident points has the lowest index.
        let mut vertices: Vec<Point2D> = Vec::with_capacity(points.len());
        let mut representatives = Vec::with_capacity(points.len());
        let mut inverse = vec![0; points.len()];
        for &original in &permutation {
            let point = points[original];
            if vertices.last() != Some(&point) {
                vertices.push(point);
                representatives.push(original);
            }
            inverse[original] = vertices.len() - 1;
        }

        let duplicates = points.len() - vertices.len();
        if duplicates > 0 {
            log::debug!("Collapsed {duplicates} coincident points");
        }

        let mut triangulator = Self {
            // A planar triangulation has at most 3n - 6 edges.
            algebra: EdgeAlgebra::with_capacity(3 * vertices.len()),
            vertices,
            permutation,
            representatives,
            inverse,
            faces: FaceSet::default(),
            hull_edge: None,
        };
        triangulator.build()?;
        Ok(triangulator)
    }

    /// Triangulates any sequence of values convertible into [`Point2D`].
    ///
    /// # Errors
    ///
    /// Same as [`Triangulator::new`].
    pub fn from_points<P>(points: &[P]) -> DelaunayResult<Self>
    where
        P: Into<Point2D> + Copy,
    {
        let points: Vec<Point2D> = points.iter().map(|&p| p.into()).collect();
        Self::new(&points)
    }

    fn build(&mut self) -> DelaunayResult<()> {
        let n = self.vertices.len();
        if n < 2 {
            log::debug!("{n} distinct points: nothing to triangulate");
            return Ok(());
        }

        let (_, rdo) = self.triangulate(0, n)?;
        // The clockwise hull edge out of the rightmost vertex has the exterior on its left.
        self.hull_edge = Some(rdo);
        self.faces = extract_faces(&mut self.algebra, rdo, &self.representatives)?;

        if cfg!(debug_assertions) {
            self.algebra.validate()?;
        }

        log::debug!(
            "Triangulated {} distinct points: {} live edges, {} recycled bundles, {} faces",
            n,
            self.algebra.live_edge_count(),
            self.algebra.free_count(),
            self.faces.faces.len()
        );
        if n >= 3 && self.faces.triangles.is_empty() {
            log::warn!("{n} points produced no triangle; the input is collinear or degenerate");
        }
        Ok(())
    }

    // Predicates on sorted vertex indices

    fn ccw(&self, i: usize, j: usize, k: usize) -> bool {
        orientation(self.vertices[i], self.vertices[j], self.vertices[k])
    }

    fn right_of(&self, vertex: usize, e: EdgeId) -> bool {
        self.ccw(vertex, self.algebra.dnode(e), self.algebra.onode(e))
    }

    fn left_of(&self, vertex: usize, e: EdgeId) -> bool {
        self.ccw(vertex, self.algebra.onode(e), self.algebra.dnode(e))
    }

    fn in_circle(&self, i: usize, j: usize, k: usize, l: usize) -> bool {
        in_circle(
            self.vertices[i],
            self.vertices[j],
            self.vertices[k],
            self.vertices[l],
        )
    }

    /// A candidate is usable while its far end lies above the base edge.
    fn is_valid_candidate(&self, candidate: EdgeId, base: EdgeId) -> bool {
        self.right_of(self.algebra.dnode(candidate), base)
    }

    /// Triangulates the sorted range `first..last` and returns `(ldo, rdo)`.
    fn triangulate(&mut self, first: usize, last: usize) -> DelaunayResult<(EdgeId, EdgeId)> {
        let size = last.saturating_sub(first);
        match size {
            0 | 1 => Err(DelaunayError::InvalidRange { first, last }),
            2 => Ok(self.triangulate_segment(first)),
            3 => Ok(self.triangulate_triangle(first)),
            _ => {
                let half = first + size / 2;
                let left = self.triangulate(first, half)?;
                let right = self.triangulate(half, last)?;
                Ok(self.merge(left, right))
            }
        }
    }

    fn triangulate_segment(&mut self, first: usize) -> (EdgeId, EdgeId) {
        let a = self.algebra.make_edge();
        self.algebra.set_onode(a, first);
        self.algebra.set_dnode(a, first + 1);
        (a, a.sym())
    }

    fn triangulate_triangle(&mut self, first: usize) -> (EdgeId, EdgeId) {
        let a = self.algebra.make_edge();
        let b = self.algebra.make_edge();
        self.algebra.splice(a.sym(), b);
        self.algebra.set_onode(a, first);
        self.algebra.set_dnode(a, first + 1);
        self.algebra.set_onode(b, first + 1);
        self.algebra.set_dnode(b, first + 2);

        if self.ccw(first, first + 1, first + 2) {
            self.algebra.connect(b, a);
            (a, b.sym())
        } else if self.ccw(first, first + 2, first + 1) {
            let c = self.algebra.connect(b, a);
            (c.sym(), c)
        } else {
            // Collinear: leave the open path.
            (a, b.sym())
        }
    }

    fn merge(
        &mut self,
        (mut ldo, mut ldi): (EdgeId, EdgeId),
        (mut rdi, mut rdo): (EdgeId, EdgeId),
    ) -> (EdgeId, EdgeId) {
        // Lower common tangent.
        loop {
            if self.left_of(self.algebra.onode(rdi), ldi) {
                ldi = self.algebra.lnext(ldi);
            } else if self.right_of(self.algebra.onode(ldi), rdi) {
                rdi = self.algebra.rprev(rdi);
            } else {
                break;
            }
        }

        let mut base = self.algebra.connect(rdi.sym(), ldi);
        if self.algebra.onode(ldi) == self.algebra.onode(ldo) {
            ldo = base.sym();
        }
        if self.algebra.onode(rdi) == self.algebra.onode(rdo) {
            rdo = base;
        }

        loop {
            let mut lcand = self.algebra.onext(base.sym());
            if self.is_valid_candidate(lcand, base) {
                loop {
                    let next = self.algebra.onext(lcand);
                    if !(self.is_valid_candidate(next, base)
                        && self.in_circle(
                            self.algebra.dnode(base),
                            self.algebra.onode(base),
                            self.algebra.dnode(lcand),
                            self.algebra.dnode(next),
                        ))
                    {
                        break;
                    }
                    self.algebra.remove(lcand);
                    lcand = next;
                }
            }

            let mut rcand = self.algebra.oprev(base);
            if self.is_valid_candidate(rcand, base) {
                loop {
                    let next = self.algebra.oprev(rcand);
                    if !(self.is_valid_candidate(next, base)
                        && self.in_circle(
                            self.algebra.dnode(base),
                            self.algebra.onode(base),
                            self.algebra.dnode(rcand),
                            self.algebra.dnode(next),
                        ))
                    {
                        break;
                    }
                    self.algebra.remove(rcand);
                    rcand = next;
                }
            }

            let lvalid = self.is_valid_candidate(lcand, base);
            let rvalid = self.is_valid_candidate(rcand, base);
            if !lvalid && !rvalid {
                break;
            }

            base = if !lvalid
                || (rvalid
                    && self.in_circle(
                        self.algebra.dnode(lcand),
                        self.algebra.onode(lcand),
                        self.algebra.onode(rcand),
                        self.algebra.dnode(rcand),
                    )) {
                self.algebra.connect(rcand, base.sym())
            } else {
                self.algebra.connect(base.sym(), lcand.sym())
            };
            log::trace!(
                "cross edge {} -> {}",
                self.algebra.onode(base),
                self.algebra.dnode(base)
            );
        }

        (ldo, rdo)
    }

    // Queries

    /// Triangles in original point indices, each counterclockwise.
    #[must_use]
    pub fn triangles(&self) -> &[Triangle] {
        &self.faces.triangles
    }

    /// The distinct input points in the order the builder processed them.
    #[must_use]
    pub fn sorted_vertices(&self) -> &[Point2D] {
        &self.vertices
    }

    /// Maps sorted positions to original point indices.
    ///
    /// Covers every input point, coincident ones included, in stable
    /// `(x, y)` order.
    #[must_use]
    pub fn permutation(&self) -> &[usize] {
        &self.permutation
    }

    /// Original index under which point `index` appears in the output.
    ///
    /// This is `index` itself unless an earlier input point has the same
    /// coordinates.
    #[must_use]
    pub fn representative(&self, index: usize) -> Option<usize> {
        self.inverse
            .get(index)
            .map(|&vertex| self.representatives[vertex])
    }

    /// Read-only access to the quad-edge arena.
    #[must_use]
    pub const fn edge_algebra(&self) -> &EdgeAlgebra {
        &self.algebra
    }

    /// Edge with the exterior face on its left, if any edge exists.
    #[must_use]
    pub const fn hull_edge(&self) -> Option<EdgeId> {
        self.hull_edge
    }

    /// Number of faces including the exterior face; zero when there are no edges.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.faces.len()
    }

    /// Vertices met walking the exterior face, in original indices.
    ///
    /// For points in convex position this is the hull in clockwise order.
    /// Collinear hull points are included; on fully collinear input interior
    /// points appear twice, once per side of the path.
    #[must_use]
    pub fn hull(&self) -> Vec<usize> {
        let Some(start) = self.hull_edge else {
            return Vec::new();
        };
        debug_assert_eq!(self.algebra.lface(start), EXTERIOR_FACE);
        let mut hull = Vec::new();
        let mut e = start;
        loop {
            hull.push(self.representatives[self.algebra.onode(e)]);
            e = self.algebra.lnext(e);
            if e == start {
                return hull;
            }
        }
    }

    /// Live undirected edges in original indices.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.algebra
            .primal_edges()
            .filter(|e| e.rotation() == 0)
            .map(|e| {
                Edge::new(
                    self.representatives[self.algebra.onode(e)],
                    self.representatives[self.algebra.dnode(e)],
                )
            })
    }
}

impl TriangulationQuery for Triangulator {
    fn backend_name(&self) -> &'static str {
        "guibas-stolfi"
    }

    fn vertex_count(&self) -> usize {
        self.inverse.len()
    }

    fn vertex(&self, index: usize) -> Option<Point2D> {
        self.inverse.get(index).map(|&sorted| self.vertices[sorted])
    }

    fn triangles(&self) -> &[Triangle] {
        &self.faces.triangles
    }

    fn edge_count(&self) -> usize {
        self.algebra.live_edge_count()
    }
}

/// Convenience wrapper returning only the triangles.
///
/// # Errors
///
/// Same as [`Triangulator::new`].
pub fn triangulation(points: &[Point2D]) -> DelaunayResult<Vec<Triangle>> {
    Ok(Triangulator::new(points)?.faces.triangles)
}
