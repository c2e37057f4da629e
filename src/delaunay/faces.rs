//! Face extraction for a finished quad-edge subdivision.
//!
//! Labels every left-face loop of the subdivision with a face index stored in
//! the dual data slots, and reports each three-vertex loop as a triangle.

use crate::errors::{DelaunayError, DelaunayResult};
use crate::geometry::mesh::Triangle;
use crate::quad_edge::edge_algebra::{EdgeAlgebra, EdgeId, UNSET};

/// Face index reserved for the unbounded exterior face.
pub const EXTERIOR_FACE: usize = 0;

/// Labelled faces of a subdivision.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaceSet {
    /// One representative edge per face, indexed by face id; the face lies on
    /// the representative's left.
    pub faces: Vec<EdgeId>,
    /// Every bounded face with exactly three distinct vertices, counterclockwise,
    /// in original point indices.
    pub triangles: Vec<Triangle>,
}

/// Labels all faces of `algebra`.
///
/// `hull_edge` must have the exterior face on its left; it becomes face
/// [`EXTERIOR_FACE`]. Vertex indices stored in the arena are mapped through
/// `permutation` when triangles are emitted.
///
/// # Errors
///
/// Returns [`DelaunayError::InvariantViolation`] if a left-face loop does not
/// close, which means the arena is corrupt.
pub fn extract_faces(
    algebra: &mut EdgeAlgebra,
    hull_edge: EdgeId,
    permutation: &[usize],
) -> DelaunayResult<FaceSet> {
    let mut face_set = FaceSet::default();

    label_face(algebra, hull_edge, EXTERIOR_FACE)?;
    face_set.faces.push(hull_edge);

    let starts: Vec<EdgeId> = algebra
        .primal_edges()
        .filter(|&e| algebra.onode(e) != algebra.dnode(e))
        .collect();

    for start in starts {
        if algebra.lface(start) != UNSET {
            continue;
        }
        let face = face_set.faces.len();
        let corners = label_face(algebra, start, face)?;
        face_set.faces.push(start);

        if let &[a, b, c] = corners.as_slice()
            && a != b
            && b != c
            && c != a
        {
            face_set.triangles.push(Triangle::new(
                permutation[a],
                permutation[b],
                permutation[c],
            ));
        }
    }

    log::debug!(
        "Labelled {} faces, {} triangles",
        face_set.faces.len(),
        face_set.triangles.len()
    );
    Ok(face_set)
}

/// Walks the left-face loop of `start`, storing `face` on every edge, and
/// returns the origins along the loop.
fn label_face(algebra: &mut EdgeAlgebra, start: EdgeId, face: usize) -> DelaunayResult<Vec<usize>> {
    let limit = 4 * algebra.capacity();
    let mut corners = Vec::new();
    let mut e = start;
    loop {
        algebra.set_lface(e, face);
        corners.push(algebra.onode(e));
        e = algebra.lnext(e);
        if e == start {
            return Ok(corners);
        }
        if corners.len() > limit {
            return Err(DelaunayError::InvariantViolation {
                edge: start.index(),
                invariant: "left-face loop is not closed",
            });
        }
    }
}
