//! Quad-edge arena.
//!
//! Each undirected edge is stored as a bundle of four directed edge records.
//! A directed edge is addressed by an [`EdgeId`]: the bundle index shifted
//! left by two, with the low two bits selecting the rotation.
//!
//! | rotation | meaning                                   |
//! |---|---|
//! | 0 | primal edge, origin -> destination            |
//! | 1 | dual edge, right face -> left face            |
//! | 2 | symmetric primal edge, destination -> origin  |
//! | 3 | dual edge, left face -> right face            |
//!
//! Every record stores the next edge counterclockwise around its origin and
//! one data slot: a vertex index for primal records, a face index for dual
//! records. All traversals are compositions of [`EdgeId::rot`] and
//! [`EdgeAlgebra::onext`]; nothing else is stored.
//!
//! Guibas, L. and Stolfi, J. "Primitives for the manipulation of general
//! subdivisions and the computation of Voronoi diagrams."
//! *ACM Transactions on Graphics* 4.2 (1985): 74-123.

use crate::errors::{DelaunayError, DelaunayResult};
use std::fmt;

/// Marks a data slot that holds neither a vertex nor a face.
pub const UNSET: usize = usize::MAX;

const ROTATION_MASK: usize = 0b11;
const BUNDLE_MASK: usize = !ROTATION_MASK;

/// Handle of one directed edge inside the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(usize);

impl EdgeId {
    /// Builds the handle for `rotation` of bundle `bundle`.
    #[must_use]
    pub const fn new(bundle: usize, rotation: usize) -> Self {
        Self((bundle << 2) | (rotation & ROTATION_MASK))
    }

    /// Raw handle value.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Index of the bundle this edge belongs to.
    #[must_use]
    pub const fn bundle(self) -> usize {
        self.0 >> 2
    }

    /// Rotation of this edge inside its bundle, in `0..4`.
    #[must_use]
    pub const fn rotation(self) -> usize {
        self.0 & ROTATION_MASK
    }

    /// Rotates by `n` quarter turns counterclockwise within the same bundle.
    #[must_use]
    pub const fn rotate(self, n: usize) -> Self {
        Self((self.0 & BUNDLE_MASK) | (self.0.wrapping_add(n) & ROTATION_MASK))
    }

    /// Dual edge pointing from the right face to the left face.
    #[must_use]
    pub const fn rot(self) -> Self {
        self.rotate(1)
    }

    /// Inverse of [`EdgeId::rot`].
    #[must_use]
    pub const fn rot_inv(self) -> Self {
        self.rotate(3)
    }

    /// The same undirected edge, reversed.
    #[must_use]
    pub const fn sym(self) -> Self {
        self.rotate(2)
    }

    /// Returns `true` for rotations 0 and 2.
    #[must_use]
    pub const fn is_primal(self) -> bool {
        self.0 & 1 == 0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.bundle(), self.rotation())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EdgeRecord {
    next: EdgeId,
    data: usize,
}

/// Four directed edge records sharing one allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
struct QuadEdge {
    records: [EdgeRecord; 4],
}

impl QuadEdge {
    /// Rings of an isolated edge: each primal record is alone around its
    /// vertex and the two dual records circle the single face.
    fn isolated(bundle: usize) -> Self {
        let id = |rotation| EdgeId::new(bundle, rotation);
        Self {
            records: [
                EdgeRecord {
                    next: id(0),
                    data: UNSET,
                },
                EdgeRecord {
                    next: id(3),
                    data: UNSET,
                },
                EdgeRecord {
                    next: id(2),
                    data: UNSET,
                },
                EdgeRecord {
                    next: id(1),
                    data: UNSET,
                },
            ],
        }
    }
}

/// Arena of quad-edge bundles with a free list for reuse.
#[derive(Debug, Clone, Default)]
pub struct EdgeAlgebra {
    quad_edges: Vec<QuadEdge>,
    free_edges: Vec<usize>,
}

impl EdgeAlgebra {
    /// Creates an empty arena.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            quad_edges: Vec::new(),
            free_edges: Vec::new(),
        }
    }

    /// Creates an empty arena with room for `bundles` edges.
    #[must_use]
    pub fn with_capacity(bundles: usize) -> Self {
        Self {
            quad_edges: Vec::with_capacity(bundles),
            free_edges: Vec::new(),
        }
    }

    fn record(&self, e: EdgeId) -> &EdgeRecord {
        &self.quad_edges[e.bundle()].records[e.rotation()]
    }

    fn record_mut(&mut self, e: EdgeId) -> &mut EdgeRecord {
        &mut self.quad_edges[e.bundle()].records[e.rotation()]
    }

    // Navigation

    /// Next edge counterclockwise around the origin.
    #[must_use]
    pub fn onext(&self, e: EdgeId) -> EdgeId {
        self.record(e).next
    }

    /// Next edge clockwise around the origin.
    #[must_use]
    pub fn oprev(&self, e: EdgeId) -> EdgeId {
        self.onext(e.rot()).rot()
    }

    /// Next edge counterclockwise around the destination.
    #[must_use]
    pub fn dnext(&self, e: EdgeId) -> EdgeId {
        self.onext(e.sym()).sym()
    }

    /// Next edge clockwise around the destination.
    #[must_use]
    pub fn dprev(&self, e: EdgeId) -> EdgeId {
        self.onext(e.rot_inv()).rot_inv()
    }

    /// Next edge counterclockwise around the left face.
    #[must_use]
    pub fn lnext(&self, e: EdgeId) -> EdgeId {
        self.onext(e.rot_inv()).rot()
    }

    /// Previous edge around the left face.
    #[must_use]
    pub fn lprev(&self, e: EdgeId) -> EdgeId {
        self.onext(e).sym()
    }

    /// Next edge counterclockwise around the right face.
    #[must_use]
    pub fn rnext(&self, e: EdgeId) -> EdgeId {
        self.onext(e.rot()).rot_inv()
    }

    /// Previous edge around the right face.
    #[must_use]
    pub fn rprev(&self, e: EdgeId) -> EdgeId {
        self.onext(e.sym())
    }

    // Data slots

    /// Vertex at the origin of `e`.
    #[must_use]
    pub fn onode(&self, e: EdgeId) -> usize {
        self.record(e).data
    }

    /// Vertex at the destination of `e`.
    #[must_use]
    pub fn dnode(&self, e: EdgeId) -> usize {
        self.onode(e.sym())
    }

    /// Face on the left of `e`.
    #[must_use]
    pub fn lface(&self, e: EdgeId) -> usize {
        self.onode(e.rot_inv())
    }

    /// Face on the right of `e`.
    #[must_use]
    pub fn rface(&self, e: EdgeId) -> usize {
        self.onode(e.rot())
    }

    /// Sets the origin vertex of `e`.
    pub fn set_onode(&mut self, e: EdgeId, vertex: usize) {
        self.record_mut(e).data = vertex;
    }

    /// Sets the destination vertex of `e`.
    pub fn set_dnode(&mut self, e: EdgeId, vertex: usize) {
        self.set_onode(e.sym(), vertex);
    }

    /// Sets the face on the left of `e`.
    pub fn set_lface(&mut self, e: EdgeId, face: usize) {
        self.set_onode(e.rot_inv(), face);
    }

    /// Sets the face on the right of `e`.
    pub fn set_rface(&mut self, e: EdgeId, face: usize) {
        self.set_onode(e.rot(), face);
    }

    // Mutation

    /// Allocates an isolated edge, reusing a freed bundle when one is available.
    pub fn make_edge(&mut self) -> EdgeId {
        let bundle = if let Some(bundle) = self.free_edges.pop() {
            self.quad_edges[bundle] = QuadEdge::isolated(bundle);
            bundle
        } else {
            let bundle = self.quad_edges.len();
            self.quad_edges.push(QuadEdge::isolated(bundle));
            bundle
        };
        EdgeId::new(bundle, 0)
    }

    /// Merges the origin rings of `a` and `b` if they are distinct, splits
    /// them otherwise. The dual rings are updated accordingly. Applying the
    /// same splice twice restores the original subdivision.
    pub fn splice(&mut self, a: EdgeId, b: EdgeId) {
        let alpha = self.onext(a).rot();
        let beta = self.onext(b).rot();

        let a_next = self.onext(a);
        let b_next = self.onext(b);
        let alpha_next = self.onext(alpha);
        let beta_next = self.onext(beta);

        self.record_mut(a).next = b_next;
        self.record_mut(b).next = a_next;
        self.record_mut(alpha).next = beta_next;
        self.record_mut(beta).next = alpha_next;
    }

    /// Adds an edge from the destination of `a` to the origin of `b` so that
    /// `a`, the new edge and `b` share the same left face.
    pub fn connect(&mut self, a: EdgeId, b: EdgeId) -> EdgeId {
        let e = self.make_edge();
        self.set_onode(e, self.dnode(a));
        self.set_dnode(e, self.onode(b));
        self.splice(e, self.lnext(a));
        self.splice(e.sym(), b);
        e
    }

    /// Detaches `e` from the subdivision and releases its bundle.
    ///
    /// The bundle is poisoned before it goes to the free list: its data slots
    /// are cleared and its rings reset to the isolated pattern.
    pub fn remove(&mut self, e: EdgeId) {
        self.splice(e, self.oprev(e));
        self.splice(e.sym(), self.oprev(e.sym()));
        let bundle = e.bundle();
        self.quad_edges[bundle] = QuadEdge::isolated(bundle);
        self.free_edges.push(bundle);
    }

    /// Turns `e` counterclockwise inside the quadrilateral formed by its two
    /// adjacent faces, so that it joins the other pair of opposite corners.
    pub fn flip(&mut self, e: EdgeId) {
        let a = self.oprev(e);
        let b = self.oprev(e.sym());
        self.splice(e, a);
        self.splice(e.sym(), b);
        self.splice(e, self.lnext(a));
        self.splice(e.sym(), self.lnext(b));
        self.set_onode(e, self.dnode(a));
        self.set_dnode(e, self.dnode(b));
    }

    // Bookkeeping

    /// Number of bundles ever allocated, live or free.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.quad_edges.len()
    }

    /// Number of bundles waiting on the free list.
    #[must_use]
    pub const fn free_count(&self) -> usize {
        self.free_edges.len()
    }

    /// Number of bundles currently in use.
    #[must_use]
    pub const fn live_edge_count(&self) -> usize {
        self.quad_edges.len() - self.free_edges.len()
    }

    /// Returns `true` if the bundle holding `e` carries a vertex at both ends.
    #[must_use]
    pub fn is_live(&self, e: EdgeId) -> bool {
        let primal = EdgeId::new(e.bundle(), 0);
        e.bundle() < self.quad_edges.len()
            && self.onode(primal) != UNSET
            && self.dnode(primal) != UNSET
    }

    /// Iterates over every primal directed edge (both directions) of every
    /// live bundle.
    pub fn primal_edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.quad_edges.len())
            .flat_map(|bundle| [EdgeId::new(bundle, 0), EdgeId::new(bundle, 2)])
            .filter(|&e| self.is_live(e))
    }

    /// Checks the structural invariants of every live bundle.
    ///
    /// # Errors
    ///
    /// Returns [`DelaunayError::InvariantViolation`] naming the first broken
    /// invariant and the edge it was detected on.
    pub fn validate(&self) -> DelaunayResult<()> {
        let violation = |edge: EdgeId, invariant: &'static str| {
            Err(DelaunayError::InvariantViolation {
                edge: edge.index(),
                invariant,
            })
        };
        let ring_limit = 4 * self.quad_edges.len();

        for bundle in 0..self.quad_edges.len() {
            let primal = EdgeId::new(bundle, 0);
            if !self.is_live(primal) {
                if self.onode(primal) != self.dnode(primal) {
                    return violation(primal, "released bundle still carries a vertex");
                }
                continue;
            }

            for rotation in 0..4 {
                let e = EdgeId::new(bundle, rotation);
                if e.sym().sym() != e {
                    return violation(e, "sym(sym(e)) != e");
                }
                if self.onode(e) != self.dnode(e.sym()) {
                    return violation(e, "origin(e) != destination(sym(e))");
                }

                let next = self.onext(e);
                if next.bundle() >= self.quad_edges.len() || !self.is_live(next) {
                    return violation(e, "onext points outside the live arena");
                }
                if next.is_primal() != e.is_primal() {
                    return violation(e, "onext mixes primal and dual edges");
                }
                if self.oprev(next) != e {
                    return violation(e, "oprev(onext(e)) != e");
                }

                let mut walker = next;
                let mut steps = 1;
                while walker != e {
                    if e.is_primal() && self.onode(walker) != self.onode(e) {
                        return violation(e, "origin ring mixes vertices");
                    }
                    walker = self.onext(walker);
                    steps += 1;
                    if steps > ring_limit {
                        return violation(e, "origin ring is not closed");
                    }
                }
            }
        }

        for &bundle in &self.free_edges {
            if self.is_live(EdgeId::new(bundle, 0)) {
                return violation(EdgeId::new(bundle, 0), "free bundle is still live");
            }
        }

        Ok(())
    }
}

impl fmt::Display for EdgeAlgebra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = |value: usize| {
            if value == UNSET {
                "-".to_string()
            } else {
                value.to_string()
            }
        };
        for (bundle, quad_edge) in self.quad_edges.iter().enumerate() {
            write!(f, "{bundle:>6}:")?;
            for record in &quad_edge.records {
                write!(f, " {:>8} {:>6}", record.next.to_string(), slot(record.data))?;
            }
            writeln!(f)?;
        }
        write!(
            f,
            "live edges = {}, free edges = {}",
            self.live_edge_count(),
            self.free_count()
        )
    }
}
