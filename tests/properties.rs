//! Property-based tests for the Guibas-Stolfi triangulator.
//!
//! Random point sets of up to 200 points are triangulated and checked for the
//! empty-circumcircle property, arena consistency and the Euler relations.

use proptest::prelude::*;
use quadedge_delaunay::{
    BowyerWatson, Point2D, TriangulationOps, TriangulationQuery, Triangulator,
};

fn point_sets(max_len: usize) -> impl Strategy<Value = Vec<Point2D>> {
    prop::collection::vec((-1000.0f64..1000.0, -1000.0f64..1000.0), 0..=max_len)
        .prop_map(|coords| coords.into_iter().map(Point2D::from).collect::<Vec<_>>())
}

proptest! {
    /// Property: every emitted triangle has an empty circumcircle
    #[test]
    fn prop_triangulation_is_delaunay(points in point_sets(200)) {
        let triangulator = Triangulator::new(&points).expect("finite input must triangulate");
        prop_assert!(
            triangulator.find_delaunay_violation().is_none(),
            "violation: {:?}",
            triangulator.find_delaunay_violation()
        );
    }

    /// Property: the arena is a consistent subdivision after every build
    #[test]
    fn prop_arena_invariants_hold(points in point_sets(200)) {
        let triangulator = Triangulator::new(&points).expect("finite input must triangulate");
        prop_assert!(triangulator.edge_algebra().validate().is_ok());
    }

    /// Property: triangle and edge counts match the hull size
    #[test]
    fn prop_euler_relations(points in point_sets(200)) {
        let triangulator = Triangulator::new(&points).expect("finite input must triangulate");
        let n = points.len();
        if triangulator.triangle_count() > 0 {
            let h = triangulator.hull().len();
            prop_assert_eq!(triangulator.triangle_count(), 2 * n - h - 2);
            prop_assert_eq!(triangulator.edge_count(), 3 * n - h - 3);
        }
        for triangle in triangulator.triangles() {
            prop_assert!(triangle.vertices().iter().all(|&v| v < n));
        }
    }

    /// Property: both algorithms agree on random input
    #[test]
    fn prop_matches_bowyer_watson(points in point_sets(60)) {
        let guibas_stolfi = Triangulator::new(&points).expect("finite input must triangulate");
        let bowyer_watson = BowyerWatson::new(&points).expect("finite input must triangulate");
        prop_assert_eq!(
            guibas_stolfi.canonical_triangles(),
            bowyer_watson.canonical_triangles()
        );
    }

    /// Property: rebuilding the same input gives identical output
    #[test]
    fn prop_deterministic(points in point_sets(100)) {
        let a = Triangulator::new(&points).expect("finite input must triangulate");
        let b = Triangulator::new(&points).expect("finite input must triangulate");
        prop_assert_eq!(a.triangles(), b.triangles());
    }
}
