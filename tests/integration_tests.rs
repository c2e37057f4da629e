//! Integration tests for the triangulation library.
//!
//! These tests exercise complete builds on concrete and random point sets and
//! check the combinatorial and geometric properties every Delaunay
//! triangulation must have, plus agreement with the Bowyer-Watson baseline.

use quadedge_delaunay::util::generate_random_points;
use quadedge_delaunay::{
    BowyerWatson, EdgeAlgebra, Point2D, Triangle, TriangulationOps, TriangulationQuery,
    Triangulator, triangulation,
};

fn points(coords: &[(f64, f64)]) -> Vec<Point2D> {
    coords.iter().map(|&c| Point2D::from(c)).collect()
}

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_unit_square() {
        let input = points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        let first = Triangulator::new(&input).expect("Failed to triangulate square");

        assert_eq!(first.triangle_count(), 2);
        for vertex in 0..4 {
            assert!(
                first.triangles().iter().any(|t| t.contains(vertex)),
                "vertex {vertex} must be covered"
            );
        }
        assert!(first.is_delaunay());

        // Either diagonal is acceptable, but the choice must be stable.
        let second = Triangulator::new(&input).expect("Failed to triangulate square");
        assert_eq!(first.triangles(), second.triangles());
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(triangulation(&[]).expect("empty input").is_empty());
        assert!(
            triangulation(&points(&[(0.5, 0.5)]))
                .expect("single point")
                .is_empty()
        );
        assert!(
            triangulation(&points(&[(0.0, 0.0), (1.0, 1.0)]))
                .expect("two points")
                .is_empty()
        );
        assert!(
            triangulation(&points(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]))
                .expect("collinear points")
                .is_empty()
        );

        let triangles =
            triangulation(&points(&[(0.0, 0.0), (2.0, 0.0), (1.0, 3.0)])).expect("triangle");
        assert_eq!(triangles.len(), 1);
        assert_eq!(triangles[0].sorted(), Triangle::new(0, 1, 2));
    }

    #[test]
    fn test_eight_collinear_points() {
        let input: Vec<Point2D> = (0..8)
            .rev()
            .map(|i| Point2D::new(0.5 * f64::from(i), 1.0 - 0.25 * f64::from(i)))
            .collect();
        let triangulator = Triangulator::new(&input).expect("collinear input is tolerated");

        assert!(triangulator.triangles().is_empty());
        assert_eq!(triangulator.edge_count(), 7);
        // Both sides of the path belong to the exterior face.
        assert_eq!(triangulator.face_count(), 1);
        assert_eq!(triangulator.hull().len(), 14);
    }

    #[test]
    fn test_euler_characteristic_on_random_points() {
        for seed in [1, 2, 3, 42, 1234] {
            let input = generate_random_points(500, (0.0, 1.0), Some(seed))
                .expect("Failed to generate points");
            let triangulator = Triangulator::new(&input).expect("Failed to triangulate");

            let n = input.len();
            let h = triangulator.hull().len();
            assert_eq!(triangulator.triangle_count(), 2 * n - h - 2, "seed {seed}");
            assert_eq!(triangulator.edge_count(), 3 * n - h - 3, "seed {seed}");
            assert_eq!(triangulator.euler_characteristic(), 1, "seed {seed}");
            // Interior triangles plus the exterior face.
            assert_eq!(triangulator.face_count(), triangulator.triangle_count() + 1);
        }
    }

    #[test]
    fn test_delaunay_validity_on_random_points() {
        let input =
            generate_random_points(200, (-10.0, 10.0), Some(7)).expect("Failed to generate points");
        let triangulator = Triangulator::new(&input).expect("Failed to triangulate");
        assert!(triangulator.validate_delaunay().is_ok());
        assert!(triangulator.edge_algebra().validate().is_ok());
    }

    #[test]
    fn test_determinism() {
        let input =
            generate_random_points(1000, (0.0, 1.0), Some(99)).expect("Failed to generate points");
        let a = Triangulator::new(&input).expect("Failed to triangulate");
        let b = Triangulator::new(&input).expect("Failed to triangulate");
        assert_eq!(a.triangles(), b.triangles());
        assert_eq!(a.hull(), b.hull());
    }

    #[test]
    fn test_cross_check_with_bowyer_watson() {
        let input =
            generate_random_points(50, (0.0, 1.0), Some(2024)).expect("Failed to generate points");
        let guibas_stolfi = Triangulator::new(&input).expect("Failed to triangulate");
        let bowyer_watson = BowyerWatson::new(&input).expect("Failed to triangulate");

        assert_eq!(
            guibas_stolfi.canonical_triangles(),
            bowyer_watson.canonical_triangles()
        );
        assert!(guibas_stolfi.same_triangles_as(&bowyer_watson));
        assert_eq!(guibas_stolfi.edge_count(), bowyer_watson.edge_count());
    }

    #[test]
    fn test_cross_check_flat_hull_triangle() {
        // Nearly flat: the circumcircle is far larger than the point spread.
        let input = points(&[(996.56, 860.86), (-200.51, 904.38), (-691.92, 924.95)]);
        let guibas_stolfi = Triangulator::new(&input).expect("Failed to triangulate");
        let bowyer_watson = BowyerWatson::new(&input).expect("Failed to triangulate");

        assert_eq!(guibas_stolfi.triangle_count(), 1);
        assert_eq!(
            guibas_stolfi.canonical_triangles(),
            bowyer_watson.canonical_triangles()
        );
    }

    #[test]
    fn test_cross_check_across_seeds() {
        // Seed 18 produces a sliver on the hull.
        for seed in 0..32 {
            let input = generate_random_points(50, (0.0, 1.0), Some(seed))
                .expect("Failed to generate points");
            let guibas_stolfi = Triangulator::new(&input).expect("Failed to triangulate");
            let bowyer_watson = BowyerWatson::new(&input).expect("Failed to triangulate");

            assert_eq!(
                guibas_stolfi.canonical_triangles(),
                bowyer_watson.canonical_triangles(),
                "backends disagree for seed {seed}"
            );
            assert_eq!(
                guibas_stolfi.triangle_count(),
                2 * input.len() - guibas_stolfi.hull().len() - 2,
                "seed {seed}"
            );
        }
    }

    #[test]
    fn test_duplicate_points_collapse() {
        for seed in 0..5 {
            let clean = generate_random_points(40, (0.0, 1.0), Some(seed))
                .expect("Failed to generate points");
            let mut input = clean.clone();
            input.push(clean[7]);
            input.push(clean[3]);

            let expected = Triangulator::new(&clean).expect("Failed to triangulate");
            let triangulator = Triangulator::new(&input).expect("Failed to triangulate");

            assert_eq!(triangulator.triangles(), expected.triangles(), "seed {seed}");
            assert_eq!(triangulator.triangle_count(), expected.triangle_count());
            assert_eq!(triangulator.edge_count(), expected.edge_count());
            assert!(triangulator.is_delaunay(), "seed {seed}");
            assert!(triangulator.edge_algebra().validate().is_ok());
            assert_eq!(triangulator.representative(40), Some(7));
            assert_eq!(triangulator.representative(41), Some(3));

            let bowyer_watson = BowyerWatson::new(&input).expect("Failed to triangulate");
            assert_eq!(
                triangulator.canonical_triangles(),
                bowyer_watson.canonical_triangles()
            );
        }
    }

    #[test]
    fn test_grid_with_duplicates() {
        let mut input = Vec::new();
        for i in 0..5 {
            for j in 0..5 {
                input.push(Point2D::new(f64::from(i), f64::from(j)));
            }
        }
        input.extend_from_within(0..3);
        input.push(Point2D::new(2.0, 2.0));
        input.push(Point2D::new(4.0, 4.0));

        let triangulator = Triangulator::new(&input).expect("Failed to triangulate grid");
        assert_eq!(triangulator.sorted_vertices().len(), 25);
        assert_eq!(triangulator.to_mesh().vertices, input);
        assert_eq!(triangulator.triangle_count(), 32);
        assert!(triangulator.is_delaunay());
        assert!(triangulator.edge_algebra().validate().is_ok());
        assert!(
            triangulator
                .triangles()
                .iter()
                .all(|t| t.vertices().iter().all(|&v| v < 25))
        );
    }

    #[test]
    fn test_triangles_are_counterclockwise() {
        let input =
            generate_random_points(300, (0.0, 1.0), Some(5)).expect("Failed to generate points");
        let triangulator = Triangulator::new(&input).expect("Failed to triangulate");
        for triangle in triangulator.triangles() {
            let [a, b, c] = triangle.vertices();
            assert!(quadedge_delaunay::geometry::predicates::orientation(
                input[a], input[b], input[c]
            ));
        }
    }

    #[test]
    fn test_mesh_export() {
        let input =
            generate_random_points(64, (0.0, 1.0), Some(8)).expect("Failed to generate points");
        let triangulator = Triangulator::new(&input).expect("Failed to triangulate");
        let mesh = triangulator.to_mesh();

        assert_eq!(mesh.vertices, input);
        assert_eq!(mesh.face_count(), triangulator.triangle_count());
        assert_eq!(mesh.edge_count(), triangulator.edge_count());

        let mut edges: Vec<_> = triangulator.edges().collect();
        edges.sort_unstable();
        assert_eq!(edges, mesh.edges);
    }

    #[test]
    fn test_grid_with_cocircular_points() {
        // Every unit cell is cocircular; any diagonal choice is valid.
        let mut input = Vec::new();
        for i in 0..6 {
            for j in 0..6 {
                input.push(Point2D::new(f64::from(i), f64::from(j)));
            }
        }
        let triangulator = Triangulator::new(&input).expect("Failed to triangulate grid");
        assert_eq!(triangulator.triangle_count(), 50);
        assert!(triangulator.is_delaunay());
        assert!(triangulator.edge_algebra().validate().is_ok());
    }

    #[test]
    fn test_arena_invariants_after_each_operation() {
        let mut algebra = EdgeAlgebra::new();
        let a = algebra.make_edge();
        algebra.set_onode(a, 0);
        algebra.set_dnode(a, 1);
        algebra.validate().expect("single edge");

        let b = algebra.make_edge();
        algebra.set_onode(b, 1);
        algebra.set_dnode(b, 2);
        algebra.splice(a.sym(), b);
        algebra.validate().expect("after splice");

        let c = algebra.connect(b, a);
        algebra.validate().expect("after connect");

        // A second edge between the same two vertices, inside the triangle.
        let d = algebra.connect(c, b.sym());
        assert_eq!((algebra.onode(d), algebra.dnode(d)), (0, 2));
        algebra.validate().expect("after second connect");

        algebra.remove(d);
        algebra.validate().expect("after remove");
        assert_eq!(algebra.free_count(), 1);

        let reused = algebra.make_edge();
        assert_eq!(reused.bundle(), d.bundle());
        assert_eq!(algebra.free_count(), 0);
    }
}
