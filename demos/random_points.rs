//! Basic example of using the triangulation library
//!
//! This example shows how to:
//! - Generate a reproducible random point set
//! - Triangulate it with the divide-and-conquer builder
//! - Inspect the hull and the triangles
//! - Validate the result and cross-check it against Bowyer-Watson

use log::{LevelFilter, info};
use quadedge_delaunay::util::generate_random_points;
use quadedge_delaunay::{
    BowyerWatson, TriangulationOps, TriangulationQuery, Triangulator,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .init();

    let count = 500;
    let seed = 7;
    info!("Generating {count} points with seed {seed}");
    let points = generate_random_points(count, (-1.0, 1.0), Some(seed))?;

    let triangulator = Triangulator::new(&points)?;
    info!(
        "Triangulation: {} vertices, {} edges, {} triangles, {} hull vertices",
        triangulator.vertex_count(),
        triangulator.edge_count(),
        triangulator.triangle_count(),
        triangulator.hull().len()
    );

    for triangle in triangulator.triangles().iter().take(5) {
        let [a, b, c] = triangle.vertices();
        info!("  triangle ({a}, {b}, {c})");
    }

    triangulator.validate_delaunay()?;
    info!("Every circumcircle is empty");

    let baseline = BowyerWatson::new(&points)?;
    if triangulator.same_triangles_as(&baseline) {
        info!("Bowyer-Watson produced the same triangles");
    } else {
        info!("Bowyer-Watson disagrees on degenerate configurations");
    }

    let mesh = triangulator.to_mesh();
    info!(
        "Mesh export: {} vertices, {} edges, {} faces",
        mesh.vertex_count(),
        mesh.edge_count(),
        mesh.face_count()
    );

    Ok(())
}
