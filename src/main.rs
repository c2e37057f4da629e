//! Delaunay triangulation binary executable.
//!
//! This is the main entry point for the `qdt` application that triangulates
//! random point sets and optionally validates the result.

use quadedge_delaunay::{TriangulationConfig, run};

fn main() {
    // Initialize logging
    env_logger::init();

    let config = TriangulationConfig::from_args();
    match run(&config) {
        Ok(summary) => {
            log::info!(
                "Triangulated {} points into {} triangles",
                summary.points,
                summary.triangle_count()
            );
        }
        Err(e) => {
            log::error!("Triangulation failed: {e}");
            std::process::exit(1);
        }
    }
}
