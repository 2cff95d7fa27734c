//! Sphere extraction demo.
//!
//! Samples the reference sphere field, extracts its isosurface, and prints a
//! summary of the resulting mesh.
//!
//! Run with: cargo run --example sphere_demo -- [config.json]

use cubemarch::*;

fn main() -> Result<()> {
    init_logging();

    let config = match std::env::args().nth(1) {
        Some(path) => PipelineConfig::load(path)?,
        None => PipelineConfig {
            sphere: SphereConfig {
                dims: [32, 32, 32],
                ..SphereConfig::default()
            },
            extract: ExtractOptions::with_iso_level(0.5).parallel(),
        },
    };

    let run = config.run()?;
    let mesh = &run.mesh;

    println!("grid:      {} nodes, {} cells", run.grid.len(), run.grid.num_cells());
    println!("iso level: {}", config.extract.iso_level);
    println!("triangles: {}", mesh.num_triangles());
    println!("vertices:  {}", mesh.vertices.len());
    if let Some(bounds) = mesh.bounds {
        println!("bounds:    {} .. {}", bounds.min, bounds.max);
    }

    let below = sample_markers(&run.grid, config.extract.iso_level).len();
    println!("samples at or below iso level: {below}");
    println!("vertex buffer: {} bytes", mesh.vertex_bytes().len());

    Ok(())
}
