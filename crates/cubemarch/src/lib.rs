//! cubemarch: marching cubes isosurface extraction.
//!
//! cubemarch turns a regularly sampled 3D scalar field into a triangle mesh
//! approximating the surface where the field crosses an iso level.
//!
//! # Quick Start
//!
//! ```no_run
//! use cubemarch::*;
//!
//! fn main() -> Result<()> {
//!     init_logging();
//!
//!     // Sample a sphere on a 32^3 lattice
//!     let dims = UVec3::splat(32);
//!     let grid = sample_grid(&SphereField::centered(dims, 1.0), dims, 1.0)?;
//!
//!     // Extract the surface where the field crosses 0.5
//!     let mesh = extract(&grid, 0.5);
//!     println!("{} triangles", mesh.num_triangles());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Pipeline
//!
//! - A [`Grid`] of [`Sample`]s is produced by a field provider ([`ScalarField`])
//! - The grid is split into [`Cell`]s, each classified into a [`CaseCode`]
//! - The case table lists which edges the surface crosses; crossings are
//!   placed by [`interpolate_edge`]
//! - The resulting triangle soup is assembled into a flat-shaded [`Mesh`]
//!
//! Meshes are handed to renderers through [`MeshSink`]. The [`inspect`]
//! module produces debug markers for viewers.

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod init;
pub mod inspect;
pub mod pipeline;

pub use init::init_logging;
pub use inspect::{sample_markers, triangle_markers, DebugMarker};
pub use pipeline::{extract_field, Extraction, PipelineConfig};

pub use cubemarch_core::{
    extract, interpolate_edge, tables, triangulate_cell, Aabb, CancelToken, CaseCode, Cell,
    CubeMarchError, ExecutionMode, ExtractOptions, Extractor, GpuVertex, Grid, Mesh, MeshSink,
    Result, Sample, Triangle, EPSILON,
};
pub use cubemarch_fields::{
    sample_grid, FnField, RawVolume, ScalarField, SphereConfig, SphereField,
};

// Re-export glam types for convenience
pub use glam::{UVec3, Vec3};
