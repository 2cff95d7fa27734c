//! Core of cubemarch.
//!
//! This crate holds everything an extraction pass needs:
//! - [`Grid`] and [`Sample`], the dense scalar field being meshed
//! - [`Cell`] decomposition and [`CaseCode`] classification
//! - the fixed case [`tables`] and [`interpolate_edge`]
//! - [`Extractor`], which turns a grid into a flat-shaded [`Mesh`]

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
// Lattice coordinates are converted to positions all over the place
#![allow(clippy::cast_precision_loss)]

pub mod case;
pub mod cell;
pub mod error;
pub mod extract;
pub mod grid;
pub mod interpolate;
pub mod mesh;
pub mod options;
pub mod tables;
pub mod triangulate;

pub use case::CaseCode;
pub use cell::Cell;
pub use error::{CubeMarchError, Result};
pub use extract::{extract, CancelToken, Extractor};
pub use grid::{Grid, Sample};
pub use interpolate::{interpolate_edge, EPSILON};
pub use mesh::{Aabb, GpuVertex, Mesh, MeshSink, Triangle};
pub use options::{ExecutionMode, ExtractOptions};
pub use triangulate::triangulate_cell;

// Re-export glam types for convenience
pub use glam::{UVec3, Vec3};
