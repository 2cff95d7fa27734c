//! Scalar field providers for cubemarch.
//!
//! - [`ScalarField`] trait and [`sample_grid`] to build a [`Grid`](cubemarch_core::Grid)
//! - [`SphereField`], the distance-based sphere generator
//! - [`FnField`] for arbitrary closures
//! - [`RawVolume`] for pre-sampled data such as scans

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_precision_loss)]

pub mod field;
pub mod sphere;
pub mod volume;

pub use field::{sample_grid, FnField, ScalarField};
pub use sphere::{SphereConfig, SphereField};
pub use volume::RawVolume;
