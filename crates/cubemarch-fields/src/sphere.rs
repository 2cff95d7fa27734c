//! Distance-based sphere field.

use cubemarch_core::{Grid, Result};
use glam::{UVec3, Vec3};
use serde::{Deserialize, Serialize};

use crate::field::{sample_grid, ScalarField};

/// Radial falloff field: `1 - distance(center, p) / max_radius`.
///
/// The value is 1 at the center, 0 at `max_radius`, and keeps decreasing past
/// it; nothing is clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereField {
    /// Center of the sphere.
    pub center: Vec3,
    /// Distance at which the value reaches zero.
    pub max_radius: f32,
}

impl SphereField {
    /// Creates a sphere field.
    pub fn new(center: Vec3, max_radius: f32) -> Self {
        Self { center, max_radius }
    }

    /// Sphere centered in a lattice of `dims` nodes spaced `cell_spacing` apart,
    /// reaching zero at half the lattice's x extent.
    pub fn centered(dims: UVec3, cell_spacing: f32) -> Self {
        let center = dims.saturating_sub(UVec3::ONE).as_vec3() * cell_spacing / 2.0;
        let max_radius = dims.x as f32 * cell_spacing / 2.0;
        Self { center, max_radius }
    }
}

impl ScalarField for SphereField {
    fn value_at(&self, position: Vec3) -> f32 {
        1.0 - self.center.distance(position) / self.max_radius
    }
}

/// Serializable description of a sampled sphere.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereConfig {
    /// Number of nodes along each axis.
    pub dims: [u32; 3],
    /// Distance between adjacent nodes.
    pub cell_spacing: f32,
    /// Sphere center; defaults to the lattice center.
    pub center: Option<Vec3>,
    /// Falloff radius; defaults to half the lattice's x extent.
    pub max_radius: Option<f32>,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            dims: [16, 16, 16],
            cell_spacing: 1.0,
            center: None,
            max_radius: None,
        }
    }
}

impl SphereConfig {
    /// Returns the lattice dimensions.
    pub fn dims(&self) -> UVec3 {
        UVec3::from_array(self.dims)
    }

    /// Builds the field, filling unset parameters from the lattice.
    pub fn field(&self) -> SphereField {
        let defaults = SphereField::centered(self.dims(), self.cell_spacing);
        SphereField {
            center: self.center.unwrap_or(defaults.center),
            max_radius: self.max_radius.unwrap_or(defaults.max_radius),
        }
    }

    /// Samples the configured sphere into a grid.
    pub fn sample(&self) -> Result<Grid> {
        sample_grid(&self.field(), self.dims(), self.cell_spacing)
    }
}
