//! The scalar field abstraction and grid sampling.

use cubemarch_core::{Grid, Result, Sample};
use glam::{UVec3, Vec3};

/// A volumetric function that can be sampled anywhere in space.
///
/// Fields must be shareable across threads so grids can be sampled in parallel
/// by callers that want to.
pub trait ScalarField: Sync {
    /// Returns the field value at `position`.
    fn value_at(&self, position: Vec3) -> f32;
}

impl<F: ScalarField + ?Sized> ScalarField for &F {
    fn value_at(&self, position: Vec3) -> f32 {
        (**self).value_at(position)
    }
}

/// Samples `field` on a regular lattice.
///
/// Node `(x, y, z)` sits at `(x, y, z) * cell_spacing`. Fails if the lattice
/// is too large to hold in memory.
pub fn sample_grid(field: &impl ScalarField, dims: UVec3, cell_spacing: f32) -> Result<Grid> {
    let grid = Grid::from_fn(dims, |c| {
        let position = c.as_vec3() * cell_spacing;
        Sample::new(position, field.value_at(position))
    })?;
    log::debug!("sampled {} nodes on a {} lattice", grid.len(), dims);
    Ok(grid)
}

/// A field backed by a closure.
pub struct FnField<F>(pub F);

impl<F> ScalarField for FnField<F>
where
    F: Fn(Vec3) -> f32 + Sync,
{
    fn value_at(&self, position: Vec3) -> f32 {
        (self.0)(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubemarch_core::CubeMarchError;

    #[test]
    fn test_sample_positions_use_spacing() {
        let field = FnField(|p: Vec3| p.x + p.y + p.z);
        let grid = sample_grid(&field, UVec3::new(2, 3, 4), 0.5).unwrap();
        assert_eq!(grid.len(), 24);
        let s = grid.get(1, 2, 3).unwrap();
        assert_eq!(s.position, Vec3::new(0.5, 1.0, 1.5));
        assert_eq!(s.value, 3.0);
    }

    #[test]
    fn test_zero_sized_lattice() {
        let field = FnField(|_: Vec3| 0.0);
        let grid = sample_grid(&field, UVec3::new(0, 3, 3), 1.0).unwrap();
        assert!(grid.is_empty());
    }

    #[test]
    fn test_oversized_lattice_is_an_error() {
        let field = FnField(|_: Vec3| 0.0);
        let err = sample_grid(&field, UVec3::splat(u32::MAX), 1.0).unwrap_err();
        assert!(matches!(err, CubeMarchError::GridTooLarge { .. }));
    }
}
