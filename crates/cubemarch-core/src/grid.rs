//! Dense sample grids.
//!
//! A [`Grid`] stores one [`Sample`] per node of a regular 3D lattice. Samples
//! are laid out with x varying fastest, then y, then z:
//! `index(x, y, z) = z * size_x * size_y + y * size_x + x`.

use glam::{UVec3, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::{CubeMarchError, Result};

/// A single scalar sample with its world-space position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// World-space position of the sample.
    pub position: Vec3,
    /// Field value (density/weight) at the sample.
    pub value: f32,
}

impl Sample {
    /// Creates a new sample.
    #[must_use]
    pub const fn new(position: Vec3, value: f32) -> Self {
        Self { position, value }
    }
}

/// A dense 3D array of samples.
///
/// The grid is read-only once built; extraction passes only ever borrow it.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    dims: UVec3,
    samples: Vec<Sample>,
}

impl Grid {
    /// Builds a grid from an already-populated sample buffer.
    ///
    /// Returns an error if the node count of `dims` overflows `usize` or
    /// differs from `samples.len()`.
    pub fn from_samples(dims: UVec3, samples: Vec<Sample>) -> Result<Self> {
        let expected = checked_node_count(dims).ok_or(CubeMarchError::GridTooLarge { dims })?;
        if samples.len() != expected {
            return Err(CubeMarchError::SizeMismatch {
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self { dims, samples })
    }

    /// Builds a grid by evaluating `f` at every node, in linear index order.
    ///
    /// Fails without calling `f` if the sample buffer for `dims` cannot be
    /// reserved.
    pub fn from_fn(dims: UVec3, mut f: impl FnMut(UVec3) -> Sample) -> Result<Self> {
        let too_large = || CubeMarchError::GridTooLarge { dims };
        let count = checked_node_count(dims).ok_or_else(too_large)?;
        let mut samples = Vec::new();
        samples.try_reserve_exact(count).map_err(|_| too_large())?;
        for z in 0..dims.z {
            for y in 0..dims.y {
                for x in 0..dims.x {
                    samples.push(f(UVec3::new(x, y, z)));
                }
            }
        }
        Ok(Self { dims, samples })
    }

    /// Returns the number of nodes along each axis.
    #[must_use]
    pub fn dims(&self) -> UVec3 {
        self.dims
    }

    /// Returns the number of cells along each axis (zero on a degenerate axis).
    #[must_use]
    pub fn cell_dims(&self) -> UVec3 {
        self.dims.saturating_sub(UVec3::ONE)
    }

    /// Returns the total number of valid cells.
    #[must_use]
    pub fn num_cells(&self) -> usize {
        node_count(self.cell_dims())
    }

    /// Returns true if every axis has at least two nodes.
    #[must_use]
    pub fn has_cells(&self) -> bool {
        self.dims.min_element() >= 2
    }

    /// Returns all samples in linear index order.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Returns the number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the grid holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns true if `(x, y, z)` addresses a node of this grid.
    #[must_use]
    pub fn contains(&self, x: u32, y: u32, z: u32) -> bool {
        x < self.dims.x && y < self.dims.y && z < self.dims.z
    }

    /// Converts grid coordinates to a linear sample index.
    ///
    /// The coordinates are not bounds-checked.
    #[inline]
    #[must_use]
    pub fn index(&self, x: u32, y: u32, z: u32) -> usize {
        linear_index(x, y, z, self.dims)
    }

    /// Converts a linear sample index back into grid coordinates.
    #[inline]
    #[must_use]
    pub fn coords(&self, index: usize) -> UVec3 {
        coords_of(index, self.dims)
    }

    /// Returns the sample at `(x, y, z)`.
    pub fn get(&self, x: u32, y: u32, z: u32) -> Result<&Sample> {
        if !self.contains(x, y, z) {
            return Err(CubeMarchError::IndexOutOfBounds {
                x,
                y,
                z,
                dims: self.dims,
            });
        }
        Ok(&self.samples[self.index(x, y, z)])
    }

    /// Unchecked-by-contract lookup used by the cell builder.
    ///
    /// Panics if `(x, y, z)` is outside the grid.
    #[inline]
    pub(crate) fn sample(&self, x: u32, y: u32, z: u32) -> Sample {
        self.samples[self.index(x, y, z)]
    }
}

/// Number of nodes in a lattice with the given dimensions, saturating at
/// `usize::MAX`.
#[inline]
#[must_use]
pub fn node_count(dims: UVec3) -> usize {
    checked_node_count(dims).unwrap_or(usize::MAX)
}

/// Number of nodes in a lattice, or `None` if it overflows `usize`.
#[inline]
#[must_use]
pub fn checked_node_count(dims: UVec3) -> Option<usize> {
    (dims.x as usize)
        .checked_mul(dims.y as usize)?
        .checked_mul(dims.z as usize)
}

/// Linear index of `(x, y, z)`: `z * nx * ny + y * nx + x`.
#[inline]
#[must_use]
pub fn linear_index(x: u32, y: u32, z: u32, dims: UVec3) -> usize {
    let nx = dims.x as usize;
    let ny = dims.y as usize;
    (z as usize) * nx * ny + (y as usize) * nx + (x as usize)
}

/// Inverse of [`linear_index`].
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn coords_of(index: usize, dims: UVec3) -> UVec3 {
    let nx = dims.x as usize;
    let ny = dims.y as usize;
    let x = index % nx;
    let y = (index / nx) % ny;
    let z = index / (nx * ny);
    UVec3::new(x as u32, y as u32, z as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ramp_grid(dims: UVec3) -> Grid {
        Grid::from_fn(dims, |c| Sample::new(c.as_vec3(), c.x as f32)).unwrap()
    }

    #[test]
    fn test_from_fn_layout() {
        let grid = ramp_grid(UVec3::new(3, 4, 5));
        assert_eq!(grid.len(), 60);
        for (i, sample) in grid.samples().iter().enumerate() {
            assert_eq!(sample.position, grid.coords(i).as_vec3());
        }
        // x varies fastest
        assert_eq!(grid.samples()[1].position, Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(grid.samples()[3].position, Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(grid.samples()[12].position, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_from_samples_size_mismatch() {
        let samples = vec![Sample::new(Vec3::ZERO, 0.0); 7];
        let err = Grid::from_samples(UVec3::splat(2), samples).unwrap_err();
        assert!(matches!(
            err,
            CubeMarchError::SizeMismatch {
                expected: 8,
                actual: 7
            }
        ));
    }

    #[test]
    fn test_overflowing_dims_rejected() {
        let dims = UVec3::new(1 << 31, 1 << 31, 4);
        assert_eq!(checked_node_count(dims), None);
        assert_eq!(node_count(dims), usize::MAX);
        assert!(matches!(
            Grid::from_samples(dims, Vec::new()),
            Err(CubeMarchError::GridTooLarge { dims: d }) if d == dims
        ));

        let mut calls = 0;
        let result = Grid::from_fn(UVec3::splat(u32::MAX), |c| {
            calls += 1;
            Sample::new(c.as_vec3(), 0.0)
        });
        assert!(matches!(result, Err(CubeMarchError::GridTooLarge { .. })));
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_unallocatable_dims_rejected() {
        // The node count fits in usize but the sample buffer does not.
        let dims = UVec3::splat(1 << 20);
        let result = Grid::from_fn(dims, |c| Sample::new(c.as_vec3(), 0.0));
        assert!(matches!(result, Err(CubeMarchError::GridTooLarge { .. })));
    }

    #[test]
    fn test_cell_counts() {
        let grid = ramp_grid(UVec3::new(2, 3, 4));
        assert_eq!(grid.cell_dims(), UVec3::new(1, 2, 3));
        assert_eq!(grid.num_cells(), 6);
        assert!(grid.has_cells());

        let flat = ramp_grid(UVec3::new(4, 1, 4));
        assert_eq!(flat.num_cells(), 0);
        assert!(!flat.has_cells());

        let empty = ramp_grid(UVec3::ZERO);
        assert!(empty.is_empty());
        assert_eq!(empty.num_cells(), 0);
    }

    #[test]
    fn test_checked_get() {
        let grid = ramp_grid(UVec3::splat(3));
        assert_eq!(grid.get(2, 1, 0).unwrap().value, 2.0);
        assert!(matches!(
            grid.get(3, 0, 0),
            Err(CubeMarchError::IndexOutOfBounds { x: 3, .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_index_round_trip(
            nx in 1u32..16, ny in 1u32..16, nz in 1u32..16,
            fx in 0.0f64..1.0, fy in 0.0f64..1.0, fz in 0.0f64..1.0,
        ) {
            let dims = UVec3::new(nx, ny, nz);
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let c = UVec3::new(
                (fx * f64::from(nx)) as u32,
                (fy * f64::from(ny)) as u32,
                (fz * f64::from(nz)) as u32,
            );
            let idx = linear_index(c.x, c.y, c.z, dims);
            prop_assert!(idx < node_count(dims));
            prop_assert_eq!(coords_of(idx, dims), c);
        }
    }
}
