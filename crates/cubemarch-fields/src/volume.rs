//! Dense volumes of pre-sampled values, such as scanned datasets.

use cubemarch_core::grid::{checked_node_count, linear_index};
use cubemarch_core::{CubeMarchError, Grid, Result, Sample};
use glam::{UVec3, Vec3};

/// A dense block of scalar values on a regular lattice.
///
/// Values are stored in the same linear order as [`Grid`] samples.
#[derive(Debug, Clone, PartialEq)]
pub struct RawVolume {
    dims: UVec3,
    values: Vec<f32>,
    origin: Vec3,
    spacing: Vec3,
}

impl RawVolume {
    /// Wraps `values` as a volume of `dims` nodes with unit spacing at the origin.
    pub fn new(dims: UVec3, values: Vec<f32>) -> Result<Self> {
        let expected = checked_node_count(dims).ok_or(CubeMarchError::GridTooLarge { dims })?;
        if values.len() != expected {
            return Err(CubeMarchError::SizeMismatch {
                expected,
                actual: values.len(),
            });
        }
        Ok(Self {
            dims,
            values,
            origin: Vec3::ZERO,
            spacing: Vec3::ONE,
        })
    }

    /// Places the volume in world space.
    #[must_use]
    pub fn with_placement(mut self, origin: Vec3, spacing: Vec3) -> Self {
        self.origin = origin;
        self.spacing = spacing;
        self
    }

    /// Returns the number of nodes along each axis.
    pub fn dims(&self) -> UVec3 {
        self.dims
    }

    /// Returns the raw values.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Returns the value at `(x, y, z)`, or `None` outside the volume.
    pub fn value(&self, x: u32, y: u32, z: u32) -> Option<f32> {
        if x < self.dims.x && y < self.dims.y && z < self.dims.z {
            Some(self.values[linear_index(x, y, z, self.dims)])
        } else {
            None
        }
    }

    /// Returns the smallest and largest finite values, if any.
    pub fn range(&self) -> Option<(f32, f32)> {
        self.values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Rescales values linearly so the data range maps onto `[0, 1]`.
    ///
    /// A constant volume maps to all zeros.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if let Some((lo, hi)) = self.range() {
            let span = hi - lo;
            for v in &mut self.values {
                *v = if span > 0.0 { (*v - lo) / span } else { 0.0 };
            }
        }
        self
    }

    /// Converts the volume into a positioned sample grid.
    pub fn to_grid(&self) -> Result<Grid> {
        Grid::from_fn(self.dims, |c| {
            let position = self.origin + c.as_vec3() * self.spacing;
            Sample::new(position, self.values[linear_index(c.x, c.y, c.z, self.dims)])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_mismatch() {
        let err = RawVolume::new(UVec3::splat(2), vec![0.0; 9]).unwrap_err();
        assert!(matches!(
            err,
            CubeMarchError::SizeMismatch {
                expected: 8,
                actual: 9
            }
        ));
    }

    #[test]
    fn test_overflowing_dims() {
        let dims = UVec3::new(1 << 31, 1 << 31, 4);
        let err = RawVolume::new(dims, Vec::new()).unwrap_err();
        assert!(matches!(err, CubeMarchError::GridTooLarge { dims: d } if d == dims));
    }

    #[test]
    fn test_value_lookup() {
        let values: Vec<f32> = (0..24).map(|i| i as f32).collect();
        let vol = RawVolume::new(UVec3::new(2, 3, 4), values).unwrap();
        assert_eq!(vol.value(1, 0, 0), Some(1.0));
        assert_eq!(vol.value(0, 1, 0), Some(2.0));
        assert_eq!(vol.value(0, 0, 1), Some(6.0));
        assert_eq!(vol.value(2, 0, 0), None);
    }

    #[test]
    fn test_normalized() {
        let vol = RawVolume::new(UVec3::new(2, 1, 1), vec![10.0, 30.0])
            .unwrap()
            .normalized();
        assert_eq!(vol.values(), &[0.0, 1.0]);

        let flat = RawVolume::new(UVec3::new(2, 1, 1), vec![5.0, 5.0])
            .unwrap()
            .normalized();
        assert_eq!(flat.values(), &[0.0, 0.0]);
    }

    #[test]
    fn test_to_grid_placement() {
        let vol = RawVolume::new(UVec3::splat(2), vec![0.0; 8])
            .unwrap()
            .with_placement(Vec3::new(10.0, 0.0, 0.0), Vec3::new(1.0, 2.0, 3.0));
        let grid = vol.to_grid().unwrap();
        assert_eq!(
            grid.get(1, 1, 1).unwrap().position,
            Vec3::new(11.0, 2.0, 3.0)
        );
    }
}
