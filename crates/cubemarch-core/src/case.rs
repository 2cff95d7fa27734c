//! Per-cell configuration classification.

use crate::cell::Cell;

/// 8-bit configuration code of a cell.
///
/// Bit `i` is set when corner `i` lies below the iso level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CaseCode(pub u8);

impl CaseCode {
    /// No corner below the iso level.
    pub const EMPTY: Self = Self(0);
    /// Every corner below the iso level.
    pub const FULL: Self = Self(u8::MAX);

    /// Classifies `cell` against `iso_level`.
    ///
    /// The iso level is used as given; a NaN level classifies every cell as empty.
    #[must_use]
    pub fn classify(cell: &Cell, iso_level: f32) -> Self {
        let code = cell
            .corners
            .iter()
            .enumerate()
            .fold(0u8, |code, (i, corner)| {
                code | (u8::from(corner.value < iso_level) << i)
            });
        Self(code)
    }

    /// Returns true if no corner is below the iso level.
    ///
    /// This is the only fast-reject path: the fully-below code still goes
    /// through the table, whose row for it is empty.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns whether corner `i` is below the iso level.
    #[must_use]
    pub fn is_below(self, corner: usize) -> bool {
        (self.0 >> corner) & 1 == 1
    }
}

impl From<CaseCode> for u8 {
    fn from(code: CaseCode) -> Self {
        code.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Sample;
    use glam::{UVec3, Vec3};

    fn cell_with(values: [f32; 8]) -> Cell {
        Cell {
            origin: UVec3::ZERO,
            corners: values.map(|v| Sample::new(Vec3::ZERO, v)),
        }
    }

    #[test]
    fn test_uniform_cells() {
        assert_eq!(CaseCode::classify(&cell_with([1.0; 8]), 0.5), CaseCode::EMPTY);
        assert_eq!(CaseCode::classify(&cell_with([0.0; 8]), 0.5), CaseCode::FULL);
        assert!(CaseCode::EMPTY.is_empty());
        assert!(!CaseCode::FULL.is_empty());
    }

    #[test]
    fn test_bit_per_corner() {
        for corner in 0..8 {
            let mut values = [1.0; 8];
            values[corner] = 0.0;
            let code = CaseCode::classify(&cell_with(values), 0.5);
            assert_eq!(code.0, 1 << corner);
            assert!(code.is_below(corner));
        }
    }

    #[test]
    fn test_equal_to_iso_is_not_below() {
        let code = CaseCode::classify(&cell_with([0.5; 8]), 0.5);
        assert!(code.is_empty());
    }

    #[test]
    fn test_bottom_face_below() {
        let code = CaseCode::classify(&cell_with([0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]), 0.5);
        assert_eq!(u8::from(code), 0x0F);
    }

    #[test]
    fn test_nan_iso_is_empty() {
        assert!(CaseCode::classify(&cell_with([0.0; 8]), f32::NAN).is_empty());
    }
}
