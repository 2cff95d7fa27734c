//! Decomposition of a grid into cubic cells.

use glam::UVec3;

use crate::grid::{coords_of, Grid, Sample};
use crate::tables::CORNER_OFFSETS;

/// One cube of the grid with its eight corner samples.
///
/// Corners follow [`CORNER_OFFSETS`]: `(x,y,z)`, `(x,y,z+1)`, `(x+1,y,z+1)`,
/// `(x+1,y,z)` and then the same four one step up in y. The case table's edge
/// numbering depends on this order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    /// Lattice coordinates of corner 0.
    pub origin: UVec3,
    /// Corner samples in table order.
    pub corners: [Sample; 8],
}

impl Grid {
    /// Returns the cell whose corner 0 sits at `(x, y, z)`.
    ///
    /// Returns `None` when any coordinate is on or past the last node of its
    /// axis, since such a cell has no forward neighbor to close it.
    #[must_use]
    pub fn cell(&self, x: u32, y: u32, z: u32) -> Option<Cell> {
        let last = self.dims().saturating_sub(UVec3::ONE);
        if x >= last.x || y >= last.y || z >= last.z {
            return None;
        }
        let corners =
            CORNER_OFFSETS.map(|[dx, dy, dz]| self.sample(x + dx, y + dy, z + dz));
        Some(Cell {
            origin: UVec3::new(x, y, z),
            corners,
        })
    }

    /// Returns the cell at position `index` of the valid-cell index space.
    ///
    /// Valid cells are numbered like samples, over the `cell_dims()` lattice.
    #[must_use]
    pub fn cell_at(&self, index: usize) -> Option<Cell> {
        if index >= self.num_cells() {
            return None;
        }
        let c = coords_of(index, self.cell_dims());
        self.cell(c.x, c.y, c.z)
    }

    /// Iterates over every valid cell, z-major then y then x.
    ///
    /// A grid with any axis shorter than two nodes yields nothing.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.num_cells()).filter_map(move |i| self.cell_at(i))
    }
}
