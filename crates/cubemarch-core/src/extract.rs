//! Extraction passes over a whole grid.
//!
//! A pass walks every valid cell, triangulates it, and assembles the resulting
//! triangle soup into a [`Mesh`]. Cells are independent, so the parallel mode
//! splits the valid-cell index space into contiguous ranges, fills one private
//! buffer per range, and concatenates the buffers in range order. Both modes
//! therefore produce identical output.

use std::ops::Range;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rayon::prelude::*;

use crate::error::{CubeMarchError, Result};
use crate::grid::Grid;
use crate::mesh::{Mesh, Triangle};
use crate::options::{ExecutionMode, ExtractOptions};
use crate::triangulate::triangulate_cell;

/// Shared flag used to abort an extraction pass.
///
/// Polled once per cell range; a cancelled pass returns
/// [`CubeMarchError::Cancelled`] and produces no mesh.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Creates a token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation of every pass holding a clone of this token.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Returns whether cancellation was requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Runs extraction passes with a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    options: ExtractOptions,
}

impl Extractor {
    /// Creates an extractor, rejecting options that cannot drive a pass.
    pub fn new(options: ExtractOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Returns the options in use.
    #[must_use]
    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Extracts the isosurface of `grid` as a flat-shaded mesh.
    ///
    /// Fails only if the mesh needs more vertices than `u32` indices address.
    pub fn extract(&self, grid: &Grid) -> Result<Mesh> {
        Mesh::from_triangles(&self.triangles(grid))
    }

    /// Like [`Extractor::extract`], but aborts when `cancel` is set.
    pub fn extract_with_cancel(&self, grid: &Grid, cancel: &CancelToken) -> Result<Mesh> {
        let triangles = self.march(grid, Some(cancel))?;
        Mesh::from_triangles(&triangles)
    }

    /// Extracts into an existing mesh, replacing its contents.
    pub fn extract_into(&self, grid: &Grid, mesh: &mut Mesh) -> Result<()> {
        mesh.assemble_into(&self.triangles(grid))
    }

    /// Returns the raw triangle soup for `grid`, in cell index order.
    #[must_use]
    pub fn triangles(&self, grid: &Grid) -> Vec<Triangle> {
        match self.march(grid, None) {
            Ok(triangles) => triangles,
            Err(_) => unreachable!("a pass without a cancel token cannot fail"),
        }
    }

    fn march(&self, grid: &Grid, cancel: Option<&CancelToken>) -> Result<Vec<Triangle>> {
        if !grid.has_cells() {
            log::warn!(
                "grid dimensions {} have an axis shorter than 2 nodes; no cells to extract",
                grid.dims()
            );
            return Ok(Vec::new());
        }

        let iso_level = self.options.iso_level;
        let ranges = cell_ranges(grid.num_cells(), self.options.cells_per_task);

        let triangles = match self.options.execution {
            ExecutionMode::Sequential => {
                let mut out = Vec::new();
                for range in ranges {
                    check_cancel(cancel)?;
                    march_range(grid, range, iso_level, &mut out);
                }
                out
            }
            ExecutionMode::Parallel => {
                let buffers = ranges
                    .into_par_iter()
                    .map(|range| {
                        check_cancel(cancel)?;
                        let mut out = Vec::new();
                        march_range(grid, range, iso_level, &mut out);
                        Ok(out)
                    })
                    .collect::<Result<Vec<Vec<Triangle>>>>()?;
                buffers.concat()
            }
        };

        log::debug!(
            "extracted {} triangles from {} cells (iso level {}, {:?})",
            triangles.len(),
            grid.num_cells(),
            iso_level,
            self.options.execution
        );
        Ok(triangles)
    }
}

/// Extracts the isosurface of `grid` at `iso_level` with default scheduling.
///
/// # Panics
///
/// Panics if the mesh needs more than `u32::MAX` vertices. Use
/// [`Extractor::extract`] to get that as an error instead.
#[must_use]
pub fn extract(grid: &Grid, iso_level: f32) -> Mesh {
    let extractor = Extractor {
        options: ExtractOptions::with_iso_level(iso_level),
    };
    match extractor.extract(grid) {
        Ok(mesh) => mesh,
        Err(err) => panic!("{err}"),
    }
}

fn march_range(grid: &Grid, range: Range<usize>, iso_level: f32, out: &mut Vec<Triangle>) {
    for index in range {
        if let Some(cell) = grid.cell_at(index) {
            triangulate_cell(&cell, iso_level, out);
        }
    }
}

fn check_cancel(cancel: Option<&CancelToken>) -> Result<()> {
    match cancel {
        Some(token) if token.is_cancelled() => Err(CubeMarchError::Cancelled),
        _ => Ok(()),
    }
}

/// Splits `0..num_cells` into contiguous ranges of at most `per_task` cells.
fn cell_ranges(num_cells: usize, per_task: usize) -> Vec<Range<usize>> {
    let per_task = per_task.max(1);
    (0..num_cells)
        .step_by(per_task)
        .map(|start| start..(start + per_task).min(num_cells))
        .collect()
}
