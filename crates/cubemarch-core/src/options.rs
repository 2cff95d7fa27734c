//! Configuration options for extraction passes.

use serde::{Deserialize, Serialize};

use crate::error::{CubeMarchError, Result};

/// Options controlling one extraction pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    /// Threshold defining the surface; corners below it count as inside.
    pub iso_level: f32,

    /// How cells are scheduled.
    pub execution: ExecutionMode,

    /// Number of consecutive cells handed to one parallel task.
    pub cells_per_task: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            iso_level: 0.5,
            execution: ExecutionMode::Sequential,
            cells_per_task: 4096,
        }
    }
}

impl ExtractOptions {
    /// Creates options for the given iso level with default scheduling.
    pub fn with_iso_level(iso_level: f32) -> Self {
        Self {
            iso_level,
            ..Self::default()
        }
    }

    /// Switches to parallel execution.
    pub fn parallel(mut self) -> Self {
        self.execution = ExecutionMode::Parallel;
        self
    }

    /// Checks that the options can drive a pass.
    pub fn validate(&self) -> Result<()> {
        if self.cells_per_task == 0 {
            return Err(CubeMarchError::InvalidOption(
                "cells_per_task must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Scheduling of cell processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionMode {
    /// One thread, cells in index order.
    #[default]
    Sequential,
    /// Cell ranges on the rayon pool, concatenated in index order.
    Parallel,
}
