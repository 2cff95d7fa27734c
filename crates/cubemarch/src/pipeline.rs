//! One-call extraction pipeline: field, grid, cells, mesh.

use std::path::Path;

use cubemarch_core::{ExtractOptions, Extractor, Grid, Mesh, Result};
use cubemarch_fields::{sample_grid, ScalarField, SphereConfig};
use glam::UVec3;
use serde::{Deserialize, Serialize};

/// Configuration for a complete sphere extraction run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Field to sample.
    pub sphere: SphereConfig,
    /// Extraction options.
    pub extract: ExtractOptions,
}

impl PipelineConfig {
    /// Parses a configuration from JSON; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.extract.validate()?;
        Ok(config)
    }

    /// Loads a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        log::debug!("loading pipeline config from {}", path.display());
        Self::from_json_str(&json)
    }

    /// Serializes the configuration as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Samples the configured sphere and extracts its isosurface.
    pub fn run(&self) -> Result<Extraction> {
        let extractor = Extractor::new(self.extract.clone())?;
        let grid = self.sphere.sample()?;
        let mesh = extractor.extract(&grid)?;
        log::info!(
            "extracted {} triangles from a {} grid at iso level {}",
            mesh.num_triangles(),
            grid.dims(),
            self.extract.iso_level
        );
        Ok(Extraction { grid, mesh })
    }
}

/// Result of a pipeline run: the sampled grid and the mesh built from it.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// The sampled field.
    pub grid: Grid,
    /// The extracted surface.
    pub mesh: Mesh,
}

/// Samples `field` on a `dims` lattice and extracts its isosurface.
pub fn extract_field(
    field: &impl ScalarField,
    dims: UVec3,
    cell_spacing: f32,
    options: ExtractOptions,
) -> Result<Extraction> {
    let extractor = Extractor::new(options)?;
    let grid = sample_grid(field, dims, cell_spacing)?;
    let mesh = extractor.extract(&grid)?;
    Ok(Extraction { grid, mesh })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubemarch_core::{CubeMarchError, ExecutionMode};

    #[test]
    fn test_default_run_produces_sphere() {
        let run = PipelineConfig::default().run().unwrap();
        assert_eq!(run.grid.dims(), UVec3::splat(16));
        assert!(run.mesh.num_triangles() > 100);
    }

    #[test]
    fn test_json_config() {
        let config = PipelineConfig::from_json_str(
            r#"{
                "sphere": { "dims": [8, 8, 8], "cell_spacing": 0.5 },
                "extract": { "iso_level": 0.4, "execution": "parallel" }
            }"#,
        )
        .unwrap();
        assert_eq!(config.sphere.dims, [8, 8, 8]);
        assert_eq!(config.extract.execution, ExecutionMode::Parallel);
        assert_eq!(config.extract.cells_per_task, 4096);

        let back = PipelineConfig::from_json_str(&config.to_json_string().unwrap()).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_json_rejects_bad_options() {
        let err = PipelineConfig::from_json_str(r#"{ "extract": { "cells_per_task": 0 } }"#)
            .unwrap_err();
        assert!(matches!(err, CubeMarchError::InvalidOption(_)));

        let err = PipelineConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, CubeMarchError::JsonError(_)));
    }

    #[test]
    fn test_oversized_sphere_fails_cleanly() {
        let config = PipelineConfig::from_json_str(
            r#"{ "sphere": { "dims": [2147483648, 2147483648, 4] } }"#,
        )
        .unwrap();
        let err = config.run().unwrap_err();
        assert!(matches!(err, CubeMarchError::GridTooLarge { .. }));
    }

    #[test]
    fn test_missing_config_file() {
        let err = PipelineConfig::load("/nonexistent/cubemarch.json").unwrap_err();
        assert!(matches!(err, CubeMarchError::IoError(_)));
    }
}
