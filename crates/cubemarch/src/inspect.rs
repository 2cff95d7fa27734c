//! Read-only debug markers for visualizing a grid and its extracted mesh.
//!
//! Nothing here feeds back into extraction; a viewer can draw the markers or
//! ignore them.

use cubemarch_core::{Grid, Mesh};
use glam::Vec3;

/// Edge length of the cube drawn for a grid sample.
pub const SAMPLE_MARKER_SIZE: f32 = 0.1;

/// Edge length of the cube drawn for a triangle corner.
pub const VERTEX_MARKER_SIZE: f32 = 0.05;

/// Color of triangle-corner markers.
pub const VERTEX_MARKER_COLOR: Vec3 = Vec3::new(0.0, 1.0, 1.0);

/// A small colored cube to draw at a position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugMarker {
    /// Marker center.
    pub position: Vec3,
    /// RGB color in `[0, 1]`.
    pub color: Vec3,
    /// Cube edge length.
    pub size: f32,
}

/// Markers for every sample at or below `iso_level`, shaded by value.
///
/// The gray level is the sample value itself.
pub fn sample_markers(grid: &Grid, iso_level: f32) -> Vec<DebugMarker> {
    grid.samples()
        .iter()
        .filter(|s| s.value <= iso_level)
        .map(|s| DebugMarker {
            position: s.position,
            color: Vec3::splat(s.value),
            size: SAMPLE_MARKER_SIZE,
        })
        .collect()
}

/// Markers for every triangle corner of `mesh`.
pub fn triangle_markers(mesh: &Mesh) -> Vec<DebugMarker> {
    mesh.vertices
        .iter()
        .map(|&position| DebugMarker {
            position,
            color: VERTEX_MARKER_COLOR,
            size: VERTEX_MARKER_SIZE,
        })
        .collect()
}
