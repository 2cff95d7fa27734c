//! Per-cell triangulation.

use glam::Vec3;

use crate::case::CaseCode;
use crate::cell::Cell;
use crate::interpolate::interpolate_edge;
use crate::mesh::Triangle;
use crate::tables::{self, EDGE_CORNERS};

/// Position of the surface crossing on `edge` of `cell`.
#[inline]
#[must_use]
pub fn edge_vertex(cell: &Cell, edge: usize, iso_level: f32) -> Vec3 {
    let [a, b] = EDGE_CORNERS[edge];
    interpolate_edge(&cell.corners[a], &cell.corners[b], iso_level)
}

/// Classifies `cell` and appends its triangles to `out`.
///
/// Triangles are pushed one at a time in table order. Returns the number of
/// triangles emitted (0 to 5).
pub fn triangulate_cell(cell: &Cell, iso_level: f32, out: &mut Vec<Triangle>) -> usize {
    let code = CaseCode::classify(cell, iso_level);
    if code.is_empty() {
        return 0;
    }

    let mut emitted = 0;
    for [e0, e1, e2] in tables::triangles(code.0) {
        out.push(Triangle::new(
            edge_vertex(cell, e0, iso_level),
            edge_vertex(cell, e1, iso_level),
            edge_vertex(cell, e2, iso_level),
        ));
        emitted += 1;
    }
    emitted
}
