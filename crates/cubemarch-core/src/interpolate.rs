//! Linear placement of surface crossings along cube edges.

use glam::Vec3;

use crate::grid::Sample;

/// Tolerance used when comparing field values against each other and the iso level.
pub const EPSILON: f32 = 1e-5;

/// Returns where the surface crosses the edge `p1 -> p2`.
///
/// Endpoints within [`EPSILON`] of the iso level are returned directly. When the
/// two endpoint values are themselves within [`EPSILON`] of each other the edge
/// is treated as flat and `p1` is returned; this is a coarse approximation that
/// biases nearly-flat fields toward the first endpoint, and it is kept as is.
///
/// No clamping is applied: callers only pass edges that classification found
/// to straddle the surface, which keeps the interpolation parameter in `[0, 1]`.
#[inline]
#[must_use]
pub fn interpolate_edge(p1: &Sample, p2: &Sample, iso_level: f32) -> Vec3 {
    if (iso_level - p1.value).abs() < EPSILON {
        return p1.position;
    }
    if (iso_level - p2.value).abs() < EPSILON {
        return p2.position;
    }
    if (p1.value - p2.value).abs() < EPSILON {
        return p1.position;
    }
    let mu = (iso_level - p1.value) / (p2.value - p1.value);
    p1.position + mu * (p2.position - p1.position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_midpoint() {
        let a = Sample::new(Vec3::ZERO, 0.0);
        let b = Sample::new(Vec3::new(0.0, 2.0, 0.0), 1.0);
        assert_eq!(interpolate_edge(&a, &b, 0.5), Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_quarter_point() {
        let a = Sample::new(Vec3::ZERO, 0.0);
        let b = Sample::new(Vec3::new(4.0, 0.0, 0.0), 1.0);
        let p = interpolate_edge(&a, &b, 0.25);
        assert!((p - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_endpoint_on_iso() {
        let a = Sample::new(Vec3::ZERO, 0.3);
        let b = Sample::new(Vec3::ONE, 0.7);
        assert_eq!(interpolate_edge(&a, &b, 0.7), Vec3::ONE);
        assert_eq!(interpolate_edge(&a, &b, 0.3), Vec3::ZERO);
    }

    #[test]
    fn test_flat_edge_picks_first() {
        let a = Sample::new(Vec3::ZERO, 0.2);
        let b = Sample::new(Vec3::ONE, 0.200_001);
        assert_eq!(interpolate_edge(&a, &b, 0.9), Vec3::ZERO);
    }

    #[test]
    fn test_no_clamping() {
        // Both endpoints on the same side: the result extrapolates.
        let a = Sample::new(Vec3::ZERO, 0.0);
        let b = Sample::new(Vec3::X, 1.0);
        let p = interpolate_edge(&a, &b, 2.0);
        assert!((p.x - 2.0).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_first_endpoint_on_iso(
            iso in -10.0f32..10.0,
            v2 in -10.0f32..10.0,
            x in -5.0f32..5.0, y in -5.0f32..5.0, z in -5.0f32..5.0,
        ) {
            let p1 = Sample::new(Vec3::new(x, y, z), iso);
            let p2 = Sample::new(Vec3::new(y, z, x) + Vec3::ONE, v2);
            prop_assert_eq!(interpolate_edge(&p1, &p2, iso), p1.position);
        }

        #[test]
        fn prop_crossing_stays_on_segment(
            v1 in 0.0f32..0.49,
            v2 in 0.51f32..1.0,
        ) {
            let p1 = Sample::new(Vec3::ZERO, v1);
            let p2 = Sample::new(Vec3::new(1.0, 1.0, 1.0), v2);
            let p = interpolate_edge(&p1, &p2, 0.5);
            prop_assert!(p.x >= 0.0 && p.x <= 1.0);
            prop_assert!((p.x - p.y).abs() < 1e-6 && (p.y - p.z).abs() < 1e-6);
        }
    }
}
