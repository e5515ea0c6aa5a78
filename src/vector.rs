//! Vector helpers shared by the 2D and 3D geometry.
//!
//! Arithmetic itself comes from `glam` (`+`, `-`, `* t`, `dot`, `normalize`).
//! Everything is computed in `f64`; 2D pixel-space values live in `IVec2` and
//! are widened with [`promote`] before any solving happens.

use glam::{DVec2, IVec2};

/// Widen an integer pixel-space vector for floating-point math.
#[inline]
pub fn promote(v: IVec2) -> DVec2 {
    v.as_dvec2()
}

/// Scale an integer vector by a real factor, truncating toward zero.
///
/// `t` may be negative; the result then points the other way.
#[inline]
pub fn scale_point(v: IVec2, t: f64) -> IVec2 {
    IVec2::new((v.x as f64 * t) as i32, (v.y as f64 * t) as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn unit_vectors_have_length_one() {
        let samples = [
            DVec3::new(3.0, 4.0, 0.0),
            DVec3::new(-0.001, 0.002, 0.0005),
            DVec3::new(1e6, -2e6, 3e6),
            DVec3::new(0.0, 0.0, -1.0),
        ];
        for v in samples {
            assert!((v.normalize().length() - 1.0).abs() < 1e-6, "{v:?}");
        }
    }

    #[test]
    fn zero_vector_normalizes_to_nan() {
        assert!(DVec3::ZERO.normalize().is_nan());
    }

    #[test]
    fn scale_point_truncates_toward_zero() {
        assert_eq!(scale_point(IVec2::new(10, -10), 0.55), IVec2::new(5, -5));
        assert_eq!(scale_point(IVec2::new(7, 3), -2.0), IVec2::new(-14, -6));
    }

    #[test]
    fn promote_keeps_components() {
        assert_eq!(promote(IVec2::new(-3, 8)), DVec2::new(-3.0, 8.0));
    }
}
