//! Circle primitive and the 2D ray-circle solver.

use glam::IVec2;

use crate::ray::Ray2;
use crate::vector::promote;

/// Circle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    /// Center in canvas pixels.
    pub center: IVec2,
    /// Radius in pixels.
    pub radius: i32,
}

/// Both roots of a ray-circle hit, in units of the ray's own direction length.
///
/// One root may be negative when the ray starts inside the circle. It is
/// reported anyway; callers decide whether to draw it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleHit {
    /// Root taken with `+sqrt(discriminant)`, the far side of the circle.
    pub t1: f64,
    /// Root taken with `-sqrt(discriminant)`, the near side of the circle.
    pub t2: f64,
}

impl Circle {
    /// Circle at `center` with `radius` pixels.
    pub fn new(center: IVec2, radius: i32) -> Self {
        Self { center, radius }
    }

    /// Solve |o + d t|^2 = r^2 with the circle moved to the origin.
    ///
    /// The direction is normalized for the quadratic and the roots are
    /// divided by its original length, so `ray.point_at(t)` lands on the
    /// circle. Returns `None` on a miss, on a backward hit (both roots
    /// negative) and on a zero-length direction.
    pub fn intersect(&self, ray: &Ray2) -> Option<CircleHit> {
        let local = promote(ray.origin) - promote(self.center);
        let direction = promote(ray.direction);

        let len = direction.length();
        if !(len > 0.0 && len.is_finite()) {
            return None;
        }
        let d = direction / len;
        let r = self.radius as f64;

        let a = d.dot(d);
        let b = 2.0 * d.dot(local);
        let c = local.dot(local) - r * r;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrtd = discriminant.sqrt();

        let t1 = (-b + sqrtd) / (2.0 * a);
        let t2 = (-b - sqrtd) / (2.0 * a);

        if t1 < 0.0 && t2 < 0.0 {
            return None;
        }

        Some(CircleHit {
            t1: t1 / len,
            t2: t2 / len,
        })
    }
}

impl Default for Circle {
    fn default() -> Self {
        Self::new(IVec2::ZERO, 10)
    }
}
