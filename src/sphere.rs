//! Sphere primitive and the 3D ray-sphere solver.

use glam::DVec3;
use serde::Deserialize;

use crate::hittable::{HitRecord, Hittable};
use crate::interval::Interval;
use crate::ray::Ray;

/// Which power of the radius the solver subtracts in the constant term.
///
/// `Cubed` is the stock look of the demo and renders a sphere of apparent
/// radius `R^1.5`. `Squared` is the textbook sphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RadiusTerm {
    /// Subtract `R^3`.
    #[default]
    Cubed,
    /// Subtract `R^2`.
    Squared,
}

impl RadiusTerm {
    /// The constant-term value for `radius`.
    pub fn apply(self, radius: f64) -> f64 {
        match self {
            RadiusTerm::Cubed => radius * radius * radius,
            RadiusTerm::Squared => radius * radius,
        }
    }
}

/// Sphere primitive defined by center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    pub center: DVec3,

    /// Radius of the sphere. Negative values are clamped to 0.0.
    pub radius: f64,

    /// How the radius enters the solver.
    pub radius_term: RadiusTerm,
}

impl Sphere {
    /// Create a new sphere using the default radius term.
    pub fn new(center: DVec3, radius: f64) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            radius_term: RadiusTerm::default(),
        }
    }

    /// Same sphere, solved with `radius_term`.
    pub fn with_radius_term(mut self, radius_term: RadiusTerm) -> Self {
        self.radius_term = radius_term;
        self
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self::new(DVec3::new(0.0, 0.0, -30.0), 0.5)
    }
}

impl Hittable for Sphere {
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord> {
        let unit = r.normalized();

        // Ray origin relative to the sphere center
        let oc = unit.origin - self.center;

        let a = unit.direction.dot(unit.direction);
        let b = 2.0 * oc.dot(unit.direction);
        let c = oc.dot(oc) - self.radius_term.apply(self.radius);

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrtd = discriminant.sqrt();

        let t1 = (-b + sqrtd) / (2.0 * a);
        let t2 = (-b - sqrtd) / (2.0 * a);

        // Prefer the near root unless it lies behind the origin
        let t = if t2 < t1 && t2 >= 0.0 { t2 } else { t1 };
        if !ray_t.contains(t) {
            return None;
        }

        let p = unit.at(t);
        Some(HitRecord {
            p,
            normal: (p - self.center).normalize(),
            t,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn head_on_hit_picks_near_side() {
        let sphere = Sphere::new(DVec3::new(0.0, 0.0, -30.0), 2.0)
            .with_radius_term(RadiusTerm::Squared);
        let ray = Ray::new(DVec3::new(0.0, 0.0, 1.0), DVec3::new(0.0, 0.0, -1.0));

        let rec = sphere.hit(&ray, Interval::FORWARD).unwrap();
        assert_close(rec.t, 29.0);
        assert_close(rec.p.z, -28.0);
        assert_eq!(rec.normal, DVec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn cubed_term_shrinks_apparent_radius() {
        let sphere = Sphere::new(DVec3::new(0.0, 0.0, -30.0), 4.0);
        let ray = Ray::new(DVec3::new(0.0, 0.0, 1.0), DVec3::new(0.0, 0.0, -1.0));

        // sqrt(4^3) = 8
        let rec = sphere.hit(&ray, Interval::FORWARD).unwrap();
        assert_close(rec.t, 23.0);

        let squared = sphere.with_radius_term(RadiusTerm::Squared);
        let rec = squared.hit(&ray, Interval::FORWARD).unwrap();
        assert_close(rec.t, 27.0);
    }

    #[test]
    fn origin_at_center_hits_at_radius() {
        let sphere = Sphere::new(DVec3::new(1.0, 2.0, 3.0), 7.0)
            .with_radius_term(RadiusTerm::Squared);
        let ray = Ray::new(sphere.center, DVec3::new(0.0, 3.0, 4.0));

        let rec = sphere.hit(&ray, Interval::FORWARD).unwrap();
        assert_close(rec.t, 7.0);
        assert_close((rec.p - sphere.center).length(), 7.0);
    }

    #[test]
    fn unnormalized_direction_is_left_untouched() {
        let sphere = Sphere::default();
        let ray = Ray::new(DVec3::new(0.0, 0.0, 1.0), DVec3::new(0.0, 0.0, -10.0));

        let rec = sphere.hit(&ray, Interval::FORWARD).unwrap();
        assert_eq!(ray.direction, DVec3::new(0.0, 0.0, -10.0));
        assert_close(rec.t, 31.0 - 0.125f64.sqrt());
    }

    #[test]
    fn sphere_behind_the_ray_is_rejected() {
        let sphere = Sphere::default();
        let ray = Ray::new(DVec3::new(0.0, 0.0, 1.0), DVec3::new(0.0, 0.0, 1.0));
        assert_eq!(sphere.hit(&ray, Interval::FORWARD), None);
    }

    #[test]
    fn miss_returns_none() {
        let sphere = Sphere::default();
        let ray = Ray::new(DVec3::new(5.0, 0.0, 1.0), DVec3::new(0.0, 0.0, -1.0));
        assert_eq!(sphere.hit(&ray, Interval::FORWARD), None);
    }

    #[test]
    fn narrower_interval_rejects_far_hit() {
        let sphere = Sphere::default();
        let ray = Ray::new(DVec3::new(0.0, 0.0, 1.0), DVec3::new(0.0, 0.0, -1.0));
        assert_eq!(sphere.hit(&ray, Interval::new(0.0, 10.0)), None);
    }

    #[test]
    fn negative_radius_is_clamped() {
        assert_eq!(Sphere::new(DVec3::ZERO, -3.0).radius, 0.0);
    }
}
