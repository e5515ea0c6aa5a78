//! Ray-object intersection contract for the 3D demo.

use glam::DVec3;

use crate::interval::Interval;
use crate::ray::Ray;

/// Ray-object intersection information needed for shading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Point where the ray intersects the object
    pub p: DVec3,
    /// Unit surface normal at `p`, pointing away from the object
    pub normal: DVec3,
    /// Distance along the normalized ray direction
    pub t: f64,
}

/// Objects that can be intersected by rays.
///
/// `Sync + Send` so a frame can be shaded from several rayon workers.
pub trait Hittable: Sync + Send {
    /// Nearest accepted intersection with `r` whose `t` lies in `ray_t`.
    ///
    /// Implementations must not modify the ray; `t` is measured along the
    /// normalized direction.
    fn hit(&self, r: &Ray, ray_t: Interval) -> Option<HitRecord>;
}
