//! Ray representations for the 2D and 3D demos.
//!
//! A ray is r(t) = origin + t * direction. Neither type requires its direction
//! to be normalized; the solvers normalize a copy when they need to.

use glam::{DVec3, IVec2};

use crate::vector::scale_point;

/// Ray in 3D space defined by origin and direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    pub origin: DVec3,

    /// Direction vector of the ray. Not required to be normalized.
    pub direction: DVec3,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Self { origin, direction }
    }

    /// Compute a point at parameter t along the ray.
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + t * self.direction
    }

    /// Copy of this ray with a unit-length direction.
    ///
    /// A zero direction produces NaN components.
    pub fn normalized(&self) -> Self {
        Self {
            origin: self.origin,
            direction: self.direction.normalize(),
        }
    }
}

/// Ray in 2D pixel space.
///
/// The direction is whatever the input handler last set (usually
/// `pointer - origin`); its length carries no meaning for the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ray2 {
    /// Starting point in canvas pixels.
    pub origin: IVec2,
    /// Direction in canvas pixels.
    pub direction: IVec2,
}

impl Ray2 {
    /// Ray from `origin` along `direction`.
    pub fn new(origin: IVec2, direction: IVec2) -> Self {
        Self { origin, direction }
    }

    /// Pixel reached after travelling `t` direction lengths, truncated.
    pub fn point_at(&self, t: f64) -> IVec2 {
        self.origin.saturating_add(scale_point(self.direction, t))
    }
}

impl Default for Ray2 {
    fn default() -> Self {
        Self::new(IVec2::ZERO, IVec2::new(10, 10))
    }
}
