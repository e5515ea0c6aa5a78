//! Pointer and button input for the circle demo.

use glam::IVec2;
use rand::Rng;

use crate::circle::Circle;
use crate::ray::Ray2;

/// Smallest radius a randomized circle can get.
pub const MIN_RADIUS: i32 = 10;

/// Platform-agnostic input delivered by a host between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary button pressed at `(x, y)` in host coordinates.
    PointerDown {
        /// Horizontal position.
        x: i32,
        /// Vertical position.
        y: i32,
    },
    /// Move the circle somewhere random and resize it.
    RandomizeCircle,
    /// Move the ray origin somewhere random.
    RandomizeRay,
}

/// Host coordinates to canvas-local pixels.
pub fn pointer_to_canvas(canvas_offset: IVec2, x: i32, y: i32) -> IVec2 {
    IVec2::new(x, y).saturating_sub(canvas_offset)
}

/// Point the ray at `pointer`. The direction keeps its pixel length.
pub fn aim_ray(ray: &mut Ray2, pointer: IVec2) {
    ray.direction = pointer.saturating_sub(ray.origin);
}

/// New center in `[0, width) x [0, height)`, radius in
/// `[10, 10 + width / 3)`.
pub fn randomize_circle<R: Rng + ?Sized>(circle: &mut Circle, rng: &mut R, width: i32, height: i32) {
    circle.center = random_point(rng, width, height);
    circle.radius = MIN_RADIUS + rng.random_range(0..(width / 3).max(1));
}

/// New origin inside the canvas; the direction is kept.
pub fn randomize_ray<R: Rng + ?Sized>(ray: &mut Ray2, rng: &mut R, width: i32, height: i32) {
    ray.origin = random_point(rng, width, height);
}

fn random_point<R: Rng + ?Sized>(rng: &mut R, width: i32, height: i32) -> IVec2 {
    IVec2::new(
        rng.random_range(0..width.max(1)),
        rng.random_range(0..height.max(1)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::seeded_rng;

    #[test]
    fn pointer_is_made_canvas_local() {
        let local = pointer_to_canvas(IVec2::new(8, 100), 58, 130);
        assert_eq!(local, IVec2::new(50, 30));
    }

    #[test]
    fn aiming_sets_unnormalized_direction() {
        let mut ray = Ray2::new(IVec2::new(10, 20), IVec2::new(1, 1));
        aim_ray(&mut ray, IVec2::new(110, 20));
        assert_eq!(ray.direction, IVec2::new(100, 0));
        assert_eq!(ray.origin, IVec2::new(10, 20));
    }

    #[test]
    fn randomized_circle_stays_in_bounds() {
        let mut rng = seeded_rng(7);
        let mut circle = Circle::default();
        for _ in 0..500 {
            randomize_circle(&mut circle, &mut rng, 300, 600);
            assert!((0..300).contains(&circle.center.x));
            assert!((0..600).contains(&circle.center.y));
            assert!((10..110).contains(&circle.radius));
        }
    }

    #[test]
    fn randomized_ray_keeps_direction() {
        let mut rng = seeded_rng(11);
        let mut ray = Ray2::new(IVec2::ZERO, IVec2::new(-4, 9));
        for _ in 0..100 {
            randomize_ray(&mut ray, &mut rng, 300, 600);
            assert_eq!(ray.direction, IVec2::new(-4, 9));
            assert!((0..300).contains(&ray.origin.x));
            assert!((0..600).contains(&ray.origin.y));
        }
    }

    #[test]
    fn tiny_canvas_does_not_panic() {
        let mut rng = seeded_rng(1);
        let mut circle = Circle::default();
        randomize_circle(&mut circle, &mut rng, 2, 1);
        assert_eq!(circle.radius, MIN_RADIUS);
    }
}
