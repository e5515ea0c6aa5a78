//! Ray against a circle in canvas pixels.

use glam::IVec2;
use log::trace;
use rand_chacha::ChaCha20Rng;

use super::Demo;
use crate::buffer::PixelBuffer;
use crate::circle::{Circle, CircleHit};
use crate::color;
use crate::config::DemoConfig;
use crate::input::{self, InputEvent};
use crate::random::demo_rng;
use crate::ray::Ray2;

/// Radius of the markers drawn at both intersection points.
const MARKER_RADIUS: i32 = 3;
/// Radius of the filled disc at the ray origin.
const ORIGIN_RADIUS: i32 = 5;
/// The ray is drawn this many direction lengths long.
const RAY_DRAW_LENGTH: i64 = 100;

/// The one ray and the one circle of the 2D demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CircleScene {
    /// The ray, aimed by the pointer.
    pub ray: Ray2,
    /// The circle it is tested against.
    pub circle: Circle,
}

/// 2D demo: a pointer-aimed ray against one circle, drawn with vector primitives.
pub struct CircleDemo {
    /// Ray and circle, mutated by input between frames.
    pub scene: CircleScene,
    /// Canvas origin in host coordinates, subtracted from pointer positions.
    pub canvas_offset: IVec2,
    width: usize,
    height: usize,
    rng: ChaCha20Rng,
    last_hit: Option<CircleHit>,
}

impl CircleDemo {
    /// Default scene on a `width x height` canvas.
    pub fn new(width: usize, height: usize, rng: ChaCha20Rng) -> Self {
        Self {
            scene: CircleScene::default(),
            canvas_offset: IVec2::ZERO,
            width,
            height,
            rng,
            last_hit: None,
        }
    }

    /// Scene, canvas offset and rng seed from `config`.
    pub fn from_config(config: &DemoConfig) -> Self {
        let c = &config.circle;
        let mut demo = Self::new(config.width, config.height, demo_rng(config.seed));
        demo.scene = CircleScene {
            ray: Ray2::new(c.ray_origin.into(), c.ray_direction.into()),
            circle: Circle::new(c.center.into(), c.radius),
        };
        demo.canvas_offset = c.canvas_offset.into();
        demo
    }

    /// Intersection found by the most recent frame.
    pub fn last_hit(&self) -> Option<CircleHit> {
        self.last_hit
    }
}

impl Demo for CircleDemo {
    fn name(&self) -> &'static str {
        "circle"
    }

    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn handle_input(&mut self, event: InputEvent) {
        let (w, h) = (self.width as i32, self.height as i32);
        match event {
            InputEvent::PointerDown { x, y } => {
                let pointer = input::pointer_to_canvas(self.canvas_offset, x, y);
                input::aim_ray(&mut self.scene.ray, pointer);
            }
            InputEvent::RandomizeCircle => {
                input::randomize_circle(&mut self.scene.circle, &mut self.rng, w, h);
            }
            InputEvent::RandomizeRay => {
                input::randomize_ray(&mut self.scene.ray, &mut self.rng, w, h);
            }
        }
        trace!("{:?} -> {:?}", event, self.scene);
    }

    fn render(&mut self, buffer: &mut PixelBuffer) {
        let CircleScene { ray, circle } = self.scene;
        buffer.fill(color::WHITE);

        let hit = circle.intersect(&ray);
        self.last_hit = hit;

        let outline = if hit.is_some() { color::GREEN } else { color::BLUE };
        buffer.stroke_circle(circle.center, circle.radius, outline);

        // Both roots are marked, including one behind the origin.
        if let Some(CircleHit { t1, t2 }) = hit {
            buffer.stroke_circle(ray.point_at(t1), MARKER_RADIUS, color::PURPLE);
            buffer.stroke_circle(ray.point_at(t2), MARKER_RADIUS, color::PURPLE);
        }

        buffer.fill_circle(ray.origin, ORIGIN_RADIUS, color::RED);
        // i64 so any i32 direction can be extended without overflow
        let origin = ray.origin.as_i64vec2();
        let tip = origin + ray.direction.as_i64vec2() * RAY_DRAW_LENGTH;
        buffer.draw_line(origin, tip, color::RED);
    }

    fn debug_status(&self) -> Option<String> {
        Some(format!("hit={}", self.last_hit.is_some()))
    }
}
