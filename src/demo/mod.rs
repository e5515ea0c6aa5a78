//! The two demos the frame driver can run.
//!
//! Each demo owns its scene (ray and primitive) so input handling and
//! rendering both go through `&mut self`, one at a time.

mod circle;
mod sphere;

pub use circle::{CircleDemo, CircleScene};
pub use sphere::SphereDemo;

use serde::Deserialize;

use crate::buffer::PixelBuffer;
use crate::config::DemoConfig;
use crate::input::InputEvent;

/// Which demo the binary runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DemoKind {
    /// 2D ray against a circle, drawn with vector primitives.
    Circle,
    /// 3D ray casting against a shaded sphere.
    #[default]
    Sphere,
}

/// A scene the frame driver can feed input to and render.
pub trait Demo {
    /// Short name for logs and the window title.
    fn name(&self) -> &'static str;

    /// Raster size this demo draws at.
    fn size(&self) -> (usize, usize);

    /// Apply one input event to the scene.
    fn handle_input(&mut self, event: InputEvent);

    /// Draw the current scene into `buffer`, overwriting every pixel.
    fn render(&mut self, buffer: &mut PixelBuffer);

    /// Readout for the host's "debug" status line, if the demo has one.
    fn debug_status(&self) -> Option<String> {
        None
    }
}

/// Build the demo selected by `config`.
pub fn build_demo(config: &DemoConfig) -> Box<dyn Demo> {
    match config.demo {
        DemoKind::Circle => Box::new(CircleDemo::from_config(config)),
        DemoKind::Sphere => Box::new(SphereDemo::from_config(config)),
    }
}
