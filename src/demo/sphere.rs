//! Ray-cast sphere, one primary ray per pixel.

use log::debug;

use super::Demo;
use crate::buffer::PixelBuffer;
use crate::camera::Camera;
use crate::config::DemoConfig;
use crate::input::InputEvent;
use crate::shader::Shader;
use crate::sphere::Sphere;

/// Casts one ray per pixel at a single shaded sphere.
pub struct SphereDemo {
    /// The only object in the scene.
    pub sphere: Sphere,
    /// Maps pixels to primary rays.
    pub camera: Camera,
    /// Turns hits into colours.
    pub shader: Shader,
    /// Shade rows on the rayon pool.
    pub parallel: bool,
}

impl SphereDemo {
    /// Default sphere, camera and lit shader for a `width x height` raster.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            sphere: Sphere::default(),
            camera: Camera::new(width, height),
            shader: Shader::default(),
            parallel: true,
        }
    }

    /// Scene and shading from the `[sphere]` table of `config`.
    pub fn from_config(config: &DemoConfig) -> Self {
        let s = &config.sphere;
        let mut camera = Camera::new(config.width, config.height);
        camera.near_z = s.camera_z;

        let shader = Shader {
            mode: s.shading,
            background: s.background,
            object: s.object,
        };

        if s.parallel {
            debug!("Shading rows on {} threads", rayon::current_num_threads());
        }

        Self {
            sphere: Sphere::new(s.center.into(), s.radius).with_radius_term(s.radius_term),
            camera,
            shader,
            parallel: s.parallel,
        }
    }
}

impl Demo for SphereDemo {
    fn name(&self) -> &'static str {
        "sphere"
    }

    fn size(&self) -> (usize, usize) {
        (self.camera.image_width, self.camera.image_height)
    }

    fn handle_input(&mut self, _event: InputEvent) {}

    fn render(&mut self, buffer: &mut PixelBuffer) {
        self.camera
            .render(&self.sphere, &self.shader, buffer, self.parallel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;
    use crate::shader::ShadingMode;

    #[test]
    fn renders_sphere_in_the_middle() {
        let mut demo = SphereDemo::new(300, 600);
        let mut buffer = PixelBuffer::new(300, 600);
        demo.render(&mut buffer);

        assert_eq!(buffer.get(150, 300), Some(color::OBJECT));
        assert_eq!(buffer.get(0, 0), Some(color::BACKGROUND));
        assert_eq!(buffer.get(299, 599), Some(color::BACKGROUND));
    }

    #[test]
    fn input_is_ignored() {
        let mut demo = SphereDemo::new(30, 60);
        let before = demo.sphere;
        demo.handle_input(InputEvent::RandomizeCircle);
        demo.handle_input(InputEvent::PointerDown { x: 3, y: 3 });
        assert_eq!(demo.sphere, before);
    }

    #[test]
    fn flat_mode_has_two_colours() {
        let mut demo = SphereDemo::new(60, 120);
        demo.shader.mode = ShadingMode::Flat;
        demo.parallel = false;
        let mut buffer = PixelBuffer::new(60, 120);
        demo.render(&mut buffer);

        for px in buffer.as_bytes().chunks_exact(4) {
            assert!(px == color::OBJECT || px == color::BACKGROUND);
        }
    }
}
