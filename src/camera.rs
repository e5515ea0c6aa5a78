//! Orthographic camera that casts one ray per pixel and fills the raster.

use glam::DVec3;
use rayon::prelude::*;

use crate::buffer::PixelBuffer;
use crate::hittable::Hittable;
use crate::ray::Ray;
use crate::shader::Shader;

/// Camera for ray generation and frame rendering.
///
/// Rays start on the plane `z = near_z` and travel along -z. Pixel rows map
/// to increasing `v`, so row 0 is `v = -1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Rendered image width in pixel count
    pub image_width: usize,
    /// Rendered image height in pixel count
    pub image_height: usize,
    /// z of the plane every primary ray starts from
    pub near_z: f64,
}

impl Camera {
    /// Camera for a `image_width x image_height` raster, rays starting at z = 1.
    pub fn new(image_width: usize, image_height: usize) -> Self {
        Self {
            image_width,
            image_height,
            near_z: 1.0,
        }
    }

    /// Width over height.
    pub fn aspect(&self) -> f64 {
        self.image_width as f64 / self.image_height as f64
    }

    /// Normalized viewport coordinates of a pixel, both in [-1, 1).
    pub fn ndc(&self, col: usize, row: usize) -> (f64, f64) {
        let u = (col as f64 / self.image_width as f64) * 2.0 - 1.0;
        let v = (row as f64 / self.image_height as f64) * 2.0 - 1.0;
        (u, v)
    }

    /// Primary ray through viewport point (u, v); `u` is aspect corrected.
    pub fn get_ray(&self, u: f64, v: f64) -> Ray {
        Ray::new(
            DVec3::new(u * self.aspect(), v, self.near_z),
            DVec3::new(0.0, 0.0, -1.0),
        )
    }

    fn shade_row(&self, world: &dyn Hittable, shader: &Shader, row: usize, line: &mut [u8]) {
        for (col, px) in line.chunks_exact_mut(4).enumerate() {
            let (u, v) = self.ndc(col, row);
            px.copy_from_slice(&shader.shade(world, &self.get_ray(u, v)));
        }
    }

    /// Shade every pixel of `buffer`, row by row.
    ///
    /// With `parallel` the rows are spread over the rayon pool; the scene is
    /// only read, and each worker writes its own row.
    pub fn render(&self, world: &dyn Hittable, shader: &Shader, buffer: &mut PixelBuffer, parallel: bool) {
        debug_assert_eq!(buffer.width(), self.image_width);
        debug_assert_eq!(buffer.height(), self.image_height);

        if self.image_width == 0 {
            return;
        }

        if parallel {
            let stride = self.image_width * 4;
            buffer
                .bytes_mut()
                .par_chunks_exact_mut(stride)
                .enumerate()
                .for_each(|(row, line)| self.shade_row(world, shader, row, line));
        } else {
            for (row, line) in buffer.rows_mut().enumerate() {
                self.shade_row(world, shader, row, line);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;
    use crate::sphere::Sphere;

    #[test]
    fn ndc_spans_minus_one_to_one() {
        let camera = Camera::new(300, 600);
        assert_eq!(camera.ndc(0, 0), (-1.0, -1.0));
        assert_eq!(camera.ndc(150, 300), (0.0, 0.0));
        assert_eq!(camera.aspect(), 0.5);
    }

    #[test]
    fn ray_is_aspect_corrected() {
        let camera = Camera::new(300, 600);
        let ray = camera.get_ray(1.0, -0.5);
        assert_eq!(ray.origin, DVec3::new(0.5, -0.5, 1.0));
        assert_eq!(ray.direction, DVec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn center_pixel_sees_the_sphere() {
        let camera = Camera::new(30, 60);
        let mut buffer = PixelBuffer::new(30, 60);
        camera.render(&Sphere::default(), &Shader::default(), &mut buffer, false);

        assert_eq!(buffer.get(15, 30), Some(color::OBJECT));
        assert_eq!(buffer.get(0, 0), Some(color::BACKGROUND));
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let camera = Camera::new(40, 80);
        let sphere = Sphere::new(DVec3::new(0.0, 0.0, -30.0), 0.8);
        let shader = Shader::default();

        let mut seq = PixelBuffer::new(40, 80);
        let mut par = PixelBuffer::new(40, 80);
        camera.render(&sphere, &shader, &mut seq, false);
        camera.render(&sphere, &shader, &mut par, true);
        assert_eq!(seq, par);
    }
}
