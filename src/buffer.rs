//! RGBA pixel raster that every frame is drawn into.

use glam::{DVec2, I64Vec2, IVec2};
use image::RgbaImage;

use crate::color::Rgba8;

/// Row-major RGBA8 raster, 4 bytes per pixel.
///
/// Allocated once per surface and overwritten every frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Transparent black raster of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height * 4],
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// All pixels, row-major RGBA.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Mutable rows of `width * 4` bytes each, top to bottom.
    pub fn rows_mut(&mut self) -> std::slice::ChunksExactMut<'_, u8> {
        self.pixels.chunks_exact_mut(self.width * 4)
    }

    /// Raw slice for parallel row iteration; rows are `width * 4` bytes.
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(4 * (y as usize * self.width + x as usize))
    }

    /// Read one pixel, `None` outside the raster.
    pub fn get(&self, x: i32, y: i32) -> Option<Rgba8> {
        let i = self.offset(x, y)?;
        let mut c = [0; 4];
        c.copy_from_slice(&self.pixels[i..i + 4]);
        Some(c)
    }

    /// Write one pixel; coordinates outside the raster are ignored.
    #[inline]
    pub fn put(&mut self, x: i32, y: i32, c: Rgba8) {
        if let Some(i) = self.offset(x, y) {
            self.pixels[i..i + 4].copy_from_slice(&c);
        }
    }

    /// Set every pixel to `c`.
    pub fn fill(&mut self, c: Rgba8) {
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&c);
        }
    }

    /// Horizontal span from x0 to x1 inclusive, clipped.
    fn hline(&mut self, x0: i32, x1: i32, y: i32, c: Rgba8) {
        if y < 0 || y as usize >= self.height || self.width == 0 {
            return;
        }
        let max_x = self.width as i32 - 1;
        let (start, end) = (x0.min(x1).max(0), x0.max(x1).min(max_x));
        for x in start..=end {
            self.put(x, y, c);
        }
    }

    /// 1px circle outline (midpoint algorithm).
    pub fn stroke_circle(&mut self, center: IVec2, radius: i32, c: Rgba8) {
        if radius < 0 {
            return;
        }
        let (cx, cy) = (center.x, center.y);
        let mut x = radius;
        let mut y = 0;
        let mut err = 0;

        while x >= y {
            self.put(cx + x, cy + y, c);
            self.put(cx + y, cy + x, c);
            self.put(cx - y, cy + x, c);
            self.put(cx - x, cy + y, c);
            self.put(cx - x, cy - y, c);
            self.put(cx - y, cy - x, c);
            self.put(cx + y, cy - x, c);
            self.put(cx + x, cy - y, c);

            y += 1;
            err += 1 + 2 * y;
            if 2 * (err - x) + 1 > 0 {
                x -= 1;
                err += 1 - 2 * x;
            }
        }
    }

    /// Filled disc drawn as horizontal spans.
    pub fn fill_circle(&mut self, center: IVec2, radius: i32, c: Rgba8) {
        let (cx, cy) = (center.x, center.y);
        if radius <= 0 {
            if radius == 0 {
                self.put(cx, cy, c);
            }
            return;
        }

        let mut x = radius;
        let mut y = 0;
        let mut err = 1 - radius;

        while x >= y {
            self.hline(cx - x, cx + x, cy + y, c);
            if y != 0 {
                self.hline(cx - x, cx + x, cy - y, c);
            }
            if x != y {
                self.hline(cx - y, cx + y, cy + x, c);
                if y != 0 {
                    self.hline(cx - y, cx + y, cy - x, c);
                }
            }

            y += 1;
            if err < 0 {
                err += 2 * y + 1;
            } else {
                x -= 1;
                err += 2 * (y - x) + 1;
            }
        }
    }

    /// Bresenham line including both endpoints.
    ///
    /// Endpoints are 64-bit so callers can extend a ray far past the
    /// surface; the segment is clipped to the raster first and only the
    /// visible part is walked.
    pub fn draw_line(&mut self, p0: I64Vec2, p1: I64Vec2, c: Rgba8) {
        let Some((p0, p1)) = self.clip_line(p0, p1) else {
            return;
        };

        let dx = (p1.x - p0.x).abs();
        let dy = -(p1.y - p0.y).abs();
        let sx = if p0.x < p1.x { 1 } else { -1 };
        let sy = if p0.y < p1.y { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (p0.x, p0.y);

        loop {
            self.put(x, y, c);
            if x == p1.x && y == p1.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Liang-Barsky clip of a segment to the pixel centers of the raster.
    ///
    /// A segment already inside comes back unchanged.
    fn clip_line(&self, p0: I64Vec2, p1: I64Vec2) -> Option<(IVec2, IVec2)> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        let max = DVec2::new((self.width - 1) as f64, (self.height - 1) as f64);
        let a = p0.as_dvec2();
        let d = p1.as_dvec2() - a;

        let (mut t0, mut t1) = (0.0_f64, 1.0_f64);
        for (p, q) in [(-d.x, a.x), (d.x, max.x - a.x), (-d.y, a.y), (d.y, max.y - a.y)] {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return None;
                }
                t0 = t0.max(r);
            } else {
                if r < t0 {
                    return None;
                }
                t1 = t1.min(r);
            }
        }

        let start = (a + d * t0).round().clamp(DVec2::ZERO, max).as_ivec2();
        let end = (a + d * t1).round().clamp(DVec2::ZERO, max).as_ivec2();
        Some((start, end))
    }

    /// Pack into `0RGB` words for window presentation, reusing `out`.
    pub fn to_argb_u32(&self, out: &mut Vec<u32>) {
        out.clear();
        out.extend(
            self.pixels
                .chunks_exact(4)
                .map(|px| ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | (px[2] as u32)),
        );
    }

    /// Copy into an `image` buffer for encoding.
    pub fn to_image(&self) -> RgbaImage {
        // Dimensions and length always agree, so this cannot fail.
        RgbaImage::from_raw(self.width as u32, self.height as u32, self.pixels.clone())
            .unwrap_or_else(|| RgbaImage::new(self.width as u32, self.height as u32))
    }
}
