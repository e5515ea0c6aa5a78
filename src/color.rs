//! RGBA colours for the pixel buffer.
//!
//! Shading works on `DVec4` (one lane per channel, 0..=255); pixels are
//! stored as `Rgba8`.

use glam::DVec4;

/// One pixel as stored in the buffer: R, G, B, A.
pub type Rgba8 = [u8; 4];

/// Clear colour of the sphere demo.
pub const BACKGROUND: Rgba8 = [23, 23, 23, 255];
/// Surface colour of the sphere.
pub const OBJECT: Rgba8 = [200, 20, 220, 255];

/// Clear colour of the circle demo.
pub const WHITE: Rgba8 = [255, 255, 255, 255];
/// Circle outline when the ray misses.
pub const BLUE: Rgba8 = [0, 0, 255, 255];
/// Circle outline when the ray hits.
pub const GREEN: Rgba8 = [0, 128, 0, 255];
/// Intersection markers.
pub const PURPLE: Rgba8 = [128, 0, 128, 255];
/// Ray origin and ray line.
pub const RED: Rgba8 = [255, 0, 0, 255];

/// Widen a pixel for blending.
pub fn to_linear(c: Rgba8) -> DVec4 {
    DVec4::new(c[0] as f64, c[1] as f64, c[2] as f64, c[3] as f64)
}

/// Truncate each channel to a byte.
///
/// Values outside 0..=255 saturate, NaN becomes 0.
pub fn to_rgba8(c: DVec4) -> Rgba8 {
    [c.x as u8, c.y as u8, c.z as u8, c.w as u8]
}

/// Per-channel `a + (b - a) * t`, truncated to bytes.
///
/// `t` is not clamped.
pub fn blend(a: Rgba8, b: Rgba8, t: f64) -> Rgba8 {
    let a = to_linear(a);
    to_rgba8(a + (to_linear(b) - a) * t)
}
