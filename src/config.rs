//! Demo configuration, loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file) gives the stock
//! demo: a 300x600 raster, the sphere at (0, 0, -30) with radius 0.5, and
//! the 2D ray starting at the canvas corner.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::color::{self, Rgba8};
use crate::demo::DemoKind;
use crate::error::ConfigError;
use crate::fps::DEFAULT_WINDOW_MS;
use crate::shader::ShadingMode;
use crate::sphere::RadiusTerm;

/// Raster width when none is configured.
pub const DEFAULT_WIDTH: usize = 300;
/// Raster height when none is configured.
pub const DEFAULT_HEIGHT: usize = 600;
/// Bound on circle coordinates and radius so outline drawing stays in `i32`.
/// The ray direction is unbounded.
pub const MAX_COORDINATE: i32 = 1 << 20;

/// Top level of `raydemos.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Demo to run.
    pub demo: DemoKind,
    /// Raster width in pixels.
    pub width: usize,
    /// Raster height in pixels.
    pub height: usize,
    /// FPS sampling window in milliseconds.
    pub fps_window_ms: f64,
    /// Seed for the randomize handlers; entropy when absent.
    pub seed: Option<u64>,
    /// `[circle]` table.
    pub circle: CircleConfig,
    /// `[sphere]` table.
    pub sphere: SphereConfig,
}

/// Starting scene of the circle demo, in canvas pixels.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CircleConfig {
    /// Circle center.
    pub center: [i32; 2],
    /// Circle radius.
    pub radius: i32,
    /// Ray start.
    pub ray_origin: [i32; 2],
    /// Ray direction; its length only affects how far the ray is drawn.
    pub ray_direction: [i32; 2],
    /// Canvas origin in host coordinates.
    pub canvas_offset: [i32; 2],
}

/// Scene and shading of the sphere demo.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SphereConfig {
    /// Sphere center.
    pub center: [f64; 3],
    /// Sphere radius.
    pub radius: f64,
    /// Power of the radius used by the solver.
    pub radius_term: RadiusTerm,
    /// z of the plane primary rays start from.
    pub camera_z: f64,
    /// Lit or flat shading.
    pub shading: ShadingMode,
    /// Colour of pixels that miss.
    pub background: Rgba8,
    /// Sphere colour.
    pub object: Rgba8,
    /// Shade rows on the rayon pool.
    pub parallel: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            demo: DemoKind::default(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            fps_window_ms: DEFAULT_WINDOW_MS,
            seed: None,
            circle: CircleConfig::default(),
            sphere: SphereConfig::default(),
        }
    }
}

impl Default for CircleConfig {
    fn default() -> Self {
        Self {
            center: [0, 0],
            radius: 10,
            ray_origin: [0, 0],
            ray_direction: [10, 10],
            canvas_offset: [0, 0],
        }
    }
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            center: [0.0, 0.0, -30.0],
            radius: 0.5,
            radius_term: RadiusTerm::default(),
            camera_z: 1.0,
            shading: ShadingMode::default(),
            background: color::BACKGROUND,
            object: color::OBJECT,
            parallel: true,
        }
    }
}

impl DemoConfig {
    /// Parse without validating.
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Read and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject rasters and scenes the demos cannot draw.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "raster must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        if i32::try_from(self.width).is_err() || i32::try_from(self.height).is_err() {
            return Err(ConfigError::Invalid(format!(
                "raster {}x{} does not fit pixel coordinates",
                self.width, self.height
            )));
        }
        if !(self.fps_window_ms > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "fps_window_ms must be positive, got {}",
                self.fps_window_ms
            )));
        }
        let c = &self.circle;
        if !(0..=MAX_COORDINATE).contains(&c.radius) {
            return Err(ConfigError::Invalid(format!(
                "circle radius must be in 0..={}, got {}",
                MAX_COORDINATE, c.radius
            )));
        }
        for (name, [x, y]) in [
            ("circle.center", c.center),
            ("circle.ray_origin", c.ray_origin),
            ("circle.canvas_offset", c.canvas_offset),
        ] {
            let bound = MAX_COORDINATE.unsigned_abs();
            if x.unsigned_abs() > bound || y.unsigned_abs() > bound {
                return Err(ConfigError::Invalid(format!(
                    "{} must be within +/-{}, got [{}, {}]",
                    name, MAX_COORDINATE, x, y
                )));
            }
        }
        if self.sphere.radius < 0.0 || !self.sphere.radius.is_finite() {
            return Err(ConfigError::Invalid(format!(
                "sphere radius must be a non-negative number, got {}",
                self.sphere.radius
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = DemoConfig::from_toml_str("").unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.sphere.radius_term, RadiusTerm::Cubed);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn nested_tables_override_defaults() {
        let config = DemoConfig::from_toml_str(
            r#"
            demo = "circle"
            width = 640
            seed = 9

            [circle]
            center = [100, 120]
            radius = 30

            [sphere]
            radius_term = "squared"
            shading = "flat"
            object = [255, 0, 0, 255]
            "#,
        )
        .unwrap();

        assert_eq!(config.demo, DemoKind::Circle);
        assert_eq!(config.width, 640);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.circle.center, [100, 120]);
        assert_eq!(config.circle.ray_direction, [10, 10]);
        assert_eq!(config.sphere.radius_term, RadiusTerm::Squared);
        assert_eq!(config.sphere.shading, ShadingMode::Flat);
        assert_eq!(config.sphere.object, [255, 0, 0, 255]);
        assert_eq!(config.sphere.camera_z, 1.0);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(DemoConfig::from_toml_str("widht = 10").is_err());
    }

    #[test]
    fn zero_raster_is_invalid() {
        let config = DemoConfig {
            height: 0,
            ..DemoConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn circle_geometry_is_bounded_but_direction_is_not() {
        let mut config = DemoConfig::from_toml_str(
            r#"
            [circle]
            ray_direction = [2147483647, -2147483648]
            "#,
        )
        .unwrap();
        assert!(config.validate().is_ok());

        config.circle.radius = -1;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.circle.radius = 10;
        config.circle.center = [i32::MIN, 0];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("circle.center"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = DemoConfig::load(Path::new("/nonexistent/raydemos.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/raydemos.toml"));
    }
}
