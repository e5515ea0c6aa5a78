//! Per-pixel colour for the sphere demo.

use serde::Deserialize;

use crate::color::{self, Rgba8};
use crate::hittable::Hittable;
use crate::interval::Interval;
use crate::ray::Ray;

/// How a hit is turned into a colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ShadingMode {
    /// Blend background toward the object colour by the normal's z component.
    #[default]
    Lit,
    /// Object colour on any hit.
    Flat,
}

/// Per-pixel colour for a primary ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shader {
    /// Lit or flat.
    pub mode: ShadingMode,
    /// Colour of pixels that miss.
    pub background: Rgba8,
    /// Object colour, fully reached where the normal faces the camera.
    pub object: Rgba8,
}

impl Shader {
    /// Default colours with the given `mode`.
    pub fn new(mode: ShadingMode) -> Self {
        Self {
            mode,
            background: color::BACKGROUND,
            object: color::OBJECT,
        }
    }

    /// Colour seen along `ray`.
    ///
    /// The lit factor is the normal's z component. It is not clamped:
    /// grazing hits can push it slightly outside [0, 1] and the byte
    /// conversion saturates.
    pub fn shade(&self, world: &dyn Hittable, ray: &Ray) -> Rgba8 {
        let Some(rec) = world.hit(ray, Interval::FORWARD) else {
            return self.background;
        };

        match self.mode {
            ShadingMode::Flat => self.object,
            ShadingMode::Lit => {
                let cosalpha = rec.normal.z;
                color::blend(self.background, self.object, cosalpha)
            }
        }
    }
}

impl Default for Shader {
    fn default() -> Self {
        Self::new(ShadingMode::default())
    }
}
