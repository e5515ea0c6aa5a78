use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use raydemos::config::DemoConfig;
use raydemos::demo::DemoKind;
use raydemos::shader::ShadingMode;
use raydemos::sphere::RadiusTerm;

/// Config file picked up when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "raydemos.toml";

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Parser)]
#[command(name = "raydemos")]
#[command(about = "Ray-circle and ray-sphere intersection demos")]
pub struct Args {
    /// Which demo to run
    #[arg(long, value_enum)]
    pub demo: Option<DemoKind>,

    /// TOML config file (defaults to ./raydemos.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Raster width in pixels
    #[arg(long)]
    pub width: Option<usize>,

    /// Raster height in pixels
    #[arg(long)]
    pub height: Option<usize>,

    /// Sphere shading: lit blends by the surface normal, flat uses one colour
    #[arg(long, value_enum)]
    pub shading: Option<ShadingMode>,

    /// Power of the radius in the sphere solver (cubed is the stock look)
    #[arg(long, value_enum)]
    pub radius_term: Option<RadiusTerm>,

    /// z of the plane primary rays start from
    #[arg(long)]
    pub camera_z: Option<f64>,

    /// Seed for the randomize handlers
    #[arg(long)]
    pub seed: Option<u64>,

    /// Shade sphere rows on one thread
    #[arg(long)]
    pub sequential: bool,

    /// Render without a window and save the last frame
    #[arg(long)]
    pub headless: bool,

    /// Number of frames to render in headless mode
    #[arg(long, default_value = "120")]
    pub frames: u64,

    /// Simulated time between headless frames
    #[arg(long, default_value = "16.667")]
    pub frame_interval_ms: f64,

    /// Pointer press before the first headless frame, as X,Y
    #[arg(long, value_parser = parse_point)]
    pub pointer: Option<(i32, i32)>,

    /// PNG written at the end of a headless run
    #[arg(short, long, default_value = "frame.png")]
    pub output: PathBuf,
}

impl Args {
    /// Overlay command line flags on a loaded config.
    pub fn apply(&self, config: &mut DemoConfig) {
        if let Some(demo) = self.demo {
            config.demo = demo;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(shading) = self.shading {
            config.sphere.shading = shading;
        }
        if let Some(term) = self.radius_term {
            config.sphere.radius_term = term;
        }
        if let Some(z) = self.camera_z {
            config.sphere.camera_z = z;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.sequential {
            config.sphere.parallel = false;
        }
    }
}

fn parse_point(s: &str) -> Result<(i32, i32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let x = x.trim().parse().map_err(|e| format!("bad x '{x}': {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y '{y}': {e}"))?;
    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let args = Args::parse_from([
            "raydemos",
            "--demo",
            "circle",
            "--width",
            "640",
            "--radius-term",
            "squared",
            "--sequential",
            "--pointer",
            "10, 20",
        ]);
        let mut config = DemoConfig::default();
        args.apply(&mut config);

        assert_eq!(config.demo, DemoKind::Circle);
        assert_eq!(config.width, 640);
        assert_eq!(config.height, 600);
        assert_eq!(config.sphere.radius_term, RadiusTerm::Squared);
        assert!(!config.sphere.parallel);
        assert_eq!(args.pointer, Some((10, 20)));
    }

    #[test]
    fn malformed_point_is_rejected() {
        assert!(parse_point("10").is_err());
        assert!(parse_point("a,2").is_err());
    }
}
