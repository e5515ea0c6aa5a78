//! Error types for host bindings and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Failures of the presentation layer. All of them are fatal for the
/// render loop.
#[derive(Debug, Error)]
pub enum HostError {
    /// Zero width or height requested.
    #[error("pixel surface must be at least 1x1, got {width}x{height}")]
    SurfaceSize {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// `present` before `create_surface`.
    #[error("present called before a pixel surface was created")]
    NoSurface,

    /// Nothing has been presented, so there is no frame to save.
    #[error("no frame has been presented yet")]
    NoFrame,

    /// Buffer and surface sizes differ.
    #[error("presented buffer is {got_width}x{got_height}, surface is {width}x{height}")]
    SizeMismatch {
        /// Surface width.
        width: usize,
        /// Surface height.
        height: usize,
        /// Buffer width.
        got_width: usize,
        /// Buffer height.
        got_height: usize,
    },

    /// The window backend reported an error.
    #[error("window error: {0}")]
    Window(String),

    /// Built without the `window` feature.
    #[error("this build has no window support; rebuild with `--features window` or use --headless")]
    WindowUnavailable,

    /// PNG encoding or writing failed.
    #[error("failed to write image {path}: {source}")]
    Image {
        /// Output file.
        path: PathBuf,
        /// Encoder error.
        #[source]
        source: image::ImageError,
    },
}

/// Problems loading or validating a demo configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Config file.
        path: PathBuf,
        /// Read error.
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid for [`DemoConfig`](crate::config::DemoConfig).
    #[error("failed to parse config {path}: {source}")]
    Parse {
        /// Config file.
        path: PathBuf,
        /// TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// Config parsed but describes something the demos cannot draw.
    #[error("invalid config: {0}")]
    Invalid(String),
}
