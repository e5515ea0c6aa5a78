//! Presentation layer the frame driver talks to.
//!
//! A host owns the pixel surface, hands out frame ticks and input, and shows
//! status text. `HeadlessHost` simulates all of it for batch runs and tests;
//! `WindowHost` (feature `window`) shows the frames in a minifb window.

mod headless;
#[cfg(feature = "window")]
mod window;

pub use headless::HeadlessHost;
#[cfg(feature = "window")]
pub use window::WindowHost;

use crate::buffer::PixelBuffer;
use crate::error::HostError;
use crate::input::InputEvent;

/// Presentation layer behind the frame driver.
pub trait Host {
    /// Allocate the surface frames will be presented to.
    fn create_surface(&mut self, width: usize, height: usize) -> Result<(), HostError>;

    /// Show a finished frame.
    fn present(&mut self, buffer: &PixelBuffer) -> Result<(), HostError>;

    /// Wait for the next display refresh and return its timestamp in
    /// milliseconds. Timestamps increase monotonically; `None` means the
    /// host has shut down and the loop should stop.
    fn next_frame(&mut self) -> Option<f64>;

    /// Input that arrived since the previous call, oldest first.
    fn poll_input(&mut self) -> Vec<InputEvent>;

    /// Update a labelled readout such as "fps" or "debug".
    fn set_status_text(&mut self, label: &str, value: &str);
}
