//! Per-tick frame driver.

use log::{debug, info};

use crate::buffer::PixelBuffer;
use crate::demo::Demo;
use crate::error::HostError;
use crate::fps::{FpsCounter, FpsSample};
use crate::host::Host;

/// Lifecycle of a [`FrameDriver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameState {
    /// No tick has been handled yet.
    Idle,
    /// At least one frame has been drawn.
    Rendering,
}

/// Owns the pixel buffer and the FPS counter, and runs one demo frame per
/// host tick.
pub struct FrameDriver {
    state: FrameState,
    fps: FpsCounter,
    buffer: PixelBuffer,
    frames_drawn: u64,
}

impl FrameDriver {
    /// Ask `host` for a `width x height` surface and allocate the buffer.
    pub fn new(width: usize, height: usize, host: &mut dyn Host) -> Result<Self, HostError> {
        host.create_surface(width, height)?;
        Ok(Self {
            state: FrameState::Idle,
            fps: FpsCounter::default(),
            buffer: PixelBuffer::new(width, height),
            frames_drawn: 0,
        })
    }

    /// Replace the FPS sampling window (milliseconds).
    pub fn with_fps_window(mut self, window_ms: f64) -> Self {
        self.fps = FpsCounter::new(window_ms);
        self
    }

    /// Current lifecycle state.
    pub fn state(&self) -> FrameState {
        self.state
    }

    /// Most recent FPS sample.
    pub fn fps(&self) -> Option<FpsSample> {
        self.fps.latest()
    }

    /// The frame drawn last.
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Frames drawn since the driver was created.
    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    /// Draw and present one frame for the tick at `now` (milliseconds).
    pub fn tick(&mut self, now: f64, demo: &mut dyn Demo, host: &mut dyn Host) -> Result<(), HostError> {
        if self.state == FrameState::Idle {
            debug!("first frame of {} at {:.1}ms", demo.name(), now);
            self.state = FrameState::Rendering;
        }

        if let Some(sample) = self.fps.tick(now) {
            debug!("fps {}", sample);
            host.set_status_text("fps", &sample.to_string());
        }

        demo.render(&mut self.buffer);
        if let Some(status) = demo.debug_status() {
            host.set_status_text("debug", &status);
        }

        host.present(&self.buffer)?;
        self.frames_drawn += 1;
        Ok(())
    }

    /// Keep drawing until the host stops delivering ticks.
    ///
    /// Input queued since the previous tick is applied before each frame, so
    /// the scene is never touched while a frame is being drawn. Returns the
    /// number of frames drawn by this call.
    pub fn run(&mut self, demo: &mut dyn Demo, host: &mut dyn Host) -> Result<u64, HostError> {
        let start = self.frames_drawn;
        while let Some(now) = host.next_frame() {
            for event in host.poll_input() {
                demo.handle_input(event);
            }
            self.tick(now, demo, host)?;
        }

        let drawn = self.frames_drawn - start;
        info!("{} stopped after {} frames", demo.name(), drawn);
        Ok(drawn)
    }
}
