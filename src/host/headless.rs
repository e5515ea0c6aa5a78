//! Display-less host for batch runs and tests.

use std::collections::{BTreeMap, VecDeque};
use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use log::debug;

use super::Host;
use crate::buffer::PixelBuffer;
use crate::error::HostError;
use crate::input::InputEvent;
use crate::output::save_png;

/// Host without a display.
///
/// Delivers a fixed number of ticks spaced `interval_ms` apart (the first at
/// `interval_ms`), replays scripted input before the frame it is scheduled
/// for, and keeps the last presented frame.
pub struct HeadlessHost {
    surface: Option<(usize, usize)>,
    frames: u64,
    delivered: u64,
    presented: u64,
    interval_ms: f64,
    events: VecDeque<(u64, InputEvent)>,
    status: BTreeMap<String, String>,
    last_frame: Option<PixelBuffer>,
    progress: ProgressBar,
}

impl HeadlessHost {
    /// Host that delivers `frames` ticks, `interval_ms` apart.
    pub fn new(frames: u64, interval_ms: f64) -> Self {
        Self {
            surface: None,
            frames,
            delivered: 0,
            presented: 0,
            interval_ms,
            events: VecDeque::new(),
            status: BTreeMap::new(),
            last_frame: None,
            progress: ProgressBar::hidden(),
        }
    }

    /// Deliver `event` right before frame `frame` (0-based) is drawn.
    ///
    /// Events must be added in frame order.
    pub fn with_event(mut self, frame: u64, event: InputEvent) -> Self {
        self.events.push_back((frame, event));
        self
    }

    /// Show a terminal progress bar while frames are presented.
    pub fn with_progress(mut self) -> Self {
        let pb = ProgressBar::new(self.frames);
        if let Ok(style) = ProgressStyle::default_bar().template("{bar:40} {pos}/{len} frames ETA: {eta}") {
            pb.set_style(style);
        }
        self.progress = pb;
        self
    }

    /// Last value set for a status `label`.
    pub fn status(&self, label: &str) -> Option<&str> {
        self.status.get(label).map(String::as_str)
    }

    /// Copy of the last presented frame.
    pub fn last_frame(&self) -> Option<&PixelBuffer> {
        self.last_frame.as_ref()
    }

    /// Number of frames presented so far.
    pub fn presented(&self) -> u64 {
        self.presented
    }

    /// Write the last presented frame as PNG.
    pub fn save_last_frame(&self, path: &Path) -> Result<(), HostError> {
        let frame = self.last_frame.as_ref().ok_or(HostError::NoFrame)?;
        save_png(frame, path)
    }
}

impl Host for HeadlessHost {
    fn create_surface(&mut self, width: usize, height: usize) -> Result<(), HostError> {
        if width == 0 || height == 0 {
            return Err(HostError::SurfaceSize { width, height });
        }
        debug!("headless surface {}x{}", width, height);
        self.surface = Some((width, height));
        Ok(())
    }

    fn present(&mut self, buffer: &PixelBuffer) -> Result<(), HostError> {
        let (width, height) = self.surface.ok_or(HostError::NoSurface)?;
        if buffer.width() != width || buffer.height() != height {
            return Err(HostError::SizeMismatch {
                width,
                height,
                got_width: buffer.width(),
                got_height: buffer.height(),
            });
        }

        match &mut self.last_frame {
            Some(frame) => frame.clone_from(buffer),
            None => self.last_frame = Some(buffer.clone()),
        }
        self.presented += 1;
        self.progress.inc(1);
        Ok(())
    }

    fn next_frame(&mut self) -> Option<f64> {
        if self.delivered >= self.frames {
            self.progress.finish();
            return None;
        }
        self.delivered += 1;
        Some(self.delivered as f64 * self.interval_ms)
    }

    fn poll_input(&mut self) -> Vec<InputEvent> {
        // The frame about to be drawn has index `delivered - 1`.
        let current = self.delivered.saturating_sub(1);
        let mut ready = Vec::new();
        while let Some(&(frame, event)) = self.events.front() {
            if frame > current {
                break;
            }
            ready.push(event);
            self.events.pop_front();
        }
        ready
    }

    fn set_status_text(&mut self, label: &str, value: &str) {
        self.status.insert(label.to_owned(), value.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_are_evenly_spaced_and_finite() {
        let mut host = HeadlessHost::new(3, 20.0);
        assert_eq!(host.next_frame(), Some(20.0));
        assert_eq!(host.next_frame(), Some(40.0));
        assert_eq!(host.next_frame(), Some(60.0));
        assert_eq!(host.next_frame(), None);
    }

    #[test]
    fn events_arrive_before_their_frame() {
        let mut host = HeadlessHost::new(3, 10.0)
            .with_event(0, InputEvent::RandomizeRay)
            .with_event(2, InputEvent::PointerDown { x: 1, y: 2 });

        host.next_frame();
        assert_eq!(host.poll_input(), vec![InputEvent::RandomizeRay]);
        host.next_frame();
        assert!(host.poll_input().is_empty());
        host.next_frame();
        assert_eq!(host.poll_input(), vec![InputEvent::PointerDown { x: 1, y: 2 }]);
    }

    #[test]
    fn present_requires_matching_surface() {
        let mut host = HeadlessHost::new(1, 16.0);
        let buffer = PixelBuffer::new(4, 4);
        assert!(matches!(host.present(&buffer), Err(HostError::NoSurface)));

        host.create_surface(4, 4).unwrap();
        host.present(&buffer).unwrap();
        assert_eq!(host.presented(), 1);
        assert_eq!(host.last_frame(), Some(&buffer));

        let wrong = PixelBuffer::new(2, 4);
        assert!(matches!(host.present(&wrong), Err(HostError::SizeMismatch { .. })));
    }

    #[test]
    fn saving_before_any_frame_reports_no_frame() {
        let mut host = HeadlessHost::new(0, 16.0);
        host.create_surface(4, 4).unwrap();
        assert_eq!(host.next_frame(), None);

        let err = host.save_last_frame(Path::new("unused.png")).unwrap_err();
        assert!(matches!(err, HostError::NoFrame));
        assert_eq!(err.to_string(), "no frame has been presented yet");
    }

    #[test]
    fn zero_sized_surface_is_rejected() {
        let mut host = HeadlessHost::new(1, 16.0);
        assert!(matches!(
            host.create_surface(0, 10),
            Err(HostError::SurfaceSize { width: 0, height: 10 })
        ));
    }
}
