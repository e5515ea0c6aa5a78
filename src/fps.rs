//! Frames-per-second sampling driven by host timestamps.

use std::fmt;

/// Default sampling window, in the host's timestamp unit (milliseconds).
pub const DEFAULT_WINDOW_MS: f64 = 1000.0;

/// One published measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FpsSample {
    /// Frames per second over the window.
    pub fps: f64,
    /// Mean time per frame over the window, in milliseconds.
    pub frame_time_ms: f64,
}

impl fmt::Display for FpsSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} last generation: {:.3}ms",
            self.fps, self.frame_time_ms
        )
    }
}

/// Counts ticks and publishes a sample once more than `window_ms` has
/// passed since the previous one.
///
/// The first window starts at timestamp 0, not at the first tick.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    window_ms: f64,
    time_prev: f64,
    frames: u32,
    latest: Option<FpsSample>,
}

impl FpsCounter {
    /// Counter publishing at most once per `window_ms`.
    pub fn new(window_ms: f64) -> Self {
        Self {
            window_ms,
            time_prev: 0.0,
            frames: 0,
            latest: None,
        }
    }

    /// Record a tick at `now`. Returns the new sample when one is published.
    pub fn tick(&mut self, now: f64) -> Option<FpsSample> {
        let elapsed = now - self.time_prev;
        let mut published = None;

        if elapsed > self.window_ms {
            let frames = self.frames as f64;
            // an empty window reports its whole length as the frame time
            let sample = FpsSample {
                fps: frames * 1000.0 / elapsed,
                frame_time_ms: if self.frames > 0 { elapsed / frames } else { elapsed },
            };
            self.time_prev = now;
            self.frames = 0;
            self.latest = Some(sample);
            published = Some(sample);
        }
        self.frames += 1;

        published
    }

    /// Last published sample, if any.
    pub fn latest(&self) -> Option<FpsSample> {
        self.latest
    }

    /// Ticks counted in the current window.
    pub fn frames(&self) -> u32 {
        self.frames
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_published_inside_the_window() {
        let mut counter = FpsCounter::default();
        for k in 1..=30 {
            assert_eq!(counter.tick(k as f64 * 33.0), None);
        }
        assert_eq!(counter.latest(), None);
        assert_eq!(counter.frames(), 30);
    }

    #[test]
    fn crossing_the_window_publishes_once() {
        let mut counter = FpsCounter::default();
        for k in 1..=30 {
            counter.tick(k as f64 * 33.0);
        }

        let sample = counter.tick(31.0 * 33.0).expect("1023ms is past the window");
        assert!((sample.fps - 30.0 * 1000.0 / 1023.0).abs() < 1e-9);
        assert!((sample.frame_time_ms - 1023.0 / 30.0).abs() < 1e-9);
        assert_eq!(counter.frames(), 1);

        assert_eq!(counter.tick(32.0 * 33.0), None);
        assert_eq!(counter.latest(), Some(sample));
    }

    #[test]
    fn exactly_at_the_window_is_not_enough() {
        let mut counter = FpsCounter::default();
        assert_eq!(counter.tick(1000.0), None);
        assert!(counter.tick(1000.5).is_some());
    }

    #[test]
    fn late_first_tick_publishes_an_empty_window() {
        let mut counter = FpsCounter::default();
        let sample = counter.tick(1500.0).expect("1500ms is past the window");

        // no ticks were counted yet: zero fps, and the whole gap as frame time
        assert_eq!(sample.fps, 0.0);
        assert_eq!(sample.frame_time_ms, 1500.0);
        assert!(sample.frame_time_ms.is_finite());
        assert_eq!(counter.frames(), 1);
    }

    #[test]
    fn display_matches_status_format() {
        let sample = FpsSample {
            fps: 59.876,
            frame_time_ms: 16.7012,
        };
        assert_eq!(sample.to_string(), "59.88 last generation: 16.701ms");
    }
}
