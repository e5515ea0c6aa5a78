//! minifb window host.

use std::collections::BTreeMap;
use std::time::Instant;

use log::{debug, info};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};

use super::Host;
use crate::buffer::PixelBuffer;
use crate::error::HostError;
use crate::input::InputEvent;

/// Presents frames in a minifb window.
///
/// Left click aims the ray, `C` randomizes the circle, `R` randomizes the
/// ray origin, `Esc` or closing the window stops the loop. Status readouts
/// are appended to the window title.
pub struct WindowHost {
    title: String,
    target_fps: usize,
    window: Option<Window>,
    size: (usize, usize),
    packed: Vec<u32>,
    start: Instant,
    mouse_was_down: bool,
    status: BTreeMap<String, String>,
}

impl WindowHost {
    /// Host for a window titled `title`; the window opens in `create_surface`.
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_owned(),
            target_fps: 60,
            window: None,
            size: (0, 0),
            packed: Vec::new(),
            start: Instant::now(),
            mouse_was_down: false,
            status: BTreeMap::new(),
        }
    }

    fn refresh_title(&mut self) {
        let Some(window) = self.window.as_mut() else {
            return;
        };
        let mut title = self.title.clone();
        for (label, value) in &self.status {
            title.push_str(&format!(" | {label}: {value}"));
        }
        window.set_title(&title);
    }
}

impl Host for WindowHost {
    fn create_surface(&mut self, width: usize, height: usize) -> Result<(), HostError> {
        if width == 0 || height == 0 {
            return Err(HostError::SurfaceSize { width, height });
        }
        let mut window = Window::new(&self.title, width, height, WindowOptions::default())
            .map_err(|e| HostError::Window(e.to_string()))?;
        window.set_target_fps(self.target_fps);

        info!("Opened {}x{} window", width, height);
        self.window = Some(window);
        self.size = (width, height);
        self.start = Instant::now();
        Ok(())
    }

    fn present(&mut self, buffer: &PixelBuffer) -> Result<(), HostError> {
        let window = self.window.as_mut().ok_or(HostError::NoSurface)?;
        let (width, height) = self.size;
        if buffer.width() != width || buffer.height() != height {
            return Err(HostError::SizeMismatch {
                width,
                height,
                got_width: buffer.width(),
                got_height: buffer.height(),
            });
        }

        buffer.to_argb_u32(&mut self.packed);
        window
            .update_with_buffer(&self.packed, width, height)
            .map_err(|e| HostError::Window(e.to_string()))
    }

    fn next_frame(&mut self) -> Option<f64> {
        let window = self.window.as_ref()?;
        if !window.is_open() || window.is_key_down(Key::Escape) {
            debug!("window closed");
            return None;
        }
        Some(self.start.elapsed().as_secs_f64() * 1000.0)
    }

    fn poll_input(&mut self) -> Vec<InputEvent> {
        let Some(window) = self.window.as_ref() else {
            return Vec::new();
        };
        let mut events = Vec::new();

        let down = window.get_mouse_down(MouseButton::Left);
        if down && !self.mouse_was_down {
            if let Some((x, y)) = window.get_mouse_pos(MouseMode::Discard) {
                events.push(InputEvent::PointerDown {
                    x: x as i32,
                    y: y as i32,
                });
            }
        }
        self.mouse_was_down = down;

        if window.is_key_pressed(Key::C, KeyRepeat::No) {
            events.push(InputEvent::RandomizeCircle);
        }
        if window.is_key_pressed(Key::R, KeyRepeat::No) {
            events.push(InputEvent::RandomizeRay);
        }
        events
    }

    fn set_status_text(&mut self, label: &str, value: &str) {
        let changed = self.status.get(label).map(String::as_str) != Some(value);
        if changed {
            self.status.insert(label.to_owned(), value.to_owned());
            self.refresh_title();
        }
    }
}
