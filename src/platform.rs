//! SDL2 window, event pump and presentation

use crate::director::Backend;
use crate::input::{self, InputEvent};
use crate::surface::{SdlSurface, Surface};
use sdl2::EventPump;

/// Installs the logger; `RUST_LOG` overrides the default `info` filter
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

/// Calculate the best window scale based on monitor size
pub fn calculate_window_scale(
    video_subsystem: &sdl2::VideoSubsystem,
    logical_width: u32,
    logical_height: u32,
) -> u32 {
    match video_subsystem.desktop_display_mode(0) {
        Ok(display_mode) => fit_scale(display_mode.w, display_mode.h, logical_width, logical_height),
        Err(e) => {
            log::warn!("Could not detect monitor size ({}), using 1x scale", e);
            1
        }
    }
}

/// Largest integer scale that fits 90% of the display, clamped to 1..=2
fn fit_scale(display_w: i32, display_h: i32, logical_width: u32, logical_height: u32) -> u32 {
    // Leave 10% margin for taskbars/decorations
    let usable_w = (display_w as f32 * 0.9) as i32;
    let usable_h = (display_h as f32 * 0.9) as i32;

    let max_scale_w = usable_w / logical_width.max(1) as i32;
    let max_scale_h = usable_h / logical_height.max(1) as i32;

    max_scale_w.min(max_scale_h).clamp(1, 2) as u32
}

pub struct SdlBackend<'a, 't> {
    event_pump: EventPump,
    surface: SdlSurface<'a, 't>,
}

impl<'a, 't> SdlBackend<'a, 't> {
    pub fn new(event_pump: EventPump, mut surface: SdlSurface<'a, 't>) -> Self {
        surface.clear();
        SdlBackend {
            event_pump,
            surface,
        }
    }
}

impl Backend for SdlBackend<'_, '_> {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        input::poll_events(&mut self.event_pump)
    }

    fn clear_events(&mut self) {
        for _ in self.event_pump.poll_iter() {}
    }

    fn surface(&mut self) -> &mut dyn Surface {
        &mut self.surface
    }

    fn present(&mut self) {
        self.surface.present();
        self.surface.clear();
    }
}
