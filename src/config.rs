use std::time::Duration;

use eframe::egui::{pos2, vec2, Pos2, Rect, Vec2};

use crate::brightness::Backdrop;

pub const WINDOW_TITLE: &str = "Transparent Clock";

/// Fixed layout and timing of the overlay. Built once at startup.
#[derive(Debug, Clone)]
pub struct OverlayConfig {
    /// Top-left corner on screen.
    pub position: Pos2,
    pub size: Vec2,
    pub tick_interval: Duration,

    /// Label areas, relative to the window.
    pub date_rect: Rect,
    pub time_rect: Rect,

    pub date_font_size: f32,
    pub time_font_size: f32,
    /// Preferred family. egui ships no system fonts, so the proportional
    /// default is drawn when it isn't registered.
    pub font_family: &'static str,

    /// Assumed until the first successful screen sample.
    pub fallback_backdrop: Backdrop,
}

impl OverlayConfig {
    /// Screen point directly behind the centre of the widget.
    pub fn sample_point(&self) -> (i32, i32) {
        let (x, y) = (self.position.x as i32, self.position.y as i32);
        let (w, h) = (self.size.x as i32, self.size.y as i32);
        (x + w / 2, y + h / 2)
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            position: pos2(1200.0, 2.0),
            size: vec2(250.0, 50.0),
            tick_interval: Duration::from_millis(1000),
            date_rect: Rect::from_min_size(pos2(0.0, 0.0), vec2(250.0, 20.0)),
            time_rect: Rect::from_min_size(pos2(0.0, 20.0), vec2(250.0, 30.0)),
            // 12pt and 15pt at 96 dpi
            date_font_size: 16.0,
            time_font_size: 20.0,
            font_family: "Bahnschrift SemiBold",
            fallback_backdrop: Backdrop::Dark,
        }
    }
}
