use chrono::NaiveDateTime;
use eframe::egui::{
    self, Color32, FontFamily, FontId, Id, Key, Label, RichText, Sense, ViewportCommand, Visuals,
};
use tracing::{debug, info, warn};

use crate::brightness::Backdrop;
use crate::capture::{PixelSource, ScreenCapture};
use crate::clock::DisplayText;
use crate::config::OverlayConfig;
use crate::ticker::Ticker;

/// The overlay: fixed geometry, the timer, the screen probe and whatever the
/// last tick produced.
pub struct ClockOverlay<S = ScreenCapture> {
    config: OverlayConfig,
    source: S,
    ticker: Option<Ticker>,

    text: DisplayText,
    /// `None` until a screen sample succeeds.
    backdrop: Option<Backdrop>,
    capture_failing: bool,
}

impl ClockOverlay {
    /// Must be called from inside a tokio runtime: the tick timer is a task.
    pub fn new(cc: &eframe::CreationContext<'_>, config: OverlayConfig) -> Self {
        let mut visuals = Visuals::dark();
        visuals.panel_fill = Color32::TRANSPARENT;
        visuals.window_fill = Color32::TRANSPARENT;
        cc.egui_ctx.set_visuals(visuals);

        let ctx = cc.egui_ctx.clone();
        let ticker = Ticker::spawn(config.tick_interval, move || ctx.request_repaint());

        let mut overlay = Self::with_source(config, ScreenCapture);
        overlay.ticker = Some(ticker);

        info!(
            family = overlay.config.font_family,
            "preferred font is not bundled, using the default proportional font"
        );
        overlay
    }
}

impl<S: PixelSource> ClockOverlay<S> {
    /// Builds the overlay without a timer and runs the first tick.
    pub fn with_source(config: OverlayConfig, source: S) -> Self {
        let mut overlay = Self {
            config,
            source,
            ticker: None,
            text: DisplayText::default(),
            backdrop: None,
            capture_failing: false,
        };
        overlay.tick();
        overlay
    }

    pub fn tick(&mut self) {
        self.refresh(DisplayText::now());
    }

    pub fn tick_at(&mut self, now: &NaiveDateTime) {
        self.refresh(DisplayText::at(now));
    }

    /// One update: resample the backdrop, then swap in the new labels.
    fn refresh(&mut self, text: DisplayText) {
        self.sample_backdrop();
        self.text = text;
    }

    /// Runs at most one tick per frame, however many firings were missed.
    fn run_due_tick(&mut self) -> bool {
        let due = self.ticker.as_mut().is_some_and(Ticker::take_due);
        if due {
            self.tick();
        }
        due
    }

    fn sample_backdrop(&mut self) {
        let (x, y) = self.config.sample_point();

        match self.source.pixel_at(x, y) {
            Ok(pixel) => {
                let backdrop = Backdrop::classify(pixel);
                debug!(?pixel, luminance = pixel.luminance(), ?backdrop, "sampled backdrop");

                if self.capture_failing {
                    info!("screen capture recovered");
                    self.capture_failing = false;
                }
                self.backdrop = Some(backdrop);
            }
            Err(err) if self.capture_failing => {
                debug!(%err, "screen capture still failing, keeping last color");
            }
            Err(err) => {
                warn!(%err, x, y, "screen capture failed, keeping last color");
                self.capture_failing = true;
            }
        }
    }

    pub fn text(&self) -> &DisplayText {
        &self.text
    }

    pub fn backdrop(&self) -> Backdrop {
        self.backdrop.unwrap_or(self.config.fallback_backdrop)
    }

    pub fn text_color(&self) -> Color32 {
        self.backdrop().text_color()
    }

    fn label(&self, text: &str, size: f32) -> Label {
        let text = RichText::new(text)
            .font(FontId::new(size, FontFamily::Proportional))
            .color(self.text_color());
        Label::new(text).selectable(false)
    }
}

impl<S: PixelSource> eframe::App for ClockOverlay<S> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.run_due_tick();

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let response = ui.interact(ui.max_rect(), Id::new("overlay"), Sense::click());
                if response.secondary_clicked() {
                    ui.ctx().send_viewport_cmd(ViewportCommand::Close);
                }

                ui.put(
                    self.config.date_rect,
                    self.label(&self.text.date, self.config.date_font_size),
                );
                ui.put(
                    self.config.time_rect,
                    self.label(&self.text.time, self.config.time_font_size),
                );
            });

        if ctx.input(|i| i.modifiers.command && i.key_pressed(Key::Q)) {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }
    }

    fn clear_color(&self, _visuals: &Visuals) -> [f32; 4] {
        Color32::TRANSPARENT.to_normalized_gamma_f32()
    }
}
