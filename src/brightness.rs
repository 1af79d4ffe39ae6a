//! Background brightness classification.
//!
//! Luminance uses the fixed Rec. 601 weights `0.299 R + 0.587 G + 0.114 B`.
//! The sum is computed in integer thousandths so the `< 128` threshold is
//! exact: a mid-grey of (128, 128, 128) lands on 128 and counts as light.

use eframe::egui::Color32;

/// Weights scaled by 1000.
const RED_WEIGHT: u32 = 299;
const GREEN_WEIGHT: u32 = 587;
const BLUE_WEIGHT: u32 = 114;

/// Luminance threshold (128) in thousandths.
const DARK_BELOW: u32 = 128_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn weighted_sum(self) -> u32 {
        RED_WEIGHT * u32::from(self.r)
            + GREEN_WEIGHT * u32::from(self.g)
            + BLUE_WEIGHT * u32::from(self.b)
    }

    /// Perceptual luminance in `[0, 255]`.
    pub fn luminance(self) -> f64 {
        f64::from(self.weighted_sum()) / 1000.0
    }
}

/// What the screen behind the widget looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backdrop {
    Light,
    Dark,
}

impl Backdrop {
    pub fn classify(pixel: Rgb) -> Self {
        if pixel.weighted_sum() < DARK_BELOW {
            Backdrop::Dark
        } else {
            Backdrop::Light
        }
    }

    /// Text color that stays readable on this backdrop.
    pub fn text_color(self) -> Color32 {
        match self {
            Backdrop::Light => Color32::BLACK,
            Backdrop::Dark => Color32::WHITE,
        }
    }
}
