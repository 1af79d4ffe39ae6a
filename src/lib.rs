#![forbid(unsafe_code)]
#![warn(clippy::all, rust_2018_idioms)]

mod app;
pub mod brightness;
pub mod capture;
pub mod clock;
pub mod config;
pub mod error;
mod ticker;

pub use app::ClockOverlay;
pub use config::OverlayConfig;
pub use error::{OverlayError, Result};
