use thiserror::Error;

#[derive(Error, Debug)]
pub enum OverlayError {
    #[error("screen capture failed: {0}")]
    Capture(#[from] xcap::XCapError),

    #[error("no monitor contains the point ({x}, {y})")]
    NoMonitorAt { x: i32, y: i32 },

    #[error("point ({x}, {y}) is outside the captured image")]
    PixelOutOfBounds { x: i32, y: i32 },

    #[error("window system error: {0}")]
    Window(#[from] eframe::Error),
}

pub type Result<T> = std::result::Result<T, OverlayError>;
