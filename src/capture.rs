//! Reading single pixels off the screen.
//!
//! Points handed in are in logical points, the unit the window is placed in.
//! Captured images are always in physical pixels, while xcap reports monitor
//! bounds in logical units on some platforms and physical on others. The
//! image/bounds width ratio tells the two apart.

use xcap::image::RgbaImage;
use xcap::{Monitor, XCapError};

use crate::brightness::Rgb;
use crate::error::{OverlayError, Result};

/// Anything that can report the color at a screen coordinate.
pub trait PixelSource {
    fn pixel_at(&mut self, x: i32, y: i32) -> Result<Rgb>;
}

/// Samples the live desktop through xcap.
#[derive(Debug, Default)]
pub struct ScreenCapture;

impl PixelSource for ScreenCapture {
    fn pixel_at(&mut self, x: i32, y: i32) -> Result<Rgb> {
        let monitor = Monitor::from_point(x, y).map_err(|err| lookup_error(err, x, y))?;
        let area = MonitorArea::read(&monitor)?;
        let image = monitor.capture_image()?;

        pixel_in(&area, &image, x, y)
    }
}

/// Monitor placement as xcap reports it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct MonitorArea {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    /// Physical pixels per logical point.
    pub scale: f32,
}

impl MonitorArea {
    fn read(monitor: &Monitor) -> Result<Self> {
        Ok(Self {
            x: monitor.x()?,
            y: monitor.y()?,
            width: monitor.width()?,
            height: monitor.height()?,
            scale: monitor.scale_factor()?,
        })
    }

    /// Right and bottom edges are exclusive.
    fn contains(&self, x: f64, y: f64) -> bool {
        let (left, top) = (f64::from(self.x), f64::from(self.y));
        let right = left + f64::from(self.width);
        let bottom = top + f64::from(self.height);
        x >= left && x < right && y >= top && y < bottom
    }

    /// Maps a logical point to a pixel of an image captured from this monitor.
    pub(crate) fn image_pixel(
        &self,
        x: i32,
        y: i32,
        image_width: u32,
        image_height: u32,
    ) -> Option<(u32, u32)> {
        let pixels_per_unit = f64::from(image_width) / f64::from(self.width.max(1));
        let units_per_point = f64::from(self.scale) / pixels_per_unit;

        let unit_x = f64::from(x) * units_per_point;
        let unit_y = f64::from(y) * units_per_point;
        if !self.contains(unit_x, unit_y) {
            return None;
        }

        let pixel_x = ((unit_x - f64::from(self.x)) * pixels_per_unit).floor() as u32;
        let pixel_y = ((unit_y - f64::from(self.y)) * pixels_per_unit).floor() as u32;
        (pixel_x < image_width && pixel_y < image_height).then_some((pixel_x, pixel_y))
    }
}

fn pixel_in(area: &MonitorArea, image: &RgbaImage, x: i32, y: i32) -> Result<Rgb> {
    let [r, g, b, _] = area
        .image_pixel(x, y, image.width(), image.height())
        .and_then(|(px, py)| image.get_pixel_checked(px, py))
        .ok_or(OverlayError::PixelOutOfBounds { x, y })?
        .0;

    Ok(Rgb::new(r, g, b))
}

/// xcap reports "no monitor here" as a plain message error.
fn lookup_error(err: XCapError, x: i32, y: i32) -> OverlayError {
    match err {
        XCapError::Error(_) => OverlayError::NoMonitorAt { x, y },
        other => OverlayError::Capture(other),
    }
}

#[cfg(test)]
mod tests {
    use xcap::image::Rgba;

    use super::*;

    fn area(x: i32, y: i32, width: u32, height: u32, scale: f32) -> MonitorArea {
        MonitorArea {
            x,
            y,
            width,
            height,
            scale,
        }
    }

    #[test]
    fn right_and_bottom_edges_are_outside() {
        let full_hd = area(0, 0, 1920, 1080, 1.0);

        assert_eq!(full_hd.image_pixel(1919, 1079, 1920, 1080), Some((1919, 1079)));
        assert_eq!(full_hd.image_pixel(1920, 10, 1920, 1080), None);
        assert_eq!(full_hd.image_pixel(10, 1080, 1920, 1080), None);
    }

    #[test]
    fn points_beside_the_monitor_are_outside() {
        let right_hand = area(1920, 0, 1920, 1080, 1.0);

        assert_eq!(right_hand.image_pixel(1325, 27, 1920, 1080), None);
        assert_eq!(right_hand.image_pixel(1925, -1, 1920, 1080), None);
    }

    #[test]
    fn scaled_monitor_maps_to_physical_pixels() {
        // Bounds in logical units, image in physical pixels.
        let logical = area(0, 0, 1280, 720, 2.0);
        assert_eq!(logical.image_pixel(1325 / 2, 27, 2560, 1440), Some((1324, 54)));

        // Bounds already physical.
        let physical = area(0, 0, 2560, 1440, 2.0);
        assert_eq!(physical.image_pixel(1325 / 2, 27, 2560, 1440), Some((1324, 54)));
    }

    #[test]
    fn widget_centre_on_a_hidpi_screen_lands_behind_the_widget() {
        let physical = area(0, 0, 3840, 2160, 2.0);

        assert_eq!(physical.image_pixel(1325, 27, 3840, 2160), Some((2650, 54)));
    }

    #[test]
    fn negative_origin_monitor() {
        let left_hand = area(-1920, 0, 1920, 1080, 1.0);

        assert_eq!(left_hand.image_pixel(-1, 5, 1920, 1080), Some((1919, 5)));
        assert_eq!(left_hand.image_pixel(-1920, 0, 1920, 1080), Some((0, 0)));
        assert_eq!(left_hand.image_pixel(0, 5, 1920, 1080), None);
    }

    #[test]
    fn reads_the_mapped_pixel() {
        let mut image = RgbaImage::new(4, 4);
        image.put_pixel(2, 1, Rgba([10, 20, 30, 255]));

        let rgb = pixel_in(&area(100, 100, 4, 4, 1.0), &image, 102, 101).unwrap();

        assert_eq!(rgb, Rgb::new(10, 20, 30));
    }

    #[test]
    fn point_off_the_image_is_out_of_bounds() {
        let image = RgbaImage::new(4, 4);

        let err = pixel_in(&area(0, 0, 4, 4, 1.0), &image, 7, 1).unwrap_err();

        assert!(matches!(err, OverlayError::PixelOutOfBounds { x: 7, y: 1 }));
    }

    #[test]
    fn missing_monitor_is_reported_as_such() {
        let err = lookup_error(XCapError::new("Not found monitor"), -5000, 0);

        assert!(matches!(err, OverlayError::NoMonitorAt { x: -5000, y: 0 }));
    }
}
