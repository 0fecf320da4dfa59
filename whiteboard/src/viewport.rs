#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::consts::{MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
use crate::geometry::Point;

/// Zoom/pan state for one whiteboard session.
///
/// `pan` is in canvas units and `zoom` is a scale factor (1.0 = no zoom).
/// `board_origin` is the screen position of the board's top-left corner,
/// supplied by the host after it measures the board element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub zoom: f64,
    pub pan: Point,
    pub board_origin: Point,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { zoom: 1.0, pan: Point::default(), board_origin: Point::default() }
    }
}

impl Viewport {
    /// Convert a screen-space point to canvas coordinates:
    /// `(screen - board_origin) / zoom - pan`.
    #[must_use]
    pub fn to_canvas(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.board_origin.x) / self.zoom - self.pan.x,
            y: (screen.y - self.board_origin.y) / self.zoom - self.pan.y,
        }
    }

    /// Convert a canvas point back to screen coordinates.
    #[must_use]
    pub fn to_screen(&self, canvas: Point) -> Point {
        Point {
            x: (canvas.x + self.pan.x) * self.zoom + self.board_origin.x,
            y: (canvas.y + self.pan.y) * self.zoom + self.board_origin.y,
        }
    }

    /// Accumulate a pan gesture. Screen deltas are divided by zoom so the
    /// canvas tracks the pointer at any zoom level.
    pub fn pan_by_screen_delta(&mut self, dx: f64, dy: f64) {
        self.pan.x += dx / self.zoom;
        self.pan.y += dy / self.zoom;
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - ZOOM_STEP);
    }

    /// Set zoom, clamped to the allowed range and snapped to the step lattice.
    pub fn set_zoom(&mut self, zoom: f64) {
        if !zoom.is_finite() {
            return;
        }
        let snapped = (zoom / ZOOM_STEP).round() * ZOOM_STEP;
        self.zoom = snapped.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Back to identity: zoom 1, no pan. The board origin is a measurement,
    /// not view state, and is kept.
    pub fn reset_view(&mut self) {
        self.zoom = 1.0;
        self.pan = Point::default();
    }

    /// Transform as a CSS-style `(translate_x, translate_y, scale)` triple in
    /// screen pixels, for hosts that render with a single transform.
    #[must_use]
    pub fn transform(&self) -> (f64, f64, f64) {
        (self.pan.x * self.zoom, self.pan.y * self.zoom, self.zoom)
    }
}
