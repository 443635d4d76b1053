//! Viewport transform: pan/zoom camera over the infinite board.
//!
//! Screen points are pointer coordinates as reported by the host. `origin`
//! is where the board element's top-left sits on screen, so callers can pass
//! raw client coordinates without subtracting it themselves. Board points are
//! the pan/zoom-independent coordinates every tile and figure is stored in.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{MAX_ZOOM, MIN_ZOOM, WHEEL_ZOOM_IN, WHEEL_ZOOM_OUT};
use crate::geom::Point;

/// Inclusive zoom range the viewport clamps into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    pub min: f64,
    pub max: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self { min: MIN_ZOOM, max: MAX_ZOOM }
    }
}

impl ZoomLimits {
    /// Clamp `zoom` into the range. Total over degenerate limits: a NaN bound
    /// is ignored, and when `min > max` the upper bound wins.
    #[must_use]
    pub fn clamp(self, zoom: f64) -> f64 {
        zoom.max(self.min).min(self.max)
    }
}

/// Camera state for pan/zoom on the infinite board.
///
/// `pan` is in screen pixels relative to `origin`.
/// `zoom` is a scale factor (1.0 = no zoom).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub pan: Point,
    pub zoom: f64,
    pub origin: Point,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { pan: Point::default(), zoom: 1.0, origin: Point::default() }
    }
}

impl Viewport {
    /// Convert a screen-space point to board coordinates.
    #[must_use]
    pub fn screen_to_board(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.origin.x - self.pan.x) / self.zoom,
            y: (screen.y - self.origin.y - self.pan.y) / self.zoom,
        }
    }

    /// Convert a board-space point to screen coordinates.
    #[must_use]
    pub fn board_to_screen(&self, board: Point) -> Point {
        Point {
            x: board.x * self.zoom + self.pan.x + self.origin.x,
            y: board.y * self.zoom + self.pan.y + self.origin.y,
        }
    }

    /// Convert a screen-space distance (pixels) to a board-space distance.
    #[must_use]
    pub fn screen_dist_to_board(&self, screen_dist: f64) -> f64 {
        screen_dist / self.zoom
    }

    /// Shift the pan by a screen-space delta. Pan is unconstrained.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan.x += dx;
        self.pan.y += dy;
    }

    /// Set the zoom (clamped to `limits`) while keeping the board point under
    /// `cursor` fixed on screen. Returns the zoom actually applied.
    pub fn zoom_at(&mut self, cursor: Point, zoom: f64, limits: ZoomLimits) -> f64 {
        let new_zoom = limits.clamp(zoom);
        let scale = new_zoom / self.zoom;
        let m = cursor - self.origin;
        self.pan = Point {
            x: m.x - (m.x - self.pan.x) * scale,
            y: m.y - (m.y - self.pan.y) * scale,
        };
        self.zoom = new_zoom;
        new_zoom
    }

    /// Multiply the zoom by `factor` toward `cursor`. Returns the zoom applied.
    pub fn zoom_by(&mut self, cursor: Point, factor: f64, limits: ZoomLimits) -> f64 {
        self.zoom_at(cursor, self.zoom * factor, limits)
    }
}

/// Zoom factor for one wheel event: scrolling down zooms out, anything else zooms in.
#[must_use]
pub fn wheel_zoom_factor(delta_y: f64) -> f64 {
    if delta_y > 0.0 { WHEEL_ZOOM_OUT } else { WHEEL_ZOOM_IN }
}
