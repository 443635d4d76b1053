//! Planar points and the rotation transform shared by every geometry module.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::consts::{FULL_TURN_DEG, ROTATION_STEP_DEG};

/// A point in screen, board, or tile-local space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Rotate `point` around `center` by `angle_deg` degrees.
///
/// Positive angles turn clockwise on screen because the y axis points down.
/// Any real angle is accepted; non-finite input propagates as NaN.
#[must_use]
pub fn rotate_point(point: Point, center: Point, angle_deg: f64) -> Point {
    let (sin, cos) = angle_deg.to_radians().sin_cos();
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    Point {
        x: center.x + dx * cos - dy * sin,
        y: center.y + dx * sin + dy * cos,
    }
}

/// The rotation one gesture step after `rotation_deg`, normalized into `[0, 360)`.
#[must_use]
pub fn next_rotation(rotation_deg: f64) -> f64 {
    (rotation_deg + ROTATION_STEP_DEG).rem_euclid(FULL_TURN_DEG)
}
