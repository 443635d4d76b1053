//! Hex grid addressing and projection into tile-local pixels.
//!
//! Tiles use pointy-topped hexagons in an odd-r offset layout: every odd row
//! is shoved right by half a hex width. The projection here is the single
//! source of truth for where a hex cell sits inside a tile image; door
//! location and the tile editor both build on it.

#[cfg(test)]
#[path = "hex_test.rs"]
mod hex_test;

use serde::{Deserialize, Serialize};

use crate::consts::{HEX_HEIGHT_RATIO, HEX_ROW_STEP};
use crate::geom::Point;

/// Integer `(col, row)` address of a hex cell within a tile's local grid.
///
/// Serialized as `{ "x": col, "y": row }` to stay compatible with existing
/// catalog files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HexCoord {
    #[serde(rename = "x")]
    pub col: i32,
    #[serde(rename = "y")]
    pub row: i32,
}

impl HexCoord {
    #[must_use]
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Whether this cell sits on an odd row (and is therefore shifted right).
    ///
    /// Uses the Euclidean remainder so that row `-1` counts as odd.
    #[must_use]
    pub fn is_odd_row(self) -> bool {
        self.row.rem_euclid(2) == 1
    }
}

/// Height of a pointy-topped hex with the given width.
#[must_use]
pub fn hex_height(hex_width: f64) -> f64 {
    hex_width * HEX_HEIGHT_RATIO
}

/// Tile-local pixel position of `hex`, measured from the tile's top-left.
///
/// `padding` is the offset of the hex grid origin inside the tile image.
#[must_use]
pub fn hex_to_pixel(hex: HexCoord, hex_width: f64, padding: Point) -> Point {
    let shift = if hex.is_odd_row() { 0.5 } else { 0.0 };
    Point {
        x: padding.x + hex_width * (f64::from(hex.col) + shift),
        y: padding.y + hex_height(hex_width) * HEX_ROW_STEP * f64::from(hex.row),
    }
}
