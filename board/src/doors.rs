//! Door location: where each door of a placed tile sits in board space.

#[cfg(test)]
#[path = "doors_test.rs"]
mod doors_test;

use crate::catalog::TileDefinition;
use crate::doc::PlacedTile;
use crate::geom::{Point, rotate_point};
use crate::hex::hex_to_pixel;

/// Absolute board-space positions of every door on `tile`.
///
/// Each door hex is projected into tile-local pixels, rotated around the
/// tile's geometric center by the placement rotation, then translated by the
/// placement's top-left corner. The result follows the order of `def.doors`
/// and is empty when the definition has no doors.
#[must_use]
pub fn door_positions(tile: &PlacedTile, def: &TileDefinition) -> Vec<Point> {
    if def.doors.is_empty() {
        return Vec::new();
    }

    let hex_width = def.effective_hex_width();
    let center = def.center();
    let origin = tile.position();

    def.doors
        .iter()
        .map(|&door| {
            let local = hex_to_pixel(door, hex_width, def.padding);
            rotate_point(local, center, tile.rotation) + origin
        })
        .collect()
}
