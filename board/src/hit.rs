#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::catalog::{TileDefinition, TileLookup};
use crate::consts::FIGURE_SIZE;
use crate::doc::{BoardState, EntityId, Figure, PlacedTile};
use crate::geom::{Point, rotate_point};

/// What kind of entity was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitKind {
    Tile,
    Figure,
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub id: EntityId,
    pub kind: HitKind,
}

/// Find the topmost entity under `board_pt`.
///
/// Figures draw above tiles, and within each list later placements draw above
/// earlier ones, so both lists are scanned back to front with figures first.
/// Tiles whose definition does not resolve are never hit.
#[must_use]
pub fn hit_test<L>(board_pt: Point, board: &BoardState, lookup: &L) -> Option<Hit>
where
    L: TileLookup + ?Sized,
{
    if let Some(figure) = board.figures.iter().rev().find(|f| figure_contains(f, board_pt)) {
        return Some(Hit { id: figure.id, kind: HitKind::Figure });
    }

    board
        .tiles
        .iter()
        .rev()
        .find(|tile| {
            lookup
                .tile_def(&tile.tile_id)
                .is_some_and(|def| tile_contains(tile, def, board_pt))
        })
        .map(|tile| Hit { id: tile.id, kind: HitKind::Tile })
}

/// Whether `board_pt` falls inside the figure's square footprint.
#[must_use]
pub fn figure_contains(figure: &Figure, board_pt: Point) -> bool {
    let local = board_pt - figure.position();
    (0.0..=FIGURE_SIZE).contains(&local.x) && (0.0..=FIGURE_SIZE).contains(&local.y)
}

/// Whether `board_pt` falls inside the tile image, accounting for rotation.
#[must_use]
pub fn tile_contains(tile: &PlacedTile, def: &TileDefinition, board_pt: Point) -> bool {
    // Undo the placement rotation around the tile center, in tile-local space.
    let local = rotate_point(board_pt - tile.position(), def.center(), -tile.rotation);
    (0.0..=def.size.width).contains(&local.x) && (0.0..=def.size.height).contains(&local.y)
}
