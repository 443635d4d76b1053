//! Door snapping: align a dragged tile's door with the nearest door on the board.

#[cfg(test)]
#[path = "snap_test.rs"]
mod snap_test;

use crate::catalog::TileLookup;
use crate::doc::PlacedTile;
use crate::doors::door_positions;
use crate::geom::Point;

/// The closest qualifying door pair found by [`find_snap_match`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapMatch {
    /// Top-left corner the dragged tile must move to.
    pub position: Point,
    /// Door on the dragged tile, before the move.
    pub from_door: Point,
    /// Door on the other tile that `from_door` lands on.
    pub to_door: Point,
    /// Distance between the two doors before the move.
    pub distance: f64,
}

/// Position that makes one of `dragged`'s doors coincide with the nearest door
/// on another tile, or `None` when no door pair is closer than `threshold`.
///
/// See [`find_snap_match`] for the search rules.
#[must_use]
pub fn find_snap<L>(dragged: &PlacedTile, tiles: &[PlacedTile], lookup: &L, threshold: f64) -> Option<Point>
where
    L: TileLookup + ?Sized,
{
    find_snap_match(dragged, tiles, lookup, threshold).map(|m| m.position)
}

/// Search every other tile's doors for the pair closest to one of `dragged`'s doors.
///
/// - Tiles with the dragged tile's id, and tiles whose definition does not
///   resolve, are skipped.
/// - A pair qualifies only when its distance is strictly below `threshold`.
/// - Exact ties keep the first pair encountered, in `tiles` order, then the
///   dragged tile's door order, then the other tile's door order.
///
/// Cost is O(T·D²) for T tiles with D doors each.
#[must_use]
pub fn find_snap_match<L>(dragged: &PlacedTile, tiles: &[PlacedTile], lookup: &L, threshold: f64) -> Option<SnapMatch>
where
    L: TileLookup + ?Sized,
{
    let def = lookup.tile_def(&dragged.tile_id)?;
    let own_doors = door_positions(dragged, def);
    if own_doors.is_empty() {
        return None;
    }

    let mut best: Option<SnapMatch> = None;
    let mut best_distance = threshold;

    for other in tiles {
        if other.id == dragged.id {
            continue;
        }
        let Some(other_def) = lookup.tile_def(&other.tile_id) else {
            tracing::debug!(tile = %other.id, tile_id = %other.tile_id, "snap scan skipped unresolved tile");
            continue;
        };

        let other_doors = door_positions(other, other_def);
        for &from_door in &own_doors {
            for &to_door in &other_doors {
                let distance = from_door.distance(to_door);
                if distance < best_distance {
                    best_distance = distance;
                    best = Some(SnapMatch {
                        position: dragged.position() + (to_door - from_door),
                        from_door,
                        to_door,
                        distance,
                    });
                }
            }
        }
    }

    best
}
