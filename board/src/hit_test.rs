use uuid::Uuid;

use super::*;
use crate::catalog::{FigureKind, Size};
use crate::hex::HexCoord;

fn make_def(id: &str, width: f64, height: f64) -> TileDefinition {
    TileDefinition {
        id: id.to_owned(),
        path: String::new(),
        size: Size { width, height },
        padding: Point::default(),
        hexes: vec![HexCoord::new(0, 0)],
        doors: Vec::new(),
        debug_scale: None,
    }
}

fn make_figure(x: f64, y: f64) -> Figure {
    Figure {
        id: Uuid::new_v4(),
        name: "Guard".to_owned(),
        kind: FigureKind::Monster,
        image_path: None,
        x,
        y,
    }
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

// =============================================================
// figure_contains
// =============================================================

#[test]
fn figure_footprint_is_inclusive_square() {
    let fig = make_figure(10.0, 10.0);
    assert!(figure_contains(&fig, pt(10.0, 10.0)));
    assert!(figure_contains(&fig, pt(42.0, 42.0)));
    assert!(!figure_contains(&fig, pt(42.1, 20.0)));
    assert!(!figure_contains(&fig, pt(9.9, 20.0)));
}

// =============================================================
// tile_contains
// =============================================================

#[test]
fn unrotated_tile_contains_its_bounding_box() {
    let def = make_def("wide", 200.0, 50.0);
    let tile = PlacedTile::new("wide", 100.0, 100.0);
    assert!(tile_contains(&tile, &def, pt(150.0, 120.0)));
    assert!(tile_contains(&tile, &def, pt(299.0, 149.0)));
    assert!(!tile_contains(&tile, &def, pt(150.0, 160.0)));
}

#[test]
fn quarter_turn_swaps_covered_area() {
    let def = make_def("wide", 200.0, 50.0);
    let mut tile = PlacedTile::new("wide", 0.0, 0.0);
    tile.rotation = 90.0;
    // Center (100, 25); rotated footprint spans x 75..125, y -75..125.
    assert!(tile_contains(&tile, &def, pt(100.0, -60.0)));
    assert!(!tile_contains(&tile, &def, pt(10.0, 25.0)));
}

#[test]
fn half_turn_covers_same_box() {
    let def = make_def("wide", 200.0, 50.0);
    let mut tile = PlacedTile::new("wide", 0.0, 0.0);
    tile.rotation = 180.0;
    assert!(tile_contains(&tile, &def, pt(5.0, 5.0)));
    assert!(!tile_contains(&tile, &def, pt(5.0, 60.0)));
}

// =============================================================
// hit_test
// =============================================================

#[test]
fn empty_board_hits_nothing() {
    let defs = vec![make_def("a", 100.0, 100.0)];
    assert!(hit_test(pt(0.0, 0.0), &BoardState::new(), &defs).is_none());
}

#[test]
fn figure_above_tile_wins() {
    let defs = vec![make_def("a", 100.0, 100.0)];
    let mut board = BoardState::new();
    board.insert_tile(PlacedTile::new("a", 0.0, 0.0));
    let fig = make_figure(40.0, 40.0);
    board.insert_figure(fig.clone());
    let hit = hit_test(pt(50.0, 50.0), &board, &defs).unwrap();
    assert_eq!(hit, Hit { id: fig.id, kind: HitKind::Figure });
}

#[test]
fn later_tile_wins_overlap() {
    let defs = vec![make_def("a", 100.0, 100.0)];
    let mut board = BoardState::new();
    board.insert_tile(PlacedTile::new("a", 0.0, 0.0));
    let top = PlacedTile::new("a", 50.0, 50.0);
    board.insert_tile(top.clone());
    let hit = hit_test(pt(75.0, 75.0), &board, &defs).unwrap();
    assert_eq!(hit, Hit { id: top.id, kind: HitKind::Tile });
}

#[test]
fn unresolved_tiles_are_not_hit() {
    let defs = vec![make_def("a", 100.0, 100.0)];
    let mut board = BoardState::new();
    let below = PlacedTile::new("a", 0.0, 0.0);
    board.insert_tile(below.clone());
    board.insert_tile(PlacedTile::new("missing", 0.0, 0.0));
    let hit = hit_test(pt(10.0, 10.0), &board, &defs).unwrap();
    assert_eq!(hit.id, below.id);
}

#[test]
fn miss_outside_everything() {
    let defs = vec![make_def("a", 100.0, 100.0)];
    let mut board = BoardState::new();
    board.insert_tile(PlacedTile::new("a", 0.0, 0.0));
    board.insert_figure(make_figure(500.0, 500.0));
    assert!(hit_test(pt(300.0, 300.0), &board, &defs).is_none());
}
