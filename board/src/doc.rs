//! Board document: placed tiles, figure tokens, and the state that owns them.
//!
//! `BoardState` is the whole persisted layout. It keeps tiles and figures in
//! placement order because that order is observable: later placements draw
//! (and hit-test) above earlier ones, and the snap search breaks exact ties
//! by it. Ids are unique within each list; inserting an entity whose id is
//! already present replaces it where it stands.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{FigureKind, TileDefinition, TileLookup};
use crate::geom::{Point, next_rotation};

/// Unique identifier for a placed tile or a figure.
pub type EntityId = Uuid;

/// A tile instance on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedTile {
    /// Unique per placement; distinct from `tile_id`.
    pub id: EntityId,
    /// Catalog key of the tile definition.
    pub tile_id: String,
    /// Left edge in board space.
    pub x: f64,
    /// Top edge in board space.
    pub y: f64,
    /// Clockwise rotation in degrees, one of 0, 60, …, 300.
    pub rotation: f64,
}

impl PlacedTile {
    /// Place a fresh instance of `tile_id` at `(x, y)` with no rotation.
    #[must_use]
    pub fn new(tile_id: impl Into<String>, x: f64, y: f64) -> Self {
        Self { id: Uuid::new_v4(), tile_id: tile_id.into(), x, y, rotation: 0.0 }
    }

    /// Top-left corner in board space.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A figure token on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Figure {
    pub id: EntityId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FigureKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    /// Left edge of the token footprint in board space.
    pub x: f64,
    /// Top edge of the token footprint in board space.
    pub y: f64,
}

impl Figure {
    /// Top-left corner in board space.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// All placed tiles and figures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardState {
    #[serde(default)]
    pub tiles: Vec<PlacedTile>,
    #[serde(default)]
    pub figures: Vec<Figure>,
}

impl BoardState {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a tile, replacing any tile with the same id in place.
    pub fn insert_tile(&mut self, tile: PlacedTile) {
        match self.tile_mut(&tile.id) {
            Some(existing) => *existing = tile,
            None => self.tiles.push(tile),
        }
    }

    /// Insert a figure, replacing any figure with the same id in place.
    pub fn insert_figure(&mut self, figure: Figure) {
        match self.figure_mut(&figure.id) {
            Some(existing) => *existing = figure,
            None => self.figures.push(figure),
        }
    }

    /// Remove a tile by id, returning it if it was present.
    pub fn remove_tile(&mut self, id: &EntityId) -> Option<PlacedTile> {
        let index = self.tiles.iter().position(|t| t.id == *id)?;
        Some(self.tiles.remove(index))
    }

    /// Remove a figure by id, returning it if it was present.
    pub fn remove_figure(&mut self, id: &EntityId) -> Option<Figure> {
        let index = self.figures.iter().position(|f| f.id == *id)?;
        Some(self.figures.remove(index))
    }

    #[must_use]
    pub fn tile(&self, id: &EntityId) -> Option<&PlacedTile> {
        self.tiles.iter().find(|t| t.id == *id)
    }

    pub fn tile_mut(&mut self, id: &EntityId) -> Option<&mut PlacedTile> {
        self.tiles.iter_mut().find(|t| t.id == *id)
    }

    #[must_use]
    pub fn figure(&self, id: &EntityId) -> Option<&Figure> {
        self.figures.iter().find(|f| f.id == *id)
    }

    pub fn figure_mut(&mut self, id: &EntityId) -> Option<&mut Figure> {
        self.figures.iter_mut().find(|f| f.id == *id)
    }

    /// Move a tile's top-left corner. Returns false if the tile doesn't exist.
    pub fn move_tile(&mut self, id: &EntityId, to: Point) -> bool {
        let Some(tile) = self.tile_mut(id) else {
            return false;
        };
        tile.x = to.x;
        tile.y = to.y;
        true
    }

    /// Move a figure's top-left corner. Returns false if the figure doesn't exist.
    pub fn move_figure(&mut self, id: &EntityId, to: Point) -> bool {
        let Some(figure) = self.figure_mut(id) else {
            return false;
        };
        figure.x = to.x;
        figure.y = to.y;
        true
    }

    /// Advance a tile's rotation by one 60° step, returning the new rotation.
    pub fn rotate_tile(&mut self, id: &EntityId) -> Option<f64> {
        let tile = self.tile_mut(id)?;
        tile.rotation = next_rotation(tile.rotation);
        Some(tile.rotation)
    }

    /// Replace the whole board with `snapshot`.
    ///
    /// Entries with a repeated id collapse onto the first slot that id
    /// occupied, holding the last value seen.
    pub fn load_snapshot(&mut self, snapshot: BoardState) {
        self.tiles.clear();
        self.figures.clear();
        for tile in snapshot.tiles {
            self.insert_tile(tile);
        }
        for figure in snapshot.figures {
            self.insert_figure(figure);
        }
    }

    /// Placed tiles paired with their definitions, in placement order.
    ///
    /// Tiles whose `tile_id` does not resolve are skipped.
    pub fn resolved_tiles<'a, L>(&'a self, lookup: &'a L) -> impl Iterator<Item = (&'a PlacedTile, &'a TileDefinition)>
    where
        L: TileLookup + ?Sized,
    {
        self.tiles
            .iter()
            .filter_map(move |tile| lookup.tile_def(&tile.tile_id).map(|def| (tile, def)))
    }

    /// Number of tiles and figures on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len() + self.figures.len()
    }

    /// Returns `true` if the board holds no tiles and no figures.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty() && self.figures.is_empty()
    }
}
