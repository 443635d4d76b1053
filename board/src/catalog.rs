//! Static catalogs: tile definitions, figure palette entries, and lookup.
//!
//! A [`TileDefinition`] describes one printed map tile: its image, pixel size,
//! where its hex grid starts, which hexes it occupies, and which of those are
//! doors. Geometry code only ever reads definitions through the
//! [`TileLookup`] seam, so callers can hand in a full [`TileCatalog`] or a
//! plain slice. The editing helpers (`toggle_hex`, `toggle_door`, `upsert`)
//! back the tile editor and the catalog file writer in the host.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_HEX_WIDTH;
use crate::geom::Point;
use crate::hex::HexCoord;

/// Error returned when building or validating a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The catalog document is not valid JSON for the expected shape.
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Two entries share the same id.
    #[error("duplicate catalog id `{0}`")]
    DuplicateId(String),
    /// The tile image size is zero, negative, or not finite.
    #[error("tile `{id}` has invalid size {width}x{height}")]
    InvalidSize { id: String, width: f64, height: f64 },
    /// The padding offset is not finite.
    #[error("tile `{id}` has non-finite padding")]
    InvalidPadding { id: String },
    /// The hex width override is zero, negative, or not finite.
    #[error("tile `{id}` has invalid hex width {width}")]
    InvalidHexWidth { id: String, width: f64 },
    /// The same hex is listed twice in the occupied set.
    #[error("tile `{id}` lists hex ({}, {}) more than once", .hex.col, .hex.row)]
    DuplicateHex { id: String, hex: HexCoord },
    /// A door names a hex the tile does not occupy.
    #[error("tile `{id}` has door ({}, {}) outside its hexes", .hex.col, .hex.row)]
    DoorOutsideTile { id: String, hex: HexCoord },
}

/// Pixel size of a tile image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Per-tile override of the hex width used for pixel math.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DebugScale {
    pub width: f64,
}

/// A catalog entry describing one map tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileDefinition {
    /// Catalog key, e.g. `"1A"`.
    pub id: String,
    /// Image reference for the tile artwork.
    pub path: String,
    /// Pixel size of the tile image.
    pub size: Size,
    /// Offset of the hex grid origin within the tile image.
    pub padding: Point,
    /// Occupied hexes, in authoring order.
    #[serde(default, alias = "hex")]
    pub hexes: Vec<HexCoord>,
    /// Door hexes, in authoring order. Always a subset of `hexes`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub doors: Vec<HexCoord>,
    /// Optional override of [`DEFAULT_HEX_WIDTH`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_scale: Option<DebugScale>,
}

impl TileDefinition {
    /// Hex width used for pixel math on this tile.
    ///
    /// A zero or NaN override counts as absent and falls back to
    /// [`DEFAULT_HEX_WIDTH`].
    #[must_use]
    pub fn effective_hex_width(&self) -> f64 {
        self.debug_scale
            .map(|scale| scale.width)
            .filter(|width| width.abs() > 0.0)
            .unwrap_or(DEFAULT_HEX_WIDTH)
    }

    /// Geometric center of the tile image in tile-local pixels.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.size.width / 2.0, self.size.height / 2.0)
    }

    /// Whether `hex` is one of the occupied hexes.
    #[must_use]
    pub fn has_hex(&self, hex: HexCoord) -> bool {
        self.hexes.contains(&hex)
    }

    /// Whether `hex` is marked as a door.
    #[must_use]
    pub fn is_door(&self, hex: HexCoord) -> bool {
        self.doors.contains(&hex)
    }

    /// Add `hex` to the occupied set, or remove it (and any door on it) if present.
    pub fn toggle_hex(&mut self, hex: HexCoord) {
        if self.has_hex(hex) {
            self.hexes.retain(|h| *h != hex);
            self.doors.retain(|h| *h != hex);
        } else {
            self.hexes.push(hex);
        }
    }

    /// Toggle the door flag on an occupied hex.
    ///
    /// Returns `false` without changing anything when `hex` is not occupied.
    pub fn toggle_door(&mut self, hex: HexCoord) -> bool {
        if !self.has_hex(hex) {
            return false;
        }
        if self.is_door(hex) {
            self.doors.retain(|h| *h != hex);
        } else {
            self.doors.push(hex);
        }
        true
    }

    /// Check the structural invariants of this definition.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant: bad size, non-finite padding,
    /// bad hex width override, duplicated hex, or a door outside the tile.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let Size { width, height } = self.size;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(CatalogError::InvalidSize { id: self.id.clone(), width, height });
        }
        if !(self.padding.x.is_finite() && self.padding.y.is_finite()) {
            return Err(CatalogError::InvalidPadding { id: self.id.clone() });
        }
        if let Some(DebugScale { width }) = self.debug_scale {
            if !(width.is_finite() && width > 0.0) {
                return Err(CatalogError::InvalidHexWidth { id: self.id.clone(), width });
            }
        }
        for (i, hex) in self.hexes.iter().enumerate() {
            if self.hexes[..i].contains(hex) {
                return Err(CatalogError::DuplicateHex { id: self.id.clone(), hex: *hex });
            }
        }
        if let Some(door) = self.doors.iter().find(|door| !self.has_hex(**door)) {
            return Err(CatalogError::DoorOutsideTile { id: self.id.clone(), hex: *door });
        }
        Ok(())
    }
}

/// Read access to tile definitions by id.
///
/// A miss is not an error: callers skip placements whose definition does not
/// resolve.
pub trait TileLookup {
    fn tile_def(&self, id: &str) -> Option<&TileDefinition>;
}

impl TileLookup for [TileDefinition] {
    fn tile_def(&self, id: &str) -> Option<&TileDefinition> {
        self.iter().find(|def| def.id == id)
    }
}

impl TileLookup for Vec<TileDefinition> {
    fn tile_def(&self, id: &str) -> Option<&TileDefinition> {
        self.as_slice().tile_def(id)
    }
}

/// Outcome of [`TileCatalog::upsert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    /// No entry had this id; the definition was appended.
    Inserted,
    /// An entry with this id was replaced in place.
    Replaced,
}

/// Ordered tile catalog with O(1) lookup by id.
#[derive(Debug, Clone, Default)]
pub struct TileCatalog {
    tiles: Vec<TileDefinition>,
    index: HashMap<String, usize>,
}

impl TileCatalog {
    /// Build a catalog, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] when two definitions share an id.
    pub fn new(tiles: Vec<TileDefinition>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(tiles.len());
        for (i, def) in tiles.iter().enumerate() {
            if index.insert(def.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateId(def.id.clone()));
            }
        }
        Ok(Self { tiles, index })
    }

    /// Parse a catalog from a JSON array of tile definitions.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] for malformed input and
    /// [`CatalogError::DuplicateId`] for repeated ids.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let tiles: Vec<TileDefinition> = serde_json::from_str(json)?;
        Self::new(tiles)
    }

    /// Serialize the catalog as a pretty-printed JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(&self.tiles)?)
    }

    /// Look up a definition by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&TileDefinition> {
        self.index.get(id).and_then(|&i| self.tiles.get(i))
    }

    /// Replace the definition with the same id in place, or append it.
    pub fn upsert(&mut self, def: TileDefinition) -> Upsert {
        if let Some(slot) = self.index.get(&def.id).and_then(|&i| self.tiles.get_mut(i)) {
            *slot = def;
            return Upsert::Replaced;
        }
        self.index.insert(def.id.clone(), self.tiles.len());
        self.tiles.push(def);
        Upsert::Inserted
    }

    /// Validate every definition, collecting all failures.
    #[must_use]
    pub fn validate_all(&self) -> Vec<CatalogError> {
        self.tiles.iter().filter_map(|def| def.validate().err()).collect()
    }

    /// Definitions in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &TileDefinition> {
        self.tiles.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

impl TileLookup for TileCatalog {
    fn tile_def(&self, id: &str) -> Option<&TileDefinition> {
        self.get(id)
    }
}

/// Kind of figure token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FigureKind {
    Player,
    Monster,
    Summon,
}

/// A figure palette entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FigureDefinition {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FigureKind,
    /// Display color hint for tokens without artwork.
    #[serde(default)]
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
}

/// Figure palette with lookup by id.
#[derive(Debug, Clone, Default)]
pub struct FigureCatalog {
    figures: Vec<FigureDefinition>,
}

impl FigureCatalog {
    /// Build a figure catalog, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] when two entries share an id.
    pub fn new(figures: Vec<FigureDefinition>) -> Result<Self, CatalogError> {
        for (i, def) in figures.iter().enumerate() {
            if figures[..i].iter().any(|other| other.id == def.id) {
                return Err(CatalogError::DuplicateId(def.id.clone()));
            }
        }
        Ok(Self { figures })
    }

    /// Parse a figure catalog from a JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Json`] for malformed input and
    /// [`CatalogError::DuplicateId`] for repeated ids.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let figures: Vec<FigureDefinition> = serde_json::from_str(json)?;
        Self::new(figures)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&FigureDefinition> {
        self.figures.iter().find(|def| def.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FigureDefinition> {
        self.figures.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.figures.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }
}
