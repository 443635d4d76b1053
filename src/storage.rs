//! File-backed persistence for board layouts and the tile catalog.
//!
//! A board layout is one pretty-printed JSON document per session key under
//! the state directory. The catalog file is the JSON array the board crate
//! parses; [`save_tile`] rewrites it in place.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use board::catalog::{CatalogError, FigureCatalog, TileCatalog, TileDefinition, Upsert};
use board::doc::BoardState;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("{op} {}: {source}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Board layouts stored as `<dir>/<session_key>.json`.
#[derive(Debug, Clone)]
pub struct BoardStore {
    dir: PathBuf,
}

impl BoardStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, session_key: &str) -> PathBuf {
        self.dir.join(format!("{session_key}.json"))
    }

    /// Load the layout for `session_key`; a missing document is an empty board.
    pub fn load(&self, session_key: &str) -> Result<BoardState, StorageError> {
        let path = self.path_for(session_key);
        let Some(raw) = read_optional(&path)? else {
            tracing::debug!(path = %path.display(), "no saved board; starting empty");
            return Ok(BoardState::new());
        };
        let mut board = BoardState::new();
        board.load_snapshot(parse_json(&path, &raw)?);
        Ok(board)
    }

    pub fn save(&self, session_key: &str, board: &BoardState) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|source| io_error("create", &self.dir, source))?;
        let path = self.path_for(session_key);
        let json = serde_json::to_string_pretty(board).map_err(|source| StorageError::Json { path: path.clone(), source })?;
        fs::write(&path, json).map_err(|source| io_error("write", &path, source))?;
        tracing::info!(path = %path.display(), tiles = board.tiles.len(), figures = board.figures.len(), "board saved");
        Ok(())
    }
}

/// Read the tile catalog; a missing file is an empty catalog.
pub fn load_tile_catalog(path: &Path) -> Result<TileCatalog, StorageError> {
    match read_optional(path)? {
        Some(raw) => Ok(TileCatalog::new(parse_json(path, &raw)?)?),
        None => {
            tracing::warn!(path = %path.display(), "tile catalog not found; using an empty catalog");
            Ok(TileCatalog::default())
        }
    }
}

pub fn load_figure_catalog(path: &Path) -> Result<FigureCatalog, StorageError> {
    let raw = fs::read_to_string(path).map_err(|source| io_error("read", path, source))?;
    Ok(FigureCatalog::new(parse_json(path, &raw)?)?)
}

pub fn read_tile_definition(path: &Path) -> Result<TileDefinition, StorageError> {
    let raw = fs::read_to_string(path).map_err(|source| io_error("read", path, source))?;
    parse_json(path, &raw)
}

/// Validate `def` and write it into the catalog file at `path`, replacing any
/// entry with the same id. The file is created if it does not exist.
pub fn save_tile(path: &Path, def: TileDefinition) -> Result<Upsert, StorageError> {
    def.validate()?;
    let mut catalog = load_tile_catalog(path)?;
    let id = def.id.clone();
    let outcome = catalog.upsert(def);
    let json = catalog.to_json_pretty()?;
    fs::write(path, json).map_err(|source| io_error("write", path, source))?;
    tracing::info!(%id, ?outcome, path = %path.display(), "tile definition saved");
    Ok(outcome)
}

fn read_optional(path: &Path) -> Result<Option<String>, StorageError> {
    match fs::read_to_string(path) {
        Ok(raw) => Ok(Some(raw)),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(error) => Err(io_error("read", path, error)),
    }
}

fn parse_json<T: serde::de::DeserializeOwned>(path: &Path, raw: &str) -> Result<T, StorageError> {
    serde_json::from_str(raw).map_err(|source| StorageError::Json { path: path.to_path_buf(), source })
}

fn io_error(op: &'static str, path: &Path, source: io::Error) -> StorageError {
    StorageError::Io { op, path: path.to_path_buf(), source }
}

#[cfg(test)]
#[path = "storage_test.rs"]
mod tests;
