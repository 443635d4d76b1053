use crate::camera::{Viewport, ZoomLimits, wheel_zoom_factor};
use crate::catalog::{FigureCatalog, TileCatalog, TileLookup};
use crate::consts::{FIGURE_SIZE, SNAP_THRESHOLD};
use crate::doc::{BoardState, EntityId, Figure, PlacedTile};
use crate::doors::door_positions;
use crate::geom::Point;
use crate::hit::{HitKind, hit_test};
use crate::input::{Button, InputState, Key, UiState, WheelDelta};
use crate::snap::{SnapMatch, find_snap_match};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

const CURSOR_DEFAULT: &str = "default";
const CURSOR_GRAB: &str = "grab";
const CURSOR_GRABBING: &str = "grabbing";

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    TilePlaced(PlacedTile),
    FigurePlaced(Figure),
    TileMoved { id: EntityId, x: f64, y: f64 },
    FigureMoved { id: EntityId, x: f64, y: f64 },
    TileSnapped { id: EntityId, x: f64, y: f64 },
    TileRotated { id: EntityId, rotation: f64 },
    TileRemoved { id: EntityId },
    FigureRemoved { id: EntityId },
    ViewportChanged(Viewport),
    SetCursor(String),
    RenderNeeded,
}

/// Tunables for snapping and zooming.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineSettings {
    /// Door-to-door distance (board units, exclusive) under which a released tile snaps.
    pub snap_threshold: f64,
    pub zoom_limits: ZoomLimits,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self { snap_threshold: SNAP_THRESHOLD, zoom_limits: ZoomLimits::default() }
    }
}

/// Core engine state: one board, one viewport, and the gesture in progress.
///
/// Events are applied one at a time; every handler returns the actions the
/// host needs to persist or redraw.
#[derive(Debug, Default)]
pub struct EngineCore {
    pub board: BoardState,
    pub viewport: Viewport,
    pub tiles: TileCatalog,
    pub figures: FigureCatalog,
    pub settings: EngineSettings,
    pub ui: UiState,
    pub input: InputState,
}

impl EngineCore {
    #[must_use]
    pub fn new(tiles: TileCatalog, figures: FigureCatalog) -> Self {
        Self { tiles, figures, ..Self::default() }
    }

    #[must_use]
    pub fn with_settings(mut self, settings: EngineSettings) -> Self {
        self.settings = settings;
        self.viewport.zoom = settings.zoom_limits.clamp(self.viewport.zoom);
        self
    }

    // --- Data inputs ---

    /// Replace the board with a saved layout and drop any gesture in progress.
    pub fn load_snapshot(&mut self, snapshot: BoardState) {
        self.board.load_snapshot(snapshot);
        self.input = InputState::Idle;
        let unresolved = self
            .board
            .tiles
            .iter()
            .filter(|tile| self.tiles.tile_def(&tile.tile_id).is_none())
            .count();
        if unresolved > 0 {
            tracing::warn!(unresolved, "board references unknown tiles; they will be ignored");
        }
        tracing::debug!(tiles = self.board.tiles.len(), figures = self.board.figures.len(), "board loaded");
    }

    /// Set where the board element's top-left sits on screen.
    pub fn set_origin(&mut self, origin: Point) {
        self.viewport.origin = origin;
    }

    // --- Drops from the palettes ---

    /// Place a tile from the catalog centered on the drop point.
    pub fn drop_tile(&mut self, tile_id: &str, screen: Point) -> Vec<Action> {
        let Some(def) = self.tiles.get(tile_id) else {
            tracing::warn!(tile_id, "dropped tile is not in the catalog; ignoring");
            return Vec::new();
        };
        let at = self.viewport.screen_to_board(screen);
        let tile = PlacedTile::new(def.id.clone(), at.x - def.size.width / 2.0, at.y - def.size.height / 2.0);
        tracing::info!(id = %tile.id, tile_id, x = tile.x, y = tile.y, "tile placed");
        self.board.insert_tile(tile.clone());
        vec![Action::TilePlaced(tile), Action::RenderNeeded]
    }

    /// Place a figure from the palette centered on the drop point.
    pub fn drop_figure(&mut self, figure_id: &str, screen: Point) -> Vec<Action> {
        let Some(def) = self.figures.get(figure_id) else {
            tracing::warn!(figure_id, "dropped figure is not in the palette; ignoring");
            return Vec::new();
        };
        let at = self.viewport.screen_to_board(screen);
        let half = FIGURE_SIZE / 2.0;
        let figure = Figure {
            id: uuid::Uuid::new_v4(),
            name: def.name.clone(),
            kind: def.kind,
            image_path: def.image_path.clone(),
            x: at.x - half,
            y: at.y - half,
        };
        tracing::info!(id = %figure.id, figure_id, "figure placed");
        self.board.insert_figure(figure.clone());
        vec![Action::FigurePlaced(figure), Action::RenderNeeded]
    }

    // --- Direct edits ---

    /// Turn a tile one 60° step clockwise.
    pub fn rotate_tile(&mut self, id: &EntityId) -> Vec<Action> {
        match self.board.rotate_tile(id) {
            Some(rotation) => vec![Action::TileRotated { id: *id, rotation }, Action::RenderNeeded],
            None => Vec::new(),
        }
    }

    pub fn remove_tile(&mut self, id: &EntityId) -> Vec<Action> {
        if self.board.remove_tile(id).is_none() {
            return Vec::new();
        }
        if matches!(self.input, InputState::DraggingTile { id: dragged, .. } if dragged == *id) {
            self.input = InputState::Idle;
        }
        vec![Action::TileRemoved { id: *id }, Action::RenderNeeded]
    }

    pub fn remove_figure(&mut self, id: &EntityId) -> Vec<Action> {
        if self.board.remove_figure(id).is_none() {
            return Vec::new();
        }
        if matches!(self.input, InputState::DraggingFigure { id: dragged, .. } if dragged == *id) {
            self.input = InputState::Idle;
        }
        vec![Action::FigureRemoved { id: *id }, Action::RenderNeeded]
    }

    /// Move a tile's top-left corner to `to` without snapping.
    pub fn move_tile_to(&mut self, id: &EntityId, to: Point) -> Vec<Action> {
        if !self.board.move_tile(id, to) {
            return Vec::new();
        }
        vec![Action::TileMoved { id: *id, x: to.x, y: to.y }, Action::RenderNeeded]
    }

    /// Move a tile to `to` and snap it as if a drag had been released there.
    pub fn commit_tile_position(&mut self, id: &EntityId, to: Point) -> Vec<Action> {
        if !self.board.move_tile(id, to) {
            return Vec::new();
        }
        let mut actions = vec![Action::TileMoved { id: *id, x: to.x, y: to.y }];
        actions.extend(self.snap_tile(id));
        if !actions.contains(&Action::RenderNeeded) {
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen: Point, button: Button) -> Vec<Action> {
        let wants_pan = button == Button::Middle || (button == Button::Primary && self.ui.space_held);
        if wants_pan {
            self.input = InputState::Panning { last_screen: screen };
            return vec![Action::SetCursor(CURSOR_GRABBING.to_owned())];
        }
        if button != Button::Primary {
            return Vec::new();
        }

        let at = self.viewport.screen_to_board(screen);
        let Some(hit) = hit_test(at, &self.board, &self.tiles) else {
            return Vec::new();
        };
        self.input = match hit.kind {
            HitKind::Tile => match self.board.tile(&hit.id) {
                Some(tile) => InputState::DraggingTile { id: hit.id, grab_offset: at - tile.position() },
                None => InputState::Idle,
            },
            HitKind::Figure => match self.board.figure(&hit.id) {
                Some(figure) => InputState::DraggingFigure { id: hit.id, grab_offset: at - figure.position() },
                None => InputState::Idle,
            },
        };
        Vec::new()
    }

    pub fn on_pointer_move(&mut self, screen: Point) -> Vec<Action> {
        match self.input {
            InputState::Idle => Vec::new(),
            InputState::Panning { last_screen } => {
                let delta = screen - last_screen;
                self.viewport.pan_by(delta.x, delta.y);
                self.input = InputState::Panning { last_screen: screen };
                vec![Action::ViewportChanged(self.viewport), Action::RenderNeeded]
            }
            InputState::DraggingTile { id, grab_offset } => {
                let to = self.viewport.screen_to_board(screen) - grab_offset;
                if !self.board.move_tile(&id, to) {
                    self.input = InputState::Idle;
                    return Vec::new();
                }
                vec![Action::TileMoved { id, x: to.x, y: to.y }, Action::RenderNeeded]
            }
            InputState::DraggingFigure { id, grab_offset } => {
                let to = self.viewport.screen_to_board(screen) - grab_offset;
                if !self.board.move_figure(&id, to) {
                    self.input = InputState::Idle;
                    return Vec::new();
                }
                vec![Action::FigureMoved { id, x: to.x, y: to.y }, Action::RenderNeeded]
            }
        }
    }

    /// End the current gesture. A released tile snaps to the nearest door in range.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Panning { .. } => vec![Action::SetCursor(self.cursor_hint().to_owned())],
            InputState::DraggingTile { id, .. } => self.snap_tile(&id),
            InputState::DraggingFigure { .. } | InputState::Idle => Vec::new(),
        }
    }

    /// Zoom toward the cursor by one wheel step.
    pub fn on_wheel(&mut self, screen: Point, delta: WheelDelta) -> Vec<Action> {
        let factor = wheel_zoom_factor(delta.dy);
        self.viewport.zoom_by(screen, factor, self.settings.zoom_limits);
        vec![Action::ViewportChanged(self.viewport), Action::RenderNeeded]
    }

    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        if !key.is_space() || self.ui.space_held {
            return Vec::new();
        }
        self.ui.space_held = true;
        vec![Action::SetCursor(CURSOR_GRAB.to_owned())]
    }

    pub fn on_key_up(&mut self, key: &Key) -> Vec<Action> {
        if !key.is_space() {
            return Vec::new();
        }
        self.ui.space_held = false;
        if matches!(self.input, InputState::Panning { .. }) {
            self.input = InputState::Idle;
        }
        vec![Action::SetCursor(CURSOR_DEFAULT.to_owned())]
    }

    // --- Queries ---

    /// The snap a tile would take if released where it is now.
    #[must_use]
    pub fn snap_candidate(&self, id: &EntityId) -> Option<SnapMatch> {
        let tile = self.board.tile(id)?;
        find_snap_match(tile, &self.board.tiles, &self.tiles, self.settings.snap_threshold)
    }

    /// Board-space door positions of a placed tile, or `None` if the tile or
    /// its definition is missing.
    #[must_use]
    pub fn doors_of(&self, id: &EntityId) -> Option<Vec<Point>> {
        let tile = self.board.tile(id)?;
        let def = self.tiles.tile_def(&tile.tile_id)?;
        Some(door_positions(tile, def))
    }

    /// Cursor the host should show when no gesture is active.
    #[must_use]
    pub fn cursor_hint(&self) -> &'static str {
        if self.ui.space_held { CURSOR_GRAB } else { CURSOR_DEFAULT }
    }

    // --- Snapping ---

    /// Snap a tile from where it lies now. Empty when the tile is missing or
    /// no door pair is in range.
    pub fn snap_tile(&mut self, id: &EntityId) -> Vec<Action> {
        let Some(found) = self.snap_candidate(id) else {
            return Vec::new();
        };
        if !self.board.move_tile(id, found.position) {
            return Vec::new();
        }
        tracing::debug!(%id, x = found.position.x, y = found.position.y, distance = found.distance, "tile snapped to door");
        vec![
            Action::TileSnapped { id: *id, x: found.position.x, y: found.position.y },
            Action::RenderNeeded,
        ]
    }
}
