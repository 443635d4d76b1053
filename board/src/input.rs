//! Input model: keys, mouse buttons, and the drag/pan state machine.
//!
//! `InputState` is the active gesture tracked between pointer-down and
//! pointer-up. It carries everything needed to turn later pointer positions
//! into board mutations, so the engine never keeps drag state anywhere else.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::doc::EntityId;
use crate::geom::Point;

/// Pointer button that started a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Drags tiles and figures, or pans while space is held.
    Primary,
    /// Always pans.
    Middle,
    Secondary,
}

/// A keyboard key, named as the browser reports it (e.g. `" "`, `"Delete"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    /// Whether this is the space bar, which turns primary drags into pans.
    #[must_use]
    pub fn is_space(&self) -> bool {
        matches!(self.0.as_str(), " " | "Space" | "Spacebar")
    }
}

/// Scroll delta from a wheel event.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Ignored; only vertical scroll zooms.
    pub dx: f64,
    /// Positive scrolls down and zooms out.
    pub dy: f64,
}

/// Persistent UI state that outlives a single gesture.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiState {
    /// The space bar is held; primary drags pan instead of moving entities.
    pub space_held: bool,
}

/// Gesture between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum InputState {
    #[default]
    Idle,
    /// The user is panning the board.
    Panning {
        /// Pointer position at the last move; pan deltas are screen pixels.
        last_screen: Point,
    },
    /// The user is moving a placed tile.
    DraggingTile {
        id: EntityId,
        /// Pointer position minus tile top-left at grab time, in board space.
        grab_offset: Point,
    },
    /// The user is moving a figure token.
    DraggingFigure {
        id: EntityId,
        /// Pointer position minus figure top-left at grab time, in board space.
        grab_offset: Point,
    },
}

impl InputState {
    /// Whether any gesture is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}
