//! Shared numeric constants for the board crate.

// ── Hex grid ────────────────────────────────────────────────────

/// Hex width in pixels used when a tile definition carries no width override.
pub const DEFAULT_HEX_WIDTH: f64 = 133.0;

/// Height-to-width ratio of a pointy-topped hexagon (2 / √3).
pub const HEX_HEIGHT_RATIO: f64 = 2.0 / 1.732_050_807_568_877_2;

/// Vertical distance between row centers as a fraction of hex height.
pub const HEX_ROW_STEP: f64 = 0.75;

// ── Rotation ────────────────────────────────────────────────────

/// Angular step applied by a single rotate gesture, in degrees.
pub const ROTATION_STEP_DEG: f64 = 60.0;

/// One full turn in degrees.
pub const FULL_TURN_DEG: f64 = 360.0;

// ── Snapping ────────────────────────────────────────────────────

/// Maximum door-to-door distance (board units, exclusive) that triggers a snap.
pub const SNAP_THRESHOLD: f64 = 50.0;

// ── Figures ─────────────────────────────────────────────────────

/// Side length of the square figure token footprint, in board units.
pub const FIGURE_SIZE: f64 = 32.0;

// ── Viewport ────────────────────────────────────────────────────

/// Lowest zoom factor the viewport allows by default.
pub const MIN_ZOOM: f64 = 0.1;

/// Highest zoom factor the viewport allows by default.
pub const MAX_ZOOM: f64 = 3.0;

/// Zoom multiplier applied for one wheel step toward the user.
pub const WHEEL_ZOOM_IN: f64 = 1.05;

/// Zoom multiplier applied for one wheel step away from the user.
pub const WHEEL_ZOOM_OUT: f64 = 0.95;
