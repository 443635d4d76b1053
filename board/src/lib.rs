//! Board engine for assembling a Frosthaven-style map out of hex tiles.
//!
//! The crate is host-agnostic: it owns the placed tiles and figures, the
//! viewport over the infinite board, hit-testing, and door-to-door snapping.
//! A host (the `hexboard` CLI, or any UI shell) feeds pointer, wheel, and key
//! events into [`engine::EngineCore`] and persists the [`engine::Action`]s it
//! gets back.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Event handlers and the testable [`engine::EngineCore`] |
//! | [`doc`] | Board state, placed tiles, and figure tokens |
//! | [`catalog`] | Tile definitions, figure palette, and the lookup seam |
//! | [`hex`] | Odd-row offset hex grid to tile-local pixels |
//! | [`doors`] | Door positions on the board after rotation |
//! | [`snap`] | Nearest door-pair search for released tiles |
//! | [`camera`] | Pan/zoom viewport and coordinate conversions |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`hit`] | Hit-testing against tiles and figures |
//! | [`geom`] | Points and rotation about a center |
//! | [`consts`] | Shared numeric constants (hex width, zoom limits, snap threshold) |

pub mod camera;
pub mod catalog;
pub mod consts;
pub mod doc;
pub mod doors;
pub mod engine;
pub mod geom;
pub mod hex;
pub mod hit;
pub mod input;
pub mod snap;
