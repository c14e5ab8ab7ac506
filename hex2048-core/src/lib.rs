//! HEX2048 Core - Game engine
//!
//! This crate provides the game logic for HEX2048, a sliding-tile puzzle
//! on a hexagonal board:
//! - Board geometry (radius-2 hex grid with axial coordinates)
//! - Lane decomposition for the six movement directions
//! - Immutable game state with slide/merge resolution, spawning, and
//!   win/loss detection
//!
//! The engine is pure and synchronous: every operation maps a state and an
//! input to a new state. Randomness is injected by the caller.

pub mod board;
pub mod game;
pub mod lanes;

// Re-exports for convenient access
pub use board::{all_cells, board_cells, Direction, Hex, ParseDirectionError, BOARD_RADIUS};
pub use game::{
    can_make_any_move, GameState, GameStatus, StatusEvent, Tile, TileId, GOAL_VALUE,
};
