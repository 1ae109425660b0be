// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Twenty48: a terminal 2048 sliding-tile puzzle engine.
//!
//! This crate provides the full game core:
//! - Board with directional merge-and-slide moves and game-over detection
//! - Weighted random tile spawning from a seedable PRNG
//! - The turn state machine driving both
//! - Save/load of a game in progress as a flat JSON file
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │       Turn loop (TUI binary)        │
//! ├─────────────────────────────────────┤
//! │     GameSession (state machine)     │
//! ├──────────────────┬──────────────────┤
//! │      Board       │     Spawner      │
//! └──────────────────┴──────────────────┘
//! ```

pub mod error;
pub mod game;
pub mod persist;

pub use error::{PersistError, PersistResult};

// Re-export key game types at crate root for convenience
pub use game::{
    BOARD_SIZE, Board, Command, Coord, Direction, GameSession, GameStatus, MoveOutcome, Spawner,
};
pub use persist::SavedGame;
