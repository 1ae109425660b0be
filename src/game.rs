//! Game layer for Twenty48.
//!
//! Implements the 2048 rules:
//! - Board with merge-and-slide moves and terminal-state detection
//! - Weighted random tile spawning
//! - The turn state machine (`Playing` / `GameOver`)

mod board;
mod rng;
mod session;
mod spawner;

pub use board::{BOARD_SIZE, Board, Coord, Direction};
pub use session::{Command, GameSession, GameStatus, MoveOutcome};
pub use spawner::Spawner;
