//! Weighted random tile spawning.

use crate::game::board::{Board, Coord};
use crate::game::rng::Rng;

/// Chance in percent that a spawned tile is a 2 (otherwise a 4).
const TWO_CHANCE_PERCENT: u32 = 90;

/// Produces new tiles on the board after successful moves.
///
/// Owns its own seeded PRNG, so a fixed seed reproduces the whole spawn
/// sequence of a game.
#[derive(Debug, Clone, Copy)]
pub struct Spawner {
    rng: Rng,
}

impl Spawner {
    /// Create a spawner with the given seed.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            rng: Rng::new(seed),
        }
    }

    /// Place one new tile into a uniformly chosen empty cell.
    ///
    /// The cell is picked uniformly among exactly the currently empty cells,
    /// so the distribution stays uniform regardless of how full the board
    /// is. The tile is a 2 with 90% probability and a 4 otherwise. Returns
    /// the placed coordinate, or `None` if the board is full.
    pub fn spawn(&mut self, board: &mut Board) -> Option<Coord> {
        let empty = board.empty_cells();
        if empty.is_empty() {
            return None;
        }

        let coord = empty[self.rng.next_index(empty.len())];
        let value = if self.rng.next_u32(100) < TWO_CHANCE_PERCENT {
            2
        } else {
            4
        };
        board.set_cell(coord, value);

        Some(coord)
    }
}
