//! The turn state machine tying board and spawner together.

use crate::game::board::{Board, Coord, Direction};
use crate::game::spawner::Spawner;
use crate::persist::SavedGame;

/// Number of tiles spawned onto the empty board of a new game.
const INITIAL_SPAWNS: usize = 2;

/// Lifecycle state of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Moves are accepted.
    Playing,
    /// Terminal state; no further moves are accepted.
    GameOver,
}

/// One input command for the turn loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Shift the board in a direction.
    Move(Direction),
    /// Persist the current game.
    Save,
    /// Restore the persisted game.
    Load,
    /// Leave the game.
    Quit,
}

/// What a move command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Number of cells the move changed; 0 means the move was rejected or
    /// a no-op.
    pub changed: usize,
    /// Where the follow-up tile spawned, if the move changed the board.
    pub spawned: Option<Coord>,
}

impl MoveOutcome {
    /// Outcome of a rejected or no-op move.
    const NOOP: MoveOutcome = MoveOutcome {
        changed: 0,
        spawned: None,
    };
}

/// A single game in progress: board, spawner, and lifecycle state.
///
/// Each turn is fully sequential: move applied, tile spawned if the move
/// changed anything, terminal check. The session is the board's only owner
/// for its whole lifetime.
#[derive(Debug, Clone, Copy)]
pub struct GameSession {
    board: Board,
    spawner: Spawner,
    status: GameStatus,
}

impl GameSession {
    /// Start a new game: an empty board with two spawned tiles.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut board = Board::new();
        let mut spawner = Spawner::new(seed);
        for _ in 0..INITIAL_SPAWNS {
            spawner.spawn(&mut board);
        }
        Self {
            board,
            spawner,
            status: GameStatus::Playing,
        }
    }

    /// Resume a saved game verbatim; no tiles are spawned on top of it.
    ///
    /// The lifecycle state is derived from the restored board, so a
    /// hand-edited terminal save cannot re-enter play.
    #[must_use]
    pub fn from_saved(saved: &SavedGame, seed: u64) -> Self {
        let board = Board::from_saved(saved);
        let status = if board.is_terminal() {
            GameStatus::GameOver
        } else {
            GameStatus::Playing
        };
        Self {
            board,
            spawner: Spawner::new(seed),
            status,
        }
    }

    /// Run one turn: apply the move, spawn on change, check for game over.
    ///
    /// Rejected while the game is over, and a no-op move (0 changed cells)
    /// spawns nothing; in both cases board and score are untouched.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        if self.status == GameStatus::GameOver {
            return MoveOutcome::NOOP;
        }

        let changed = self.board.apply_move(direction);
        if changed == 0 {
            return MoveOutcome::NOOP;
        }

        let spawned = self.spawner.spawn(&mut self.board);
        if self.board.is_terminal() {
            self.status = GameStatus::GameOver;
        }

        MoveOutcome { changed, spawned }
    }

    /// Snapshot the game for persistence.
    #[must_use]
    pub const fn snapshot(&self) -> SavedGame {
        self.board.to_saved()
    }

    /// Replace board and score with a saved game, verbatim.
    ///
    /// Valid while playing; the turn loop does not offer Load once the game
    /// is over.
    pub fn restore(&mut self, saved: &SavedGame) {
        self.board = Board::from_saved(saved);
        self.status = if self.board.is_terminal() {
            GameStatus::GameOver
        } else {
            GameStatus::Playing
        };
    }

    /// The board, for rendering and inspection.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }
}
