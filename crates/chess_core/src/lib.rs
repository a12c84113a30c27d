pub mod board;
pub mod error;
pub mod oracle;
pub mod time_control;
pub mod types;
pub mod uci;

pub use board::{Board, Move};
pub use error::ChessError;
pub use oracle::{MoveInfo, PositionOracle};
pub use time_control::*;
pub use types::*;
pub use uci::*;

use std::time::Duration;

// =============================================================================
// Engine trait: implemented by every searcher over a position oracle
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<M> {
    /// The best move found (None if no legal moves)
    pub best_move: Option<M>,
    /// Evaluation score from the side-to-move's perspective
    pub score: i32,
    /// Search depth in plies
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
    /// Number of alpha-beta cutoffs
    pub cutoffs: u64,
}

/// Trait that all engines implement.
///
/// Generic over the host board so an engine can search any position oracle.
pub trait Engine<O: PositionOracle> {
    /// Search the position with the given limits.
    ///
    /// The position is borrowed mutably for the duration of the search and is
    /// unchanged when this returns.
    fn search(&mut self, pos: &mut O, limits: SearchLimits) -> SearchResult<O::Move>;

    /// Pick a move for the side to move. Called once per turn by the host.
    ///
    /// Returns `None` only when there are no legal moves.
    fn choose_move(&mut self, pos: &mut O, time_budget: Duration) -> Option<O::Move>;

    /// Returns the engine's name for identification
    fn name(&self) -> &str;

    /// Returns the engine's author for identification
    fn author(&self) -> &str {
        "ML-chess"
    }

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
