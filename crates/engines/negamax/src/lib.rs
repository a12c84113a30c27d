//! Negamax Chess Bot
//!
//! Fixed-depth negamax with alpha-beta pruning over any position oracle,
//! scored by material, piece-square tables and a check/checkmate bonus.

pub mod config;
mod eval;
mod minimax;
mod ordering;
mod pst;
mod search;

use std::time::Duration;

use chess_core::{Engine, PositionOracle, SearchLimits, SearchResult, TimeControl};
use tracing::{debug, info, warn};

pub use config::{
    Algorithm, CheckConvention, ConfigError, EngineConfig, EvalConfig, EvalVariant,
    OrderingHeuristic,
};
pub use eval::{piece_value, Evaluate, StaticEvaluator};
pub use ordering::{heuristic_scores, order, order_moves};
pub use pst::{tables, TableStore};
pub use search::{full_width, search_root, Score, SearchStats, Searcher, INFINITY};

/// Chess bot that searches a fixed number of plies every turn.
///
/// This engine uses:
/// - Negamax (or explicit minimax) search with alpha-beta pruning
/// - Material plus piece-square evaluation
/// - A check/checkmate bonus in place of mate detection inside the search
#[derive(Debug, Clone)]
pub struct NegamaxBot {
    config: EngineConfig,
    evaluator: StaticEvaluator,
    /// Turns played since the last `new_game`
    turn: u32,
}

impl NegamaxBot {
    pub fn new() -> Self {
        Self::from_valid(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: EngineConfig) -> Self {
        Self {
            evaluator: StaticEvaluator::new(config.eval.clone()),
            config,
            turn: 0,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn evaluator(&self) -> &StaticEvaluator {
        &self.evaluator
    }

    /// Number of times `choose_move` has been called this game.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    fn run<O: PositionOracle>(&self, pos: &mut O, depth: u8) -> (Score<O::Move>, SearchStats) {
        let mut searcher = Searcher::new(&self.evaluator, self.config.ordering);
        let score = match self.config.algorithm {
            Algorithm::Negamax => searcher.search(pos, depth, true, -INFINITY, INFINITY),
            Algorithm::Minimax => {
                let root = pos.side_to_move();
                searcher.minimax(pos, depth, true, -INFINITY, INFINITY, root)
            }
        };
        (score, searcher.stats())
    }
}

impl Default for NegamaxBot {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: PositionOracle> Engine<O> for NegamaxBot {
    fn search(&mut self, pos: &mut O, limits: SearchLimits) -> SearchResult<O::Move> {
        let (score, stats) = self.run(pos, limits.depth);
        debug!(
            depth = limits.depth,
            algorithm = ?self.config.algorithm,
            score = score.value,
            nodes = stats.nodes,
            cutoffs = stats.cutoffs,
            "search finished"
        );
        SearchResult {
            best_move: score.best_move,
            score: score.value,
            depth: limits.depth,
            nodes: stats.nodes,
            cutoffs: stats.cutoffs,
        }
    }

    fn choose_move(&mut self, pos: &mut O, time_budget: Duration) -> Option<O::Move> {
        self.turn += 1;
        let mut clock = TimeControl::new(Some(time_budget));
        clock.start();

        // The budget is recorded, not enforced: the search always runs to depth.
        let limits = SearchLimits::depth_and_time(self.config.depth, time_budget);
        let result = self.search(pos, limits);

        let elapsed = clock.elapsed();
        if clock.is_over_budget() {
            warn!(
                turn = self.turn,
                elapsed_ms = elapsed.as_millis() as u64,
                budget_ms = time_budget.as_millis() as u64,
                "fixed-depth search overran the time budget"
            );
        }
        info!(
            turn = self.turn,
            depth = result.depth,
            best_move = ?result.best_move,
            score = result.score,
            nodes = result.nodes,
            elapsed_ms = elapsed.as_millis() as u64,
            "move chosen"
        );
        result.best_move
    }

    fn name(&self) -> &str {
        "Negamax v1.0"
    }

    fn new_game(&mut self) {
        self.turn = 0;
    }
}
