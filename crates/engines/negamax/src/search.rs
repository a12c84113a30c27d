//! Negamax search with alpha-beta pruning

use chess_core::PositionOracle;
use tracing::trace;

use crate::config::OrderingHeuristic;
use crate::eval::Evaluate;
use crate::ordering::order_moves;

/// Search window bound, far outside any evaluation and safe to negate.
pub const INFINITY: i32 = i32::MAX / 2;

/// A value and the move that produced it at the ply where it was computed.
///
/// Parents never keep a child's move; they pair the negated child value with
/// the move they played to reach that child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score<M> {
    pub best_move: Option<M>,
    pub value: i32,
}

impl<M> Score<M> {
    /// A static value with no move attached.
    pub fn leaf(value: i32) -> Self {
        Self {
            best_move: None,
            value,
        }
    }
}

/// Counters for one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, the root included
    pub nodes: u64,
    /// Times a node stopped early because alpha reached beta
    pub cutoffs: u64,
}

/// Depth-first searcher. Holds no position; every call borrows one.
pub struct Searcher<'a, E> {
    pub(crate) evaluator: &'a E,
    pub(crate) ordering: OrderingHeuristic,
    pub(crate) stats: SearchStats,
}

impl<'a, E> Searcher<'a, E> {
    pub fn new(evaluator: &'a E, ordering: OrderingHeuristic) -> Self {
        Self {
            evaluator,
            ordering,
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Negamax with alpha-beta pruning.
    ///
    /// Returns the value of `pos` for the side to move, paired with the move
    /// that achieves it (`None` at depth 0, with no legal moves, or when the
    /// window is already closed on entry).
    ///
    /// `maximizer` flips on every ply. Negamax scores every node from its own
    /// mover's point of view, so the flag only labels which side a node
    /// belongs to relative to the root.
    ///
    /// Every move applied to `pos` is reverted before the next one is tried,
    /// so `pos` is unchanged when this returns.
    pub fn search<O>(
        &mut self,
        pos: &mut O,
        depth: u8,
        maximizer: bool,
        mut alpha: i32,
        beta: i32,
    ) -> Score<O::Move>
    where
        O: PositionOracle,
        E: Evaluate<O>,
    {
        self.stats.nodes += 1;
        let mover = pos.side_to_move();

        if depth == 0 || alpha >= beta {
            return Score::leaf(self.evaluator.evaluate(&*pos, mover));
        }

        let mut moves = pos.legal_moves();
        if moves.is_empty() {
            // Mate and stalemate are left to the evaluator's check term.
            return Score::leaf(self.evaluator.evaluate(&*pos, mover));
        }

        let mut scores = Vec::with_capacity(moves.len());
        order_moves(&*pos, &mut moves, self.ordering, &mut scores);

        let mut best = Score {
            best_move: None,
            value: -INFINITY,
        };
        for mv in moves {
            pos.apply_move(mv);
            let child = self.search(pos, depth - 1, !maximizer, -beta, -alpha);
            pos.revert_move(mv);

            let value = -child.value;
            // Only a strictly better value replaces the best move; the first
            // of several equal moves is kept.
            if value > best.value {
                best = Score {
                    best_move: Some(mv),
                    value,
                };
            }
            if value >= alpha {
                alpha = value;
            }
            if alpha >= beta {
                self.stats.cutoffs += 1;
                trace!(depth, maximizer, alpha, beta, "beta cutoff");
                break;
            }
        }
        best
    }
}

/// Searches `pos` to `depth` with a full window.
pub fn search_root<O, E>(
    pos: &mut O,
    evaluator: &E,
    depth: u8,
    ordering: OrderingHeuristic,
) -> (Score<O::Move>, SearchStats)
where
    O: PositionOracle,
    E: Evaluate<O>,
{
    let mut searcher = Searcher::new(evaluator, ordering);
    let score = searcher.search(pos, depth, true, -INFINITY, INFINITY);
    (score, searcher.stats())
}

/// Unpruned negamax value of `pos`. Visits every node; used to check that
/// pruning never changes a result.
pub fn full_width<O, E>(pos: &mut O, evaluator: &E, depth: u8) -> i32
where
    O: PositionOracle,
    E: Evaluate<O>,
{
    let mover = pos.side_to_move();
    if depth == 0 {
        return evaluator.evaluate(&*pos, mover);
    }
    let moves = pos.legal_moves();
    if moves.is_empty() {
        return evaluator.evaluate(&*pos, mover);
    }
    let mut best = -INFINITY;
    for mv in moves {
        pos.apply_move(mv);
        let value = -full_width(pos, evaluator, depth - 1);
        pos.revert_move(mv);
        best = best.max(value);
    }
    best
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
