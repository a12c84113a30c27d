//! Explicit minimax with alpha-beta pruning.
//!
//! The maximizing/minimizing formulation the negamax search replaced. All
//! values are from the root mover's point of view; the maximizing side raises
//! alpha, the minimizing side lowers beta. Kept as a selectable algorithm and
//! as a cross-check: at the root it must agree with negamax.

use chess_core::{Color, PositionOracle};
use tracing::trace;

use crate::eval::Evaluate;
use crate::search::{Score, Searcher, INFINITY};

impl<'a, E> Searcher<'a, E> {
    /// Minimax value of `pos` for `root`, paired with the move achieving it.
    pub fn minimax<O>(
        &mut self,
        pos: &mut O,
        depth: u8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        root: Color,
    ) -> Score<O::Move>
    where
        O: PositionOracle,
        E: Evaluate<O>,
    {
        self.stats.nodes += 1;

        if depth == 0 || alpha >= beta {
            return Score::leaf(self.evaluator.evaluate(&*pos, root));
        }
        let mut moves = pos.legal_moves();
        if moves.is_empty() {
            return Score::leaf(self.evaluator.evaluate(&*pos, root));
        }
        let mut scores = Vec::with_capacity(moves.len());
        crate::ordering::order_moves(&*pos, &mut moves, self.ordering, &mut scores);

        let mut best = Score {
            best_move: None,
            value: if maximizing { -INFINITY } else { INFINITY },
        };
        for mv in moves {
            pos.apply_move(mv);
            let value = self
                .minimax(pos, depth - 1, !maximizing, alpha, beta, root)
                .value;
            pos.revert_move(mv);

            if maximizing {
                if value > best.value {
                    best = Score {
                        best_move: Some(mv),
                        value,
                    };
                }
                alpha = alpha.max(value);
            } else {
                if value < best.value {
                    best = Score {
                        best_move: Some(mv),
                        value,
                    };
                }
                beta = beta.min(value);
            }
            if alpha >= beta {
                self.stats.cutoffs += 1;
                trace!(depth, maximizing, alpha, beta, "minimax cutoff");
                break;
            }
        }
        best
    }
}
