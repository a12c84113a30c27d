//! Move ordering.

use chess_core::{MoveInfo, PositionOracle};

use crate::config::OrderingHeuristic;

/// Sorts `moves` by descending `scores`, moving each score with its move.
///
/// Insertion sort: each element shifts left only past strictly smaller scores,
/// so equal scores keep their input order.
pub fn order<M>(moves: &mut [M], scores: &mut [i32]) {
    assert_eq!(
        moves.len(),
        scores.len(),
        "order() needs one score per move"
    );
    for i in 1..moves.len() {
        let mut j = i;
        while j > 0 && scores[j - 1] < scores[j] {
            moves.swap(j - 1, j);
            scores.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Fill `out` with one ordering score per move.
pub fn heuristic_scores<O: PositionOracle>(
    pos: &O,
    moves: &[O::Move],
    heuristic: OrderingHeuristic,
    out: &mut Vec<i32>,
) {
    out.clear();
    match heuristic {
        OrderingHeuristic::None => out.resize(moves.len(), 0),
        OrderingHeuristic::Captures => {
            out.extend(moves.iter().map(|&mv| capture_score(pos.move_info(mv))));
        }
    }
}

/// Most valuable victim, least valuable attacker; promotions by target kind.
/// Quiet moves score 0, every capture or promotion scores above it.
fn capture_score(info: MoveInfo) -> i32 {
    let mut score = 0;
    if let Some(victim) = info.captured {
        let attacker = info.moved.map_or(0, |k| k.idx() as i32);
        score += (victim.idx() as i32 + 1) * 8 - attacker;
    }
    if let Some(promo) = info.promotion {
        score += promo.idx() as i32 * 8;
    }
    score
}

/// Order `moves` in place for a search node.
pub fn order_moves<O: PositionOracle>(
    pos: &O,
    moves: &mut [O::Move],
    heuristic: OrderingHeuristic,
    scores: &mut Vec<i32>,
) {
    heuristic_scores(pos, moves, heuristic, scores);
    order(moves, scores);
}

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod ordering_tests;
