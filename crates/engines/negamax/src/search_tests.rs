use super::*;
use crate::eval::StaticEvaluator;
use chess_core::{move_to_uci, Board, Color, PieceKind};

const SCHOLARS_MATE: &str = "r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1";
const STALEMATE: &str = "k7/8/1Q6/8/8/8/8/1K6 b - - 0 1";
const MATE_IN_ONE: &str = "r1bqkbnr/pppp1ppp/2n5/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4";
const HANGING_QUEEN: &str = "rnb1kbnr/ppp1pppp/8/3q4/4P3/2N5/PPPP1PPP/R1BQKBNR w KQkq - 0 3";
const MIDDLEGAME: &str = "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/3P1N2/PPP2PPP/RNBQK2R w KQkq - 1 5";

fn board(fen: &str) -> Board {
    Board::from_fen(fen).unwrap()
}

#[test]
fn depth_zero_returns_static_value_without_move() {
    let eval = StaticEvaluator::default();
    for fen in [MIDDLEGAME, HANGING_QUEEN, SCHOLARS_MATE] {
        let mut pos = board(fen);
        let expected = eval.evaluate(&pos, pos.side_to_move());
        let (score, stats) = search_root(&mut pos, &eval, 0, OrderingHeuristic::None);
        assert_eq!(score, Score::leaf(expected), "{fen}");
        assert_eq!(stats.nodes, 1);
    }
}

#[test]
fn no_legal_moves_returns_static_value_at_any_depth() {
    let eval = StaticEvaluator::default();
    for fen in [SCHOLARS_MATE, STALEMATE] {
        for depth in 1..=4 {
            let mut pos = board(fen);
            let expected = eval.evaluate(&pos, pos.side_to_move());
            let (score, stats) = search_root(&mut pos, &eval, depth, OrderingHeuristic::None);
            assert_eq!(score.best_move, None);
            assert_eq!(score.value, expected);
            assert_eq!(stats.nodes, 1, "must not recurse");
        }
    }
}

#[test]
fn mated_side_scores_below_mate_bonus() {
    let eval = StaticEvaluator::default();
    let mut pos = board(SCHOLARS_MATE);
    let (score, _) = search_root(&mut pos, &eval, 3, OrderingHeuristic::None);
    assert!(score.value < -900_000);
}

#[test]
fn closed_window_returns_immediately() {
    let eval = StaticEvaluator::default();
    let mut pos = Board::startpos();
    let mut searcher = Searcher::new(&eval, OrderingHeuristic::None);
    let score = searcher.search(&mut pos, 3, true, 10, 10);
    assert_eq!(score, Score::leaf(0));
    assert_eq!(searcher.stats().nodes, 1);
}

#[test]
fn finds_mate_in_one() {
    let eval = StaticEvaluator::default();
    for depth in 1..=2 {
        let mut pos = board(MATE_IN_ONE);
        let (score, _) = search_root(&mut pos, &eval, depth, OrderingHeuristic::None);
        assert_eq!(move_to_uci(score.best_move.unwrap()), "h5f7", "depth {depth}");
        assert!(score.value > 900_000);
    }
}

#[test]
fn takes_a_hanging_queen() {
    let eval = StaticEvaluator::default();
    let mut pos = board(HANGING_QUEEN);
    let (score, _) = search_root(&mut pos, &eval, 2, OrderingHeuristic::None);
    let info = pos.move_info(score.best_move.unwrap());
    assert_eq!(info.captured, Some(PieceKind::Queen));
    assert!(score.value > 50);
}

#[test]
fn search_leaves_position_unchanged() {
    let eval = StaticEvaluator::default();
    for fen in [MIDDLEGAME, HANGING_QUEEN, MATE_IN_ONE] {
        let mut pos = board(fen);
        let before = pos.clone();
        search_root(&mut pos, &eval, 3, OrderingHeuristic::Captures);
        assert_eq!(pos, before);
        assert_eq!(pos.pending(), 0);
    }
}

#[test]
fn pruning_matches_full_width() {
    let eval = StaticEvaluator::default();
    for fen in [MIDDLEGAME, HANGING_QUEEN, MATE_IN_ONE] {
        for depth in 1..=3 {
            let mut pos = board(fen);
            let full = full_width(&mut pos, &eval, depth);
            for ordering in [OrderingHeuristic::None, OrderingHeuristic::Captures] {
                let (score, _) = search_root(&mut pos, &eval, depth, ordering);
                assert_eq!(score.value, full, "{fen} depth {depth} {ordering:?}");
            }
        }
    }
}

#[test]
fn minimax_agrees_with_negamax() {
    let eval = StaticEvaluator::default();
    for fen in [MIDDLEGAME, HANGING_QUEEN, MATE_IN_ONE] {
        for depth in 1..=3 {
            let mut pos = board(fen);
            let root = pos.side_to_move();
            let (nega, _) = search_root(&mut pos, &eval, depth, OrderingHeuristic::None);
            let mut searcher = Searcher::new(&eval, OrderingHeuristic::None);
            let mini = searcher.minimax(&mut pos, depth, true, -INFINITY, INFINITY, root);
            assert_eq!(mini.value, nega.value, "{fen} depth {depth}");
            assert_eq!(mini.best_move, nega.best_move, "{fen} depth {depth}");
        }
    }
}

#[test]
fn start_position_depth_one() {
    let eval = StaticEvaluator::default();
    let mut pos = Board::startpos();
    let legal = pos.legal_moves();
    let (score, stats) = search_root(&mut pos, &eval, 1, OrderingHeuristic::None);
    assert!(legal.contains(&score.best_move.unwrap()));
    assert!(score.value.abs() <= 30);
    assert_eq!(stats.nodes, 21);
    assert_eq!(pos.side_to_move(), Color::White);
}
