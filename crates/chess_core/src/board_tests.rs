use super::*;
use crate::types::{Color, PieceKind};

const SCHOLARS_MATE: &str = "r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1";
const STALEMATE: &str = "k7/8/1Q6/8/8/8/8/1K6 b - - 0 1";

#[test]
fn startpos_has_twenty_moves() {
    let board = Board::startpos();
    assert_eq!(board.legal_moves().len(), 20);
    assert_eq!(board.side_to_move(), Color::White);
    assert!(!board.is_in_check());
    assert!(!board.is_in_checkmate());
}

#[test]
fn piece_at_uses_rank_major_indexing() {
    let board = Board::startpos();
    assert_eq!(
        board.piece_at(0),
        Some(Piece::new(Color::White, PieceKind::Rook))
    );
    assert_eq!(
        board.piece_at(4),
        Some(Piece::new(Color::White, PieceKind::King))
    );
    assert_eq!(
        board.piece_at(59),
        Some(Piece::new(Color::Black, PieceKind::Queen))
    );
    assert_eq!(board.piece_at(27), None);
}

#[test]
#[should_panic(expected = "square index out of range")]
fn piece_at_rejects_off_board_square() {
    Board::startpos().piece_at(64);
}

#[test]
fn detects_checkmate() {
    let board = Board::from_fen(SCHOLARS_MATE).unwrap();
    assert!(board.is_in_check());
    assert!(board.is_in_checkmate());
    assert!(board.legal_moves().is_empty());
}

#[test]
fn stalemate_is_not_check() {
    let board = Board::from_fen(STALEMATE).unwrap();
    assert!(board.legal_moves().is_empty());
    assert!(!board.is_in_check());
    assert!(!board.is_in_checkmate());
}

#[test]
fn apply_then_revert_restores_position() {
    let mut board = Board::startpos();
    let before = board.clone();
    for mv in board.legal_moves() {
        board.apply_move(mv);
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.pending(), 1);
        board.revert_move(mv);
        assert_eq!(board, before);
        assert_eq!(board.to_fen(), before.to_fen());
    }
    assert_eq!(board.pending(), 0);
}

#[test]
fn nested_reverts_unwind_in_order() {
    let mut board = Board::startpos();
    let start = board.clone();
    let first = board.legal_moves()[0];
    board.apply_move(first);
    let middle = board.clone();
    let second = board.legal_moves()[0];
    board.apply_move(second);

    board.revert_move(second);
    assert_eq!(board, middle);
    board.revert_move(first);
    assert_eq!(board, start);
}

#[test]
#[should_panic(expected = "revert_move out of order")]
fn revert_out_of_order_panics() {
    let mut board = Board::startpos();
    let moves = board.legal_moves();
    board.apply_move(moves[0]);
    board.revert_move(moves[1]);
}

#[test]
#[should_panic(expected = "no applied move outstanding")]
fn revert_without_apply_panics() {
    let mut board = Board::startpos();
    let mv = board.legal_moves()[0];
    board.revert_move(mv);
}

#[test]
fn move_info_reports_captures() {
    // White pawn on e4 can take the black pawn on d5.
    let board =
        Board::from_fen("rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 2").unwrap();
    let capture = board
        .legal_moves()
        .into_iter()
        .find(|mv| mv.is_capture())
        .expect("exd5 should be legal");
    let info = board.move_info(capture);
    assert_eq!(info.moved, Some(PieceKind::Pawn));
    assert_eq!(info.captured, Some(PieceKind::Pawn));
    assert_eq!(info.promotion, None);
}

#[test]
fn invalid_fen_is_an_error() {
    let err = Board::from_fen("not a fen").unwrap_err();
    assert!(matches!(err, ChessError::InvalidFen { .. }));
}

#[test]
fn fen_round_trips() {
    let board = Board::from_fen(SCHOLARS_MATE).unwrap();
    assert_eq!(board.to_fen(), SCHOLARS_MATE);
}
