use shakmaty::CastlingMode;
use shakmaty::uci::UciMove;

use crate::board::{Board, Move};
use crate::error::ChessError;

pub fn move_to_uci(mv: Move) -> String {
    UciMove::from_move(mv, CastlingMode::Standard).to_string()
}

/// Parse `txt` (e.g. `e2e4`, `e7e8q`) and match it against the legal moves of
/// `board`, so castling and en passant come out right.
pub fn parse_uci_move(board: &Board, txt: &str) -> Result<Move, ChessError> {
    let uci: UciMove = txt
        .trim()
        .parse()
        .map_err(|_| ChessError::MalformedMove(txt.to_string()))?;
    uci.to_move(board.position())
        .map_err(|_| ChessError::IllegalMove {
            mv: txt.to_string(),
            fen: board.to_fen(),
        })
}

/// Apply a UCI `position` command's arguments.
///
/// Supports `startpos [moves ...]` and `fen <fields> [moves ...]`.
pub fn set_position_from_uci(board: &mut Board, args: &[&str]) -> Result<(), ChessError> {
    let moves_at = args.iter().position(|&a| a == "moves");
    let setup = &args[..moves_at.unwrap_or(args.len())];

    *board = match setup.split_first() {
        None | Some((&"startpos", _)) => Board::startpos(),
        Some((&"fen", fields)) => Board::from_fen(&fields.join(" "))?,
        Some((other, _)) => {
            return Err(ChessError::InvalidFen {
                fen: other.to_string(),
                reason: "expected `startpos` or `fen`".to_string(),
            });
        }
    };

    if let Some(i) = moves_at {
        for txt in &args[i + 1..] {
            let mv = parse_uci_move(board, txt)?;
            board.commit_move(mv);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
