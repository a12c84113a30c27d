use thiserror::Error;

/// Errors raised while setting up a host board.
#[derive(Debug, Error)]
pub enum ChessError {
    #[error("invalid FEN `{fen}`: {reason}")]
    InvalidFen { fen: String, reason: String },

    #[error("malformed UCI move `{0}`")]
    MalformedMove(String),

    #[error("illegal move `{mv}` in position {fen}")]
    IllegalMove { mv: String, fen: String },
}
