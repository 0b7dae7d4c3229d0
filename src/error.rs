use thiserror::Error;

use crate::piece::Player;
use crate::position::Position;

/// Why `Board::try_move` refused a move. A refused move never touches the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("no piece on {0}")]
    NoPieceAtSource(Position),

    #[error("piece on {at} belongs to {owner}, but {to_move} is to move")]
    WrongOwner {
        at: Position,
        owner: Player,
        to_move: Player,
    },

    #[error("capture chain in progress: the piece on {0} must keep capturing")]
    ChainInProgress(Position),

    #[error("{from}-{to} is not a diagonal move")]
    NonDiagonalMove { from: Position, to: Position },

    #[error("a capture is available, so a non-capturing move is not allowed")]
    NonCapturingWhileCaptureMandatory,

    #[error("target square {0} is occupied")]
    TargetOccupied(Position),

    #[error("no opposing piece to jump on {0}")]
    InvalidMidpoint(Position),

    #[error("a man cannot move {0} squares")]
    IllegalManDistance(usize),

    #[error("own piece on {0} blocks the path")]
    PathBlockedByOwnPiece(Position),

    #[error("more than one piece between {from} and {to}")]
    MultipleInterveningPieces { from: Position, to: Position },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("invalid square: {0:?}")]
    Square(String),

    #[error("invalid move: {0:?}")]
    Move(String),

    #[error("board diagram needs 8 rows of 8 cells, got {0}")]
    DiagramShape(String),

    #[error("unknown cell symbol {symbol:?} on row {row}")]
    DiagramSymbol { symbol: char, row: usize },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read rules config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to decode rules config: {0}")]
    Json(#[from] serde_json::Error),
}
