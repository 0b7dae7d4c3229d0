//! Rules engine for Russian draughts: 8x8 board, men and flying kings,
//! mandatory capture and chain captures.
//!
//! Everything hangs off [`Board`]: query it for legal destinations, commit
//! moves with [`Board::try_move`], and ask [`Board::check_win`] afterwards.

pub mod board;
pub mod capture;
pub mod config;
pub mod error;
pub mod movegen;
pub mod moves;
pub mod piece;
pub mod position;
pub mod validate;
pub mod win;

#[cfg(target_arch = "wasm32")]
mod wasm_api;

pub use board::Board;
pub use config::RulesConfig;
pub use error::{ConfigError, MoveError, ParseError};
pub use moves::Move;
pub use piece::{Piece, Player};
pub use position::{Position, BOARD_SIZE, DIAGONALS};
pub use validate::MoveOutcome;
