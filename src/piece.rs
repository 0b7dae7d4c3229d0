use std::fmt;

use serde::{Deserialize, Serialize};

use crate::position::BOARD_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    White,
    Black,
}

impl Player {
    pub fn opposite(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Row on which a man of this color is crowned.
    pub fn promotion_row(self) -> usize {
        match self {
            Player::White => 0,
            Player::Black => BOARD_SIZE - 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::White => f.write_str("White"),
            Player::Black => f.write_str("Black"),
        }
    }
}

/// A piece is a plain value stored in its cell; promotion swaps the value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub owner: Player,
    pub is_king: bool,
}

impl Piece {
    pub fn man(owner: Player) -> Self {
        Piece { owner, is_king: false }
    }

    pub fn king(owner: Player) -> Self {
        Piece { owner, is_king: true }
    }

    pub fn crowned(self) -> Self {
        Piece { is_king: true, ..self }
    }

    pub fn symbol(self) -> char {
        match (self.owner, self.is_king) {
            (Player::White, false) => 'w',
            (Player::White, true) => 'W',
            (Player::Black, false) => 'b',
            (Player::Black, true) => 'B',
        }
    }

    pub fn from_symbol(c: char) -> Option<Piece> {
        match c {
            'w' => Some(Piece::man(Player::White)),
            'W' => Some(Piece::king(Player::White)),
            'b' => Some(Piece::man(Player::Black)),
            'B' => Some(Piece::king(Player::Black)),
            _ => None,
        }
    }
}
