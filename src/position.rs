use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ParseError;

pub const BOARD_SIZE: usize = 8;

/// The four diagonal directions as (row, col) deltas.
pub const DIAGONALS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// A square on the board. Always in range: the only way to build one is
/// through [`Position::new`] or by stepping from another position.
///
/// Ordering is row-major (row first, then column).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Option<Position> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Position { row: row as u8, col: col as u8 })
        } else {
            None
        }
    }

    pub fn row(self) -> usize {
        self.row as usize
    }

    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Dark squares are the playing squares.
    pub fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    pub fn offset(self, (dr, dc): (i32, i32), steps: i32) -> Option<Position> {
        let r = self.row as i32 + dr * steps;
        let c = self.col as i32 + dc * steps;
        if r < 0 || c < 0 {
            return None;
        }
        Position::new(r as usize, c as usize)
    }

    pub fn step(self, dir: (i32, i32)) -> Option<Position> {
        self.offset(dir, 1)
    }

    /// Unit direction and distance to `other`, if it lies on a diagonal.
    /// Returns `None` for the same square.
    pub fn diagonal_to(self, other: Position) -> Option<((i32, i32), usize)> {
        let dr = other.row as i32 - self.row as i32;
        let dc = other.col as i32 - self.col as i32;
        if dr == 0 || dr.abs() != dc.abs() {
            return None;
        }
        Some(((dr.signum(), dc.signum()), dr.unsigned_abs() as usize))
    }

    /// Square halfway between two squares an even distance apart.
    pub fn midpoint(self, other: Position) -> Position {
        Position {
            row: (self.row + other.row) / 2,
            col: (self.col + other.col) / 2,
        }
    }

    /// Every square in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| {
            (0..BOARD_SIZE).map(move |col| Position {
                row: row as u8,
                col: col as u8,
            })
        })
    }
}

/// Draughts notation: file `a`-`h` is the column, rank `1` is row 7.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        let rank = BOARD_SIZE - self.row as usize;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Position {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(ParseError::Square(s.to_string()));
        }
        let (file, rank) = (bytes[0].to_ascii_lowercase(), bytes[1]);
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(ParseError::Square(s.to_string()));
        }
        let col = (file - b'a') as usize;
        let row = BOARD_SIZE - (rank - b'0') as usize;
        Position::new(row, col).ok_or_else(|| ParseError::Square(s.to_string()))
    }
}
