use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ParseError;
use crate::position::Position;

/// A single step or a single capture leg.
#[derive(Clone, Copy, Serialize, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    pub fn new(from: Position, to: Position) -> Self {
        Move { from, to }
    }
}

/// Formats as e.g. "c3-d4".
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

/// Parses "c3-d4" or "c3:e5".
impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (from, to) = s
            .split_once(['-', ':'])
            .ok_or_else(|| ParseError::Move(s.to_string()))?;
        let from = from.trim().parse().map_err(|_| ParseError::Move(s.to_string()))?;
        let to = to.trim().parse().map_err(|_| ParseError::Move(s.to_string()))?;
        Ok(Move { from, to })
    }
}
