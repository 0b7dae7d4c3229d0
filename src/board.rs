use std::fmt;

use crate::config::RulesConfig;
use crate::error::ParseError;
use crate::piece::{Piece, Player};
use crate::position::{Position, BOARD_SIZE};

/// Rows filled with men at setup, counted from each player's home edge.
const SETUP_ROWS: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
    current_player: Player,
    /// Piece that captured and can capture again; its owner keeps the move.
    pending_chain: Option<Position>,
    config: RulesConfig,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board with no pieces. Useful for setting up test positions.
    pub fn empty() -> Self {
        Board {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
            current_player: Player::White,
            pending_chain: None,
            config: RulesConfig::new(),
        }
    }

    /// Standard opening position: Black men on the dark squares of rows 0-2,
    /// White men on rows 5-7, White to move.
    pub fn new() -> Self {
        let mut board = Board::empty();
        for pos in Position::all().filter(|p| p.is_dark()) {
            if pos.row() < SETUP_ROWS {
                board.set_cell(pos, Some(Piece::man(Player::Black)));
            } else if pos.row() >= BOARD_SIZE - SETUP_ROWS {
                board.set_cell(pos, Some(Piece::man(Player::White)));
            }
        }
        board
    }

    pub fn with_config(mut self, config: RulesConfig) -> Self {
        self.config = config;
        self
    }

    /// Parse an 8-line diagram (row 0 first): `.` empty, `w`/`b` men,
    /// `W`/`B` kings. Blank lines and surrounding whitespace are ignored.
    pub fn from_diagram(text: &str, to_move: Player) -> Result<Self, ParseError> {
        let rows: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if rows.len() != BOARD_SIZE {
            return Err(ParseError::DiagramShape(format!("{} rows", rows.len())));
        }
        if let Some(bad) = rows.iter().position(|r| r.chars().count() != BOARD_SIZE) {
            let width = rows[bad].chars().count();
            return Err(ParseError::DiagramShape(format!("{width} cells on row {bad}")));
        }

        let mut board = Board::empty();
        board.current_player = to_move;
        for (row, line) in rows.iter().enumerate() {
            for (col, symbol) in line.chars().enumerate() {
                if symbol == '.' {
                    continue;
                }
                let piece =
                    Piece::from_symbol(symbol).ok_or(ParseError::DiagramSymbol { symbol, row })?;
                if let Some(pos) = Position::new(row, col) {
                    board.set_cell(pos, Some(piece));
                }
            }
        }
        Ok(board)
    }

    pub fn config(&self) -> RulesConfig {
        self.config
    }

    pub fn cell_at(&self, pos: Position) -> Option<Piece> {
        self.squares[pos.row()][pos.col()]
    }

    /// Overwrite a cell. Position setup only; moves go through `try_move`.
    pub fn set_cell(&mut self, pos: Position, cell: Option<Piece>) {
        self.squares[pos.row()][pos.col()] = cell;
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn set_current_player(&mut self, player: Player) {
        self.current_player = player;
        self.pending_chain = None;
    }

    pub fn switch_player(&mut self) {
        self.current_player = self.current_player.opposite();
        tracing::trace!(to_move = %self.current_player, "turn passed");
    }

    /// The piece that must continue capturing before the turn can pass.
    pub fn pending_chain(&self) -> Option<Position> {
        self.pending_chain
    }

    pub(crate) fn set_pending_chain(&mut self, pos: Option<Position>) {
        self.pending_chain = pos;
    }

    /// The chain piece, when the config forbids moving anything else.
    pub(crate) fn locked_chain(&self) -> Option<Position> {
        self.pending_chain.filter(|_| self.config.lock_chain_piece)
    }

    /// Squares holding a piece of `player`, in row-major order.
    pub fn pieces_of(&self, player: Player) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| match self.cell_at(pos) {
            Some(piece) if piece.owner == player => Some((pos, piece)),
            _ => None,
        })
    }

    /// Walk outward from `from` (exclusive) in `dir` until the board edge.
    /// Every king rule is written against this one walk.
    pub fn ray(
        &self,
        from: Position,
        dir: (i32, i32),
    ) -> impl Iterator<Item = (Position, Option<Piece>)> + '_ {
        std::iter::successors(from.step(dir), move |p| p.step(dir))
            .map(move |p| (p, self.cell_at(p)))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.squares {
            for cell in row {
                let c = cell.map_or('.', Piece::symbol);
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn opening_position_layout() {
        let board = Board::new();
        assert_eq!(board.pieces_of(Player::White).count(), 12);
        assert_eq!(board.pieces_of(Player::Black).count(), 12);
        assert_eq!(board.current_player(), Player::White);
        for (p, piece) in board.pieces_of(Player::Black) {
            assert!(p.is_dark() && p.row() < 3 && !piece.is_king);
        }
        for (p, piece) in board.pieces_of(Player::White) {
            assert!(p.is_dark() && p.row() > 4 && !piece.is_king);
        }
        assert!(board.cell_at(pos(3, 0)).is_none());
        assert!(board.cell_at(pos(4, 1)).is_none());
    }

    #[test]
    fn diagram_matches_display() {
        let board = Board::new();
        let text = board.to_string();
        assert_eq!(text.lines().next(), Some(".b.b.b.b"));
        assert_eq!(text.lines().last(), Some("w.w.w.w."));
        let parsed = Board::from_diagram(&text, Player::White).unwrap();
        assert_eq!(parsed, board);
    }

    #[test]
    fn diagram_errors() {
        assert!(matches!(
            Board::from_diagram("........", Player::White),
            Err(ParseError::DiagramShape(_))
        ));
        let bad = "x.......\n".to_string() + &"........\n".repeat(7);
        assert_eq!(
            Board::from_diagram(&bad, Player::White),
            Err(ParseError::DiagramSymbol { symbol: 'x', row: 0 })
        );
    }

    #[test]
    fn ray_stops_at_edge() {
        let mut board = Board::empty();
        board.set_cell(pos(2, 2), Some(Piece::man(Player::Black)));
        let cells: Vec<_> = board.ray(pos(0, 0), (1, 1)).collect();
        assert_eq!(cells.len(), 7);
        assert_eq!(cells[1], (pos(2, 2), Some(Piece::man(Player::Black))));
        assert_eq!(cells[6].0, pos(7, 7));
        assert_eq!(board.ray(pos(0, 0), (-1, 1)).count(), 0);
    }

    #[test]
    fn switching_alternates() {
        let mut board = Board::new();
        board.switch_player();
        assert_eq!(board.current_player(), Player::Black);
        board.switch_player();
        assert_eq!(board.current_player(), Player::White);
    }
}
