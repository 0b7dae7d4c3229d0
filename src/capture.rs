// =============================================================================
// Capture detection
//
// Whether a player has any capture at all is what makes capturing mandatory:
// the validator refuses quiet moves and the generator drops quiet destinations
// whenever `can_capture` holds for the moving side.
// =============================================================================

use crate::board::Board;
use crate::piece::{Piece, Player};
use crate::position::{Position, DIAGONALS};

/// What a king sees along one diagonal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct KingRay {
    /// Empty squares before the first piece.
    pub quiet: Vec<Position>,
    /// The single opposing piece that can be jumped, if any.
    pub jumped: Option<Position>,
    /// Empty squares beyond `jumped`, up to the next piece or the edge.
    pub landings: Vec<Position>,
}

impl KingRay {
    pub fn captures(&self) -> bool {
        !self.landings.is_empty()
    }
}

impl Board {
    /// True iff any piece of `player` has a capture available.
    pub fn can_capture(&self, player: Player) -> bool {
        self.pieces_of(player).any(|(pos, piece)| self.has_capture(pos, piece))
    }

    /// True iff the piece on `pos` (if any) can capture right now.
    pub fn piece_can_capture(&self, pos: Position) -> bool {
        self.cell_at(pos).is_some_and(|piece| self.has_capture(pos, piece))
    }

    /// Pieces of `player` that have a capture, row-major.
    pub fn capturing_pieces(&self, player: Player) -> Vec<Position> {
        self.pieces_of(player)
            .filter(|&(pos, piece)| self.has_capture(pos, piece))
            .map(|(pos, _)| pos)
            .collect()
    }

    fn has_capture(&self, pos: Position, piece: Piece) -> bool {
        if piece.is_king {
            DIAGONALS.iter().any(|&dir| self.scan_king_ray(pos, piece.owner, dir).captures())
        } else {
            DIAGONALS.iter().any(|&dir| self.man_jump(pos, piece.owner, dir).is_some())
        }
    }

    /// A man's jump in `dir`: (captured square, landing square).
    pub(crate) fn man_jump(
        &self,
        from: Position,
        owner: Player,
        dir: (i32, i32),
    ) -> Option<(Position, Position)> {
        let mid = from.step(dir)?;
        let landing = mid.step(dir)?;
        match (self.cell_at(mid), self.cell_at(landing)) {
            (Some(victim), None) if victim.owner != owner => Some((mid, landing)),
            _ => None,
        }
    }

    pub(crate) fn scan_king_ray(&self, from: Position, owner: Player, dir: (i32, i32)) -> KingRay {
        let mut scan = KingRay::default();
        for (pos, cell) in self.ray(from, dir) {
            match cell {
                None if scan.jumped.is_some() => scan.landings.push(pos),
                None => scan.quiet.push(pos),
                Some(piece) if piece.owner == owner => break,
                Some(_) if scan.jumped.is_some() => break,
                Some(_) => scan.jumped = Some(pos),
            }
        }
        if scan.landings.is_empty() {
            scan.jumped = None;
        }
        scan
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn opening_has_no_captures() {
        let board = Board::new();
        assert!(!board.can_capture(Player::White));
        assert!(!board.can_capture(Player::Black));
    }

    #[test]
    fn man_captures_in_every_direction() {
        let board = Board::from_diagram(
            "........
             ........
             ........
             ....b...
             ...w....
             ........
             ........
             ........",
            Player::White,
        )
        .unwrap();
        assert!(board.can_capture(Player::White));
        assert!(board.can_capture(Player::Black));
        assert_eq!(board.capturing_pieces(Player::Black), vec![pos(3, 4)]);
    }

    #[test]
    fn man_jump_needs_empty_landing_on_board() {
        let board = Board::from_diagram(
            "........
             ........
             ........
             ........
             ........
             ........
             .b......
             w.......",
            Player::White,
        )
        .unwrap();
        // The landing square (5,2) is free, so white can jump.
        assert!(board.piece_can_capture(pos(7, 0)));
        // Black on (6,1) would land off the board jumping (7,0).
        assert!(!board.piece_can_capture(pos(6, 1)));
    }

    #[test]
    fn blocked_jump_is_no_capture() {
        let board = Board::from_diagram(
            "........
             ........
             ........
             ........
             ........
             ...w....
             ..b.....
             .w......",
            Player::White,
        )
        .unwrap();
        assert!(!board.piece_can_capture(pos(7, 1)));
    }

    #[test]
    fn king_captures_at_distance() {
        let board = Board::from_diagram(
            "W.......
             ........
             ........
             ...b....
             ........
             ........
             ........
             ........",
            Player::White,
        )
        .unwrap();
        let scan = board.scan_king_ray(pos(0, 0), Player::White, (1, 1));
        assert_eq!(scan.quiet, vec![pos(1, 1), pos(2, 2)]);
        assert_eq!(scan.jumped, Some(pos(3, 3)));
        assert_eq!(scan.landings, vec![pos(4, 4), pos(5, 5), pos(6, 6), pos(7, 7)]);
        assert!(board.can_capture(Player::White));
    }

    #[test]
    fn king_cannot_jump_two_in_a_row_or_off_the_edge() {
        let board = Board::from_diagram(
            "W.......
             ........
             ..b.....
             ...b....
             ........
             ........
             ......b.
             .......b",
            Player::White,
        )
        .unwrap();
        assert!(!board.piece_can_capture(pos(0, 0)));

        let edge = Board::from_diagram(
            "........
             ........
             ........
             ........
             ........
             ........
             ......b.
             .......W",
            Player::White,
        )
        .unwrap();
        // Jumps toward (5,5) are possible: black on (6,6), landing (5,5) empty.
        assert!(edge.piece_can_capture(pos(7, 7)));

        let corner = Board::from_diagram(
            "........
             ........
             ........
             ........
             ........
             ........
             ......W.
             .......b",
            Player::White,
        )
        .unwrap();
        assert!(!corner.piece_can_capture(pos(6, 6)));
    }

    #[test]
    fn own_piece_shields_the_ray() {
        let board = Board::from_diagram(
            "W.......
             .w......
             ..b.....
             ........
             ........
             ........
             ........
             ........",
            Player::White,
        )
        .unwrap();
        assert!(!board.piece_can_capture(pos(0, 0)));
        let scan = board.scan_king_ray(pos(0, 0), Player::White, (1, 1));
        assert!(scan.quiet.is_empty() && !scan.captures());
    }
}
