use crate::board::Board;
use crate::piece::Player;

impl Board {
    pub fn piece_count(&self, player: Player) -> usize {
        self.pieces_of(player).count()
    }

    /// The winner, if one side has no pieces left. Mobility is not
    /// considered: a side with pieces but no moves has not lost.
    pub fn check_win(&self) -> Option<Player> {
        if self.piece_count(Player::White) == 0 {
            Some(Player::Black)
        } else if self.piece_count(Player::Black) == 0 {
            Some(Player::White)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Piece;
    use crate::position::Position;

    #[test]
    fn no_winner_at_start() {
        assert_eq!(Board::new().check_win(), None);
    }

    #[test]
    fn last_side_standing_wins() {
        let mut board = Board::empty();
        board.set_cell(Position::new(3, 2).unwrap(), Some(Piece::man(Player::Black)));
        assert_eq!(board.check_win(), Some(Player::Black));

        let mut board = Board::empty();
        board.set_cell(Position::new(0, 1).unwrap(), Some(Piece::king(Player::White)));
        assert_eq!(board.check_win(), Some(Player::White));
    }

    #[test]
    fn immobile_side_is_not_beaten() {
        let board = Board::from_diagram(
            "........
             ........
             ........
             ........
             ........
             ..b.....
             .b......
             w.......",
            Player::White,
        )
        .unwrap();
        assert!(!board.has_legal_move(Player::White));
        assert_eq!(board.check_win(), None);
    }
}
