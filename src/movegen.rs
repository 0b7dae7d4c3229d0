use crate::board::Board;
use crate::moves::Move;
use crate::piece::Player;
use crate::position::{Position, DIAGONALS};

impl Board {
    /// Destinations the piece on `pos` can reach in one step or one capture
    /// leg. Quiet destinations are left out whenever its owner has a capture
    /// anywhere on the board.
    pub fn moves_for_piece(&self, pos: Position) -> Vec<Position> {
        let mut targets = Vec::new();
        let Some(piece) = self.cell_at(pos) else {
            return targets;
        };
        if self.locked_chain().is_some_and(|chain| chain != pos) {
            return targets;
        }

        let must_capture = self.can_capture(piece.owner);
        for &dir in &DIAGONALS {
            if piece.is_king {
                let scan = self.scan_king_ray(pos, piece.owner, dir);
                if !must_capture {
                    targets.extend_from_slice(&scan.quiet);
                }
                targets.extend_from_slice(&scan.landings);
            } else {
                if !must_capture {
                    if let Some(step) = pos.step(dir).filter(|&s| self.cell_at(s).is_none()) {
                        targets.push(step);
                    }
                }
                if let Some((_, landing)) = self.man_jump(pos, piece.owner, dir) {
                    targets.push(landing);
                }
            }
        }
        targets
    }

    /// Every (from, to) pair for `player`, pieces visited in row-major order.
    pub fn all_moves(&self, player: Player) -> Vec<Move> {
        self.pieces_of(player)
            .flat_map(|(from, _)| {
                self.moves_for_piece(from)
                    .into_iter()
                    .map(move |to| Move::new(from, to))
            })
            .collect()
    }

    /// Whether `player` could move at all. Never used to decide the game.
    pub fn has_legal_move(&self, player: Player) -> bool {
        self.pieces_of(player).any(|(from, _)| !self.moves_for_piece(from).is_empty())
    }
}
