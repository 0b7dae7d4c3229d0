// =============================================================================
// Move validation and commit
//
// `try_move` checks one step or one capture leg and, if it is legal, applies
// it in place. Every check runs before the first write, so a rejected move
// leaves the board exactly as it was.
//
// Multi-capture sequences are a series of `try_move` calls on the same piece:
// a leg after which the piece can capture again succeeds without passing the
// turn, and `pending_chain` names the piece that has to go on.
// =============================================================================

use serde::Serialize;

use crate::board::Board;
use crate::error::MoveError;
use crate::moves::Move;
use crate::piece::Piece;
use crate::position::Position;

/// What a committed move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    pub mv: Move,
    pub captured: Option<Position>,
    pub promoted: bool,
    /// The piece must capture again; the turn did not pass.
    pub continues_chain: bool,
}

/// A checked move, ready to be written.
struct Plan {
    piece: Piece,
    captured: Option<Position>,
}

impl Board {
    pub fn try_move(&mut self, from: Position, to: Position) -> Result<MoveOutcome, MoveError> {
        match self.plan_move(from, to) {
            Ok(plan) => Ok(self.commit(from, to, plan)),
            Err(err) => {
                tracing::debug!(%from, %to, error = %err, "move rejected");
                Err(err)
            }
        }
    }

    /// Same as `try_move(mv.from, mv.to)`.
    pub fn apply(&mut self, mv: Move) -> Result<MoveOutcome, MoveError> {
        self.try_move(mv.from, mv.to)
    }

    fn plan_move(&self, from: Position, to: Position) -> Result<Plan, MoveError> {
        let piece = self.cell_at(from).ok_or(MoveError::NoPieceAtSource(from))?;

        if self.config().enforce_turn_owner && piece.owner != self.current_player() {
            return Err(MoveError::WrongOwner {
                at: from,
                owner: piece.owner,
                to_move: self.current_player(),
            });
        }
        if let Some(chain) = self.locked_chain() {
            if chain != from {
                return Err(MoveError::ChainInProgress(chain));
            }
        }

        let (dir, distance) = from
            .diagonal_to(to)
            .ok_or(MoveError::NonDiagonalMove { from, to })?;
        let must_capture = self.can_capture(piece.owner);

        if !piece.is_king {
            return match distance {
                1 => {
                    if self.cell_at(to).is_some() {
                        Err(MoveError::TargetOccupied(to))
                    } else if must_capture {
                        Err(MoveError::NonCapturingWhileCaptureMandatory)
                    } else {
                        Ok(Plan { piece, captured: None })
                    }
                }
                2 => {
                    if self.cell_at(to).is_some() {
                        return Err(MoveError::TargetOccupied(to));
                    }
                    let mid = from.midpoint(to);
                    match self.cell_at(mid) {
                        Some(victim) if victim.owner != piece.owner => Ok(Plan {
                            piece,
                            captured: Some(mid),
                        }),
                        _ => Err(MoveError::InvalidMidpoint(mid)),
                    }
                }
                n => Err(MoveError::IllegalManDistance(n)),
            };
        }

        let mut captured = None;
        for (pos, cell) in self.ray(from, dir).take(distance - 1) {
            match cell {
                None => {}
                Some(p) if p.owner == piece.owner => {
                    return Err(MoveError::PathBlockedByOwnPiece(pos));
                }
                Some(_) if captured.is_some() => {
                    return Err(MoveError::MultipleInterveningPieces { from, to });
                }
                Some(_) => captured = Some(pos),
            }
        }
        if self.cell_at(to).is_some() {
            return Err(MoveError::TargetOccupied(to));
        }
        if must_capture && captured.is_none() {
            return Err(MoveError::NonCapturingWhileCaptureMandatory);
        }
        Ok(Plan { piece, captured })
    }

    fn commit(&mut self, from: Position, to: Position, plan: Plan) -> MoveOutcome {
        self.set_cell(to, Some(plan.piece));
        self.set_cell(from, None);
        if let Some(victim) = plan.captured {
            self.set_cell(victim, None);
        }

        let continues_chain = plan.captured.is_some() && self.piece_can_capture(to);
        let mut promoted = false;
        if continues_chain {
            self.set_pending_chain(Some(to));
        } else {
            promoted = self.promote_if_crowned(to);
            self.set_pending_chain(None);
            self.switch_player();
        }

        let outcome = MoveOutcome {
            mv: Move::new(from, to),
            captured: plan.captured,
            promoted,
            continues_chain,
        };
        tracing::debug!(
            mv = %outcome.mv,
            captured = ?outcome.captured,
            promoted,
            continues_chain,
            "move committed"
        );
        outcome
    }

    fn promote_if_crowned(&mut self, pos: Position) -> bool {
        match self.cell_at(pos) {
            Some(piece) if !piece.is_king && pos.row() == piece.owner.promotion_row() => {
                self.set_cell(pos, Some(piece.crowned()));
                true
            }
            _ => false,
        }
    }
}
