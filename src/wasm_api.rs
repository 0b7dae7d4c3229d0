use crate::board::Board;
use crate::piece::{Piece, Player};
use crate::position::{Position, BOARD_SIZE};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct CellJson {
    owner: Player,
    king: bool,
}

#[derive(Serialize)]
struct MoveJson {
    from: [usize; 2],
    to: [usize; 2],
}

#[derive(Serialize)]
struct BoardState {
    cells: Vec<Vec<Option<CellJson>>>,
    current_player: Player,
    pending_chain: Option<[usize; 2]>,
    must_capture: bool,
    capturing_pieces: Vec<[usize; 2]>,
    winner: Option<Player>,
    legal_moves: Vec<MoveJson>,
}

#[derive(Serialize)]
struct MoveResult {
    #[serde(flatten)]
    board_state: Option<BoardState>,
    error: Option<String>,
}

fn square(pos: Position) -> [usize; 2] {
    [pos.row(), pos.col()]
}

fn cell_json(piece: Piece) -> CellJson {
    CellJson {
        owner: piece.owner,
        king: piece.is_king,
    }
}

fn build_board_state(board: &Board) -> BoardState {
    let cells = (0..BOARD_SIZE)
        .map(|r| {
            (0..BOARD_SIZE)
                .map(|c| Position::new(r, c).and_then(|p| board.cell_at(p)).map(cell_json))
                .collect()
        })
        .collect();

    let to_move = board.current_player();
    let legal_moves = board
        .all_moves(to_move)
        .iter()
        .map(|m| MoveJson {
            from: square(m.from),
            to: square(m.to),
        })
        .collect();

    BoardState {
        cells,
        current_player: to_move,
        pending_chain: board.pending_chain().map(square),
        must_capture: board.can_capture(to_move),
        capturing_pieces: board.capturing_pieces(to_move).into_iter().map(square).collect(),
        winner: board.check_win(),
        legal_moves,
    }
}

fn error_result(message: String) -> JsValue {
    let err = MoveResult {
        board_state: None,
        error: Some(message),
    };
    serde_wasm_bindgen::to_value(&err).unwrap_or(JsValue::NULL)
}

#[wasm_bindgen]
pub struct Game {
    board: Board,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Game {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Game {
        Game { board: Board::new() }
    }

    pub fn reset(&mut self) {
        self.board = Board::new().with_config(self.board.config());
    }

    pub fn get_board_state(&self) -> JsValue {
        let state = build_board_state(&self.board);
        serde_wasm_bindgen::to_value(&state).unwrap_or(JsValue::NULL)
    }

    pub fn make_move(
        &mut self,
        from_row: usize,
        from_col: usize,
        to_row: usize,
        to_col: usize,
    ) -> JsValue {
        if self.board.check_win().is_some() {
            return error_result("Game is already over".to_string());
        }

        let from = Position::new(from_row, from_col);
        let to = Position::new(to_row, to_col);
        let (Some(from), Some(to)) = (from, to) else {
            return error_result("Square is off the board".to_string());
        };

        match self.board.try_move(from, to) {
            Ok(_) => {
                let state = build_board_state(&self.board);
                serde_wasm_bindgen::to_value(&state).unwrap_or(JsValue::NULL)
            }
            Err(err) => error_result(err.to_string()),
        }
    }

    pub fn get_moves_for_square(&self, row: usize, col: usize) -> JsValue {
        // Only the side to move gets highlights.
        let to_move = self.board.current_player();
        let targets: Vec<[usize; 2]> = Position::new(row, col)
            .filter(|&from| self.board.cell_at(from).is_some_and(|p| p.owner == to_move))
            .map(|from| self.board.moves_for_piece(from).into_iter().map(square).collect())
            .unwrap_or_default();
        serde_wasm_bindgen::to_value(&targets).unwrap_or(JsValue::NULL)
    }
}
