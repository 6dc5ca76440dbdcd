//! King destinations: the eight unit steps. No castling destinations are ever
//! produced, whatever the castling rights say.

use crate::game_state::chess_types::*;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub fn king_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    for (d_row, d_col) in KING_OFFSETS {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        if !matches!(board.get(to), Some(occupant) if occupant.color == color) {
            out.push(to);
        }
    }
}
