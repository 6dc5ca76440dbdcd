use crate::game_state::chess_types::*;
use crate::moves::sliding_moves::{trace_rays, DIAGONAL_DIRECTIONS};

#[inline]
pub fn bishop_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    trace_rays(board, from, color, &DIAGONAL_DIRECTIONS, out);
}
