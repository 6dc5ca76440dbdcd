//! Shared ray walker for the sliding pieces.
//!
//! Each ray steps outward one square at a time. Empty squares are added and
//! the walk continues; an opposing piece is added and ends the ray; a friendly
//! piece ends the ray without being added.

use crate::game_state::chess_types::*;

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub fn trace_rays(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_row, d_col) in directions {
        trace_ray(board, from, color, d_row, d_col, out);
    }
}

fn trace_ray(board: &Board, from: Square, color: Color, d_row: i8, d_col: i8, out: &mut Vec<Square>) {
    let mut cursor = from.offset(d_row, d_col);

    while let Some(square) = cursor {
        match board.get(square) {
            None => out.push(square),
            Some(occupant) => {
                if occupant.color != color {
                    out.push(square);
                }
                break;
            }
        }
        cursor = square.offset(d_row, d_col);
    }
}
