//! Pawn destinations.
//!
//! Forward steps need empty squares; the double step is only offered to an
//! unmoved pawn with both squares clear. Diagonal steps need an opposing piece
//! or must land on the supplied en-passant target. Promotion is not handled.

use crate::game_state::chess_types::*;

pub fn pawn_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    en_passant_target: Option<Square>,
    out: &mut Vec<Square>,
) {
    let forward = piece.color.forward();

    if let Some(one_step) = from.offset(forward, 0) {
        if board.is_empty(one_step) {
            out.push(one_step);

            if !piece.has_moved {
                if let Some(two_step) = one_step.offset(forward, 0) {
                    if board.is_empty(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for d_col in [-1i8, 1i8] {
        let Some(to) = from.offset(forward, d_col) else {
            continue;
        };

        match board.get(to) {
            Some(target) if target.color != piece.color => out.push(to),
            // The target square is offered whatever occupies it.
            _ if en_passant_target == Some(to) => out.push(to),
            _ => {}
        }
    }
}
