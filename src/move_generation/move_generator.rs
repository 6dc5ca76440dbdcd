//! Destination generation behind a replaceable seam.
//!
//! `PseudoLegalMoveGenerator` applies geometry and occupancy only; it never
//! asks whether the mover's king ends up attacked. `LegalMoveGenerator` adds
//! that filter by simulating each candidate on a scratch board.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::leaves_king_attacked;
use crate::moves::bishop_moves::bishop_moves;
use crate::moves::king_moves::king_moves;
use crate::moves::knight_moves::knight_moves;
use crate::moves::pawn_moves::pawn_moves;
use crate::moves::queen_moves::queen_moves;
use crate::moves::rook_moves::rook_moves;

pub trait MoveGenerator {
    /// Destinations for the piece on `from`. Empty when `from` is empty.
    ///
    /// Order follows a fixed direction enumeration but callers should treat
    /// the result as a set.
    fn destinations(
        &self,
        board: &Board,
        from: Square,
        en_passant_target: Option<Square>,
    ) -> Vec<Square>;
}

pub struct PseudoLegalMoveGenerator;
pub struct LegalMoveGenerator;

impl MoveGenerator for PseudoLegalMoveGenerator {
    fn destinations(
        &self,
        board: &Board,
        from: Square,
        en_passant_target: Option<Square>,
    ) -> Vec<Square> {
        match board.get(from) {
            Some(piece) => generate_destinations(board, from, piece, en_passant_target),
            None => Vec::new(),
        }
    }
}

impl MoveGenerator for LegalMoveGenerator {
    fn destinations(
        &self,
        board: &Board,
        from: Square,
        en_passant_target: Option<Square>,
    ) -> Vec<Square> {
        let Some(piece) = board.get(from) else {
            return Vec::new();
        };

        let mut scratch = board.clone();
        generate_destinations(board, from, piece, en_passant_target)
            .into_iter()
            .filter(|&to| !leaves_king_attacked(&mut scratch, from, to, piece.color))
            .collect()
    }
}

/// Pseudo-legal destinations for `piece` standing on `from`.
pub fn generate_destinations(
    board: &Board,
    from: Square,
    piece: Piece,
    en_passant_target: Option<Square>,
) -> Vec<Square> {
    let mut out = Vec::with_capacity(28);

    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, piece, en_passant_target, &mut out),
        PieceKind::Knight => knight_moves(board, from, piece.color, &mut out),
        PieceKind::Bishop => bishop_moves(board, from, piece.color, &mut out),
        PieceKind::Rook => rook_moves(board, from, piece.color, &mut out),
        PieceKind::Queen => queen_moves(board, from, piece.color, &mut out),
        PieceKind::King => king_moves(board, from, piece.color, &mut out),
    }

    out
}
