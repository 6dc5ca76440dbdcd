use crate::game_state::chess_types::*;
use crate::moves::sliding_moves::{trace_rays, ORTHOGONAL_DIRECTIONS};

#[inline]
pub fn rook_moves(board: &Board, from: Square, color: Color, out: &mut Vec<Square>) {
    trace_rays(board, from, color, &ORTHOGONAL_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::rook_moves;
    use crate::game_state::chess_types::{Board, Color, Piece, PieceKind, Square};

    #[test]
    fn rook_on_empty_board_has_fourteen_squares() {
        let mut out = Vec::new();
        rook_moves(&Board::empty(), Square::new(4, 3), Color::White, &mut out);
        assert_eq!(out.len(), 14);
    }

    #[test]
    fn rook_blocker_stops_ray() {
        let mut board = Board::empty();
        let a1 = Square::new(7, 0);
        board.place(Square::new(4, 0), Some(Piece::new(PieceKind::Knight, Color::Black)));

        let mut out = Vec::new();
        rook_moves(&board, a1, Color::White, &mut out);

        assert!(out.contains(&Square::new(4, 0)));
        assert!(!out.contains(&Square::new(3, 0)));
    }

    #[test]
    fn friendly_blocker_is_excluded() {
        let mut board = Board::empty();
        let from = Square::new(0, 0);
        board.place(Square::new(0, 1), Some(Piece::new(PieceKind::Knight, Color::Black)));

        let mut out = Vec::new();
        rook_moves(&board, from, Color::Black, &mut out);

        assert_eq!(out.len(), 7);
        assert!(out.iter().all(|sq| sq.col() == 0));
    }
}
