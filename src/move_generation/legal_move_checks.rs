//! Check detection by opponent-move enumeration.
//!
//! A king is in check when any opposing piece lists the king's square among
//! its pseudo-legal destinations. Opponent pawns are enumerated without an
//! en-passant target.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_generator::generate_destinations;

/// First king of `color` found by a row-major scan.
#[inline]
pub fn king_square(game_state: &GameState, color: Color) -> Option<Square> {
    game_state.board.find_king(color)
}

#[inline]
pub fn is_in_check(game_state: &GameState, color: Color) -> bool {
    king_square(game_state, color)
        .is_some_and(|king_sq| is_square_attacked(&game_state.board, king_sq, color.opposite()))
}

/// Returns `false` when `color` has no king on the board.
pub fn is_king_attacked(board: &Board, color: Color) -> bool {
    let Some(king_sq) = board.find_king(color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    board
        .pieces_of(attacker_color)
        .any(|(from, piece)| generate_destinations(board, from, piece, None).contains(&square))
}

/// Squares of `attacker_color` pieces whose destinations include `square`.
pub fn attackers_to_square(board: &Board, square: Square, attacker_color: Color) -> Vec<Square> {
    board
        .pieces_of(attacker_color)
        .filter(|&(from, piece)| generate_destinations(board, from, piece, None).contains(&square))
        .map(|(from, _)| from)
        .collect()
}

/// Play `from -> to` on `board`, test whether `color`'s king is attacked, then
/// undo. Positions and any captured piece are restored; the moved piece keeps
/// `has_moved = true`.
pub fn leaves_king_attacked(board: &mut Board, from: Square, to: Square, color: Color) -> bool {
    let captured = board.relocate(from, to);
    let attacked = is_king_attacked(board, color);
    board.relocate(to, from);
    board.restore(to, captured);
    attacked
}

#[cfg(test)]
mod tests {
    use super::{attackers_to_square, is_in_check, king_square, leaves_king_attacked};
    use crate::game_state::chess_types::{Board, Color, Piece, PieceKind, Square};
    use crate::game_state::game_state::GameState;

    fn rook_and_king(rook_col: u8) -> GameState {
        let mut game = GameState::new_empty();
        game.board.place(Square::new(7, 4), Some(Piece::new(PieceKind::King, Color::White)));
        game.board.place(Square::new(0, 4), Some(Piece::new(PieceKind::King, Color::Black)));
        game.board.place(
            Square::new(7, rook_col),
            Some(Piece::new(PieceKind::Rook, Color::Black)),
        );
        game
    }

    #[test]
    fn rook_on_the_same_rank_gives_check() {
        let game = rook_and_king(0);
        assert!(is_in_check(&game, Color::White));
        assert!(!is_in_check(&game, Color::Black));
    }

    #[test]
    fn removing_or_blocking_the_rook_clears_check() {
        let mut game = rook_and_king(0);
        game.board.place(Square::new(7, 0), None);
        assert!(!is_in_check(&game, Color::White));

        let mut game = rook_and_king(0);
        game.board.place(Square::new(7, 2), Some(Piece::new(PieceKind::Bishop, Color::White)));
        assert!(!is_in_check(&game, Color::White));
    }

    #[test]
    fn starting_position_has_no_checks() {
        let game = GameState::new_game();
        assert!(!is_in_check(&game, Color::White));
        assert!(!is_in_check(&game, Color::Black));
        assert_eq!(king_square(&game, Color::White), Some(Square::new(7, 4)));
    }

    #[test]
    fn missing_king_is_never_in_check() {
        let game = GameState::new_empty();
        assert!(!is_in_check(&game, Color::White));
    }

    #[test]
    fn knight_and_pawn_checks_are_found() {
        let mut board = Board::empty();
        let king = Square::new(4, 4);
        board.place(king, Some(Piece::new(PieceKind::King, Color::White)));
        board.place(Square::new(2, 3), Some(Piece::new(PieceKind::Knight, Color::Black)));
        board.place(Square::new(3, 5), Some(Piece::new(PieceKind::Pawn, Color::Black)));
        board.place(Square::new(3, 4), Some(Piece::new(PieceKind::Pawn, Color::Black)));

        let mut attackers = attackers_to_square(&board, king, Color::Black);
        attackers.sort();
        assert_eq!(attackers, vec![Square::new(2, 3), Square::new(3, 5)]);
    }

    #[test]
    fn trial_move_is_undone_including_the_capture() {
        let mut board = Board::empty();
        board.place(Square::new(7, 4), Some(Piece::new(PieceKind::King, Color::White)));
        board.place(Square::new(6, 4), Some(Piece::new(PieceKind::Rook, Color::White)));
        board.place(Square::new(6, 0), Some(Piece::new(PieceKind::Knight, Color::Black)));
        board.place(Square::new(0, 4), Some(Piece::new(PieceKind::Rook, Color::Black)));

        assert!(leaves_king_attacked(&mut board, Square::new(6, 4), Square::new(6, 0), Color::White));
        assert_eq!(
            board.get(Square::new(6, 0)).map(|p| p.kind),
            Some(PieceKind::Knight)
        );
        assert_eq!(board.get(Square::new(6, 4)).map(|p| p.kind), Some(PieceKind::Rook));
        assert!(!leaves_king_attacked(&mut board, Square::new(6, 4), Square::new(3, 4), Color::White));
    }
}
