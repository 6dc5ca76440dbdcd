//! Terminal-oriented Unicode board renderer.
//!
//! Row 0 is drawn at the top. Row labels follow the coordinate convention of
//! `file_rank_to_square`, so the top row is labelled 1.

use crate::game_state::{chess_types::*, game_state::GameState};

pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  A B C D E F G H\n");

    for row in 0..BOARD_SIZE {
        let label = char::from(b'1' + row);
        out.push(label);
        out.push(' ');

        for col in 0..BOARD_SIZE {
            match game_state.get_piece(Square::new(row, col)) {
                Some(view) => out.push(piece_to_unicode(view)),
                None => out.push('·'),
            }

            if col + 1 < BOARD_SIZE {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(label);
        out.push('\n');
    }

    out.push_str("  A B C D E F G H");

    out
}

fn piece_to_unicode(view: PieceView) -> char {
    match (view.color, view.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}
