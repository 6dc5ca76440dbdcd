//! FEN-to-GameState parser.
//!
//! Builds a `GameState` from a Forsyth-Edwards Notation string. The first FEN
//! rank fills row 0 and the last fills row 7, which matches the standard
//! orientation of the starting position. The en-passant field uses standard
//! chess coordinates (`e3` is row 5). The two clocks must be integers but are
//! not tracked.

use crate::chess_errors::ChessErrors;
use crate::game_state::{chess_types::*, game_state::GameState};

pub fn parse_fen(fen: &str) -> Result<GameState, ChessErrors> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| form_error("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| form_error("missing side to move"))?;
    let castling_part = parts.next().ok_or_else(|| form_error("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| form_error("missing en-passant square"))?;
    let halfmove_part = parts.next().ok_or_else(|| form_error("missing halfmove clock"))?;
    let fullmove_part = parts.next().ok_or_else(|| form_error("missing fullmove number"))?;

    if parts.next().is_some() {
        return Err(form_error("extra trailing fields"));
    }

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state.board)?;
    game_state.turn = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.en_passant_target = parse_en_passant_square(en_passant_part)?;

    halfmove_part
        .parse::<u16>()
        .map_err(|_| form_error(&format!("invalid halfmove clock {halfmove_part}")))?;
    fullmove_part
        .parse::<u16>()
        .map_err(|_| form_error(&format!("invalid fullmove number {fullmove_part}")))?;

    Ok(game_state)
}

fn form_error(message: &str) -> ChessErrors {
    ChessErrors::InvalidFENstringForm(message.to_owned())
}

fn parse_board(board_part: &str, board: &mut Board) -> Result<(), ChessErrors> {
    let rows: Vec<&str> = board_part.split('/').collect();
    if rows.len() != BOARD_SIZE as usize {
        return Err(form_error("board layout must contain 8 ranks"));
    }

    let mut kings = [0u8; 2];

    for (row, row_str) in rows.iter().enumerate() {
        let row = row as u8;
        let mut col = 0u8;

        for ch in row_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(ChessErrors::InvalidFENtoken(ch));
                }
                col += empty_count as u8;
                if col > BOARD_SIZE {
                    return Err(form_error("rank has too many files"));
                }
                continue;
            }

            let mut piece = piece_from_fen_char(ch).ok_or(ChessErrors::InvalidFENtoken(ch))?;
            let square = Square::try_new(row, col).ok_or_else(|| form_error("rank has too many files"))?;
            if piece.kind == PieceKind::Pawn && row != piece.color.pawn_home_row() {
                piece.has_moved = true;
            }
            if piece.kind == PieceKind::King {
                kings[piece.color.index()] += 1;
                if kings[piece.color.index()] > 1 {
                    return Err(form_error("more than one king per color"));
                }
            }
            board.place(square, Some(piece));
            col += 1;
        }

        if col != BOARD_SIZE {
            return Err(form_error("rank does not sum to 8 files"));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessErrors> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(form_error(&format!("invalid side to move {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, ChessErrors> {
    let mut rights = CastlingRights::NONE;
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.for_color_mut(Color::White).kingside = true,
            'Q' => rights.for_color_mut(Color::White).queenside = true,
            'k' => rights.for_color_mut(Color::Black).kingside = true,
            'q' => rights.for_color_mut(Color::Black).queenside = true,
            _ => return Err(ChessErrors::InvalidFENtoken(ch)),
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, ChessErrors> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let bytes = en_passant_part.as_bytes();
    let [file, rank] = bytes else {
        return Err(form_error(&format!("invalid en-passant square {en_passant_part}")));
    };
    if !(b'a'..=b'h').contains(file) {
        return Err(ChessErrors::InvalidFENtoken(char::from(*file)));
    }
    if !(b'1'..=b'8').contains(rank) {
        return Err(ChessErrors::InvalidFENtoken(char::from(*rank)));
    }

    Ok(Some(Square::new(b'8' - rank, file - b'a')))
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(kind, color))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{CastlingRights, Color, PieceKind, Square};
    use crate::game_state::game_state::GameState;
    use crate::utils::render_game_state::render_game_state;

    #[test]
    fn starting_fen_matches_new_game() {
        let parsed = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        println!("\n{}", render_game_state(&parsed));

        assert_eq!(parsed, GameState::new_game());
        assert_eq!(parsed.castling_rights, CastlingRights::FULL);
    }

    #[test]
    fn advanced_pawns_are_marked_moved() {
        let fen = "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2";
        let parsed = parse_fen(fen).expect("FEN should parse");

        let black_pawn = parsed.board.get(Square::new(3, 4)).expect("black e-pawn");
        let white_pawn = parsed.board.get(Square::new(4, 4)).expect("white e-pawn");
        let home_pawn = parsed.board.get(Square::new(6, 3)).expect("white d-pawn");

        assert_eq!(black_pawn.color, Color::Black);
        assert!(black_pawn.has_moved);
        assert!(white_pawn.has_moved);
        assert!(!home_pawn.has_moved);
        assert_eq!(parsed.en_passant_target, Some(Square::new(2, 4)));
    }

    #[test]
    fn partial_castling_rights() {
        let parsed = parse_fen("4k2r/8/8/8/8/8/8/R3K3 b Qk - 0 1").expect("FEN should parse");

        assert_eq!(parsed.turn, Color::Black);
        assert!(parsed.castling_rights.for_color(Color::White).queenside);
        assert!(!parsed.castling_rights.for_color(Color::White).kingside);
        assert!(parsed.castling_rights.for_color(Color::Black).kingside);
        assert_eq!(
            parsed.board.get(Square::new(0, 7)).map(|p| p.kind),
            Some(PieceKind::Rook)
        );
    }

    #[test]
    fn malformed_fen_is_rejected() {
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8 w - - 0 1"),
            Err(ChessErrors::InvalidFENstringForm(_))
        ));
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/7x w - - 0 1"),
            Err(ChessErrors::InvalidFENtoken('x'))
        );
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8/9 w - - 0 1"),
            Err(ChessErrors::InvalidFENtoken('9'))
        ));
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8/8 x - - 0 1"),
            Err(ChessErrors::InvalidFENstringForm(_))
        ));
        assert!(matches!(
            parse_fen("8/8/8/8/8/8/8/8 w - -"),
            Err(ChessErrors::InvalidFENstringForm(_))
        ));
        assert_eq!(
            parse_fen("4k3/8/8/8/8/8/8/K3K3 w - - 0 1"),
            Err(ChessErrors::InvalidFENstringForm(
                "more than one king per color".to_owned()
            ))
        );
    }

    #[test]
    fn one_king_of_each_color_is_accepted() {
        let parsed = parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(parsed.board.find_king(Color::White), Some(Square::new(7, 4)));
        assert_eq!(parsed.board.find_king(Color::Black), Some(Square::new(0, 4)));
    }
}
