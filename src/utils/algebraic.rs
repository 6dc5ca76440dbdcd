//! Coordinate conversions for player-typed squares.
//!
//! Files 'A'..'H' map to columns 0..7 and ranks '1'..'8' map to rows 0..7, so
//! rank '1' is Black's back rank at setup and White's pieces start on ranks
//! '7' and '8'. Lowercase files are accepted.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Square;

/// Convert a file letter and rank digit to a square.
pub fn file_rank_to_square(file: char, rank: char) -> Result<Square, ChessErrors> {
    let file = file.to_ascii_uppercase();
    if !('A'..='H').contains(&file) {
        return Err(ChessErrors::InvalidAlgebraicChar(file));
    }
    if !('1'..='8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicChar(rank));
    }

    let col = file as u8 - b'A';
    let row = rank as u8 - b'1';
    Ok(Square::new(row, col))
}

/// Parse a two-character coordinate such as "E2".
pub fn parse_coordinate(coordinate: &str) -> Result<Square, ChessErrors> {
    let mut chars = coordinate.trim().chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(file), Some(rank), None) => file_rank_to_square(file, rank),
        _ => Err(ChessErrors::InvalidAlgebraicString(coordinate.to_owned())),
    }
}

/// Inverse of `file_rank_to_square`.
pub fn square_to_coordinate(square: Square) -> String {
    let file = char::from(b'A' + square.col());
    let rank = char::from(b'1' + square.row());
    format!("{file}{rank}")
}
