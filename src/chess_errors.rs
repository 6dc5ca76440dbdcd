//! Errors used throughout the rules core.
//!
//! Two families are kept apart:
//! - `MoveError` is the outcome of validating a requested move against the
//!   current game state. Every variant is recoverable and reported to the
//!   caller as a value; none aborts the game.
//! - `ChessErrors` covers input that has to be parsed before it reaches the
//!   core (coordinates typed by a player, FEN strings used for setup).
//!
//! Out-of-bounds squares are not an error at this level. `Square` cannot be
//! built outside the board through its checked constructor, and the parsing
//! helpers in `utils` reject bad coordinates before a `Square` exists.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Square};

/// Why a requested move was refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The start square is empty.
    #[error("no piece at start square {square}")]
    NoPiece { square: Square },

    /// The piece on the start square belongs to the side not on turn.
    #[error("piece at {square} belongs to {found}, but it is {expected}'s turn")]
    WrongColor {
        square: Square,
        expected: Color,
        found: Color,
    },

    /// The end square is not among the piece's generated destinations.
    #[error("{to} is not a valid destination for the piece at {from}")]
    IllegalDestination { from: Square, to: Square },

    /// Only raised when `RulesConfig::reject_self_check` is enabled.
    #[error("moving {from} to {to} would leave the king in check")]
    LeavesKingInCheck { from: Square, to: Square },
}

/// Errors raised while turning text into core values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A file outside 'A'..'H' or a rank outside '1'..'8'.
    #[error("invalid coordinate character '{0}'")]
    InvalidAlgebraicChar(char),

    /// A coordinate string of the wrong shape.
    #[error("invalid coordinate '{0}'")]
    InvalidAlgebraicString(String),

    /// Unexpected character in a FEN field.
    #[error("invalid FEN token '{0}'")]
    InvalidFENtoken(char),

    /// FEN with missing, extra or malformed fields.
    #[error("malformed FEN: {0}")]
    InvalidFENstringForm(String),
}
