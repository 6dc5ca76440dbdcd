//! Canonical chess-rule constants and rule toggles.
//!
//! Stores the standard starting layout used to initialize a game and the
//! `RulesConfig` switches that choose between the reference behaviour of the
//! validator and the stricter, rules-correct variants.

use crate::game_state::chess_types::PieceKind;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Back-rank layout from column 0 to column 7, shared by both colors.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Rule switches carried by a `GameState`.
///
/// The default reproduces the reference validator exactly:
/// - `validate_move` accepts moves that leave the mover's own king attacked.
/// - `check_checkmate` reports `true` whenever no trial move ends outside of
///   check, whether or not the side was in check to begin with (so a
///   stalemated side also reads as mated).
///
/// `STRICT` turns both corrections on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RulesConfig {
    /// Reject moves whose result leaves the mover's king attacked.
    pub reject_self_check: bool,
    /// Only report checkmate when the side to move is currently in check.
    pub checkmate_requires_check: bool,
}

impl RulesConfig {
    pub const REFERENCE: RulesConfig = RulesConfig {
        reject_self_check: false,
        checkmate_requires_check: false,
    };

    pub const STRICT: RulesConfig = RulesConfig {
        reject_self_check: true,
        checkmate_requires_check: true,
    };
}
