//! Naive checkmate detection by exhaustive simulate-and-undo.
//!
//! Every pseudo-legal move of the side to move is played on the live board,
//! the mover's king is tested, and the move is taken back. The first trial
//! that ends outside of check proves the side is not mated.
//!
//! Kept behind this single function so a legality-aware generator can replace
//! it without touching callers.

use tracing::{debug, trace};

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{is_king_attacked, leaves_king_attacked};
use crate::move_generation::move_generator::generate_destinations;

/// Whether `game_state.turn` has no move that ends outside of check.
///
/// Under the default rules this does not first ask whether the side is in
/// check, so a side with no safe move reads as mated even when it is only
/// stalemated. `RulesConfig::checkmate_requires_check` adds that guard.
///
/// Pieces used for a trial keep `has_moved = true` after the undo.
pub fn check_checkmate(game_state: &mut GameState) -> bool {
    let side = game_state.turn;

    if game_state.rules.checkmate_requires_check && !is_king_attacked(&game_state.board, side) {
        debug!(%side, "not in check, so not checkmate");
        return false;
    }

    let origins: Vec<(Square, Piece)> = game_state.board.pieces_of(side).collect();
    let mut trials = 0usize;

    for (from, piece) in origins {
        // The list is fixed before any trial flags the piece as moved.
        let destinations = generate_destinations(&game_state.board, from, piece, None);

        for to in destinations {
            trials += 1;
            let attacked = leaves_king_attacked(&mut game_state.board, from, to, side);
            trace!(?from, ?to, attacked, "checkmate trial");

            if !attacked {
                debug!(%side, trials, ?from, ?to, "escape found");
                return false;
            }
        }
    }

    debug!(%side, trials, "no escaping move");
    true
}
