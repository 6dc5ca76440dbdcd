//! Move validation and execution against a `GameState`.

use tracing::debug;

use crate::chess_errors::MoveError;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_generator::{
    LegalMoveGenerator, MoveGenerator, PseudoLegalMoveGenerator,
};

/// Check a requested move in order: occupant, turn, destination.
///
/// With the default rules a move that leaves the mover's king attacked is
/// accepted, as long as the destination is geometrically reachable. Setting
/// `RulesConfig::reject_self_check` adds a final simulate-and-check step.
pub fn validate_move(game_state: &GameState, start: Square, end: Square) -> Result<(), MoveError> {
    let result = check_move(game_state, start, end);
    if let Err(err) = &result {
        debug!(?start, ?end, turn = %game_state.turn, %err, "move rejected");
    }
    result
}

fn check_move(game_state: &GameState, start: Square, end: Square) -> Result<(), MoveError> {
    let board = &game_state.board;

    let piece = board
        .get(start)
        .ok_or(MoveError::NoPiece { square: start })?;

    if piece.color != game_state.turn {
        return Err(MoveError::WrongColor {
            square: start,
            expected: game_state.turn,
            found: piece.color,
        });
    }

    let destinations =
        PseudoLegalMoveGenerator.destinations(board, start, game_state.en_passant_target);
    if !destinations.contains(&end) {
        return Err(MoveError::IllegalDestination {
            from: start,
            to: end,
        });
    }

    if game_state.rules.reject_self_check
        && !LegalMoveGenerator
            .destinations(board, start, game_state.en_passant_target)
            .contains(&end)
    {
        return Err(MoveError::LeavesKingInCheck {
            from: start,
            to: end,
        });
    }

    Ok(())
}

/// Relocate the piece on `start` to `end` and return whatever stood on `end`.
///
/// The caller validates first and flips the turn afterwards. Castling rights
/// and the en-passant target are not touched.
#[inline]
pub fn apply_move(game_state: &mut GameState, start: Square, end: Square) -> Option<Piece> {
    game_state.board.relocate(start, end)
}

/// Destinations a front end can offer for the piece on `square`, honoring the
/// self-check filter when the rules ask for it.
pub fn candidate_destinations(game_state: &GameState, square: Square) -> Vec<Square> {
    if game_state.rules.reject_self_check {
        LegalMoveGenerator.destinations(&game_state.board, square, game_state.en_passant_target)
    } else {
        PseudoLegalMoveGenerator.destinations(
            &game_state.board,
            square,
            game_state.en_passant_target,
        )
    }
}
