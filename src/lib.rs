//! Crate root module declarations for the chess rules core.
//!
//! Exposes the game state model, per-piece move generation, move validation
//! and check/checkmate detection, plus the small text utilities (coordinates,
//! FEN, rendering) that a front end needs to drive a game.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod sliding_moves;
}

pub mod move_generation {
    pub mod checkmate;
    pub mod game_flow;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod move_generator;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_game_state;
}

pub use chess_errors::{ChessErrors, MoveError};
pub use game_state::chess_rules::RulesConfig;
pub use game_state::chess_types::{Color, GameState, Piece, PieceKind, PieceView, Square};
pub use move_generation::checkmate::check_checkmate;
pub use move_generation::game_flow::{play_move, GameStatus};
pub use move_generation::legal_move_apply::{apply_move, validate_move};
pub use move_generation::legal_move_checks::is_in_check;
pub use utils::algebraic::file_rank_to_square;

/// Fresh game in the standard starting position.
#[inline]
pub fn new_game() -> GameState {
    GameState::new_game()
}

/// Piece at `square` for rendering.
#[inline]
pub fn get_piece(game_state: &GameState, square: Square) -> Option<PieceView> {
    game_state.get_piece(square)
}
