//! Authoritative game state.
//!
//! `GameState` owns the board together with the side to move, the en-passant
//! target and castling bookkeeping. It is a single-owner value threaded
//! explicitly through every rules call; nothing is stored in globals.
//!
//! The en-passant target and castling rights are carried as placeholder
//! state: they are set up at game start (or read from FEN) and consumed where
//! noted, but no executed move transitions them.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::RulesConfig;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub turn: Color,
    pub en_passant_target: Option<Square>,
    pub castling_rights: CastlingRights,
    pub rules: RulesConfig,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting position, White to move, full castling rights.
    #[inline]
    pub fn new_game() -> Self {
        Self::with_rules(RulesConfig::default())
    }

    #[inline]
    pub fn with_rules(rules: RulesConfig) -> Self {
        Self {
            board: Board::standard(),
            turn: Color::White,
            en_passant_target: None,
            castling_rights: CastlingRights::FULL,
            rules,
        }
    }

    /// Empty board, White to move, no castling rights.
    #[inline]
    pub fn new_empty() -> Self {
        Self {
            board: Board::empty(),
            turn: Color::White,
            en_passant_target: None,
            castling_rights: CastlingRights::NONE,
            rules: RulesConfig::default(),
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// Kind and color at `square`, for rendering.
    #[inline]
    pub fn get_piece(&self, square: Square) -> Option<PieceView> {
        self.board.get(square).map(Piece::view)
    }

    /// Hand the move to the other side.
    #[inline]
    pub fn end_turn(&mut self) {
        self.turn = self.turn.opposite();
    }
}
