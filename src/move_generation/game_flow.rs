//! Half-move state machine.
//!
//! A game sits in `AwaitingMove` until a validated move is applied. The turn
//! then passes and the new side to move is evaluated: either the game is
//! awaiting that side's move again, or `check_checkmate` ends it. There is no
//! draw or stalemate state.

use tracing::info;

use crate::chess_errors::MoveError;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::checkmate::check_checkmate;
use crate::move_generation::legal_move_apply::{apply_move, validate_move};
use crate::move_generation::legal_move_checks::is_in_check;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    AwaitingMove { to_move: Color, in_check: bool },
    Checkmate { winner: Color },
}

impl GameStatus {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. })
    }
}

/// Validate, apply, pass the turn and evaluate the new side to move.
///
/// A rejected move leaves `game_state` untouched.
pub fn play_move(
    game_state: &mut GameState,
    start: Square,
    end: Square,
) -> Result<GameStatus, MoveError> {
    validate_move(game_state, start, end)?;
    apply_move(game_state, start, end);
    game_state.end_turn();
    Ok(evaluate_status(game_state))
}

/// Status of the side currently on turn.
pub fn evaluate_status(game_state: &mut GameState) -> GameStatus {
    let to_move = game_state.turn;

    if check_checkmate(game_state) {
        let winner = to_move.opposite();
        info!(%winner, "checkmate");
        return GameStatus::Checkmate { winner };
    }

    GameStatus::AwaitingMove {
        to_move,
        in_check: is_in_check(game_state, to_move),
    }
}

#[cfg(test)]
mod tests {
    use super::{play_move, GameStatus};
    use crate::chess_errors::MoveError;
    use crate::game_state::chess_rules::RulesConfig;
    use crate::game_state::chess_types::{Color, PieceKind, Square};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_apply::candidate_destinations;
    use crate::move_generation::legal_move_checks::is_in_check;
    use crate::utils::algebraic::parse_coordinate;
    use rand::rngs::StdRng;
    use rand::seq::IndexedRandom;
    use rand::SeedableRng;

    fn sq(coordinate: &str) -> Square {
        parse_coordinate(coordinate).expect("test coordinate should parse")
    }

    #[test]
    fn first_move_hands_the_turn_to_black() {
        let mut game = GameState::new_game();
        let status = play_move(&mut game, Square::new(6, 4), Square::new(4, 4))
            .expect("e-pawn double step should be accepted");

        assert_eq!(
            status,
            GameStatus::AwaitingMove {
                to_move: Color::Black,
                in_check: false
            }
        );
        assert_eq!(game.turn, Color::Black);
    }

    #[test]
    fn rejected_move_leaves_state_untouched() {
        let mut game = GameState::new_game();
        let before = game.clone();

        let err = play_move(&mut game, Square::new(7, 4), Square::new(5, 4))
            .expect_err("king cannot jump two rows");

        assert!(matches!(err, MoveError::IllegalDestination { .. }));
        assert_eq!(game, before);
    }

    // Rows count from Black's back rank: "F7" is row 6, column 5.
    #[test]
    fn fools_mate_ends_the_game() {
        let mut game = GameState::new_game();
        let moves = [("F7", "F6"), ("E2", "E4"), ("G7", "G5"), ("D1", "H5")];

        let mut last = None;
        for (from, to) in moves {
            last = Some(play_move(&mut game, sq(from), sq(to)).expect("scripted move"));
        }

        assert_eq!(last, Some(GameStatus::Checkmate { winner: Color::Black }));
        assert!(last.is_some_and(GameStatus::is_terminal));
        assert_eq!(game.get_piece(sq("H5")).map(|v| v.kind), Some(PieceKind::Queen));
    }

    #[test]
    fn check_is_reported_for_the_side_to_move() {
        let mut game = GameState::new_game();
        play_move(&mut game, sq("E7"), sq("E5")).expect("white pawn push");
        play_move(&mut game, sq("F2"), sq("F3")).expect("black pawn push");
        let status = play_move(&mut game, sq("D8"), sq("H4")).expect("queen sortie");

        assert_eq!(
            status,
            GameStatus::AwaitingMove {
                to_move: Color::Black,
                in_check: true
            }
        );
    }

    // Random games under strict rules never leave the mover's king attacked.
    #[test]
    fn seeded_random_games_keep_invariants() {
        for seed in 0..4u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut game = GameState::with_rules(RulesConfig::STRICT);

            for _ in 0..60 {
                let mover = game.turn;
                let candidates: Vec<(Square, Square)> = game
                    .board
                    .pieces_of(mover)
                    .flat_map(|(from, _)| {
                        candidate_destinations(&game, from)
                            .into_iter()
                            .map(move |to| (from, to))
                    })
                    .collect();

                let Some(&(from, to)) = candidates.as_slice().choose(&mut rng) else {
                    break;
                };
                let status = play_move(&mut game, from, to).expect("candidate should validate");

                assert!(!is_in_check(&game, mover));
                assert!(game.board.find_king(mover).is_some());
                if status.is_terminal() {
                    break;
                }
            }
        }
    }
}
