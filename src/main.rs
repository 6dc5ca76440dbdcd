//! Interactive two-player text driver.
//!
//! Run with:
//! `cargo run`
//! `cargo run -- --strict`
//! `cargo run -- --fen "<FEN>"`
//!
//! Set `RUST_LOG=chess_arbiter=debug` to see validation and checkmate traces.

use std::io::{self, BufRead, Write};

use chess_arbiter::move_generation::game_flow::{play_move, GameStatus};
use chess_arbiter::move_generation::legal_move_checks::{attackers_to_square, king_square};
use chess_arbiter::utils::algebraic::{parse_coordinate, square_to_coordinate};
use chess_arbiter::utils::render_game_state::render_game_state;
use chess_arbiter::{is_in_check, GameState, RulesConfig, Square};
use tracing_subscriber::EnvFilter;

struct DriverOptions {
    rules: RulesConfig,
    fen: Option<String>,
}

fn parse_args() -> Result<DriverOptions, String> {
    let mut options = DriverOptions {
        rules: RulesConfig::default(),
        fen: None,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--strict" => options.rules = RulesConfig::STRICT,
            "--fen" => options.fen = Some(args.next().ok_or("--fen needs a FEN string")?),
            other => return Err(format!("unknown argument: {other}")),
        }
    }

    Ok(options)
}

/// Prompt until a valid coordinate is typed. `None` on EOF or `quit`.
fn read_square(input: &mut impl BufRead, prompt: &str) -> io::Result<Option<Square>> {
    let mut line = String::new();
    loop {
        print!("{prompt}");
        io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("quit") {
            return Ok(None);
        }

        match parse_coordinate(trimmed) {
            Ok(square) => return Ok(Some(square)),
            Err(err) => println!("{err}. Use a file A-H and a rank 1-8, e.g. E7."),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let options = parse_args()?;
    let mut game = match options.fen.as_deref() {
        Some(fen) => GameState::from_fen(fen)?,
        None => GameState::new_game(),
    };
    game.rules = options.rules;

    println!(
        "Game started {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();
    // Checkmate is only evaluated after a move; its trials mark pieces as moved.
    let mut status = GameStatus::AwaitingMove {
        to_move: game.turn,
        in_check: is_in_check(&game, game.turn),
    };

    loop {
        println!("\n{}\n", render_game_state(&game));

        let to_move = match status {
            GameStatus::Checkmate { winner } => {
                println!("{winner} wins!");
                return Ok(());
            }
            GameStatus::AwaitingMove { to_move, in_check } => {
                if in_check {
                    let checkers = king_square(&game, to_move)
                        .map(|king| attackers_to_square(&game.board, king, to_move.opposite()))
                        .unwrap_or_default()
                        .into_iter()
                        .map(square_to_coordinate)
                        .collect::<Vec<_>>();
                    println!("{to_move} is in check from {}.", checkers.join(", "));
                }
                to_move
            }
        };

        let prompt = format!("{to_move}'s turn. Enter start position (FileRank): ");
        let Some(start) = read_square(&mut input, &prompt)? else {
            return Ok(());
        };
        let Some(end) = read_square(&mut input, "Enter the end position (FileRank): ")? else {
            return Ok(());
        };

        match play_move(&mut game, start, end) {
            Ok(next) => status = next,
            Err(err) => println!("Invalid move: {err}. Try again."),
        }
    }
}
