//! CLI elimination game demo.
//!
//! Usage: `cargo run --example cli_elimination -- [--seed N] [PLAYER_ID...]`

use core::time::Duration;
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use elimdeck::{Game, GameObserver, Outcome, PlayerId, RoundReport};

struct ConsolePrinter;

impl GameObserver for ConsolePrinter {
    fn round_played(&mut self, report: &RoundReport) {
        println!("Round {} ({:?})", report.round, report.kind);
        for (player_id, hand) in &report.hands {
            println!("Cards for player {player_id}: {hand}");
        }
        for player_id in &report.eliminated {
            println!("Player {player_id} lost.");
        }
        println!("{}", report.state);
        println!("-------------------------------------------------------");
        thread::sleep(Duration::from_secs(1));
    }

    fn game_over(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Winner(player_id) => println!("Player {player_id} won the game."),
            Outcome::UnbreakableTie(_) => println!("Not possible to break tie. All cards used."),
        }
    }
}

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut players: Vec<PlayerId> = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--seed" {
            let Some(value) = args.next().and_then(|value| value.parse().ok()) else {
                eprintln!("--seed needs a number");
                return;
            };
            seed = value;
        } else if let Ok(player_id) = arg.parse() {
            players.push(player_id);
        } else {
            eprintln!("Not a player id: {arg}");
            return;
        }
    }

    if players.is_empty() {
        players.extend(1..=6);
    }

    let mut game = match Game::new(players, seed) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("Setup error: {err}");
            return;
        }
    };

    println!("Elimination game (seed {seed})");
    if let Err(err) = game.play(&mut ConsolePrinter) {
        eprintln!("Game error: {err}");
    }
}
