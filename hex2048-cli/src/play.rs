//! Play command - interactive game in the terminal
//!
//! Reads one token per line: a direction (n, ne, se, s, sw, nw), `new`,
//! `continue`, or `quit`. The saved game is restored on startup and
//! written back after every accepted action.

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use hex2048_core::{Direction, GameState};
use hex2048_store::{JsonFileStore, StateStore};

use crate::input::{InputGate, MOVE_INTERVAL};
use crate::render;

#[derive(Args)]
pub struct PlayArgs {
    /// Save directory
    #[arg(long, default_value = ".hex2048")]
    pub save_dir: PathBuf,

    /// RNG seed for a reproducible game
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: PlayArgs) -> Result<()> {
    let store = JsonFileStore::new(&args.save_dir);
    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let mut state = match store.load() {
        Some(saved) => saved,
        None => GameState::new_game(&mut rng).raise_best_score(store.load_best_score()),
    };
    save(&store, &state);

    let mut gate = InputGate::new(MOVE_INTERVAL);

    println!("hex2048 - directions: n ne se s sw nw | new | continue | quit");
    show(&state);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let token = line.trim();

        match token {
            "" => continue,
            "q" | "quit" => break,
            "new" => {
                state = GameState::reset(state.best_score(), &mut rng);
                save(&store, &state);
            }
            "c" | "continue" => {
                state = state.continue_game();
                save(&store, &state);
            }
            token => match token.parse::<Direction>() {
                Ok(direction) => {
                    if !gate.admit(state.status(), Instant::now()) {
                        debug!("gate dropped move {}", direction.as_str());
                        continue;
                    }
                    let next = state.apply_move(direction, &mut rng);
                    if next == state {
                        debug!("direction {} changed nothing", direction.as_str());
                    }
                    state = next;
                    save(&store, &state);
                }
                Err(err) => {
                    // Unrecognized tokens never reach the engine.
                    debug!("{}", err);
                    continue;
                }
            },
        }

        show(&state);
    }

    Ok(())
}

fn show(state: &GameState) {
    println!("{}", render::render_board(state));
    println!("{}", render::scoreboard(state));
}

fn save(store: &JsonFileStore, state: &GameState) {
    if let Err(err) = store.save(state) {
        warn!("save failed: {:#}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex2048_core::GameStatus;

    #[test]
    fn test_fresh_game_carries_stored_best_score() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let state = GameState::new_game(&mut rng).raise_best_score(750);
        assert_eq!(state.best_score(), 750);
        assert_eq!(state.score(), 0);
        assert_eq!(state.status(), GameStatus::Playing);
    }
}
