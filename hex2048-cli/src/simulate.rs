//! Simulate command - seeded random playouts
//!
//! Plays games with uniformly random directions until they deadlock or hit
//! the move cap, then reports score statistics. Useful for sanity-checking
//! engine behavior over many games without a human in the loop.

use anyhow::Result;
use clap::Args;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use hex2048_core::{Direction, GameState, GameStatus};

#[derive(Args)]
pub struct SimulateArgs {
    /// Number of games to play
    #[arg(long, default_value = "10")]
    pub games: usize,

    /// Maximum move attempts per game
    #[arg(long, default_value = "2000")]
    pub max_moves: usize,

    /// RNG seed
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Result of a single playout
#[derive(Clone, Debug, Serialize)]
struct GameRecord {
    game_number: usize,
    score: u32,
    max_tile: u32,
    moves: u32,
    reached_goal: bool,
    deadlocked: bool,
}

#[derive(Debug, Serialize)]
struct Summary {
    games: usize,
    avg_score: f64,
    best_score: u32,
    max_tile: u32,
    deadlocked: usize,
    reached_goal: usize,
    records: Vec<GameRecord>,
}

pub fn run(args: SimulateArgs) -> Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let records: Vec<GameRecord> = (0..args.games)
        .map(|game_number| play_one(game_number, args.max_moves, &mut rng))
        .collect();
    let summary = summarize(records);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        report(&summary);
    }

    Ok(())
}

fn play_one<R: rand::Rng>(game_number: usize, max_moves: usize, rng: &mut R) -> GameRecord {
    let mut state = GameState::new_game(rng);

    for _ in 0..max_moves {
        let &direction = Direction::ALL
            .choose(rng)
            .expect("six directions to choose from");
        state = state.apply_move(direction, rng);
        if state.status() == GameStatus::Lost {
            break;
        }
    }

    let max_tile = state.tiles().iter().map(|t| t.value).max().unwrap_or(0);
    GameRecord {
        game_number,
        score: state.score(),
        max_tile,
        moves: state.move_count(),
        reached_goal: max_tile >= hex2048_core::GOAL_VALUE,
        deadlocked: state.status() == GameStatus::Lost,
    }
}

fn summarize(records: Vec<GameRecord>) -> Summary {
    let games = records.len();
    let total: u64 = records.iter().map(|r| r.score as u64).sum();
    Summary {
        games,
        avg_score: if games == 0 { 0.0 } else { total as f64 / games as f64 },
        best_score: records.iter().map(|r| r.score).max().unwrap_or(0),
        max_tile: records.iter().map(|r| r.max_tile).max().unwrap_or(0),
        deadlocked: records.iter().filter(|r| r.deadlocked).count(),
        reached_goal: records.iter().filter(|r| r.reached_goal).count(),
        records,
    }
}

fn report(summary: &Summary) {
    println!("Simulated {} games", summary.games);
    println!("  avg score:    {:.1}", summary.avg_score);
    println!("  best score:   {}", summary.best_score);
    println!("  max tile:     {}", summary.max_tile);
    println!("  deadlocked:   {}", summary.deadlocked);
    println!("  reached 2048: {}", summary.reached_goal);
    for record in &summary.records {
        println!(
            "  game {:>2}: score {:>6}  max tile {:>5}  moves {:>4}{}",
            record.game_number,
            record.score,
            record.max_tile,
            record.moves,
            if record.deadlocked { "  (deadlocked)" } else { "" }
        );
    }
}
