//! Game state and move resolution

use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::board::{board_cells, Direction, Hex};
use crate::lanes::lanes;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Tile value that fires the win banner
pub const GOAL_VALUE: u32 = 2048;

/// Probability that a spawned tile is a 2 (otherwise a 4)
const SPAWN_TWO_PROBABILITY: f64 = 0.9;

// ============================================================================
// CORE TYPES
// ============================================================================

/// Tile identifier, unique within one game session. Stable across moves so
/// a rendering layer can animate a tile instead of re-drawing it.
pub type TileId = u32;

/// A tile on the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub value: u32,
    pub position: Hex,
    /// Spawned this turn
    pub is_new: bool,
    /// Absorbed another tile this turn
    pub is_merged: bool,
}

/// Game status
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
    Continue,
}

/// Events driving the status state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusEvent {
    MoveResolved { reached_goal: bool, deadlocked: bool },
    ContinueRequested,
    RestartRequested,
}

impl GameStatus {
    /// Lost absorbs all further moves
    pub fn is_terminal(self) -> bool {
        self == GameStatus::Lost
    }

    /// Status state machine. Lost absorbs every event except a restart.
    /// The win banner fires once, from Playing only. A move that reaches the
    /// goal tile and deadlocks the board in the same turn reports Won; a
    /// deadlock on any later move from Won or Continue reports Lost.
    pub fn transition(self, event: StatusEvent) -> GameStatus {
        use GameStatus::*;
        match (self, event) {
            (_, StatusEvent::RestartRequested) => Playing,
            (Lost, _) => Lost,
            (Won, StatusEvent::ContinueRequested) => Continue,
            (status, StatusEvent::ContinueRequested) => status,
            (Playing, StatusEvent::MoveResolved { reached_goal: true, .. }) => Won,
            (_, StatusEvent::MoveResolved { deadlocked: true, .. }) => Lost,
            (status, StatusEvent::MoveResolved { .. }) => status,
        }
    }
}

// ============================================================================
// GAME STATE
// ============================================================================

/// Immutable game state; every transition returns a new value
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    tiles: Vec<Tile>,
    score: u32,
    best_score: u32,
    status: GameStatus,
    move_count: u32,
    next_id: TileId,
}

impl GameState {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Fresh game: two seeded tiles, everything else zeroed
    pub fn new_game<R: Rng>(rng: &mut R) -> Self {
        Self::reset(0, rng)
    }

    /// Fresh game carrying a previous best score
    pub fn reset<R: Rng>(best_score: u32, rng: &mut R) -> Self {
        let mut tiles = Vec::with_capacity(2);
        let mut next_id: TileId = 0;
        // The second spawn sees the first, so the two seeds never collide.
        for _ in 0..2 {
            if let Some(tile) = spawn_tile(&tiles, &mut next_id, rng) {
                tiles.push(tile);
            }
        }

        Self {
            tiles,
            score: 0,
            best_score,
            status: GameStatus::Playing,
            move_count: 0,
            next_id,
        }
    }

    /// Build a state from explicit tile placements. Board setup for tests
    /// and tools.
    pub fn with_tiles(placements: &[(Hex, u32)]) -> Self {
        let tiles: Vec<Tile> = placements
            .iter()
            .enumerate()
            .map(|(i, &(position, value))| Tile {
                id: i as TileId,
                value,
                position,
                is_new: false,
                is_merged: false,
            })
            .collect();
        let next_id = tiles.len() as TileId;

        Self {
            tiles,
            score: 0,
            best_score: 0,
            status: GameStatus::Playing,
            move_count: 0,
            next_id,
        }
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile_at(&self, position: Hex) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.position == position)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    // ========================================================================
    // TRANSITIONS
    // ========================================================================

    /// Apply a move, returning the next state. A direction that changes
    /// nothing returns the input state unchanged: no spawn, no score, no
    /// move count. Lost states absorb every direction.
    pub fn apply_move<R: Rng>(&self, direction: Direction, rng: &mut R) -> Self {
        if self.status == GameStatus::Lost {
            return self.clone();
        }

        let outcome = slide_tiles(&self.tiles, direction);
        if !outcome.moved {
            return self.clone();
        }

        let mut tiles = outcome.tiles;
        let mut next_id = self.next_id;
        if let Some(tile) = spawn_tile(&tiles, &mut next_id, rng) {
            tiles.push(tile);
        }

        let score = self.score + outcome.score_gained;
        let best_score = self.best_score.max(score);

        let reached_goal = tiles.iter().any(|t| t.value >= GOAL_VALUE);
        let deadlocked =
            tiles.len() == board_cells().len() && !can_make_any_move(&tiles);
        let status = self
            .status
            .transition(StatusEvent::MoveResolved { reached_goal, deadlocked });

        Self {
            tiles,
            score,
            best_score,
            status,
            move_count: self.move_count + 1,
            next_id,
        }
    }

    /// Keep playing past the win banner
    pub fn continue_game(&self) -> Self {
        let mut next = self.clone();
        next.status = self.status.transition(StatusEvent::ContinueRequested);
        next
    }

    /// Same state with the best score raised to at least `floor`. Used when
    /// reconciling a loaded state against a separately persisted best score.
    pub fn raise_best_score(&self, floor: u32) -> Self {
        let mut next = self.clone();
        next.best_score = next.best_score.max(floor);
        next
    }
}

// ============================================================================
// MOVE RESOLUTION
// ============================================================================

struct SlideOutcome {
    tiles: Vec<Tile>,
    score_gained: u32,
    moved: bool,
}

/// Slide and merge every lane toward the direction's wall. Pure rebuild:
/// input tiles are never mutated, each lane folds into a fresh tile list.
fn slide_tiles(tiles: &[Tile], direction: Direction) -> SlideOutcome {
    let by_pos: FxHashMap<Hex, Tile> = tiles.iter().map(|t| (t.position, *t)).collect();

    let mut out: Vec<Tile> = Vec::with_capacity(tiles.len());
    let mut score_gained = 0u32;
    let mut moved = false;

    for lane in lanes(direction) {
        let lane_start = out.len();
        let mut fill = 0usize;

        // Occupants arrive front-to-back; each compacts onto the farthest
        // free cell, or merges into the tile just ahead of it.
        for &cell in &lane {
            let tile = match by_pos.get(&cell) {
                Some(&t) => t,
                None => continue,
            };

            if out.len() > lane_start {
                if let Some(front) = out.last_mut() {
                    // A tile merges at most once per move.
                    if front.value == tile.value && !front.is_merged {
                        front.value *= 2;
                        front.is_merged = true;
                        score_gained += front.value;
                        moved = true;
                        continue;
                    }
                }
            }

            let dest = lane[fill];
            fill += 1;
            if dest != tile.position {
                moved = true;
            }
            out.push(Tile {
                position: dest,
                is_new: false,
                is_merged: false,
                ..tile
            });
        }
    }

    SlideOutcome {
        tiles: out,
        score_gained,
        moved,
    }
}

/// True when any direction still has an effective move. An empty cell
/// always permits one; a full board is checked by simulating the slide and
/// merge evaluation for all six directions.
pub fn can_make_any_move(tiles: &[Tile]) -> bool {
    if tiles.len() < board_cells().len() {
        return true;
    }
    Direction::ALL
        .iter()
        .any(|&direction| slide_tiles(tiles, direction).moved)
}

/// Spawn one tile on a uniformly chosen empty cell: 2 with probability 0.9,
/// else 4. A full board is a defined no-op.
fn spawn_tile<R: Rng>(tiles: &[Tile], next_id: &mut TileId, rng: &mut R) -> Option<Tile> {
    let occupied: FxHashSet<Hex> = tiles.iter().map(|t| t.position).collect();
    let empty: Vec<Hex> = board_cells()
        .iter()
        .copied()
        .filter(|cell| !occupied.contains(cell))
        .collect();

    let &position = empty.choose(rng)?;
    let value = if rng.gen_bool(SPAWN_TWO_PROBABILITY) { 2 } else { 4 };

    let id = *next_id;
    *next_id += 1;

    Some(Tile {
        id,
        value,
        position,
        is_new: true,
        is_merged: false,
    })
}

// ============================================================================
// TESTS
// ============================================================================
