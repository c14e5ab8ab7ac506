//! HEX2048 Store - durable game state
//!
//! JSON file persistence under a save directory, two named slots: the full
//! game state and the best score. Newest write wins; there is no payload
//! versioning. Failures are non-fatal: a failed save is logged, a missing
//! or corrupt slot loads as absent.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use hex2048_core::GameState;

const STATE_FILE: &str = "gamestate.json";
const BEST_SCORE_FILE: &str = "bestscore.json";

/// Persistence port for game state. The engine never depends on this; the
/// front end wires a store in and treats every failure as recoverable.
pub trait StateStore {
    /// Persist the full state and the best score, best-effort
    fn save(&self, state: &GameState) -> Result<()>;

    /// Load the saved state, or None when the slot is missing or corrupt
    fn load(&self) -> Option<GameState>;

    /// Load the best score on its own; 0 when missing or corrupt
    fn load_best_score(&self) -> u32;

    /// Drop the saved state. The best score slot survives a clear, so a
    /// restart never loses the high score.
    fn clear(&self) -> Result<()>;
}

/// File-backed store: one JSON document per slot under a directory
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn state_path(&self) -> PathBuf {
        self.dir.join(STATE_FILE)
    }

    fn best_score_path(&self) -> PathBuf {
        self.dir.join(BEST_SCORE_FILE)
    }

    fn read_slot(path: &Path) -> Option<String> {
        match fs::read_to_string(path) {
            Ok(content) => Some(content),
            Err(err) if err.kind() == ErrorKind::NotFound => None,
            Err(err) => {
                warn!("failed to read {}: {}", path.display(), err);
                None
            }
        }
    }
}

impl StateStore for JsonFileStore {
    fn save(&self, state: &GameState) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating save directory {}", self.dir.display()))?;

        let content = serde_json::to_string_pretty(state)?;
        fs::write(self.state_path(), content)
            .with_context(|| format!("writing {}", self.state_path().display()))?;
        fs::write(self.best_score_path(), state.best_score().to_string())
            .with_context(|| format!("writing {}", self.best_score_path().display()))?;
        Ok(())
    }

    fn load(&self) -> Option<GameState> {
        let content = Self::read_slot(&self.state_path())?;
        let state: GameState = match serde_json::from_str(&content) {
            Ok(state) => state,
            Err(err) => {
                warn!("corrupt game state slot, treating as absent: {}", err);
                return None;
            }
        };

        // The best score slot may have been written after the last full
        // save; reconcile by taking the maximum of the two.
        Some(state.raise_best_score(self.load_best_score()))
    }

    fn load_best_score(&self) -> u32 {
        let content = match Self::read_slot(&self.best_score_path()) {
            Some(content) => content,
            None => return 0,
        };
        match content.trim().parse() {
            Ok(best) => best,
            Err(err) => {
                warn!("corrupt best score slot, defaulting to 0: {}", err);
                0
            }
        }
    }

    fn clear(&self) -> Result<()> {
        match fs::remove_file(self.state_path()) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err).with_context(|| format!("removing {}", self.state_path().display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex2048_core::Direction;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    struct TempStore {
        store: JsonFileStore,
    }

    impl TempStore {
        fn new(name: &str) -> Self {
            let dir = std::env::temp_dir()
                .join(format!("hex2048-store-{}-{}", name, std::process::id()));
            let _ = fs::remove_dir_all(&dir);
            Self {
                store: JsonFileStore::new(dir),
            }
        }
    }

    impl Drop for TempStore {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(self.store.dir());
        }
    }

    fn played_state() -> GameState {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut state = GameState::new_game(&mut rng);
        for direction in [Direction::S, Direction::N, Direction::Se, Direction::Nw] {
            state = state.apply_move(direction, &mut rng);
        }
        state
    }

    #[test]
    fn test_save_load_roundtrip() {
        let temp = TempStore::new("roundtrip");
        let state = played_state();

        temp.store.save(&state).unwrap();
        let loaded = temp.store.load().unwrap();

        assert_eq!(loaded, state);
        assert_eq!(temp.store.load_best_score(), state.best_score());
    }

    #[test]
    fn test_load_reconciles_diverged_best_score() {
        let temp = TempStore::new("reconcile");
        let state = played_state();
        temp.store.save(&state).unwrap();

        // A later best-score write that the full state never saw.
        fs::write(temp.store.best_score_path(), "9000").unwrap();

        let loaded = temp.store.load().unwrap();
        assert_eq!(loaded.best_score(), 9000);
        assert_eq!(loaded.score(), state.score());
        assert_eq!(loaded.tiles(), state.tiles());
    }

    #[test]
    fn test_missing_slots_load_as_absent() {
        let temp = TempStore::new("missing");
        assert!(temp.store.load().is_none());
        assert_eq!(temp.store.load_best_score(), 0);
    }

    #[test]
    fn test_corrupt_slots_are_non_fatal() {
        let temp = TempStore::new("corrupt");
        let state = played_state();
        temp.store.save(&state).unwrap();

        fs::write(temp.store.state_path(), "{ not json").unwrap();
        fs::write(temp.store.best_score_path(), "over nine thousand").unwrap();

        assert!(temp.store.load().is_none());
        assert_eq!(temp.store.load_best_score(), 0);
    }

    #[test]
    fn test_clear_keeps_best_score() {
        let temp = TempStore::new("clear");
        let state = played_state();
        temp.store.save(&state).unwrap();

        temp.store.clear().unwrap();

        assert!(temp.store.load().is_none());
        assert_eq!(temp.store.load_best_score(), state.best_score());

        // Clearing an already empty store is fine.
        temp.store.clear().unwrap();
    }
}
