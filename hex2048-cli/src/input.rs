//! Input boundary: throttling for direction commands
//!
//! Token recognition lives in the core `Direction` parser; anything it
//! rejects is dropped before reaching the engine.

use std::time::{Duration, Instant};

use hex2048_core::GameStatus;

/// Minimum interval between accepted moves
pub const MOVE_INTERVAL: Duration = Duration::from_millis(150);

/// Throttles direction commands and drops them entirely once the game is
/// lost
pub struct InputGate {
    min_interval: Duration,
    last_accepted: Option<Instant>,
}

impl InputGate {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_accepted: None,
        }
    }

    /// Decide whether a direction command observed at `now` may reach the
    /// engine, recording the timestamp when it is accepted
    pub fn admit(&mut self, status: GameStatus, now: Instant) -> bool {
        if status.is_terminal() {
            return false;
        }

        if let Some(last) = self.last_accepted {
            if now.duration_since(last) < self.min_interval {
                return false;
            }
        }

        self.last_accepted = Some(now);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_throttles_rapid_moves() {
        let mut gate = InputGate::new(MOVE_INTERVAL);
        let start = Instant::now();

        assert!(gate.admit(GameStatus::Playing, start));
        assert!(!gate.admit(GameStatus::Playing, start + Duration::from_millis(50)));
        assert!(!gate.admit(GameStatus::Playing, start + Duration::from_millis(149)));
        assert!(gate.admit(GameStatus::Playing, start + Duration::from_millis(150)));
        assert!(!gate.admit(GameStatus::Playing, start + Duration::from_millis(250)));
    }

    #[test]
    fn test_gate_blocks_lost_games() {
        let mut gate = InputGate::new(MOVE_INTERVAL);
        let start = Instant::now();

        assert!(!gate.admit(GameStatus::Lost, start));
        // A rejected gesture leaves the throttle window untouched.
        assert!(gate.admit(GameStatus::Playing, start + Duration::from_millis(1)));
    }

    #[test]
    fn test_gate_admits_won_and_continue() {
        let mut gate = InputGate::new(MOVE_INTERVAL);
        let start = Instant::now();

        assert!(gate.admit(GameStatus::Won, start));
        assert!(gate.admit(GameStatus::Continue, start + Duration::from_secs(1)));
    }
}
