//! Cooldown-gated cue dispatch policy
//!
//! Decides when each audio cue category fires. Danger and high-altitude are
//! edge-triggered with per-category cooldowns; the safe call is cooldown-only;
//! milestone is idempotent per milestone value; flap and game-over are
//! unconditional and handled at their call sites.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A discrete audio event emitted by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cue {
    Flap,
    Danger,
    Safe,
    HighAltitude,
    Milestone,
    GameOver,
}

/// Edge latches and cooldown timestamps for the throttled cue categories
///
/// All timestamps are simulation ticks, so the policy is deterministic and
/// testable without a wall clock.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriggerState {
    last_danger_tick: Option<u64>,
    last_safe_tick: Option<u64>,
    last_high_altitude_tick: Option<u64>,
    /// Shared across all gates: "some gate is close" as of the last tick
    in_danger: bool,
    /// Set while the glider is above the altitude line; the cue re-arms
    /// only after dropping back below
    above_threshold: bool,
    last_milestone: u32,
}

impl TriggerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all latches and cooldowns (on run start)
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn cooled_down(last: Option<u64>, now: u64, cooldown: u64) -> bool {
        last.is_none_or(|t| now - t >= cooldown)
    }

    /// Resolve the shared danger edge for this tick
    ///
    /// `near_any` is true when any gate is within the danger threshold ahead
    /// of the glider. Fires only on a false-to-true transition that lands
    /// outside the cooldown window.
    pub fn danger(&mut self, near_any: bool, now: u64) -> bool {
        let fire = near_any
            && !self.in_danger
            && Self::cooled_down(self.last_danger_tick, now, DANGER_COOLDOWN_TICKS);
        self.in_danger = near_any;
        if fire {
            self.last_danger_tick = Some(now);
        }
        fire
    }

    /// Close-call pass, at most once per tick, cooldown-gated
    pub fn safe(&mut self, now: u64) -> bool {
        if Self::cooled_down(self.last_safe_tick, now, SAFE_COOLDOWN_TICKS) {
            self.last_safe_tick = Some(now);
            true
        } else {
            false
        }
    }

    /// Altitude crossing, edge-triggered
    ///
    /// `above` is true while the glider is above the altitude line.
    pub fn high_altitude(&mut self, above: bool, now: u64) -> bool {
        let fire = above
            && !self.above_threshold
            && Self::cooled_down(
                self.last_high_altitude_tick,
                now,
                HIGH_ALTITUDE_COOLDOWN_TICKS,
            );
        self.above_threshold = above;
        if fire {
            self.last_high_altitude_tick = Some(now);
        }
        fire
    }

    /// Ceiling strike: bypass the edge latch, cooldown still applies
    pub fn high_altitude_forced(&mut self, now: u64) -> bool {
        if Self::cooled_down(
            self.last_high_altitude_tick,
            now,
            HIGH_ALTITUDE_COOLDOWN_TICKS,
        ) {
            self.last_high_altitude_tick = Some(now);
            true
        } else {
            false
        }
    }

    /// Score milestone, once per distinct multiple of [`MILESTONE_STEP`]
    pub fn milestone(&mut self, score: u32) -> bool {
        if score > 0 && score % MILESTONE_STEP == 0 && score != self.last_milestone {
            self.last_milestone = score;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_danger_edge_triggered() {
        let mut triggers = TriggerState::new();
        assert!(triggers.danger(true, 100));
        // Level-held condition never re-fires
        assert!(!triggers.danger(true, 101));
        assert!(!triggers.danger(true, 100 + DANGER_COOLDOWN_TICKS + 10));
    }

    #[test]
    fn test_danger_cooldown_bounds_rate() {
        let mut triggers = TriggerState::new();
        assert!(triggers.danger(true, 100));
        triggers.danger(false, 110);
        // New edge inside the cooldown window is swallowed
        assert!(!triggers.danger(true, 150));
        triggers.danger(false, 160);
        // New edge after the window fires
        assert!(triggers.danger(true, 100 + DANGER_COOLDOWN_TICKS));
    }

    #[test]
    fn test_safe_cooldown() {
        let mut triggers = TriggerState::new();
        assert!(triggers.safe(100));
        assert!(!triggers.safe(200));
        assert!(triggers.safe(100 + SAFE_COOLDOWN_TICKS));
    }

    #[test]
    fn test_high_altitude_rearms_below_line() {
        let mut triggers = TriggerState::new();
        assert!(triggers.high_altitude(true, 10));
        assert!(!triggers.high_altitude(true, 500));
        triggers.high_altitude(false, 600);
        assert!(triggers.high_altitude(true, 700));
    }

    #[test]
    fn test_high_altitude_forced_bypasses_edge() {
        let mut triggers = TriggerState::new();
        // Holding above the line consumes the edge
        assert!(triggers.high_altitude(true, 10));
        assert!(!triggers.high_altitude(true, 400));
        // Forced fire ignores the latch but not the cooldown
        assert!(!triggers.high_altitude_forced(200));
        assert!(triggers.high_altitude_forced(10 + HIGH_ALTITUDE_COOLDOWN_TICKS));
    }

    #[test]
    fn test_milestone_once_per_value() {
        let mut triggers = TriggerState::new();
        assert!(!triggers.milestone(0));
        assert!(!triggers.milestone(3));
        assert!(triggers.milestone(5));
        assert!(!triggers.milestone(5));
        assert!(triggers.milestone(10));
        assert!(!triggers.milestone(10));
    }

    #[test]
    fn test_reset_clears_latches() {
        let mut triggers = TriggerState::new();
        triggers.danger(true, 100);
        triggers.milestone(5);
        triggers.reset();
        assert!(triggers.danger(true, 101));
        assert!(triggers.milestone(5));
    }
}
