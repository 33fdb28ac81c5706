//! Game state and the Menu/Playing/GameOver machine

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::cues::{Cue, TriggerState};
use super::gate::Gate;
use super::glider::Glider;
use super::particles::ParticleSystem;
use crate::consts::*;

/// Salt mixed into the per-burst RNG seed so two bursts on the same tick
/// decorrelate
pub(super) const FLAP_BURST_SALT: u64 = 1;
const EXPLOSION_BURST_SALT: u64 = 2;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the first primary action
    Menu,
    /// Active gameplay
    Playing,
    /// Run ended; glider and gates are frozen
    GameOver,
}

/// What ended the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverCause {
    Gate,
    Ground,
    /// Ceiling deaths keep the altitude stinger as their only cue
    Ceiling,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter; advances only while playing
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    pub score: u32,
    /// Best score seen this process; survives restarts
    pub high_score: u32,
    pub glider: Glider,
    /// Active gates in spawn order (= screen order)
    pub gates: Vec<Gate>,
    pub particles: ParticleSystem,
    /// Cue edge latches and cooldowns
    pub triggers: TriggerState,
    /// Tick of the most recent gate spawn
    pub last_spawn_tick: u64,
    /// Cues emitted this tick, drained by the driver
    #[serde(skip)]
    pub cues: Vec<Cue>,
    next_id: u32,
}

impl GameState {
    /// Create a fresh state on the title screen
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            time_ticks: 0,
            phase: GamePhase::Menu,
            score: 0,
            high_score: 0,
            glider: Glider::new(GLIDER_X, CANVAS_HEIGHT / 2.0),
            gates: Vec::new(),
            particles: ParticleSystem::new(),
            triggers: TriggerState::new(),
            last_spawn_tick: 0,
            cues: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new gate ID
    pub fn next_gate_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Take this tick's cue events for dispatch
    pub fn drain_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.cues)
    }

    /// Enter Playing, resetting the run
    pub fn start_run(&mut self) {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.gates.clear();
        self.particles.clear();
        self.glider.reset(GLIDER_X, CANVAS_HEIGHT / 2.0);
        self.triggers.reset();
        self.last_spawn_tick = self.time_ticks;
        log::info!("run started (seed {})", self.seed);
    }

    /// Enter GameOver
    ///
    /// Idempotent: a second collision source on the same tick is a no-op, so
    /// one run produces exactly one explosion burst and at most one cue.
    pub fn end_run(&mut self, cause: GameOverCause) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;

        let pos = Vec2::new(self.glider.x, self.glider.y);
        let mut rng = self.burst_rng(EXPLOSION_BURST_SALT);
        self.particles.spawn_explosion_burst(pos, &mut rng);

        if cause != GameOverCause::Ceiling {
            self.cues.push(Cue::GameOver);
        }
        log::info!("run over ({:?}), score {}", cause, self.score);
    }

    /// Per-event RNG derived from the run seed and the current tick, the
    /// same way gate gaps derive theirs from the gate ID
    pub(super) fn burst_rng(&self, salt: u64) -> Pcg32 {
        let burst_seed = self
            .time_ticks
            .wrapping_mul(2654435761)
            .wrapping_add(self.seed)
            .wrapping_add(salt);
        Pcg32::seed_from_u64(burst_seed)
    }
}
