//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod cues;
pub mod gate;
pub mod glider;
pub mod particles;
pub mod state;
pub mod tick;

pub use cues::{Cue, TriggerState};
pub use gate::Gate;
pub use glider::Glider;
pub use particles::{ParticleSystem, Sprite};
pub use state::{GameOverCause, GamePhase, GameState};
pub use tick::{TickInput, tick};
