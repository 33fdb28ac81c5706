//! Gapwing - a one-button gap-running arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, gates, cue policy, game state)
//! - `audio`: Cue routing, switchable clip banks, playback sink seam
//! - `avatar`: Custom face images for the glider
//! - `render`: Read-only scene view consumed by a renderer
//! - `ui`: Input event routing and the settings overlay

pub mod audio;
pub mod avatar;
pub mod render;
pub mod settings;
pub mod sim;
pub mod ui;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz - the rate the per-tick tuning assumes)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;
    pub const GROUND_HEIGHT: f32 = 50.0;

    /// Gravity applied to the glider each tick
    pub const GRAVITY: f32 = 0.5;
    /// Upward velocity set by a flap
    pub const FLAP_IMPULSE: f32 = -10.0;
    /// Terminal fall speed
    pub const MAX_FALL_SPEED: f32 = 10.0;
    /// Body diameter; collision geometry is a circle of half this
    pub const GLIDER_SIZE: f32 = 30.0;
    /// Horizontal position, fixed while playing
    pub const GLIDER_X: f32 = 150.0;

    /// Gate geometry
    pub const GATE_WIDTH: f32 = 80.0;
    pub const GAP_HALF_HEIGHT: f32 = 90.0;
    /// Horizontal scroll per tick
    pub const SCROLL_SPEED: f32 = 3.0;
    /// One gate every 2 seconds
    pub const GATE_SPAWN_TICKS: u64 = 2 * 60;
    /// Gap centers are drawn uniformly from this band
    pub const GAP_CENTER_MIN: f32 = 200.0;
    pub const GAP_CENTER_MAX: f32 = CANVAS_HEIGHT - GROUND_HEIGHT - 100.0;

    /// A gate closer than this (ahead of the glider) counts as dangerous
    pub const NEAR_DISTANCE: f32 = 150.0;
    /// A pass within this distance of the gate counts as a close call
    pub const SAFE_DISTANCE: f32 = 150.0;
    /// Altitude line for the high-flying cue, measured from the top
    pub const HIGH_ALTITUDE_Y: f32 = 100.0;

    /// Cue cooldowns (ticks at 60 Hz)
    pub const DANGER_COOLDOWN_TICKS: u64 = 2 * 60;
    pub const SAFE_COOLDOWN_TICKS: u64 = 3 * 60;
    pub const HIGH_ALTITUDE_COOLDOWN_TICKS: u64 = 5 * 60;

    /// Milestone cue fires at every multiple of this score
    pub const MILESTONE_STEP: u32 = 5;
}
