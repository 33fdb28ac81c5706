//! Read-only scene view handed to the renderer
//!
//! The core never draws. Once per frame the driver captures a [`Scene`]
//! from the simulation and hands it to whatever [`Renderer`] is wired up.

use crate::avatar::Face;
use crate::sim::{GamePhase, GameState, Gate, ParticleSystem, Sprite};

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub glider_x: f32,
    pub glider_y: f32,
    /// Body tilt in degrees
    pub glider_tilt: f32,
    pub glider_radius: f32,
    pub face: Face,
    /// Gates in spawn order (= screen order, left to right)
    pub gates: &'a [Gate],
    particles: &'a ParticleSystem,
    pub score: u32,
    pub high_score: u32,
    pub phase: GamePhase,
    pub overlay_open: bool,
}

impl<'a> Scene<'a> {
    /// Snapshot the simulation for this frame
    pub fn capture(state: &'a GameState, face: Face, overlay_open: bool) -> Self {
        Self {
            glider_x: state.glider.x,
            glider_y: state.glider.y,
            glider_tilt: state.glider.tilt,
            glider_radius: state.glider.radius(),
            face,
            gates: &state.gates,
            particles: &state.particles,
            score: state.score,
            high_score: state.high_score,
            phase: state.phase,
            overlay_open,
        }
    }

    /// Live particle sprites in draw order
    pub fn sprites(&self) -> impl Iterator<Item = Sprite> + 'a {
        self.particles.sprites()
    }
}

/// Drawing seam; implementations consume the scene without mutating it
pub trait Renderer {
    fn draw(&mut self, scene: &Scene<'_>);
}
