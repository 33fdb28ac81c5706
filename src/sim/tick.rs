//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation deterministically. Ordering
//! inside [`tick`] matters: flap, integrate, particles, altitude edge,
//! spawn, gate scan, compaction, danger/safe resolution, boundaries.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::cues::Cue;
use super::gate::Gate;
use super::state::{FLAP_BURST_SALT, GameOverCause, GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Flap / start / restart, already routed by the UI layer
    pub primary: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.phase {
        GamePhase::Menu | GamePhase::GameOver => {
            // Keep the crash burst animating behind the overlay text
            state.particles.advance();
            if input.primary {
                state.start_run();
            }
            return;
        }
        GamePhase::Playing => {}
    }

    state.time_ticks += 1;
    let now = state.time_ticks;

    // Flap before integrating so the impulse lands this tick
    if input.primary {
        state.glider.flap();
        let pos = Vec2::new(state.glider.x, state.glider.y);
        let mut rng = state.burst_rng(FLAP_BURST_SALT);
        state.particles.spawn_flap_burst(pos, &mut rng);
        state.cues.push(Cue::Flap);
    }

    state.glider.update();
    state.particles.advance();

    // Altitude edge; re-arms once the glider drops back below the line
    let above = state.glider.y < HIGH_ALTITUDE_Y;
    if state.triggers.high_altitude(above, now) {
        state.cues.push(Cue::HighAltitude);
    }

    if now - state.last_spawn_tick >= GATE_SPAWN_TICKS {
        spawn_gate(state);
    }

    let glider_x = state.glider.x;
    let glider_y = state.glider.y;
    let radius = state.glider.radius();

    let mut collided = false;
    let mut near_any = false;
    let mut safe_pass = false;

    for gate in &mut state.gates {
        gate.advance();

        // No short-circuit on collision: proximity, scoring, and removal
        // for the remaining gates still resolve this tick
        if gate.collides(glider_x, glider_y, radius) {
            collided = true;
        }

        if gate.is_near(glider_x, NEAR_DISTANCE) {
            near_any = true;
        }

        if gate.just_passed(glider_x) {
            gate.mark_scored();
            state.score += 1;
            if state.score > state.high_score {
                state.high_score = state.score;
            }
            if gate.distance_to(glider_x) < SAFE_DISTANCE {
                safe_pass = true;
            }
            // Evaluated at the scoring site so the cue lands on the exact
            // tick the score reaches the milestone
            if state.triggers.milestone(state.score) {
                state.cues.push(Cue::Milestone);
            }
        }
    }

    if collided {
        state.end_run(GameOverCause::Gate);
    }

    // Advance-all then compact; no removal during the scan
    state.gates.retain(|g| !g.is_off_screen());

    // One shared danger edge across all gates, resolved once per tick
    if state.triggers.danger(near_any, now) {
        state.cues.push(Cue::Danger);
    }
    if safe_pass && state.triggers.safe(now) {
        state.cues.push(Cue::Safe);
    }

    if state.phase == GamePhase::Playing {
        if glider_y - radius < 0.0 {
            // Ceiling death: the altitude stinger plays instead of the
            // generic game-over cue
            if state.triggers.high_altitude_forced(now) {
                state.cues.push(Cue::HighAltitude);
            }
            state.end_run(GameOverCause::Ceiling);
        } else if glider_y + radius > CANVAS_HEIGHT - GROUND_HEIGHT {
            state.end_run(GameOverCause::Ground);
        }
    }
}

/// Spawn one gate at the right edge with a seed-derived gap center
fn spawn_gate(state: &mut GameState) {
    let id = state.next_gate_id();

    // Deterministic gap placement: per-gate seed derived from the gate ID
    // and the run seed
    let gate_seed = (id as u64)
        .wrapping_mul(2654435761)
        .wrapping_add(state.seed);
    let mut rng = Pcg32::seed_from_u64(gate_seed);
    let gap_center = rng.random_range(GAP_CENTER_MIN..GAP_CENTER_MAX);

    state.gates.push(Gate::new(id, CANVAS_WIDTH, gap_center));
    state.last_spawn_tick = state.time_ticks;
    log::debug!("gate {} spawned, gap center {:.1}", id, gap_center);
}
