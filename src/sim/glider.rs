//! Glider physics integrator

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// The player-controlled body
///
/// Horizontal position is fixed while playing; only the vertical axis is
/// integrated. Tilt is derived from velocity each update so the renderer
/// never has to recompute it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Glider {
    pub x: f32,
    pub y: f32,
    pub velocity: f32,
    /// Body tilt in degrees, clamped to [-30, 90]
    pub tilt: f32,
}

impl Glider {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            velocity: 0.0,
            tilt: 0.0,
        }
    }

    /// Apply one tick of gravity and integrate position
    pub fn update(&mut self) {
        self.velocity += GRAVITY;

        // Limit maximum fall speed
        if self.velocity > MAX_FALL_SPEED {
            self.velocity = MAX_FALL_SPEED;
        }

        self.y += self.velocity;
        self.tilt = (self.velocity * 3.0).clamp(-30.0, 90.0);
    }

    /// Reset upward velocity
    ///
    /// No double-flap guard: flapping while already rising restarts the
    /// impulse from full strength.
    pub fn flap(&mut self) {
        self.velocity = FLAP_IMPULSE;
    }

    /// Restore spawn position with zero velocity and tilt
    pub fn reset(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
        self.velocity = 0.0;
        self.tilt = 0.0;
    }

    /// Collision radius (the body is treated as a circle)
    pub fn radius(&self) -> f32 {
        GLIDER_SIZE / 2.0
    }
}
