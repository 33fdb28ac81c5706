//! Burst-spawned feedback particles

use std::ops::Range;

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Downward acceleration applied to every particle each tick
const PARTICLE_GRAVITY: f32 = 0.2;

/// Draw radius for particle sprites
pub const PARTICLE_RADIUS: f32 = 3.0;

/// Flap burst tuning
const FLAP_BURST_COUNT: usize = 8;
const FLAP_BURST_SPEED: Range<f32> = 1.0..4.0;
const FLAP_BURST_LIFE: u32 = 30;

/// Explosion burst tuning
const EXPLOSION_BURST_COUNT: usize = 20;
const EXPLOSION_BURST_SPEED: Range<f32> = 2.0..7.0;
const EXPLOSION_BURST_LIFE: u32 = 50;

/// Inclusive per-channel color bounds for a burst; each particle draws its
/// channels independently
#[derive(Debug, Clone, Copy)]
pub struct ColorRange {
    pub r: (u8, u8),
    pub g: (u8, u8),
    pub b: (u8, u8),
}

/// Warm white-gold sparks for flaps
const FLAP_COLORS: ColorRange = ColorRange {
    r: (200, 254),
    g: (200, 254),
    b: (100, 254),
};

/// Red-dominant debris for the crash burst
const EXPLOSION_COLORS: ColorRange = ColorRange {
    r: (200, 254),
    g: (0, 99),
    b: (0, 99),
};

/// A single feedback particle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: [u8; 3],
    pub life: u32,
    pub max_life: u32,
}

/// A particle as the renderer sees it
#[derive(Debug, Clone, Copy)]
pub struct Sprite {
    pub pos: Vec2,
    pub color: [u8; 3],
    /// Fade from 1.0 at spawn to 0.0 at death
    pub alpha: f32,
}

/// Ephemeral visual feedback, spawned in bursts and decayed each tick
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn `count` particles with velocity angles uniform in [0, 2pi) and
    /// speeds uniform in `speed`
    pub fn spawn_burst(
        &mut self,
        pos: Vec2,
        count: usize,
        speed: Range<f32>,
        life: u32,
        colors: ColorRange,
        rng: &mut Pcg32,
    ) {
        for _ in 0..count {
            let angle = rng.random_range(0.0..std::f32::consts::TAU);
            let magnitude = rng.random_range(speed.clone());
            let vel = Vec2::new(angle.cos(), angle.sin()) * magnitude;

            let color = [
                rng.random_range(colors.r.0..=colors.r.1),
                rng.random_range(colors.g.0..=colors.g.1),
                rng.random_range(colors.b.0..=colors.b.1),
            ];

            self.particles.push(Particle {
                pos,
                vel,
                color,
                life,
                max_life: life,
            });
        }
    }

    /// Warm sparks kicked out on each flap
    pub fn spawn_flap_burst(&mut self, pos: Vec2, rng: &mut Pcg32) {
        self.spawn_burst(
            pos,
            FLAP_BURST_COUNT,
            FLAP_BURST_SPEED,
            FLAP_BURST_LIFE,
            FLAP_COLORS,
            rng,
        );
    }

    /// Crash debris at the point of death
    pub fn spawn_explosion_burst(&mut self, pos: Vec2, rng: &mut Pcg32) {
        self.spawn_burst(
            pos,
            EXPLOSION_BURST_COUNT,
            EXPLOSION_BURST_SPEED,
            EXPLOSION_BURST_LIFE,
            EXPLOSION_COLORS,
            rng,
        );
    }

    /// Integrate positions, apply gravity, decay life, drop dead particles
    pub fn advance(&mut self) {
        for p in &mut self.particles {
            p.pos += p.vel;
            p.vel.y += PARTICLE_GRAVITY;
            p.life -= 1;
        }
        self.particles.retain(|p| p.life > 0);
    }

    /// Live particle sprites for the renderer
    pub fn sprites(&self) -> impl Iterator<Item = Sprite> + '_ {
        self.particles.iter().map(|p| Sprite {
            pos: p.pos,
            color: p.color,
            alpha: p.life as f32 / p.max_life as f32,
        })
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(12345)
    }

    #[test]
    fn test_flap_burst_count_and_colors() {
        let mut system = ParticleSystem::new();
        system.spawn_flap_burst(Vec2::new(150.0, 300.0), &mut rng());
        assert_eq!(system.len(), 8);

        for sprite in system.sprites() {
            assert!(sprite.color[0] >= 200);
            assert!(sprite.color[1] >= 200);
            assert!(sprite.color[2] >= 100);
            assert_eq!(sprite.alpha, 1.0);
        }
    }

    #[test]
    fn test_explosion_burst_red_dominant() {
        let mut system = ParticleSystem::new();
        system.spawn_explosion_burst(Vec2::ZERO, &mut rng());
        assert_eq!(system.len(), 20);

        for sprite in system.sprites() {
            assert!(sprite.color[0] >= 200);
            assert!(sprite.color[1] < 100);
            assert!(sprite.color[2] < 100);
        }
    }

    #[test]
    fn test_gravity_pulls_down() {
        let mut system = ParticleSystem::new();
        let mut rng = rng();
        system.spawn_burst(Vec2::ZERO, 1, 0.0..0.001, 10, FLAP_COLORS, &mut rng);
        let vy_before = system.particles[0].vel.y;
        system.advance();
        assert!((system.particles[0].vel.y - vy_before - PARTICLE_GRAVITY).abs() < 1e-6);
    }

    #[test]
    fn test_life_decays_to_removal() {
        let mut system = ParticleSystem::new();
        system.spawn_flap_burst(Vec2::ZERO, &mut rng());
        for _ in 0..FLAP_BURST_LIFE - 1 {
            system.advance();
        }
        assert_eq!(system.len(), 8);
        system.advance();
        assert!(system.is_empty());
    }

    #[test]
    fn test_alpha_fades_with_life() {
        let mut system = ParticleSystem::new();
        system.spawn_flap_burst(Vec2::ZERO, &mut rng());
        for _ in 0..15 {
            system.advance();
        }
        let sprite = system.sprites().next().unwrap();
        assert_eq!(sprite.alpha, 15.0 / 30.0);
    }

    #[test]
    fn test_seeded_bursts_are_deterministic() {
        let mut a = ParticleSystem::new();
        let mut b = ParticleSystem::new();
        a.spawn_explosion_burst(Vec2::new(10.0, 20.0), &mut rng());
        b.spawn_explosion_burst(Vec2::new(10.0, 20.0), &mut rng());
        assert_eq!(a, b);
    }
}
