//! Scrolling gated barriers

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A vertically-gated barrier the glider must pass through
///
/// Spawned at the right edge, scrolls left at a constant speed until it
/// leaves the screen. `scored` latches exactly once per gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    pub id: u32,
    pub x: f32,
    pub gap_center: f32,
    pub scored: bool,
}

impl Gate {
    pub fn new(id: u32, x: f32, gap_center: f32) -> Self {
        Self {
            id,
            x,
            gap_center,
            scored: false,
        }
    }

    /// Scroll one tick to the left
    pub fn advance(&mut self) {
        self.x -= SCROLL_SPEED;
    }

    /// Circle-vs-gate collision test
    ///
    /// The glider collides when its horizontal extent overlaps the gate and
    /// its vertical extent leaves the gap band.
    pub fn collides(&self, glider_x: f32, glider_y: f32, radius: f32) -> bool {
        if glider_x + radius > self.x && glider_x - radius < self.x + GATE_WIDTH {
            let gap_top = self.gap_center - GAP_HALF_HEIGHT;
            let gap_bottom = self.gap_center + GAP_HALF_HEIGHT;

            if glider_y - radius < gap_top || glider_y + radius > gap_bottom {
                return true;
            }
        }
        false
    }

    /// True the first time the glider clears the gate's right edge
    pub fn just_passed(&self, glider_x: f32) -> bool {
        !self.scored && glider_x > self.x + GATE_WIDTH
    }

    /// Latch the scoring flag
    pub fn mark_scored(&mut self) {
        self.scored = true;
    }

    /// Pre-collision proximity alarm, distinct from the collision test:
    /// the gate's left edge is ahead of the glider and within `threshold`
    pub fn is_near(&self, glider_x: f32, threshold: f32) -> bool {
        let distance_to_left = self.x - glider_x;
        distance_to_left > 0.0 && distance_to_left < threshold
    }

    /// Fully past the left boundary, ready for removal
    pub fn is_off_screen(&self) -> bool {
        self.x + GATE_WIDTH < 0.0
    }

    /// Horizontal distance from the glider to the gate's center
    pub fn distance_to(&self, glider_x: f32) -> f32 {
        let center_x = self.x + GATE_WIDTH / 2.0;
        (glider_x - center_x).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inside_gap_no_collision() {
        // Glider at y=300 sits inside a gap centered at 290 (band 200..380)
        let gate = Gate::new(0, 120.0, 290.0);
        assert!(!gate.collides(150.0, 300.0, 15.0));
    }

    #[test]
    fn test_above_gap_collides() {
        let gate = Gate::new(0, 120.0, 290.0);
        assert!(gate.collides(150.0, 50.0, 15.0));
    }

    #[test]
    fn test_below_gap_collides() {
        let gate = Gate::new(0, 120.0, 290.0);
        assert!(gate.collides(150.0, 500.0, 15.0));
    }

    #[test]
    fn test_no_horizontal_overlap_no_collision() {
        // Gate far to the right of the glider
        let gate = Gate::new(0, 600.0, 290.0);
        assert!(!gate.collides(150.0, 50.0, 15.0));
    }

    #[test]
    fn test_passed_edge_triggers_once() {
        let mut gate = Gate::new(0, 60.0, 300.0);
        assert!(gate.just_passed(150.0));
        gate.mark_scored();
        assert!(!gate.just_passed(150.0));
    }

    #[test]
    fn test_not_passed_while_overlapping() {
        let gate = Gate::new(0, 100.0, 300.0);
        assert!(!gate.just_passed(150.0));
    }

    #[test]
    fn test_is_near_only_ahead() {
        let gate = Gate::new(0, 250.0, 300.0);
        assert!(gate.is_near(150.0, NEAR_DISTANCE));
        // Behind the glider never counts as near
        let behind = Gate::new(1, 100.0, 300.0);
        assert!(!behind.is_near(150.0, NEAR_DISTANCE));
        // Too far ahead
        let far = Gate::new(2, 350.0, 300.0);
        assert!(!far.is_near(150.0, NEAR_DISTANCE));
    }

    #[test]
    fn test_off_screen() {
        let mut gate = Gate::new(0, -GATE_WIDTH + 1.0, 300.0);
        assert!(!gate.is_off_screen());
        gate.advance();
        assert!(gate.is_off_screen());
    }

    #[test]
    fn test_distance_to_center() {
        let gate = Gate::new(0, 100.0, 300.0);
        assert_eq!(gate.distance_to(150.0), 10.0);
    }
}
