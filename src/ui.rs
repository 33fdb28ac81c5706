//! Input event routing and the settings overlay
//!
//! Discrete input events arrive from the host; this module routes them to
//! the overlay, the avatar set, and the sound banks, and reports whether
//! the simulation should see a primary action this tick. The overlay holds
//! layout geometry only; drawing is the renderer's job.

use crate::audio::{CueRouter, CueSink};
use crate::avatar::AvatarSet;
use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// Discrete input events delivered by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Flap / start / restart
    PrimaryAction,
    ToggleSettings,
    CycleAvatar,
    CycleDangerSound,
    CycleSafeSound,
    CycleGameOverSound,
    CloseOverlay,
    /// Pointer click in canvas coordinates
    Click { x: f32, y: f32 },
}

/// Overlay panel dimensions
pub const PANEL_WIDTH: f32 = 600.0;
pub const PANEL_HEIGHT: f32 = 450.0;
/// Avatar grid cells
pub const BUTTON_SIZE: f32 = 80.0;
pub const BUTTON_SPACING: f32 = 20.0;
/// Avatars per grid row
pub const GRID_COLUMNS: usize = 5;
/// Vertical offset of the grid's first row inside the panel
const GRID_TOP_OFFSET: f32 = 125.0;
/// Horizontal inset of the grid inside the panel
const GRID_LEFT_INSET: f32 = 30.0;
/// Extra vertical room under each row for the name label
const ROW_LABEL_GAP: f32 = 20.0;

/// Settings overlay state and click geometry
#[derive(Debug, Clone, Copy, Default)]
pub struct SettingsOverlay {
    open: bool,
}

impl SettingsOverlay {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Map a click to the avatar cell it lands on, if any
    ///
    /// The grid is laid out left to right, [`GRID_COLUMNS`] per row, inside
    /// the centered panel.
    pub fn avatar_at(&self, x: f32, y: f32, count: usize) -> Option<usize> {
        let panel_x = (CANVAS_WIDTH - PANEL_WIDTH) / 2.0;
        let panel_y = (CANVAS_HEIGHT - PANEL_HEIGHT) / 2.0;
        let start_x = panel_x + GRID_LEFT_INSET;
        let start_y = panel_y + GRID_TOP_OFFSET;

        let cell_stride = BUTTON_SIZE + BUTTON_SPACING;
        let row_stride = BUTTON_SIZE + BUTTON_SPACING + ROW_LABEL_GAP;

        for i in 0..count {
            let col = i % GRID_COLUMNS;
            let row = i / GRID_COLUMNS;
            let cell_x = start_x + col as f32 * cell_stride;
            let cell_y = start_y + row as f32 * row_stride;

            if x >= cell_x
                && x <= cell_x + BUTTON_SIZE
                && y >= cell_y
                && y <= cell_y + BUTTON_SIZE
            {
                return Some(i);
            }
        }
        None
    }
}

/// Route one input event
///
/// Returns true when the simulation should see a primary action this tick.
/// Clicks are offered to an open overlay first; with the overlay closed
/// they act as a primary action.
pub fn route_event(
    event: InputEvent,
    overlay: &mut SettingsOverlay,
    avatars: &mut AvatarSet,
    cues: &mut CueRouter,
    sink: &mut dyn CueSink,
) -> bool {
    match event {
        InputEvent::PrimaryAction => true,
        InputEvent::ToggleSettings => {
            overlay.toggle();
            false
        }
        InputEvent::CloseOverlay => {
            overlay.close();
            false
        }
        InputEvent::CycleAvatar => {
            avatars.cycle();
            false
        }
        InputEvent::CycleDangerSound => {
            cues.cycle_danger(sink);
            false
        }
        InputEvent::CycleSafeSound => {
            cues.cycle_safe(sink);
            false
        }
        InputEvent::CycleGameOverSound => {
            cues.cycle_game_over();
            false
        }
        InputEvent::Click { x, y } => {
            if overlay.is_open() {
                if let Some(index) = overlay.avatar_at(x, y, avatars.len()) {
                    avatars.select(index);
                }
                false
            } else {
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::NullSink;
    use crate::avatar::ImageHandle;

    fn fixtures() -> (SettingsOverlay, AvatarSet, CueRouter, NullSink) {
        let mut avatars = AvatarSet::new();
        for i in 0..7 {
            avatars.register(ImageHandle(i), format!("face{}", i));
        }
        (
            SettingsOverlay::default(),
            avatars,
            CueRouter::new(),
            NullSink::default(),
        )
    }

    #[test]
    fn test_grid_hit_first_cell() {
        let overlay = SettingsOverlay::default();
        // Panel at (100, 75); grid starts at (130, 200)
        assert_eq!(overlay.avatar_at(135.0, 205.0, 7), Some(0));
        assert_eq!(overlay.avatar_at(50.0, 50.0, 7), None);
    }

    #[test]
    fn test_grid_hit_wraps_rows() {
        let overlay = SettingsOverlay::default();
        // Cell 5 starts the second row: x back at 130, y down by 120
        assert_eq!(overlay.avatar_at(135.0, 325.0, 7), Some(5));
        assert_eq!(overlay.avatar_at(235.0, 325.0, 7), Some(6));
        // Count limits hit-testing to registered avatars
        assert_eq!(overlay.avatar_at(235.0, 325.0, 6), None);
    }

    #[test]
    fn test_click_selects_avatar_when_open() {
        let (mut overlay, mut avatars, mut cues, mut sink) = fixtures();
        overlay.open();

        let primary = route_event(
            InputEvent::Click { x: 235.0, y: 325.0 },
            &mut overlay,
            &mut avatars,
            &mut cues,
            &mut sink,
        );
        assert!(!primary);
        assert_eq!(avatars.current_index(), 6);
    }

    #[test]
    fn test_click_outside_grid_consumed_while_open() {
        let (mut overlay, mut avatars, mut cues, mut sink) = fixtures();
        overlay.open();

        let primary = route_event(
            InputEvent::Click { x: 10.0, y: 10.0 },
            &mut overlay,
            &mut avatars,
            &mut cues,
            &mut sink,
        );
        assert!(!primary);
        assert_eq!(avatars.current_index(), 0);
    }

    #[test]
    fn test_click_is_primary_when_closed() {
        let (mut overlay, mut avatars, mut cues, mut sink) = fixtures();
        let primary = route_event(
            InputEvent::Click { x: 400.0, y: 300.0 },
            &mut overlay,
            &mut avatars,
            &mut cues,
            &mut sink,
        );
        assert!(primary);
    }

    #[test]
    fn test_toggle_and_close() {
        let (mut overlay, mut avatars, mut cues, mut sink) = fixtures();
        route_event(
            InputEvent::ToggleSettings,
            &mut overlay,
            &mut avatars,
            &mut cues,
            &mut sink,
        );
        assert!(overlay.is_open());
        route_event(
            InputEvent::CloseOverlay,
            &mut overlay,
            &mut avatars,
            &mut cues,
            &mut sink,
        );
        assert!(!overlay.is_open());
    }

    #[test]
    fn test_cycle_avatar_event() {
        let (mut overlay, mut avatars, mut cues, mut sink) = fixtures();
        route_event(
            InputEvent::CycleAvatar,
            &mut overlay,
            &mut avatars,
            &mut cues,
            &mut sink,
        );
        assert_eq!(avatars.current_index(), 1);
    }
}
