//! Cue routing and the playback seam
//!
//! The simulation emits [`Cue`] values into a per-tick buffer; the driver
//! drains them through a [`CueRouter`], which maps each category to a
//! host-registered clip and forwards it to a [`CueSink`]. The router owns
//! the switchable variant banks the settings overlay cycles through.

use crate::sim::Cue;

/// Opaque handle to a host-registered audio clip
///
/// The core never sees file paths or decoded audio; hosts mint handles
/// after loading whatever clips they have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClipHandle(pub u32);

/// Playback seam
///
/// Implementations must not block: `play` enqueues or starts playback and
/// returns immediately. Retriggering a clip restarts it from the beginning
/// (stop, seek to zero, play), cancelling any in-flight playback.
pub trait CueSink {
    fn play(&mut self, clip: ClipHandle);
}

/// Sink that swallows every cue, for hosts with no audio backend
#[derive(Debug, Default)]
pub struct NullSink {
    warned: bool,
}

impl CueSink for NullSink {
    fn play(&mut self, _clip: ClipHandle) {
        if !self.warned {
            log::warn!("no audio backend, cues will be silent");
            self.warned = true;
        }
    }
}

/// A switchable bank of clip variants for one cue category
#[derive(Debug, Clone, Default)]
pub struct ClipBank {
    clips: Vec<ClipHandle>,
    current: usize,
}

impl ClipBank {
    pub fn register(&mut self, clip: ClipHandle) {
        self.clips.push(clip);
    }

    /// The active variant, if any clips are registered
    pub fn current(&self) -> Option<ClipHandle> {
        self.clips.get(self.current).copied()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Advance to the next variant, wrapping. No-op on an empty bank.
    pub fn cycle(&mut self) -> Option<ClipHandle> {
        if self.clips.is_empty() {
            return None;
        }
        self.current = (self.current + 1) % self.clips.len();
        self.current()
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}

/// Maps cue categories to clips, with switchable variants for the
/// danger, safe, and game-over categories
pub struct CueRouter {
    danger: ClipBank,
    safe: ClipBank,
    game_over: ClipBank,
    flap: Option<ClipHandle>,
    high_altitude: Option<ClipHandle>,
    milestone: Option<ClipHandle>,
    enabled: bool,
    missing_warned: [bool; 6],
}

impl Default for CueRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl CueRouter {
    pub fn new() -> Self {
        Self {
            danger: ClipBank::default(),
            safe: ClipBank::default(),
            game_over: ClipBank::default(),
            flap: None,
            high_altitude: None,
            milestone: None,
            enabled: true,
            missing_warned: [false; 6],
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn register_danger(&mut self, clip: ClipHandle) {
        self.danger.register(clip);
    }

    pub fn register_safe(&mut self, clip: ClipHandle) {
        self.safe.register(clip);
    }

    pub fn register_game_over(&mut self, clip: ClipHandle) {
        self.game_over.register(clip);
    }

    pub fn register_flap(&mut self, clip: ClipHandle) {
        self.flap = Some(clip);
    }

    pub fn register_high_altitude(&mut self, clip: ClipHandle) {
        self.high_altitude = Some(clip);
    }

    pub fn register_milestone(&mut self, clip: ClipHandle) {
        self.milestone = Some(clip);
    }

    /// Dispatch one cue through the sink
    ///
    /// Categories with no registered clip degrade to silence, reported once.
    pub fn dispatch(&mut self, cue: Cue, sink: &mut dyn CueSink) {
        if !self.enabled {
            return;
        }

        let clip = match cue {
            Cue::Flap => self.flap,
            Cue::Danger => self.danger.current(),
            Cue::Safe => self.safe.current(),
            Cue::HighAltitude => self.high_altitude,
            Cue::Milestone => self.milestone,
            Cue::GameOver => self.game_over.current(),
        };

        match clip {
            Some(clip) => sink.play(clip),
            None => {
                let slot = cue as usize;
                if !self.missing_warned[slot] {
                    log::warn!("no clip registered for {:?} cue", cue);
                    self.missing_warned[slot] = true;
                }
            }
        }
    }

    /// Cycle the danger variant and preview it
    pub fn cycle_danger(&mut self, sink: &mut dyn CueSink) {
        if let Some(clip) = self.danger.cycle() {
            log::info!("danger sound {}", self.danger.current_index() + 1);
            if self.enabled {
                sink.play(clip);
            }
        }
    }

    /// Cycle the safe variant and preview it
    pub fn cycle_safe(&mut self, sink: &mut dyn CueSink) {
        if let Some(clip) = self.safe.cycle() {
            log::info!("safe sound {}", self.safe.current_index() + 1);
            if self.enabled {
                sink.play(clip);
            }
        }
    }

    /// Cycle the game-over variant (no preview)
    pub fn cycle_game_over(&mut self) {
        if self.game_over.cycle().is_some() {
            log::info!("game over sound {}", self.game_over.current_index() + 1);
        }
    }

    pub fn danger_index(&self) -> usize {
        self.danger.current_index()
    }

    pub fn safe_index(&self) -> usize {
        self.safe.current_index()
    }

    pub fn game_over_index(&self) -> usize {
        self.game_over.current_index()
    }
}
