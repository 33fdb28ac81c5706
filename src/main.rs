//! Gapwing entry point
//!
//! Headless demo driver: runs the deterministic core under a simple
//! autopilot, routes cues through a logging sink, and prints a summary per
//! run. A windowed host would replace the sink and renderer seams and feed
//! real input events through `ui::route_event`.

use gapwing::audio::{ClipHandle, CueRouter, CueSink};
use gapwing::avatar::AvatarSet;
use gapwing::consts::*;
use gapwing::render::Scene;
use gapwing::settings::Settings;
use gapwing::sim::{GamePhase, GameState, TickInput, tick};
use gapwing::ui::{InputEvent, SettingsOverlay, route_event};

/// Number of demo runs before exiting
const DEMO_RUNS: u32 = 3;
/// Per-run tick cap (2 minutes of simulated play)
const MAX_RUN_TICKS: u64 = 2 * 60 * 60;

/// Sink that logs playback instead of producing sound
struct LogSink {
    volume: f32,
}

impl CueSink for LogSink {
    fn play(&mut self, clip: ClipHandle) {
        log::debug!("play clip {} at volume {:.2}", clip.0, self.volume);
    }
}

/// Flap whenever the glider sinks toward the bottom of the next gap
///
/// Flapping at gap center + 50 keeps the ~100-unit rise of each flap well
/// inside the 180-unit gap band.
fn autopilot(state: &GameState) -> TickInput {
    let target = state
        .gates
        .iter()
        .find(|g| g.x + GATE_WIDTH > state.glider.x)
        .map(|g| g.gap_center)
        .unwrap_or(CANVAS_HEIGHT / 2.0);
    TickInput {
        primary: state.glider.y > target + 50.0,
    }
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xC0FFEE);
    let realtime = std::env::args().any(|a| a == "--realtime");
    log::info!("gapwing demo starting, seed {}", seed);

    let settings = Settings::load();
    let mut sink = LogSink {
        volume: settings.effective_volume(),
    };

    // Handles a windowed host would mint after decoding its clip files
    let mut router = CueRouter::new();
    router.set_enabled(settings.sound_enabled);
    router.register_flap(ClipHandle(0));
    router.register_danger(ClipHandle(1));
    router.register_danger(ClipHandle(2));
    router.register_safe(ClipHandle(3));
    router.register_safe(ClipHandle(4));
    router.register_game_over(ClipHandle(5));
    router.register_game_over(ClipHandle(6));
    router.register_high_altitude(ClipHandle(7));
    router.register_milestone(ClipHandle(8));

    let mut overlay = SettingsOverlay::default();
    let mut avatars = AvatarSet::new();
    let mut state = GameState::new(seed);

    let mut runs = 0u32;
    let mut run_ticks = 0u64;
    let mut last_score = 0u32;

    // Start the first run the way a player would
    let primary = route_event(
        InputEvent::PrimaryAction,
        &mut overlay,
        &mut avatars,
        &mut router,
        &mut sink,
    );
    tick(&mut state, &TickInput { primary });

    // Fixed-timestep accumulator; in realtime mode ticks are paced against
    // the wall clock with bounded substeps, otherwise the demo runs flat out
    let mut accumulator = 0.0f32;
    let mut last_time = std::time::Instant::now();

    loop {
        if realtime {
            let now = std::time::Instant::now();
            accumulator += now.duration_since(last_time).as_secs_f32();
            last_time = now;
            if accumulator < SIM_DT {
                std::thread::sleep(std::time::Duration::from_secs_f32(
                    SIM_DT - accumulator,
                ));
                continue;
            }
            accumulator = accumulator.min(SIM_DT * MAX_SUBSTEPS as f32);
            accumulator -= SIM_DT;
        }

        let input = autopilot(&state);
        tick(&mut state, &input);
        run_ticks += 1;

        for cue in state.drain_cues() {
            log::debug!("cue {:?}", cue);
            router.dispatch(cue, &mut sink);
        }

        if state.score != last_score {
            last_score = state.score;
            log::info!("score {}", state.score);
        }

        if state.phase == GamePhase::GameOver {
            runs += 1;
            log::info!(
                "run {} finished after {} ticks: score {}, best {}",
                runs,
                run_ticks,
                state.score,
                state.high_score
            );
            if runs >= DEMO_RUNS {
                break;
            }
            run_ticks = 0;
            last_score = 0;
            tick(&mut state, &TickInput { primary: true });
        } else if run_ticks >= MAX_RUN_TICKS {
            log::info!(
                "tick cap reached: score {}, best {}",
                state.score,
                state.high_score
            );
            break;
        }
    }

    let scene = Scene::capture(&state, avatars.current_face(), overlay.is_open());
    log::info!(
        "final frame: {} gates on screen, {} particle sprites, high score {}",
        scene.gates.len(),
        scene.sprites().count(),
        scene.high_score
    );

    settings.save();
}
