//! Rock Runner headless runner
//!
//! Loads settings, then drives the engine against the recording renderer and
//! a silent mixer with a simple autopilot at the keys.

use std::path::PathBuf;

use rock_runner::audio::{AudioManager, SoundManager};
use rock_runner::phase::LoadPhase;
use rock_runner::platform::{Key, RawEvent};
use rock_runner::renderer::{RecordingRenderer, Renderer};
use rock_runner::{Backend, Engine, GamePhase, Settings};

/// Ticks per weave up or down
const WEAVE_TICKS: u64 = 45;
/// Default headless run length (one minute of game time)
const DEFAULT_TICKS: u64 = 60 * 30;

/// Holds fire and weaves across the playfield
struct Autopilot {
    tick: u64,
}

impl Autopilot {
    fn new() -> Self {
        Self { tick: 0 }
    }

    fn next_events(&mut self) -> Vec<RawEvent> {
        let mut events = Vec::new();
        if self.tick == 0 {
            events.push(RawEvent::KeyDown(Key::Fire));
        }
        if self.tick % WEAVE_TICKS == 0 {
            let (release, press) = if (self.tick / WEAVE_TICKS) % 2 == 0 {
                (Key::Down, Key::Up)
            } else {
                (Key::Up, Key::Down)
            };
            events.push(RawEvent::KeyUp(release));
            events.push(RawEvent::KeyDown(press));
        }
        self.tick += 1;
        events
    }
}

struct HeadlessBackend {
    renderer: RecordingRenderer,
    audio: AudioManager,
    autopilot: Autopilot,
}

impl Backend for HeadlessBackend {
    fn poll_events(&mut self) -> Vec<RawEvent> {
        self.autopilot.next_events()
    }

    fn renderer(&mut self) -> &mut dyn Renderer {
        &mut self.renderer
    }

    fn sounds(&mut self) -> &mut dyn SoundManager {
        &mut self.audio
    }
}

fn main() {
    env_logger::init();
    log::info!("Rock Runner (headless) starting...");

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("settings.json"));
    let mut settings = Settings::load(&path);
    if settings.max_ticks.is_none() {
        settings.max_ticks = Some(DEFAULT_TICKS);
    }

    log::info!(
        "Back buffer {}x{} upscaled x{} to {}x{}{}",
        settings.back_buffer_width,
        settings.back_buffer_height,
        settings.scale(),
        settings.screen_width,
        settings.screen_height,
        if settings.fullscreen { " (fullscreen)" } else { "" }
    );

    let mut backend = HeadlessBackend {
        renderer: RecordingRenderer::new(),
        audio: AudioManager::from_settings(None, &settings),
        autopilot: Autopilot::new(),
    };

    let load = match LoadPhase::new(&mut backend.renderer, &settings) {
        Ok(load) => load,
        Err(e) => {
            log::error!("Load failed: {e}");
            std::process::exit(1);
        }
    };

    let mut engine = Engine::new(&settings);
    let phase = engine.run(GamePhase::Load(load), &mut backend);
    log::info!(
        "Final score {} after {} ticks ({} frames presented)",
        phase.score(),
        engine.ticks(),
        backend.renderer.frames_presented()
    );
}
