//! Fixed-rate main loop
//!
//! Each frame: drain raw events into the controller, update the active phase,
//! dispatch the domain events it raised, draw, present, and poll the next
//! phase.

use crate::audio::SoundManager;
use crate::phase::GamePhase;
use crate::platform::{Controller, FrameClock, Key, RawEvent};
use crate::renderer::Renderer;
use crate::settings::Settings;

/// Ticks passed to `update` per frame at the fixed rate
const TICK: u32 = 1;

/// Window, audio device and event source the engine drives
pub trait Backend {
    /// Raw events since the previous call
    fn poll_events(&mut self) -> Vec<RawEvent>;
    fn renderer(&mut self) -> &mut dyn Renderer;
    fn sounds(&mut self) -> &mut dyn SoundManager;
}

pub struct Engine {
    controller: Controller,
    running: bool,
    ticks: u64,
    clock: Option<FrameClock>,
    max_ticks: Option<u64>,
}

impl Engine {
    /// Engine paced at the configured tick rate
    pub fn new(settings: &Settings) -> Self {
        Self {
            controller: Controller::new(),
            running: true,
            ticks: 0,
            clock: Some(FrameClock::new(settings.tick_rate)),
            max_ticks: settings.max_ticks,
        }
    }

    /// Engine that runs frames back to back
    pub fn unpaced(max_ticks: Option<u64>) -> Self {
        Self {
            controller: Controller::new(),
            running: true,
            ticks: 0,
            clock: None,
            max_ticks,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn on_event(&mut self, event: RawEvent) {
        match event {
            RawEvent::Quit => self.stop(),
            RawEvent::KeyDown(key) => self.controller.key_down(key),
            RawEvent::KeyUp(key) => {
                if key == Key::Escape {
                    self.stop();
                }
                self.controller.key_up(key);
            }
        }
    }

    /// Run one frame and return the phase for the next one
    pub fn step(&mut self, mut phase: GamePhase, backend: &mut dyn Backend) -> GamePhase {
        for event in backend.poll_events() {
            self.on_event(event);
        }
        self.controller.on_event();

        phase.update(TICK, &self.controller);
        for event in phase.take_events() {
            phase.handle_event(event, backend.sounds());
        }

        let renderer = backend.renderer();
        renderer.cls();
        phase.draw(renderer);
        renderer.draw_to_screen();

        self.ticks += 1;
        if self.max_ticks.is_some_and(|max| self.ticks >= max) {
            log::info!("Tick limit {} reached", self.ticks);
            self.stop();
        }
        phase.state()
    }

    /// Loop until quit or the tick limit; returns the final phase
    pub fn run(&mut self, mut phase: GamePhase, backend: &mut dyn Backend) -> GamePhase {
        log::info!("Engine starting in phase {}", phase.name());
        backend.sounds().start_music();
        while self.running {
            phase = self.step(phase, backend);
            if let Some(clock) = self.clock.as_mut() {
                clock.tick();
            }
        }
        log::info!(
            "Engine stopped after {} ticks, score {}",
            self.ticks,
            phase.score()
        );
        phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{RecordingSounds, SoundEffect};
    use crate::phase::LoadPhase;
    use crate::platform::{Button, Input};
    use crate::renderer::{RecordingRenderer, SheetId};
    use std::collections::VecDeque;

    #[derive(Default)]
    struct ScriptedBackend {
        /// Events delivered one batch per frame
        script: VecDeque<Vec<RawEvent>>,
        renderer: RecordingRenderer,
        sounds: RecordingSounds,
    }

    impl Backend for ScriptedBackend {
        fn poll_events(&mut self) -> Vec<RawEvent> {
            self.script.pop_front().unwrap_or_default()
        }

        fn renderer(&mut self) -> &mut dyn Renderer {
            &mut self.renderer
        }

        fn sounds(&mut self) -> &mut dyn SoundManager {
            &mut self.sounds
        }
    }

    fn start(backend: &mut ScriptedBackend) -> GamePhase {
        let settings = Settings {
            seed: Some(11),
            ..Settings::default()
        };
        GamePhase::Load(LoadPhase::new(&mut backend.renderer, &settings).unwrap())
    }

    #[test]
    fn test_quit_stops_the_loop() {
        let mut backend = ScriptedBackend::default();
        backend.script.push_back(vec![]);
        backend.script.push_back(vec![RawEvent::Quit]);
        let phase = start(&mut backend);
        let mut engine = Engine::unpaced(Some(1000));
        engine.run(phase, &mut backend);
        assert_eq!(engine.ticks(), 2);
        assert!(backend.sounds.music_started);
        assert_eq!(backend.renderer.frames_presented(), 2);
    }

    #[test]
    fn test_escape_key_up_stops_the_loop() {
        let mut backend = ScriptedBackend::default();
        backend.script.push_back(vec![RawEvent::KeyDown(Key::Escape)]);
        backend.script.push_back(vec![RawEvent::KeyUp(Key::Escape)]);
        let phase = start(&mut backend);
        let mut engine = Engine::unpaced(None);
        engine.run(phase, &mut backend);
        assert_eq!(engine.ticks(), 2);
    }

    #[test]
    fn test_tick_limit_stops_the_loop() {
        let mut backend = ScriptedBackend::default();
        let phase = start(&mut backend);
        let mut engine = Engine::unpaced(Some(5));
        let phase = engine.run(phase, &mut backend);
        assert_eq!(engine.ticks(), 5);
        assert!(matches!(phase, GamePhase::GetReady(_)));
    }

    #[test]
    fn test_held_fire_in_get_ready_plays_fire_sound() {
        let mut backend = ScriptedBackend::default();
        backend.script.push_back(vec![RawEvent::KeyDown(Key::Fire)]);
        let mut engine = Engine::unpaced(None);
        let mut phase = start(&mut backend);
        // load -> get ready
        phase = engine.step(phase, &mut backend);
        phase = engine.step(phase, &mut backend);
        assert!(matches!(phase, GamePhase::GetReady(_)));
        assert_eq!(backend.sounds.count(SoundEffect::Fire), 1);
        assert!(engine.controller().get_buttons().is_pressed(Button::Fire));
        assert!(backend.renderer.calls_for(SheetId::Bullets).count() >= 3);
    }

    #[test]
    fn test_get_ready_then_play() {
        let mut backend = ScriptedBackend::default();
        let mut engine = Engine::unpaced(None);
        let mut phase = start(&mut backend);
        phase = engine.step(phase, &mut backend);
        for _ in 0..crate::consts::GET_READY_TICKS {
            phase = engine.step(phase, &mut backend);
        }
        assert!(matches!(phase, GamePhase::Play(_)));
        assert_eq!(phase.score(), 0);
    }
}
