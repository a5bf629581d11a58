//! Game-phase state machine
//!
//! Load -> GetReady -> Play -> GetReady -> ...
//!
//! Each phase owns the `World` (background, craft, score, RNG and the event
//! queue) and hands it to its successor from `state()`.

mod get_ready;
mod load;
mod play;

pub use get_ready::GetReadyPhase;
pub use load::{LoadError, LoadPhase};
pub use play::PlayPhase;

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::audio::{SoundEffect, SoundManager};
use crate::consts::SCORE_DIGITS;
use crate::platform::Input;
use crate::renderer::font::{BitmapFont, format_score};
use crate::renderer::Renderer;
use crate::sim::{Background, Craft, EventQueue, GameEvent};

/// Score readout position
const SCORE_POS: IVec2 = IVec2::new(4, 4);

/// State carried from phase to phase
pub struct World {
    pub background: Background,
    pub craft: Craft,
    pub score: u32,
    pub rng: Pcg32,
    pub events: EventQueue,
    pub font: BitmapFont,
    bounds: IVec2,
}

impl World {
    /// Fresh world for a `bounds`-sized playfield
    pub fn new(bounds: IVec2, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        log::info!("World seed {seed}");
        Self {
            background: Background::new(),
            craft: Craft::new(bounds),
            score: 0,
            rng: Pcg32::seed_from_u64(seed),
            events: EventQueue::new(),
            font: BitmapFont::default(),
            bounds,
        }
    }

    pub fn bounds(&self) -> IVec2 {
        self.bounds
    }

    /// Apply one domain event: sound, then score
    pub fn handle_event(&mut self, event: GameEvent, sounds: &mut dyn SoundManager) {
        match event {
            GameEvent::CraftFired => sounds.play(SoundEffect::Fire),
            GameEvent::EnemyDestroyed { bonus } => {
                sounds.play(SoundEffect::EnemyExplode);
                self.score = self.score.saturating_add(bonus);
            }
            GameEvent::PlayerDestroyed => {
                sounds.play(SoundEffect::PlayerExplode);
                log::info!("Craft destroyed, score {}", self.score);
            }
        }
    }

    pub fn draw_score(&self, renderer: &mut dyn Renderer) {
        let text = format_score(self.score);
        debug_assert_eq!(text.len(), SCORE_DIGITS);
        self.font.draw_text(renderer, &text, SCORE_POS);
    }
}

/// The active phase
pub enum GamePhase {
    Load(LoadPhase),
    GetReady(GetReadyPhase),
    Play(PlayPhase),
}

impl GamePhase {
    pub fn name(&self) -> &'static str {
        match self {
            GamePhase::Load(_) => "Load",
            GamePhase::GetReady(_) => "GetReady",
            GamePhase::Play(_) => "Play",
        }
    }

    pub fn update(&mut self, time: u32, input: &dyn Input) {
        match self {
            GamePhase::Load(_) => {}
            GamePhase::GetReady(p) => p.update(time, input),
            GamePhase::Play(p) => p.update(time, input),
        }
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) {
        match self {
            GamePhase::Load(_) => {}
            GamePhase::GetReady(p) => p.draw(renderer),
            GamePhase::Play(p) => p.draw(renderer),
        }
    }

    pub fn world(&self) -> &World {
        match self {
            GamePhase::Load(p) => p.world(),
            GamePhase::GetReady(p) => p.world(),
            GamePhase::Play(p) => p.world(),
        }
    }

    fn world_mut(&mut self) -> &mut World {
        match self {
            GamePhase::Load(p) => p.world_mut(),
            GamePhase::GetReady(p) => p.world_mut(),
            GamePhase::Play(p) => p.world_mut(),
        }
    }

    /// Events raised since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        self.world_mut().events.drain()
    }

    pub fn handle_event(&mut self, event: GameEvent, sounds: &mut dyn SoundManager) {
        self.world_mut().handle_event(event, sounds);
    }

    pub fn score(&self) -> u32 {
        self.world().score
    }

    /// Next phase; identity in the steady state
    pub fn state(self) -> GamePhase {
        let from = self.name();
        let next = match self {
            GamePhase::Load(p) => GamePhase::GetReady(p.finish()),
            GamePhase::GetReady(p) => p.state(),
            GamePhase::Play(p) => p.state(),
        };
        if next.name() != from {
            log::info!("Phase {from} -> {}", next.name());
        }
        next
    }
}
