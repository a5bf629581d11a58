//! Countdown before play with the craft back at its spawn point

use super::play::PlayPhase;
use super::{GamePhase, World};
use crate::consts::GET_READY_TICKS;
use crate::platform::Input;
use crate::renderer::Renderer;
use crate::sim::{GameObject, TickContext};

const BANNER: &str = "GET READY";

pub struct GetReadyPhase {
    world: World,
    ticks: u32,
}

impl GetReadyPhase {
    /// Respawns the craft
    pub fn new(mut world: World) -> Self {
        world.craft.respawn();
        Self { world, ticks: 0 }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub(super) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn update(&mut self, time: u32, input: &dyn Input) {
        let world = &mut self.world;
        let mut ctx = TickContext::new(time, input, &mut world.rng, &mut world.events);
        world.background.update(&mut ctx);
        world.craft.update(&mut ctx);
        self.ticks = self.ticks.saturating_add(time);
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) {
        let world = &self.world;
        world.background.draw(renderer);
        world.craft.draw(renderer);
        let banner_y = (world.bounds().y - world.font.cell_size()) / 2;
        world
            .font
            .draw_centered(renderer, BANNER, world.bounds().x, banner_y);
        world.draw_score(renderer);
    }

    pub fn state(self) -> GamePhase {
        if self.ticks >= GET_READY_TICKS {
            GamePhase::Play(PlayPhase::new(self.world))
        } else {
            GamePhase::GetReady(self)
        }
    }
}
