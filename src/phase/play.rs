//! Active gameplay
//!
//! Per tick: scroll the background, steer the craft, run the wave and the
//! wrecks, resolve collisions, then spawn and collect power-ups. After the
//! craft dies play continues for a grace period before GetReady.

use super::get_ready::GetReadyPhase;
use super::{GamePhase, World};
use crate::consts::{DEATH_GRACE_TICKS, POWERUP_ODDS};
use crate::platform::Input;
use crate::renderer::Renderer;
use crate::sim::powerup::roll_drop;
use crate::sim::{
    Asteroid, AsteroidWave, GameObject, NoEffect, PickupEffect, PowerUp, TickContext,
};

pub struct PlayPhase {
    world: World,
    wave: AsteroidWave,
    /// Destroyed asteroids still playing their explosion
    wrecks: Vec<Asteroid>,
    powerups: Vec<PowerUp>,
    pickup: Box<dyn PickupEffect>,
    /// One power-up per this many destroyed asteroids, on average
    drop_odds: u32,
    /// Ticks since the craft died
    grace: Option<u32>,
}

impl PlayPhase {
    pub fn new(world: World) -> Self {
        Self::with_pickup(world, Box::new(NoEffect))
    }

    pub fn with_pickup(world: World, pickup: Box<dyn PickupEffect>) -> Self {
        let wave = AsteroidWave::new(world.bounds());
        Self {
            world,
            wave,
            wrecks: Vec::new(),
            powerups: Vec::new(),
            pickup,
            drop_odds: POWERUP_ODDS,
            grace: None,
        }
    }

    pub fn with_drop_odds(mut self, odds: u32) -> Self {
        self.drop_odds = odds;
        self
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub(super) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn wave(&self) -> &AsteroidWave {
        &self.wave
    }

    pub fn wave_mut(&mut self) -> &mut AsteroidWave {
        &mut self.wave
    }

    pub fn wrecks(&self) -> &[Asteroid] {
        &self.wrecks
    }

    pub fn powerups(&self) -> &[PowerUp] {
        &self.powerups
    }

    pub fn update(&mut self, time: u32, input: &dyn Input) {
        let world = &mut self.world;
        {
            let mut ctx = TickContext::new(time, input, &mut world.rng, &mut world.events);
            world.background.update(&mut ctx);
            world.craft.update(&mut ctx);
            self.wave.update(&mut ctx);
            for wreck in &mut self.wrecks {
                wreck.update(&mut ctx);
            }
            for powerup in &mut self.powerups {
                powerup.update(&mut ctx);
            }
        }
        self.wrecks.retain(|a| !a.is_finished() && !a.is_off_screen());

        for destroyed in self.wave.collide(&mut world.craft, &mut world.events) {
            if roll_drop(&mut world.rng, self.drop_odds) {
                let powerup = PowerUp::spawn(&mut world.rng, destroyed.rect().center());
                log::debug!("Power-up {:?} dropped", powerup.kind());
                self.powerups.push(powerup);
            }
            self.wrecks.push(destroyed);
        }

        for powerup in &mut self.powerups {
            if powerup.collide(&world.craft) {
                powerup.destroy(&mut world.events);
                self.pickup.apply(powerup.kind(), &mut world.craft);
            }
        }
        self.powerups
            .retain(|p| p.is_alive() && !p.is_off_screen());

        if let Some(ticks) = self.grace.as_mut() {
            *ticks = ticks.saturating_add(time);
        } else if !world.craft.is_alive() {
            self.grace = Some(0);
        }
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) {
        let world = &self.world;
        world.background.draw(renderer);
        self.wave.draw(renderer);
        for wreck in &self.wrecks {
            wreck.draw(renderer);
        }
        for powerup in &self.powerups {
            powerup.draw(renderer);
        }
        world.craft.draw(renderer);
        world.draw_score(renderer);
    }

    pub fn state(self) -> GamePhase {
        match self.grace {
            Some(ticks) if ticks >= DEATH_GRACE_TICKS => {
                GamePhase::GetReady(GetReadyPhase::new(self.world))
            }
            _ => GamePhase::Play(self),
        }
    }
}
