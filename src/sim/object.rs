//! Common capability set shared by every simulated entity

use rand_pcg::Pcg32;

use super::events::EventQueue;
use super::rect::Rect;
use crate::platform::Input;
use crate::renderer::Renderer;

/// Everything an entity may touch during one update
pub struct TickContext<'a> {
    /// Ticks elapsed since the previous update (1 at the fixed rate)
    pub time: u32,
    pub input: &'a dyn Input,
    pub rng: &'a mut Pcg32,
    pub events: &'a mut EventQueue,
}

impl<'a> TickContext<'a> {
    pub fn new(
        time: u32,
        input: &'a dyn Input,
        rng: &'a mut Pcg32,
        events: &'a mut EventQueue,
    ) -> Self {
        Self {
            time,
            input,
            rng,
            events,
        }
    }
}

/// An animated, collidable entity
pub trait GameObject {
    fn update(&mut self, ctx: &mut TickContext<'_>);

    fn draw(&self, renderer: &mut dyn Renderer);

    /// Hitbox and draw anchor
    fn rect(&self) -> Rect;

    fn is_alive(&self) -> bool;

    fn destroy(&mut self, events: &mut EventQueue);

    /// Resolve a hit against `other`; returns true when one happened
    fn collide(&mut self, other: &dyn GameObject) -> bool;
}
