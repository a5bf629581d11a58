//! Power-ups dropped by destroyed asteroids
//!
//! Power-ups drift left while bobbing up and down and vanish when the craft
//! touches them. What a pickup does is left to a `PickupEffect`; the default
//! does nothing.

use glam::IVec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::action::{Animation, Frame};
use super::craft::Craft;
use super::events::EventQueue;
use super::object::{GameObject, TickContext};
use super::rect::Rect;
use crate::consts::{POWERUP_BOB_TICKS, POWERUP_SIZE};
use crate::renderer::{Renderer, SheetId};

/// Horizontal drift (pixels/tick)
const DRIFT: i32 = 1;

/// Visual kind of a power-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpKind {
    Shield,
    Spread,
    Speed,
    Bomb,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 4] = [
        PowerUpKind::Shield,
        PowerUpKind::Spread,
        PowerUpKind::Speed,
        PowerUpKind::Bomb,
    ];

    fn sheet_column(&self) -> i32 {
        match self {
            PowerUpKind::Shield => 0,
            PowerUpKind::Spread => 1,
            PowerUpKind::Speed => 2,
            PowerUpKind::Bomb => 3,
        }
    }
}

/// Roll one-in-`odds` for one destroyed asteroid
pub fn roll_drop(rng: &mut Pcg32, odds: u32) -> bool {
    rng.random_ratio(1, odds.max(1))
}

/// Hook applied when the craft collects a power-up
pub trait PickupEffect {
    fn apply(&mut self, kind: PowerUpKind, craft: &mut Craft);
}

/// Collecting a power-up has no gameplay effect
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEffect;

impl PickupEffect for NoEffect {
    fn apply(&mut self, kind: PowerUpKind, _craft: &mut Craft) {
        log::debug!("Picked up {kind:?}");
    }
}

#[derive(Debug, Clone)]
pub struct PowerUp {
    kind: PowerUpKind,
    rect: Rect,
    alive: bool,
    bob_tick: u32,
    rising: bool,
    anim: Animation,
}

impl PowerUp {
    pub fn new(kind: PowerUpKind, center: IVec2) -> Self {
        let mut rect = Rect::new(0, 0, POWERUP_SIZE, POWERUP_SIZE);
        rect.set_center(center);
        let mut anim = Animation::sequence(vec![Frame::new(
            Rect::new(0, 0, POWERUP_SIZE, POWERUP_SIZE),
            Rect::new(
                kind.sheet_column() * POWERUP_SIZE,
                0,
                POWERUP_SIZE,
                POWERUP_SIZE,
            ),
            0,
        )]);
        anim.place(rect.top_left());
        Self {
            kind,
            rect,
            alive: true,
            bob_tick: 0,
            rising: true,
            anim,
        }
    }

    /// Random kind centered on `center`
    pub fn spawn(rng: &mut Pcg32, center: IVec2) -> Self {
        let kind = PowerUpKind::ALL[rng.random_range(0..PowerUpKind::ALL.len())];
        Self::new(kind, center)
    }

    pub fn kind(&self) -> PowerUpKind {
        self.kind
    }

    pub fn is_off_screen(&self) -> bool {
        self.rect.right() < 0
    }
}

impl GameObject for PowerUp {
    fn update(&mut self, _ctx: &mut TickContext<'_>) {
        if !self.alive {
            return;
        }
        let dy = if self.rising { -1 } else { 1 };
        self.rect.move_by(IVec2::new(-DRIFT, dy));
        self.bob_tick += 1;
        if self.bob_tick >= POWERUP_BOB_TICKS {
            self.bob_tick = 0;
            self.rising = !self.rising;
        }
        self.anim.advance(0);
        self.anim.place(self.rect.top_left());
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        if self.alive {
            let frame = self.anim.current();
            renderer.draw(SheetId::PowerUps, frame.src, frame.collision);
        }
    }

    fn rect(&self) -> Rect {
        self.rect
    }

    fn is_alive(&self) -> bool {
        self.alive
    }

    fn destroy(&mut self, _events: &mut EventQueue) {
        self.alive = false;
    }

    fn collide(&mut self, other: &dyn GameObject) -> bool {
        self.alive && other.is_alive() && self.rect.intersects(&other.rect())
    }
}
