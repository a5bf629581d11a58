//! Asteroids and the wave that spawns them
//!
//! Asteroids enter at the right edge and drift left. Each bullet hit costs one
//! life point; the last one starts the explosion and awards a bonus equal to
//! the asteroid's speed. Dead or alive, an asteroid keeps scrolling until it
//! has left the playfield.

use glam::IVec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::action::{Animation, Frame};
use super::craft::Craft;
use super::events::{EventQueue, GameEvent};
use super::explosion::Explosion;
use super::object::{GameObject, TickContext};
use super::rect::Rect;
use super::timer::Timer;
use crate::consts::{ASTEROID_MAX_SPEED, ASTEROID_MIN_SPEED, ASTEROID_SPAWN_INTERVAL};
use crate::renderer::{Renderer, SheetId};

/// Number of visual variants on the asteroid sheet
pub const ASTEROID_VARIANTS: u8 = 6;
/// Width of one variant column on the sheet
const SHEET_CELL: i32 = 32;

/// Size class of a variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Small,
    Medium,
    Large,
}

impl Tier {
    pub fn of(variant: u8) -> Self {
        match variant {
            0 | 1 => Tier::Small,
            2 | 3 => Tier::Medium,
            _ => Tier::Large,
        }
    }

    pub fn size(&self) -> i32 {
        match self {
            Tier::Small => 16,
            Tier::Medium => 24,
            Tier::Large => 32,
        }
    }

    /// Bullet hits needed to destroy
    pub fn life(&self) -> u32 {
        match self {
            Tier::Small => 2,
            Tier::Medium => 4,
            Tier::Large => 6,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Asteroid {
    variant: u8,
    rect: Rect,
    life: u32,
    speed: i32,
    alive: bool,
    anim: Animation,
    explosion: Explosion,
}

impl Asteroid {
    /// Build a specific asteroid with its tier's life
    pub fn new(variant: u8, top_left: IVec2, speed: i32) -> Self {
        Self::with_life(variant, top_left, speed, Tier::of(variant).life())
    }

    pub fn with_life(variant: u8, top_left: IVec2, speed: i32, life: u32) -> Self {
        let variant = variant % ASTEROID_VARIANTS;
        let size = Tier::of(variant).size();
        let rect = Rect::new(top_left.x, top_left.y, size, size);
        let mut anim = Animation::sequence(vec![Frame::new(
            Rect::new(0, 0, size, size),
            Rect::new(variant as i32 * SHEET_CELL, 0, size, size),
            0,
        )]);
        anim.place(rect.top_left());
        Self {
            variant,
            rect,
            life,
            speed,
            alive: life > 0,
            anim,
            explosion: Explosion::new(),
        }
    }

    /// Random asteroid just beyond the right edge of a `bounds`-sized field
    pub fn spawn(rng: &mut Pcg32, bounds: IVec2) -> Self {
        let variant = rng.random_range(0..ASTEROID_VARIANTS);
        let size = Tier::of(variant).size();
        let y = rng.random_range(0..=(bounds.y - size).max(0));
        let speed = rng.random_range(ASTEROID_MIN_SPEED..=ASTEROID_MAX_SPEED);
        Self::new(variant, IVec2::new(bounds.x, y), speed)
    }

    pub fn variant(&self) -> u8 {
        self.variant
    }

    pub fn life(&self) -> u32 {
        self.life
    }

    pub fn speed(&self) -> i32 {
        self.speed
    }

    /// Bonus awarded when destroyed
    pub fn bonus(&self) -> u32 {
        self.speed.max(0) as u32
    }

    /// Fully past the leading (left) edge
    pub fn is_off_screen(&self) -> bool {
        self.rect.right() < 0
    }

    /// Dead and done exploding
    pub fn is_finished(&self) -> bool {
        !self.alive && !self.explosion.is_alive()
    }
}

impl GameObject for Asteroid {
    fn update(&mut self, ctx: &mut TickContext<'_>) {
        self.rect.move_by(IVec2::new(-self.speed, 0));
        if self.alive {
            self.anim.advance(0);
            self.anim.place(self.rect.top_left());
        } else {
            self.explosion.set_center(self.rect.center());
            self.explosion.update(ctx);
        }
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        if self.alive {
            let frame = self.anim.current();
            renderer.draw(SheetId::Asteroids, frame.src, frame.collision);
        } else {
            self.explosion.draw(renderer);
        }
    }

    fn rect(&self) -> Rect {
        self.rect
    }

    fn is_alive(&self) -> bool {
        self.alive
    }

    /// Take one hit; the last one destroys
    fn destroy(&mut self, events: &mut EventQueue) {
        if !self.alive {
            return;
        }
        self.life = self.life.saturating_sub(1);
        if self.life == 0 {
            self.alive = false;
            self.explosion.start(self.rect.center());
            events.push(GameEvent::EnemyDestroyed {
                bonus: self.bonus(),
            });
            log::debug!("Asteroid variant {} destroyed, bonus {}", self.variant, self.bonus());
        }
    }

    fn collide(&mut self, other: &dyn GameObject) -> bool {
        self.alive && other.is_alive() && self.rect.intersects(&other.rect())
    }
}

/// Spawner and owner of the live asteroids
#[derive(Debug, Clone)]
pub struct AsteroidWave {
    asteroids: Vec<Asteroid>,
    timer: Timer,
    bounds: IVec2,
}

impl AsteroidWave {
    pub fn new(bounds: IVec2) -> Self {
        Self::with_interval(bounds, ASTEROID_SPAWN_INTERVAL)
    }

    pub fn with_interval(bounds: IVec2, interval: u32) -> Self {
        Self {
            asteroids: Vec::new(),
            timer: Timer::new(interval),
            bounds,
        }
    }

    pub fn asteroids(&self) -> &[Asteroid] {
        &self.asteroids
    }

    pub fn len(&self) -> usize {
        self.asteroids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.asteroids.is_empty()
    }

    pub fn push(&mut self, asteroid: Asteroid) {
        self.asteroids.push(asteroid);
    }

    /// Spawn on schedule, advance, and drop whatever has scrolled away
    pub fn update(&mut self, ctx: &mut TickContext<'_>) {
        if self.timer.looped(ctx.time) {
            let asteroid = Asteroid::spawn(ctx.rng, self.bounds);
            log::debug!(
                "Spawned asteroid variant {} at y={} speed {}",
                asteroid.variant(),
                asteroid.rect().y,
                asteroid.speed()
            );
            self.asteroids.push(asteroid);
        }
        for asteroid in &mut self.asteroids {
            asteroid.update(ctx);
        }
        self.asteroids.retain(|a| !a.is_off_screen());
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) {
        for asteroid in &self.asteroids {
            asteroid.draw(renderer);
        }
    }

    /// Resolve bullets and the craft's body against every asteroid.
    ///
    /// Asteroids that lost their last life point are removed from the wave
    /// and handed back to the caller.
    pub fn collide(&mut self, craft: &mut Craft, events: &mut EventQueue) -> Vec<Asteroid> {
        for asteroid in &mut self.asteroids {
            if craft.collide(&*asteroid) {
                asteroid.destroy(events);
            }
            if asteroid.collide(&*craft) {
                craft.destroy(events);
            }
        }
        let (live, destroyed): (Vec<Asteroid>, Vec<Asteroid>) = std::mem::take(&mut self.asteroids)
            .into_iter()
            .partition(|a| a.is_alive());
        self.asteroids = live;
        destroyed
    }
}
