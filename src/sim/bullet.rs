//! Craft projectiles
//!
//! Three kinds share one hitbox and differ only in their velocity. Each plays
//! a short muzzle-growth animation that lengthens the sprite on screen; the
//! hit test always uses the full rectangle.

use glam::IVec2;

use super::action::{Animation, Frame};
use super::events::EventQueue;
use super::object::{GameObject, TickContext};
use super::rect::Rect;
use crate::consts::{BULLET_DRIFT, BULLET_HEIGHT, BULLET_SPEED, BULLET_WIDTH};
use crate::renderer::{Renderer, SheetId};

/// Sprite lengths of the muzzle-growth sequence
const GROWTH: [i32; 4] = [3, 6, 9, BULLET_WIDTH];
const GROWTH_DELAY: u32 = 0;
/// First sprite row on the bullet sheet
const SHEET_TOP: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletKind {
    Straight,
    DiagonalUp,
    DiagonalDown,
}

impl BulletKind {
    /// One of each, in volley order
    pub const ALL: [BulletKind; 3] = [
        BulletKind::Straight,
        BulletKind::DiagonalUp,
        BulletKind::DiagonalDown,
    ];

    /// Pixels moved per tick
    pub fn velocity(&self) -> IVec2 {
        match self {
            BulletKind::Straight => IVec2::new(BULLET_SPEED, 0),
            BulletKind::DiagonalUp => IVec2::new(BULLET_SPEED, -BULLET_DRIFT),
            BulletKind::DiagonalDown => IVec2::new(BULLET_SPEED, BULLET_DRIFT),
        }
    }

    fn sheet_row(&self) -> i32 {
        match self {
            BulletKind::Straight => 0,
            BulletKind::DiagonalUp => 1,
            BulletKind::DiagonalDown => 2,
        }
    }
}

fn growth_frames(kind: BulletKind) -> Vec<Frame> {
    let y = SHEET_TOP + kind.sheet_row() * BULLET_HEIGHT;
    GROWTH
        .iter()
        .map(|&w| {
            Frame::new(
                Rect::new(0, 0, w, BULLET_HEIGHT),
                Rect::new(BULLET_WIDTH - w, y, w, BULLET_HEIGHT),
                GROWTH_DELAY,
            )
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct Bullet {
    kind: BulletKind,
    rect: Rect,
    alive: bool,
    anim: Animation,
}

impl Bullet {
    /// Spawn with the left edge at `muzzle.x`, vertically centered on `muzzle.y`
    pub fn new(kind: BulletKind, muzzle: IVec2) -> Self {
        let rect = Rect::new(
            muzzle.x,
            muzzle.y - BULLET_HEIGHT / 2,
            BULLET_WIDTH,
            BULLET_HEIGHT,
        );
        let mut anim = Animation::sequence(growth_frames(kind));
        anim.place(rect.top_left());
        Self {
            kind,
            rect,
            alive: true,
            anim,
        }
    }

    pub fn kind(&self) -> BulletKind {
        self.kind
    }

    /// Mark spent; the owner drops it on its next update
    pub fn kill(&mut self) {
        self.alive = false;
    }

    /// Current on-screen sprite length
    pub fn sprite_width(&self) -> i32 {
        self.anim.current().src.w
    }

    /// True once no part of the bullet overlaps `bounds`
    pub fn is_outside(&self, bounds: &Rect) -> bool {
        !bounds.intersects(&self.rect)
    }
}

impl GameObject for Bullet {
    fn update(&mut self, _ctx: &mut TickContext<'_>) {
        if !self.alive {
            return;
        }
        self.rect.move_by(self.kind.velocity());
        self.anim.advance(0);
        self.anim.place(self.rect.top_left());
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        if self.alive {
            let frame = self.anim.current();
            renderer.draw(SheetId::Bullets, frame.src, frame.collision);
        }
    }

    fn rect(&self) -> Rect {
        self.rect
    }

    fn is_alive(&self) -> bool {
        self.alive
    }

    fn destroy(&mut self, _events: &mut EventQueue) {
        self.kill();
    }

    fn collide(&mut self, other: &dyn GameObject) -> bool {
        self.alive && self.rect.intersects(&other.rect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::FixedInput;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn step(bullet: &mut Bullet) {
        let input = FixedInput::idle();
        let mut rng = Pcg32::seed_from_u64(0);
        let mut events = EventQueue::new();
        let mut ctx = TickContext::new(1, &input, &mut rng, &mut events);
        bullet.update(&mut ctx);
    }

    #[test]
    fn test_spawn_centered_on_muzzle() {
        let bullet = Bullet::new(BulletKind::Straight, IVec2::new(22, 7));
        assert_eq!(bullet.rect().center().y, 7);
        assert_eq!(bullet.rect().x, 22);
    }

    #[test]
    fn test_velocity_per_kind() {
        for kind in BulletKind::ALL {
            let mut bullet = Bullet::new(kind, IVec2::new(100, 100));
            let before = bullet.rect().top_left();
            step(&mut bullet);
            assert_eq!(bullet.rect().top_left() - before, kind.velocity());
        }
    }

    #[test]
    fn test_muzzle_growth_is_cosmetic() {
        let mut bullet = Bullet::new(BulletKind::Straight, IVec2::new(0, 50));
        step(&mut bullet);
        let first = bullet.sprite_width();
        for _ in 0..10 {
            step(&mut bullet);
        }
        assert!(bullet.sprite_width() > first);
        assert_eq!(bullet.sprite_width(), BULLET_WIDTH);
        assert_eq!(bullet.rect().w, BULLET_WIDTH);
    }

    #[test]
    fn test_dead_bullet_never_collides() {
        let mut a = Bullet::new(BulletKind::Straight, IVec2::new(10, 10));
        let b = Bullet::new(BulletKind::Straight, IVec2::new(12, 10));
        assert!(a.collide(&b));
        a.kill();
        assert!(!a.collide(&b));
    }

    #[test]
    fn test_outside_any_edge() {
        let field = Rect::new(0, 0, 320, 256);
        let mut bullet = Bullet::new(BulletKind::DiagonalUp, IVec2::new(100, 2));
        assert!(!bullet.is_outside(&field));
        for _ in 0..10 {
            step(&mut bullet);
        }
        assert!(bullet.is_outside(&field));
    }
}
