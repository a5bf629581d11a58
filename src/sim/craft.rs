//! The player's craft
//!
//! Reads a direction each tick, picks an animation from the vertical input and
//! the previous action, clamps to the playfield, and fires three-bullet
//! volleys while the fire button is held. Once destroyed it stops responding
//! and plays its explosion; bullets already in flight keep going.

use glam::IVec2;

use super::action::{Action, Animation, Frame};
use super::bullet::{Bullet, BulletKind};
use super::events::{EventQueue, GameEvent};
use super::explosion::Explosion;
use super::object::{GameObject, TickContext};
use super::rect::Rect;
use crate::consts::*;
use crate::platform::Button;
use crate::renderer::{Renderer, SheetId};

/// Poses on the craft sheet
const POSES: usize = 14;
const POSES_PER_ROW: usize = 5;
/// Left edge of the respawn point
const SPAWN_X: i32 = 16;

/// Animation selected for the current tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CraftAction {
    Idle,
    Ascend,
    Descend,
    RecoverAscend,
    RecoverDescend,
}

impl CraftAction {
    /// Next action given vertical input and the previous action
    pub fn next(self, dir_y: f32) -> Self {
        if dir_y < 0.0 {
            CraftAction::Ascend
        } else if dir_y > 0.0 {
            CraftAction::Descend
        } else {
            match self {
                CraftAction::Ascend | CraftAction::RecoverAscend => CraftAction::RecoverAscend,
                CraftAction::Descend | CraftAction::RecoverDescend => CraftAction::RecoverDescend,
                CraftAction::Idle => CraftAction::Idle,
            }
        }
    }

    fn index(self) -> usize {
        match self {
            CraftAction::Idle => 0,
            CraftAction::Ascend => 1,
            CraftAction::Descend => 2,
            CraftAction::RecoverAscend => 3,
            CraftAction::RecoverDescend => 4,
        }
    }
}

fn craft_animation() -> Animation {
    let frames = (0..POSES)
        .map(|i| {
            let col = (i % POSES_PER_ROW) as i32;
            let row = (i / POSES_PER_ROW) as i32;
            Frame::new(
                Rect::new(0, 0, CRAFT_WIDTH, CRAFT_HITBOX_HEIGHT),
                Rect::new(col * CRAFT_WIDTH, row * CRAFT_HEIGHT, CRAFT_WIDTH, CRAFT_HEIGHT),
                CRAFT_FRAME_DELAY,
            )
        })
        .collect();
    // Indexed by CraftAction::index; recover sequences replay the tilt poses
    // in reverse and settle on the level pose.
    let actions = vec![
        Action::new(vec![0]),
        Action::new(vec![1, 2]),
        Action::new(vec![3, 4]),
        Action::new(vec![2, 1, 0]),
        Action::new(vec![4, 3, 0]),
    ];
    Animation::new(frames, actions)
}

#[derive(Debug, Clone)]
pub struct Craft {
    /// Playfield size
    boundary: IVec2,
    rect: Rect,
    alive: bool,
    action: CraftAction,
    anim: Animation,
    bullets: Vec<Bullet>,
    bullet_tick: u32,
    explosion: Explosion,
}

impl Craft {
    /// A fresh craft at the origin
    pub fn new(boundary: IVec2) -> Self {
        let rect = Rect::new(0, 0, CRAFT_WIDTH, CRAFT_HITBOX_HEIGHT);
        let mut anim = craft_animation();
        anim.place(rect.top_left());
        Self {
            boundary,
            rect,
            alive: true,
            action: CraftAction::Idle,
            anim,
            bullets: Vec::new(),
            bullet_tick: 0,
            explosion: Explosion::new(),
        }
    }

    /// Bring the craft back at the spawn point with an empty magazine
    pub fn respawn(&mut self) {
        self.alive = true;
        self.action = CraftAction::Idle;
        self.anim.restart();
        self.rect
            .set_top_left(IVec2::new(SPAWN_X, (self.boundary.y - CRAFT_HEIGHT).max(0) / 2));
        self.anim.place(self.rect.top_left());
        self.bullets.clear();
        self.bullet_tick = 0;
        self.explosion.stop();
        log::debug!("Craft respawned at {:?}", self.rect.top_left());
    }

    pub fn action(&self) -> CraftAction {
        self.action
    }

    /// Pose currently shown
    pub fn frame(&self) -> &Frame {
        self.anim.current()
    }

    pub fn frame_id(&self) -> usize {
        self.anim.current_id()
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn explosion(&self) -> &Explosion {
        &self.explosion
    }

    /// Move without going through input (placement, tests)
    pub fn set_position(&mut self, pos: IVec2) {
        self.rect.set_top_left(pos);
        self.clamp();
        self.anim.place(self.rect.top_left());
    }

    fn playfield(&self) -> Rect {
        Rect::new(0, 0, self.boundary.x, self.boundary.y)
    }

    fn clamp(&mut self) {
        let max_x = (self.boundary.x - CRAFT_WIDTH).max(0);
        let max_y = (self.boundary.y - CRAFT_HEIGHT).max(0);
        self.rect.x = self.rect.x.clamp(0, max_x);
        self.rect.y = self.rect.y.clamp(0, max_y);
    }

    /// Fire a volley unless the cooldown is still running with bullets out
    fn shoot(&mut self, events: &mut EventQueue) {
        if self.bullet_tick < FIRE_COOLDOWN_TICKS && !self.bullets.is_empty() {
            self.bullet_tick += 1;
            return;
        }
        self.bullet_tick = 0;
        let muzzle = IVec2::new(self.rect.x + MUZZLE_OFFSET_X, self.rect.center().y);
        self.bullets
            .extend(BulletKind::ALL.iter().map(|&kind| Bullet::new(kind, muzzle)));
        events.push(GameEvent::CraftFired);
    }

    fn steer(&mut self, ctx: &mut TickContext<'_>) {
        let dir = ctx.input.get_direction();
        let vel = (dir * CRAFT_SPEED).round().as_ivec2();

        self.action = self.action.next(dir.y);
        self.anim.advance(self.action.index());

        self.rect.move_by(vel);
        self.clamp();
        self.anim.place(self.rect.top_left());

        if ctx.input.get_buttons().is_pressed(Button::Fire) {
            self.shoot(ctx.events);
        }
    }
}

impl GameObject for Craft {
    fn update(&mut self, ctx: &mut TickContext<'_>) {
        if self.alive {
            self.steer(ctx);
        } else {
            self.explosion.update(ctx);
        }

        for bullet in &mut self.bullets {
            bullet.update(ctx);
        }
        let field = self.playfield();
        self.bullets
            .retain(|b| b.is_alive() && !b.is_outside(&field));
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        if self.alive {
            let frame = self.anim.current();
            let dest = frame.src.with_top_left(frame.collision.top_left());
            renderer.draw(SheetId::Craft, frame.src, dest);
        } else {
            self.explosion.draw(renderer);
        }
        for bullet in &self.bullets {
            bullet.draw(renderer);
        }
    }

    fn rect(&self) -> Rect {
        self.rect
    }

    fn is_alive(&self) -> bool {
        self.alive
    }

    fn destroy(&mut self, events: &mut EventQueue) {
        if !self.alive {
            return;
        }
        self.alive = false;
        self.explosion.start(self.rect.center());
        events.push(GameEvent::PlayerDestroyed);
        log::debug!("Craft destroyed at {:?}", self.rect.center());
    }

    /// Hit `other` with the first live bullet that touches it
    fn collide(&mut self, other: &dyn GameObject) -> bool {
        if !other.is_alive() {
            return false;
        }
        let target = other.rect();
        match self
            .bullets
            .iter_mut()
            .find(|b| b.is_alive() && b.rect().intersects(&target))
        {
            Some(bullet) => {
                bullet.kill();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{Buttons, FixedInput};
    use glam::Vec2;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const FIELD: IVec2 = IVec2::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT);

    struct Harness {
        rng: Pcg32,
        events: EventQueue,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                rng: Pcg32::seed_from_u64(7),
                events: EventQueue::new(),
            }
        }

        fn tick(&mut self, craft: &mut Craft, input: FixedInput) {
            let mut ctx = TickContext::new(1, &input, &mut self.rng, &mut self.events);
            craft.update(&mut ctx);
        }
    }

    fn fire() -> FixedInput {
        FixedInput::new(Vec2::ZERO, Buttons::none().with(Button::Fire))
    }

    #[test]
    fn test_action_transitions() {
        use CraftAction::*;
        assert_eq!(Idle.next(-1.0), Ascend);
        assert_eq!(Idle.next(1.0), Descend);
        assert_eq!(Idle.next(0.0), Idle);
        assert_eq!(Ascend.next(0.0), RecoverAscend);
        assert_eq!(RecoverAscend.next(0.0), RecoverAscend);
        assert_eq!(Descend.next(0.0), RecoverDescend);
        assert_eq!(RecoverDescend.next(0.0), RecoverDescend);
        assert_eq!(RecoverAscend.next(1.0), Descend);
    }

    #[test]
    fn test_ascend_then_recover_to_level_pose() {
        let mut h = Harness::new();
        let mut craft = Craft::new(FIELD);
        craft.set_position(IVec2::new(0, 100));
        let up = FixedInput::new(Vec2::new(0.0, -1.0), Buttons::none());

        let mut last_y = craft.rect().y;
        for _ in 0..10 {
            h.tick(&mut craft, up);
            assert_eq!(craft.action(), CraftAction::Ascend);
            assert!(matches!(craft.frame_id(), 1 | 2));
            assert!(craft.rect().y <= last_y);
            last_y = craft.rect().y;
        }
        assert_eq!(craft.rect().y, 80);

        h.tick(&mut craft, FixedInput::idle());
        assert_eq!(craft.action(), CraftAction::RecoverAscend);
        // Recover starts from the steepest tilt pose
        assert_eq!(craft.frame_id(), 2);

        for _ in 0..30 {
            h.tick(&mut craft, FixedInput::idle());
            assert_eq!(craft.rect().y, 80);
        }
        assert_eq!(craft.action(), CraftAction::RecoverAscend);
        assert_eq!(craft.frame_id(), 0);
    }

    #[test]
    fn test_fresh_craft_at_origin_ascending_stays_clamped() {
        let mut h = Harness::new();
        let mut craft = Craft::new(FIELD);
        assert_eq!(craft.rect().top_left(), IVec2::ZERO);
        let up = FixedInput::new(Vec2::new(0.0, -1.0), Buttons::none());
        for _ in 0..10 {
            h.tick(&mut craft, up);
            assert_eq!(craft.rect().y, 0);
        }
        for _ in 0..5 {
            h.tick(&mut craft, FixedInput::idle());
        }
        assert_eq!(craft.action(), CraftAction::RecoverAscend);
    }

    #[test]
    fn test_collision_rect_tracks_entity_rect() {
        let mut h = Harness::new();
        let mut craft = Craft::new(FIELD);
        let input = FixedInput::new(Vec2::new(1.0, 1.0).normalize(), Buttons::none());
        for _ in 0..20 {
            h.tick(&mut craft, input);
            assert_eq!(craft.frame().collision.top_left(), craft.rect().top_left());
        }
    }

    #[test]
    fn test_first_volley_spawns_three_at_midpoint() {
        let mut h = Harness::new();
        let mut craft = Craft::new(FIELD);
        craft.set_position(IVec2::new(40, 100));
        let mid = craft.rect().center().y;

        h.tick(&mut craft, fire());
        assert_eq!(craft.bullets().len(), 3);
        assert_eq!(h.events.drain(), vec![GameEvent::CraftFired]);

        let kinds: Vec<BulletKind> = craft.bullets().iter().map(|b| b.kind()).collect();
        assert_eq!(kinds, BulletKind::ALL.to_vec());
        // Each bullet has moved one step from the muzzle
        for bullet in craft.bullets() {
            let expected_y = mid + bullet.kind().velocity().y;
            assert_eq!(bullet.rect().center().y, expected_y);
            assert_eq!(bullet.rect().x, 40 + MUZZLE_OFFSET_X + BULLET_SPEED);
        }
    }

    #[test]
    fn test_cooldown_gates_while_bullets_in_flight() {
        let mut h = Harness::new();
        let mut craft = Craft::new(FIELD);
        craft.set_position(IVec2::new(0, 100));

        h.tick(&mut craft, fire());
        assert_eq!(craft.bullets().len(), 3);
        for _ in 0..FIRE_COOLDOWN_TICKS {
            h.tick(&mut craft, fire());
            assert_eq!(craft.bullets().len(), 3);
        }
        h.tick(&mut craft, fire());
        assert_eq!(craft.bullets().len(), 6);
        let fired = h
            .events
            .iter()
            .filter(|e| **e == GameEvent::CraftFired)
            .count();
        assert_eq!(fired, 2);
    }

    #[test]
    fn test_bullets_leave_playfield_and_are_dropped() {
        let mut h = Harness::new();
        let mut craft = Craft::new(FIELD);
        craft.set_position(IVec2::new(0, 100));
        h.tick(&mut craft, fire());
        for _ in 0..200 {
            h.tick(&mut craft, FixedInput::idle());
        }
        assert!(craft.bullets().is_empty());
    }

    #[test]
    fn test_collide_spends_one_bullet_on_live_target() {
        let mut h = Harness::new();
        let mut craft = Craft::new(FIELD);
        craft.set_position(IVec2::new(0, 100));
        h.tick(&mut craft, fire());

        // A target sitting on the volley
        let mut target = Craft::new(FIELD);
        target.set_position(craft.bullets()[0].rect().top_left());
        assert!(craft.collide(&target));
        assert_eq!(craft.bullets().iter().filter(|b| !b.is_alive()).count(), 1);

        target.destroy(&mut h.events);
        assert!(!craft.collide(&target));
    }

    #[test]
    fn test_destroyed_craft_freezes_but_bullets_fly() {
        let mut h = Harness::new();
        let mut craft = Craft::new(FIELD);
        craft.set_position(IVec2::new(50, 100));
        h.tick(&mut craft, fire());
        let bullet_x = craft.bullets()[0].rect().x;

        craft.destroy(&mut h.events);
        craft.destroy(&mut h.events);
        let deaths = h
            .events
            .iter()
            .filter(|e| **e == GameEvent::PlayerDestroyed)
            .count();
        assert_eq!(deaths, 1);

        let before = craft.rect();
        let input = FixedInput::new(Vec2::new(1.0, 0.0), Buttons::none().with(Button::Fire));
        h.tick(&mut craft, input);
        assert_eq!(craft.rect(), before);
        assert!(craft.explosion().is_alive());
        assert_eq!(craft.explosion().center(), before.center());
        assert_eq!(craft.bullets().len(), 3);
        assert_eq!(craft.bullets()[0].rect().x, bullet_x + BULLET_SPEED);
    }

    #[test]
    fn test_respawn_restores_control() {
        let mut h = Harness::new();
        let mut craft = Craft::new(FIELD);
        craft.destroy(&mut h.events);
        craft.respawn();
        assert!(craft.is_alive());
        assert!(!craft.explosion().is_alive());
        assert_eq!(craft.action(), CraftAction::Idle);
        assert_eq!(craft.rect().x, 16);
    }

    proptest! {
        #[test]
        fn prop_craft_stays_in_playfield(
            x in -100i32..500,
            y in -100i32..400,
            dx in -1.0f32..=1.0,
            dy in -1.0f32..=1.0,
            ticks in 1usize..40,
        ) {
            let mut h = Harness::new();
            let mut craft = Craft::new(FIELD);
            craft.rect.set_top_left(IVec2::new(x, y));
            let input = FixedInput::new(Vec2::new(dx, dy), Buttons::none());
            for _ in 0..ticks {
                h.tick(&mut craft, input);
                let r = craft.rect();
                prop_assert!(r.x >= 0 && r.x <= PLAYFIELD_WIDTH - CRAFT_WIDTH);
                prop_assert!(r.y >= 0 && r.y <= PLAYFIELD_HEIGHT - CRAFT_HEIGHT);
            }
        }
    }
}
