//! One-shot explosion owned by the craft and by each asteroid

use glam::IVec2;

use super::action::{Animation, Frame};
use super::events::EventQueue;
use super::object::{GameObject, TickContext};
use super::rect::Rect;
use crate::consts::{EXPLOSION_SIZE, EXPLOSION_STEPS};
use crate::renderer::{Renderer, SheetId};

/// Explosion cells per sheet row
const CELLS_PER_ROW: usize = 8;
const FRAME_DELAY: u32 = 1;

/// Edge length of step `i`: grows for the first half, shrinks for the second
fn step_size(i: usize) -> i32 {
    let half = EXPLOSION_STEPS / 2;
    let grow = if i < half { i + 1 } else { EXPLOSION_STEPS - i };
    (EXPLOSION_SIZE * grow as i32) / half as i32
}

fn explosion_frames() -> Vec<Frame> {
    (0..EXPLOSION_STEPS)
        .map(|i| {
            let size = step_size(i);
            let inset = (EXPLOSION_SIZE - size) / 2;
            let cell_x = (i % CELLS_PER_ROW) as i32 * EXPLOSION_SIZE;
            let cell_y = (i / CELLS_PER_ROW) as i32 * EXPLOSION_SIZE;
            Frame::new(
                Rect::new(0, 0, size, size),
                Rect::new(cell_x + inset, cell_y + inset, size, size),
                FRAME_DELAY,
            )
        })
        .collect()
}

#[derive(Debug, Clone)]
pub struct Explosion {
    anim: Animation,
    center: IVec2,
    playing: bool,
}

impl Default for Explosion {
    fn default() -> Self {
        Self::new()
    }
}

impl Explosion {
    pub fn new() -> Self {
        Self {
            anim: Animation::sequence(explosion_frames()),
            center: IVec2::ZERO,
            playing: false,
        }
    }

    /// Play from the first step at `center`
    pub fn start(&mut self, center: IVec2) {
        self.anim.restart();
        self.center = center;
        self.playing = true;
        self.anim.place_center(center);
    }

    /// Follow a moving owner
    pub fn set_center(&mut self, center: IVec2) {
        self.center = center;
    }

    /// Cut the sequence short
    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn center(&self) -> IVec2 {
        self.center
    }

    pub fn step(&self) -> usize {
        self.anim.current_id()
    }

    /// The last step stays on screen for one update before the sequence ends
    fn advance(&mut self) {
        if !self.playing {
            return;
        }
        if self.anim.is_done() {
            self.playing = false;
            return;
        }
        self.anim.advance(0);
        self.anim.place_center(self.center);
    }
}

impl GameObject for Explosion {
    fn update(&mut self, _ctx: &mut TickContext<'_>) {
        self.advance();
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        if self.playing {
            let frame = self.anim.current();
            renderer.draw(SheetId::Explosion, frame.src, frame.collision);
        }
    }

    fn rect(&self) -> Rect {
        self.anim.current().collision
    }

    fn is_alive(&self) -> bool {
        self.playing
    }

    fn destroy(&mut self, _events: &mut EventQueue) {
        self.stop();
    }

    fn collide(&mut self, _other: &dyn GameObject) -> bool {
        false
    }
}
