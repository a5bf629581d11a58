//! Parallax star field
//!
//! Eight layers are cut from one tall strip sheet. Each layer scrolls at its
//! own rate and is drawn as two blits: the part from the scroll offset to the
//! sheet's right edge, then the wrap-around from the sheet's left edge.

use super::events::EventQueue;
use super::object::{GameObject, TickContext};
use super::rect::Rect;
use crate::renderer::{Renderer, SheetId};

pub const BACKGROUND_WIDTH: i32 = 512;
pub const BACKGROUND_HEIGHT: i32 = 256;

/// (sheet row, pixels per tick), back to front
const LAYERS: [(i32, f32); 8] = [
    (2048, 0.0),
    (768, 0.3),
    (1792, 0.3),
    (1536, 0.3),
    (1024, 0.5),
    (1280, 0.5),
    (512, 0.5),
    (256, 0.5),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer {
    pub sheet_y: i32,
    pub step: f32,
    pub scroll_x: f32,
}

impl Layer {
    fn new(sheet_y: i32, step: f32) -> Self {
        Self {
            sheet_y,
            step,
            scroll_x: 0.0,
        }
    }

    fn advance(&mut self) {
        self.scroll_x += self.step;
        if self.scroll_x > BACKGROUND_WIDTH as f32 {
            self.scroll_x = 0.0;
        }
    }

    fn offset(&self) -> i32 {
        self.scroll_x as i32
    }

    /// (src, dest) for the part left of the seam
    pub fn left_blit(&self) -> (Rect, Rect) {
        let offset = self.offset();
        let w = BACKGROUND_WIDTH - offset;
        (
            Rect::new(offset, self.sheet_y, w, BACKGROUND_HEIGHT),
            Rect::new(0, 0, w, BACKGROUND_HEIGHT),
        )
    }

    /// (src, dest) for the wrap-around right of the seam
    pub fn right_blit(&self) -> (Rect, Rect) {
        let offset = self.offset();
        (
            Rect::new(0, self.sheet_y, offset, BACKGROUND_HEIGHT),
            Rect::new(BACKGROUND_WIDTH - offset, 0, offset, BACKGROUND_HEIGHT),
        )
    }
}

#[derive(Debug, Clone)]
pub struct Background {
    layers: Vec<Layer>,
}

impl Default for Background {
    fn default() -> Self {
        Self::new()
    }
}

impl Background {
    pub fn new() -> Self {
        Self {
            layers: LAYERS
                .iter()
                .map(|&(sheet_y, step)| Layer::new(sheet_y, step))
                .collect(),
        }
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

impl GameObject for Background {
    fn update(&mut self, _ctx: &mut TickContext<'_>) {
        for layer in &mut self.layers {
            layer.advance();
        }
    }

    fn draw(&self, renderer: &mut dyn Renderer) {
        for layer in &self.layers {
            for (src, dest) in [layer.left_blit(), layer.right_blit()] {
                if dest.w > 0 {
                    renderer.draw(SheetId::Background, src, dest);
                }
            }
        }
    }

    fn rect(&self) -> Rect {
        Rect::new(0, 0, BACKGROUND_WIDTH, BACKGROUND_HEIGHT)
    }

    fn is_alive(&self) -> bool {
        true
    }

    fn destroy(&mut self, _events: &mut EventQueue) {}

    fn collide(&mut self, _other: &dyn GameObject) -> bool {
        false
    }
}
