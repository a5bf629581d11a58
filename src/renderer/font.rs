//! Fixed-cell bitmap font drawn from the font sheet

use glam::IVec2;

use super::{Renderer, SheetId};
use crate::consts::SCORE_DIGITS;
use crate::sim::Rect;

/// Glyph order on the font sheet, left to right, top to bottom
const GLYPHS: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Glyphs per sheet row
const GLYPHS_PER_ROW: i32 = 16;

/// Largest score that fits the display
pub const MAX_DISPLAY_SCORE: u32 = 99_999_999;

/// 8x8 monospaced font
#[derive(Debug, Clone, Copy)]
pub struct BitmapFont {
    cell: i32,
}

impl Default for BitmapFont {
    fn default() -> Self {
        Self { cell: 8 }
    }
}

impl BitmapFont {
    pub fn cell_size(&self) -> i32 {
        self.cell
    }

    /// Sheet region for `c`, or None for blanks and unsupported characters
    pub fn glyph(&self, c: char) -> Option<Rect> {
        let index = GLYPHS.find(c.to_ascii_uppercase())? as i32;
        Some(Rect::new(
            (index % GLYPHS_PER_ROW) * self.cell,
            (index / GLYPHS_PER_ROW) * self.cell,
            self.cell,
            self.cell,
        ))
    }

    /// On-screen width of `text`
    pub fn text_width(&self, text: &str) -> i32 {
        text.chars().count() as i32 * self.cell
    }

    /// Draw `text` with its top-left corner at `pos`
    pub fn draw_text(&self, renderer: &mut dyn Renderer, text: &str, pos: IVec2) {
        for (i, c) in text.chars().enumerate() {
            if let Some(src) = self.glyph(c) {
                let dest = Rect::new(pos.x + i as i32 * self.cell, pos.y, self.cell, self.cell);
                renderer.draw(SheetId::Font, src, dest);
            }
        }
    }

    /// Draw `text` horizontally centered within `width`
    pub fn draw_centered(&self, renderer: &mut dyn Renderer, text: &str, width: i32, y: i32) {
        let x = (width - self.text_width(text)) / 2;
        self.draw_text(renderer, text, IVec2::new(x, y));
    }
}

/// Zero-padded score numeral, saturating at the display width
pub fn format_score(score: u32) -> String {
    format!("{:0width$}", score.min(MAX_DISPLAY_SCORE), width = SCORE_DIGITS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RecordingRenderer;

    #[test]
    fn test_format_score_pads_to_eight_digits() {
        assert_eq!(format_score(0), "00000000");
        assert_eq!(format_score(107), "00000107");
        assert_eq!(format_score(u32::MAX), "99999999");
    }

    #[test]
    fn test_glyph_layout() {
        let font = BitmapFont::default();
        assert_eq!(font.glyph('0'), Some(Rect::new(0, 0, 8, 8)));
        assert_eq!(font.glyph('G'), Some(Rect::new(0, 8, 8, 8)));
        assert_eq!(font.glyph('g'), font.glyph('G'));
        assert_eq!(font.glyph(' '), None);
    }

    #[test]
    fn test_draw_text_skips_blanks() {
        let font = BitmapFont::default();
        let mut r = RecordingRenderer::new();
        font.draw_text(&mut r, "GET READY", IVec2::new(10, 20));
        assert_eq!(r.calls().len(), 8);
        // Letters after the blank keep their column
        assert_eq!(r.calls()[3].dest.x, 10 + 4 * 8);
    }
}
