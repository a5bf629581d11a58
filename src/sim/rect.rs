//! Integer rectangle geometry for sprites and hitboxes
//!
//! All positions are in back-buffer pixels with the origin at the top-left
//! and y growing downward.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned integer rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    /// One past the last column covered
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// One past the last row covered
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    #[inline]
    pub fn top_left(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    #[inline]
    pub fn center(&self) -> IVec2 {
        IVec2::new(self.x + self.w / 2, self.y + self.h / 2)
    }

    /// Move the top-left corner, keeping the size
    pub fn set_top_left(&mut self, pos: IVec2) {
        self.x = pos.x;
        self.y = pos.y;
    }

    /// Move so the center lands on `center`
    pub fn set_center(&mut self, center: IVec2) {
        self.x = center.x - self.w / 2;
        self.y = center.y - self.h / 2;
    }

    /// Translate in place
    pub fn move_by(&mut self, delta: IVec2) {
        self.x += delta.x;
        self.y += delta.y;
    }

    /// Same size, different origin
    pub fn with_top_left(self, pos: IVec2) -> Self {
        Self::new(pos.x, pos.y, self.w, self.h)
    }

    /// True if the rectangles share at least one pixel
    pub fn intersects(&self, other: &Rect) -> bool {
        self.w > 0
            && self.h > 0
            && other.w > 0
            && other.h > 0
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects_overlap_and_touching() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(a.intersects(&Rect::new(5, 5, 10, 10)));
        // Edges that only touch do not overlap
        assert!(!a.intersects(&Rect::new(10, 0, 10, 10)));
        assert!(!a.intersects(&Rect::new(0, 10, 10, 10)));
    }

    #[test]
    fn test_intersects_empty_rect() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!a.intersects(&Rect::new(2, 2, 0, 4)));
    }

    #[test]
    fn test_center_round_trip() {
        let mut r = Rect::new(0, 0, 32, 14);
        r.set_center(IVec2::new(100, 50));
        assert_eq!(r.center(), IVec2::new(100, 50));
        assert_eq!(r.top_left(), IVec2::new(84, 43));
    }
}
