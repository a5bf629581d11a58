//! Tick-based sprite animation
//!
//! A `Frame` pairs a sprite-sheet region with a collision rectangle and a
//! hold duration. An `Action` walks an ordered list of frames and holds on the
//! last one. Frames live in an arena owned by the entity's `Animation`, so
//! several actions can share the same frame records (the craft's ascend and
//! recover-from-ascend sequences reuse the same poses).

use glam::IVec2;

use super::rect::Rect;

/// Index of a frame inside its owning `Animation`
pub type FrameId = usize;

/// One pose of an animation
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Collision rectangle, repositioned by the owner every tick
    pub collision: Rect,
    /// Sprite-sheet source region
    pub src: Rect,
    /// Ticks to hold this frame before advancing
    pub delay: u32,
}

impl Frame {
    pub fn new(collision: Rect, src: Rect, delay: u32) -> Self {
        Self {
            collision,
            src,
            delay,
        }
    }
}

/// Play-once frame sequencer
#[derive(Debug, Clone)]
pub struct Action {
    frames: Vec<FrameId>,
    tick: u32,
    index: usize,
}

impl Action {
    pub fn new(frames: Vec<FrameId>) -> Self {
        assert!(!frames.is_empty(), "an action needs at least one frame");
        Self {
            frames,
            tick: 0,
            index: 0,
        }
    }

    /// Return the frame under the cursor and advance the cursor.
    ///
    /// The frame is held until the tick counter exceeds its delay; the index
    /// then moves on by one, clamped to the last frame.
    pub fn next_frame(&mut self, sheet: &[Frame]) -> FrameId {
        let id = self.frames[self.index];
        if self.tick > sheet[id].delay {
            self.tick = 0;
            self.index = (self.index + 1).min(self.frames.len() - 1);
        }
        self.tick += 1;
        id
    }

    /// Rewind to the first frame
    pub fn reset(&mut self) {
        self.tick = 0;
        self.index = 0;
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn first(&self) -> FrameId {
        self.frames[0]
    }

    /// True once the last frame has been shown for its full delay
    pub fn is_done(&self, sheet: &[Frame]) -> bool {
        let last = self.frames.len() - 1;
        self.index == last && self.tick > sheet[self.frames[last]].delay
    }
}

/// Frame arena plus the actions that sequence it.
///
/// Exactly one action is active per tick; the others are rewound so they
/// restart from their first frame when selected again.
#[derive(Debug, Clone)]
pub struct Animation {
    frames: Vec<Frame>,
    actions: Vec<Action>,
    active: usize,
    current: FrameId,
}

impl Animation {
    pub fn new(frames: Vec<Frame>, actions: Vec<Action>) -> Self {
        assert!(!actions.is_empty(), "an animation needs at least one action");
        debug_assert!(
            actions
                .iter()
                .all(|a| a.frames.iter().all(|&id| id < frames.len())),
            "action references a frame outside the arena"
        );
        let current = actions[0].first();
        Self {
            frames,
            actions,
            active: 0,
            current,
        }
    }

    /// A single action that plays every frame in order
    pub fn sequence(frames: Vec<Frame>) -> Self {
        let ids = (0..frames.len()).collect();
        Self::new(frames, vec![Action::new(ids)])
    }

    /// Advance `action` by one tick and rewind every other action
    pub fn advance(&mut self, action: usize) -> FrameId {
        self.active = action;
        self.current = self.actions[action].next_frame(&self.frames);
        for (i, other) in self.actions.iter_mut().enumerate() {
            if i != action {
                other.reset();
            }
        }
        self.current
    }

    /// Move the current frame's collision rectangle to `pos`
    pub fn place(&mut self, pos: IVec2) {
        self.frames[self.current].collision.set_top_left(pos);
    }

    /// Center the current frame's collision rectangle on `center`
    pub fn place_center(&mut self, center: IVec2) {
        self.frames[self.current].collision.set_center(center);
    }

    /// Rewind all actions and show the first frame of action 0
    pub fn restart(&mut self) {
        for action in &mut self.actions {
            action.reset();
        }
        self.active = 0;
        self.current = self.actions[0].first();
    }

    pub fn current(&self) -> &Frame {
        &self.frames[self.current]
    }

    pub fn current_id(&self) -> FrameId {
        self.current
    }

    pub fn action(&self, index: usize) -> &Action {
        &self.actions[index]
    }

    pub fn frame(&self, id: FrameId) -> &Frame {
        &self.frames[id]
    }

    /// True once the active action has played out
    pub fn is_done(&self) -> bool {
        self.actions[self.active].is_done(&self.frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn frames(n: usize, delay: u32) -> Vec<Frame> {
        (0..n)
            .map(|i| {
                Frame::new(
                    Rect::new(0, 0, 8, 8),
                    Rect::new(i as i32 * 8, 0, 8, 8),
                    delay,
                )
            })
            .collect()
    }

    #[test]
    fn test_single_frame_is_static() {
        let sheet = frames(1, 0);
        let mut action = Action::new(vec![0]);
        for _ in 0..20 {
            assert_eq!(action.next_frame(&sheet), 0);
            assert_eq!(action.index(), 0);
        }
    }

    #[test]
    fn test_holds_each_frame_for_delay() {
        let sheet = frames(3, 2);
        let mut action = Action::new(vec![0, 1, 2]);
        let shown: Vec<FrameId> = (0..12).map(|_| action.next_frame(&sheet)).collect();
        assert_eq!(shown, vec![0, 0, 0, 0, 1, 1, 1, 2, 2, 2, 2, 2]);
    }

    #[test]
    fn test_reset_twice_equals_once() {
        let sheet = frames(4, 1);
        let mut action = Action::new(vec![0, 1, 2, 3]);
        for _ in 0..7 {
            action.next_frame(&sheet);
        }
        action.reset();
        assert_eq!((action.index(), action.tick()), (0, 0));
        action.reset();
        assert_eq!((action.index(), action.tick()), (0, 0));
    }

    #[test]
    #[should_panic]
    fn test_empty_action_panics() {
        let _ = Action::new(Vec::new());
    }

    #[test]
    fn test_animation_rewinds_dormant_actions() {
        let sheet = frames(3, 0);
        let mut anim = Animation::new(sheet, vec![Action::new(vec![0]), Action::new(vec![1, 2])]);
        for _ in 0..5 {
            anim.advance(1);
        }
        assert_eq!(anim.action(1).index(), 1);
        anim.advance(0);
        assert_eq!(anim.action(1).index(), 0);
        assert_eq!(anim.action(1).tick(), 0);
    }

    #[test]
    fn test_shared_frame_placement() {
        // Two actions share frame 1; placing through either moves the same rect
        let sheet = frames(2, 0);
        let mut anim = Animation::new(sheet, vec![Action::new(vec![1]), Action::new(vec![1, 0])]);
        anim.advance(0);
        anim.place(IVec2::new(40, 12));
        assert_eq!(anim.frame(1).collision.top_left(), IVec2::new(40, 12));
        anim.advance(1);
        assert_eq!(anim.current_id(), 1);
        assert_eq!(anim.current().collision.top_left(), IVec2::new(40, 12));
    }

    #[test]
    fn test_is_done_after_last_frame_delay() {
        let mut anim = Animation::sequence(frames(2, 1));
        let mut ticks = 0;
        while !anim.is_done() {
            anim.advance(0);
            ticks += 1;
            assert!(ticks < 100);
        }
        assert_eq!(anim.current_id(), 1);
    }

    proptest! {
        #[test]
        fn prop_holds_on_last_frame(n in 1usize..10, delay in 0u32..6, extra in 0usize..50) {
            let sheet = frames(n, delay);
            let mut action = Action::new((0..n).collect());
            for _ in 0..n * (delay as usize + 1) {
                action.next_frame(&sheet);
            }
            prop_assert_eq!(action.index(), n - 1);
            for _ in 0..extra {
                prop_assert_eq!(action.next_frame(&sheet), n - 1);
            }
            prop_assert_eq!(action.index(), n - 1);
        }
    }
}
