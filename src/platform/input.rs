//! Input abstraction
//!
//! Hosts translate device events into `RawEvent`s; the `Controller` folds the
//! held keys into a normalized direction and a button set once per tick, so
//! the reading is stable for the whole update.

use std::collections::HashSet;

use glam::Vec2;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Fire,
    Alt,
    Start,
    Escape,
    Other,
}

/// Raw host events, drained once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawEvent {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

/// Logical buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Fire,
    Alt,
    Start,
}

impl Button {
    fn bit(self) -> u8 {
        match self {
            Button::Fire => 1 << 0,
            Button::Alt => 1 << 1,
            Button::Start => 1 << 2,
        }
    }
}

/// Snapshot of pressed buttons
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Buttons(u8);

impl Buttons {
    pub fn none() -> Self {
        Self(0)
    }

    pub fn with(mut self, button: Button) -> Self {
        self.0 |= button.bit();
        self
    }

    pub fn is_pressed(&self, button: Button) -> bool {
        self.0 & button.bit() != 0
    }
}

/// Per-tick input reading consumed by the simulation
pub trait Input {
    /// Movement intent, each component in [-1, 1], length at most 1
    fn get_direction(&self) -> Vec2;
    fn get_buttons(&self) -> Buttons;
}

/// Keyboard-style controller
#[derive(Debug, Clone, Default)]
pub struct Controller {
    held: HashSet<Key>,
    direction: Vec2,
    buttons: Buttons,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Latch the held keys into this tick's reading
    pub fn on_event(&mut self) {
        let axis = |neg: Key, pos: Key| {
            let mut v = 0.0;
            if self.held.contains(&neg) {
                v -= 1.0;
            }
            if self.held.contains(&pos) {
                v += 1.0;
            }
            v
        };
        self.direction =
            Vec2::new(axis(Key::Left, Key::Right), axis(Key::Up, Key::Down)).clamp_length_max(1.0);

        let mut buttons = Buttons::none();
        for (key, button) in [
            (Key::Fire, Button::Fire),
            (Key::Alt, Button::Alt),
            (Key::Start, Button::Start),
        ] {
            if self.held.contains(&key) {
                buttons = buttons.with(button);
            }
        }
        self.buttons = buttons;
    }
}

impl Input for Controller {
    fn get_direction(&self) -> Vec2 {
        self.direction
    }

    fn get_buttons(&self) -> Buttons {
        self.buttons
    }
}

/// Fixed reading, handy for scripted runs
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedInput {
    pub direction: Vec2,
    pub buttons: Buttons,
}

impl FixedInput {
    pub fn new(direction: Vec2, buttons: Buttons) -> Self {
        Self { direction, buttons }
    }

    pub fn idle() -> Self {
        Self::default()
    }
}

impl Input for FixedInput {
    fn get_direction(&self) -> Vec2 {
        self.direction
    }

    fn get_buttons(&self) -> Buttons {
        self.buttons
    }
}
