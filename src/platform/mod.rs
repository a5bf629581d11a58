//! Platform abstraction layer
//!
//! Handles the boundary between the host and the simulation:
//! - Input events folded into a direction/button reading
//! - Fixed-rate frame pacing

pub mod input;
pub mod time;

pub use input::{Button, Buttons, Controller, FixedInput, Input, Key, RawEvent};
pub use time::FrameClock;
