//! Fixed-tick simulation
//!
//! All gameplay logic lives here:
//! - One update per tick, no wall-clock time
//! - Randomness only through the seeded RNG in the tick context
//! - Drawing goes through the `Renderer` trait, never a concrete backend

pub mod action;
pub mod asteroid;
pub mod background;
pub mod bullet;
pub mod craft;
pub mod events;
pub mod explosion;
pub mod object;
pub mod powerup;
pub mod rect;
pub mod timer;

pub use action::{Action, Animation, Frame, FrameId};
pub use asteroid::{Asteroid, AsteroidWave, Tier};
pub use background::Background;
pub use bullet::{Bullet, BulletKind};
pub use craft::{Craft, CraftAction};
pub use events::{EventQueue, GameEvent};
pub use explosion::Explosion;
pub use object::{GameObject, TickContext};
pub use powerup::{NoEffect, PickupEffect, PowerUp, PowerUpKind};
pub use rect::Rect;
pub use timer::Timer;
