//! Rock Runner - A side-scrolling asteroid shooter
//!
//! Core modules:
//! - `sim`: Fixed-tick simulation (animation, entities, collisions, waves)
//! - `phase`: Game-phase state machine (Load -> GetReady -> Play)
//! - `engine`: Fixed-rate loop driving the active phase
//! - `renderer`: Sprite-sheet renderer interface and bitmap font
//! - `platform`: Input abstraction and frame pacing
//! - `audio`: Sound effect interface and mixer
//! - `settings`: Data-driven configuration

pub mod audio;
pub mod engine;
pub mod phase;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use engine::{Backend, Engine};
pub use phase::GamePhase;
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 30;

    /// Back-buffer (playfield) dimensions
    pub const PLAYFIELD_WIDTH: i32 = 320;
    pub const PLAYFIELD_HEIGHT: i32 = 256;

    /// Craft sprite cell and hitbox
    pub const CRAFT_WIDTH: i32 = 32;
    pub const CRAFT_HEIGHT: i32 = 24;
    pub const CRAFT_HITBOX_HEIGHT: i32 = 14;
    /// Pixels per tick at full stick deflection
    pub const CRAFT_SPEED: f32 = 2.0;
    /// Ticks each craft animation frame is held
    pub const CRAFT_FRAME_DELAY: u32 = 3;
    /// Held-fire ticks between volleys while bullets are in flight
    pub const FIRE_COOLDOWN_TICKS: u32 = 5;
    /// Horizontal offset of the muzzle from the craft's left edge
    pub const MUZZLE_OFFSET_X: i32 = 22;

    /// Bullet hitbox
    pub const BULLET_WIDTH: i32 = 11;
    pub const BULLET_HEIGHT: i32 = 6;
    /// Horizontal bullet speed (pixels/tick)
    pub const BULLET_SPEED: i32 = 3;
    /// Vertical drift of the diagonal bullets (pixels/tick)
    pub const BULLET_DRIFT: i32 = 1;

    /// Ticks between asteroid spawns
    pub const ASTEROID_SPAWN_INTERVAL: u32 = 300;
    /// Asteroid horizontal speed range (pixels/tick, inclusive)
    pub const ASTEROID_MIN_SPEED: i32 = 1;
    pub const ASTEROID_MAX_SPEED: i32 = 5;

    /// One power-up per this many destroyed asteroids, on average
    pub const POWERUP_ODDS: u32 = 20;
    pub const POWERUP_SIZE: i32 = 16;
    /// Ticks per half of the power-up bobbing cycle
    pub const POWERUP_BOB_TICKS: u32 = 10;

    /// Explosion cell size and sequence length
    pub const EXPLOSION_SIZE: i32 = 32;
    pub const EXPLOSION_STEPS: usize = 16;

    /// Phase timings (ticks)
    pub const GET_READY_TICKS: u32 = 100;
    pub const DEATH_GRACE_TICKS: u32 = 100;

    /// Score display width
    pub const SCORE_DIGITS: usize = 8;
}
