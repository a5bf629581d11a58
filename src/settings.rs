//! Game settings
//!
//! Loaded from a JSON file next to the binary. Missing fields take their
//! defaults; an unreadable or invalid file falls back to defaults entirely.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH, TICK_RATE};
use crate::sim::Rect;

/// Largest accepted buffer or screen edge (pixels)
pub const MAX_DIMENSION: u32 = 16_384;

/// Settings load/validation failures
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    /// Parsed but unusable value
    Invalid(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read settings: {e}"),
            Self::Parse(e) => write!(f, "malformed settings: {e}"),
            Self::Invalid(msg) => write!(f, "invalid settings: {msg}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Display ===
    /// Off-screen buffer the simulation draws into
    pub back_buffer_width: u32,
    pub back_buffer_height: u32,
    /// Window size the back buffer is upscaled to
    pub screen_width: u32,
    pub screen_height: u32,
    pub fullscreen: bool,

    // === Simulation ===
    /// Fixed ticks per second
    pub tick_rate: u32,
    /// RNG seed; a random one is drawn when absent
    pub seed: Option<u64>,
    /// Directory holding sprite sheets and sounds
    pub assets_dir: PathBuf,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    pub muted: bool,

    // === Headless runner ===
    /// Stop after this many ticks
    pub max_ticks: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            back_buffer_width: PLAYFIELD_WIDTH as u32,
            back_buffer_height: PLAYFIELD_HEIGHT as u32,
            screen_width: 640,
            screen_height: 512,
            fullscreen: true,

            tick_rate: TICK_RATE,
            seed: None,
            assets_dir: PathBuf::from("assets"),

            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.6,
            muted: false,

            max_ticks: None,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read and validate `path`
    pub fn read(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match Self::read(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.tick_rate == 0 {
            return Err(SettingsError::Invalid("tick_rate must be positive".into()));
        }
        let sizes = [
            ("back_buffer_width", self.back_buffer_width),
            ("back_buffer_height", self.back_buffer_height),
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
        ];
        if let Some((name, v)) = sizes
            .iter()
            .find(|(_, v)| *v == 0 || *v > MAX_DIMENSION)
        {
            return Err(SettingsError::Invalid(format!(
                "{name} must be within 1..={MAX_DIMENSION}, got {v}"
            )));
        }
        let volumes = [
            ("master_volume", self.master_volume),
            ("sfx_volume", self.sfx_volume),
            ("music_volume", self.music_volume),
        ];
        if let Some((name, v)) = volumes.iter().find(|(_, v)| !(0.0..=1.0).contains(v)) {
            return Err(SettingsError::Invalid(format!(
                "{name} must be within 0.0..=1.0, got {v}"
            )));
        }
        Ok(())
    }

    /// Back-buffer bounds in simulation coordinates
    pub fn playfield(&self) -> Result<Rect, SettingsError> {
        self.validate()?;
        let dimension = |name: &str, v: u32| {
            i32::try_from(v)
                .map_err(|_| SettingsError::Invalid(format!("{name} out of range: {v}")))
        };
        Ok(Rect::new(
            0,
            0,
            dimension("back_buffer_width", self.back_buffer_width)?,
            dimension("back_buffer_height", self.back_buffer_height)?,
        ))
    }

    /// Integer upscale factor from back buffer to screen
    pub fn scale(&self) -> u32 {
        (self.screen_width / self.back_buffer_width.max(1))
            .min(self.screen_height / self.back_buffer_height.max(1))
            .max(1)
    }
}
