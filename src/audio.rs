//! Sound effects and music
//!
//! The simulation raises sound requests through `SoundManager`. `AudioManager`
//! applies volume settings and forwards to a pluggable output sink.

use std::path::{Path, PathBuf};

use crate::settings::Settings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Craft volley
    Fire,
    /// Asteroid destroyed
    EnemyExplode,
    /// Craft destroyed
    PlayerExplode,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 3] = [
        SoundEffect::Fire,
        SoundEffect::EnemyExplode,
        SoundEffect::PlayerExplode,
    ];

    /// Sample file inside the asset directory
    pub fn file_name(&self) -> &'static str {
        match self {
            SoundEffect::Fire => "sounds/Retro_8-Bit_Game-Gun_Laser_Weapon_Shoot_Beam_07.wav",
            SoundEffect::EnemyExplode => "sounds/Retro_8-Bit_Game-Bomb_Explosion_08.wav",
            SoundEffect::PlayerExplode => "sounds/Retro_8-Bit_Game-Bomb_Explosion_02.wav",
        }
    }

    /// Per-effect gain before settings are applied
    pub fn base_volume(&self) -> f32 {
        match self {
            SoundEffect::Fire => 0.5,
            SoundEffect::EnemyExplode | SoundEffect::PlayerExplode => 1.0,
        }
    }
}

/// Looping background track
pub const MUSIC_FILE: &str = "sounds/space-asteroids.ogg";

/// Fire-and-forget sound requests
pub trait SoundManager {
    fn play(&mut self, effect: SoundEffect);

    /// Start the looping music track
    fn start_music(&mut self) {}
}

/// Output device behind `AudioManager`
pub trait AudioSink {
    fn play_sample(&mut self, path: &Path, volume: f32);
    fn play_music(&mut self, path: &Path, volume: f32);
}

/// Audio manager for the game
pub struct AudioManager {
    sink: Option<Box<dyn AudioSink>>,
    assets_dir: PathBuf,
    master_volume: f32,
    sfx_volume: f32,
    music_volume: f32,
    muted: bool,
}

impl AudioManager {
    pub fn new(sink: Option<Box<dyn AudioSink>>, assets_dir: impl Into<PathBuf>) -> Self {
        if sink.is_none() {
            log::warn!("No audio device - audio disabled");
        }
        Self {
            sink,
            assets_dir: assets_dir.into(),
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.6,
            muted: false,
        }
    }

    /// Manager configured from settings
    pub fn from_settings(sink: Option<Box<dyn AudioSink>>, settings: &Settings) -> Self {
        let mut audio = Self::new(sink, settings.assets_dir.clone());
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_music_volume(settings.music_volume);
        audio.set_muted(settings.muted);
        audio
    }

    /// Manager with no output device
    pub fn silent() -> Self {
        Self {
            sink: None,
            assets_dir: PathBuf::new(),
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.6,
            muted: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Set music volume (0.0 - 1.0)
    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self, channel: f32) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * channel
        }
    }

    /// Final gain for `effect`
    pub fn effect_volume(&self, effect: SoundEffect) -> f32 {
        self.effective_volume(self.sfx_volume) * effect.base_volume()
    }
}

impl SoundManager for AudioManager {
    fn play(&mut self, effect: SoundEffect) {
        let vol = self.effect_volume(effect);
        if vol <= 0.0 {
            return;
        }
        let path = self.assets_dir.join(effect.file_name());
        if let Some(sink) = self.sink.as_mut() {
            sink.play_sample(&path, vol);
        }
    }

    fn start_music(&mut self) {
        let vol = self.effective_volume(self.music_volume);
        if vol <= 0.0 {
            return;
        }
        let path = self.assets_dir.join(MUSIC_FILE);
        if let Some(sink) = self.sink.as_mut() {
            log::info!("Starting music {}", path.display());
            sink.play_music(&path, vol);
        }
    }
}

/// Records requests instead of playing them
#[derive(Debug, Default, Clone)]
pub struct RecordingSounds {
    pub played: Vec<SoundEffect>,
    pub music_started: bool,
}

impl RecordingSounds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, effect: SoundEffect) -> usize {
        self.played.iter().filter(|&&e| e == effect).count()
    }
}

impl SoundManager for RecordingSounds {
    fn play(&mut self, effect: SoundEffect) {
        self.played.push(effect);
    }

    fn start_music(&mut self) {
        self.music_started = true;
    }
}
