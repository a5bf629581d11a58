//! Asset registration and world construction

use std::fmt;

use glam::IVec2;

use super::get_ready::GetReadyPhase;
use super::World;
use crate::renderer::{self, RenderError, Renderer};
use crate::settings::{Settings, SettingsError};

#[derive(Debug)]
pub enum LoadError {
    Render(RenderError),
    Settings(SettingsError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(e) => write!(f, "{e}"),
            Self::Settings(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(e) => Some(e),
            Self::Settings(e) => Some(e),
        }
    }
}

impl From<RenderError> for LoadError {
    fn from(e: RenderError) -> Self {
        Self::Render(e)
    }
}

impl From<SettingsError> for LoadError {
    fn from(e: SettingsError) -> Self {
        Self::Settings(e)
    }
}

/// Registers every sprite sheet, then hands a fresh world to GetReady
pub struct LoadPhase {
    world: World,
}

impl LoadPhase {
    pub fn new(renderer: &mut dyn Renderer, settings: &Settings) -> Result<Self, LoadError> {
        let field = settings.playfield()?;
        renderer::register_all(renderer, &settings.assets_dir)?;
        Ok(Self {
            world: World::new(IVec2::new(field.w, field.h), settings.seed),
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub(super) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn finish(self) -> GetReadyPhase {
        GetReadyPhase::new(self.world)
    }
}
