//! Sprite-sheet rendering interface
//!
//! The simulation only ever blits rectangular sheet regions onto an
//! off-screen back buffer; the window/upscale backend lives outside the core.

pub mod font;
pub mod recording;

use std::fmt;
use std::path::{Path, PathBuf};

pub use font::BitmapFont;
pub use recording::{DrawCall, RecordingRenderer};

use crate::sim::Rect;

/// Registered sprite sheets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SheetId {
    Background,
    Craft,
    Bullets,
    Asteroids,
    Explosion,
    PowerUps,
    Font,
}

impl SheetId {
    pub const ALL: [SheetId; 7] = [
        SheetId::Background,
        SheetId::Craft,
        SheetId::Bullets,
        SheetId::Asteroids,
        SheetId::Explosion,
        SheetId::PowerUps,
        SheetId::Font,
    ];

    /// Image file name inside the asset directory
    pub fn file_name(&self) -> &'static str {
        match self {
            SheetId::Background => "background.png",
            SheetId::Craft => "pxplayer.png",
            SheetId::Bullets => "bullets.png",
            SheetId::Asteroids => "asteroids.png",
            SheetId::Explosion => "explosion.png",
            SheetId::PowerUps => "powerups.png",
            SheetId::Font => "font.png",
        }
    }

    pub fn path_in(&self, assets_dir: &Path) -> PathBuf {
        assets_dir.join(self.file_name())
    }
}

/// Renderer failures
#[derive(Debug)]
pub enum RenderError {
    /// Image file could not be found or opened
    MissingAsset { path: PathBuf },
    /// Draw or lookup on a sheet that was never registered
    UnknownSheet(SheetId),
    /// Backend-specific failure (surface lost, decode error, ...)
    Backend(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingAsset { path } => write!(f, "missing asset: {}", path.display()),
            Self::UnknownSheet(sheet) => write!(f, "sprite sheet not registered: {sheet:?}"),
            Self::Backend(msg) => write!(f, "renderer backend error: {msg}"),
        }
    }
}

impl std::error::Error for RenderError {}

/// Back-buffer blitter
pub trait Renderer {
    /// Load an image and bind it to `sheet`
    fn register_image(&mut self, sheet: SheetId, path: &Path) -> Result<(), RenderError>;

    /// Blit `src` of `sheet` onto `dest` of the back buffer
    fn draw(&mut self, sheet: SheetId, src: Rect, dest: Rect);

    /// Clear the back buffer
    fn cls(&mut self);

    /// Upscale and present the back buffer
    fn draw_to_screen(&mut self);
}

/// Register every sheet from `assets_dir`
pub fn register_all(renderer: &mut dyn Renderer, assets_dir: &Path) -> Result<(), RenderError> {
    for sheet in SheetId::ALL {
        renderer.register_image(sheet, &sheet.path_in(assets_dir))?;
    }
    log::info!("Registered {} sprite sheets from {}", SheetId::ALL.len(), assets_dir.display());
    Ok(())
}
