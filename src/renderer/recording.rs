//! Headless renderer that records draw calls
//!
//! Used by the native runner and by tests to observe what a phase draws.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::{RenderError, Renderer, SheetId};
use crate::sim::Rect;

/// A single recorded blit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCall {
    pub sheet: SheetId,
    pub src: Rect,
    pub dest: Rect,
}

/// Renderer that keeps the current back buffer as a list of blits
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    registered: BTreeMap<SheetId, PathBuf>,
    calls: Vec<DrawCall>,
    /// Require registered image files to exist on disk
    check_files: bool,
    frames_presented: u64,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail registration when the image file is missing
    pub fn with_file_checks(mut self) -> Self {
        self.check_files = true;
        self
    }

    /// Blits issued since the last `cls`
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Blits on one sheet since the last `cls`
    pub fn calls_for(&self, sheet: SheetId) -> impl Iterator<Item = &DrawCall> {
        self.calls.iter().filter(move |c| c.sheet == sheet)
    }

    pub fn is_registered(&self, sheet: SheetId) -> bool {
        self.registered.contains_key(&sheet)
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }
}

impl Renderer for RecordingRenderer {
    fn register_image(&mut self, sheet: SheetId, path: &Path) -> Result<(), RenderError> {
        if self.check_files && !path.is_file() {
            return Err(RenderError::MissingAsset {
                path: path.to_path_buf(),
            });
        }
        self.registered.insert(sheet, path.to_path_buf());
        Ok(())
    }

    fn draw(&mut self, sheet: SheetId, src: Rect, dest: Rect) {
        if !self.registered.contains_key(&sheet) {
            log::warn!("{}", RenderError::UnknownSheet(sheet));
        }
        self.calls.push(DrawCall { sheet, src, dest });
    }

    fn cls(&mut self) {
        self.calls.clear();
    }

    fn draw_to_screen(&mut self) {
        self.frames_presented += 1;
    }
}
