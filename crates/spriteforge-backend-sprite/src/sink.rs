//! Image sink: where finished rasters go.
//!
//! The generation pipeline hands every raster to a [`SpriteSink`]; the
//! file-backed implementation derives deterministic paths
//! (`sprites_root/entity/animation_index.png` for frames,
//! `sprites_root/entity/name.png` for stills) and encodes with the
//! deterministic PNG writer. Any write failure aborts the run; there is
//! no partial-output cleanup.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::canvas::Raster;
use crate::png::{self, PngConfig, PngError};

/// Errors from persisting rasters.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG error: {0}")]
    Png(#[from] PngError),
}

/// Destination for generated rasters.
pub trait SpriteSink {
    /// Persist one animation frame.
    fn write_frame(
        &mut self,
        entity: &str,
        animation: &str,
        frame: usize,
        raster: &Raster,
    ) -> Result<(), SinkError>;

    /// Persist one static still (tile or background element).
    fn write_still(&mut self, entity: &str, name: &str, raster: &Raster) -> Result<(), SinkError>;

    /// Persist the review contact sheet.
    fn write_sheet(&mut self, raster: &Raster) -> Result<(), SinkError>;
}

/// File-backed sink writing PNGs under a sprites root.
#[derive(Debug)]
pub struct FileSink {
    sprites_root: PathBuf,
    sheet_path: PathBuf,
    png: PngConfig,
}

impl FileSink {
    /// Create a sink writing frames under `sprites_root` and the contact
    /// sheet at `sheet_path`.
    pub fn new(sprites_root: impl Into<PathBuf>, sheet_path: impl Into<PathBuf>) -> Self {
        Self {
            sprites_root: sprites_root.into(),
            sheet_path: sheet_path.into(),
            png: PngConfig::default(),
        }
    }

    /// The sprites root directory.
    pub fn sprites_root(&self) -> &Path {
        &self.sprites_root
    }

    /// The contact sheet location.
    pub fn sheet_path(&self) -> &Path {
        &self.sheet_path
    }

    fn write_named(&self, entity: &str, file_name: &str, raster: &Raster) -> Result<(), SinkError> {
        let dir = self.sprites_root.join(entity);
        std::fs::create_dir_all(&dir)?;
        png::write_rgba(raster, &dir.join(file_name), &self.png)?;
        Ok(())
    }
}

impl SpriteSink for FileSink {
    fn write_frame(
        &mut self,
        entity: &str,
        animation: &str,
        frame: usize,
        raster: &Raster,
    ) -> Result<(), SinkError> {
        self.write_named(entity, &format!("{animation}_{frame}.png"), raster)
    }

    fn write_still(&mut self, entity: &str, name: &str, raster: &Raster) -> Result<(), SinkError> {
        self.write_named(entity, &format!("{name}.png"), raster)
    }

    fn write_sheet(&mut self, raster: &Raster) -> Result<(), SinkError> {
        if let Some(parent) = self.sheet_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        png::write_rgba(raster, &self.sheet_path, &self.png)?;
        Ok(())
    }
}
