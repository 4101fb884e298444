//! Procedural entity drawers.
//!
//! Each module paints one sprite subject onto a pre-allocated transparent
//! raster of the entity's native size. Drawers are pure: the same
//! `(frame, anim)` pair always produces identical pixels. Pose comes from
//! small per-animation offset tables indexed by `frame % len`, and parts
//! are painted back-to-front so later strokes occlude earlier ones.

pub mod bg;
pub mod coin;
pub mod goal;
pub mod player;
pub mod slime;
pub mod tiles;

use crate::canvas::Raster;
use crate::palette::Palette;

/// A drawer entry point: paint one frame of one animation.
pub type DrawFn = fn(&mut Raster, usize, &str, &Palette);
