//! SpriteForge Sprite Generation Backend
//!
//! Procedurally generates the fixed pixel-art sprite set for a 2D
//! platformer: player, slime enemy, coin, goal flag, ground/platform
//! tiles, and background decorations, each frame placed pixel by pixel
//! from literal pose tables. One PNG is written per animation frame plus
//! a 4x-scaled review contact sheet.
//!
//! # Determinism
//!
//! There is no randomness anywhere: drawers are pure functions of
//! `(frame, animation)`, and the PNG encoder uses fixed compression
//! settings, so a run is byte-reproducible for a given code revision.
//!
//! # Example
//!
//! ```no_run
//! use spriteforge_backend_sprite::{generate_all, FileSink};
//!
//! let mut sink = FileSink::new("assets/sprites", "sprites-review.png");
//! let set = generate_all(&mut sink).unwrap();
//! println!("{} frames generated", set.frame_count());
//! ```

pub mod canvas;
pub mod color;
pub mod drawers;
pub mod generate;
pub mod palette;
pub mod png;
pub mod roster;
pub mod sheet;
pub mod sink;

// Re-export main types for convenience
pub use canvas::Raster;
pub use color::Color;
pub use generate::{generate_all, generate_entity, GenerateError, SpriteSet};
pub use palette::Palette;
pub use png::{PngConfig, PngError};
pub use roster::{roster, AnimationSpec, EntityDesc, EntityKind};
pub use sink::{FileSink, SinkError, SpriteSink};
