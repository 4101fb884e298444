//! SpriteForge CLI library.
//!
//! The binary is a thin wrapper: it parses no generation flags and runs
//! the full sprite pipeline to completion with human-readable progress.

pub mod commands;
