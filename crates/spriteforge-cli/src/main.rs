//! SpriteForge CLI - procedural platformer sprite generation.
//!
//! A single no-argument invocation generates every sprite frame and the
//! review contact sheet. There are no flags and no configuration inputs;
//! any failure aborts the run with a nonzero exit status.

use clap::Parser;
use std::process::ExitCode;

use spriteforge_cli::commands;

/// SpriteForge - Procedural Platformer Sprite Generator
#[derive(Parser)]
#[command(name = "spriteforge")]
#[command(author, version, about, long_about = None)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    match commands::generate::run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
