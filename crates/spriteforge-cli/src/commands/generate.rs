//! Generate command implementation
//!
//! Runs the full sprite pipeline with colored per-entity progress.

use anyhow::{Context, Result};
use colored::Colorize;
use std::process::ExitCode;
use std::time::Instant;

use spriteforge_backend_sprite::{
    generate_entity, roster, sheet, FileSink, Palette, SpriteSet, SpriteSink,
};

/// Where animation frames and tiles land.
const SPRITES_ROOT: &str = "assets/sprites";
/// Where the review contact sheet lands.
const REVIEW_PATH: &str = "sprites-review.png";

/// Run the generate command
///
/// Generates every roster entity frame by frame, writes each PNG as it is
/// produced, then assembles and writes the contact sheet.
pub fn run() -> Result<ExitCode> {
    let start = Instant::now();

    println!("{}", "Generating platformer sprites...".cyan().bold());
    println!("{} {}/", "Output root:".dimmed(), SPRITES_ROOT);

    let palette = Palette::platformer();
    let mut sink = FileSink::new(SPRITES_ROOT, REVIEW_PATH);
    let mut set = SpriteSet::default();
    let mut total = 0;

    for desc in roster() {
        let sprites = generate_entity(&desc, &palette, &mut sink)
            .with_context(|| format!("failed to generate entity '{}'", desc.name))?;
        let count = sprites.frame_count();
        total += count;
        println!(
            "  {} {} ({}x{}) -> {} frames",
            "+".green(),
            desc.name.bold(),
            desc.width,
            desc.height,
            count
        );
        set.entities.push(sprites);
    }

    println!(
        "{} {} PNG files in {}/",
        "Total:".cyan().bold(),
        total,
        SPRITES_ROOT
    );

    if let Some(contact_sheet) = sheet::assemble(&set) {
        sink.write_sheet(&contact_sheet)
            .context("failed to write contact sheet")?;
        println!(
            "{} {} ({}x{})",
            "Contact sheet:".cyan().bold(),
            REVIEW_PATH,
            contact_sheet.width,
            contact_sheet.height
        );
    }

    println!(
        "{} {:.2?} - open {} to preview all sprites at 4x zoom",
        "Done in".dimmed(),
        start.elapsed(),
        REVIEW_PATH
    );

    Ok(ExitCode::SUCCESS)
}
