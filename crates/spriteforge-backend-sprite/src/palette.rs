//! Fixed sprite palette.
//!
//! One retro-flavored palette shared by every drawer, built once before
//! generation and never mutated. A lookup for a key that is not in the
//! table is a programmer error and panics immediately; there is no way to
//! produce a partial sprite set with a broken palette.

use crate::color::Color;

/// Named color entries, in declaration order.
const ENTRIES: &[(&str, Color)] = &[
    // Player
    ("skin", Color::rgb(255, 206, 158)),
    ("skin_shadow", Color::rgb(214, 160, 112)),
    ("hair", Color::rgb(92, 56, 40)),
    ("shirt", Color::rgb(66, 133, 244)),
    ("shirt_shadow", Color::rgb(45, 98, 186)),
    ("pants", Color::rgb(50, 60, 80)),
    ("pants_shadow", Color::rgb(35, 42, 56)),
    ("shoes", Color::rgb(140, 60, 40)),
    ("eye", Color::rgb(40, 40, 40)),
    ("eye_hurt", Color::rgb(200, 60, 60)),
    ("white", Color::rgb(255, 255, 255)),
    // Slime
    ("slime", Color::rgb(100, 200, 80)),
    ("slime_shadow", Color::rgb(60, 150, 50)),
    ("slime_dark", Color::rgb(40, 110, 30)),
    ("slime_highlight", Color::rgb(160, 230, 140)),
    ("slime_eye", Color::rgb(255, 255, 255)),
    ("slime_pupil", Color::rgb(40, 40, 40)),
    // Coin
    ("gold", Color::rgb(255, 210, 60)),
    ("gold_light", Color::rgb(255, 240, 140)),
    ("gold_shadow", Color::rgb(200, 150, 30)),
    ("gold_dark", Color::rgb(160, 110, 20)),
    // Environment
    ("grass", Color::rgb(80, 180, 60)),
    ("grass_light", Color::rgb(120, 210, 80)),
    ("grass_dark", Color::rgb(50, 130, 40)),
    ("dirt", Color::rgb(160, 110, 60)),
    ("dirt_shadow", Color::rgb(120, 80, 40)),
    ("dirt_dark", Color::rgb(90, 60, 30)),
    ("wood", Color::rgb(180, 130, 70)),
    ("wood_light", Color::rgb(210, 160, 100)),
    ("wood_shadow", Color::rgb(130, 90, 50)),
    ("stone", Color::rgb(140, 140, 150)),
    ("stone_shadow", Color::rgb(100, 100, 110)),
    // Goal
    ("flag_red", Color::rgb(220, 50, 50)),
    ("flag_red_shadow", Color::rgb(170, 30, 30)),
    ("pole", Color::rgb(180, 180, 190)),
    ("pole_shadow", Color::rgb(130, 130, 140)),
    // Sky / BG
    ("cloud", Color::rgb(240, 240, 255)),
    ("cloud_shadow", Color::rgb(210, 215, 235)),
    ("bush_green", Color::rgb(60, 140, 50)),
    ("bush_light", Color::rgb(90, 170, 70)),
    ("bush_dark", Color::rgb(40, 100, 35)),
];

/// The fixed named palette.
#[derive(Debug, Clone)]
pub struct Palette {
    entries: &'static [(&'static str, Color)],
}

impl Palette {
    /// The platformer palette used by every drawer.
    pub fn platformer() -> Self {
        Self { entries: ENTRIES }
    }

    /// Look up a color by key.
    pub fn lookup(&self, key: &str) -> Option<Color> {
        self.entries
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, color)| *color)
    }

    /// Look up a color by key, panicking on a missing entry.
    ///
    /// A missing key means a drawer references a color that was never
    /// defined; the run aborts rather than emit sprites with holes.
    pub fn get(&self, key: &str) -> Color {
        match self.lookup(key) {
            Some(color) => color,
            None => panic!("palette has no entry for key '{key}'"),
        }
    }

    /// All defined keys, in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::platformer()
    }
}
