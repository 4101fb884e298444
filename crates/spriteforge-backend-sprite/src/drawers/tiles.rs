//! Ground and platform tile drawers (16x16, one frame each).
//!
//! Tiles are one-off compositions: a base fill, edge highlight/shadow
//! bands, and a literal list of texture-detail pixels per tile.

use crate::canvas::Raster;
use crate::palette::Palette;

/// All tile names, in generation order.
pub const TILE_NAMES: [&str; 7] = [
    "grass_top",
    "dirt",
    "grass_left",
    "grass_right",
    "wood_left",
    "wood_mid",
    "wood_right",
];

/// Paint one tile. `name` selects the tile; `frame` is unused since every
/// tile is a single still.
pub fn draw(r: &mut Raster, _frame: usize, name: &str, pal: &Palette) {
    match name {
        "grass_top" => {
            r.fill_rect(0, 0, 16, 16, pal.get("dirt"));
            r.fill_rect(0, 0, 16, 4, pal.get("grass"));
            r.fill_rect(0, 0, 16, 2, pal.get("grass_light"));
            // Grass tufts on the top edge
            for x in [1, 4, 7, 11, 14] {
                r.set(x, 0, pal.get("grass_light"));
            }
            for (x, y) in [(3, 7), (8, 9), (12, 6), (5, 12), (10, 14), (2, 10)] {
                r.set(x, y, pal.get("dirt_shadow"));
            }
        }
        "dirt" => {
            r.fill_rect(0, 0, 16, 16, pal.get("dirt"));
            for (x, y) in [
                (3, 3),
                (8, 5),
                (12, 2),
                (5, 8),
                (1, 12),
                (10, 10),
                (14, 7),
                (7, 14),
                (4, 1),
                (11, 13),
            ] {
                r.set(x, y, pal.get("dirt_shadow"));
            }
            for (x, y) in [(6, 4), (13, 9), (2, 7)] {
                r.set(x, y, pal.get("dirt_dark"));
            }
        }
        "grass_left" => {
            r.fill_rect(0, 0, 16, 16, pal.get("dirt"));
            r.fill_rect(0, 0, 4, 16, pal.get("grass_dark"));
            r.fill_rect(0, 0, 2, 16, pal.get("grass"));
            for (x, y) in [(6, 4), (10, 8), (8, 12), (12, 3)] {
                r.set(x, y, pal.get("dirt_shadow"));
            }
        }
        "grass_right" => {
            r.fill_rect(0, 0, 16, 16, pal.get("dirt"));
            r.fill_rect(12, 0, 4, 16, pal.get("grass_dark"));
            r.fill_rect(14, 0, 2, 16, pal.get("grass"));
            for (x, y) in [(3, 5), (6, 9), (8, 2), (4, 13)] {
                r.set(x, y, pal.get("dirt_shadow"));
            }
        }
        "wood_left" => {
            r.fill_rect(0, 0, 16, 16, pal.get("wood"));
            r.fill_rect(0, 0, 16, 2, pal.get("wood_light"));
            r.fill_rect(0, 14, 16, 2, pal.get("wood_shadow"));
            r.fill_rect(0, 0, 2, 16, pal.get("wood_shadow"));
            // Wood grain lines
            for y in [5, 10] {
                r.fill_rect(2, y, 14, 1, pal.get("wood_shadow"));
            }
        }
        "wood_mid" => {
            r.fill_rect(0, 0, 16, 16, pal.get("wood"));
            r.fill_rect(0, 0, 16, 2, pal.get("wood_light"));
            r.fill_rect(0, 14, 16, 2, pal.get("wood_shadow"));
            for y in [5, 10] {
                r.fill_rect(0, y, 16, 1, pal.get("wood_shadow"));
            }
            // Knot
            r.set(8, 7, pal.get("wood_shadow"));
            r.set(9, 7, pal.get("wood_shadow"));
            r.set(8, 8, pal.get("wood_shadow"));
        }
        "wood_right" => {
            r.fill_rect(0, 0, 16, 16, pal.get("wood"));
            r.fill_rect(0, 0, 16, 2, pal.get("wood_light"));
            r.fill_rect(0, 14, 16, 2, pal.get("wood_shadow"));
            r.fill_rect(14, 0, 2, 16, pal.get("wood_shadow"));
            for y in [5, 10] {
                r.fill_rect(0, y, 14, 1, pal.get("wood_shadow"));
            }
        }
        _ => {}
    }
}
