//! Goal flag drawer (16x32).
//!
//! Static pole and base; the 8-row flag flutters by combining a 2-frame
//! wave phase with a period-3 row offset and a period-4 color schedule.

use crate::canvas::Raster;
use crate::palette::Palette;

/// Paint one goal flag frame.
pub fn draw(r: &mut Raster, frame: usize, _anim: &str, pal: &Palette) {
    let wave = (frame % 2) as i32;

    // Pole
    r.fill_rect(7, 2, 2, 28, pal.get("pole"));
    r.fill_rect(7, 2, 1, 28, pal.get("pole_shadow"));

    // Pole top ball
    r.fill_rect(6, 1, 4, 2, pal.get("gold"));
    r.set(7, 0, pal.get("gold_light"));

    // Flag
    let flag_y = 4;
    for row in 0..8 {
        let wave_offset = if (row + wave) % 3 == 0 { 1 } else { 0 };
        let flag_w = (7 - row / 3).max(4);
        let color = if (row + wave) % 4 < 2 {
            pal.get("flag_red")
        } else {
            pal.get("flag_red_shadow")
        };
        r.fill_rect(9 + wave_offset, flag_y + row, flag_w, 1, color);
    }

    // Pole base
    r.fill_rect(5, 28, 6, 2, pal.get("stone"));
    r.fill_rect(6, 30, 4, 2, pal.get("stone_shadow"));
}
