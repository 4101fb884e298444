//! Coin drawer (16x16).
//!
//! `idle` fakes a spin by cycling the ellipse width through
//! `[8, 7, 4, 2, 4, 7]`; detail strokes are dropped as the coin turns
//! edge-on. `collect` shrinks and rises while emitting four sparkle
//! pixels on a growing circle.

use std::f64::consts::FRAC_PI_2;

use crate::canvas::Raster;
use crate::palette::Palette;

/// Ellipse width per idle frame (full -> edge-on -> full).
const SPIN_WIDTHS: [i32; 6] = [8, 7, 4, 2, 4, 7];

/// Paint one coin frame.
pub fn draw(r: &mut Raster, frame: usize, anim: &str, pal: &Palette) {
    if anim == "idle" {
        let w = SPIN_WIDTHS[frame % 6];
        let cx = 8;
        let x0 = cx - w / 2;

        // Coin body
        r.fill_ellipse(x0, 3, w, 10, pal.get("gold"));
        if w > 3 {
            r.fill_ellipse(x0 + 1, 4, w - 2, 8, pal.get("gold_light"));
            // Center glyph, only while the face is wide enough to read.
            if w > 5 {
                r.fill_rect(cx - 1, 6, 2, 4, pal.get("gold_shadow"));
            }
        }
        // Shine
        if w > 4 {
            r.set(x0 + 1, 5, pal.get("white"));
        }
    } else if anim == "collect" {
        // Shrink + rise + sparkle
        let rise = frame as i32 * 2;
        let size = (8 - frame as i32 * 2).max(2);
        let (cx, cy) = (8, 8 - rise);
        let x0 = cx - size / 2;
        let y0 = cy - size / 2;
        r.fill_ellipse(x0, y0, size, size, pal.get("gold_light"));

        // Sparkle particles a quarter turn apart, spiraling outward.
        let gold = pal.get("gold");
        for k in 0..4 {
            let a = frame as f64 * 0.8 + k as f64 * FRAC_PI_2;
            let radius = (4 + frame) as f64;
            let sx = (cx as f64 + a.cos() * radius) as i32;
            let sy = (cy as f64 + a.sin() * radius) as i32;
            r.set(sx, sy, gold);
        }
    }
}
