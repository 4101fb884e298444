//! Slime enemy drawer (16x16).
//!
//! Animations: walk (4), squish (2). Walk is a hop cycle driven by
//! squash/stretch/bounce tables; squish is the death flatten, with the
//! eyes suppressed once the animation has passed its first frame.

use crate::canvas::Raster;
use crate::color::Color;
use crate::palette::Palette;

/// Translucent ground shadow, painted before the body.
const GROUND_SHADOW: Color = Color::rgba(0, 0, 0, 40);

/// Paint one slime frame.
pub fn draw(r: &mut Raster, frame: usize, anim: &str, pal: &Palette) {
    let (squash, stretch, bounce) = if anim == "walk" {
        (
            [0, -1, -2, -1][frame % 4],
            [0, 1, 2, 1][frame % 4],
            [0, 0, -2, -1][frame % 4],
        )
    } else {
        // squish (death)
        ([3, 5][frame % 2], [-2, -4][frame % 2], [0, 2][frame % 2])
    };

    let base_y = 10 + bounce;
    let body_h = 6 - squash + stretch;
    let body_top = base_y - body_h;

    // Shadow on ground
    r.fill_ellipse(3, 13, 10, 3, GROUND_SHADOW);

    // Body: main mass with a rounded top.
    r.fill_rect(3, body_top + 1, 10, body_h - 1, pal.get("slime"));
    r.fill_rect(4, body_top, 8, body_h, pal.get("slime"));
    r.fill_rect(5, body_top - 1, 6, 1, pal.get("slime"));

    // Highlight
    r.fill_rect(5, body_top, 3, 2, pal.get("slime_highlight"));

    // Shadow at base
    r.fill_rect(3, base_y - 2, 10, 2, pal.get("slime_shadow"));
    r.fill_rect(4, base_y, 8, 1, pal.get("slime_dark"));

    // Eyes, skipped once squished dead.
    if anim != "squish" || frame == 0 {
        let eye_y = body_top + (body_h / 3).max(1);
        r.fill_rect(5, eye_y, 2, 2, pal.get("slime_eye"));
        r.set(5, eye_y + 1, pal.get("slime_pupil"));
        r.fill_rect(9, eye_y, 2, 2, pal.get("slime_eye"));
        r.set(9, eye_y + 1, pal.get("slime_pupil"));
    }
}
