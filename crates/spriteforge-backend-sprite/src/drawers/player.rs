//! Player character drawer (16x32).
//!
//! Animations: idle (4), run (6), jump (2), fall (2), hurt (3).

use crate::canvas::Raster;
use crate::palette::Palette;

/// Paint one player frame.
///
/// Pose parameters (bounce, lean, leg phase, arm swing, vertical squash)
/// are selected per animation from literal frame tables, then every body
/// part is offset by them: hair, head, eyes, torso, arms, pants, legs.
pub fn draw(r: &mut Raster, frame: usize, anim: &str, pal: &Palette) {
    let mut bounce = 0;
    let mut lean = 0;
    let mut leg_phase = 0;
    let mut arm_swing = 0;
    let mut squash_y = 0;

    match anim {
        "idle" => {
            bounce = [0, -1, 0, 0][frame % 4];
        }
        "run" => {
            bounce = [0, -1, -1, 0, 1, 0][frame % 6];
            leg_phase = frame % 6;
            arm_swing = [0, 1, 2, 1, 0, -1][frame % 6];
            lean = 1;
        }
        "jump" => {
            bounce = [-2, -1][frame % 2];
            squash_y = -1;
        }
        "fall" => {
            bounce = [1, 2][frame % 2];
            squash_y = 1;
        }
        "hurt" => {
            bounce = [0, -1, 0][frame % 3];
            lean = [-1, 1, 0][frame % 3];
        }
        _ => {}
    }

    // Base y for the top of the head.
    let by = 8 + bounce;

    // Hair
    r.fill_rect(4 + lean, by, 8, 3, pal.get("hair"));
    r.fill_rect(3 + lean, by + 1, 1, 3, pal.get("hair")); // left sideburn
    r.fill_rect(12 + lean, by + 1, 1, 3, pal.get("hair")); // right sideburn

    // Head
    r.fill_rect(4 + lean, by + 3, 8, 6, pal.get("skin"));
    r.fill_rect(3 + lean, by + 4, 1, 3, pal.get("skin_shadow")); // left cheek
    r.fill_rect(12 + lean, by + 4, 1, 3, pal.get("skin_shadow")); // right cheek

    // Eyes
    if anim == "hurt" {
        // X eyes
        let eye = pal.get("eye_hurt");
        r.set(6 + lean, by + 5, eye);
        r.set(8 + lean, by + 5, eye);
        r.set(7 + lean, by + 4, eye);
        r.set(7 + lean, by + 6, eye);
        r.set(9 + lean, by + 5, eye);
        r.set(11 + lean, by + 5, eye);
        r.set(10 + lean, by + 4, eye);
        r.set(10 + lean, by + 6, eye);
    } else {
        // Normal eyes, 2px apart, highlight painted last.
        let eye = pal.get("eye");
        r.set(6 + lean, by + 5, eye);
        r.set(6 + lean, by + 4, eye);
        r.set(10 + lean, by + 5, eye);
        r.set(10 + lean, by + 4, eye);
        r.set(6 + lean, by + 4, pal.get("white"));
        r.set(10 + lean, by + 4, pal.get("white"));
    }

    // Torso
    let torso_y = by + 9;
    r.fill_rect(4 + lean, torso_y, 8, 7 + squash_y, pal.get("shirt"));
    r.fill_rect(4 + lean, torso_y, 2, 7 + squash_y, pal.get("shirt_shadow"));

    // Arms
    let arm_y = torso_y + 1;
    let shirt = pal.get("shirt");
    let skin = pal.get("skin");
    match anim {
        "run" => {
            // Swinging arms
            r.fill_rect(2 + lean, arm_y + arm_swing, 2, 5, shirt);
            r.fill_rect(12 + lean, arm_y - arm_swing, 2, 5, shirt);
            // Hands
            r.set(2 + lean, arm_y + arm_swing + 5, skin);
            r.set(3 + lean, arm_y + arm_swing + 5, skin);
            r.set(12 + lean, arm_y - arm_swing + 5, skin);
            r.set(13 + lean, arm_y - arm_swing + 5, skin);
        }
        "jump" => {
            // Arms up
            r.fill_rect(2, arm_y - 2, 2, 4, shirt);
            r.fill_rect(12, arm_y - 2, 2, 4, shirt);
            r.set(2, arm_y - 3, skin);
            r.set(3, arm_y - 3, skin);
            r.set(12, arm_y - 3, skin);
            r.set(13, arm_y - 3, skin);
        }
        "hurt" => {
            // Arms flail
            r.fill_rect(1 + lean, arm_y - 1, 2, 4, shirt);
            r.fill_rect(13 + lean, arm_y + 1, 2, 4, shirt);
        }
        _ => {
            // Resting arms
            r.fill_rect(2 + lean, arm_y, 2, 5, shirt);
            r.fill_rect(12 + lean, arm_y, 2, 5, shirt);
            r.set(2 + lean, arm_y + 5, skin);
            r.set(3 + lean, arm_y + 5, skin);
            r.set(12 + lean, arm_y + 5, skin);
            r.set(13 + lean, arm_y + 5, skin);
        }
    }

    // Pants
    let pants_y = torso_y + 7 + squash_y;
    r.fill_rect(4 + lean, pants_y, 8, 4, pal.get("pants"));
    r.fill_rect(4 + lean, pants_y, 2, 4, pal.get("pants_shadow"));

    // Legs
    let leg_y = pants_y + 4;
    let pants = pal.get("pants");
    let shoes = pal.get("shoes");
    match anim {
        "run" => {
            // (left_x, right_x, left_extend, right_extend) per phase
            const STRIDE: [(i32, i32, i32, i32); 6] = [
                (0, 0, 3, -1),
                (1, -1, 2, 0),
                (2, -2, 1, 1),
                (1, -1, 0, 2),
                (0, 0, -1, 3),
                (-1, 1, 0, 2),
            ];
            let (lx, rx, le, re) = STRIDE[leg_phase];
            r.fill_rect(4 + lean + lx, leg_y, 3, 4 + le, pants);
            r.fill_rect(4 + lean + lx, leg_y + 3 + le, 4, 2, shoes);
            r.fill_rect(9 + lean + rx, leg_y, 3, 4 + re, pants);
            r.fill_rect(9 + lean + rx, leg_y + 3 + re, 4, 2, shoes);
        }
        "jump" => {
            // Legs tucked
            r.fill_rect(4, leg_y - 1, 3, 3, pants);
            r.fill_rect(9, leg_y - 1, 3, 3, pants);
            r.fill_rect(4, leg_y + 2, 4, 2, shoes);
            r.fill_rect(9, leg_y + 2, 4, 2, shoes);
        }
        "fall" => {
            // Legs dangling apart
            r.fill_rect(3, leg_y, 3, 5, pants);
            r.fill_rect(10, leg_y, 3, 5, pants);
            r.fill_rect(3, leg_y + 5, 4, 2, shoes);
            r.fill_rect(10, leg_y + 5, 4, 2, shoes);
        }
        _ => {
            // Standing
            r.fill_rect(4 + lean, leg_y, 3, 4, pants);
            r.fill_rect(9 + lean, leg_y, 3, 4, pants);
            r.fill_rect(4 + lean, leg_y + 4, 4, 2, shoes);
            r.fill_rect(9 + lean, leg_y + 4, 4, 2, shoes);
        }
    }
}
