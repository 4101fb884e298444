//! Background decoration drawers (16x16, one frame each).
//!
//! Cloud halves extend a solid rectangle into the neighboring cell's edge
//! so two adjacent tiles join seamlessly; the bush is a four-ellipse
//! composition (outline, crown, light cap, dark base).

use crate::canvas::Raster;
use crate::palette::Palette;

/// All background element names, in generation order.
pub const BG_NAMES: [&str; 3] = ["cloud_left", "cloud_right", "bush"];

/// Paint one background element. `frame` is unused since every element is
/// a single still.
pub fn draw(r: &mut Raster, _frame: usize, name: &str, pal: &Palette) {
    match name {
        "cloud_left" => {
            r.fill_ellipse(2, 6, 12, 8, pal.get("cloud"));
            r.fill_ellipse(4, 3, 8, 6, pal.get("cloud"));
            // Extend to the right edge for a seamless join
            r.fill_rect(12, 6, 4, 6, pal.get("cloud"));
            r.fill_ellipse(3, 9, 10, 5, pal.get("cloud_shadow"));
        }
        "cloud_right" => {
            // Extend to the left edge for a seamless join
            r.fill_rect(0, 6, 4, 6, pal.get("cloud"));
            r.fill_ellipse(2, 6, 12, 8, pal.get("cloud"));
            r.fill_ellipse(5, 4, 8, 6, pal.get("cloud"));
            r.fill_ellipse(3, 9, 10, 5, pal.get("cloud_shadow"));
        }
        "bush" => {
            r.fill_ellipse(1, 6, 14, 10, pal.get("bush_green"));
            r.fill_ellipse(3, 4, 10, 8, pal.get("bush_green"));
            r.fill_ellipse(2, 3, 6, 6, pal.get("bush_light"));
            r.fill_ellipse(2, 10, 12, 6, pal.get("bush_dark"));
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(name: &str) -> Raster {
        let pal = Palette::platformer();
        let mut r = Raster::transparent(16, 16);
        draw(&mut r, 0, name, &pal);
        r
    }

    #[test]
    fn test_deterministic() {
        for name in BG_NAMES {
            assert_eq!(element(name), element(name), "{name}");
        }
    }

    #[test]
    fn test_cloud_halves_join_seamlessly() {
        let pal = Palette::platformer();
        let cloud = pal.get("cloud");
        let left = element("cloud_left");
        let right = element("cloud_right");
        // The seam rows are solid cloud on both facing edges.
        for y in 6..12 {
            assert_eq!(left.get(15, y), cloud, "left half row {y}");
            assert_eq!(right.get(0, y), cloud, "right half row {y}");
        }
    }

    #[test]
    fn test_bush_has_all_three_greens() {
        let pal = Palette::platformer();
        let r = element("bush");
        assert!(r.contains(pal.get("bush_green")));
        assert!(r.contains(pal.get("bush_light")));
        assert!(r.contains(pal.get("bush_dark")));
    }

    #[test]
    fn test_elements_keep_transparent_corners() {
        use crate::color::Color;
        for name in BG_NAMES {
            assert_eq!(element(name).get(0, 15), Color::TRANSPARENT, "{name}");
        }
    }
}
