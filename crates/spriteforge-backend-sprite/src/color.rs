//! Color type for sprite rasters.

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Fully transparent black, the blank-raster fill.
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Whether the color carries any opacity at all.
    pub const fn is_visible(&self) -> bool {
        self.a > 0
    }

    /// Convert to 8-bit RGBA bytes.
    pub const fn to_rgba8(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Source-over composite of `self` onto `dst`.
    ///
    /// Opaque and fully transparent sources short-circuit; partial alpha
    /// blends, so a translucent pixel over an opaque background stays
    /// opaque and merely darkens it.
    pub fn over(self, dst: Color) -> Color {
        if self.a == 255 {
            return self;
        }
        if self.a == 0 {
            return dst;
        }

        let sa = self.a as u32;
        let da = dst.a as u32;
        let inv = 255 - sa;
        // Output alpha scaled by 255 to keep the math in integers.
        // Nonzero: the zero-alpha source returned above.
        let out_a = sa * 255 + da * inv;

        let blend = |s: u8, d: u8| -> u8 {
            let n = s as u32 * sa * 255 + d as u32 * da * inv;
            ((n + out_a / 2) / out_a) as u8
        };

        Color::rgba(
            blend(self.r, dst.r),
            blend(self.g, dst.g),
            blend(self.b, dst.b),
            ((out_a + 127) / 255) as u8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_is_opaque() {
        let c = Color::rgb(10, 20, 30);
        assert_eq!(c.a, 255);
        assert!(c.is_visible());
    }

    #[test]
    fn test_transparent_is_invisible() {
        assert!(!Color::TRANSPARENT.is_visible());
        assert_eq!(Color::TRANSPARENT.to_rgba8(), [0, 0, 0, 0]);
    }

    #[test]
    fn test_over_opaque_source_wins() {
        let src = Color::rgb(10, 20, 30);
        let dst = Color::rgb(200, 200, 200);
        assert_eq!(src.over(dst), src);
    }

    #[test]
    fn test_over_transparent_source_keeps_dst() {
        let dst = Color::rgb(200, 200, 200);
        assert_eq!(Color::TRANSPARENT.over(dst), dst);
    }

    #[test]
    fn test_over_partial_alpha_stays_opaque() {
        // A faint black shadow over an opaque background darkens it
        // without opening a hole in the alpha channel.
        let shadow = Color::rgba(0, 0, 0, 40);
        let bg = Color::rgba(30, 30, 40, 255);
        let out = shadow.over(bg);
        assert_eq!(out.a, 255);
        assert!(out.r < bg.r && out.g < bg.g && out.b < bg.b);
    }

    #[test]
    fn test_over_both_transparent() {
        assert_eq!(Color::TRANSPARENT.over(Color::TRANSPARENT), Color::TRANSPARENT);
    }
}
