//! In-memory RGBA raster and the pixel-art drawing primitives.
//!
//! All primitives take signed coordinates and clip silently against the
//! raster bounds. Drawers lean on this: pose offsets may push a body part
//! partly (or entirely) off the raster and the stray pixels just vanish,
//! so no caller carries bounds arithmetic.

use crate::color::Color;

/// A 2D pixel grid, origin top-left, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data (RGBA, row-major).
    data: Vec<Color>,
}

impl Raster {
    /// Create a new raster filled with a color.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        let size = (width * height) as usize;
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Create a new fully transparent raster.
    pub fn transparent(width: u32, height: u32) -> Self {
        Self::new(width, height, Color::TRANSPARENT)
    }

    /// Get the pixel at in-bounds coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Color {
        let idx = (y * self.width + x) as usize;
        self.data[idx]
    }

    /// Write a single pixel, bounds-checked. Out-of-bounds writes are a
    /// silent no-op, never an error.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, color: Color) {
        if x >= 0 && (x as u32) < self.width && y >= 0 && (y as u32) < self.height {
            let idx = (y as u32 * self.width + x as u32) as usize;
            self.data[idx] = color;
        }
    }

    /// Fill the rectangle `[x, x+w-1] x [y, y+h-1]`, clipped to bounds,
    /// overwriting color and alpha. No-op when `w` or `h` is not positive.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        if w <= 0 || h <= 0 {
            return;
        }
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + w).min(self.width as i32);
        let y1 = (y + h).min(self.height as i32);
        for py in y0..y1 {
            for px in x0..x1 {
                let idx = (py as u32 * self.width + px as u32) as usize;
                self.data[idx] = color;
            }
        }
    }

    /// Fill the axis-aligned ellipse inscribed in `[x, x+w) x [y, y+h)`.
    ///
    /// Hard-edged: a pixel is painted when its center lies inside the
    /// ellipse. No antialiasing, so edges stay crisp at native resolution.
    pub fn fill_ellipse(&mut self, x: i32, y: i32, w: i32, h: i32, color: Color) {
        if w <= 0 || h <= 0 {
            return;
        }
        let rx = w as f64 / 2.0;
        let ry = h as f64 / 2.0;
        let cx = x as f64 + rx;
        let cy = y as f64 + ry;
        for py in y..y + h {
            for px in x..x + w {
                let dx = (px as f64 + 0.5 - cx) / rx;
                let dy = (py as f64 + 0.5 - cy) / ry;
                if dx * dx + dy * dy <= 1.0 {
                    self.set(px, py, color);
                }
            }
        }
    }

    /// Whether any pixel has exactly this color.
    pub fn contains(&self, color: Color) -> bool {
        self.data.iter().any(|c| *c == color)
    }

    /// Convert to 8-bit RGBA bytes for encoding.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 4);
        for color in &self.data {
            bytes.extend_from_slice(&color.to_rgba8());
        }
        bytes
    }
}
