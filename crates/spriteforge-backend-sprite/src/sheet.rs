//! Review contact sheet assembler.
//!
//! Lays every generated frame out in one grid: a row per
//! (entity, animation) pair in generation order, a column per frame.
//! Cells share one size derived from the largest sprite, so 16x16 and
//! 16x32 rows coexist; frames are upscaled nearest-neighbor to stay
//! readable and alpha-composited over an opaque dark background that
//! keeps empty cells visible.

use crate::canvas::Raster;
use crate::color::Color;
use crate::generate::SpriteSet;

/// Upscale factor applied to every frame.
pub const SCALE: u32 = 4;
/// Gap around cells, in sheet pixels.
pub const PADDING: u32 = 2;
/// Opaque background, distinct from sprite transparency.
pub const SHEET_BG: Color = Color::rgba(30, 30, 40, 255);

/// Upscale a raster by an integer factor with nearest-neighbor sampling.
/// Hard pixel edges survive; nothing is smoothed.
pub fn scale_nearest(src: &Raster, factor: u32) -> Raster {
    let mut dst = Raster::transparent(src.width * factor, src.height * factor);
    for y in 0..dst.height {
        for x in 0..dst.width {
            let c = src.get(x / factor, y / factor);
            dst.set(x as i32, y as i32, c);
        }
    }
    dst
}

/// Assemble the contact sheet, or `None` when there is nothing to show.
pub fn assemble(set: &SpriteSet) -> Option<Raster> {
    // Flatten to rows of frames, preserving generation order.
    let rows: Vec<&[Raster]> = set
        .entities
        .iter()
        .flat_map(|e| e.animations.iter().map(|a| a.frames.as_slice()))
        .collect();

    if rows.is_empty() {
        return None;
    }

    let max_frames = rows.iter().map(|r| r.len()).max()? as u32;
    let max_w = rows.iter().flat_map(|r| r.iter()).map(|f| f.width).max()?;
    let max_h = rows.iter().flat_map(|r| r.iter()).map(|f| f.height).max()?;

    let cell_w = max_w * SCALE + PADDING;
    let cell_h = max_h * SCALE + PADDING;
    let sheet_w = max_frames * cell_w + PADDING;
    let sheet_h = rows.len() as u32 * cell_h + PADDING;

    let mut sheet = Raster::new(sheet_w, sheet_h, SHEET_BG);

    for (row_i, frames) in rows.iter().enumerate() {
        for (col_i, frame) in frames.iter().enumerate() {
            let scaled = scale_nearest(frame, SCALE);
            let ox = PADDING + col_i as u32 * cell_w;
            let oy = PADDING + row_i as u32 * cell_h;
            composite(&mut sheet, &scaled, ox, oy);
        }
    }

    Some(sheet)
}

/// Paste `src` onto `dst` at `(ox, oy)` with source-over blending:
/// transparent source pixels leave the destination untouched and partial
/// alpha darkens it instead of replacing it.
fn composite(dst: &mut Raster, src: &Raster, ox: u32, oy: u32) {
    for y in 0..src.height {
        for x in 0..src.width {
            let c = src.get(x, y);
            if c.is_visible() {
                let out = c.over(dst.get(ox + x, oy + y));
                dst.set((ox + x) as i32, (oy + y) as i32, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{AnimationFrames, EntitySprites};

    fn set_of(rows: Vec<(u32, u32, usize)>) -> SpriteSet {
        // Each row: (width, height, frame_count), one entity per row.
        let entities = rows
            .into_iter()
            .enumerate()
            .map(|(i, (w, h, n))| EntitySprites {
                name: format!("e{i}"),
                animations: vec![AnimationFrames {
                    name: "a".to_string(),
                    frames: (0..n).map(|_| Raster::transparent(w, h)).collect(),
                }],
            })
            .collect();
        SpriteSet { entities }
    }

    #[test]
    fn test_empty_input_produces_nothing() {
        assert!(assemble(&SpriteSet::default()).is_none());
    }

    #[test]
    fn test_sheet_size_law() {
        // 3 rows, max 6 frames, max dims 16x32.
        let set = set_of(vec![(16, 32, 6), (16, 16, 4), (16, 16, 1)]);
        let sheet = assemble(&set).unwrap();
        assert_eq!(sheet.width, 6 * (16 * SCALE + PADDING) + PADDING);
        assert_eq!(sheet.height, 3 * (32 * SCALE + PADDING) + PADDING);
    }

    #[test]
    fn test_background_fills_empty_cells() {
        let set = set_of(vec![(8, 8, 3), (8, 8, 1)]);
        let sheet = assemble(&set).unwrap();
        // Second row, third column: no frame there, pure background.
        let cell_w = 8 * SCALE + PADDING;
        let cell_h = 8 * SCALE + PADDING;
        let x = PADDING + 2 * cell_w + 1;
        let y = PADDING + cell_h + 1;
        assert_eq!(sheet.get(x, y), SHEET_BG);
    }

    #[test]
    fn test_transparent_pixels_keep_background() {
        // A frame with one opaque pixel: everything else in its cell must
        // still show the sheet background.
        let mut frame = Raster::transparent(4, 4);
        frame.set(0, 0, Color::rgb(255, 0, 0));
        let set = SpriteSet {
            entities: vec![EntitySprites {
                name: "dot".to_string(),
                animations: vec![AnimationFrames {
                    name: "a".to_string(),
                    frames: vec![frame],
                }],
            }],
        };
        let sheet = assemble(&set).unwrap();
        // The opaque pixel lands scaled at the cell origin.
        assert_eq!(sheet.get(PADDING, PADDING), Color::rgb(255, 0, 0));
        assert_eq!(
            sheet.get(PADDING + SCALE - 1, PADDING + SCALE - 1),
            Color::rgb(255, 0, 0)
        );
        // One pixel right of the scaled dot: background shows through.
        assert_eq!(sheet.get(PADDING + SCALE, PADDING), SHEET_BG);
    }

    #[test]
    fn test_translucent_shadow_blends_opaque() {
        // The slime's ground shadow is (0,0,0,40); compositing it must
        // darken the sheet background, not punch a translucent hole.
        use crate::drawers::slime;
        use crate::palette::Palette;

        let pal = Palette::platformer();
        let mut frame = Raster::transparent(16, 16);
        slime::draw(&mut frame, 0, "walk", &pal);
        // Sanity: the sprite pixel itself is the raw translucent shadow.
        assert_eq!(frame.get(8, 14), Color::rgba(0, 0, 0, 40));

        let set = SpriteSet {
            entities: vec![EntitySprites {
                name: "slime".to_string(),
                animations: vec![AnimationFrames {
                    name: "walk".to_string(),
                    frames: vec![frame],
                }],
            }],
        };
        let sheet = assemble(&set).unwrap();

        // Row 0, column 0: sprite pixel (8,14) lands at the cell origin
        // plus (8,14) scaled.
        let px = sheet.get(PADDING + 8 * SCALE, PADDING + 14 * SCALE);
        assert_eq!(px.a, 255, "sheet must stay opaque under the shadow");
        assert!(px.r < SHEET_BG.r && px.g < SHEET_BG.g && px.b < SHEET_BG.b);
    }

    #[test]
    fn test_scale_nearest_replicates_pixels() {
        let mut src = Raster::transparent(2, 1);
        src.set(0, 0, Color::rgb(1, 2, 3));
        src.set(1, 0, Color::rgb(4, 5, 6));
        let dst = scale_nearest(&src, 3);
        assert_eq!(dst.width, 6);
        assert_eq!(dst.height, 3);
        for y in 0..3 {
            for x in 0..3 {
                assert_eq!(dst.get(x, y), Color::rgb(1, 2, 3));
                assert_eq!(dst.get(x + 3, y), Color::rgb(4, 5, 6));
            }
        }
    }
}
