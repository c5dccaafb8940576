/// Built-in 5x7 bitmap font
///
/// Covers A-Z (lowercase maps to uppercase), 0-9 and space. Glyphs are drawn
/// as solid blocks scaled by an integer factor, so this font needs no file
/// and cannot fail to load.

use crate::rendering::layout::TextBounds;

pub const GLYPH_W: u32 = 5;
pub const GLYPH_H: u32 = 7;
/// Horizontal cell size including one column of spacing
pub const ADVANCE: u32 = GLYPH_W + 1;

// Each row uses the low five bits, bit 4 is the leftmost column.
const LETTERS: [[u8; 7]; 26] = [
    [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // A
    [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E], // B
    [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E], // C
    [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E], // D
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F], // E
    [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10], // F
    [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F], // G
    [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], // H
    [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E], // I
    [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C], // J
    [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11], // K
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F], // L
    [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11], // M
    [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11], // N
    [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // O
    [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10], // P
    [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D], // Q
    [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11], // R
    [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E], // S
    [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], // T
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], // U
    [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04], // V
    [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A], // W
    [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11], // X
    [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04], // Y
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F], // Z
];

const DIGITS: [[u8; 7]; 10] = [
    [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
    [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
    [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
    [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
    [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
    [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
    [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
    [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
    [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
    [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
];

const BLANK: [u8; 7] = [0; 7];

/// Row bitmap for `c`, or `None` if the font has no glyph for it.
pub fn glyph(c: char) -> Option<&'static [u8; 7]> {
    let c = c.to_ascii_uppercase();
    match c {
        'A'..='Z' => Some(&LETTERS[(c as u8 - b'A') as usize]),
        '0'..='9' => Some(&DIGITS[(c as u8 - b'0') as usize]),
        ' ' => Some(&BLANK),
        _ => None,
    }
}

/// Integer block size so a glyph is roughly `px` pixels tall.
pub fn block_scale(px: f32) -> u32 {
    ((px / GLYPH_H as f32).floor() as u32).max(1)
}

/// Bounds of `text` at height `px`, laid out at the origin.
///
/// Returns `None` when a character is missing from the font or nothing in
/// the text is visible.
pub fn measure(text: &str, px: f32) -> Option<TextBounds> {
    let scale = block_scale(px);
    let mut bounds: Option<TextBounds> = None;

    for (i, c) in text.chars().enumerate() {
        let rows = glyph(c)?;
        let cell_x = i as u32 * ADVANCE;
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_W {
                if bits & (0x10 >> col) == 0 {
                    continue;
                }
                let x = ((cell_x + col) * scale) as f32;
                let y = (row as u32 * scale) as f32;
                let block = TextBounds {
                    min_x: x,
                    min_y: y,
                    max_x: x + scale as f32,
                    max_y: y + scale as f32,
                };
                bounds = Some(match bounds {
                    Some(b) => b.union(&block),
                    None => block,
                });
            }
        }
    }
    bounds
}

/// Visit every lit pixel of `text` laid out at `origin`, calling `plot(x, y)`.
///
/// Characters the font lacks are skipped; callers measure first.
pub fn for_each_pixel<F: FnMut(i64, i64)>(text: &str, px: f32, origin: (f32, f32), mut plot: F) {
    let scale = block_scale(px) as i64;
    let ox = origin.0.round() as i64;
    let oy = origin.1.round() as i64;

    for (i, c) in text.chars().enumerate() {
        let Some(rows) = glyph(c) else { continue };
        let cell_x = i as i64 * ADVANCE as i64;
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_W as i64 {
                if bits & (0x10 >> col) == 0 {
                    continue;
                }
                let bx = ox + (cell_x + col) * scale;
                let by = oy + row as i64 * scale;
                for dy in 0..scale {
                    for dx in 0..scale {
                        plot(bx + dx, by + dy);
                    }
                }
            }
        }
    }
}
