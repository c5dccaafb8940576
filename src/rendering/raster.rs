/// Raster buffer builder for the PNG encoder
///
/// A raster buffer is what gets compressed into IDAT: one filter-type byte per
/// row followed by the row's packed RGB samples.

use crate::{Error, Result, Rgb};

/// Filter type 0: scanline bytes stored as-is
pub const FILTER_NONE: u8 = 0;

/// Bytes per truecolor RGB pixel at bit depth 8
pub const BYTES_PER_PIXEL: usize = 3;

/// Length of one filtered scanline (filter byte + samples).
pub fn scanline_len(width: u32) -> usize {
    1 + BYTES_PER_PIXEL * width as usize
}

fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions(format!(
            "{}x{} (both sides must be positive)",
            width, height
        )));
    }
    Ok(())
}

/// Build the raster buffer for a `width` x `height` image filled with `color`.
///
/// The result always has `height * (1 + 3 * width)` bytes.
pub fn solid_raster(width: u32, height: u32, color: Rgb) -> Result<Vec<u8>> {
    check_dimensions(width, height)?;

    let mut row = Vec::with_capacity(scanline_len(width));
    row.push(FILTER_NONE);
    for _ in 0..width {
        row.extend_from_slice(&color.to_array());
    }

    Ok(row.repeat(height as usize))
}

/// Build the raster buffer from packed RGB pixels in row-major order.
pub fn raster_from_rgb(width: u32, height: u32, pixels: &[u8]) -> Result<Vec<u8>> {
    check_dimensions(width, height)?;

    let stride = BYTES_PER_PIXEL * width as usize;
    let expected = stride * height as usize;
    if pixels.len() != expected {
        return Err(Error::InvalidDimensions(format!(
            "pixel buffer has {} bytes, {}x{} RGB needs {}",
            pixels.len(),
            width,
            height,
            expected
        )));
    }

    let mut out = Vec::with_capacity(scanline_len(width) * height as usize);
    for row in pixels.chunks_exact(stride) {
        out.push(FILTER_NONE);
        out.extend_from_slice(row);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_raster_has_expected_length() {
        for (w, h) in [(1, 1), (3, 2), (192, 192), (7, 513)] {
            let buf = solid_raster(w, h, Rgb::new(1, 2, 3)).unwrap();
            assert_eq!(buf.len(), h as usize * (1 + 3 * w as usize));
        }
    }

    #[test]
    fn every_row_starts_with_filter_byte() {
        let color = Rgb::new(0x2c, 0x3e, 0x50);
        let buf = solid_raster(4, 3, color).unwrap();
        for row in buf.chunks(scanline_len(4)) {
            assert_eq!(row[0], FILTER_NONE);
            assert_eq!(&row[1..4], &[0x2c, 0x3e, 0x50]);
            assert_eq!(&row[10..13], &[0x2c, 0x3e, 0x50]);
        }
    }

    #[test]
    fn zero_sides_are_rejected() {
        assert!(matches!(
            solid_raster(0, 10, Rgb::BLACK),
            Err(Error::InvalidDimensions(_))
        ));
        assert!(matches!(
            solid_raster(10, 0, Rgb::BLACK),
            Err(Error::InvalidDimensions(_))
        ));
    }

    #[test]
    fn rgb_pixels_get_filter_bytes() {
        let pixels = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];
        let buf = raster_from_rgb(2, 2, &pixels).unwrap();
        assert_eq!(buf, vec![0, 1, 2, 3, 4, 5, 6, 0, 7, 8, 9, 10, 11, 12]);
    }

    #[test]
    fn rgb_pixels_must_match_dimensions() {
        let err = raster_from_rgb(2, 2, &[0; 11]).unwrap_err();
        assert!(err.to_string().contains("needs 12"));
    }
}
