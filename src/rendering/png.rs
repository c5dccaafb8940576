/// PNG assembler: signature, IHDR, IDAT, IEND
///
/// Everything here is a pure function from dimensions and pixels to bytes.
/// Writing the result to disk is left to the caller.

use crate::rendering::chunk::{write_chunk, ChunkType};
use crate::rendering::raster::{raster_from_rgb, solid_raster};
use crate::{Result, Rgb};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};

/// Fixed 8 byte PNG file signature
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// Truecolor RGB, no alpha
pub const COLOR_TYPE_RGB: u8 = 2;

/// Image header fields for an 8-bit truecolor, non-interlaced image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ihdr {
    pub width: u32,
    pub height: u32,
}

impl Ihdr {
    pub const LEN: usize = 13;

    /// Serialize the 13 byte IHDR payload.
    pub fn to_bytes(&self) -> [u8; Self::LEN] {
        let mut b = [0u8; Self::LEN];
        b[0..4].copy_from_slice(&self.width.to_be_bytes());
        b[4..8].copy_from_slice(&self.height.to_be_bytes());
        b[8] = 8; // bit depth
        b[9] = COLOR_TYPE_RGB;
        b[10] = 0; // compression: deflate
        b[11] = 0; // filter method: adaptive
        b[12] = 0; // interlace: none
        b
    }
}

/// Compress a raster buffer into a zlib stream at the highest standard level.
pub fn compress_raster(raster: &[u8]) -> Vec<u8> {
    compress_to_vec_zlib(raster, CompressionLevel::BestCompression as u8)
}

fn assemble(ihdr: Ihdr, raster: &[u8]) -> Result<Vec<u8>> {
    let idat = compress_raster(raster);
    log::debug!(
        "{}x{} raster: {} bytes -> {} compressed",
        ihdr.width,
        ihdr.height,
        raster.len(),
        idat.len()
    );

    let mut out = Vec::with_capacity(PNG_SIGNATURE.len() + 3 * 12 + Ihdr::LEN + idat.len());
    out.extend_from_slice(&PNG_SIGNATURE);
    write_chunk(&mut out, ChunkType::IHDR, &ihdr.to_bytes())?;
    write_chunk(&mut out, ChunkType::IDAT, &idat)?;
    write_chunk(&mut out, ChunkType::IEND, &[])?;
    Ok(out)
}

/// Encode a complete PNG of the given size filled with a single color.
pub fn encode_solid(width: u32, height: u32, color: Rgb) -> Result<Vec<u8>> {
    let raster = solid_raster(width, height, color)?;
    assemble(Ihdr { width, height }, &raster)
}

/// Encode a complete PNG from packed row-major RGB pixels.
pub fn encode_rgb8(width: u32, height: u32, pixels: &[u8]) -> Result<Vec<u8>> {
    let raster = raster_from_rgb(width, height, pixels)?;
    assemble(Ihdr { width, height }, &raster)
}
