//! Rendering: the hand-rolled PNG encoder and the canvas/text pipeline

pub mod chunk;
pub mod png;
pub mod raster;

// 5x7 fallback glyphs; always available to the drawn backend
#[cfg(feature = "drawn")]
pub mod bitmap_font;
#[cfg(feature = "drawn")]
pub mod canvas;
#[cfg(feature = "drawn")]
pub mod font;
#[cfg(feature = "drawn")]
pub mod layout;
#[cfg(feature = "drawn")]
pub mod paint;

/// A rendered icon: dimensions plus the encoded PNG file bytes.
#[derive(Debug, Clone)]
pub struct RenderedIcon {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

impl RenderedIcon {
    pub fn square(size: u32, png_data: Vec<u8>) -> Self {
        Self { width: size, height: size, png_data }
    }
}
