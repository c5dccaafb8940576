//! Solid-color icons assembled byte-for-byte.
//!
//! No imaging library is involved: the raster buffer, chunks, zlib stream and
//! checksums all come from [`crate::rendering::png`].

use crate::rendering::png::encode_solid;
use crate::{Generator, IconConfig, RenderedIcon, Result};

/// Writes single-color placeholder icons in the configured background color.
pub struct ManualGenerator {
    config: IconConfig,
}

impl Generator for ManualGenerator {
    fn new(config: IconConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    fn name(&self) -> &'static str {
        "manual"
    }

    fn config(&self) -> &IconConfig {
        &self.config
    }

    fn render(&self, size: u32) -> Result<RenderedIcon> {
        let png_data = encode_solid(size, size, self.config.background)?;
        Ok(RenderedIcon::square(size, png_data))
    }
}
