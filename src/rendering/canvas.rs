//! RGB canvas backed by the `image` crate

use crate::rendering::font::FontFace;
use crate::rendering::paint::PaintCommand;
use crate::{Result, Rgb};
use image::{ImageFormat, RgbImage};
use std::io::Cursor;

pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// A `size` x `size` canvas filled with `background`.
    pub fn new(size: u32, background: Rgb) -> Self {
        Self {
            image: RgbImage::from_pixel(size, size, image::Rgb(background.to_array())),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Blend `color` over the pixel at `(x, y)` with the given coverage.
    /// Points outside the canvas are ignored.
    pub fn blend(&mut self, x: i64, y: i64, coverage: f32, color: Rgb) {
        if x < 0 || y < 0 || x >= self.width() as i64 || y >= self.height() as i64 {
            return;
        }
        let a = coverage.clamp(0.0, 1.0);
        if a == 0.0 {
            return;
        }
        let px = self.image.get_pixel_mut(x as u32, y as u32);
        for (dst, src) in px.0.iter_mut().zip(color.to_array()) {
            let v = *dst as f32 * (1.0 - a) + src as f32 * a;
            *dst = v.round().clamp(0.0, 255.0) as u8;
        }
    }

    /// Execute a display list, drawing text with `font`.
    pub fn paint(&mut self, commands: &[PaintCommand], font: &FontFace) {
        for cmd in commands {
            match cmd {
                PaintCommand::Fill { rgb } => {
                    let fill = image::Rgb(rgb.to_array());
                    for p in self.image.pixels_mut() {
                        *p = fill;
                    }
                }
                PaintCommand::Text { x, y, px, text, rgb } => {
                    font.rasterize(text, *px, (*x, *y), |gx, gy, c| self.blend(gx, gy, c, *rgb));
                }
            }
        }
    }

    /// Serialize the canvas as a PNG file.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let mut out = Cursor::new(Vec::new());
        self.image.write_to(&mut out, ImageFormat::Png)?;
        Ok(out.into_inner())
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }
}
