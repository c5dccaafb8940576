//! Fonts and the label fallback chain for the drawn backend
//!
//! Fonts are tried in order: the configured TrueType file, then the built-in
//! bitmap font. Labels are tried in order too: the preferred label, then the
//! fallback label, and finally the built-in font drawing `W`, which always
//! succeeds.

use crate::rendering::bitmap_font;
use crate::rendering::layout::TextBounds;
use crate::{Error, Result};
use ab_glyph::{point, Font, FontVec, GlyphId, OutlinedGlyph, PxScale, ScaleFont};
use std::path::Path;

/// Label of the last-resort strategy; present in the built-in font
pub const LAST_RESORT_LABEL: &str = "W";

/// A font the drawn backend can measure and rasterize with
pub enum FontFace {
    /// Outline font parsed from a TrueType/OpenType file
    TrueType { name: String, font: FontVec },
    /// The built-in 5x7 bitmap font
    Builtin,
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

impl FontFace {
    /// Read and parse a TrueType font file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)
            .map_err(|e| Error::FontLoad(format!("read {}: {}", path.display(), e)))?;
        let font = FontVec::try_from_vec(data)
            .map_err(|e| Error::FontLoad(format!("parse {}: {}", path.display(), e)))?;
        Ok(FontFace::TrueType {
            name: path.display().to_string(),
            font,
        })
    }

    pub fn name(&self) -> String {
        match self {
            FontFace::TrueType { name, .. } => name.clone(),
            FontFace::Builtin => "built-in 5x7".to_string(),
        }
    }

    /// Bounds of `text` at `px` pixels, laid out at the origin.
    ///
    /// Fails if the font lacks a glyph for any character or nothing visible
    /// would be drawn.
    pub fn measure(&self, text: &str, px: f32) -> Result<TextBounds> {
        match self {
            FontFace::TrueType { font, .. } => {
                let glyphs = outline_glyphs(font, text, px, (0.0, 0.0))
                    .map_err(|c| self.missing_glyph(text, c))?;
                glyphs
                    .iter()
                    .map(|g| {
                        let r = g.px_bounds();
                        TextBounds {
                            min_x: r.min.x,
                            min_y: r.min.y,
                            max_x: r.max.x,
                            max_y: r.max.y,
                        }
                    })
                    .reduce(|a, b| a.union(&b))
                    .ok_or_else(|| self.nothing_visible(text))
            }
            FontFace::Builtin => {
                if let Some(c) = text.chars().find(|c| bitmap_font::glyph(*c).is_none()) {
                    return Err(self.missing_glyph(text, c));
                }
                bitmap_font::measure(text, px).ok_or_else(|| self.nothing_visible(text))
            }
        }
    }

    /// Rasterize `text` laid out at `origin`, reporting each covered pixel
    /// as `plot(x, y, coverage)` with coverage in `0.0..=1.0`.
    pub fn rasterize<F: FnMut(i64, i64, f32)>(
        &self,
        text: &str,
        px: f32,
        origin: (f32, f32),
        mut plot: F,
    ) {
        match self {
            FontFace::TrueType { font, .. } => {
                // Unmeasurable labels never reach here; nothing to draw if they do.
                let Ok(glyphs) = outline_glyphs(font, text, px, origin) else {
                    return;
                };
                for g in glyphs {
                    let min = g.px_bounds().min;
                    g.draw(|gx, gy, coverage| {
                        plot(min.x as i64 + gx as i64, min.y as i64 + gy as i64, coverage)
                    });
                }
            }
            FontFace::Builtin => {
                bitmap_font::for_each_pixel(text, px, origin, |x, y| plot(x, y, 1.0))
            }
        }
    }

    fn missing_glyph(&self, text: &str, c: char) -> Error {
        Error::TextMeasure(format!(
            "{:?}: no glyph for {:?} in {}",
            text,
            c,
            self.name()
        ))
    }

    fn nothing_visible(&self, text: &str) -> Error {
        Error::TextMeasure(format!("{:?}: nothing visible in {}", text, self.name()))
    }
}

/// Lay out `text` on one line with its top edge (ascent) at `origin.1`.
///
/// Returns the outlined glyphs, or the first character the font has no glyph for.
fn outline_glyphs(
    font: &FontVec,
    text: &str,
    px: f32,
    origin: (f32, f32),
) -> std::result::Result<Vec<OutlinedGlyph>, char> {
    let scale = PxScale::from(px);
    let scaled = font.as_scaled(scale);
    let baseline = origin.1 + scaled.ascent();

    let mut caret = origin.0;
    let mut last: Option<GlyphId> = None;
    let mut out = Vec::new();
    for c in text.chars() {
        let id = font.glyph_id(c);
        if id.0 == 0 {
            return Err(c);
        }
        if let Some(prev) = last {
            caret += scaled.kern(prev, id);
        }
        let glyph = id.with_scale_and_position(scale, point(caret, baseline));
        caret += scaled.h_advance(id);
        last = Some(id);
        if let Some(outlined) = font.outline_glyph(glyph) {
            out.push(outlined);
        }
    }
    Ok(out)
}

/// Pick the first font in the chain that loads; the built-in font otherwise.
pub fn select_font(path: Option<&Path>) -> FontFace {
    if let Some(path) = path {
        match FontFace::load(path) {
            Ok(face) => {
                log::debug!("using font {}", path.display());
                return face;
            }
            Err(e) => log::warn!("{}; falling back to built-in font", e),
        }
    }
    FontFace::Builtin
}

/// One entry of the render plan
#[derive(Debug, Clone, Copy)]
pub struct LabelStrategy<'a> {
    pub font: &'a FontFace,
    pub label: &'a str,
}

/// Ordered label strategies: preferred label, fallback label, then the
/// built-in font with `W`.
pub fn render_plan<'a>(
    font: &'a FontFace,
    builtin: &'a FontFace,
    label: &'a str,
    fallback_label: &'a str,
) -> Vec<LabelStrategy<'a>> {
    vec![
        LabelStrategy { font, label },
        LabelStrategy { font, label: fallback_label },
        LabelStrategy { font: builtin, label: LAST_RESORT_LABEL },
    ]
}

/// Measure each strategy in turn and return the first that succeeds.
pub fn choose<'a>(plan: &[LabelStrategy<'a>], px: f32) -> Result<(LabelStrategy<'a>, TextBounds)> {
    for strategy in plan {
        match strategy.font.measure(strategy.label, px) {
            Ok(bounds) => {
                log::debug!("label {:?} with {}", strategy.label, strategy.font.name());
                return Ok((*strategy, bounds));
            }
            Err(e) => log::info!("{}; trying next label", e),
        }
    }
    Err(Error::Render("no label strategy could be measured".into()))
}
