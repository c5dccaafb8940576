//! Drawn icons: a filled canvas with a centered label.
//!
//! The font is chosen once when the generator is built. Each render walks the
//! label plan (preferred label, fallback label, built-in `W`) and draws the
//! first one that can be measured, so a missing font or an unsupported glyph
//! never fails the render.

use crate::rendering::canvas::Canvas;
use crate::rendering::font::{choose, render_plan, select_font, FontFace};
use crate::rendering::layout::label_px;
use crate::rendering::paint::icon_display_list;
use crate::{Error, Generator, IconConfig, RenderedIcon, Result};

pub struct DrawnGenerator {
    config: IconConfig,
    font: FontFace,
    builtin: FontFace,
}

impl DrawnGenerator {
    /// Name of the font the generator settled on.
    pub fn font_name(&self) -> String {
        self.font.name()
    }
}

impl Generator for DrawnGenerator {
    fn new(config: IconConfig) -> Result<Self> {
        config.validate()?;
        let font = select_font(config.font_path.as_deref());
        Ok(Self {
            config,
            font,
            builtin: FontFace::Builtin,
        })
    }

    fn name(&self) -> &'static str {
        "drawn"
    }

    fn config(&self) -> &IconConfig {
        &self.config
    }

    fn render(&self, size: u32) -> Result<RenderedIcon> {
        if size == 0 {
            return Err(Error::InvalidDimensions("icon size must be positive".into()));
        }

        let px = label_px(size, self.config.font_scale);
        let plan = render_plan(
            &self.font,
            &self.builtin,
            &self.config.label,
            &self.config.fallback_label,
        );
        let (chosen, bounds) = choose(&plan, px)?;

        let commands = icon_display_list(
            size,
            self.config.background,
            chosen.label,
            px,
            &bounds,
            self.config.fill,
        );
        let mut canvas = Canvas::new(size, self.config.background);
        canvas.paint(&commands, chosen.font);

        Ok(RenderedIcon::square(size, canvas.to_png()?))
    }
}
