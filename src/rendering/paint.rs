/// Paint commands for the drawn backend
///
/// An icon is described as a short display list, built once and then
/// executed against a canvas.

use crate::rendering::layout::{centered_origin, TextBounds};
use crate::Rgb;

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    /// Fill the whole canvas
    Fill { rgb: Rgb },
    /// Draw `text` at `px` pixels tall with its layout origin at `(x, y)`
    Text {
        x: f32,
        y: f32,
        px: f32,
        text: String,
        rgb: Rgb,
    },
}

/// Display list for one icon: background, then a centered label.
pub fn icon_display_list(
    size: u32,
    background: Rgb,
    label: &str,
    px: f32,
    bounds: &TextBounds,
    fill: Rgb,
) -> Vec<PaintCommand> {
    let (x, y) = centered_origin(size, bounds);
    vec![
        PaintCommand::Fill { rgb: background },
        PaintCommand::Text {
            x,
            y,
            px,
            text: label.to_string(),
            rgb: fill,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn background_is_painted_first() {
        let bounds = TextBounds { min_x: 0.0, min_y: 0.0, max_x: 80.0, max_y: 112.0 };
        let list = icon_display_list(192, Rgb::SLATE, "W", 115.0, &bounds, Rgb::WHITE);
        assert_eq!(list.len(), 2);
        assert_eq!(list[0], PaintCommand::Fill { rgb: Rgb::SLATE });
        match &list[1] {
            PaintCommand::Text { x, y, text, rgb, .. } => {
                assert_eq!((*x, *y), (56.0, 40.0));
                assert_eq!(text, "W");
                assert_eq!(*rgb, Rgb::WHITE);
            }
            _ => panic!("unexpected"),
        }
    }
}
