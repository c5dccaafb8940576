/// Label placement on a square canvas

/// Axis-aligned bounds of a laid-out label, in pixels, relative to the
/// origin the label was laid out at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl TextBounds {
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Smallest bounds containing both `self` and `other`.
    pub fn union(&self, other: &TextBounds) -> TextBounds {
        TextBounds {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

/// Origin to lay the label out at so its bounding box is centered on a
/// `canvas` x `canvas` square.
///
/// The box's top-left lands at `((canvas - w) / 2, (canvas - h) / 2)`; the
/// bounds offset is subtracted so glyph side bearings don't skew it.
pub fn centered_origin(canvas: u32, bounds: &TextBounds) -> (f32, f32) {
    let size = canvas as f32;
    let x = (size - bounds.width()) / 2.0 - bounds.min_x;
    let y = (size - bounds.height()) / 2.0 - bounds.min_y;
    (x, y)
}

/// Label height in pixels for an icon of `size` pixels.
pub fn label_px(size: u32, font_scale: f32) -> f32 {
    (size as f32 * font_scale).floor().max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_offset_bounds_center_directly() {
        let b = TextBounds { min_x: 0.0, min_y: 0.0, max_x: 80.0, max_y: 112.0 };
        assert_eq!(centered_origin(192, &b), (56.0, 40.0));
    }

    #[test]
    fn bearings_are_compensated() {
        let b = TextBounds { min_x: 4.0, min_y: 10.0, max_x: 64.0, max_y: 90.0 };
        let (x, y) = centered_origin(100, &b);
        // box lands at ((100 - 60) / 2, (100 - 80) / 2)
        assert_eq!(x + b.min_x, 20.0);
        assert_eq!(y + b.min_y, 10.0);
    }

    #[test]
    fn union_covers_both() {
        let a = TextBounds { min_x: 0.0, min_y: 5.0, max_x: 10.0, max_y: 20.0 };
        let b = TextBounds { min_x: -2.0, min_y: 8.0, max_x: 6.0, max_y: 30.0 };
        let u = a.union(&b);
        assert_eq!(u, TextBounds { min_x: -2.0, min_y: 5.0, max_x: 10.0, max_y: 30.0 });
        assert_eq!(u.width(), 12.0);
    }

    #[test]
    fn label_px_scales_and_floors() {
        assert_eq!(label_px(192, 0.6), 115.0);
        assert_eq!(label_px(512, 0.6), 307.0);
        assert_eq!(label_px(1, 0.1), 1.0);
    }
}
