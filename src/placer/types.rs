//! Core geometric records: anchors and labels.

/// A fixed point of interest that a label annotates.
///
/// Anchors are immutable for the duration of a run and are index-aligned
/// 1:1 with the label collection: `anchors[i]` belongs to `labels[i]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Anchor {
    /// X position in canvas coordinates.
    pub x: f64,
    /// Y position in canvas coordinates (y grows downward).
    pub y: f64,
    /// Radius of the region the label must not overlap, modeling the
    /// rendered marker/glyph size.
    pub r: f64,
}

impl Anchor {
    pub fn new(x: f64, y: f64, r: f64) -> Self {
        Self { x, y, r }
    }

    /// True if all coordinates are finite.
    pub(crate) fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.r.is_finite()
    }
}

/// A movable axis-aligned text box tied to one anchor by shared index.
///
/// `(x, y)` is the bottom-left reference corner in screen space (top-left
/// origin, y grows downward): the box spans `[x, x+width] × [y-height, y]`.
/// The solver mutates `x` and `y` in place; `width` and `height` are never
/// touched. `count` and `show_line` are outputs, overwritten by the
/// post-pass of each run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Label {
    /// X position of the reference corner.
    pub x: f64,
    /// Y position of the reference corner.
    pub y: f64,
    /// Box width (fixed).
    pub width: f64,
    /// Box height (fixed).
    pub height: f64,
    /// Number of other labels at a safe viewing distance. Overwritten by
    /// the post-pass of each run.
    pub count: usize,
    /// Whether the leader line should be drawn. Set by the post-pass:
    /// `false` only when every other label is already safely distant.
    pub show_line: bool,
}

impl Label {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            count: 0,
            show_line: true,
        }
    }

    /// Left edge of the box.
    pub fn left(&self) -> f64 {
        self.x
    }

    /// Right edge of the box.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Top edge of the box (smaller y).
    pub fn top(&self) -> f64 {
        self.y - self.height
    }

    /// Bottom edge of the box (larger y, the reference corner).
    pub fn bottom(&self) -> f64 {
        self.y
    }

    /// True if position and dimensions are finite.
    pub(crate) fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_edges() {
        let lab = Label::new(10.0, 50.0, 40.0, 12.0);
        assert_eq!(lab.left(), 10.0);
        assert_eq!(lab.right(), 50.0);
        assert_eq!(lab.top(), 38.0);
        assert_eq!(lab.bottom(), 50.0);
    }

    #[test]
    fn test_new_label_defaults() {
        let lab = Label::new(0.0, 0.0, 1.0, 1.0);
        assert_eq!(lab.count, 0);
        assert!(lab.show_line);
    }

    #[test]
    fn test_finite_checks() {
        assert!(Anchor::new(1.0, 2.0, 3.0).is_finite());
        assert!(!Anchor::new(f64::NAN, 2.0, 3.0).is_finite());
        assert!(Label::new(1.0, 2.0, 3.0, 4.0).is_finite());
        assert!(!Label::new(1.0, f64::INFINITY, 3.0, 4.0).is_finite());
    }
}
