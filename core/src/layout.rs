//! Slide sizing and scroll bounds.
//!
//! All values are CSS pixels.

/// Offsets this close to either bound snap onto it.
pub const SNAP_EPSILON: f64 = 1e-6;

/// What the backend measured before a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Window inner width, used for breakpoint resolution.
    pub window_width: f64,
    /// Rendered width of the clipping viewport element.
    pub width: f64,
}

impl Viewport {
    /// Creates a new measurement.
    #[must_use]
    pub const fn new(window_width: f64, width: f64) -> Self {
        Self {
            window_width,
            width,
        }
    }
}

/// Result of a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Layout {
    /// Number of slides that fit in the viewport.
    pub slides_to_show: u32,
    /// Width given to every slide.
    pub slide_width: f64,
    /// Largest valid track offset.
    pub max_offset: f64,
}

impl Layout {
    /// Computes slide width and offset bound for `slide_count` slides.
    ///
    /// A zero `slides_to_show` is treated as one, and negative or non-finite
    /// viewport widths as zero.
    #[must_use]
    pub fn compute(viewport_width: f64, slides_to_show: u32, slide_count: usize) -> Self {
        let slides_to_show = slides_to_show.max(1);
        let viewport_width = if viewport_width.is_finite() {
            viewport_width.max(0.0)
        } else {
            0.0
        };
        let slide_width = viewport_width / f64::from(slides_to_show);
        #[allow(clippy::cast_precision_loss)]
        let content_width = slide_count as f64 * slide_width;
        let max_offset = content_width - viewport_width;
        Self {
            slides_to_show,
            slide_width,
            max_offset: if max_offset < SNAP_EPSILON { 0.0 } else { max_offset },
        }
    }

    /// Clamps `offset` into `[0, max_offset]`, snapping values within
    /// [`SNAP_EPSILON`] of either end onto it.
    #[must_use]
    pub fn clamp(&self, offset: f64) -> f64 {
        if offset.is_nan() || offset < SNAP_EPSILON {
            return 0.0;
        }
        if self.max_offset - offset < SNAP_EPSILON {
            return self.max_offset;
        }
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nine_slides_three_shown() {
        let layout = Layout::compute(900.0, 3, 9);
        assert_eq!(layout.slide_width, 300.0);
        assert_eq!(layout.max_offset, 1800.0);
    }

    #[test]
    fn test_fewer_slides_than_viewport() {
        let layout = Layout::compute(900.0, 3, 2);
        assert_eq!(layout.max_offset, 0.0);
        assert_eq!(layout.clamp(300.0), 0.0);
    }

    #[test]
    fn test_exact_fit_has_no_overflow() {
        for width in [301.0, 302.0, 1000.0, 1399.0] {
            assert_eq!(Layout::compute(width, 3, 3).max_offset, 0.0, "{width}");
        }
    }

    #[test]
    fn test_no_slides() {
        let layout = Layout::compute(900.0, 3, 0);
        assert_eq!(layout.slide_width, 300.0);
        assert_eq!(layout.max_offset, 0.0);
    }

    #[test]
    fn test_degenerate_inputs() {
        let layout = Layout::compute(f64::NAN, 0, 5);
        assert_eq!(layout.slides_to_show, 1);
        assert_eq!(layout.slide_width, 0.0);
        assert_eq!(layout.max_offset, 0.0);
        assert_eq!(layout.clamp(f64::NAN), 0.0);
    }

    #[test]
    fn test_clamp_snaps_to_bounds() {
        let layout = Layout::compute(302.0, 3, 4);
        let step = layout.slide_width;
        assert!(step < layout.max_offset);
        assert_eq!(layout.clamp(step), layout.max_offset);
        assert_eq!(layout.clamp(1e-12), 0.0);
        assert_eq!(layout.clamp(-1e-12), 0.0);
        assert_eq!(layout.clamp(50.0), 50.0);
    }

    #[test]
    fn test_fractional_width() {
        let layout = Layout::compute(1000.0, 3, 4);
        assert!((layout.slide_width - 333.333_333).abs() < 1e-3);
        assert!((layout.max_offset - 333.333_333).abs() < 1e-3);
        assert_eq!(layout.clamp(-20.0), 0.0);
    }
}
