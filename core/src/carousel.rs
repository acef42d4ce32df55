//! Offset state and navigation.

use tracing::debug;

use crate::{
    config::CarouselConfig,
    event::Navigation,
    layout::{Layout, Viewport},
    surface::Surface,
};

/// A carousel bound to a rendering [`Surface`].
///
/// Construction runs an initial layout pass. Afterwards the backend calls
/// [`Carousel::resize`] on window resizes and [`Carousel::navigate`] on
/// button clicks and arrow keys.
#[derive(Debug)]
pub struct Carousel<S> {
    surface: S,
    config: CarouselConfig,
    layout: Layout,
    offset: f64,
}

impl<S: Surface> Carousel<S> {
    /// Creates a carousel and lays it out once.
    pub fn new(surface: S, config: CarouselConfig) -> Self {
        let mut carousel = Self {
            surface,
            config,
            layout: Layout::default(),
            offset: 0.0,
        };
        carousel.resize();
        carousel
    }

    /// Re-resolves the breakpoint and recomputes the layout.
    ///
    /// Always performs a full pass: the viewport's pixel width can change
    /// while the visible slide count stays the same.
    pub fn resize(&mut self) {
        let viewport = self.surface.measure();
        let slides_to_show = self.config.breakpoints.slides_to_show(viewport.window_width);
        self.apply_layout(viewport, slides_to_show);
    }

    fn apply_layout(&mut self, viewport: Viewport, slides_to_show: u32) {
        self.layout = Layout::compute(viewport.width, slides_to_show, self.surface.slide_count());
        self.surface.set_slide_width(self.layout.slide_width);
        self.offset = self.layout.clamp(self.offset);
        debug!(
            slides_to_show = self.layout.slides_to_show,
            slide_width = self.layout.slide_width,
            max_offset = self.layout.max_offset,
            offset = self.offset,
            "carousel layout"
        );
        self.surface.set_track_offset(self.offset);
    }

    /// Moves one slide in the requested direction, stopping at either end.
    pub fn navigate(&mut self, navigation: Navigation) {
        let step = self.layout.slide_width;
        let target = match navigation {
            Navigation::Previous => self.offset - step,
            Navigation::Next => self.offset + step,
        };
        self.go_to(target);
        debug!(?navigation, offset = self.offset, "carousel navigate");
    }

    /// Moves one slide towards the start.
    pub fn prev(&mut self) {
        self.navigate(Navigation::Previous);
    }

    /// Moves one slide towards the end.
    pub fn next(&mut self) {
        self.navigate(Navigation::Next);
    }

    /// Jumps to `offset`, clamped into the current bounds.
    pub fn go_to(&mut self, offset: f64) {
        self.offset = self.layout.clamp(offset);
        self.surface.set_track_offset(self.offset);
    }

    /// Current track offset in pixels.
    #[must_use]
    pub const fn offset(&self) -> f64 {
        self.offset
    }

    /// Result of the last layout pass.
    #[must_use]
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Whether a previous step would move the track.
    #[must_use]
    pub fn can_prev(&self) -> bool {
        self.offset > 0.0
    }

    /// Whether a next step would move the track.
    #[must_use]
    pub fn can_next(&self) -> bool {
        self.offset < self.layout.max_offset
    }

    /// Cosmetic gap in rem.
    #[must_use]
    pub const fn gap(&self) -> f64 {
        self.config.gap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoint::{Breakpoint, BreakpointTable};

    #[derive(Debug, Default)]
    struct MockSurface {
        window_width: f64,
        width: f64,
        slides: usize,
        slide_width: Option<f64>,
        track_offsets: Vec<f64>,
    }

    impl MockSurface {
        fn new(window_width: f64, width: f64, slides: usize) -> Self {
            Self {
                window_width,
                width,
                slides,
                ..Self::default()
            }
        }

        fn last_offset(&self) -> f64 {
            *self.track_offsets.last().unwrap()
        }
    }

    impl Surface for MockSurface {
        fn measure(&self) -> Viewport {
            Viewport::new(self.window_width, self.width)
        }

        fn slide_count(&self) -> usize {
            self.slides
        }

        fn set_slide_width(&mut self, width: f64) {
            self.slide_width = Some(width);
        }

        fn set_track_offset(&mut self, offset: f64) {
            self.track_offsets.push(offset);
        }
    }

    fn carousel(window: f64, viewport: f64, slides: usize) -> Carousel<MockSurface> {
        Carousel::new(
            MockSurface::new(window, viewport, slides),
            CarouselConfig::default(),
        )
    }

    #[test]
    fn test_initial_layout() {
        let c = carousel(900.0, 900.0, 9);
        assert_eq!(c.layout().slides_to_show, 3);
        assert_eq!(c.layout().slide_width, 300.0);
        assert_eq!(c.layout().max_offset, 1800.0);
        assert_eq!(c.surface.slide_width, Some(300.0));
        assert_eq!(c.surface.track_offsets, vec![0.0]);
    }

    #[test]
    fn test_three_nexts() {
        let mut c = carousel(900.0, 900.0, 9);
        let mut seen = Vec::new();
        for _ in 0..3 {
            c.next();
            seen.push(c.offset());
        }
        assert_eq!(seen, vec![300.0, 600.0, 900.0]);
        assert_eq!(c.surface.last_offset(), 900.0);
    }

    #[test]
    fn test_next_stops_at_max() {
        let mut c = carousel(900.0, 900.0, 9);
        for _ in 0..50 {
            c.next();
            assert!(c.offset() <= c.layout().max_offset);
        }
        assert_eq!(c.offset(), 1800.0);
        assert!(!c.can_next());
        assert!(c.can_prev());
    }

    #[test]
    fn test_prev_stops_at_zero() {
        let mut c = carousel(900.0, 900.0, 9);
        c.next();
        for _ in 0..10 {
            c.prev();
            assert!(c.offset() >= 0.0);
        }
        assert_eq!(c.offset(), 0.0);
        assert!(!c.can_prev());
    }

    #[test]
    fn test_mixed_sequence_stays_in_bounds() {
        let mut c = carousel(650.0, 640.0, 7);
        let steps = [
            Navigation::Next,
            Navigation::Next,
            Navigation::Previous,
            Navigation::Next,
            Navigation::Next,
            Navigation::Next,
            Navigation::Next,
            Navigation::Next,
            Navigation::Previous,
        ];
        for step in steps {
            c.navigate(step);
            assert!((0.0..=c.layout().max_offset).contains(&c.offset()));
        }
    }

    #[test]
    fn test_repeated_resize_is_idempotent() {
        let mut c = carousel(900.0, 900.0, 9);
        c.next();
        c.next();
        let before = c.offset();
        for _ in 0..100 {
            c.resize();
        }
        assert_eq!(c.offset(), before);
        assert_eq!(c.layout().slide_width, 300.0);
    }

    #[test]
    fn test_resize_reclamps_offset() {
        // 4 slides at 3 per row: max = 4*300 - 900 = 300
        let mut c = carousel(900.0, 900.0, 4);
        c.next();
        assert_eq!(c.offset(), 300.0);

        // Shrink to 700px: 2 per row, slide 350, max = 4*350 - 700 = 700
        c.surface.window_width = 700.0;
        c.surface.width = 700.0;
        c.resize();
        assert_eq!(c.layout().slides_to_show, 2);
        assert_eq!(c.offset(), 300.0);

        // Grow to 1200px: 3 per row, slide 400, max = 1600 - 1200 = 400
        c.next();
        assert_eq!(c.offset(), 650.0);
        c.surface.window_width = 1200.0;
        c.surface.width = 1200.0;
        c.resize();
        assert_eq!(c.layout().slides_to_show, 3);
        assert_eq!(c.offset(), 400.0);
        assert_eq!(c.surface.last_offset(), 400.0);
    }

    #[test]
    fn test_resize_same_tier_updates_width() {
        let mut c = carousel(1000.0, 960.0, 6);
        assert_eq!(c.layout().slide_width, 320.0);
        c.surface.width = 990.0;
        c.resize();
        assert_eq!(c.layout().slides_to_show, 3);
        assert_eq!(c.surface.slide_width, Some(330.0));
    }

    #[test]
    fn test_go_to_clamps() {
        let mut c = carousel(900.0, 900.0, 9);
        c.go_to(10_000.0);
        assert_eq!(c.offset(), 1800.0);
        c.go_to(-1.0);
        assert_eq!(c.offset(), 0.0);
    }

    #[test]
    fn test_empty_track() {
        let mut c = carousel(900.0, 900.0, 0);
        c.next();
        assert_eq!(c.offset(), 0.0);
        assert!(!c.can_next());
    }

    #[test]
    fn test_custom_breakpoints_and_gap() {
        let table =
            BreakpointTable::new(vec![Breakpoint::new(0.0, 2), Breakpoint::new(1200.0, 5)])
                .unwrap();
        let c = Carousel::new(
            MockSurface::new(500.0, 480.0, 3),
            CarouselConfig::default().with_breakpoints(table).with_gap(1.5),
        );
        assert_eq!(c.layout().slides_to_show, 2);
        assert_eq!(c.layout().slide_width, 240.0);
        assert_eq!(c.layout().max_offset, 240.0);
        assert!((c.gap() - 1.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fractional_width_reaches_end() {
        // slide width 302/3 leaves the summed offset one ulp short of the bound
        let mut c = carousel(900.0, 302.0, 4);
        c.next();
        assert_eq!(c.offset(), c.layout().max_offset);
        assert!(!c.can_next());

        let before = c.offset();
        c.next();
        assert_eq!(c.offset(), before);

        c.prev();
        assert_eq!(c.offset(), 0.0);
        assert!(!c.can_prev());
    }

    #[test]
    fn test_clicks_to_end_match_hidden_slides() {
        for (window, show) in [(300.0, 1_usize), (600.0, 2), (900.0, 3)] {
            for width in 300..=1400 {
                for slides in 1..=11 {
                    let mut c = carousel(window, f64::from(width), slides);
                    let mut clicks = 0;
                    while c.can_next() && clicks < 32 {
                        c.next();
                        clicks += 1;
                    }
                    assert_eq!(
                        clicks,
                        slides.saturating_sub(show),
                        "width {width}, {show} shown, {slides} slides"
                    );

                    let mut back = 0;
                    while c.can_prev() && back < 32 {
                        c.prev();
                        back += 1;
                    }
                    assert_eq!(back, clicks, "width {width}, {show} shown, {slides} slides");
                    assert_eq!(c.offset(), 0.0);
                }
            }
        }
    }
}
