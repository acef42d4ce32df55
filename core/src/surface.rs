//! The seam between the model and whatever renders it.

use crate::layout::Viewport;

/// Rendering target driven by a [`Carousel`](crate::Carousel).
///
/// The web backend implements this over DOM elements; tests use an
/// in-memory recorder.
pub trait Surface {
    /// Measures the window and the viewport element.
    fn measure(&self) -> Viewport;

    /// Number of slides inside the track.
    fn slide_count(&self) -> usize;

    /// Sizes every slide to `width` pixels.
    fn set_slide_width(&mut self, width: f64);

    /// Translates the track so that `offset` pixels are scrolled past.
    fn set_track_offset(&mut self, offset: f64);
}
