#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Platform-independent model for the responsive carousel.
//!
//! Everything here is pure state plus arithmetic: breakpoint resolution,
//! slide sizing, pixel offsets and navigation. Rendering backends plug in
//! through the [`Surface`] trait, which is the only place the model touches
//! the outside world.
//!
//! # Positioning
//!
//! The track position is a single pixel offset. After every layout or
//! navigation step it satisfies `0 <= offset <= max_offset`, where
//! `max_offset = max(0, slide_count * slide_width - viewport_width)`.

pub mod breakpoint;
pub mod carousel;
pub mod config;
pub mod error;
pub mod event;
pub mod layout;
pub mod surface;

pub use breakpoint::{Breakpoint, BreakpointTable};
pub use carousel::Carousel;
pub use config::CarouselConfig;
pub use error::ConfigError;
pub use event::Navigation;
pub use layout::{Layout, Viewport};
pub use surface::Surface;
