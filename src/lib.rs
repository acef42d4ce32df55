#![doc = include_str!("../README.md")]

#[doc(inline)]
pub use carousel_core::*;

#[doc(inline)]
pub use carousel_web as web;

pub mod prelude {
    //! Commonly used types in one import.
    pub use carousel_core::{
        Breakpoint, BreakpointTable, Carousel, CarouselConfig, Navigation, Surface, Viewport,
    };
    pub use carousel_web::{WebCarousel, WebError};
}
