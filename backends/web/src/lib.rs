#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Browser backend for the responsive carousel.
//!
//! [`CarouselDom`] binds the [`carousel_core`] model to the DOM contract
//! (`.carousel__viewport`, `.carousel__track`, `.carousel__nav--prev`,
//! `.carousel__nav--next`), and [`WebCarousel`] wires it to click, keydown
//! and resize listeners. Instantiating the module runs [`init_page`] once
//! the document is ready.

mod app;
mod dom;
mod error;
pub mod logging;
mod page;

pub use app::WebCarousel;
pub use dom::{CarouselDom, NEXT_SELECTOR, PREV_SELECTOR, TRACK_SELECTOR, VIEWPORT_SELECTOR};
pub use error::WebError;
pub use page::{DEFAULT_ROOT, YEAR_ID, init_page, init_page_with, on_ready, set_footer_year};

use wasm_bindgen::prelude::*;

/// Module entry point: installs console logging and schedules page init.
///
/// # Errors
///
/// Returns an error when no DOM is available.
#[cfg(feature = "autostart")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    logging::install();
    on_ready(init_page)?;
    Ok(())
}

/// Sets the console log level (`error`, `warn`, `info`, `debug`, `trace`, `off`).
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) {
    logging::set_log_level(level);
}
