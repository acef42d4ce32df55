//! Page bootstrap: footer year and the default carousel.

use carousel_core::CarouselConfig;
use tracing::error;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::Document;

use crate::{app::WebCarousel, dom::window_and_document, error::WebError};

/// Selector of the carousel mounted on page load.
pub const DEFAULT_ROOT: &str = ".carousel";
/// Id of the footer element that receives the current year.
pub const YEAR_ID: &str = "year";

/// Runs `init` once the document is parsed.
///
/// # Errors
///
/// Returns an error when the DOM is unavailable or the listener cannot be attached.
pub fn on_ready(init: impl FnOnce() + 'static) -> Result<(), WebError> {
    let (_, document) = window_and_document()?;
    if document.ready_state() != "loading" {
        init();
        return Ok(());
    }
    let callback = Closure::once_into_js(init);
    document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())?;
    Ok(())
}

/// Writes the current year into `#year`, if the page has one.
pub fn set_footer_year(document: &Document) {
    if let Some(el) = document.get_element_by_id(YEAR_ID) {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}

/// Page initialisation: footer year, then the default carousel.
pub fn init_page() {
    init_page_with(DEFAULT_ROOT);
}

/// Fills in the footer year and mounts the carousel under `selector` for the
/// page lifetime. Returns whether a carousel was mounted.
///
/// A construction failure is logged and swallowed so the rest of the page
/// keeps working.
pub fn init_page_with(selector: &str) -> bool {
    let Ok((_, document)) = window_and_document() else {
        error!("carousel page init without a DOM");
        return false;
    };
    set_footer_year(&document);

    match WebCarousel::mount(selector, CarouselConfig::default()) {
        Ok(carousel) => {
            carousel.persist();
            true
        }
        Err(err) => {
            error!(%err, selector, "failed to initialise carousel");
            false
        }
    }
}
