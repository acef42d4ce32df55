use carousel_core::{Surface, Viewport};
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::WebError;

/// Class of the clipping viewport element.
pub const VIEWPORT_SELECTOR: &str = ".carousel__viewport";
/// Class of the translated track element.
pub const TRACK_SELECTOR: &str = ".carousel__track";
/// Class of the "previous" button.
pub const PREV_SELECTOR: &str = ".carousel__nav--prev";
/// Class of the "next" button.
pub const NEXT_SELECTOR: &str = ".carousel__nav--next";

/// Returns the browser window and its document.
pub fn window_and_document() -> Result<(Window, Document), WebError> {
    let window = web_sys::window().ok_or(WebError::DomUnavailable)?;
    let document = window.document().ok_or(WebError::DomUnavailable)?;
    Ok((window, document))
}

/// DOM elements making up one carousel.
///
/// Implements [`Surface`] so the core model can measure and move it.
#[derive(Debug, Clone)]
pub struct CarouselDom {
    window: Window,
    root: HtmlElement,
    viewport: Option<HtmlElement>,
    track: HtmlElement,
    slides: Vec<HtmlElement>,
    prev: Option<Element>,
    next: Option<Element>,
}

impl CarouselDom {
    /// Locates the carousel subtree under the first element matching `selector`.
    ///
    /// # Errors
    ///
    /// Returns [`WebError::RootNotFound`] when nothing matches and
    /// [`WebError::MissingElement`] when the root has no track.
    pub fn locate(selector: &str) -> Result<Self, WebError> {
        let (window, document) = window_and_document()?;
        let root = document
            .query_selector(selector)?
            .ok_or_else(|| WebError::RootNotFound(selector.to_string()))?;
        let root = as_html(root)?;

        let track = root
            .query_selector(TRACK_SELECTOR)?
            .ok_or_else(|| WebError::MissingElement {
                root: selector.to_string(),
                part: TRACK_SELECTOR,
            })?;
        let track = as_html(track)?;

        let viewport = root
            .query_selector(VIEWPORT_SELECTOR)?
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        if viewport.is_none() {
            warn!(selector, "carousel has no viewport element, measuring the track");
        }

        let slides = collect_slides(&track);

        let prev = root.query_selector(PREV_SELECTOR)?;
        let next = root.query_selector(NEXT_SELECTOR)?;
        if prev.is_none() || next.is_none() {
            warn!(selector, "carousel navigation buttons missing, keyboard only");
        }

        Ok(Self {
            window,
            root,
            viewport,
            track,
            slides,
            prev,
            next,
        })
    }

    /// The root element.
    #[must_use]
    pub const fn root(&self) -> &HtmlElement {
        &self.root
    }

    /// The "previous" button, if present.
    #[must_use]
    pub const fn prev_button(&self) -> Option<&Element> {
        self.prev.as_ref()
    }

    /// The "next" button, if present.
    #[must_use]
    pub const fn next_button(&self) -> Option<&Element> {
        self.next.as_ref()
    }

    /// The owning window.
    #[must_use]
    pub const fn window(&self) -> &Window {
        &self.window
    }
}

impl Surface for CarouselDom {
    fn measure(&self) -> Viewport {
        let window_width = self
            .window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0);
        let width = self.viewport.as_ref().unwrap_or(&self.track).client_width();
        Viewport::new(window_width, f64::from(width))
    }

    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn set_slide_width(&mut self, width: f64) {
        let basis = slide_basis(width);
        let max = px(width);
        for slide in &self.slides {
            let style = slide.style();
            if let Err(err) = style
                .set_property("flex", &basis)
                .and_then(|()| style.set_property("max-width", &max))
            {
                warn!(error = ?err, "failed to size carousel slide");
            }
        }
    }

    fn set_track_offset(&mut self, offset: f64) {
        if let Err(err) = self
            .track
            .style()
            .set_property("transform", &translate_x(offset))
        {
            warn!(error = ?err, "failed to move carousel track");
        }
    }
}

fn as_html(element: Element) -> Result<HtmlElement, WebError> {
    element
        .dyn_into::<HtmlElement>()
        .map_err(|e| WebError::from(wasm_bindgen::JsValue::from(e)))
}

fn collect_slides(track: &HtmlElement) -> Vec<HtmlElement> {
    let children = track.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Formats a CSS pixel length.
pub(crate) fn px(value: f64) -> String {
    format!("{value}px")
}

/// Formats the `flex` shorthand that pins a slide to `width` pixels.
pub(crate) fn slide_basis(width: f64) -> String {
    format!("0 0 {}", px(width))
}

/// Formats the track transform for `offset` pixels scrolled past.
pub(crate) fn translate_x(offset: f64) -> String {
    if offset > 0.0 {
        format!("translateX(-{})", px(offset))
    } else {
        "translateX(0px)".to_string()
    }
}
