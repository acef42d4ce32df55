use std::{cell::RefCell, rc::Rc};

use carousel_core::{Carousel, CarouselConfig, Navigation};
use tracing::{debug, info};
use wasm_bindgen::{JsCast, JsValue, closure::Closure, prelude::wasm_bindgen};
use web_sys::{Event, EventTarget, KeyboardEvent};

use crate::{dom::CarouselDom, error::WebError};

type Shared = Rc<RefCell<Carousel<CarouselDom>>>;

/// An event listener registered on a DOM target.
#[derive(Debug)]
struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn detach(&self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref())
        {
            debug!(event = self.event, error = ?err, "failed to detach carousel listener");
        }
    }
}

/// A carousel mounted into the page with its event listeners attached.
///
/// Listeners are detached when this handle is dropped (or freed from
/// JavaScript). Use [`WebCarousel::persist`] to keep them for the page
/// lifetime instead.
#[wasm_bindgen(js_name = Carousel)]
#[derive(Debug)]
pub struct WebCarousel {
    state: Shared,
    listeners: Vec<Listener>,
}

impl Drop for WebCarousel {
    fn drop(&mut self) {
        for listener in self.listeners.drain(..) {
            listener.detach();
        }
    }
}

impl WebCarousel {
    /// Locates the carousel under `selector`, lays it out and wires up
    /// clicks, arrow keys and window resizes.
    ///
    /// # Errors
    ///
    /// Fails before any listener is attached when the root or track is
    /// missing, and propagates DOM exceptions raised while attaching.
    pub fn mount(selector: &str, config: CarouselConfig) -> Result<Self, WebError> {
        config.validate()?;
        let dom = CarouselDom::locate(selector)?;
        dom.root().set_attribute("tabindex", "0")?;

        let root: EventTarget = dom.root().clone().into();
        let window: EventTarget = dom.window().clone().into();
        let prev = dom.prev_button().cloned();
        let next = dom.next_button().cloned();

        let state: Shared = Rc::new(RefCell::new(Carousel::new(dom, config)));
        let mut mounted = Self {
            state,
            listeners: Vec::new(),
        };

        mounted.listen(&window, "resize", |carousel, _| carousel.resize())?;
        mounted.listen(&root, "keydown", |carousel, event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
                return;
            };
            if let Some(navigation) = Navigation::from_key(&key) {
                carousel.navigate(navigation);
            }
        })?;
        if let Some(prev) = prev {
            mounted.listen(&prev, "click", |carousel, _| carousel.prev())?;
        }
        if let Some(next) = next {
            mounted.listen(&next, "click", |carousel, _| carousel.next())?;
        }

        info!(
            selector,
            slides_to_show = mounted.slides_to_show(),
            "carousel mounted"
        );
        Ok(mounted)
    }

    fn listen<F>(
        &mut self,
        target: &EventTarget,
        event: &'static str,
        mut handler: F,
    ) -> Result<(), WebError>
    where
        F: FnMut(&mut Carousel<CarouselDom>, &Event) + 'static,
    {
        let state = Rc::clone(&self.state);
        let closure: Closure<dyn FnMut(Event)> = Closure::new(move |dom_event: Event| {
            if let Ok(mut carousel) = state.try_borrow_mut() {
                handler(&mut carousel, &dom_event);
            } else {
                debug!(event, "carousel busy, event dropped");
            }
        });
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        self.listeners.push(Listener {
            target: target.clone(),
            event,
            closure,
        });
        Ok(())
    }

    /// Keeps the listeners registered until the page unloads.
    pub fn persist(mut self) {
        for listener in std::mem::take(&mut self.listeners) {
            listener.closure.forget();
        }
    }
}

#[wasm_bindgen(js_class = Carousel)]
impl WebCarousel {
    /// Constructs a carousel from JavaScript.
    ///
    /// `options` may be omitted or shaped like
    /// `{ breakpoints: [{ width, slidesToShow }], gap }`.
    ///
    /// # Errors
    ///
    /// Throws when the root is missing or the options are invalid.
    #[wasm_bindgen(constructor)]
    pub fn new(selector: &str, options: Option<js_sys::Object>) -> Result<Self, WebError> {
        let config = match options {
            Some(options) => config_from_js(&options)?,
            None => CarouselConfig::default(),
        };
        Self::mount(selector, config)
    }

    /// Moves one slide towards the start.
    pub fn prev(&self) {
        self.with(Carousel::prev);
    }

    /// Moves one slide towards the end.
    pub fn next(&self) {
        self.with(Carousel::next);
    }

    /// Re-resolves the breakpoint and lays the carousel out again.
    pub fn resize(&self) {
        self.with(Carousel::resize);
    }

    /// Current track offset in pixels.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.state.try_borrow().map_or(0.0, |c| c.offset())
    }

    /// Whether a previous step would move the track.
    #[must_use]
    #[wasm_bindgen(js_name = canPrev)]
    pub fn can_prev(&self) -> bool {
        self.state.try_borrow().is_ok_and(|c| c.can_prev())
    }

    /// Whether a next step would move the track.
    #[must_use]
    #[wasm_bindgen(js_name = canNext)]
    pub fn can_next(&self) -> bool {
        self.state.try_borrow().is_ok_and(|c| c.can_next())
    }

    /// Cosmetic gap in rem.
    #[must_use]
    pub fn gap(&self) -> f64 {
        self.state
            .try_borrow()
            .map_or(carousel_core::config::DEFAULT_GAP, |c| c.gap())
    }

    /// Number of slides currently visible.
    #[must_use]
    #[wasm_bindgen(js_name = slidesToShow)]
    pub fn slides_to_show(&self) -> u32 {
        self.state
            .try_borrow()
            .map_or(1, |c| c.layout().slides_to_show)
    }
}

impl WebCarousel {
    fn with(&self, f: impl FnOnce(&mut Carousel<CarouselDom>)) {
        if let Ok(mut carousel) = self.state.try_borrow_mut() {
            f(&mut carousel);
        }
    }
}

fn config_from_js(options: &JsValue) -> Result<CarouselConfig, WebError> {
    let text: String = js_sys::JSON::stringify(options)?.into();
    Ok(CarouselConfig::from_json(&text)?)
}
