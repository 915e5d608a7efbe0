use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Element, ScrollBehavior, ScrollToOptions, Window};

use crate::error::DomError;
use crate::motion::scroll::{ScrollMetrics, ScrollSignal};
use crate::motion::view::Bounds;
use crate::motion::Subscription;

fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

/// The browser window's vertical scroll position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WindowScroll;

impl ScrollSignal for WindowScroll {
    fn metrics(&self) -> Result<ScrollMetrics, DomError> {
        let window = window()?;
        let root = window
            .document()
            .ok_or(DomError::NoDocument)?
            .document_element()
            .ok_or(DomError::NoDocumentElement)?;
        let offset = window
            .scroll_y()
            .unwrap_or_else(|_| f64::from(root.scroll_top()));
        Ok(ScrollMetrics {
            offset,
            scroll_height: f64::from(root.scroll_height()),
            client_height: f64::from(root.client_height()),
        })
    }

    fn subscribe(&self, mut listener: Box<dyn FnMut(ScrollMetrics)>) -> Result<Subscription, DomError> {
        let window = window()?;
        let callback = Closure::<dyn FnMut()>::new(move || match WindowScroll.metrics() {
            Ok(metrics) => listener(metrics),
            Err(err) => log::warn!("Dropping scroll sample: {}", err),
        });
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(|err| DomError::Listener {
                event: "scroll",
                reason: format!("{:?}", err),
            })?;
        Ok(Subscription::new(move || {
            if let Err(err) =
                window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            {
                log::warn!("Failed to detach scroll listener: {:?}", err);
            }
        }))
    }
}

pub fn element_bounds(element: &Element) -> Bounds {
    let rect = element.get_bounding_client_rect();
    Bounds {
        top: rect.top(),
        bottom: rect.bottom(),
    }
}

/// Instant jump, used when a page mounts.
pub fn jump_to_top() {
    if let Ok(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

pub fn smooth_scroll_to_top() -> Result<(), DomError> {
    let window = window()?;
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Current calendar year from the browser clock.
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
