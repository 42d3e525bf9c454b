//! DOM Helpers
//!
//! Element lookup and listener registration shared by the widgets.

use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, Window};

/// Errors binding widgets to the page
#[derive(Error, Debug)]
pub enum UiError {
    #[error("No window: not running in a browser")]
    NoWindow,

    /// Page does not carry the element a widget needs
    #[error("Element not found: {0}")]
    MissingElement(String),

    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        UiError::Js(format!("{:?}", value))
    }
}

pub fn window() -> Result<Window, UiError> {
    web_sys::window().ok_or(UiError::NoWindow)
}

pub fn document() -> Result<Document, UiError> {
    window()?.document().ok_or(UiError::NoWindow)
}

/// `document.getElementById` cast to the expected element type
pub fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, UiError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| UiError::MissingElement(format!("#{}", id)))?
        .dyn_into::<T>()
        .map_err(|_| UiError::MissingElement(format!("#{} (unexpected element type)", id)))
}

/// `document.querySelectorAll` as a vector of elements
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, UiError> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Register `handler` for `event` on `target` for the lifetime of the page
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), UiError> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Add or remove one class
pub fn set_class(element: &Element, class: &str, on: bool) {
    let classes = element.class_list();
    let result = if on {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    if let Err(e) = result {
        tracing::warn!(class, error = ?e, "Failed to update class list");
    }
}

/// Run `f` once the DOM is parsed (now, if it already is)
pub fn on_ready(document: &Document, f: impl FnOnce() + 'static) -> Result<(), UiError> {
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }
    listen(document, "DOMContentLoaded", once(f))
}

/// Run `f` once the page and its resources have loaded (now, if they have)
pub fn on_load(window: &Window, document: &Document, f: impl FnOnce() + 'static) -> Result<(), UiError> {
    if document.ready_state() == "complete" {
        f();
        return Ok(());
    }
    listen(window, "load", once(f))
}

fn once(f: impl FnOnce() + 'static) -> impl FnMut(Event) + 'static {
    let mut f = Some(f);
    move |_| {
        if let Some(f) = f.take() {
            f();
        }
    }
}
