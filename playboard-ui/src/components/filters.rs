//! Filter Dropdowns
//!
//! Every `.filtro` container is one member of the group; its `.filtro-btn`
//! opens it and closes the rest.

use std::rc::Rc;

use web_sys::{Document, Element, Event};

use playboard::{FilterConfig, FilterToggle, FilterView};

use crate::dom::{self, UiError};

pub struct DomFilterView {
    containers: Vec<Element>,
    active_class: String,
}

impl FilterView for DomFilterView {
    fn set_active(&self, index: usize, active: bool) {
        if let Some(container) = self.containers.get(index) {
            dom::set_class(container, &self.active_class, active);
        }
    }
}

pub fn bind_filters(document: &Document, config: &FilterConfig) -> Result<Rc<FilterToggle>, UiError> {
    let container_selector = format!(".{}", config.container_class);
    let containers = dom::query_all(document, &container_selector)?;
    if containers.is_empty() {
        return Err(UiError::MissingElement(container_selector));
    }

    let triggers = dom::query_all(document, &format!(".{}", config.trigger_class))?;

    let view = Rc::new(DomFilterView {
        containers: containers.clone(),
        active_class: config.active_class.clone(),
    });
    let toggle = Rc::new(FilterToggle::new(containers.len(), view));

    for trigger in triggers {
        let Some(container) = trigger.closest(&container_selector)? else {
            tracing::warn!(selector = %container_selector, "Filter trigger outside any container");
            continue;
        };
        let Some(index) = containers.iter().position(|c| *c == container) else {
            continue;
        };

        let handler = Rc::clone(&toggle);
        dom::listen(&trigger, "click", move |event: Event| {
            // Keep the document handler from closing what we just opened
            event.stop_propagation();
            handler.on_trigger_click(index);
        })?;
    }

    let handler = Rc::clone(&toggle);
    dom::listen(document, "click", move |_| handler.on_document_click())?;

    tracing::debug!(count = containers.len(), "Filters bound");
    Ok(toggle)
}
