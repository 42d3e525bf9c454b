//! Search Suggestions
//!
//! Dropdown under the search input. Rows are rendered by Leptos from a
//! signal the controller writes through [`DomSuggestionView`].

use std::rc::Rc;

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlFormElement, HtmlInputElement};

use playboard::{
    ClickTarget, EventLoop, SuggestionConfig, SuggestionController, SuggestionList,
    SuggestionSource, SuggestionView,
};

use crate::dom::{self, UiError};

pub const NO_RESULTS_TEXT: &str = "Nenhum resultado encontrado.";
pub const LOAD_ERROR_TEXT: &str = "Erro ao carregar.";

const ROW_CLASS: &str = "p-3 cursor-pointer hover:bg-blue-50 transition duration-150 truncate";

pub struct DomSuggestionView {
    input: HtmlInputElement,
    list: HtmlElement,
    form: HtmlFormElement,
    hidden_class: String,
    rows: RwSignal<SuggestionList>,
}

impl SuggestionView for DomSuggestionView {
    fn render(&self, list: &SuggestionList) {
        self.rows.set(list.clone());
    }

    fn set_visible(&self, visible: bool) {
        dom::set_class(&self.list, &self.hidden_class, !visible);
    }

    fn fill_input(&self, value: &str) {
        self.input.set_value(value);
    }

    fn submit(&self) {
        // requestSubmit fires the submit event, so page handlers still run
        if let Err(e) = self.form.request_submit() {
            tracing::error!(error = ?e, "Search form submit failed");
        }
    }
}

/// Contents of the suggestion list
#[component]
pub fn SuggestionRows(rows: RwSignal<SuggestionList>, on_pick: Callback<usize>) -> impl IntoView {
    view! {
        {move || match rows.get() {
            SuggestionList::Cleared => view! {}.into_view(),
            SuggestionList::NoResults => view! {
                <li class="p-3 text-gray-500">{NO_RESULTS_TEXT}</li>
            }.into_view(),
            SuggestionList::Failed => view! {
                <li class="p-3 text-red-500">{LOAD_ERROR_TEXT}</li>
            }.into_view(),
            SuggestionList::Items(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| view! {
                    <li class=ROW_CLASS on:click=move |_| on_pick.call(index)>
                        {item.image.map(|src| view! {
                            <img src=src alt="" class="inline-block w-8 h-8 mr-2 rounded object-cover"/>
                        })}
                        {item.name}
                    </li>
                })
                .collect_view(),
        }}
    }
}

/// Wire the search input, its suggestion list and the enclosing form
pub fn bind_suggestions(
    document: &Document,
    config: &SuggestionConfig,
    source: Rc<dyn SuggestionSource>,
    event_loop: Rc<dyn EventLoop>,
) -> Result<SuggestionController, UiError> {
    let input: HtmlInputElement = dom::element_by_id(document, &config.input_id)?;
    let list: HtmlElement = dom::element_by_id(document, &config.list_id)?;
    let form: HtmlFormElement = dom::element_by_id(document, &config.form_id)?;

    let rows = create_rw_signal(SuggestionList::Cleared);
    let view = Rc::new(DomSuggestionView {
        input: input.clone(),
        list: list.clone(),
        form,
        hidden_class: config.hidden_class.clone(),
        rows,
    });
    let controller = SuggestionController::new(config, source, view, event_loop);

    let picker = controller.clone();
    let on_pick = Callback::new(move |index: usize| picker.select(index));
    list.set_inner_html("");
    mount_to(list, move || view! { <SuggestionRows rows=rows on_pick=on_pick/> });

    let handler = controller.clone();
    let field = input.clone();
    dom::listen(&input, "input", move |_| handler.on_input(&field.value()))?;

    let handler = controller.clone();
    let field = input.clone();
    dom::listen(&input, "focus", move |_| handler.on_focus(&field.value()))?;

    let handler = controller.clone();
    let input_id = config.input_id.clone();
    let list_selector = format!("#{}", config.list_id);
    dom::listen(document, "click", move |event: Event| {
        handler.on_document_click(classify_click(&event, &input_id, &list_selector));
    })?;

    tracing::debug!(input = %config.input_id, "Search suggestions bound");
    Ok(controller)
}

fn classify_click(event: &Event, input_id: &str, list_selector: &str) -> ClickTarget {
    let Some(target) = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
    else {
        return ClickTarget::Outside;
    };

    if target.id() == input_id {
        return ClickTarget::Input;
    }

    match target.closest(list_selector) {
        Ok(Some(_)) => ClickTarget::List,
        _ => ClickTarget::Outside,
    }
}
