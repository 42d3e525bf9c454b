//! Theme Toggle
//!
//! Dark class on `<body>` plus the glyph on the toggle button.

use std::rc::Rc;

use web_sys::{Document, HtmlElement, Window};

use playboard::{MemoryStore, PreferenceStore, Theme, ThemeConfig, ThemeSwitcher, ThemeView};

use crate::dom::{self, UiError};
use crate::storage::LocalStorageStore;

pub struct DomThemeView {
    body: HtmlElement,
    toggle: HtmlElement,
    dark_class: String,
}

impl ThemeView for DomThemeView {
    fn apply(&self, theme: Theme) {
        dom::set_class(&self.body, &self.dark_class, theme == Theme::Dark);
        self.toggle.set_text_content(Some(theme.glyph()));
    }
}

/// Restore the saved theme and wire the toggle button
pub fn bind_theme(
    window: &Window,
    document: &Document,
    config: &ThemeConfig,
) -> Result<Rc<ThemeSwitcher>, UiError> {
    let toggle: HtmlElement = dom::element_by_id(document, &config.toggle_id)?;
    let body = document
        .body()
        .ok_or_else(|| UiError::MissingElement("body".to_string()))?;

    let store: Rc<dyn PreferenceStore> = match LocalStorageStore::open(window) {
        Ok(store) => Rc::new(store),
        Err(e) => {
            tracing::warn!(error = %e, "Theme preference will not survive a reload");
            Rc::new(MemoryStore::new())
        }
    };

    let view = Rc::new(DomThemeView {
        body,
        toggle: toggle.clone(),
        dark_class: config.dark_class.clone(),
    });
    let switcher = Rc::new(ThemeSwitcher::init(&config.storage_key, store, view));

    let handler = Rc::clone(&switcher);
    dom::listen(&toggle, "click", move |_| {
        handler.toggle();
    })?;

    Ok(switcher)
}
