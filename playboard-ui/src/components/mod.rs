//! Page Widgets
//!
//! One `bind_*` entry point per widget. Each fails with
//! [`UiError::MissingElement`](crate::UiError::MissingElement) when the page
//! does not carry the widget.

pub mod dashboard;
pub mod filters;
pub mod suggestions;
pub mod theme;

pub use dashboard::{has_dashboard, load_dashboard, DomDashboardView};
pub use filters::{bind_filters, DomFilterView};
pub use suggestions::{bind_suggestions, DomSuggestionView, SuggestionRows};
pub use theme::{bind_theme, DomThemeView};
