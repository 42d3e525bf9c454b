//! Playboard Browser Bundle
//!
//! Binds the Playboard widgets to the server-rendered pages of the game
//! catalogue. The pages own the markup; this crate only attaches listeners,
//! renders the dynamic fragments with Leptos, and calls the JSON endpoints
//! with gloo-net.
//!
//! # Architecture
//!
//! Each widget lives in [`components`] as a `bind_*` function that looks up
//! its elements, builds the controller from the `playboard` crate with a DOM
//! view, and registers event handlers. A page without a widget's elements
//! simply skips that widget.

pub mod api;
pub mod app;
pub mod components;
pub mod dom;
pub mod host;
pub mod logging;
pub mod runtime;
pub mod storage;

pub use app::start;
pub use dom::UiError;
