//! Page Bootstrap
//!
//! Widgets bind once the DOM is parsed; the dashboard waits for the full
//! page load so Chart.js is available.

use std::rc::Rc;

use web_sys::{Document, Window};

use playboard::{AnalyticsSource, Config, DashboardOutcome, EventLoop, HostContext, SuggestionSource};

use crate::api::HttpBackend;
use crate::components;
use crate::dom::{self, UiError};
use crate::host;
use crate::logging;
use crate::runtime::BrowserEventLoop;

struct App {
    window: Window,
    document: Document,
    config: Config,
    host: HostContext,
    backend: Rc<HttpBackend>,
    event_loop: Rc<BrowserEventLoop>,
}

/// Read configuration, start logging and schedule every widget
pub fn start() -> Result<(), UiError> {
    let window = dom::window()?;
    let document = dom::document()?;

    let (config, config_error) = match host::read_config(&window) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    logging::init(&config.logging);
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "Invalid window.{}, using defaults", host::CONFIG_GLOBAL);
    }

    let app = Rc::new(App {
        host: host::read_host_context(&window),
        backend: Rc::new(HttpBackend::new(&config.api.base_url)),
        event_loop: Rc::new(BrowserEventLoop),
        window: window.clone(),
        document: document.clone(),
        config,
    });

    let ready = Rc::clone(&app);
    dom::on_ready(&document, move || ready.bind_widgets())?;

    dom::on_load(&window, &document, move || app.load_dashboard())?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Playboard started");
    Ok(())
}

impl App {
    fn bind_widgets(&self) {
        let source: Rc<dyn SuggestionSource> = self.backend.clone();
        let event_loop: Rc<dyn EventLoop> = self.event_loop.clone();
        if let Err(e) =
            components::bind_suggestions(&self.document, &self.config.suggestions, source, event_loop)
        {
            tracing::debug!(error = %e, "Search suggestions not on this page");
        }

        if let Err(e) = components::bind_filters(&self.document, &self.config.filters) {
            tracing::debug!(error = %e, "Filters not on this page");
        }

        if let Err(e) = components::bind_theme(&self.window, &self.document, &self.config.theme) {
            tracing::debug!(error = %e, "Theme toggle not on this page");
        }
    }

    fn load_dashboard(&self) {
        if !components::has_dashboard(&self.document, &self.config.dashboard) {
            tracing::debug!("No dashboard on this page");
            return;
        }

        let source: Rc<dyn AnalyticsSource> = self.backend.clone();
        let document = self.document.clone();
        let config = self.config.dashboard.clone();
        let host = self.host.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let outcome = components::load_dashboard(document, config, host, source).await;
            if let DashboardOutcome::Rendered { charts } = outcome {
                tracing::info!(charts, "Dashboard rendered");
            }
        });
    }
}
