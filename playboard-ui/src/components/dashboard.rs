//! Stream Analytics Dashboard
//!
//! Charts go through the page's Chart.js global; the error and empty-state
//! panels replace the contents of the analysis section.

use std::rc::Rc;

use leptos::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, HtmlElement};

use playboard::{
    AnalyticsSource, ChartSpec, DashboardConfig, DashboardLoader, DashboardOutcome, DashboardView,
    HostContext, RenderError,
};

const PANEL_TITLE: &str = "Streams Ativas na Twitch";

#[wasm_bindgen]
extern "C" {
    /// Chart.js, loaded by the page from its CDN
    #[wasm_bindgen(js_name = Chart)]
    pub type ChartJs;

    #[wasm_bindgen(constructor, catch, js_class = "Chart")]
    fn new(context: &JsValue, config: &JsValue) -> Result<ChartJs, JsValue>;
}

pub struct DomDashboardView {
    document: Document,
    panel_selector: String,
}

impl DomDashboardView {
    pub fn new(document: Document, panel_selector: &str) -> Self {
        Self {
            document,
            panel_selector: panel_selector.to_string(),
        }
    }

    fn replace_panel(&self, panel: impl FnOnce() -> View + 'static) {
        let section = self
            .document
            .query_selector(&self.panel_selector)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());

        match section {
            Some(section) => {
                section.set_inner_html("");
                mount_to(section, panel);
            }
            None => {
                tracing::warn!(selector = %self.panel_selector, "Analysis section not found");
            }
        }
    }
}

impl DashboardView for DomDashboardView {
    fn show_error(&self, game_name: &str, detail: &str) {
        let game = game_name.to_string();
        let detail = detail.to_string();
        self.replace_panel(move || view! { <ErrorPanel game=game detail=detail/> }.into_view());
    }

    fn show_no_data(&self, game_name: &str) {
        let game = game_name.to_string();
        self.replace_panel(move || view! { <NoDataPanel game=game/> }.into_view());
    }

    fn draw_chart(&self, chart: &ChartSpec) -> Result<(), RenderError> {
        let canvas = self
            .document
            .get_element_by_id(&chart.canvas_id)
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
            .ok_or_else(|| RenderError::MissingElement(chart.canvas_id.clone()))?;

        let context = canvas
            .get_context("2d")
            .map_err(js_error)?
            .ok_or_else(|| RenderError::Library("2d context unavailable".to_string()))?;

        let json = chart
            .to_json()
            .map_err(|e| RenderError::Library(e.to_string()))?;
        let config = js_sys::JSON::parse(&json).map_err(js_error)?;

        ChartJs::new(&context, &config).map_err(js_error)?;
        tracing::debug!(canvas = %chart.canvas_id, "Chart drawn");
        Ok(())
    }
}

fn js_error(value: JsValue) -> RenderError {
    RenderError::Library(format!("{:?}", value))
}

#[component]
fn ErrorPanel(game: String, detail: String) -> impl IntoView {
    view! {
        <div class="text-center p-8 bg-red-100 rounded-lg border border-red-400">
            <h2 class="text-3xl font-bold mb-4 text-gray-800">{PANEL_TITLE}</h2>
            <p class="text-lg text-red-800">
                "Erro ao carregar os dados de análise para " <strong>{game}</strong> "."
            </p>
            <p class="text-sm text-red-700 mt-2">"Detalhes: " {detail}</p>
        </div>
    }
}

#[component]
fn NoDataPanel(game: String) -> impl IntoView {
    view! {
        <div class="text-center p-8 bg-yellow-100 rounded-lg border border-yellow-400">
            <h2 class="text-3xl font-bold mb-4 text-gray-800">{PANEL_TITLE}</h2>
            <p class="text-lg text-yellow-800">
                "Não encontramos streams ativas para " <strong>{game}</strong> " no momento."
            </p>
            <p class="text-sm text-yellow-700 mt-2">
                "Os gráficos serão exibidos assim que as transmissões forem iniciadas."
            </p>
        </div>
    }
}

/// Whether this page shows the dashboard at all
pub fn has_dashboard(document: &Document, config: &DashboardConfig) -> bool {
    let has_panel = matches!(document.query_selector(&config.panel_selector), Ok(Some(_)));
    has_panel
        || document.get_element_by_id(&config.ratings_canvas_id).is_some()
        || document.get_element_by_id(&config.viewers_canvas_id).is_some()
}

/// Fetch the analytics for the host page's game and render them
pub async fn load_dashboard(
    document: Document,
    config: DashboardConfig,
    host: HostContext,
    source: Rc<dyn AnalyticsSource>,
) -> DashboardOutcome {
    let view = Rc::new(DomDashboardView::new(document, &config.panel_selector));
    DashboardLoader::new(config, source, view).load(&host).await
}
