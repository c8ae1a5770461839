//! Dioxus-based benchmark dashboard for model-bench
//!
//! A pure Rust frontend that compiles to WebAssembly. The dashboard loads
//! the fixed benchmark dataset from data.json and renders four chart views
//! over it: success rate, cost, speed and a combined cost/accuracy scatter
//! with drag-to-zoom. All view-state logic lives in model-bench-core; this
//! crate owns the signals, the event wiring and the SVG rendering.

use dioxus::prelude::*;
use gloo_net::http::Request;
use model_bench_core::{
    derive_view, BenchmarkDataset, ChartMode, DragZoom, Orientation, Preferences, Selection,
    SelectorMode, ViewEntry, ZoomState,
};

mod charts;
mod selector;
mod storage;
mod styles;

use charts::{BarChart, ScatterChart};
use selector::ModelSelector;
use storage::BrowserStore;
use styles::*;

/// Global theme context - true = dark mode
#[derive(Clone, Copy)]
pub(crate) struct ThemeCtx(pub(crate) Signal<bool>);

const DATA_URL: &str = "data.json";

/// How many models the quick select and the first visit pick
const DEFAULT_TOP_N: usize = 10;

fn main() {
    tracing_wasm::set_as_global_default();
    launch(App);
}

#[component]
fn App() -> Element {
    // Theme state - default to dark mode
    let mut dark_mode = use_signal(|| true);
    use_context_provider(|| ThemeCtx(dark_mode));

    let mut dataset = use_signal(|| None::<BenchmarkDataset>);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| true);

    use_effect(move || {
        // theme is restored first so the shell does not flash the wrong one
        dark_mode.set(Preferences::load(&BrowserStore).dark_mode);
        spawn(async move {
            match load_dataset().await {
                Ok(data) => {
                    tracing::info!("loaded {} benchmark records", data.len());
                    dataset.set(Some(data));
                    loading.set(false);
                }
                Err(e) => {
                    tracing::warn!("failed to load benchmark data: {e}");
                    error.set(Some(e));
                    loading.set(false);
                }
            }
        });
    });

    let dark = *dark_mode.read();
    let subtitle = dataset.read().as_ref().map(header_subtitle);

    rsx! {
        div { style: "{app_style(dark)}",
            Header { subtitle }

            if *loading.read() {
                div { style: "{status_style(dark)}", "Loading benchmark data..." }
            } else if let Some(err) = error.read().as_ref() {
                div { style: "{error_style(dark)}",
                    strong { "Failed to load data: " }
                    "{err}"
                    p { style: "margin-top: 0.5rem;",
                        "Make sure "
                        code { style: "{code_style(dark)}", "data.json" }
                        " is served next to the app."
                    }
                }
            } else if let Some(data) = dataset.read().as_ref() {
                if data.is_empty() {
                    div { style: "{status_style(dark)}", "No benchmark data." }
                } else {
                    Dashboard { dataset: data.clone() }
                }
            }
        }
    }
}

fn header_subtitle(dataset: &BenchmarkDataset) -> String {
    let mut parts: Vec<String> = Vec::new();
    if let Some(suite) = &dataset.suite {
        parts.push(suite.clone());
    }
    if let Some(tests) = dataset.records().first().map(|r| r.total_tests) {
        parts.push(format!("{tests} tests per model"));
    }
    if let Some(ts) = dataset.generated_at {
        parts.push(format!("updated {}", ts.format("%Y-%m-%d")));
    }
    parts.join(" · ")
}

#[component]
fn Header(subtitle: Option<String>) -> Element {
    let ThemeCtx(mut dark_mode) = use_context::<ThemeCtx>();
    let dark = *dark_mode.read();

    rsx! {
        header { style: "{header_style(dark)}",
            div {
                h1 { style: "{title_style(dark)}", "Model Benchmark Results" }
                if let Some(text) = subtitle {
                    p { style: "{subtitle_style(dark)}", "{text}" }
                }
            }
            button {
                style: "{toggle_btn_style(dark)}",
                onclick: move |_| {
                    let next = !*dark_mode.peek();
                    dark_mode.set(next);
                    Preferences::store_theme(&BrowserStore, next);
                },
                if dark { "☀ light" } else { "☾ dark" }
            }
        }
    }
}

#[component]
fn Dashboard(dataset: BenchmarkDataset) -> Element {
    let ThemeCtx(dark_mode) = use_context::<ThemeCtx>();
    let dark = *dark_mode.read();

    let initial = dataset.clone();
    let mut selected = use_signal(move || Selection::top_n(&initial, DEFAULT_TOP_N));
    let mut orientation = use_signal(Orientation::default);
    let mut selector_mode = use_signal(SelectorMode::default);
    let mut show_percentages = use_signal(|| true);
    let mut collapsed = use_signal(|| false);
    let mut active_tab = use_signal(|| ChartMode::SuccessRate);
    let zoom = use_signal(ZoomState::default);
    let drag = use_signal(DragZoom::default);
    let hovered = use_signal(|| None::<String>);

    // One-shot preference restore. The store is only reachable once the app
    // is mounted, so this runs after the first render and overwrites the
    // defaults; every later change writes through at its call site.
    {
        let restore_dataset = dataset.clone();
        use_effect(move || {
            let prefs = Preferences::load(&BrowserStore);
            selected.set(
                prefs
                    .selected
                    .unwrap_or_else(|| Selection::top_n(&restore_dataset, DEFAULT_TOP_N)),
            );
            orientation.set(prefs.orientation);
            selector_mode.set(prefs.selector_mode);
            show_percentages.set(prefs.show_percentages);
            collapsed.set(prefs.sidebar_collapsed);
        });
    }

    let tab = *active_tab.read();
    let view = derive_view(&dataset, &selected.read(), tab);

    rsx! {
        div { style: "{layout_style(dark)}",
            ModelSelector {
                dataset: dataset.clone(),
                selected,
                selector_mode,
                show_percentages,
                collapsed,
            }

            div { style: "flex: 1; min-width: 0;",
                div { style: "{tab_bar_style(dark)}",
                    for mode in ChartMode::ALL {
                        button {
                            key: "{mode.label()}",
                            style: "{tab_btn_style(dark, tab == mode)}",
                            onclick: move |_| active_tab.set(mode),
                            "{mode.label()}"
                        }
                    }
                }

                if tab == ChartMode::Combined {
                    ScatterPanel { entries: view.clone(), zoom, drag, hovered, selected }
                } else {
                    BarPanel { entries: view.clone(), mode: tab, orientation }
                }
            }
        }
    }
}

fn panel_copy(mode: ChartMode, entries: &[ViewEntry]) -> (&'static str, String) {
    match mode {
        ChartMode::SuccessRate => {
            let desc = match entries.first() {
                Some(first) => format!(
                    "Percentage of correct answers out of {} tests per model",
                    first.total_tests
                ),
                None => "Percentage of correct answers per model".to_string(),
            };
            ("Success Rate by Model", desc)
        }
        ChartMode::Cost => (
            "Cost per Test",
            "Average cost per test in cents (lower is better)".to_string(),
        ),
        ChartMode::Speed => (
            "Response Speed",
            "Average response time in seconds (lower is better)".to_string(),
        ),
        ChartMode::Combined => (
            "Performance vs Total Cost",
            "Top-left is ideal: higher accuracy, lower total cost. Click and drag to zoom."
                .to_string(),
        ),
    }
}

#[component]
fn BarPanel(
    entries: Vec<ViewEntry>,
    mode: ChartMode,
    mut orientation: Signal<Orientation>,
) -> Element {
    let ThemeCtx(dark_mode) = use_context::<ThemeCtx>();
    let dark = *dark_mode.read();

    let current = *orientation.read();
    let (title, desc) = panel_copy(mode, &entries);

    rsx! {
        div { style: "{panel_style(dark)}",
            div { style: "{panel_header_style(dark)}",
                div {
                    h2 { style: "{panel_title_style(dark)}", "{title}" }
                    p { style: "{panel_desc_style(dark)}", "{desc}" }
                }
                div { style: "display: flex; gap: 0.35rem;",
                    button {
                        style: "{badge_btn_style(dark, current == Orientation::Horizontal)}",
                        onclick: move |_| {
                            orientation.set(Orientation::Horizontal);
                            Preferences::store_orientation(&BrowserStore, Orientation::Horizontal);
                        },
                        "Horizontal"
                    }
                    button {
                        style: "{badge_btn_style(dark, current == Orientation::Vertical)}",
                        onclick: move |_| {
                            orientation.set(Orientation::Vertical);
                            Preferences::store_orientation(&BrowserStore, Orientation::Vertical);
                        },
                        "Vertical"
                    }
                }
            }
            div { style: "padding: 0.5rem;",
                BarChart { entries: entries.clone(), mode, orientation: current }
            }
        }
    }
}

#[component]
fn ScatterPanel(
    entries: Vec<ViewEntry>,
    mut zoom: Signal<ZoomState>,
    drag: Signal<DragZoom>,
    hovered: Signal<Option<String>>,
    mut selected: Signal<Selection>,
) -> Element {
    let ThemeCtx(dark_mode) = use_context::<ThemeCtx>();
    let dark = *dark_mode.read();

    let (title, desc) = panel_copy(ChartMode::Combined, &entries);
    let is_zoomed = zoom.read().is_zoomed();

    rsx! {
        div { style: "{panel_style(dark)}",
            div { style: "{panel_header_style(dark)}",
                div {
                    h2 { style: "{panel_title_style(dark)}", "{title}" }
                    p { style: "{panel_desc_style(dark)}", "{desc}" }
                }
                if is_zoomed {
                    button {
                        style: "{small_btn_style(dark)}",
                        onclick: move |_| zoom.write().reset(),
                        "Reset Zoom"
                    }
                }
            }
            div { style: "padding: 0.5rem;",
                ScatterChart {
                    entries: entries.clone(),
                    zoom,
                    drag,
                    hovered,
                    on_dismiss: move |model: String| {
                        let next = selected.peek().remove(&model);
                        Preferences::store_selection(&BrowserStore, &next);
                        selected.set(next);
                    },
                }
            }
        }
    }
}

async fn load_dataset() -> Result<BenchmarkDataset, String> {
    let response = Request::get(DATA_URL)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch data: {e}"))?;

    if !response.ok() {
        return Err(format!(
            "HTTP error: {} {}",
            response.status(),
            response.status_text()
        ));
    }

    let text = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {e}"))?;

    BenchmarkDataset::from_json_str(&text).map_err(|e| format!("Failed to parse data: {e}"))
}
