//! Model selector sidebar
//!
//! Two flavors of the same selection surface: a scrollable checkbox list
//! and a command-palette style dropdown. Both share the quick-select
//! badges and the substring search, and both write every change through to
//! the preference store.

use dioxus::prelude::*;
use model_bench_core::{
    model_color, BenchmarkDataset, Preferences, Selection, SelectorMode,
};

use crate::storage::BrowserStore;
use crate::styles::*;
use crate::ThemeCtx;

/// Rows that survive the search filter, with their stable dataset index
fn filter_models<'a>(
    dataset: &'a BenchmarkDataset,
    query: &str,
) -> Vec<(usize, &'a str, f64)> {
    let query = query.trim().to_lowercase();
    dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, r)| query.is_empty() || r.model.to_lowercase().contains(&query))
        .map(|(i, r)| (i, r.model.as_str(), r.success_rate))
        .collect()
}

#[component]
pub fn ModelSelector(
    dataset: BenchmarkDataset,
    mut selected: Signal<Selection>,
    mut selector_mode: Signal<SelectorMode>,
    mut show_percentages: Signal<bool>,
    mut collapsed: Signal<bool>,
) -> Element {
    let ThemeCtx(dark_mode) = use_context::<ThemeCtx>();
    let dark = *dark_mode.read();

    let search = use_signal(String::new);

    if *collapsed.read() {
        return rsx! {
            div { style: "{sidebar_collapsed_style(dark)}",
                button {
                    style: "{small_btn_style(dark)}",
                    title: "Expand model selector",
                    onclick: move |_| {
                        collapsed.set(false);
                        Preferences::store_sidebar_collapsed(&BrowserStore, false);
                    },
                    "▸"
                }
            }
        };
    }

    let total = dataset.len();
    let selected_count = selected.read().len();
    let mode = *selector_mode.read();
    let show_pct = *show_percentages.read();

    let all_dataset = dataset.clone();
    let top_dataset = dataset.clone();

    rsx! {
        div { style: "{sidebar_style(dark)}",
            div { style: "{sidebar_header_style(dark)}",
                div { style: "display: flex; justify-content: space-between; align-items: center;",
                    span { style: "font-weight: 600; font-size: 0.85rem;", "Model Selector" }
                    button {
                        style: "{small_btn_style(dark)}",
                        title: "Collapse model selector",
                        onclick: move |_| {
                            collapsed.set(true);
                            Preferences::store_sidebar_collapsed(&BrowserStore, true);
                        },
                        "◂"
                    }
                }
                span { style: "font-size: 0.75rem; {muted_style(dark)}",
                    "{selected_count} of {total} models selected"
                }

                div { style: "display: flex; flex-wrap: wrap; gap: 0.35rem;",
                    button {
                        style: "{badge_btn_style(dark, false)}",
                        onclick: move |_| {
                            let next = Selection::all(&all_dataset);
                            Preferences::store_selection(&BrowserStore, &next);
                            selected.set(next);
                        },
                        "All"
                    }
                    button {
                        style: "{badge_btn_style(dark, false)}",
                        onclick: move |_| {
                            let next = Selection::none();
                            Preferences::store_selection(&BrowserStore, &next);
                            selected.set(next);
                        },
                        "None"
                    }
                    button {
                        style: "{badge_btn_style(dark, false)}",
                        onclick: move |_| {
                            let next = Selection::top_n(&top_dataset, 10);
                            Preferences::store_selection(&BrowserStore, &next);
                            selected.set(next);
                        },
                        "Top 10"
                    }
                }

                div { style: "display: flex; flex-wrap: wrap; gap: 0.35rem;",
                    button {
                        style: "{badge_btn_style(dark, mode == SelectorMode::List)}",
                        onclick: move |_| {
                            selector_mode.set(SelectorMode::List);
                            Preferences::store_selector_mode(&BrowserStore, SelectorMode::List);
                        },
                        "List"
                    }
                    button {
                        style: "{badge_btn_style(dark, mode == SelectorMode::Command)}",
                        onclick: move |_| {
                            selector_mode.set(SelectorMode::Command);
                            Preferences::store_selector_mode(&BrowserStore, SelectorMode::Command);
                        },
                        "Command"
                    }
                    button {
                        style: "{badge_btn_style(dark, show_pct)}",
                        title: "Show success rates",
                        onclick: move |_| {
                            let next = !*show_percentages.peek();
                            show_percentages.set(next);
                            Preferences::store_show_percentages(&BrowserStore, next);
                        },
                        "%"
                    }
                }
            }

            if mode == SelectorMode::List {
                ListSelector {
                    dataset: dataset.clone(),
                    selected,
                    show_percentages,
                    search,
                }
            } else {
                CommandSelector {
                    dataset: dataset.clone(),
                    selected,
                    show_percentages,
                    search,
                }
            }
        }
    }
}

/// Scrollable checkbox list
#[component]
fn ListSelector(
    dataset: BenchmarkDataset,
    mut selected: Signal<Selection>,
    show_percentages: Signal<bool>,
    mut search: Signal<String>,
) -> Element {
    let ThemeCtx(dark_mode) = use_context::<ThemeCtx>();
    let dark = *dark_mode.read();

    let query = search.read().clone();
    let rows = filter_models(&dataset, &query);
    let show_pct = *show_percentages.read();

    rsx! {
        div { style: "padding: 0.5rem 0.75rem;",
            input {
                style: "{search_input_style(dark)}",
                r#type: "text",
                placeholder: "Search models...",
                value: "{query}",
                oninput: move |e| search.set(e.value()),
            }
        }
        div { style: "{model_list_style(dark)}",
            for (index, model, rate) in rows {
                {
                    let model = model.to_string();
                    let toggle_model = model.clone();
                    let is_selected = selected.read().contains(&model);
                    rsx! {
                        div {
                            key: "{model}",
                            style: "{model_row_style(dark)}",
                            onclick: move |_| {
                                let next = selected.peek().toggle(&toggle_model);
                                Preferences::store_selection(&BrowserStore, &next);
                                selected.set(next);
                            },
                            input {
                                r#type: "checkbox",
                                checked: is_selected,
                                style: "pointer-events: none;",
                            }
                            span { style: "{color_dot_style(model_color(index))}" }
                            span {
                                style: "font-size: 0.8rem; flex: 1; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                                "{model}"
                            }
                            if show_pct {
                                span { style: "font-size: 0.7rem; {muted_style(dark)}", "{rate:.1}%" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Command-palette flavor: a summary button opening a searchable dropdown
#[component]
fn CommandSelector(
    dataset: BenchmarkDataset,
    mut selected: Signal<Selection>,
    show_percentages: Signal<bool>,
    mut search: Signal<String>,
) -> Element {
    let ThemeCtx(dark_mode) = use_context::<ThemeCtx>();
    let dark = *dark_mode.read();

    let mut open = use_signal(|| false);

    let total = dataset.len();
    let selected_count = selected.read().len();
    let summary = if selected_count == 0 {
        "Select models...".to_string()
    } else if selected_count == total {
        "All models".to_string()
    } else if selected_count == 1 {
        "1 model".to_string()
    } else {
        format!("{selected_count} models")
    };

    let query = search.read().clone();
    let rows = filter_models(&dataset, &query);
    let show_pct = *show_percentages.read();

    rsx! {
        div { style: "padding: 0.5rem 0.75rem; position: relative;",
            button {
                style: "{search_input_style(dark)} text-align: left; cursor: pointer;",
                onclick: move |_| {
                    let current = *open.peek();
                    open.set(!current);
                },
                "{summary} ⇅"
            }

            if *open.read() {
                div { style: "margin-top: 0.35rem;",
                    input {
                        style: "{search_input_style(dark)}",
                        r#type: "text",
                        placeholder: "Search models...",
                        value: "{query}",
                        oninput: move |e| search.set(e.value()),
                    }
                    if rows.is_empty() {
                        div { style: "padding: 1rem; text-align: center; font-size: 0.8rem; {muted_style(dark)}",
                            "No model found."
                        }
                    }
                    div { style: "max-height: 300px; overflow-y: auto; padding: 0.25rem 0;",
                        for (index, model, rate) in rows {
                            {
                                let model = model.to_string();
                                let toggle_model = model.clone();
                                let is_selected = selected.read().contains(&model);
                                rsx! {
                                    div {
                                        key: "{model}",
                                        style: "{model_row_style(dark)}",
                                        onclick: move |_| {
                                            let next = selected.peek().toggle(&toggle_model);
                                            Preferences::store_selection(&BrowserStore, &next);
                                            selected.set(next);
                                        },
                                        span {
                                            style: "width: 1rem; text-align: center; font-size: 0.75rem;",
                                            if is_selected { "✓" } else { "" }
                                        }
                                        span { style: "{color_dot_style(model_color(index))}" }
                                        span {
                                            style: "font-size: 0.8rem; flex: 1; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                                            "{model}"
                                        }
                                        if show_pct {
                                            span { style: "font-size: 0.7rem; {muted_style(dark)}", "{rate:.1}%" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
