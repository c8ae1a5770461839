//! Derived chart views
//!
//! Pure projections of the dataset for each chart mode. Filtering iterates
//! the full dataset, so color assignment stays keyed to a record's position
//! in the unfiltered collection rather than its position in the current
//! view. A model keeps its color across selection changes and across all
//! four modes.

use std::cmp::Ordering;

use crate::data::BenchmarkDataset;
use crate::selection::Selection;

/// Fixed display palette; colors are assigned by dataset index modulo this list
pub const MODEL_COLORS: [&str; 20] = [
    "#22c55e", // green
    "#3b82f6", // blue
    "#f97316", // orange
    "#eab308", // yellow
    "#ec4899", // pink
    "#8b5cf6", // purple
    "#06b6d4", // cyan
    "#ef4444", // red
    "#84cc16", // lime
    "#f59e0b", // amber
    "#6366f1", // indigo
    "#14b8a6", // teal
    "#d946ef", // fuchsia
    "#0ea5e9", // sky
    "#10b981", // emerald
    "#a855f7", // violet
    "#f43f5e", // rose
    "#64748b", // slate
    "#78716c", // stone
    "#71717a", // zinc
];

/// Color for the record at `index` in the full dataset
pub fn model_color(index: usize) -> &'static str {
    MODEL_COLORS[index % MODEL_COLORS.len()]
}

/// The four chart modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartMode {
    SuccessRate,
    Cost,
    Speed,
    Combined,
}

impl ChartMode {
    pub const ALL: [ChartMode; 4] = [
        ChartMode::SuccessRate,
        ChartMode::Cost,
        ChartMode::Speed,
        ChartMode::Combined,
    ];

    /// Tab label
    pub fn label(self) -> &'static str {
        match self {
            ChartMode::SuccessRate => "Success Rate",
            ChartMode::Cost => "Cost",
            ChartMode::Speed => "Speed",
            ChartMode::Combined => "Combined",
        }
    }
}

/// One row of a derived view
#[derive(Debug, Clone, PartialEq)]
pub struct ViewEntry {
    pub model: String,
    pub correct: u32,
    pub total_tests: u32,
    /// Percentage of correct answers
    pub success_rate: f64,
    /// Average cost per test, in cents
    pub cost_cents: f64,
    /// Average response time, in seconds
    pub speed_seconds: f64,
    /// Total suite cost in dollars; the combined-view x value
    pub total_cost: f64,
    /// Stable display color
    pub color: &'static str,
}

/// Build the derived view for one chart mode
pub fn derive_view(
    dataset: &BenchmarkDataset,
    selection: &Selection,
    mode: ChartMode,
) -> Vec<ViewEntry> {
    let mut entries: Vec<ViewEntry> = dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, record)| selection.contains(&record.model))
        .map(|(index, record)| ViewEntry {
            model: record.model.clone(),
            correct: record.correct,
            total_tests: record.total_tests,
            success_rate: record.success_rate,
            cost_cents: record.average_cost_per_test * 100.0,
            speed_seconds: record.average_duration / 1000.0,
            total_cost: record.total_cost,
            color: model_color(index),
        })
        .collect();

    match mode {
        // best first: highest rate on top
        ChartMode::SuccessRate => entries.sort_by(|a, b| {
            b.success_rate
                .partial_cmp(&a.success_rate)
                .unwrap_or(Ordering::Equal)
        }),
        // best first: cheapest on top
        ChartMode::Cost => entries.sort_by(|a, b| {
            a.cost_cents
                .partial_cmp(&b.cost_cents)
                .unwrap_or(Ordering::Equal)
        }),
        // best first: fastest on top
        ChartMode::Speed => entries.sort_by(|a, b| {
            a.speed_seconds
                .partial_cmp(&b.speed_seconds)
                .unwrap_or(Ordering::Equal)
        }),
        // scatter is unsorted
        ChartMode::Combined => {}
    }

    entries
}

const MIN_CHART_HEIGHT: f64 = 300.0;
const MAX_CHART_HEIGHT: f64 = 800.0;
const PER_MODEL_HEIGHT: f64 = 28.0;
const CHART_HEIGHT_PADDING: f64 = 60.0;

/// Pixel height of a horizontally-laid bar chart, recomputed whenever the
/// selection size changes
pub fn chart_height(selected_count: usize) -> f64 {
    (selected_count as f64 * PER_MODEL_HEIGHT + CHART_HEIGHT_PADDING)
        .clamp(MIN_CHART_HEIGHT, MAX_CHART_HEIGHT)
}

/// Pixel width of the category label column, sized from the longest model
/// name in the current filtered view (not the full dataset). `compact`
/// narrows the clamp for small viewports.
pub fn label_axis_width(entries: &[ViewEntry], compact: bool) -> f64 {
    let longest = entries.iter().map(|e| e.model.len()).max().unwrap_or(0);
    let width = longest as f64 * 7.0 + 20.0;
    if compact {
        width.clamp(100.0, 170.0)
    } else {
        width.clamp(150.0, 220.0)
    }
}

/// Default x (total cost) domain for the combined scatter: zero to 10% past
/// the most expensive visible model
pub fn default_x_domain(entries: &[ViewEntry]) -> (f64, f64) {
    let max_cost = entries.iter().map(|e| e.total_cost).fold(0.0f64, f64::max);
    (0.0, max_cost * 1.1)
}

/// Default y (success rate) domain for the combined scatter
pub fn default_y_domain() -> (f64, f64) {
    (0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::BenchmarkRecord;
    use pretty_assertions::assert_eq;

    fn make_record(
        model: &str,
        success_rate: f64,
        average_duration: f64,
        total_cost: f64,
        average_cost_per_test: f64,
    ) -> BenchmarkRecord {
        BenchmarkRecord {
            model: model.to_string(),
            correct: (success_rate * 2.1) as u32,
            total_tests: 210,
            success_rate,
            average_duration,
            total_cost,
            average_cost_per_test,
        }
    }

    fn make_dataset() -> BenchmarkDataset {
        BenchmarkDataset {
            generated_at: None,
            suite: None,
            records: vec![
                make_record("alpha", 97.14, 26653.0, 3.0146, 0.01436),
                make_record("beta", 50.0, 8256.0, 0.8689, 0.00414),
                make_record("gamma", 27.62, 585.0, 0.0083, 0.00004),
                make_record("delta", 14.76, 2863.0, 0.0062, 0.00003),
            ],
        }
    }

    #[test]
    fn view_length_matches_selection_intersection() {
        let dataset = make_dataset();
        // one stale id that matches nothing
        let selection = Selection::from_models(["alpha", "gamma", "retired-model"]);

        for mode in ChartMode::ALL {
            let view = derive_view(&dataset, &selection, mode);
            assert_eq!(view.len(), 2, "mode {:?}", mode);
        }
    }

    #[test]
    fn colors_come_from_full_dataset_index() {
        let dataset = make_dataset();

        // gamma is third in the dataset regardless of what else is selected
        let narrow = derive_view(&dataset, &Selection::from_models(["gamma"]), ChartMode::Cost);
        let wide = derive_view(&dataset, &Selection::all(&dataset), ChartMode::Cost);

        let narrow_color = narrow.iter().find(|e| e.model == "gamma").unwrap().color;
        let wide_color = wide.iter().find(|e| e.model == "gamma").unwrap().color;
        assert_eq!(narrow_color, MODEL_COLORS[2]);
        assert_eq!(wide_color, MODEL_COLORS[2]);

        // and regardless of mode
        for mode in ChartMode::ALL {
            let view = derive_view(&dataset, &Selection::all(&dataset), mode);
            let color = view.iter().find(|e| e.model == "gamma").unwrap().color;
            assert_eq!(color, MODEL_COLORS[2], "mode {:?}", mode);
        }
    }

    #[test]
    fn palette_cycles_modulo_its_size() {
        assert_eq!(model_color(0), MODEL_COLORS[0]);
        assert_eq!(model_color(20), MODEL_COLORS[0]);
        assert_eq!(model_color(23), MODEL_COLORS[3]);
    }

    #[test]
    fn success_rate_sorts_descending() {
        let dataset = make_dataset();
        let view = derive_view(&dataset, &Selection::all(&dataset), ChartMode::SuccessRate);
        for pair in view.windows(2) {
            assert!(pair[0].success_rate >= pair[1].success_rate);
        }
        assert_eq!(view[0].model, "alpha");
    }

    #[test]
    fn cost_sorts_ascending() {
        let dataset = make_dataset();
        let view = derive_view(&dataset, &Selection::all(&dataset), ChartMode::Cost);
        for pair in view.windows(2) {
            assert!(pair[0].cost_cents <= pair[1].cost_cents);
        }
        assert_eq!(view[0].model, "delta");
    }

    #[test]
    fn speed_sorts_ascending() {
        let dataset = make_dataset();
        let view = derive_view(&dataset, &Selection::all(&dataset), ChartMode::Speed);
        for pair in view.windows(2) {
            assert!(pair[0].speed_seconds <= pair[1].speed_seconds);
        }
        assert_eq!(view[0].model, "gamma");
    }

    #[test]
    fn combined_keeps_dataset_order() {
        let dataset = make_dataset();
        let view = derive_view(&dataset, &Selection::all(&dataset), ChartMode::Combined);
        let order: Vec<&str> = view.iter().map(|e| e.model.as_str()).collect();
        assert_eq!(order, vec!["alpha", "beta", "gamma", "delta"]);
    }

    #[test]
    fn derived_fields_are_unit_converted() {
        let dataset = make_dataset();
        let view = derive_view(&dataset, &Selection::from_models(["beta"]), ChartMode::Combined);
        let beta = &view[0];
        assert_eq!(beta.cost_cents, 0.00414 * 100.0);
        assert_eq!(beta.speed_seconds, 8256.0 / 1000.0);
        assert_eq!(beta.total_cost, 0.8689);
    }

    #[test]
    fn empty_selection_yields_empty_views() {
        let dataset = make_dataset();
        for mode in ChartMode::ALL {
            let view = derive_view(&dataset, &Selection::none(), mode);
            assert!(view.is_empty(), "mode {:?}", mode);
        }
    }

    #[test]
    fn chart_height_clamps() {
        assert_eq!(chart_height(5), 300.0); // 5*28+60 = 200, floor wins
        assert_eq!(chart_height(20), 620.0); // 20*28+60
        assert_eq!(chart_height(40), 800.0); // ceiling wins
        assert_eq!(chart_height(0), 300.0);
    }

    #[test]
    fn label_width_uses_longest_visible_name() {
        let dataset = make_dataset();
        let view = derive_view(&dataset, &Selection::all(&dataset), ChartMode::SuccessRate);
        // longest name is "alpha"/"gamma"/"delta" at 5 chars: 5*7+20 = 55, floor wins
        assert_eq!(label_axis_width(&view, false), 150.0);
        assert_eq!(label_axis_width(&view, true), 100.0);

        let long = vec![ViewEntry {
            model: "a-model-with-a-very-long-identifier".to_string(),
            correct: 0,
            total_tests: 210,
            success_rate: 0.0,
            cost_cents: 0.0,
            speed_seconds: 0.0,
            total_cost: 0.0,
            color: MODEL_COLORS[0],
        }];
        // 35 chars: 35*7+20 = 265, ceiling wins
        assert_eq!(label_axis_width(&long, false), 220.0);
        assert_eq!(label_axis_width(&long, true), 170.0);
    }

    #[test]
    fn label_width_of_empty_view_is_floor() {
        assert_eq!(label_axis_width(&[], false), 150.0);
        assert_eq!(label_axis_width(&[], true), 100.0);
    }

    #[test]
    fn default_domains() {
        let dataset = make_dataset();
        let view = derive_view(&dataset, &Selection::all(&dataset), ChartMode::Combined);
        let (x_min, x_max) = default_x_domain(&view);
        assert_eq!(x_min, 0.0);
        assert!((x_max - 3.0146 * 1.1).abs() < 1e-9);
        assert_eq!(default_y_domain(), (0.0, 100.0));

        // empty view still yields a renderable domain
        assert_eq!(default_x_domain(&[]), (0.0, 0.0));
    }
}
