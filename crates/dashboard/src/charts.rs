//! SVG chart components
//!
//! Hand-drawn charts in the same style as the rest of the app: a fixed
//! viewBox, gridlines, and inline styles. `PlotGeometry` is the pure
//! pixel/data mapping that feeds defined data-space coordinates to the
//! drag-zoom state machine.

use dioxus::prelude::*;
use model_bench_core::{
    chart_height, default_x_domain, default_y_domain, label_axis_width, ChartMode, DragZoom,
    Orientation, ViewEntry, ZoomState,
};

use crate::styles::{axis_color, grid_color, tooltip_style};
use crate::ThemeCtx;

/// The metric a bar chart plots for one mode
pub fn mode_value(entry: &ViewEntry, mode: ChartMode) -> f64 {
    match mode {
        ChartMode::SuccessRate => entry.success_rate,
        ChartMode::Cost => entry.cost_cents,
        ChartMode::Speed => entry.speed_seconds,
        ChartMode::Combined => entry.total_cost,
    }
}

/// Unit suffix for a mode's metric
pub fn mode_suffix(mode: ChartMode) -> &'static str {
    match mode {
        ChartMode::SuccessRate => "%",
        ChartMode::Cost => "¢",
        ChartMode::Speed => "s",
        ChartMode::Combined => "$",
    }
}

/// Upper bound of a bar chart's value axis. Success rate is always plotted
/// against a full 0-100 scale; the other modes range to the largest value.
pub fn mode_axis_max(entries: &[ViewEntry], mode: ChartMode) -> f64 {
    match mode {
        ChartMode::SuccessRate => 100.0,
        _ => entries
            .iter()
            .map(|e| mode_value(e, mode))
            .fold(0.0f64, f64::max),
    }
}

/// Compact tick/value label
pub fn format_tick(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value >= 100.0 {
        format!("{:.0}", value)
    } else if value >= 10.0 {
        format!("{:.1}", value)
    } else if value >= 0.01 {
        format!("{:.2}", value)
    } else {
        format!("{:.3}", value)
    }
}

/// Geometry of a scatter plot drawn in a fixed viewBox.
///
/// Pointer events arrive in element pixels while the plot lives in viewBox
/// units, so data mapping goes through element fractions with the padding
/// ratio subtracted, mirroring how the rendered SVG scales.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotGeometry {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub x_domain: (f64, f64),
    pub y_domain: (f64, f64),
}

impl PlotGeometry {
    /// viewBox x for a data x
    pub fn px_x(&self, x: f64) -> f64 {
        self.padding + frac(x, self.x_domain) * (self.width - 2.0 * self.padding)
    }

    /// viewBox y for a data y (screen y grows downward)
    pub fn px_y(&self, y: f64) -> f64 {
        self.padding + (1.0 - frac(y, self.y_domain)) * (self.height - 2.0 * self.padding)
    }

    /// Whether a data point lies inside the current domains
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let (x0, x1) = self.x_domain;
        let (y0, y1) = self.y_domain;
        x >= x0 && x <= x1 && y >= y0 && y <= y1
    }

    /// Map element-relative pixel coordinates to data space. `None` outside
    /// the plot area, which is what makes the gesture coordinates
    /// "undefined" there.
    pub fn data_at(&self, px: f64, py: f64, elem_w: f64, elem_h: f64) -> Option<(f64, f64)> {
        if elem_w <= 0.0 || elem_h <= 0.0 {
            return None;
        }
        let fx = px / elem_w;
        let fy = py / elem_h;
        let x_start = self.padding / self.width;
        let x_end = 1.0 - x_start;
        let y_start = self.padding / self.height;
        let y_end = 1.0 - y_start;
        if fx < x_start || fx > x_end || fy < y_start || fy > y_end {
            return None;
        }
        let tx = (fx - x_start) / (x_end - x_start);
        let ty = (fy - y_start) / (y_end - y_start);
        let (x0, x1) = self.x_domain;
        let (y0, y1) = self.y_domain;
        Some((x0 + tx * (x1 - x0), y1 - ty * (y1 - y0)))
    }
}

fn frac(value: f64, (min, max): (f64, f64)) -> f64 {
    if max > min {
        (value - min) / (max - min)
    } else {
        0.0
    }
}

const BAR_WIDTH: f64 = 800.0;
const VERTICAL_HEIGHT: f64 = 500.0;
// viewports narrower than this get the compact label column
const COMPACT_VIEWPORT: f64 = 640.0;

/// Bar chart for the success-rate, cost and speed modes
#[component]
pub fn BarChart(entries: Vec<ViewEntry>, mode: ChartMode, orientation: Orientation) -> Element {
    let ThemeCtx(dark_mode) = use_context::<ThemeCtx>();
    let dark = *dark_mode.read();

    let mut elem_w = use_signal(|| 0.0f64);

    let grid_c = grid_color(dark);
    let axis_c = axis_color(dark);
    let suffix = mode_suffix(mode);
    let axis_max = mode_axis_max(&entries, mode).max(f64::MIN_POSITIVE);
    let compact = {
        let w = *elem_w.read();
        w > 0.0 && w < COMPACT_VIEWPORT
    };

    rsx! {
        div {
            onmounted: move |evt| {
                let mounted = evt.data().clone();
                spawn(async move {
                    if let Ok(rect) = mounted.get_client_rect().await {
                        elem_w.set(rect.width());
                    }
                });
            },
            if orientation == Orientation::Horizontal {
                {render_horizontal(&entries, mode, axis_max, suffix, compact, grid_c, axis_c)}
            } else {
                {render_vertical(&entries, mode, axis_max, suffix, grid_c, axis_c)}
            }
        }
    }
}

fn render_horizontal(
    entries: &[ViewEntry],
    mode: ChartMode,
    axis_max: f64,
    suffix: &'static str,
    compact: bool,
    grid_c: &'static str,
    axis_c: &'static str,
) -> Element {
    let height = chart_height(entries.len());
    let left = label_axis_width(entries, compact);
    let top = 20.0;
    let bottom = 30.0;
    let right = 70.0;
    let plot_w = BAR_WIDTH - left - right;
    let plot_h = height - top - bottom;
    let slot = if entries.is_empty() {
        0.0
    } else {
        plot_h / entries.len() as f64
    };
    let bar_h = (slot * 0.7).min(20.0);

    rsx! {
        svg {
            style: "width: 100%; height: auto;",
            view_box: "0 0 {BAR_WIDTH} {height}",
            "preserveAspectRatio": "xMidYMid meet",

            for i in 0..5 {
                line {
                    x1: "{left + plot_w * (i as f64 / 4.0)}",
                    y1: "{top}",
                    x2: "{left + plot_w * (i as f64 / 4.0)}",
                    y2: "{top + plot_h}",
                    stroke: "{grid_c}",
                    "stroke-width": "1"
                }
            }
            for i in 0..5 {
                text {
                    x: "{left + plot_w * (i as f64 / 4.0)}",
                    y: "{top + plot_h + 16.0}",
                    fill: "{axis_c}",
                    "font-size": "10",
                    "text-anchor": "middle",
                    "{format_tick(axis_max * (i as f64 / 4.0))}{suffix}"
                }
            }

            for (i, entry) in entries.iter().enumerate() {
                {
                    let value = mode_value(entry, mode);
                    let y = top + i as f64 * slot + (slot - bar_h) / 2.0;
                    let mid = y + bar_h / 2.0 + 3.0;
                    let w = frac(value, (0.0, axis_max)) * plot_w;
                    rsx! {
                        text {
                            key: "{entry.model}-label",
                            x: "{left - 8.0}",
                            y: "{mid}",
                            fill: "{axis_c}",
                            "font-size": "11",
                            "text-anchor": "end",
                            "{entry.model}"
                        }
                        rect {
                            key: "{entry.model}-bar",
                            x: "{left}",
                            y: "{y}",
                            width: "{w}",
                            height: "{bar_h}",
                            rx: "3",
                            fill: "{entry.color}"
                        }
                        text {
                            key: "{entry.model}-value",
                            x: "{left + w + 6.0}",
                            y: "{mid}",
                            fill: "{axis_c}",
                            "font-size": "10",
                            "{format_tick(value)}{suffix}"
                        }
                    }
                }
            }
        }
    }
}

fn render_vertical(
    entries: &[ViewEntry],
    mode: ChartMode,
    axis_max: f64,
    suffix: &'static str,
    grid_c: &'static str,
    axis_c: &'static str,
) -> Element {
    let left = 50.0;
    let right = 20.0;
    let top = 20.0;
    let bottom = 110.0;
    let plot_w = BAR_WIDTH - left - right;
    let plot_h = VERTICAL_HEIGHT - top - bottom;
    let slot = if entries.is_empty() {
        0.0
    } else {
        plot_w / entries.len() as f64
    };
    let bar_w = slot * 0.6;

    rsx! {
        svg {
            style: "width: 100%; height: auto;",
            view_box: "0 0 {BAR_WIDTH} {VERTICAL_HEIGHT}",
            "preserveAspectRatio": "xMidYMid meet",

            for i in 0..5 {
                line {
                    x1: "{left}",
                    y1: "{top + plot_h * (i as f64 / 4.0)}",
                    x2: "{left + plot_w}",
                    y2: "{top + plot_h * (i as f64 / 4.0)}",
                    stroke: "{grid_c}",
                    "stroke-width": "1"
                }
            }
            for i in 0..5 {
                text {
                    x: "{left - 6.0}",
                    y: "{top + plot_h * (i as f64 / 4.0) + 3.0}",
                    fill: "{axis_c}",
                    "font-size": "10",
                    "text-anchor": "end",
                    "{format_tick(axis_max * (1.0 - i as f64 / 4.0))}{suffix}"
                }
            }

            for (i, entry) in entries.iter().enumerate() {
                {
                    let value = mode_value(entry, mode);
                    let h = frac(value, (0.0, axis_max)) * plot_h;
                    let x = left + i as f64 * slot + (slot - bar_w) / 2.0;
                    let baseline = top + plot_h;
                    let label_x = x + bar_w / 2.0;
                    let label_y = baseline + 14.0;
                    rsx! {
                        rect {
                            key: "{entry.model}-bar",
                            x: "{x}",
                            y: "{baseline - h}",
                            width: "{bar_w}",
                            height: "{h}",
                            rx: "3",
                            fill: "{entry.color}"
                        }
                        text {
                            key: "{entry.model}-label",
                            x: "{label_x}",
                            y: "{label_y}",
                            fill: "{axis_c}",
                            "font-size": "9",
                            "text-anchor": "end",
                            transform: "rotate(-45 {label_x} {label_y})",
                            "{entry.model}"
                        }
                    }
                }
            }
        }
    }
}

const SCATTER_WIDTH: f64 = 800.0;
const SCATTER_HEIGHT: f64 = 560.0;
const SCATTER_PADDING: f64 = 60.0;

/// Combined scatter: success rate against total cost, with drag-to-zoom and
/// point dismissal
#[component]
pub fn ScatterChart(
    entries: Vec<ViewEntry>,
    mut zoom: Signal<ZoomState>,
    mut drag: Signal<DragZoom>,
    mut hovered: Signal<Option<String>>,
    on_dismiss: EventHandler<String>,
) -> Element {
    let ThemeCtx(dark_mode) = use_context::<ThemeCtx>();
    let dark = *dark_mode.read();

    let mut elem_size = use_signal(|| (0.0f64, 0.0f64));

    let grid_c = grid_color(dark);
    let axis_c = axis_color(dark);

    let geo = PlotGeometry {
        width: SCATTER_WIDTH,
        height: SCATTER_HEIGHT,
        padding: SCATTER_PADDING,
        x_domain: zoom.read().x_domain_or(default_x_domain(&entries)),
        y_domain: zoom.read().y_domain_or(default_y_domain()),
    };

    let hovered_entry = hovered
        .read()
        .as_ref()
        .and_then(|model| entries.iter().find(|e| &e.model == model))
        .cloned();

    rsx! {
        div {
            style: "position: relative; cursor: crosshair;",
            onmounted: move |evt| {
                let mounted = evt.data().clone();
                spawn(async move {
                    if let Ok(rect) = mounted.get_client_rect().await {
                        elem_size.set((rect.width(), rect.height()));
                    }
                });
            },
            onmousedown: move |e| {
                let coords = e.data().element_coordinates();
                let (w, h) = *elem_size.peek();
                if let Some((x, y)) = geo.data_at(coords.x, coords.y, w, h) {
                    drag.write().pointer_down(x, y);
                }
            },
            onmousemove: move |e| {
                if drag.peek().is_selecting() {
                    let coords = e.data().element_coordinates();
                    let (w, h) = *elem_size.peek();
                    if let Some((x, y)) = geo.data_at(coords.x, coords.y, w, h) {
                        drag.write().pointer_move(x, y);
                    }
                }
            },
            onmouseup: move |_| {
                drag.write().pointer_up(&mut zoom.write());
            },
            onmouseleave: move |_| {
                drag.write().pointer_up(&mut zoom.write());
                hovered.set(None);
            },

            svg {
                style: "width: 100%; height: auto;",
                view_box: "0 0 {SCATTER_WIDTH} {SCATTER_HEIGHT}",
                "preserveAspectRatio": "xMidYMid meet",

                // grid
                for i in 0..5 {
                    line {
                        x1: "{SCATTER_PADDING + (SCATTER_WIDTH - 2.0 * SCATTER_PADDING) * (i as f64 / 4.0)}",
                        y1: "{SCATTER_PADDING}",
                        x2: "{SCATTER_PADDING + (SCATTER_WIDTH - 2.0 * SCATTER_PADDING) * (i as f64 / 4.0)}",
                        y2: "{SCATTER_HEIGHT - SCATTER_PADDING}",
                        stroke: "{grid_c}",
                        "stroke-width": "1"
                    }
                }
                for i in 0..5 {
                    line {
                        x1: "{SCATTER_PADDING}",
                        y1: "{SCATTER_PADDING + (SCATTER_HEIGHT - 2.0 * SCATTER_PADDING) * (i as f64 / 4.0)}",
                        x2: "{SCATTER_WIDTH - SCATTER_PADDING}",
                        y2: "{SCATTER_PADDING + (SCATTER_HEIGHT - 2.0 * SCATTER_PADDING) * (i as f64 / 4.0)}",
                        stroke: "{grid_c}",
                        "stroke-width": "1"
                    }
                }

                // tick labels
                for i in 0..5 {
                    {
                        let t = i as f64 / 4.0;
                        let (x0, x1) = geo.x_domain;
                        let (y0, y1) = geo.y_domain;
                        let x_value = x0 + t * (x1 - x0);
                        let y_value = y1 - t * (y1 - y0);
                        rsx! {
                            text {
                                x: "{SCATTER_PADDING + (SCATTER_WIDTH - 2.0 * SCATTER_PADDING) * t}",
                                y: "{SCATTER_HEIGHT - SCATTER_PADDING + 18.0}",
                                fill: "{axis_c}",
                                "font-size": "10",
                                "text-anchor": "middle",
                                "${format_tick(x_value)}"
                            }
                            text {
                                x: "{SCATTER_PADDING - 8.0}",
                                y: "{SCATTER_PADDING + (SCATTER_HEIGHT - 2.0 * SCATTER_PADDING) * t + 3.0}",
                                fill: "{axis_c}",
                                "font-size": "10",
                                "text-anchor": "end",
                                "{y_value:.0}%"
                            }
                        }
                    }
                }

                // axis titles
                text {
                    x: "{SCATTER_WIDTH / 2.0}",
                    y: "{SCATTER_HEIGHT - 12.0}",
                    fill: "{axis_c}",
                    "font-size": "12",
                    "text-anchor": "middle",
                    "Total Cost ($)"
                }
                text {
                    x: "16",
                    y: "{SCATTER_HEIGHT / 2.0}",
                    fill: "{axis_c}",
                    "font-size": "12",
                    "text-anchor": "middle",
                    transform: "rotate(-90 16 {SCATTER_HEIGHT / 2.0})",
                    "Success Rate (%)"
                }

                // crosshairs for the hovered point
                if let Some(entry) = hovered_entry.as_ref() {
                    if geo.contains(entry.total_cost, entry.success_rate) {
                        line {
                            x1: "{geo.px_x(entry.total_cost)}",
                            y1: "{SCATTER_PADDING}",
                            x2: "{geo.px_x(entry.total_cost)}",
                            y2: "{SCATTER_HEIGHT - SCATTER_PADDING}",
                            stroke: "{entry.color}",
                            "stroke-width": "2",
                            "stroke-dasharray": "5,5"
                        }
                        line {
                            x1: "{SCATTER_PADDING}",
                            y1: "{geo.px_y(entry.success_rate)}",
                            x2: "{SCATTER_WIDTH - SCATTER_PADDING}",
                            y2: "{geo.px_y(entry.success_rate)}",
                            stroke: "{entry.color}",
                            "stroke-width": "2",
                            "stroke-dasharray": "5,5"
                        }
                    }
                }

                // in-progress zoom rectangle
                if let Some((ax, ay, bx, by)) = drag.read().active_rect() {
                    rect {
                        x: "{geo.px_x(ax.min(bx))}",
                        y: "{geo.px_y(ay.max(by))}",
                        width: "{(geo.px_x(ax.max(bx)) - geo.px_x(ax.min(bx))).abs()}",
                        height: "{(geo.px_y(ay.min(by)) - geo.px_y(ay.max(by))).abs()}",
                        fill: "#3b82f6",
                        "fill-opacity": "0.15",
                        stroke: "#3b82f6",
                        "stroke-opacity": "0.3"
                    }
                }

                // points
                for entry in entries.iter() {
                    if geo.contains(entry.total_cost, entry.success_rate) {
                        {
                            let model = entry.model.clone();
                            let dismiss = entry.model.clone();
                            rsx! {
                                text {
                                    key: "{entry.model}-label",
                                    x: "{geo.px_x(entry.total_cost)}",
                                    y: "{geo.px_y(entry.success_rate) - 12.0}",
                                    fill: "#888888",
                                    "font-size": "10",
                                    "text-anchor": "middle",
                                    style: "pointer-events: none;",
                                    "{entry.model}"
                                }
                                circle {
                                    key: "{entry.model}-point",
                                    cx: "{geo.px_x(entry.total_cost)}",
                                    cy: "{geo.px_y(entry.success_rate)}",
                                    r: "8",
                                    fill: "{entry.color}",
                                    onmouseenter: move |_| hovered.set(Some(model.clone())),
                                    onmouseleave: move |_| hovered.set(None),
                                    onclick: move |_| on_dismiss.call(dismiss.clone())
                                }
                            }
                        }
                    }
                }
            }

            // tooltip beside the hovered point
            if let Some(entry) = hovered_entry.as_ref() {
                if geo.contains(entry.total_cost, entry.success_rate) {
                    {
                        let point_pct = geo.px_x(entry.total_cost) / SCATTER_WIDTH * 100.0;
                        let top_pct = geo.px_y(entry.success_rate) / SCATTER_HEIGHT * 100.0;
                        let left = if point_pct < 50.0 {
                            format!("calc({}% + 20px)", point_pct.max(5.0))
                        } else {
                            format!("calc({}% - 200px)", point_pct.min(95.0))
                        };
                        rsx! {
                            div {
                                style: "{tooltip_style(dark)} top: {top_pct.min(80.0)}%; left: {left}; pointer-events: none;",
                                div { style: "font-weight: 600; margin-bottom: 0.2rem;", "{entry.model}" }
                                div { "Success Rate: {entry.success_rate:.2}%" }
                                div { "Total Cost: ${entry.total_cost:.4}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model_bench_core::MODEL_COLORS;
    use pretty_assertions::assert_eq;

    fn make_entry(model: &str, rate: f64, cents: f64, seconds: f64, total: f64) -> ViewEntry {
        ViewEntry {
            model: model.to_string(),
            correct: 0,
            total_tests: 210,
            success_rate: rate,
            cost_cents: cents,
            speed_seconds: seconds,
            total_cost: total,
            color: MODEL_COLORS[0],
        }
    }

    fn make_geometry() -> PlotGeometry {
        PlotGeometry {
            width: 800.0,
            height: 560.0,
            padding: 60.0,
            x_domain: (0.0, 10.0),
            y_domain: (0.0, 100.0),
        }
    }

    #[test]
    fn pixel_mapping_spans_the_plot_area() {
        let geo = make_geometry();
        assert_eq!(geo.px_x(0.0), 60.0);
        assert_eq!(geo.px_x(10.0), 740.0);
        // y is inverted: the domain maximum is at the top
        assert_eq!(geo.px_y(100.0), 60.0);
        assert_eq!(geo.px_y(0.0), 500.0);
    }

    #[test]
    fn data_at_round_trips_through_the_center() {
        let geo = make_geometry();
        // element rendered at exactly viewBox size: plot center maps back
        let (x, y) = geo.data_at(400.0, 280.0, 800.0, 560.0).unwrap();
        assert!((x - 5.0).abs() < 1e-9);
        assert!((y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn data_at_scales_with_element_size() {
        let geo = make_geometry();
        // element rendered at half size
        let (x, y) = geo.data_at(200.0, 140.0, 400.0, 280.0).unwrap();
        assert!((x - 5.0).abs() < 1e-9);
        assert!((y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn data_at_is_none_outside_the_plot_area() {
        let geo = make_geometry();
        assert_eq!(geo.data_at(10.0, 280.0, 800.0, 560.0), None);
        assert_eq!(geo.data_at(400.0, 10.0, 800.0, 560.0), None);
        assert_eq!(geo.data_at(790.0, 280.0, 800.0, 560.0), None);
        assert_eq!(geo.data_at(400.0, 555.0, 800.0, 560.0), None);
    }

    #[test]
    fn data_at_handles_unmeasured_elements() {
        let geo = make_geometry();
        assert_eq!(geo.data_at(100.0, 100.0, 0.0, 0.0), None);
    }

    #[test]
    fn zero_span_domain_does_not_divide_by_zero() {
        let geo = PlotGeometry {
            x_domain: (0.0, 0.0),
            ..make_geometry()
        };
        assert_eq!(geo.px_x(0.0), 60.0);
        assert!(geo.px_x(0.0).is_finite());
    }

    #[test]
    fn contains_respects_domains() {
        let geo = make_geometry();
        assert!(geo.contains(5.0, 50.0));
        assert!(!geo.contains(11.0, 50.0));
        assert!(!geo.contains(5.0, 101.0));
    }

    #[test]
    fn mode_values_pick_the_right_field() {
        let entry = make_entry("m", 90.0, 1.5, 2.5, 3.5);
        assert_eq!(mode_value(&entry, ChartMode::SuccessRate), 90.0);
        assert_eq!(mode_value(&entry, ChartMode::Cost), 1.5);
        assert_eq!(mode_value(&entry, ChartMode::Speed), 2.5);
        assert_eq!(mode_value(&entry, ChartMode::Combined), 3.5);
    }

    #[test]
    fn success_rate_axis_is_fixed_at_100() {
        let entries = vec![make_entry("m", 40.0, 1.0, 1.0, 1.0)];
        assert_eq!(mode_axis_max(&entries, ChartMode::SuccessRate), 100.0);
        assert_eq!(mode_axis_max(&entries, ChartMode::Cost), 1.0);
        assert_eq!(mode_axis_max(&[], ChartMode::Cost), 0.0);
    }

    #[test]
    fn tick_formatting() {
        assert_eq!(format_tick(0.0), "0");
        assert_eq!(format_tick(620.0), "620");
        assert_eq!(format_tick(26.653), "26.7");
        assert_eq!(format_tick(1.436), "1.44");
        assert_eq!(format_tick(0.004), "0.004");
    }
}
