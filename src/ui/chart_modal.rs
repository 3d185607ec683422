use dioxus::prelude::*;
use tracing::debug;

use crate::charts::data::{
    network_edges, network_node, Point, HEALTH_FEATURES, MONTHLY_UPLOADS, NETWORK_HEIGHT,
    NETWORK_LEGEND, NETWORK_NODES, NETWORK_WIDTH, SEQUENCE_LENGTHS, SHANNON_WEEKLY, SPECIES_SHARE,
};
use crate::charts::geometry::{
    area_path, bars, line_points, nice_axis_max, pie_slices, points_attr, radar_polygon,
    radar_vertex, ticks, Frame,
};
use crate::charts::ChartKind;

const TICK_COUNT: usize = 4;
const TEAL: &str = "#14B8A6";
const BLUE: &str = "#3B82F6";
const PURPLE: &str = "#9333EA";

// ─── ChartModal ───────────────────────────────────────────────

/// Overlay showing one chart. Clicking the backdrop or the close button
/// calls `on_close`; clicks inside the panel do not.
#[component]
pub fn ChartModal(title: String, kind: ChartKind, on_close: EventHandler) -> Element {
    use_hook(move || debug!(chart = kind.label(), "Opening chart"));

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),

            div {
                class: "modal-panel",
                onclick: move |e: MouseEvent| e.stop_propagation(),

                div { class: "modal-header",
                    h2 { class: "modal-title", "{title}" }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "\u{2715}"
                    }
                }

                div { class: "modal-body",
                    {match kind {
                        ChartKind::Bar => rsx! { BarChart { data: &MONTHLY_UPLOADS[..], color: TEAL } },
                        ChartKind::Line => rsx! { LineChart { data: &SHANNON_WEEKLY[..], color: BLUE } },
                        ChartKind::Area => rsx! { AreaChart { data: &SEQUENCE_LENGTHS[..], color: PURPLE } },
                        ChartKind::Pie => rsx! { PieChart {} },
                        ChartKind::Radar => rsx! { RadarChart { data: &HEALTH_FEATURES[..], color: TEAL } },
                        ChartKind::Network => rsx! { NetworkChart {} },
                    }}
                }
            }
        }
    }
}

fn values(data: &[Point]) -> Vec<f64> {
    data.iter().map(|p| p.value).collect()
}

fn data_max(data: &[Point]) -> f64 {
    nice_axis_max(data.iter().map(|p| p.value).fold(0.0, f64::max))
}

fn tick_label(value: f64, max: f64) -> String {
    if max < 10.0 {
        format!("{value:.1}")
    } else {
        format!("{value:.0}")
    }
}

// ─── Axes ─────────────────────────────────────────────────────

/// Gridlines with value labels, and category labels under the plot.
#[component]
fn Axes(max: f64, labels: Vec<(f64, &'static str)>, slanted: bool) -> Element {
    let frame = Frame::CHART;
    let right = frame.width - frame.right;
    let label_y = frame.baseline() + 18.0;

    rsx! {
        g { class: "chart-axes",
            for t in ticks(max, TICK_COUNT) {
                {
                    let y = frame.y_for(t, max);
                    let tick = tick_label(t, max);
                    rsx! {
                        line {
                            x1: "{frame.left}", y1: "{y:.1}", x2: "{right}", y2: "{y:.1}",
                            class: "chart-grid",
                        }
                        text {
                            x: "{frame.left - 8.0}", y: "{y + 4.0:.1}",
                            class: "chart-tick", text_anchor: "end",
                            "{tick}"
                        }
                    }
                }
            }
            for (x, label) in labels {
                if slanted {
                    text {
                        x: "{x:.1}", y: "{label_y:.1}",
                        class: "chart-tick", text_anchor: "end",
                        transform: "rotate(-30 {x:.1} {label_y:.1})",
                        "{label}"
                    }
                } else {
                    text {
                        x: "{x:.1}", y: "{label_y:.1}",
                        class: "chart-tick", text_anchor: "middle",
                        "{label}"
                    }
                }
            }
        }
    }
}

// ─── Bar / Line / Area ────────────────────────────────────────

#[component]
fn BarChart(data: &'static [Point], color: &'static str) -> Element {
    let frame = Frame::CHART;
    let max = data_max(data);
    let rects = bars(&values(data), max, &frame);
    let labels: Vec<(f64, &'static str)> = rects
        .iter()
        .zip(data)
        .map(|(r, p)| (r.center_x(), p.label))
        .collect();

    rsx! {
        svg { class: "chart-svg", view_box: "0 0 {frame.width} {frame.height}",
            Axes { max, labels, slanted: false }
            for (i, r) in rects.iter().enumerate() {
                rect {
                    key: "{i}",
                    x: "{r.x:.1}", y: "{r.y:.1}",
                    width: "{r.width:.1}", height: "{r.height:.1}",
                    rx: "4",
                    fill: "{color}",
                    class: "chart-bar",
                }
            }
        }
    }
}

#[component]
fn LineChart(data: &'static [Point], color: &'static str) -> Element {
    let frame = Frame::CHART;
    let max = data_max(data);
    let points = line_points(&values(data), max, &frame);
    let polyline = points_attr(&points);
    let labels: Vec<(f64, &'static str)> = points
        .iter()
        .zip(data)
        .map(|(&(x, _), p)| (x, p.label))
        .collect();

    rsx! {
        svg { class: "chart-svg", view_box: "0 0 {frame.width} {frame.height}",
            Axes { max, labels, slanted: false }
            polyline {
                points: "{polyline}",
                fill: "none",
                stroke: "{color}",
                stroke_width: "3",
                stroke_linejoin: "round",
            }
            for (i, (x, y)) in points.iter().enumerate() {
                circle { key: "{i}", cx: "{x:.1}", cy: "{y:.1}", r: "4", fill: "{color}" }
            }
        }
    }
}

#[component]
fn AreaChart(data: &'static [Point], color: &'static str) -> Element {
    let frame = Frame::CHART;
    let max = data_max(data);
    let points = line_points(&values(data), max, &frame);
    let fill = area_path(&points, frame.baseline());
    let outline = points_attr(&points);
    let labels: Vec<(f64, &'static str)> = points
        .iter()
        .zip(data)
        .map(|(&(x, _), p)| (x, p.label))
        .collect();

    rsx! {
        svg { class: "chart-svg", view_box: "0 0 {frame.width} {frame.height}",
            Axes { max, labels, slanted: true }
            path { d: "{fill}", fill: "{color}", fill_opacity: "0.3" }
            polyline { points: "{outline}", fill: "none", stroke: "{color}", stroke_width: "2" }
        }
    }
}

// ─── Pie ──────────────────────────────────────────────────────

#[component]
fn PieChart() -> Element {
    let (cx, cy, r) = (NETWORK_WIDTH / 2.0, NETWORK_HEIGHT / 2.0, 130.0);
    let slice_values: Vec<f64> = SPECIES_SHARE.iter().map(|s| s.value).collect();
    let slices = pie_slices(&slice_values, cx, cy, r);

    rsx! {
        div { class: "chart-with-legend",
            svg { class: "chart-svg", view_box: "0 0 {NETWORK_WIDTH} {NETWORK_HEIGHT}",
                for (slice, share) in slices.iter().zip(SPECIES_SHARE.iter()) {
                    g { key: "{share.label}",
                        path { d: "{slice.path}", fill: "{share.color}", stroke: "#0F172A", stroke_width: "1" }
                        text {
                            x: "{slice.label_x:.1}", y: "{slice.label_y:.1}",
                            class: "chart-tick", text_anchor: "middle",
                            "{slice.percent_label()}"
                        }
                    }
                }
            }
            ul { class: "chart-legend",
                for share in SPECIES_SHARE.iter() {
                    li { key: "{share.label}",
                        span { class: "legend-swatch", style: "background: {share.color};" }
                        "{share.label}"
                    }
                }
            }
        }
    }
}

// ─── Radar ────────────────────────────────────────────────────

#[component]
fn RadarChart(data: &'static [Point], color: &'static str) -> Element {
    let (cx, cy, r) = (NETWORK_WIDTH / 2.0, NETWORK_HEIGHT / 2.0, 140.0);
    let n = data.len();
    let max = 100.0;
    let shape = points_attr(&radar_polygon(&values(data), max, cx, cy, r));
    let rings: Vec<String> = ticks(max, TICK_COUNT)
        .into_iter()
        .skip(1)
        .map(|level| points_attr(&radar_polygon(&vec![level; n], max, cx, cy, r)))
        .collect();

    rsx! {
        svg { class: "chart-svg", view_box: "0 0 {NETWORK_WIDTH} {NETWORK_HEIGHT}",
            for (i, ring) in rings.iter().enumerate() {
                polygon { key: "ring-{i}", points: "{ring}", class: "chart-grid", fill: "none" }
            }
            for (i, p) in data.iter().enumerate() {
                {
                    let (sx, sy) = radar_vertex(i, n, max, max, cx, cy, r);
                    let (lx, ly) = radar_vertex(i, n, max, max, cx, cy, r + 18.0);
                    let anchor = if (lx - cx).abs() < 1.0 {
                        "middle"
                    } else if lx > cx {
                        "start"
                    } else {
                        "end"
                    };
                    rsx! {
                        line { x1: "{cx}", y1: "{cy}", x2: "{sx:.1}", y2: "{sy:.1}", class: "chart-grid" }
                        text {
                            x: "{lx:.1}", y: "{ly + 4.0:.1}",
                            class: "chart-tick", text_anchor: "{anchor}",
                            "{p.label}"
                        }
                    }
                }
            }
            polygon {
                points: "{shape}",
                fill: "{color}",
                fill_opacity: "0.35",
                stroke: "{color}",
                stroke_width: "2",
            }
        }
    }
}

// ─── Network ──────────────────────────────────────────────────

#[component]
fn NetworkChart() -> Element {
    let edges: Vec<((f64, f64), (f64, f64))> = network_edges()
        .into_iter()
        .filter_map(|(a, b)| {
            let (a, b) = (network_node(a)?, network_node(b)?);
            Some(((a.x, a.y), (b.x, b.y)))
        })
        .collect();

    rsx! {
        div { class: "chart-with-legend",
            svg { class: "chart-svg", view_box: "0 0 {NETWORK_WIDTH} {NETWORK_HEIGHT}",
                for (i, ((x1, y1), (x2, y2))) in edges.iter().enumerate() {
                    line {
                        key: "edge-{i}",
                        x1: "{x1}", y1: "{y1}", x2: "{x2}", y2: "{y2}",
                        class: "network-edge",
                    }
                }
                for node in NETWORK_NODES.iter() {
                    g { key: "{node.id}", class: "network-node",
                        circle { cx: "{node.x}", cy: "{node.y}", r: "{node.size}", fill: "{node.color}" }
                        text {
                            x: "{node.x}", y: "{node.y + node.size + 14.0}",
                            class: "chart-tick", text_anchor: "middle",
                            "{node.label}"
                        }
                    }
                }
            }
            ul { class: "chart-legend",
                for (label, color) in NETWORK_LEGEND.iter() {
                    li { key: "{label}",
                        span { class: "legend-swatch", style: "background: {color};" }
                        "{label}"
                    }
                }
            }
        }
    }
}
