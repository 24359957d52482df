//! Dashboard Charts
//!
//! Progress (area), members (bar) and status (pie) charts as SVG, plus the
//! weekly activity heatmap.

use leptos::prelude::*;

use crate::charts::{self, ActivityLevel, TimeRange, TEAM, WEEKDAYS};

const CHART_W: f64 = 560.0;
const CHART_H: f64 = 260.0;
const MARGIN: f64 = 28.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChartKind {
    Area,
    Bar,
    Pie,
}

impl ChartKind {
    const ALL: [(ChartKind, &'static str); 3] = [
        (ChartKind::Area, "Progress"),
        (ChartKind::Bar, "Members"),
        (ChartKind::Pie, "Status"),
    ];
}

/// Polygon points for a series filled down to the baseline
fn area_points(values: &[u32], max: f64) -> String {
    if values.is_empty() {
        return String::new();
    }
    let step = (CHART_W - 2.0 * MARGIN) / (values.len().max(2) - 1) as f64;
    let baseline = CHART_H - MARGIN;
    let scale = (CHART_H - 2.0 * MARGIN) / max;

    let mut points: Vec<String> = values
        .iter()
        .enumerate()
        .map(|(i, v)| format!("{:.1},{:.1}", MARGIN + i as f64 * step, baseline - f64::from(*v) * scale))
        .collect();
    let last_x = MARGIN + (values.len() - 1) as f64 * step;
    points.push(format!("{:.1},{:.1}", last_x, baseline));
    points.push(format!("{:.1},{:.1}", MARGIN, baseline));
    points.join(" ")
}

#[component]
pub fn DashboardCharts(range: ReadSignal<TimeRange>) -> impl IntoView {
    let (kind, set_kind) = signal(ChartKind::Area);

    let buttons = ChartKind::ALL
        .iter()
        .map(|(k, label)| {
            let k = *k;
            view! {
                <button
                    class=move || if kind.get() == k { "chip active" } else { "chip" }
                    on:click=move |_| set_kind.set(k)
                >
                    {*label}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="dashboard-charts">
            <div class="chip-row">{buttons}</div>
            {move || match kind.get() {
                ChartKind::Area => view! { <AreaChart range=range.get() /> }.into_any(),
                ChartKind::Bar => view! { <BarChart range=range.get() /> }.into_any(),
                ChartKind::Pie => view! { <PieChart /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn AreaChart(range: TimeRange) -> impl IntoView {
    let series = charts::area_series(range);
    let packed: Vec<u32> = series.iter().map(|p| p.packed).collect();
    let pending: Vec<u32> = series.iter().map(|p| p.pending).collect();
    let max = 80.0;

    // Thin out labels so 24/30 points stay legible
    let every = (series.len() / 8).max(1);
    let step = (CHART_W - 2.0 * MARGIN) / (series.len().max(2) - 1) as f64;
    let labels = series
        .iter()
        .enumerate()
        .filter(|(i, _)| i % every == 0)
        .map(|(i, p)| {
            view! {
                <text x={MARGIN + i as f64 * step} y={CHART_H - 8.0} class="axis-label" text-anchor="middle">
                    {p.label.clone()}
                </text>
            }
        })
        .collect_view();

    view! {
        <svg viewBox={format!("0 0 {} {}", CHART_W, CHART_H)} class="chart-svg">
            <polygon points={area_points(&packed, max)} class="area-packed" />
            <polygon points={area_points(&pending, max)} class="area-pending" />
            {labels}
        </svg>
        <div class="chart-legend">
            <span class="legend-packed">"Packed"</span>
            <span class="legend-pending">"Pending"</span>
        </div>
    }
}

#[component]
fn BarChart(range: TimeRange) -> impl IntoView {
    let bars = charts::bar_series(range);
    let max = 100.0;
    let slot = (CHART_W - 2.0 * MARGIN) / bars.len().max(1) as f64;
    let bar_w = slot * 0.35;
    let scale = (CHART_H - 2.0 * MARGIN) / max;
    let baseline = CHART_H - MARGIN;

    let groups = bars
        .iter()
        .enumerate()
        .map(|(i, bar)| {
            let x = MARGIN + i as f64 * slot + slot * 0.15;
            let done_h = f64::from(bar.completed) * scale;
            let pend_h = f64::from(bar.pending) * scale;
            view! {
                <g>
                    <rect x=x y={baseline - done_h} width=bar_w height=done_h class="bar-completed">
                        <title>{format!("{}: {} completed", bar.member, bar.completed)}</title>
                    </rect>
                    <rect x={x + bar_w} y={baseline - pend_h} width=bar_w height=pend_h class="bar-pending">
                        <title>{format!("{}: {} pending", bar.member, bar.pending)}</title>
                    </rect>
                    <text x={x + bar_w} y={CHART_H - 8.0} class="axis-label" text-anchor="middle">{bar.member.clone()}</text>
                </g>
            }
        })
        .collect_view();

    view! {
        <svg viewBox={format!("0 0 {} {}", CHART_W, CHART_H)} class="chart-svg">{groups}</svg>
        <div class="chart-legend">
            <span class="legend-packed">"Completed"</span>
            <span class="legend-pending">"Pending"</span>
        </div>
    }
}

#[component]
fn PieChart() -> impl IntoView {
    let slices = charts::pie_series();
    let total: u32 = slices.iter().map(|s| s.value).sum();
    let (cx, cy, r) = (CHART_W / 2.0, CHART_H / 2.0, CHART_H / 2.0 - MARGIN);

    let mut from = 0.0;
    let paths = slices
        .iter()
        .map(|slice| {
            let to = from + f64::from(slice.value) / f64::from(total.max(1));
            let d = charts::pie_arc(cx, cy, r, from, to);
            from = to;
            view! {
                <path d=d fill=slice.color>
                    <title>{format!("{}: {}%", slice.label, slice.value)}</title>
                </path>
            }
        })
        .collect_view();

    let legend = slices
        .iter()
        .map(|slice| {
            view! {
                <span class="legend-item">
                    <span class="legend-swatch" style={format!("background-color: {}", slice.color)}></span>
                    {format!("{} {}%", slice.label, slice.value)}
                </span>
            }
        })
        .collect_view();

    view! {
        <svg viewBox={format!("0 0 {} {}", CHART_W, CHART_H)} class="chart-svg">{paths}</svg>
        <div class="chart-legend">{legend}</div>
    }
}

// ========================
// Heatmap
// ========================

#[component]
pub fn DashboardHeatmap() -> impl IntoView {
    let grid = charts::heatmap();

    let header = TEAM
        .iter()
        .map(|member| view! { <div class="heatmap-head">{*member}</div> })
        .collect_view();

    let rows = WEEKDAYS
        .iter()
        .zip(grid)
        .map(|(day, counts)| {
            let cells = counts
                .iter()
                .zip(TEAM)
                .map(|(count, member)| {
                    let level = ActivityLevel::from_count(*count);
                    view! {
                        <div
                            class={format!("heatmap-cell {}", level.css_class())}
                            title={format!("{} on {}: {} ({} actions)", member, day, level.label(), count)}
                        ></div>
                    }
                })
                .collect_view();
            view! {
                <div class="heatmap-row">
                    <div class="heatmap-day">{*day}</div>
                    {cells}
                </div>
            }
        })
        .collect_view();

    let legend = [(0u8, "None"), (3, "Low"), (6, "Medium"), (9, "High")]
        .into_iter()
        .map(|(count, name)| {
            let level = ActivityLevel::from_count(count);
            view! {
                <span class="legend-item">
                    <span class={format!("legend-swatch {}", level.css_class())}></span>
                    {name}
                </span>
            }
        })
        .collect_view();

    view! {
        <div class="heatmap">
            <div class="heatmap-row">
                <div class="heatmap-day"></div>
                {header}
            </div>
            {rows}
            <div class="heatmap-legend">{legend}</div>
        </div>
    }
}
