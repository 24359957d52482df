//! Dashboard Overview
//!
//! Stat counters, charts, heatmap, recent activity and upcoming deliveries.

use leptos::prelude::*;

use crate::charts::TimeRange;
use crate::components::{CounterValue, DashboardCharts, DashboardHeatmap, RecentActivity, UpcomingDeliveries};

/// (title, value, suffix, note, progress)
const STAT_CARDS: [(&str, u32, &str, &str, u8); 4] = [
    ("Total Groups", 12, "", "+2 from last month", 75),
    ("Active Checklists", 24, "", "18% increase", 65),
    ("Pending Deliveries", 7, "", "3 delayed", 32),
    ("Packing Progress", 68, "%", "12% increase", 68),
];

#[component]
pub fn DashboardOverview() -> impl IntoView {
    let (range, set_range) = signal(TimeRange::default());

    let range_tabs = TimeRange::ALL
        .into_iter()
        .map(|r| {
            view! {
                <button
                    class=move || if range.get() == r { "segment active" } else { "segment" }
                    on:click=move |_| set_range.set(r)
                >
                    {match r {
                        TimeRange::Day => "Day",
                        TimeRange::Week => "Week",
                        TimeRange::Month => "Month",
                    }}
                </button>
            }
        })
        .collect_view();

    let cards = STAT_CARDS
        .iter()
        .map(|(title, value, suffix, note, progress)| {
            view! {
                <div class="card stat-card">
                    <p class="stat-title">{*title}</p>
                    <div class="stat-value"><CounterValue value=*value suffix=*suffix /></div>
                    <p class="muted">{*note}</p>
                    <div class="progress"><div class="progress-fill" style={format!("width: {}%", progress)}></div></div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="dashboard-overview">
            <div class="overview-head">
                <h2>"Dashboard"</h2>
                <div class="segments">{range_tabs}</div>
            </div>

            <div class="stat-grid">{cards}</div>

            <div class="overview-grid">
                <div class="card wide">
                    <h3>"Packing Progress"</h3>
                    <p class="muted">{move || format!("Items packed vs pending, {}", range.get().label().to_lowercase())}</p>
                    <DashboardCharts range=range />
                </div>
                <div class="card">
                    <h3>"Weekly Activity"</h3>
                    <p class="muted">"Team contribution heatmap"</p>
                    <DashboardHeatmap />
                </div>
            </div>

            <div class="overview-grid halves">
                <div class="card">
                    <h3>"Recent Activity"</h3>
                    <p class="muted">"Latest actions across all groups"</p>
                    <RecentActivity limit=5 />
                </div>
                <div class="card">
                    <h3>"Upcoming Deliveries"</h3>
                    <p class="muted">"Expected deliveries in the next 7 days"</p>
                    <UpcomingDeliveries />
                </div>
            </div>
        </div>
    }
}
