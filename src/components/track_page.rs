//! Track Page
//!
//! Route lookup against the route service, rendered as an SVG map, and the
//! package tracker with its live status feed.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, LatestRequest};
use crate::components::{PageHeader, RouteMap, TrackingTimeline};
use crate::mock;
use crate::models::{MapView, RoutePlan, TrackingData};
use crate::nav::Page;
use crate::status_feed::{FeedTick, StatusFeed};

/// Milliseconds between live status messages
const FEED_INTERVAL_MS: u32 = 3000;

#[component]
pub fn TrackPage() -> impl IntoView {
    view! {
        <div class="page track-page">
            <PageHeader title="Track Your Details" back=Page::Information />
            <main class="page-main">
                <RouteSection />
                <PackageSection />
            </main>
        </div>
    }
}

// ========================
// Route Lookup
// ========================

#[component]
fn RouteSection() -> impl IntoView {
    let (start, set_start) = signal(String::new());
    let (end, set_end) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (result, set_result) = signal::<Option<(RoutePlan, MapView)>>(None);
    let (fullscreen, set_fullscreen) = signal(false);
    let latest = StoredValue::new_local(LatestRequest::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        set_result.set(None);
        set_loading.set(true);

        // The future may outlive this section; it holds its own handle
        let guard = latest.with_value(LatestRequest::clone);
        let ticket = guard.issue();
        let (from, to) = (start.get_untracked(), end.get_untracked());
        spawn_local(async move {
            let outcome = commands::track_route(&from, &to).await;
            if !guard.is_current(ticket) {
                web_sys::console::log_1(&"[TRACK] Dropping stale route response".into());
                return;
            }
            // try_set: the section may have been unmounted while waiting
            match outcome {
                Ok(found) => {
                    let _ = set_result.try_set(Some(found));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[TRACK] Error fetching route: {}", e).into());
                    let _ = set_error.try_set(Some(e.to_string()));
                }
            }
            let _ = set_loading.try_set(false);
        });
    };

    view! {
        <section class="track-section">
            <h2>"Track Your Route"</h2>
            <form class="route-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Start Location"
                    prop:value=move || start.get()
                    on:input=move |ev| set_start.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="End Location"
                    prop:value=move || end.get()
                    on:input=move |ev| set_end.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || loading.get()>
                    {move || if loading.get() { "Loading..." } else { "Track Route" }}
                </button>
            </form>

            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}

            {move || result.get().map(|(plan, map)| view! {
                <div class="map-card">
                    <div class="map-card-header">
                        <h3>"Route Map"</h3>
                        <span class="map-card-route">{format!("{} → {}", plan.start.address, plan.end.address)}</span>
                        <button on:click=move |_| set_fullscreen.update(|f| *f = !*f)>
                            {move || if fullscreen.get() { "Exit Fullscreen" } else { "View Fullscreen" }}
                        </button>
                    </div>
                    <div class=move || if fullscreen.get() { "map-frame fullscreen" } else { "map-frame" }>
                        <RouteMap map=map />
                    </div>
                </div>
            })}
        </section>
    }
}

// ========================
// Package Tracking
// ========================

#[component]
fn PackageSection() -> impl IntoView {
    let (tracking_number, set_tracking_number) = signal(String::new());
    let (tracking, set_tracking) = signal::<Option<TrackingData>>(None);
    let (feed, set_feed) = signal(StatusFeed::new(&mock::STATUS_UPDATES));
    let ticker = StoredValue::new_local(None::<Interval>);

    // Stop ticking once the canned list is exhausted
    Effect::new(move |_| {
        if feed.with(|f| f.is_finished()) {
            ticker.set_value(None);
        }
    });

    on_cleanup(move || {
        let _ = ticker.try_update_value(|slot| slot.take());
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if tracking_number.get_untracked().trim().is_empty() {
            return;
        }
        set_tracking.set(Some(mock::tracking_data()));
        set_feed.update(|f| f.reset());
        let interval = Interval::new(FEED_INTERVAL_MS, move || {
            set_feed.update(|f| {
                if let FeedTick::Pushed(entry) = f.tick() {
                    web_sys::console::log_1(&format!("[TRACK] Status update: {}", entry).into());
                }
            });
        });
        // Replacing the old interval cancels it
        ticker.set_value(Some(interval));
    };

    view! {
        <section class="track-section">
            <h2>"Track Your Package"</h2>
            <form class="package-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Enter tracking number"
                    required
                    prop:value=move || tracking_number.get()
                    on:input=move |ev| set_tracking_number.set(event_target_value(&ev))
                />
                <button type="submit">"Track Package"</button>
            </form>

            {move || tracking.get().map(|data| view! {
                <TrackingTimeline data=data />
                <div class="live-status">
                    <h3>"Live Status"</h3>
                    <p class="live-status-line">{move || feed.with(|f| f.live_status())}</p>
                    <ul class="status-updates">
                        {move || feed.with(|f| {
                            f.entries()
                                .iter()
                                .map(|entry| view! { <li>{entry.clone()}</li> })
                                .collect_view()
                        })}
                    </ul>
                </div>
            })}
        </section>
    }
}
