//! Landing Page
//!
//! Hero with feature tiles, plus order history, activity and profile tabs.

use leptos::prelude::*;

use crate::components::Logo;
use crate::context::AppContext;
use crate::mock::{self, LANDING_ACTIVITY, LANDING_FEATURES, LANDING_ORDERS};
use crate::nav::{DashboardTab, Page};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LandingTab {
    Main,
    Orders,
    Logs,
    Profile,
}

impl LandingTab {
    const ALL: [(LandingTab, &'static str); 4] = [
        (LandingTab::Main, "Home"),
        (LandingTab::Orders, "Orders"),
        (LandingTab::Logs, "Logs"),
        (LandingTab::Profile, "Profile"),
    ];
}

fn status_class(status: &str) -> &'static str {
    match status {
        "Delivered" => "badge badge-green",
        "In Transit" => "badge badge-blue",
        _ => "badge badge-amber",
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (active_tab, set_active_tab) = signal(LandingTab::Main);

    let tabs = LandingTab::ALL
        .iter()
        .map(|(tab, label)| {
            let tab = *tab;
            view! {
                <button
                    class=move || if active_tab.get() == tab { "landing-tab active" } else { "landing-tab" }
                    on:click=move |_| set_active_tab.set(tab)
                >
                    {*label}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="page landing-page">
            <div class="landing-top">
                <Logo />
                <nav class="landing-tabs">{tabs}</nav>
            </div>

            <div class="landing-panel">
                {move || match active_tab.get() {
                    LandingTab::Main => view! {
                        <h1>"PackPal – Smarter Group Packing"</h1>
                        <p class="landing-lead">
                            "Simplify collaborative packing and event logistics with real-time tracking, role-based coordination, and streamlined checklist management."
                        </p>
                        <div class="feature-grid">
                            {LANDING_FEATURES.iter().map(|label| view! { <div class="feature-tile">{*label}</div> }).collect_view()}
                        </div>
                        <div class="landing-actions">
                            <button class="primary pill" on:click=move |_| ctx.navigate(Page::Information)>"Start Tracking →"</button>
                            <button class="secondary pill" on:click=move |_| ctx.navigate(Page::Dashboard(DashboardTab::Overview))>"Owner Dashboard"</button>
                        </div>
                    }.into_any(),
                    LandingTab::Orders => view! {
                        <h2>"Orders History"</h2>
                        <ul class="landing-list">
                            {LANDING_ORDERS.iter().map(|(id, status, date, items)| view! {
                                <li>
                                    <div>
                                        <h3>{*id}</h3>
                                        <p>{format!("{} · {} item{}", date, items, if *items == 1 { "" } else { "s" })}</p>
                                    </div>
                                    <span class=status_class(status)>{*status}</span>
                                </li>
                            }).collect_view()}
                        </ul>
                        <button class="primary pill" on:click=move |_| ctx.navigate(Page::Dashboard(DashboardTab::Orders))>"View All Orders"</button>
                    }.into_any(),
                    LandingTab::Logs => view! {
                        <h2>"Activity Logs"</h2>
                        <ul class="landing-list">
                            {LANDING_ACTIVITY.iter().map(|(action, time, user)| view! {
                                <li>
                                    <div>
                                        <h3>{*action}</h3>
                                        <p>{format!("{} · by {}", time, user)}</p>
                                    </div>
                                </li>
                            }).collect_view()}
                        </ul>
                    }.into_any(),
                    LandingTab::Profile => {
                        let profile = &mock::PROFILE;
                        view! {
                            <h2>"Profile"</h2>
                            <div class="profile-card">
                                <h3>{profile.name}</h3>
                                <p>{profile.role}</p>
                                <p>{profile.team}</p>
                                <div class="profile-stats">
                                    <div><strong>{profile.completed_tasks}</strong><span>"Completed"</span></div>
                                    <div><strong>{profile.pending_tasks}</strong><span>"Pending"</span></div>
                                </div>
                            </div>
                            <button class="primary pill" on:click=move |_| ctx.navigate(Page::Dashboard(DashboardTab::Settings))>"Edit Profile"</button>
                        }.into_any()
                    }
                }}
            </div>
        </div>
    }
}
