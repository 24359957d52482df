//! Dashboard Layout
//!
//! Collapsible sidebar plus the content for the active tab.

use leptos::prelude::*;

use crate::components::{
    ActivityLogs, ChecklistManagement, DashboardOverview, GroupManagement, Logo, OrderManagement, SettingsPanel,
};
use crate::context::AppContext;
use crate::mock::PROFILE;
use crate::nav::{DashboardTab, Page};

fn tab_icon(tab: DashboardTab) -> &'static str {
    match tab {
        DashboardTab::Overview => "⌂",
        DashboardTab::Groups => "👥",
        DashboardTab::Checklists => "☑",
        DashboardTab::Orders => "📦",
        DashboardTab::Logs => "📋",
        DashboardTab::Settings => "⚙",
    }
}

#[component]
pub fn DashboardLayout(tab: DashboardTab) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (collapsed, set_collapsed) = signal(false);

    let links = DashboardTab::ALL
        .into_iter()
        .map(|t| {
            view! {
                <button
                    class={if t == tab { "sidebar-link active" } else { "sidebar-link" }}
                    title=t.label()
                    on:click=move |_| ctx.navigate(Page::Dashboard(t))
                >
                    <span class="sidebar-icon">{tab_icon(t)}</span>
                    <Show when=move || !collapsed.get()>
                        <span>{t.label()}</span>
                    </Show>
                </button>
            }
        })
        .collect_view();

    let content = match tab {
        DashboardTab::Overview => view! { <DashboardOverview /> }.into_any(),
        DashboardTab::Groups => view! { <GroupManagement /> }.into_any(),
        DashboardTab::Checklists => view! { <ChecklistManagement /> }.into_any(),
        DashboardTab::Orders => view! { <OrderManagement /> }.into_any(),
        DashboardTab::Logs => view! { <ActivityLogs /> }.into_any(),
        DashboardTab::Settings => view! { <SettingsPanel /> }.into_any(),
    };

    view! {
        <div class="dashboard-layout">
            <aside class=move || if collapsed.get() { "sidebar collapsed" } else { "sidebar" }>
                <div class="sidebar-head">
                    <Show when=move || !collapsed.get()>
                        <Logo />
                    </Show>
                    <button
                        class="sidebar-toggle"
                        title=move || if collapsed.get() { "Expand" } else { "Collapse" }
                        on:click=move |_| set_collapsed.update(|c| *c = !*c)
                    >
                        {move || if collapsed.get() { "»" } else { "«" }}
                    </button>
                </div>
                <nav class="sidebar-nav">{links}</nav>
                <div class="sidebar-profile">
                    <span class="avatar">"AJ"</span>
                    <Show when=move || !collapsed.get()>
                        <div>
                            <p>{PROFILE.name}</p>
                            <p class="muted">{PROFILE.role}</p>
                        </div>
                    </Show>
                </div>
            </aside>
            <main class="dashboard-content">{content}</main>
        </div>
    }
}
