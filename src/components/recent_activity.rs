//! Recent Activity
//!
//! Activity feed with an optional row limit and a View All toggle.

use leptos::prelude::*;

use crate::filter::{format_time, limited};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn RecentActivity(#[prop(optional)] limit: Option<usize>) -> impl IntoView {
    let store = use_app_store();
    let (expanded, set_expanded) = signal(false);

    let rows = move || limited(&store.activities().get(), limit, expanded.get());
    let has_more = move || limit.is_some_and(|n| store.activities().with(|a| a.len() > n));

    view! {
        <div class="recent-activity">
            <ul class="activity-list">
                <For
                    each=rows
                    key=|activity| activity.id
                    children=move |activity| view! {
                        <li class="activity-row">
                            <span class="avatar">{activity.user.initials.clone()}</span>
                            <div>
                                <p>
                                    <strong>{activity.user.name.clone()}</strong>
                                    {format!(" {} ", activity.action)}
                                    <strong>{activity.item.clone()}</strong>
                                </p>
                                <p class="muted">{format!("{} · {}", format_time(&activity.time), activity.group)}</p>
                            </div>
                        </li>
                    }
                />
            </ul>
            <Show when=has_more>
                <button class="link-button" on:click=move |_| set_expanded.update(|e| *e = !*e)>
                    {move || if expanded.get() { "Show Less" } else { "View All" }}
                </button>
            </Show>
        </div>
    }
}
