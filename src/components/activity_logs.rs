//! Activity Logs

use leptos::prelude::*;

use crate::filter::{format_time, unique_values, ActivityFilter, Choice, DateWindow};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ActivityLogs() -> impl IntoView {
    let store = use_app_store();
    let (criteria, set_criteria) = signal(ActivityFilter::default());

    let visible = move || {
        let now = chrono::Local::now().naive_local();
        store.activities().with(|rows| criteria.with(|c| c.apply(rows, now)))
    };
    let users = move || store.activities().with(|rows| unique_values(rows, |a| a.user.name.as_str()));
    let actions = move || store.activities().with(|rows| unique_values(rows, |a| a.action.as_str()));

    view! {
        <div class="activity-logs">
            <div class="section-head">
                <div>
                    <h2>"Activity Logs"</h2>
                    <p class="muted">"Everything that happened across your groups"</p>
                </div>
            </div>

            <div class="filter-bar">
                <input
                    type="search"
                    placeholder="Search activity..."
                    prop:value=move || criteria.with(|c| c.search.clone())
                    on:input=move |ev| set_criteria.update(|c| c.search = event_target_value(&ev))
                />
                <select on:change=move |ev| set_criteria.update(|c| c.user = Choice::from_select(&event_target_value(&ev)))>
                    <option value="all">"All Users"</option>
                    {move || users().into_iter().map(|u| view! { <option value=u.clone()>{u.clone()}</option> }).collect_view()}
                </select>
                <select on:change=move |ev| set_criteria.update(|c| c.action = Choice::from_select(&event_target_value(&ev)))>
                    <option value="all">"All Actions"</option>
                    {move || actions().into_iter().map(|a| view! { <option value=a.clone()>{a.clone()}</option> }).collect_view()}
                </select>
                <select on:change=move |ev| set_criteria.update(|c| c.window = DateWindow::from_str(&event_target_value(&ev)))>
                    {DateWindow::ALL.into_iter().map(|w| view! { <option value=w.as_str()>{w.label()}</option> }).collect_view()}
                </select>
            </div>

            <Show
                when=move || !visible().is_empty()
                fallback=|| view! { <p class="empty-state">"No activity found"</p> }
            >
                <ul class="activity-list">
                    <For
                        each=visible
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
                                    <p class="muted">{format!("{} · {}", activity.group, format_time(&activity.time))}</p>
                                </div>
                            </li>
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
