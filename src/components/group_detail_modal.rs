//! Group Detail Modal
//!
//! Members (invite, role change, remove), the group's checklist rows, and
//! simple statistics. Member edits only raise toasts.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::filter::packed_ratio;
use crate::models::{Group, PackStatus, Role};
use crate::store::{use_app_store, AppStateStoreFields};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DetailTab {
    Members,
    Checklists,
    Stats,
}

#[component]
pub fn GroupDetailModal(group: Group, on_close: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (tab, set_tab) = signal(DetailTab::Members);
    let (invite_email, set_invite_email) = signal(String::new());

    let on_invite = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email = invite_email.get_untracked();
        if email.trim().is_empty() {
            return;
        }
        ctx.toast("Invitation Sent", &format!("An invitation has been sent to {}", email.trim()));
        set_invite_email.set(String::new());
    };

    let tab_button = move |t: DetailTab, label: &'static str| {
        view! {
            <button
                class=move || if tab.get() == t { "tab active" } else { "tab" }
                on:click=move |_| set_tab.set(t)
            >
                {label}
            </button>
        }
    };

    let members = group.members.clone();
    let group_name = group.name.clone();
    let online = group.members.iter().filter(|m| m.online).count();
    let total_members = group.members.len();
    let (progress, checklists, item_count) = (group.progress, group.checklists, group.items);

    let members_view = move || {
        members
            .iter()
            .map(|member| {
                let name = member.name.clone();
                let role_class = match member.role {
                    Role::Admin => "badge badge-blue",
                    Role::Member => "badge",
                };
                view! {
                    <li class="member-row">
                        <span class={if member.online { "avatar online" } else { "avatar" }}>{member.initials.clone()}</span>
                        <div class="member-info">
                            <p>{member.name.clone()}</p>
                            <p class="muted">{if member.online { "Online" } else { "Offline" }}</p>
                        </div>
                        <span class=role_class>{member.role.label()}</span>
                        <select on:change={
                            let name = name.clone();
                            move |ev: web_sys::Event| {
                                let role = event_target_value(&ev);
                                ctx.toast("Role Updated", &format!("{}'s role has been updated to {}", name, role));
                            }
                        }>
                            <option value="" selected>"Change role"</option>
                            <option value="Admin">"Admin"</option>
                            <option value="Member">"Member"</option>
                        </select>
                        <button
                            class="link-button danger"
                            on:click=move |_| ctx.toast("Member Removed", &format!("{} has been removed from the group", name))
                        >
                            "Remove"
                        </button>
                    </li>
                }
            })
            .collect_view()
    };

    let checklist_rows = move || {
        store.checklist().with(|items| {
            items
                .iter()
                .filter(|i| i.group == group_name)
                .map(|item| {
                    let done = item.status != PackStatus::ToPack;
                    view! {
                        <li class="checklist-mini">
                            <span class={if done { "check done" } else { "check" }}>{if done { "✓" } else { "" }}</span>
                            <span>{item.title.clone()}</span>
                            <span class="muted">{item.status.label()}</span>
                        </li>
                    }
                })
                .collect_view()
        })
    };

    let group_for_stats = group.name.clone();
    let stats = move || {
        let (done, total) = store.checklist().with(|items| {
            let rows: Vec<_> = items.iter().filter(|i| i.group == group_for_stats).cloned().collect();
            packed_ratio(&rows)
        });
        format!("{} of {} tracked items packed", done, total)
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal wide" on:click=|ev| ev.stop_propagation()>
                <div class="modal-head">
                    <div>
                        <h3>{group.name.clone()}</h3>
                        <p class="muted">{group.description.clone()}</p>
                    </div>
                    <button class="modal-close" on:click=move |_| on_close.run(())>"×"</button>
                </div>

                <div class="tab-row">
                    {tab_button(DetailTab::Members, "Members")}
                    {tab_button(DetailTab::Checklists, "Checklists")}
                    {tab_button(DetailTab::Stats, "Statistics")}
                </div>

                <Show when=move || tab.get() == DetailTab::Members>
                    <form class="invite-form" on:submit=on_invite>
                        <input
                            type="email"
                            placeholder="Email address"
                            prop:value=move || invite_email.get()
                            on:input=move |ev| set_invite_email.set(event_target_value(&ev))
                        />
                        <button type="submit" class="primary">"Invite"</button>
                    </form>
                    <ul class="member-list">{members_view.clone()}</ul>
                </Show>

                <Show when=move || tab.get() == DetailTab::Checklists>
                    <ul class="checklist-mini-list">{checklist_rows.clone()}</ul>
                </Show>

                <Show when=move || tab.get() == DetailTab::Stats>
                    <div class="stat-grid small">
                        <div class="stat"><strong>{progress}"%"</strong><span>"Progress"</span></div>
                        <div class="stat"><strong>{checklists}</strong><span>"Checklists"</span></div>
                        <div class="stat"><strong>{item_count}</strong><span>"Items"</span></div>
                        <div class="stat"><strong>{format!("{}/{}", online, total_members)}</strong><span>"Online"</span></div>
                    </div>
                    <p class="muted">{stats.clone()}</p>
                </Show>
            </div>
        </div>
    }
}
