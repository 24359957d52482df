//! Group Management
//!
//! Searchable group cards, a create-group dialog, and the detail modal.

use leptos::prelude::*;

use crate::components::GroupDetailModal;
use crate::context::AppContext;
use crate::filter::filter_groups;
use crate::models::{Group, Member, Role};
use crate::store::{store_add_group, use_app_store, AppStateStoreFields};

#[component]
pub fn GroupManagement() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (search, set_search) = signal(String::new());
    let (selected, set_selected) = signal::<Option<Group>>(None);
    let (creating, set_creating) = signal(false);
    let (new_name, set_new_name) = signal(String::new());
    let (new_description, set_new_description) = signal(String::new());

    let visible = move || filter_groups(&store.groups().get(), &search.get());

    let create_group = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get_untracked();
        if name.trim().is_empty() {
            return;
        }
        let creator = Member {
            id: 1,
            name: "Alex".to_string(),
            initials: "AJ".to_string(),
            online: true,
            role: Role::Admin,
        };
        let id = store_add_group(&store, &name, &new_description.get_untracked(), creator);
        web_sys::console::log_1(&format!("[GROUPS] Created group {} ({})", id, name.trim()).into());
        set_new_name.set(String::new());
        set_new_description.set(String::new());
        set_creating.set(false);
        ctx.toast("Group Created", &format!("{} is ready for checklists", name.trim()));
    };

    view! {
        <div class="group-management">
            <div class="section-head">
                <div>
                    <h2>"Groups"</h2>
                    <p class="muted">"Manage your groups and team members"</p>
                </div>
                <div class="section-actions">
                    <input
                        type="search"
                        placeholder="Search groups..."
                        prop:value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                    <button class="primary" on:click=move |_| set_creating.set(true)>"+ New Group"</button>
                </div>
            </div>

            <Show when=move || creating.get()>
                <div class="modal-backdrop" on:click=move |_| set_creating.set(false)>
                    <form class="modal" on:click=|ev| ev.stop_propagation() on:submit=create_group>
                        <h3>"Create New Group"</h3>
                        <p class="muted">"Add a new group to organize your checklists and team members."</p>
                        <label class="form-field">
                            <span>"Group Name"</span>
                            <input
                                type="text"
                                placeholder="Enter group name"
                                prop:value=move || new_name.get()
                                on:input=move |ev| set_new_name.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="form-field">
                            <span>"Description"</span>
                            <input
                                type="text"
                                placeholder="Enter description"
                                prop:value=move || new_description.get()
                                on:input=move |ev| set_new_description.set(event_target_value(&ev))
                            />
                        </label>
                        <div class="form-actions">
                            <button type="button" class="secondary" on:click=move |_| set_creating.set(false)>"Cancel"</button>
                            <button type="submit" class="primary">"Create Group"</button>
                        </div>
                    </form>
                </div>
            </Show>

            <div class="card-grid">
                <For
                    each=visible
                    key=|group| (group.id, group.members.len(), group.progress)
                    children=move |group| {
                        let open = group.clone();
                        let online = group.members.iter().filter(|m| m.online).count();
                        view! {
                            <div class="card group-card">
                                <h3>{group.name.clone()}</h3>
                                <p class="muted">{group.description.clone()}</p>
                                <div class="avatar-row">
                                    {group.members.iter().map(|m| view! {
                                        <span class={if m.online { "avatar online" } else { "avatar" }} title={m.name.clone()}>
                                            {m.initials.clone()}
                                        </span>
                                    }).collect_view()}
                                </div>
                                <p class="muted">
                                    {format!(
                                        "{} members ({} online) · {} checklists · {} items",
                                        group.members.len(), online, group.checklists, group.items
                                    )}
                                </p>
                                <div class="progress">
                                    <div class="progress-fill" style={format!("width: {}%", group.progress)}></div>
                                </div>
                                <p class="muted">{format!("{}% complete", group.progress)}</p>
                                <button class="secondary" on:click=move |_| set_selected.set(Some(open.clone()))>
                                    "View Details"
                                </button>
                            </div>
                        }
                    }
                />
            </div>

            {move || selected.get().map(|group| view! {
                <GroupDetailModal group=group on_close={Callback::new(move |_| set_selected.set(None))} />
            })}
        </div>
    }
}
