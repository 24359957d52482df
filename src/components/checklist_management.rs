//! Checklist Management
//!
//! Filterable packing checklist with inline status changes,
//! drag-to-reorder rows, an add-item dialog and per-row delete.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::context::AppContext;
use crate::drafts::ItemDraft;
use crate::filter::{packed_ratio, unique_values, ChecklistFilter, Choice};
use crate::models::{PackStatus, Priority};
use crate::store::{
    store_add_item, store_remove_item, store_reorder_checklist, store_set_item_status, use_app_store,
    AppStateStoreFields,
};

fn priority_class(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "badge badge-red",
        Priority::Medium => "badge badge-amber",
        Priority::Low => "badge badge-green",
    }
}

#[component]
pub fn ChecklistManagement() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let (criteria, set_criteria) = signal(ChecklistFilter::default());

    let dnd = create_dnd_signals();
    let listeners = StoredValue::new_local(Some(bind_global_mouseup(dnd, move |dragged, target| {
        web_sys::console::log_1(&format!("[DND] Checklist drop: dragged={}, target={:?}", dragged, target).into());
        store_reorder_checklist(&store, dragged, target);
    })));
    // The tab remounts on every visit; detach from the document when it goes
    on_cleanup(move || {
        let _ = listeners.try_update_value(|slot| slot.take());
    });

    let groups = move || store.checklist().with(|items| unique_values(items, |i| i.group.as_str()));
    let assignees = move || store.checklist().with(|items| unique_values(items, |i| i.assignee.name.as_str()));
    let visible = move || store.checklist().with(|items| criteria.with(|c| c.apply(items)));
    let ratio = move || store.checklist().with(|items| packed_ratio(items));
    let categories = move || store.checklist().with(|items| unique_values(items, |i| i.category.as_str()));

    let (adding, set_adding) = signal(false);
    let draft = RwSignal::new(ItemDraft::default());
    let (draft_error, set_draft_error) = signal::<Option<String>>(None);

    let close_dialog = move || {
        draft.set(ItemDraft::default());
        set_draft_error.set(None);
        set_adding.set(false);
    };

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match store_add_item(&store, draft.get_untracked()) {
            Ok(id) => {
                web_sys::console::log_1(&format!("[CHECKLIST] Added item {}", id).into());
                close_dialog();
                ctx.toast("Item Created", "Your new item has been added to the checklist");
            }
            Err(e) => set_draft_error.set(Some(e.to_string())),
        }
    };

    let option_list = |values: Vec<String>| {
        values
            .into_iter()
            .map(|v| view! { <option value=v.clone()>{v.clone()}</option> })
            .collect_view()
    };

    view! {
        <div class="checklist-management">
            <div class="section-head">
                <div>
                    <h2>"Checklists"</h2>
                    <p class="muted">
                        {move || {
                            let (done, total) = ratio();
                            format!("{} of {} items packed", done, total)
                        }}
                    </p>
                </div>
                <button class="primary" on:click=move |_| set_adding.set(true)>"+ Add Item"</button>
            </div>

            <Show when=move || adding.get()>
                <div class="modal-backdrop" on:click=move |_| close_dialog()>
                    <form class="modal" on:click=|ev| ev.stop_propagation() on:submit=add_item>
                        <h3>"Add New Item"</h3>
                        <p class="muted">"Add a new item to your checklist."</p>
                        <label class="form-field">
                            <span>"Title"</span>
                            <input
                                type="text"
                                placeholder="Enter item title"
                                prop:value=move || draft.with(|d| d.title.clone())
                                on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                            />
                        </label>
                        <label class="form-field">
                            <span>"Description"</span>
                            <textarea
                                placeholder="Enter item description"
                                prop:value=move || draft.with(|d| d.description.clone())
                                on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                            ></textarea>
                        </label>
                        <div class="form-row">
                            <label class="form-field">
                                <span>"Priority"</span>
                                <select on:change=move |ev| draft.update(|d| d.priority = Priority::from_str(&event_target_value(&ev)))>
                                    {[Priority::High, Priority::Medium, Priority::Low].into_iter().map(|p| view! {
                                        <option value=p.as_str() selected=move || draft.with(|d| d.priority == p)>{p.as_str()}</option>
                                    }).collect_view()}
                                </select>
                            </label>
                            <label class="form-field">
                                <span>"Quantity"</span>
                                <input
                                    type="number"
                                    min="1"
                                    prop:value=move || draft.with(|d| d.quantity.clone())
                                    on:input=move |ev| draft.update(|d| d.quantity = event_target_value(&ev))
                                />
                            </label>
                        </div>
                        <div class="form-row">
                            <label class="form-field">
                                <span>"Category"</span>
                                <input
                                    type="text"
                                    list="checklist-categories"
                                    placeholder="Pick or type a category"
                                    prop:value=move || draft.with(|d| d.category.clone())
                                    on:input=move |ev| draft.update(|d| d.category = event_target_value(&ev))
                                />
                                <datalist id="checklist-categories">{move || option_list(categories())}</datalist>
                            </label>
                            <label class="form-field">
                                <span>"Assignee"</span>
                                <select on:change=move |ev| draft.update(|d| d.assignee = event_target_value(&ev))>
                                    <option value="" selected=move || draft.with(|d| d.assignee.is_empty())>"Select assignee"</option>
                                    {move || option_list(assignees())}
                                </select>
                            </label>
                        </div>
                        <label class="form-field">
                            <span>"Group"</span>
                            <select on:change=move |ev| draft.update(|d| d.group = event_target_value(&ev))>
                                <option value="" selected=move || draft.with(|d| d.group.is_empty())>"Select group"</option>
                                {move || option_list(groups())}
                            </select>
                        </label>
                        {move || draft_error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                        <div class="form-actions">
                            <button type="button" class="secondary" on:click=move |_| close_dialog()>"Cancel"</button>
                            <button type="submit" class="primary">"Add Item"</button>
                        </div>
                    </form>
                </div>
            </Show>

            <div class="filter-bar">
                <input
                    type="search"
                    placeholder="Search items..."
                    prop:value=move || criteria.with(|c| c.search.clone())
                    on:input=move |ev| set_criteria.update(|c| c.search = event_target_value(&ev))
                />
                <select on:change=move |ev| set_criteria.update(|c| c.group = Choice::from_select(&event_target_value(&ev)))>
                    <option value="all">"All Groups"</option>
                    {move || option_list(groups())}
                </select>
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    set_criteria.update(|c| {
                        c.status = match PackStatus::from_str(&value) {
                            Some(status) => Choice::Exact(status),
                            None => Choice::All,
                        }
                    });
                }>
                    <option value="all">"All Statuses"</option>
                    {PackStatus::ALL.into_iter().map(|s| view! { <option value=s.as_str()>{s.label()}</option> }).collect_view()}
                </select>
                <select on:change=move |ev| set_criteria.update(|c| c.assignee = Choice::from_select(&event_target_value(&ev)))>
                    <option value="all">"All Assignees"</option>
                    {move || option_list(assignees())}
                </select>
            </div>

            <Show
                when=move || !visible().is_empty()
                fallback=|| view! { <p class="empty-state">"No items match your filters"</p> }
            >
                <ul class="checklist">
                    <For
                        each=visible
                        key=|item| (item.id, item.status)
                        children=move |item| {
                            let id = item.id;
                            let on_mousedown = make_on_mousedown(dnd, id);
                            let on_mouseenter = make_on_row_mouseenter(dnd, id);
                            let on_mouseleave = make_on_mouseleave(dnd);

                            let row_class = move || {
                                let mut c = String::from("checklist-row");
                                if dnd.dragging_id_read.get() == Some(id) { c.push_str(" dragging"); }
                                if dnd.drop_target_read.get() == Some(DropTarget::Row(id)) { c.push_str(" drop-target"); }
                                c
                            };

                            let title = item.title.clone();
                            let on_status = move |ev: web_sys::Event| {
                                let Some(status) = PackStatus::from_str(&event_target_value(&ev)) else {
                                    return;
                                };
                                if store_set_item_status(&store, id, status) {
                                    ctx.toast("Status Updated", &format!("{} marked as {}", title, status.label()));
                                }
                            };

                            view! {
                                <li
                                    class=row_class
                                    on:mousedown=on_mousedown
                                    on:mouseenter=on_mouseenter
                                    on:mouseleave=on_mouseleave
                                >
                                    <span class="drag-handle">"⋮⋮"</span>
                                    <div class="checklist-main">
                                        <h4>{item.title.clone()}</h4>
                                        <p class="muted">{item.description.clone()}</p>
                                        <p class="muted">
                                            {format!("{} · Qty {} · {}", item.category, item.quantity, item.group)}
                                        </p>
                                    </div>
                                    <span class=priority_class(item.priority)>{item.priority.as_str()}</span>
                                    <span class="avatar" title=item.assignee.name.clone()>{item.assignee.initials.clone()}</span>
                                    <select on:change=on_status>
                                        {PackStatus::ALL.into_iter().map(|s| view! {
                                            <option value=s.as_str() selected={s == item.status}>{s.label()}</option>
                                        }).collect_view()}
                                    </select>
                                    <button
                                        class="link-button danger"
                                        title="Delete item"
                                        on:mousedown=|ev| ev.stop_propagation()
                                        on:click=move |_| {
                                            if store_remove_item(&store, id) {
                                                ctx.toast("Item Deleted", "The item has been removed from the checklist");
                                            }
                                        }
                                    >
                                        "Delete"
                                    </button>
                                </li>
                            }
                        }
                    />
                    <li
                        class=move || {
                            if dnd.drop_target_read.get() == Some(DropTarget::End) { "drop-end active" } else { "drop-end" }
                        }
                        on:mouseenter=make_on_end_mouseenter(dnd)
                        on:mouseleave=make_on_mouseleave(dnd)
                    ></li>
                </ul>
            </Show>
        </div>
    }
}
