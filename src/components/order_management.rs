//! Order Management
//!
//! Order table with search, group and status filters, per-status counts,
//! inline status updates, and a new-order dialog.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::drafts::OrderDraft;
use crate::filter::{format_date, unique_values, Choice, OrderCounts, OrderFilter};
use crate::models::{OrderStatus, Person};
use crate::store::{store_add_order, store_set_order_status, use_app_store, AppStateStoreFields};

fn status_class(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Ordered => "badge badge-amber",
        OrderStatus::InTransit => "badge badge-blue",
        OrderStatus::Delivered => "badge badge-green",
        OrderStatus::Delayed => "badge badge-red",
    }
}

#[component]
pub fn OrderManagement() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let (criteria, set_criteria) = signal(OrderFilter::default());

    let visible = move || store.orders().with(|orders| criteria.with(|c| c.apply(orders)));
    let counts = Memo::new(move |_| store.orders().with(|orders| OrderCounts::of(orders)));
    let groups = move || store.orders().with(|orders| unique_values(orders, |o| o.group.as_str()));

    let (creating, set_creating) = signal(false);
    let draft = RwSignal::new(OrderDraft::default());
    let (draft_error, set_draft_error) = signal::<Option<String>>(None);

    let close_dialog = move || {
        draft.set(OrderDraft::default());
        set_draft_error.set(None);
        set_creating.set(false);
    };

    let create_order = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let today = chrono::Local::now().date_naive();
        let buyer = Person::new("Alex Johnson", "AJ");
        match store_add_order(&store, draft.get_untracked(), today, buyer) {
            Ok(id) => {
                web_sys::console::log_1(&format!("[ORDERS] Created order {}", id).into());
                close_dialog();
                ctx.toast("Order Created", "Your new order has been added successfully");
            }
            Err(e) => set_draft_error.set(Some(e.to_string())),
        }
    };

    let text_field = move |label: &'static str, placeholder: &'static str, get: fn(&OrderDraft) -> String, put: fn(&mut OrderDraft, String)| {
        view! {
            <label class="form-field">
                <span>{label}</span>
                <input
                    type="text"
                    placeholder=placeholder
                    prop:value=move || draft.with(get)
                    on:input=move |ev| draft.update(|d| put(d, event_target_value(&ev)))
                />
            </label>
        }
    };

    let count_cards = OrderStatus::ALL
        .into_iter()
        .map(|status| {
            view! {
                <div class="card count-card">
                    <span class=status_class(status)>{status.label()}</span>
                    <strong>{move || counts.get().get(status)}</strong>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="order-management">
            <div class="section-head">
                <div>
                    <h2>"Orders"</h2>
                    <p class="muted">"Track purchases and deliveries for every group"</p>
                </div>
                <button class="primary" on:click=move |_| set_creating.set(true)>"+ New Order"</button>
            </div>

            <Show when=move || creating.get()>
                <div class="modal-backdrop" on:click=move |_| close_dialog()>
                    <form class="modal" on:click=|ev| ev.stop_propagation() on:submit=create_order>
                        <h3>"Create New Order"</h3>
                        <p class="muted">"Add a new order to track its delivery."</p>
                        {text_field("Item Name", "Enter item name", |d| d.item.clone(), |d, v| d.item = v)}
                        <label class="form-field">
                            <span>"Group"</span>
                            <select on:change=move |ev| draft.update(|d| d.group = event_target_value(&ev))>
                                <option value="" selected=move || draft.with(|d| d.group.is_empty())>"Select group"</option>
                                {move || groups().into_iter().map(|g| view! { <option value=g.clone()>{g.clone()}</option> }).collect_view()}
                            </select>
                        </label>
                        {text_field("Vendor", "Enter vendor name", |d| d.vendor.clone(), |d, v| d.vendor = v)}
                        <div class="form-row">
                            <label class="form-field">
                                <span>"Price"</span>
                                <input
                                    type="number"
                                    step="0.01"
                                    min="0"
                                    placeholder="0.00"
                                    prop:value=move || draft.with(|d| d.price.clone())
                                    on:input=move |ev| draft.update(|d| d.price = event_target_value(&ev))
                                />
                            </label>
                            <label class="form-field">
                                <span>"Estimated Delivery"</span>
                                <input
                                    type="date"
                                    prop:value=move || draft.with(|d| d.estimated_delivery.clone())
                                    on:input=move |ev| draft.update(|d| d.estimated_delivery = event_target_value(&ev))
                                />
                            </label>
                        </div>
                        <label class="form-field">
                            <span>"Notes"</span>
                            <textarea
                                placeholder="Any additional information"
                                prop:value=move || draft.with(|d| d.notes.clone())
                                on:input=move |ev| draft.update(|d| d.notes = event_target_value(&ev))
                            ></textarea>
                        </label>
                        {move || draft_error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                        <div class="form-actions">
                            <button type="button" class="secondary" on:click=move |_| close_dialog()>"Cancel"</button>
                            <button type="submit" class="primary">"Create Order"</button>
                        </div>
                    </form>
                </div>
            </Show>

            <div class="count-grid">{count_cards}</div>

            <div class="filter-bar">
                <input
                    type="search"
                    placeholder="Search orders..."
                    prop:value=move || criteria.with(|c| c.search.clone())
                    on:input=move |ev| set_criteria.update(|c| c.search = event_target_value(&ev))
                />
                <select on:change=move |ev| set_criteria.update(|c| c.group = Choice::from_select(&event_target_value(&ev)))>
                    <option value="all">"All Groups"</option>
                    {move || groups().into_iter().map(|g| view! { <option value=g.clone()>{g.clone()}</option> }).collect_view()}
                </select>
                <select on:change=move |ev| {
                    let value = event_target_value(&ev);
                    set_criteria.update(|c| {
                        c.status = match OrderStatus::from_str(&value) {
                            Some(status) => Choice::Exact(status),
                            None => Choice::All,
                        }
                    });
                }>
                    <option value="all">"All Statuses"</option>
                    {OrderStatus::ALL.into_iter().map(|s| view! { <option value=s.as_str()>{s.label()}</option> }).collect_view()}
                </select>
            </div>

            <Show
                when=move || !visible().is_empty()
                fallback=|| view! { <p class="empty-state">"No orders match your filters"</p> }
            >
                <table class="order-table">
                    <thead>
                        <tr>
                            <th>"Item"</th>
                            <th>"Group"</th>
                            <th>"Vendor"</th>
                            <th>"Price"</th>
                            <th>"Ordered"</th>
                            <th>"Expected"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=visible
                            key=|order| (order.id, order.status)
                            children=move |order| {
                                let id = order.id;
                                let item = order.item.clone();
                                let on_status = move |ev: web_sys::Event| {
                                    let Some(status) = OrderStatus::from_str(&event_target_value(&ev)) else {
                                        return;
                                    };
                                    if store_set_order_status(&store, id, status) {
                                        ctx.toast("Order Updated", &format!("{} is now {}", item, status.label()));
                                    }
                                };
                                let expected = match &order.actual_delivery {
                                    Some(actual) => format!("Delivered {}", format_date(actual)),
                                    None => format_date(&order.estimated_delivery),
                                };
                                view! {
                                    <tr>
                                        <td>
                                            <strong>{order.item.clone()}</strong>
                                            <p class="muted">{format!("by {}", order.ordered_by.name)}</p>
                                            <Show when={
                                                let has_notes = !order.notes.is_empty();
                                                move || has_notes
                                            }>
                                                <p class="muted small">{order.notes.clone()}</p>
                                            </Show>
                                        </td>
                                        <td>{order.group.clone()}</td>
                                        <td>{order.vendor.clone()}</td>
                                        <td>{format!("${:.2}", order.price)}</td>
                                        <td>{format_date(&order.ordered_date)}</td>
                                        <td>{expected}</td>
                                        <td>
                                            <select class=status_class(order.status) on:change=on_status>
                                                {OrderStatus::ALL.into_iter().map(|s| view! {
                                                    <option value=s.as_str() selected={s == order.status}>{s.label()}</option>
                                                }).collect_view()}
                                            </select>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
