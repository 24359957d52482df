//! Upcoming Deliveries

use leptos::prelude::*;

use crate::filter::format_date;
use crate::models::{Delivery, OrderStatus};
use crate::store::{use_app_store, AppStateStoreFields};

fn badge_class(delivery: &Delivery) -> &'static str {
    if delivery.is_delayed {
        return "badge badge-red";
    }
    match delivery.status {
        OrderStatus::Delivered => "badge badge-green",
        OrderStatus::InTransit => "badge badge-blue",
        _ => "badge badge-amber",
    }
}

#[component]
pub fn UpcomingDeliveries() -> impl IntoView {
    let store = use_app_store();

    view! {
        <ul class="delivery-list">
            <For
                each=move || store.deliveries().get()
                key=|delivery| (delivery.id, delivery.status)
                children=move |delivery| view! {
                    <li class="delivery-row">
                        <div>
                            <h4>{delivery.item.clone()}</h4>
                            <p class="muted">{delivery.vendor.clone()}</p>
                            <p class="muted">
                                {format!(
                                    "Ordered: {} · Expected: {}",
                                    format_date(&delivery.ordered_date),
                                    format_date(&delivery.estimated_delivery),
                                )}
                            </p>
                        </div>
                        <span class=badge_class(&delivery)>{delivery.badge()}</span>
                    </li>
                }
            />
        </ul>
    }
}
