//! Pickup Pages
//!
//! Mode selection plus the pickup form, the success summary, and the
//! payment stub.

use leptos::prelude::*;

use crate::components::{PageHeader, PickupForm};
use crate::context::AppContext;
use crate::mock;
use crate::nav::Page;
use crate::pickup::{decode_query, parse_amount, PickupRequest};

#[component]
pub fn PickupPage() -> impl IntoView {
    let (selected_mode, set_selected_mode) = signal::<Option<String>>(None);

    let modes = mock::transport_modes()
        .into_iter()
        .map(|mode| {
            let name = mode.name.clone();
            let is_selected = {
                let name = name.clone();
                move || selected_mode.get().as_deref() == Some(name.as_str())
            };
            view! {
                <button
                    type="button"
                    class=move || if is_selected() { "mode-card selected" } else { "mode-card" }
                    on:click=move |_| set_selected_mode.set(Some(name.clone()))
                >
                    <h3>{mode.name}</h3>
                    <p>{mode.description}</p>
                    <p class="mode-meta">{mode.estimated_time}</p>
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="page pickup-page">
            <PageHeader title="Schedule a Pickup" back=Page::Information />
            <main class="page-main pickup-layout">
                <section>
                    <h2>"Choose a transport mode"</h2>
                    <div class="mode-grid">{modes}</div>
                    <Show when=move || selected_mode.get().is_none()>
                        <p class="hint">"Select a transport mode to schedule your pickup."</p>
                    </Show>
                </section>
                <section>
                    <PickupForm selected_mode=selected_mode />
                </section>
            </main>
        </div>
    }
}

// ========================
// Success
// ========================

#[component]
pub fn PickupSuccessPage(data: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    match decode_query(&data) {
        Ok(request) => view! {
            <div class="page success-page">
                <PageHeader title="Pickup Scheduled" back=Page::Pickup />
                <main class="page-main centered">
                    <div class="success-check">"✓"</div>
                    <h2>"Pickup Successfully Scheduled!"</h2>
                    <PickupSummary request=request.clone() />
                    <button
                        class="primary pill"
                        on:click=move |_| ctx.navigate(Page::Payment {
                            amount: Some(request.total_amount.to_string()),
                        })
                    >
                        "Proceed to Payment"
                    </button>
                </main>
            </div>
        }
        .into_any(),
        Err(e) => {
            web_sys::console::error_1(&format!("[PICKUP] Invalid pickup data in link: {}", e).into());
            view! {
                <div class="page success-page">
                    <PageHeader title="Pickup Scheduled" back=Page::Pickup />
                    <main class="page-main centered">
                        <h2>"We couldn't read your pickup details"</h2>
                        <p class="form-error">{e.to_string()}</p>
                        <button class="primary pill" on:click=move |_| ctx.navigate(Page::Pickup)>
                            "Start a new pickup"
                        </button>
                    </main>
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn PickupSummary(request: PickupRequest) -> impl IntoView {
    let items = request
        .items
        .iter()
        .map(|item| view! { <li>{format!("{}: {}", item.item_name, item.item_description)}</li> })
        .collect_view();

    view! {
        <div class="summary-card">
            <h3>"Pickup Details"</h3>
            <p><strong>"Name: "</strong>{request.name.clone()}</p>
            <p><strong>"Email: "</strong>{request.email.clone()}</p>
            <p><strong>"Phone: "</strong>{request.phone.clone()}</p>
            <p><strong>"Pickup Address: "</strong>{request.pickup_address.clone()}</p>
            <p><strong>"Delivery Address: "</strong>{request.delivery_address.clone()}</p>
            <p><strong>"Priority: "</strong>{request.priority.clone()}</p>
            <p><strong>"Mode: "</strong>{request.selected_mode.clone().unwrap_or_default()}</p>
            <div>
                <strong>"Items:"</strong>
                <ul>{items}</ul>
            </div>
            <div class="summary-charges">
                <p><strong>"Item Charges: "</strong>{format!("₹{}", request.item_charge)}</p>
                <p><strong>"Delivery Charges: "</strong>{format!("₹{}", request.delivery_charge)}</p>
                <p class="summary-total">{format!("Total Amount: ₹{}", request.total_amount)}</p>
            </div>
        </div>
    }
}

// ========================
// Payment
// ========================

#[component]
pub fn PaymentPage(amount: Option<String>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let amount = parse_amount(amount.as_deref());

    view! {
        <div class="page payment-page centered">
            <h1>"Select Payment Method"</h1>
            {match amount {
                Some(value) => view! {
                    <p class="payment-amount">{format!("Total amount to be paid: ₹{}", value)}</p>
                    <button
                        class="primary pill"
                        on:click=move |_| ctx.toast("Payment", "Online payment is not available yet.")
                    >
                        "Pay Now"
                    </button>
                }
                .into_any(),
                None => view! { <p>"Loading payment details..."</p> }.into_any(),
            }}
        </div>
    }
}
