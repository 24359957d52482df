//! Pickup Form Component
//!
//! Two-step form: contact details, then line items and delivery details.
//! Submitting navigates to the success page with the encoded request.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::nav::Page;
use crate::pickup::{encode_query, FormStep, LineField, PickupForm as FormState};

/// Text field bound to one string inside the form state
#[component]
fn FormField(
    #[prop(into)] label: String,
    #[prop(into)] input_type: String,
    form: RwSignal<FormState>,
    get: fn(&FormState) -> &String,
    set: fn(&mut FormState, String),
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span>{label}</span>
            <input
                type=input_type
                required
                prop:value=move || form.with(|f| get(f).clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            />
        </label>
    }
}

#[component]
pub fn PickupForm(selected_mode: ReadSignal<Option<String>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let form = RwSignal::new(FormState::new());
    let (step, set_step) = signal(FormStep::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let state = form.get_untracked();
        if !state.step_complete(FormStep::Contact) || !state.step_complete(FormStep::Shipment) {
            return;
        }
        let Some(mode) = selected_mode.get_untracked() else {
            return;
        };
        let request = state.submit(Some(mode));
        web_sys::console::log_1(&format!("[PICKUP] Scheduling pickup, total {}", request.total_amount).into());
        ctx.navigate(Page::PickupSuccess { data: encode_query(&request) });
    };

    let progress = move || {
        (0..FormStep::COUNT)
            .map(|i| {
                let class = if i <= step.get().index() { "step-bar active" } else { "step-bar" };
                view! { <div class=class></div> }
            })
            .collect_view()
    };

    // Rebuild rows only when the row count changes, not on every keystroke
    let item_count = Memo::new(move |_| form.with(|f| f.items.len()));

    let line_items = move || {
        let count = item_count.get();
        (0..count)
            .map(|index| {
                view! {
                    <div class="line-item">
                        <label class="form-field">
                            <span>"Item Name"</span>
                            <input
                                type="text"
                                required
                                prop:value=move || form.with(|f| f.items.get(index).map(|i| i.item_name.clone()).unwrap_or_default())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.set_item_field(index, LineField::Name, value));
                                }
                            />
                        </label>
                        <label class="form-field">
                            <span>"Item Description"</span>
                            <input
                                type="text"
                                required
                                prop:value=move || form.with(|f| f.items.get(index).map(|i| i.item_description.clone()).unwrap_or_default())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.set_item_field(index, LineField::Description, value));
                                }
                            />
                        </label>
                        <Show when=move || (count > 1)>
                            <button
                                type="button"
                                class="line-item-delete"
                                on:click=move |_| { form.update(|f| { f.remove_item(index); }); }
                            >
                                "Delete"
                            </button>
                        </Show>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <form class="pickup-form" on:submit=on_submit>
            <div class="step-progress">
                <div class="step-bars">{progress}</div>
                <p>{move || format!("Step {} of {}", step.get().index() + 1, FormStep::COUNT)}</p>
            </div>

            {move || match step.get() {
                FormStep::Contact => view! {
                    <div class="form-step">
                        <FormField label="Full Name" input_type="text" form=form get=|f| &f.name set=|f, v| f.name = v />
                        <FormField label="Email" input_type="email" form=form get=|f| &f.email set=|f, v| f.email = v />
                        <FormField label="Phone" input_type="tel" form=form get=|f| &f.phone set=|f, v| f.phone = v />
                    </div>
                }.into_any(),
                FormStep::Shipment => view! {
                    <div class="form-step">
                        {line_items}
                        <button type="button" class="link-button" on:click=move |_| form.update(|f| f.add_item())>
                            "+ Add Another Item"
                        </button>
                        <FormField label="Pickup Address" input_type="text" form=form get=|f| &f.pickup_address set=|f, v| f.pickup_address = v />
                        <FormField label="Delivery Address" input_type="text" form=form get=|f| &f.delivery_address set=|f, v| f.delivery_address = v />
                        <FormField label="ID Proof" input_type="text" form=form get=|f| &f.id_proof set=|f, v| f.id_proof = v />
                        <FormField label="Priority" input_type="text" form=form get=|f| &f.priority set=|f, v| f.priority = v />
                        <p class="charges-preview">
                            {move || {
                                let charges = form.with(|f| f.charges());
                                format!("Items ₹{} + Delivery ₹{} = ₹{}", charges.items, charges.delivery, charges.total)
                            }}
                        </p>
                    </div>
                }.into_any(),
            }}

            <div class="form-actions">
                <Show when=move || step.get() != FormStep::Contact>
                    <button type="button" class="secondary" on:click=move |_| set_step.update(|s| *s = s.prev())>
                        "Previous"
                    </button>
                </Show>
                {move || if step.get().is_last() {
                    view! {
                        <button type="submit" class="primary" disabled=move || selected_mode.get().is_none()>
                            "Schedule Pickup"
                        </button>
                    }.into_any()
                } else {
                    view! {
                        <button
                            type="button"
                            class="primary"
                            disabled=move || !form.with(|f| f.step_complete(FormStep::Contact))
                            on:click=move |_| set_step.update(|s| *s = s.next())
                        >
                            "Next"
                        </button>
                    }.into_any()
                }}
            </div>
        </form>
    }
}
