//! PackPal Frontend App
//!
//! Provides the store and context, follows `location.hash`, and renders the
//! active page.

use leptos::prelude::*;
use reactive_stores::Store;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::components::{
    DashboardLayout, InformationPage, LandingPage, PaymentPage, PickupPage, PickupSuccessPage, ToastStack,
    TrackPage,
};
use crate::context::AppContext;
use crate::nav::Page;
use crate::store::AppState;

/// Keep `page` in step with browser back/forward and link clicks
fn bind_hashchange(ctx: AppContext) {
    let on_hashchange = Closure::<dyn FnMut(web_sys::HashChangeEvent)>::new(move |_ev: web_sys::HashChangeEvent| {
        ctx.sync_from_location();
    });
    if let Some(win) = web_sys::window() {
        let _ = win.add_event_listener_with_callback("hashchange", on_hashchange.as_ref().unchecked_ref());
    }
    on_hashchange.forget();
}

#[component]
pub fn App() -> impl IntoView {
    let page = signal(Page::default());

    provide_context(Store::new(AppState::new()));
    let ctx = AppContext::new(page);
    provide_context(ctx);

    ctx.sync_from_location();
    bind_hashchange(ctx);

    Effect::new(move |_| {
        let current = ctx.page.get();
        web_sys::console::log_1(&format!("[APP] Page: {}", current.to_hash()).into());
        if let Some(win) = web_sys::window() {
            win.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    let body = move || match ctx.page.get() {
        Page::Home => view! { <LandingPage /> }.into_any(),
        Page::Information => view! { <InformationPage /> }.into_any(),
        Page::Pickup => view! { <PickupPage /> }.into_any(),
        Page::PickupSuccess { data } => view! { <PickupSuccessPage data=data /> }.into_any(),
        Page::Payment { amount } => view! { <PaymentPage amount=amount /> }.into_any(),
        Page::Track => view! { <TrackPage /> }.into_any(),
        Page::Dashboard(tab) => view! { <DashboardLayout tab=tab /> }.into_any(),
    };

    view! {
        <div class=move || if ctx.page.get().is_dashboard() { "app dashboard" } else { "app" }>
            {body}
            <ToastStack />
        </div>
    }
}
