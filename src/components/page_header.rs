//! Page Header
//!
//! Back link, page title and the PackPal logo.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::nav::Page;

#[component]
pub fn Logo() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    view! {
        <button class="logo" on:click=move |_| ctx.navigate(Page::Home)>
            <span class="logo-mark">"📦"</span>
            <span class="logo-text">"PackPal"</span>
        </button>
    }
}

/// Header bar with a back arrow to `back`
#[component]
pub fn PageHeader(#[prop(into)] title: String, back: Page) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    view! {
        <header class="page-header">
            <button class="back-link" title="Back" on:click=move |_| ctx.navigate(back.clone())>"←"</button>
            <h1>{title}</h1>
            <Logo />
        </header>
    }
}
