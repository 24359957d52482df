//! Counter Value
//!
//! Number that counts up to its target on mount.

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::charts::counter_frame;

const FRAME_MS: u32 = 40;

#[component]
pub fn CounterValue(
    value: u32,
    #[prop(default = 1500)] duration_ms: u32,
    #[prop(optional, into)] suffix: String,
) -> impl IntoView {
    let (shown, set_shown) = signal(0u32);
    let ticker = StoredValue::new_local(None::<Interval>);
    let started = js_sys::Date::now();

    ticker.set_value(Some(Interval::new(FRAME_MS, move || {
        let elapsed = (js_sys::Date::now() - started).max(0.0) as u32;
        set_shown.set(counter_frame(value, elapsed, duration_ms));
    })));

    // Drop the interval once the target is reached
    Effect::new(move |_| {
        if shown.get() >= value {
            ticker.set_value(None);
        }
    });
    on_cleanup(move || ticker.set_value(None));

    view! { <span class="counter-value">{move || shown.get()}{suffix.clone()}</span> }
}
