//! Information Page
//!
//! Transport modes with expandable details, headline stats, testimonials
//! and upcoming features.

use leptos::prelude::*;

use crate::components::PageHeader;
use crate::context::AppContext;
use crate::mock::{self, TESTIMONIALS, TRANSPORT_STATS, UPCOMING_FEATURES};
use crate::nav::Page;

const COMPARE_POINTS: [(&str, &str); 3] = [
    ("Transit Time", "Compare estimated delivery times"),
    ("Sustainability", "Choose eco-friendly options"),
    ("Cost Efficiency", "Find budget-friendly solutions"),
];

#[component]
pub fn InformationPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let (expanded, set_expanded) = signal::<Option<usize>>(None);

    let modes = mock::transport_modes()
        .into_iter()
        .enumerate()
        .map(|(index, mode)| {
            let is_open = move || expanded.get() == Some(index);
            view! {
                <article class="mode-card">
                    <h3>{mode.name}</h3>
                    <p>{mode.description}</p>
                    <button
                        class="link-button"
                        on:click=move |_| set_expanded.update(|e| *e = if *e == Some(index) { None } else { Some(index) })
                    >
                        {move || if is_open() { "Hide details" } else { "Learn more" }}
                    </button>
                    <Show when=is_open>
                        <div class="mode-details">
                            <p>{mode.details.clone()}</p>
                            <ul>
                                <li><strong>"Transit: "</strong>{mode.estimated_time.clone()}</li>
                                <li><strong>"Cost: "</strong>{mode.cost_efficiency.clone()}</li>
                                <li><strong>"Sustainability: "</strong>{mode.sustainability.clone()}</li>
                            </ul>
                        </div>
                    </Show>
                </article>
            }
        })
        .collect_view();

    view! {
        <div class="page information-page">
            <PageHeader title="Transport Solutions" back=Page::Home />
            <main class="page-main">
                <section class="intro-card">
                    <h2>"Choose Your Perfect Transport Solution"</h2>
                    <p>
                        "We offer a comprehensive range of transport options to meet your shipping needs. Each mode of transport has its unique advantages in terms of speed, cost, and environmental impact. Compare the options below to find the perfect solution for your cargo."
                    </p>
                    <div class="compare-grid">
                        {COMPARE_POINTS.iter().map(|(title, desc)| view! {
                            <div class="compare-tile"><h3>{*title}</h3><p>{*desc}</p></div>
                        }).collect_view()}
                    </div>
                </section>

                <section class="mode-grid">{modes}</section>

                <div class="cta-row">
                    <button class="primary pill" on:click=move |_| ctx.navigate(Page::Pickup)>"Continue to Selection"</button>
                </div>

                <section class="stats-grid">
                    {TRANSPORT_STATS.iter().map(|(value, label)| view! {
                        <div class="stat"><strong>{*value}</strong><span>{*label}</span></div>
                    }).collect_view()}
                </section>

                <section class="testimonials">
                    <h2>"What Our Customers Say"</h2>
                    {TESTIMONIALS.iter().map(|(text, author, company)| view! {
                        <blockquote>
                            <p>{*text}</p>
                            <footer><strong>{*author}</strong><span>{*company}</span></footer>
                        </blockquote>
                    }).collect_view()}
                </section>

                <section class="upcoming">
                    <h2>"Coming Soon"</h2>
                    {UPCOMING_FEATURES.iter().map(|(title, desc)| view! {
                        <div class="upcoming-card"><h4>{*title}</h4><p>{*desc}</p></div>
                    }).collect_view()}
                </section>

                <button class="track-card" on:click=move |_| ctx.navigate(Page::Track)>
                    <h2>"Track Package"</h2>
                    <p>"Check the status of your shipment"</p>
                </button>
            </main>
        </div>
    }
}
