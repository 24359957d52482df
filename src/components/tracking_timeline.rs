//! Tracking Timeline

use leptos::prelude::*;

use crate::models::TrackingData;

#[component]
pub fn TrackingTimeline(data: TrackingData) -> impl IntoView {
    let current = data.current_step();
    let steps = data
        .timeline
        .into_iter()
        .enumerate()
        .map(|(index, step)| {
            let class = if step.completed {
                "timeline-step completed"
            } else if index == current {
                "timeline-step current"
            } else {
                "timeline-step"
            };
            view! {
                <li class=class>
                    <span class="timeline-dot">{if step.completed { "✓" } else { "" }}</span>
                    <div>
                        <p class="timeline-status">{step.status}</p>
                        <p class="timeline-date">{step.date}</p>
                    </div>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class="tracking-card">
            <div class="tracking-facts">
                <p><strong>"Status: "</strong>{data.status}</p>
                <p><strong>"Current Location: "</strong>{data.location}</p>
                <p><strong>"Estimated Delivery: "</strong>{data.estimated_delivery}</p>
            </div>
            <ol class="timeline">{steps}</ol>
        </div>
    }
}
