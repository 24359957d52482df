//! Route Map
//!
//! Draws a `MapView` as inline SVG: the route polyline plus start/end
//! markers. Only numbers and escaped text reach the DOM.

use leptos::prelude::*;

use crate::geometry::Projection;
use crate::models::{MapView, MarkerColor};

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 400.0;
const PADDING: f64 = 32.0;

#[component]
pub fn RouteMap(map: MapView) -> impl IntoView {
    let mut extent = map.path.clone();
    extent.extend(map.markers.iter().map(|m| m.position));
    let projection = Projection::fit(&extent, WIDTH, HEIGHT, PADDING);

    let markers = map
        .markers
        .iter()
        .map(|marker| {
            let p = projection.project(marker.position);
            let fill = match marker.color {
                MarkerColor::Green => "#16a34a",
                MarkerColor::Red => "#dc2626",
            };
            view! {
                <g class="map-marker">
                    <circle cx={p.x} cy={p.y} r="8" fill=fill stroke="white" stroke-width="2">
                        <title>{marker.label.clone()}</title>
                    </circle>
                    <text x={p.x + 12.0} y={p.y + 4.0} class="map-marker-label">{marker.label.clone()}</text>
                </g>
            }
        })
        .collect_view();

    let summary = map.summary;

    view! {
        <figure class="route-map">
            <figcaption>{map.title.clone()}</figcaption>
            <svg viewBox={projection.view_box()} class="route-map-svg" role="img">
                <rect x="0" y="0" width=WIDTH height=HEIGHT class="map-background" />
                <polyline
                    points={projection.polyline(&map.path)}
                    fill="none"
                    stroke="#2563eb"
                    stroke-width="4"
                    stroke-linejoin="round"
                    stroke-linecap="round"
                />
                {markers}
            </svg>
            <dl class="route-summary">
                <div><dt>"Distance"</dt><dd>{format!("{:.1} km", summary.distance_km)}</dd></div>
                <div><dt>"Travel time"</dt><dd>{format!("{:.0} min", summary.time_min)}</dd></div>
                <div><dt>"Traffic delay"</dt><dd>{format!("{:.0} min", summary.traffic_delay_min)}</dd></div>
            </dl>
        </figure>
    }
}
