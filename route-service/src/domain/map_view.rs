//! Map View
//!
//! Renderable map description sent to the browser instead of markup.
//! The client draws it; nothing in here is ever executed.

use serde::{Deserialize, Serialize};
use super::place::Coordinates;
use super::route::{RoutePlan, RouteSummary};

/// Initial zoom level for a fresh route map
pub const DEFAULT_ZOOM: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerColor {
    Green,
    Red,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub position: Coordinates,
    pub label: String,
    pub color: MarkerColor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub title: String,
    pub center: Coordinates,
    pub zoom: u8,
    pub markers: Vec<Marker>,
    pub path: Vec<Coordinates>,
    pub summary: RouteSummary,
}

impl MapView {
    /// Start marker in green, end marker in red, centered on the start
    pub fn from_plan(plan: &RoutePlan) -> Self {
        Self {
            title: format!("Route from {} to {}", plan.start.address, plan.end.address),
            center: plan.start.coordinates(),
            zoom: DEFAULT_ZOOM,
            markers: vec![
                Marker {
                    position: plan.start.coordinates(),
                    label: format!("Start: {}", plan.start.address),
                    color: MarkerColor::Green,
                },
                Marker {
                    position: plan.end.coordinates(),
                    label: format!("End: {}", plan.end.address),
                    color: MarkerColor::Red,
                },
            ],
            path: plan.route.path(),
            summary: plan.route.summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Place, RouteDetails};

    #[test]
    fn test_map_view_from_plan() {
        let plan = RoutePlan {
            start: Place::new(41.88, -87.63, "Chicago, IL"),
            end: Place::new(39.74, -104.99, "Denver, CO"),
            route: RouteDetails::from_legs(
                &[vec![Coordinates::new(41.88, -87.63), Coordinates::new(39.74, -104.99)]],
                RouteSummary::from_provider_units(1_600_000.0, 54_000.0, 0.0),
            ),
        };

        let view = MapView::from_plan(&plan);
        assert_eq!(view.title, "Route from Chicago, IL to Denver, CO");
        assert_eq!(view.center, Coordinates::new(41.88, -87.63));
        assert_eq!(view.zoom, DEFAULT_ZOOM);
        assert_eq!(view.markers[0].color, MarkerColor::Green);
        assert_eq!(view.markers[0].label, "Start: Chicago, IL");
        assert_eq!(view.markers[1].color, MarkerColor::Red);
        assert_eq!(view.path.len(), 2);
    }
}
