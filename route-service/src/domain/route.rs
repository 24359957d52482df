//! Route Entity
//!
//! A computed route between two places: straight segments between
//! consecutive route points plus a travel summary.

use serde::{Deserialize, Serialize};
use super::place::{Coordinates, Place};

/// One straight piece of the route
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteSegment {
    pub start: Coordinates,
    pub end: Coordinates,
}

/// Travel summary in display units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub distance_km: f64,
    pub time_min: f64,
    pub traffic_delay_min: f64,
}

impl RouteSummary {
    /// Convert provider units (meters, seconds) to kilometers and minutes
    pub fn from_provider_units(length_m: f64, travel_s: f64, delay_s: f64) -> Self {
        Self {
            distance_km: length_m / 1000.0,
            time_min: travel_s / 60.0,
            traffic_delay_min: delay_s / 60.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDetails {
    pub segments: Vec<RouteSegment>,
    pub summary: RouteSummary,
}

impl RouteDetails {
    /// Build segments from the point lists of each leg.
    ///
    /// Segments never bridge two legs; a leg with fewer than two points
    /// contributes nothing.
    pub fn from_legs(legs: &[Vec<Coordinates>], summary: RouteSummary) -> Self {
        let segments = legs
            .iter()
            .flat_map(|points| {
                points.windows(2).map(|pair| RouteSegment {
                    start: pair[0],
                    end: pair[1],
                })
            })
            .collect();
        Self { segments, summary }
    }

    /// Ordered polyline through every segment endpoint, without repeating
    /// shared joints.
    pub fn path(&self) -> Vec<Coordinates> {
        let mut path: Vec<Coordinates> = Vec::with_capacity(self.segments.len() + 1);
        for segment in &self.segments {
            if path.last() != Some(&segment.start) {
                path.push(segment.start);
            }
            path.push(segment.end);
        }
        path
    }
}

/// Full answer to a route request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePlan {
    pub start: Place,
    pub end: Place,
    pub route: RouteDetails,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(lat: f64, lon: f64) -> Coordinates {
        Coordinates::new(lat, lon)
    }

    #[test]
    fn test_segments_from_legs() {
        let legs = vec![
            vec![c(0.0, 0.0), c(0.0, 1.0), c(1.0, 1.0)],
            vec![c(2.0, 2.0), c(3.0, 3.0)],
            vec![c(9.0, 9.0)],
        ];
        let details = RouteDetails::from_legs(&legs, RouteSummary::from_provider_units(0.0, 0.0, 0.0));

        assert_eq!(details.segments.len(), 3);
        assert_eq!(details.segments[0], RouteSegment { start: c(0.0, 0.0), end: c(0.0, 1.0) });
        assert_eq!(details.segments[1], RouteSegment { start: c(0.0, 1.0), end: c(1.0, 1.0) });
        // Second leg starts fresh
        assert_eq!(details.segments[2], RouteSegment { start: c(2.0, 2.0), end: c(3.0, 3.0) });
    }

    #[test]
    fn test_summary_units() {
        let summary = RouteSummary::from_provider_units(12_345.0, 1_800.0, 90.0);
        assert!((summary.distance_km - 12.345).abs() < 1e-9);
        assert!((summary.time_min - 30.0).abs() < 1e-9);
        assert!((summary.traffic_delay_min - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_path_skips_shared_joints() {
        let legs = vec![
            vec![c(0.0, 0.0), c(0.0, 1.0), c(1.0, 1.0)],
            vec![c(1.0, 1.0), c(2.0, 2.0)],
        ];
        let details = RouteDetails::from_legs(&legs, RouteSummary::from_provider_units(0.0, 0.0, 0.0));
        assert_eq!(details.path(), vec![c(0.0, 0.0), c(0.0, 1.0), c(1.0, 1.0), c(2.0, 2.0)]);
    }
}
