//! Route Tracker
//!
//! Resolves both place names, computes the route between them and
//! derives the map view.

use std::sync::Arc;

use crate::domain::{DomainError, DomainResult, MapView, RoutePlan};
use crate::provider::RoutingProvider;

/// Orchestrates provider calls for one route request
#[derive(Clone)]
pub struct RouteTracker {
    provider: Arc<dyn RoutingProvider>,
}

impl RouteTracker {
    pub fn new(provider: Arc<dyn RoutingProvider>) -> Self {
        Self { provider }
    }

    /// Geocode `start` and `end` concurrently, then route between them
    pub async fn plan(&self, start: &str, end: &str) -> DomainResult<RoutePlan> {
        let (start, end) = (start.trim(), end.trim());
        if start.is_empty() || end.is_empty() {
            return Err(DomainError::InvalidInput("start and end are required".to_string()));
        }

        let (start_place, end_place) =
            tokio::try_join!(self.provider.geocode(start), self.provider.geocode(end))?;

        let (Some(start_place), Some(end_place)) = (start_place, end_place) else {
            tracing::info!(start, end, "location did not geocode");
            return Err(DomainError::InvalidLocation);
        };

        let route = self
            .provider
            .route(start_place.coordinates(), end_place.coordinates())
            .await?
            .ok_or(DomainError::NoRoute)?;

        tracing::info!(
            start = %start_place.address,
            end = %end_place.address,
            distance_km = route.summary.distance_km,
            segments = route.segments.len(),
            "route computed"
        );

        Ok(RoutePlan {
            start: start_place,
            end: end_place,
            route,
        })
    }

    /// Same lookup as [`plan`](Self::plan), shaped for drawing
    pub async fn map_view(&self, start: &str, end: &str) -> DomainResult<MapView> {
        let plan = self.plan(start, end).await?;
        Ok(MapView::from_plan(&plan))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use crate::domain::{Coordinates, Place, RouteDetails, RouteSummary};
    use crate::provider::{ProviderError, ProviderResult};

    /// Fixture provider: known places, optional route, optional failure
    #[derive(Default)]
    pub struct StubProvider {
        pub places: HashMap<String, Place>,
        pub route: Option<RouteDetails>,
        pub fail: bool,
        pub calls: AtomicUsize,
    }

    impl StubProvider {
        pub fn chicago_to_denver() -> Self {
            let mut places = HashMap::new();
            places.insert("Chicago".to_string(), Place::new(41.88, -87.63, "Chicago, IL"));
            places.insert("Denver".to_string(), Place::new(39.74, -104.99, "Denver, CO"));
            Self {
                places,
                route: Some(RouteDetails::from_legs(
                    &[vec![
                        Coordinates::new(41.88, -87.63),
                        Coordinates::new(40.8, -96.7),
                        Coordinates::new(39.74, -104.99),
                    ]],
                    RouteSummary::from_provider_units(1_610_000.0, 54_000.0, 600.0),
                )),
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl RoutingProvider for StubProvider {
        async fn geocode(&self, query: &str) -> ProviderResult<Option<Place>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(ProviderError::Status {
                    endpoint: "/search/2/geocode".to_string(),
                    status: 503,
                    body: "down".to_string(),
                });
            }
            Ok(self.places.get(query).cloned())
        }

        async fn route(&self, _from: Coordinates, _to: Coordinates) -> ProviderResult<Option<RouteDetails>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.route.clone())
        }
    }

    #[tokio::test]
    async fn test_plan_success() {
        let tracker = RouteTracker::new(Arc::new(StubProvider::chicago_to_denver()));
        let plan = tracker.plan(" Chicago ", "Denver").await.unwrap();
        assert_eq!(plan.start.address, "Chicago, IL");
        assert_eq!(plan.end.address, "Denver, CO");
        assert_eq!(plan.route.segments.len(), 2);
    }

    #[tokio::test]
    async fn test_blank_input_skips_provider() {
        let provider = Arc::new(StubProvider::chicago_to_denver());
        let tracker = RouteTracker::new(provider.clone());
        let err = tracker.plan("Chicago", "   ").await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unknown_place_is_invalid_location() {
        let tracker = RouteTracker::new(Arc::new(StubProvider::chicago_to_denver()));
        let err = tracker.plan("Chicago", "Atlantis").await.unwrap_err();
        assert_eq!(err, DomainError::InvalidLocation);
        assert_eq!(err.to_string(), "Invalid location input");
    }

    #[tokio::test]
    async fn test_missing_route_is_no_route() {
        let provider = StubProvider {
            route: None,
            ..StubProvider::chicago_to_denver()
        };
        let tracker = RouteTracker::new(Arc::new(provider));
        let err = tracker.plan("Chicago", "Denver").await.unwrap_err();
        assert_eq!(err, DomainError::NoRoute);
        assert_eq!(err.to_string(), "Could not calculate route");
    }

    #[tokio::test]
    async fn test_provider_failure_is_upstream() {
        let provider = StubProvider {
            fail: true,
            ..StubProvider::chicago_to_denver()
        };
        let tracker = RouteTracker::new(Arc::new(provider));
        let err = tracker.plan("Chicago", "Denver").await.unwrap_err();
        assert!(matches!(err, DomainError::Upstream(_)));
    }

    #[tokio::test]
    async fn test_map_view_uses_plan() {
        let tracker = RouteTracker::new(Arc::new(StubProvider::chicago_to_denver()));
        let view = tracker.map_view("Chicago", "Denver").await.unwrap();
        assert_eq!(view.markers.len(), 2);
        assert_eq!(view.path.len(), 3);
        assert_eq!(view.title, "Route from Chicago, IL to Denver, CO");
    }
}
