//! TomTom Provider
//!
//! Geocoding via `search/2/geocode` and routing via
//! `routing/1/calculateRoute`, traffic-aware.

use std::time::Duration;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::traits::{ProviderError, ProviderResult, RoutingProvider};
use crate::domain::{Coordinates, Place, RouteDetails, RouteSummary};

// ========================
// Wire Types
// ========================

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    position: GeocodePosition,
    #[serde(default)]
    address: Option<GeocodeAddress>,
}

#[derive(Debug, Deserialize)]
struct GeocodePosition {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeocodeAddress {
    freeform_address: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CalculateRouteResponse {
    #[serde(default)]
    routes: Vec<WireRoute>,
}

#[derive(Debug, Deserialize)]
struct WireRoute {
    summary: WireSummary,
    #[serde(default)]
    legs: Vec<WireLeg>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireSummary {
    length_in_meters: f64,
    travel_time_in_seconds: f64,
    #[serde(default)]
    traffic_delay_in_seconds: f64,
}

#[derive(Debug, Deserialize)]
struct WireLeg {
    #[serde(default)]
    points: Vec<WirePoint>,
}

#[derive(Debug, Deserialize)]
struct WirePoint {
    latitude: f64,
    longitude: f64,
}

// ========================
// Provider
// ========================

/// TomTom-backed routing provider
pub struct TomTomProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TomTomProvider {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: String,
        params: &[(&str, &str)],
    ) -> ProviderResult<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!(%endpoint, "calling routing provider");

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(|source| ProviderError::Http {
                endpoint: endpoint.clone(),
                source: source.without_url(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                endpoint,
                status: status.as_u16(),
                body,
            });
        }

        response.json::<T>().await.map_err(|source| ProviderError::Decode {
            endpoint,
            source: source.without_url(),
        })
    }
}

#[async_trait]
impl RoutingProvider for TomTomProvider {
    async fn geocode(&self, query: &str) -> ProviderResult<Option<Place>> {
        let endpoint = format!(
            "/search/2/geocode/{}.json",
            utf8_percent_encode(query, NON_ALPHANUMERIC)
        );
        let response: GeocodeResponse = self.get_json(endpoint, &[]).await?;

        Ok(response.results.into_iter().next().map(|result| {
            let address = result
                .address
                .and_then(|a| a.freeform_address)
                .unwrap_or_else(|| query.to_string());
            Place::new(result.position.lat, result.position.lon, address)
        }))
    }

    async fn route(&self, from: Coordinates, to: Coordinates) -> ProviderResult<Option<RouteDetails>> {
        let endpoint = format!(
            "/routing/1/calculateRoute/{},{}:{},{}/json",
            from.lat, from.lon, to.lat, to.lon
        );
        let response: CalculateRouteResponse = self
            .get_json(endpoint, &[("traffic", "true"), ("computeTravelTimeFor", "all")])
            .await?;

        Ok(response.routes.into_iter().next().map(|route| {
            let legs: Vec<Vec<Coordinates>> = route
                .legs
                .iter()
                .map(|leg| {
                    leg.points
                        .iter()
                        .map(|p| Coordinates::new(p.latitude, p.longitude))
                        .collect()
                })
                .collect();
            let summary = RouteSummary::from_provider_units(
                route.summary.length_in_meters,
                route.summary.travel_time_in_seconds,
                route.summary.traffic_delay_in_seconds,
            );
            RouteDetails::from_legs(&legs, summary)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, path_regex, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider(server: &MockServer) -> TomTomProvider {
        TomTomProvider::new(server.uri(), "test-key", Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_geocode_uses_first_result() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/2/geocode/Chicago.json"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [
                    { "position": { "lat": 41.88, "lon": -87.63 }, "address": { "freeformAddress": "Chicago, IL" } },
                    { "position": { "lat": 0.0, "lon": 0.0 } }
                ]
            })))
            .mount(&server)
            .await;

        let place = provider(&server).geocode("Chicago").await.unwrap().unwrap();
        assert_eq!(place, Place::new(41.88, -87.63, "Chicago, IL"));
    }

    #[tokio::test]
    async fn test_geocode_address_falls_back_to_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/search/2/geocode/Denver.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [ { "position": { "lat": 39.74, "lon": -104.99 } } ]
            })))
            .mount(&server)
            .await;

        let place = provider(&server).geocode("Denver").await.unwrap().unwrap();
        assert_eq!(place.address, "Denver");
    }

    #[tokio::test]
    async fn test_geocode_no_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path_regex(r"^/search/2/geocode/.+\.json$"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
            .mount(&server)
            .await;

        assert!(provider(&server).geocode("Nowhere").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_route_parses_summary_and_segments() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path_regex(r"^/routing/1/calculateRoute/.+/json$"))
            .and(query_param("traffic", "true"))
            .and(query_param("computeTravelTimeFor", "all"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "routes": [{
                    "summary": {
                        "lengthInMeters": 1500.0,
                        "travelTimeInSeconds": 600.0,
                        "trafficDelayInSeconds": 120.0
                    },
                    "legs": [{
                        "points": [
                            { "latitude": 1.0, "longitude": 1.0 },
                            { "latitude": 1.5, "longitude": 1.5 },
                            { "latitude": 2.0, "longitude": 2.0 }
                        ]
                    }]
                }]
            })))
            .mount(&server)
            .await;

        let route = provider(&server)
            .route(Coordinates::new(1.0, 1.0), Coordinates::new(2.0, 2.0))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(route.segments.len(), 2);
        assert!((route.summary.distance_km - 1.5).abs() < 1e-9);
        assert!((route.summary.time_min - 10.0).abs() < 1e-9);
        assert!((route.summary.traffic_delay_min - 2.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_route_missing_delay_defaults_to_zero() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path_regex(r"^/routing/1/calculateRoute/.+/json$"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "routes": [{
                    "summary": { "lengthInMeters": 1000.0, "travelTimeInSeconds": 60.0 },
                    "legs": []
                }]
            })))
            .mount(&server)
            .await;

        let route = provider(&server)
            .route(Coordinates::new(1.0, 1.0), Coordinates::new(2.0, 2.0))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(route.summary.traffic_delay_min, 0.0);
        assert!(route.segments.is_empty());
    }

    #[tokio::test]
    async fn test_route_none_when_no_routes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path_regex(r"^/routing/1/calculateRoute/.+/json$"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "routes": [] })))
            .mount(&server)
            .await;

        let route = provider(&server)
            .route(Coordinates::new(1.0, 1.0), Coordinates::new(2.0, 2.0))
            .await
            .unwrap();
        assert!(route.is_none());
    }

    #[tokio::test]
    async fn test_error_status_is_reported_without_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403).set_body_string("Developer Inactive"))
            .mount(&server)
            .await;

        let err = provider(&server).geocode("Chicago").await.unwrap_err();
        match &err {
            ProviderError::Status { status, body, .. } => {
                assert_eq!(*status, 403);
                assert_eq!(body, "Developer Inactive");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!err.to_string().contains("test-key"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let err = provider(&server).geocode("Chicago").await.unwrap_err();
        assert!(matches!(err, ProviderError::Decode { .. }));
    }
}
