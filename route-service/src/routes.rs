//! HTTP Routes
//!
//! `/calculate_route` takes JSON, `/track` takes a form body; both answer
//! with typed JSON. Failures are `{"error": "..."}` with a matching status.

use axum::{
    extract::{rejection::FormRejection, rejection::JsonRejection, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domain::{DomainError, MapView, RoutePlan};
use crate::tracker::RouteTracker;

/// Request body shared by both endpoints
#[derive(Debug, Deserialize, Serialize)]
pub struct RouteQuery {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

/// Error body sent to the browser
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        let status = match &self {
            DomainError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            DomainError::InvalidLocation | DomainError::NoRoute => StatusCode::UNPROCESSABLE_ENTITY,
            DomainError::Upstream(_) => StatusCode::BAD_GATEWAY,
        };
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

/// Build the router with CORS open to any origin
pub fn router(tracker: RouteTracker) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health))
        .route("/calculate_route", post(calculate_route))
        .route("/track", post(track))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(tracker)
}

// ── Health ──────────────────────────────────────────────────────────

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

// ── Route endpoints ─────────────────────────────────────────────────

async fn calculate_route(
    State(tracker): State<RouteTracker>,
    body: Result<Json<RouteQuery>, JsonRejection>,
) -> Result<Json<RoutePlan>, DomainError> {
    let Json(query) = body.map_err(|rejection| DomainError::InvalidInput(rejection.body_text()))?;
    tracker.plan(&query.start, &query.end).await.map(Json)
}

async fn track(
    State(tracker): State<RouteTracker>,
    body: Result<Form<RouteQuery>, FormRejection>,
) -> Result<Json<MapView>, DomainError> {
    let Form(query) = body.map_err(|rejection| DomainError::InvalidInput(rejection.body_text()))?;
    tracker.map_view(&query.start, &query.end).await.map(Json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::tracker::tests::StubProvider;

    fn app(provider: StubProvider) -> Router {
        router(RouteTracker::new(Arc::new(provider)))
    }

    async fn body_json(resp: Response) -> Value {
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn json_post(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn form_post(uri: &str, body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let resp = app(StubProvider::default()).oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await["status"], "ok");
    }

    #[tokio::test]
    async fn calculate_route_returns_plan() {
        let req = json_post("/calculate_route", json!({ "start": "Chicago", "end": "Denver" }));
        let resp = app(StubProvider::chicago_to_denver()).oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        assert_eq!(body["start"]["address"], "Chicago, IL");
        assert_eq!(body["end"]["address"], "Denver, CO");
        assert_eq!(body["route"]["segments"].as_array().unwrap().len(), 2);
        assert!((body["route"]["summary"]["distance_km"].as_f64().unwrap() - 1610.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn calculate_route_unknown_place_is_422() {
        let req = json_post("/calculate_route", json!({ "start": "Chicago", "end": "Atlantis" }));
        let resp = app(StubProvider::chicago_to_denver()).oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_json(resp).await["error"], "Invalid location input");
    }

    #[tokio::test]
    async fn calculate_route_missing_fields_is_400() {
        let req = json_post("/calculate_route", json!({ "start": "Chicago" }));
        let resp = app(StubProvider::chicago_to_denver()).oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp).await["error"], "start and end are required");
    }

    #[tokio::test]
    async fn calculate_route_malformed_json_is_400_with_error_body() {
        let req = Request::builder()
            .method("POST")
            .uri("/calculate_route")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let resp = app(StubProvider::chicago_to_denver()).oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(resp).await["error"].is_string());
    }

    #[tokio::test]
    async fn calculate_route_upstream_failure_is_502() {
        let provider = StubProvider {
            fail: true,
            ..StubProvider::chicago_to_denver()
        };
        let req = json_post("/calculate_route", json!({ "start": "Chicago", "end": "Denver" }));
        let resp = app(provider).oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let error = body_json(resp).await["error"].as_str().unwrap().to_string();
        assert_eq!(error, "routing provider unavailable: /search/2/geocode returned 503");
    }

    #[tokio::test]
    async fn track_upstream_failure_hides_provider_body() {
        let provider = StubProvider {
            fail: true,
            ..StubProvider::chicago_to_denver()
        };
        let resp = app(provider)
            .oneshot(form_post("/track", "start=Chicago&end=Denver"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let error = body_json(resp).await["error"].as_str().unwrap().to_string();
        assert!(!error.contains("down"));
        assert!(error.ends_with("returned 503"));
    }

    #[tokio::test]
    async fn track_returns_map_view() {
        let req = form_post("/track", "start=Chicago&end=Denver");
        let resp = app(StubProvider::chicago_to_denver()).oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = body_json(resp).await;
        assert_eq!(body["title"], "Route from Chicago, IL to Denver, CO");
        assert_eq!(body["zoom"], 10);
        assert_eq!(body["markers"][0]["color"], "green");
        assert_eq!(body["markers"][1]["color"], "red");
        assert_eq!(body["path"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn track_no_route_is_422() {
        let provider = StubProvider {
            route: None,
            ..StubProvider::chicago_to_denver()
        };
        let resp = app(provider)
            .oneshot(form_post("/track", "start=Chicago&end=Denver"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body_json(resp).await["error"], "Could not calculate route");
    }

    #[tokio::test]
    async fn preflight_allows_any_origin() {
        let req = Request::builder()
            .method("OPTIONS")
            .uri("/calculate_route")
            .header("origin", "http://localhost:3000")
            .header("access-control-request-method", "POST")
            .header("access-control-request-headers", "content-type")
            .body(Body::empty())
            .unwrap();
        let resp = app(StubProvider::default()).oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["access-control-allow-origin"], "*");
    }
}
