//! Route Service Commands
//!
//! Frontend bindings to the route service HTTP API.

use std::cell::Cell;
use std::fmt;
use std::future::Future;
use std::rc::Rc;

use futures::future::{select, Either};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{MapView, RoutePlan};

/// Upper bound for a single request, in milliseconds
pub const REQUEST_TIMEOUT_MS: u32 = 15_000;

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

pub fn base_url() -> &'static str {
    option_env!("PACKPAL_ROUTE_SERVICE_URL").unwrap_or(DEFAULT_BASE_URL)
}

// ========================
// Errors
// ========================

#[derive(Debug, Clone, PartialEq)]
pub enum RouteError {
    InvalidInput(String),
    Network(String),
    Timeout,
    Service(String),
    Decode(String),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::InvalidInput(msg) => write!(f, "{msg}"),
            RouteError::Network(msg) => write!(f, "Network error: {msg}"),
            RouteError::Timeout => write!(f, "The route service did not respond in time"),
            RouteError::Service(msg) => write!(f, "{msg}"),
            RouteError::Decode(msg) => write!(f, "Unexpected response: {msg}"),
        }
    }
}

impl std::error::Error for RouteError {}

// ========================
// Argument Structs
// ========================

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteArgs {
    pub start: String,
    pub end: String,
}

impl RouteArgs {
    /// Trim both ends; either one blank is an input error
    pub fn new(start: &str, end: &str) -> Result<Self, RouteError> {
        let (start, end) = (start.trim(), end.trim());
        if start.is_empty() || end.is_empty() {
            return Err(RouteError::InvalidInput(
                "Please enter both a start and an end location".to_string(),
            ));
        }
        Ok(Self {
            start: start.to_string(),
            end: end.to_string(),
        })
    }
}

// ========================
// Stale Response Guard
// ========================

/// Hands out increasing tickets; only the newest one is current
#[derive(Debug, Clone, Default)]
pub struct LatestRequest {
    latest: Rc<Cell<u64>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl LatestRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> Ticket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        Ticket(next)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.get() == ticket.0
    }
}

// ========================
// Response Handling
// ========================

/// Turn a status code and body into a typed result.
/// An `error` field wins even on 2xx.
pub fn interpret_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, RouteError> {
    let value: serde_json::Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(e) if (200..300).contains(&status) => return Err(RouteError::Decode(e.to_string())),
        Err(_) => return Err(RouteError::Service("Failed to fetch route".to_string())),
    };

    if let Some(error) = value.get("error").and_then(|e| e.as_str()) {
        return Err(RouteError::Service(error.to_string()));
    }
    if !(200..300).contains(&status) {
        return Err(RouteError::Service("Failed to fetch route".to_string()));
    }
    serde_json::from_value(value).map_err(|e| RouteError::Decode(e.to_string()))
}

/// Whichever finishes first: `request`, or `timer` as `RouteError::Timeout`
async fn race_timeout<T>(
    request: impl Future<Output = Result<T, RouteError>>,
    timer: impl Future<Output = ()>,
) -> Result<T, RouteError> {
    match select(Box::pin(request), Box::pin(timer)).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(RouteError::Timeout),
    }
}

async fn with_timeout<T>(request: impl Future<Output = Result<T, RouteError>>) -> Result<T, RouteError> {
    race_timeout(request, TimeoutFuture::new(REQUEST_TIMEOUT_MS)).await
}

async fn read_body(response: reqwest::Response) -> Result<(u16, String), RouteError> {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| RouteError::Network(e.to_string()))?;
    Ok((status, body))
}

// ========================
// Commands
// ========================

pub async fn calculate_route(args: &RouteArgs) -> Result<RoutePlan, RouteError> {
    let url = format!("{}/calculate_route", base_url());
    with_timeout(async {
        let response = reqwest::Client::new()
            .post(&url)
            .json(args)
            .send()
            .await
            .map_err(|e| RouteError::Network(e.to_string()))?;
        let (status, body) = read_body(response).await?;
        interpret_response(status, &body)
    })
    .await
}

pub async fn fetch_map(args: &RouteArgs) -> Result<MapView, RouteError> {
    let url = format!("{}/track", base_url());
    with_timeout(async {
        let response = reqwest::Client::new()
            .post(&url)
            .form(args)
            .send()
            .await
            .map_err(|e| RouteError::Network(e.to_string()))?;
        let (status, body) = read_body(response).await?;
        interpret_response(status, &body)
    })
    .await
}

/// Route first, then map; the map call only runs when routing succeeded
async fn plan_then_map<P, M>(
    args: RouteArgs,
    plan: impl FnOnce(RouteArgs) -> P,
    map: impl FnOnce(RouteArgs) -> M,
) -> Result<(RoutePlan, MapView), RouteError>
where
    P: Future<Output = Result<RoutePlan, RouteError>>,
    M: Future<Output = Result<MapView, RouteError>>,
{
    let route = plan(args.clone()).await?;
    let view = map(args).await?;
    Ok((route, view))
}

/// Validate, compute the route, then fetch the map; stops at the first failure
pub async fn track_route(start: &str, end: &str) -> Result<(RoutePlan, MapView), RouteError> {
    let args = RouteArgs::new(start, end)?;
    web_sys::console::log_1(&format!("[TRACK] Routing {} -> {}", args.start, args.end).into());
    plan_then_map(
        args,
        |args| async move { calculate_route(&args).await },
        |args| async move { fetch_map(&args).await },
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    use futures::executor::block_on;
    use futures::future::{pending, ready};
    use leptos::prelude::{Owner, StoredValue, WithValue};

    fn sample_plan() -> RoutePlan {
        interpret_response(
            200,
            r#"{
                "start": {"lat": 41.88, "lon": -87.63, "address": "Chicago, IL"},
                "end": {"lat": 39.74, "lon": -104.99, "address": "Denver, CO"},
                "route": {"segments": [], "summary": {"distance_km": 1610.0, "time_min": 900.0, "traffic_delay_min": 12.0}}
            }"#,
        )
        .unwrap()
    }

    fn sample_args() -> RouteArgs {
        RouteArgs::new("Chicago", "Denver").unwrap()
    }

    #[test]
    fn test_args_are_trimmed() {
        let args = RouteArgs::new("  Chicago ", "Denver\n").unwrap();
        assert_eq!(args, RouteArgs { start: "Chicago".into(), end: "Denver".into() });
    }

    #[test]
    fn test_blank_input_is_rejected() {
        assert!(matches!(RouteArgs::new("   ", "Denver"), Err(RouteError::InvalidInput(_))));
        assert!(matches!(RouteArgs::new("Chicago", ""), Err(RouteError::InvalidInput(_))));
    }

    #[test]
    fn test_newer_ticket_wins() {
        let guard = LatestRequest::new();
        let first = guard.issue();
        assert!(guard.is_current(first));
        let second = guard.clone().issue();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }

    #[test]
    fn test_error_field_on_success_status() {
        let result: Result<MapView, _> = interpret_response(200, r#"{"error": "Invalid location input"}"#);
        assert_eq!(result, Err(RouteError::Service("Invalid location input".into())));
    }

    #[test]
    fn test_error_status_without_body() {
        let result: Result<RoutePlan, _> = interpret_response(500, "Internal Server Error");
        assert_eq!(result, Err(RouteError::Service("Failed to fetch route".into())));
        let result: Result<RoutePlan, _> = interpret_response(502, "{}");
        assert_eq!(result, Err(RouteError::Service("Failed to fetch route".into())));
    }

    #[test]
    fn test_bad_success_body_is_decode_error() {
        let result: Result<RoutePlan, _> = interpret_response(200, r#"{"start": 1}"#);
        assert!(matches!(result, Err(RouteError::Decode(_))));
    }

    #[test]
    fn test_plan_decodes() {
        let body = r#"{
            "start": {"lat": 41.88, "lon": -87.63, "address": "Chicago, IL"},
            "end": {"lat": 39.74, "lon": -104.99, "address": "Denver, CO"},
            "route": {"segments": [], "summary": {"distance_km": 1610.0, "time_min": 900.0, "traffic_delay_min": 12.0}}
        }"#;
        let plan: RoutePlan = interpret_response(200, body).unwrap();
        assert_eq!(plan.end.address, "Denver, CO");
    }

    #[test]
    fn test_error_display_is_single_message() {
        assert_eq!(RouteError::Service("Could not calculate route".into()).to_string(), "Could not calculate route");
        assert!(RouteError::Timeout.to_string().contains("in time"));
    }

    #[test]
    fn test_ticket_check_survives_unmount() {
        let owner = Owner::new();
        let stored = owner.with(|| StoredValue::new_local(LatestRequest::new()));
        let guard = stored.with_value(LatestRequest::clone);
        let ticket = guard.issue();

        owner.cleanup();

        assert!(guard.is_current(ticket));
        let newer = guard.issue();
        assert!(!guard.is_current(ticket));
        assert!(guard.is_current(newer));
    }

    #[test]
    fn test_stalled_request_times_out() {
        let result: Result<RoutePlan, _> = block_on(race_timeout(pending(), ready(())));
        assert_eq!(result, Err(RouteError::Timeout));
    }

    #[test]
    fn test_prompt_request_beats_timer() {
        let result = block_on(race_timeout(ready(Ok(7u8)), pending()));
        assert_eq!(result, Ok(7));
    }

    #[test]
    fn test_failed_routing_skips_map() {
        let map_called = Cell::new(false);
        let result = block_on(plan_then_map(
            sample_args(),
            |_| ready(Err(RouteError::Service("Could not calculate route".into()))),
            |_| {
                map_called.set(true);
                ready(Err(RouteError::Timeout))
            },
        ));
        assert_eq!(result, Err(RouteError::Service("Could not calculate route".into())));
        assert!(!map_called.get());
    }

    #[test]
    fn test_map_error_surfaces_after_routing() {
        let map_args = Cell::new(None);
        let result = block_on(plan_then_map(
            sample_args(),
            |_| ready(Ok(sample_plan())),
            |args| {
                map_args.set(Some(args));
                ready(Err(RouteError::Service("Invalid location input".into())))
            },
        ));
        assert_eq!(result, Err(RouteError::Service("Invalid location input".into())));
        assert_eq!(map_args.take(), Some(sample_args()));
    }
}
