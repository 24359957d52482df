//! PackPal Route Service
//!
//! Layered architecture:
//! - domain: places, routes, map view and errors
//! - provider: geocoding/routing abstraction and the TomTom client
//! - tracker: one route request end to end
//! - routes: axum handlers

pub mod config;
pub mod domain;
pub mod provider;
pub mod routes;
pub mod tracker;

pub use config::Config;
pub use tracker::RouteTracker;
