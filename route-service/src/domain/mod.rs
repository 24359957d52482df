//! Domain Layer
//!
//! Places, routes and the map view derived from them.
//! This layer has NO HTTP dependencies (only serde and thiserror).

mod error;
mod place;
mod route;
mod map_view;

pub use error::{DomainError, DomainResult};
pub use place::{Coordinates, Place};
pub use route::{RouteDetails, RoutePlan, RouteSegment, RouteSummary};
pub use map_view::{MapView, Marker, MarkerColor};
