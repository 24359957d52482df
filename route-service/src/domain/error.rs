//! Domain Layer - Errors
//!
//! Every failure the service can report to a caller.

use serde::{Deserialize, Serialize};

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum DomainError {
    /// Request was missing a required field or could not be parsed
    #[error("{0}")]
    InvalidInput(String),
    /// One of the place names did not geocode
    #[error("Invalid location input")]
    InvalidLocation,
    /// Both places geocoded but no route connects them
    #[error("Could not calculate route")]
    NoRoute,
    /// The routing provider failed or answered with garbage
    #[error("routing provider unavailable: {0}")]
    Upstream(String),
}
