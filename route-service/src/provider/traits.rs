//! Provider Layer - Core Traits
//!
//! Defines the abstract interface for place lookup and routing.
//! Implementations can call TomTom, a fixture table, etc.

use async_trait::async_trait;
use crate::domain::{Coordinates, DomainError, Place, RouteDetails};

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Errors from upstream provider calls.
///
/// Endpoints are recorded without query strings so API keys never reach
/// the logs.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// HTTP transport error
    #[error("HTTP error calling {endpoint}: {source}")]
    Http {
        endpoint: String,
        source: reqwest::Error,
    },
    /// Provider returned a non-2xx status
    #[error("{endpoint} returned {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },
    /// Response body did not match the expected shape
    #[error("failed to deserialize response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        source: reqwest::Error,
    },
}

impl ProviderError {
    /// Endpoint and outcome only; upstream bodies and transport detail stay
    /// in the server log.
    pub fn summary(&self) -> String {
        match self {
            ProviderError::Http { endpoint, .. } => format!("{endpoint} could not be reached"),
            ProviderError::Status { endpoint, status, .. } => format!("{endpoint} returned {status}"),
            ProviderError::Decode { endpoint, .. } => format!("{endpoint} sent an unreadable response"),
        }
    }
}

impl From<ProviderError> for DomainError {
    fn from(err: ProviderError) -> Self {
        tracing::warn!(error = %err, "routing provider failed");
        DomainError::Upstream(err.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_body_stays_out_of_domain_error() {
        let err = ProviderError::Status {
            endpoint: "/routing/1/calculateRoute".to_string(),
            status: 403,
            body: "Developer Inactive".to_string(),
        };
        assert!(err.to_string().contains("Developer Inactive"));

        let domain = DomainError::from(err);
        assert_eq!(domain, DomainError::Upstream("/routing/1/calculateRoute returned 403".to_string()));
        assert!(!domain.to_string().contains("Developer Inactive"));
    }
}

/// Place lookup and route computation
///
/// `Ok(None)` means the provider answered but found nothing; errors are
/// reserved for transport and protocol failures.
#[async_trait]
pub trait RoutingProvider: Send + Sync {
    /// Resolve a free-text place name to its best match
    async fn geocode(&self, query: &str) -> ProviderResult<Option<Place>>;

    /// Compute a route between two positions
    async fn route(&self, from: Coordinates, to: Coordinates) -> ProviderResult<Option<RouteDetails>>;
}
