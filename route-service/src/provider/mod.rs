//! Provider Layer
//!
//! Abstract access to geocoding and routing, plus the TomTom
//! implementation used in production.

mod traits;
mod tomtom;

pub use traits::{ProviderError, ProviderResult, RoutingProvider};
pub use tomtom::TomTomProvider;
