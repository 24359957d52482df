//! Backend Command Wrappers
//!
//! Frontend bindings to the route service, organized by domain.

mod route;

pub use route::*;
