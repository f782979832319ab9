//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to the outside world:
//! - `catalog` - Provider reader over the built-in listing
//! - `location` - Location detectors
//! - `http` - REST API (axum)

pub mod catalog;
pub mod http;
pub mod location;

pub use catalog::StaticProviderReader;
pub use http::{app_router, AppDependencies};
pub use location::{FixedLocationDetector, NoLocationDetector};
