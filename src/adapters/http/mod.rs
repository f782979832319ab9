//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod booking;
pub mod error;
pub mod health;
pub mod provider;
pub mod router;

// Re-export key types for convenience
pub use booking::{booking_routes, BookingHandlers};
pub use error::ErrorResponse;
pub use provider::{provider_routes, ProviderHandlers};
pub use router::{app_router, AppDependencies};
