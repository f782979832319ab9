//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ProviderReader` - read access to the provider listing
//! - `LocationDetector` - optional detection of the visitor's city

mod location_detector;
mod provider_reader;

pub use location_detector::{City, LocationDetector};
pub use provider_reader::ProviderReader;
