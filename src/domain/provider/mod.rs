//! Provider module - the static marketplace listing.
//!
//! Providers are read-only records compiled into the binary. The catalog
//! is built once on first use and never mutated afterwards.

mod catalog;
mod location;
mod provider;

pub use catalog::{build_catalog, catalog, PricingSeed, ProviderSeed, PROVIDER_SEEDS};
pub use location::{normalize, Location};
pub use provider::{ServiceProvider, ServiceRate, DEFAULT_HOURLY_RATE};
