//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, ratings, money, errors)
//! - `provider` - The static provider listing
//! - `search` - Location and free-text matching with listing order
//! - `booking` - Four-step booking form, pricing and handoff links

pub mod booking;
pub mod foundation;
pub mod provider;
pub mod search;
