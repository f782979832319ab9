//! Search module - location and free-text matching over the provider list.
//!
//! Everything here is a pure function of its inputs.

mod criteria;
mod matcher;
mod ordering;

pub use criteria::{SearchCriteria, ALL_CITIES};
pub use matcher::{list_cities, match_providers, MatchOutcome};
pub use ordering::{listing_order, sort_for_listing};
