//! Listing order: premium, then verified, then rating.

use std::cmp::Ordering;

use crate::domain::provider::ServiceProvider;

/// Compares two providers for listing.
///
/// Premium before non-premium, verified before unverified, then higher
/// rating first. Anything else compares equal.
pub fn listing_order(a: &ServiceProvider, b: &ServiceProvider) -> Ordering {
    b.premium
        .cmp(&a.premium)
        .then_with(|| b.verified.cmp(&a.verified))
        .then_with(|| b.rating.cmp(&a.rating))
}

/// Sorts in listing order. Stable: equal providers keep their input order.
pub fn sort_for_listing(providers: &mut [ServiceProvider]) {
    providers.sort_by(listing_order);
}
