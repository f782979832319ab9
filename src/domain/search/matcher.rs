//! Location and free-text provider matching.

use serde::Serialize;

use super::criteria::SearchCriteria;
use super::ordering::sort_for_listing;
use crate::domain::provider::{normalize, ServiceProvider};

/// Result of a provider search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchOutcome {
    pub providers: Vec<ServiceProvider>,
    /// True only when an area filter matched at least one provider.
    pub has_area_match: bool,
    /// Set when the area had no listings and the wider city set is shown.
    pub fallback_message: Option<String>,
}

/// Filters and orders providers for a listing page.
///
/// City and state narrow the set first. An area then narrows it further,
/// falling back to the whole city-level set (with a message) when the
/// area has no listings. The result is sorted in listing order before the
/// free-text query and service type filters are applied, so neither of
/// those can change the order.
pub fn match_providers(providers: &[ServiceProvider], criteria: &SearchCriteria) -> MatchOutcome {
    let city = criteria.city_filter();
    let state = criteria.state_filter();

    let city_level: Vec<ServiceProvider> = providers
        .iter()
        .filter(|provider| match (&city, &state) {
            (Some(city), Some(state)) => {
                provider.location.matches_city(city) && provider.location.matches_state(state)
            }
            (Some(city), None) => provider.location.matches_city(city),
            (None, Some(state)) => provider.location.matches_state(state),
            (None, None) => true,
        })
        .cloned()
        .collect();

    let (mut matched, has_area_match, fallback_message) = match criteria.area_filter() {
        Some(area) => {
            let area_hits: Vec<ServiceProvider> = city_level
                .iter()
                .filter(|provider| serves_area(provider, &area))
                .cloned()
                .collect();

            if !area_hits.is_empty() {
                (area_hits, true, None)
            } else if !city_level.is_empty() {
                let message = fallback_message(criteria);
                (city_level, false, Some(message))
            } else {
                (Vec::new(), false, None)
            }
        }
        None => (city_level, false, None),
    };

    sort_for_listing(&mut matched);

    if let Some(query) = criteria.query_filter() {
        matched.retain(|provider| provider.search_haystack().contains(&query));
    }
    if let Some(service_type) = criteria.service_type_filter() {
        matched.retain(|provider| provider.offers(&service_type));
    }

    MatchOutcome {
        providers: matched,
        has_area_match,
        fallback_message,
    }
}

/// Distinct provider cities, in listing order of first appearance.
pub fn list_cities(providers: &[ServiceProvider]) -> Vec<String> {
    let mut cities: Vec<String> = Vec::new();
    for provider in providers {
        let city = provider.location.city();
        if !cities.iter().any(|known| known.eq_ignore_ascii_case(city)) {
            cities.push(city.to_string());
        }
    }
    cities
}

/// True when any of the provider's areas equals, contains, is contained
/// by, or shares a word longer than two letters with `area`.
///
/// `area` must already be normalized.
fn serves_area(provider: &ServiceProvider, area: &str) -> bool {
    let wanted: Vec<&str> = significant_words(area).collect();

    provider.areas.iter().any(|entry| {
        let entry = normalize(entry);
        if entry.is_empty() {
            return false;
        }
        if entry == area || entry.contains(area) || area.contains(entry.as_str()) {
            return true;
        }
        let shared = significant_words(&entry).any(|word| wanted.contains(&word));
        shared
    })
}

fn significant_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| word.chars().count() > 2)
}

/// Names the widest location the fallback set was narrowed to: the city
/// when one was given, else the state.
fn fallback_message(criteria: &SearchCriteria) -> String {
    let area = criteria.area.as_deref().unwrap_or_default().trim();
    let scope = criteria
        .city_filter()
        .and(criteria.city.as_deref())
        .or_else(|| criteria.state_filter().and(criteria.state.as_deref()));
    match scope {
        Some(scope) => format!(
            "No providers listed in {} yet. Showing all providers in {}.",
            area,
            scope.trim()
        ),
        None => format!(
            "No providers listed in {} yet. Showing all available providers.",
            area
        ),
    }
}
