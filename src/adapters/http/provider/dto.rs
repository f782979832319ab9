//! HTTP DTOs for provider endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::provider::{ServiceProvider, ServiceRate};
use crate::domain::search::MatchOutcome;
use crate::ports::City;

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Price override as shown on a provider card.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceRateResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_hour: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_minute: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_fee: Option<u64>,
    /// Rate actually used in quotes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_hourly: Option<u64>,
}

impl From<&ServiceRate> for ServiceRateResponse {
    fn from(rate: &ServiceRate) -> Self {
        Self {
            per_hour: rate.per_hour.map(|r| r.value()),
            per_minute: rate.per_minute.map(|r| r.value()),
            base_fee: rate.base_fee.map(|r| r.value()),
            effective_hourly: rate.hourly().map(|r| r.value()),
        }
    }
}

/// Provider details for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct ProviderResponse {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub location: String,
    pub city: String,
    pub state: String,
    pub areas: Vec<String>,
    pub services: Vec<String>,
    pub rating: f64,
    pub review_count: u32,
    pub pricing_details: BTreeMap<String, ServiceRateResponse>,
    pub verified: bool,
    pub premium: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl From<ServiceProvider> for ProviderResponse {
    fn from(provider: ServiceProvider) -> Self {
        Self {
            id: provider.id.value(),
            location: provider.location.to_string(),
            city: provider.location.city().to_string(),
            state: provider.location.state().to_string(),
            rating: provider.rating.stars(),
            pricing_details: provider
                .pricing_details
                .iter()
                .map(|(service, rate)| (service.clone(), ServiceRateResponse::from(rate)))
                .collect(),
            name: provider.name,
            description: provider.description,
            areas: provider.areas,
            services: provider.services,
            review_count: provider.review_count,
            verified: provider.verified,
            premium: provider.premium,
            phone: provider.phone,
            email: provider.email,
        }
    }
}

/// Search results for a listing page.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub providers: Vec<ProviderResponse>,
    pub total: usize,
    pub has_area_match: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_message: Option<String>,
}

impl From<MatchOutcome> for SearchResponse {
    fn from(outcome: MatchOutcome) -> Self {
        Self {
            total: outcome.providers.len(),
            providers: outcome.providers.into_iter().map(ProviderResponse::from).collect(),
            has_area_match: outcome.has_area_match,
            fallback_message: outcome.fallback_message,
        }
    }
}

/// Cities that have at least one provider.
#[derive(Debug, Clone, Serialize)]
pub struct CitiesResponse {
    pub cities: Vec<String>,
}

/// Detected visitor city; `null` when unknown.
#[derive(Debug, Clone, Serialize)]
pub struct LocationResponse {
    pub city: Option<City>,
}
