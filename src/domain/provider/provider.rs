//! Service provider records.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::location::{normalize, Location};
use crate::domain::foundation::{ProviderId, Rating, Rupees};

/// Flat hourly rate used when a provider sets no override.
pub const DEFAULT_HOURLY_RATE: Rupees = Rupees::new(200);

/// Per-service price override set by a provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRate {
    pub per_hour: Option<Rupees>,
    pub per_minute: Option<Rupees>,
    pub base_fee: Option<Rupees>,
}

impl ServiceRate {
    /// Effective hourly rate: `per_hour` wins, then `per_minute × 60`.
    pub fn hourly(&self) -> Option<Rupees> {
        self.per_hour
            .or_else(|| self.per_minute.map(|rate| rate.times(60)))
    }
}

/// A listed valet or security business.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceProvider {
    pub id: ProviderId,
    pub name: String,
    pub description: String,
    pub location: Location,
    #[serde(default)]
    pub areas: Vec<String>,
    pub services: Vec<String>,
    pub rating: Rating,
    pub review_count: u32,
    /// Keyed by service key (`valet`, `bouncer`, ...).
    #[serde(default)]
    pub pricing_details: BTreeMap<String, ServiceRate>,
    pub verified: bool,
    pub premium: bool,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl ServiceProvider {
    /// Hourly rate for a service key, if the provider overrides it.
    pub fn rate_override(&self, service_key: &str) -> Option<Rupees> {
        self.pricing_details.get(service_key).and_then(ServiceRate::hourly)
    }

    /// Base fee for a service key, if the provider lists one.
    pub fn base_fee(&self, service_key: &str) -> Option<Rupees> {
        self.pricing_details.get(service_key).and_then(|rate| rate.base_fee)
    }

    /// Lower-cased text searched by free-text queries.
    pub fn search_haystack(&self) -> String {
        let mut parts: Vec<&str> = vec![&self.name, &self.description];
        let location = self.location.to_string();
        parts.push(&location);
        parts.extend(self.services.iter().map(String::as_str));
        parts.extend(self.areas.iter().map(String::as_str));
        normalize(&parts.join(" "))
    }

    /// True when any listed service name contains `service_type`.
    ///
    /// `service_type` must already be normalized.
    pub fn offers(&self, service_type: &str) -> bool {
        self.services
            .iter()
            .any(|service| normalize(service).contains(service_type))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> ServiceProvider {
        let mut pricing_details = BTreeMap::new();
        pricing_details.insert(
            "valet".to_string(),
            ServiceRate {
                per_hour: Some(Rupees::new(350)),
                per_minute: None,
                base_fee: Some(Rupees::new(500)),
            },
        );
        pricing_details.insert(
            "bouncer".to_string(),
            ServiceRate {
                per_hour: None,
                per_minute: Some(Rupees::new(5)),
                base_fee: None,
            },
        );

        ServiceProvider {
            id: ProviderId::new(1).unwrap(),
            name: "Elite Valet Co".to_string(),
            description: "Premium parking for weddings".to_string(),
            location: "Mumbai, Maharashtra".parse().unwrap(),
            areas: vec!["Bandra West".to_string()],
            services: vec!["Valet Parking".to_string(), "Bouncers".to_string()],
            rating: Rating::from_tenths(48),
            review_count: 120,
            pricing_details,
            verified: true,
            premium: false,
            phone: Some("+91 98200 00001".to_string()),
            email: None,
        }
    }

    #[test]
    fn per_hour_override_wins() {
        assert_eq!(provider().rate_override("valet"), Some(Rupees::new(350)));
    }

    #[test]
    fn per_minute_override_converts_to_hourly() {
        assert_eq!(provider().rate_override("bouncer"), Some(Rupees::new(300)));
    }

    #[test]
    fn missing_override_is_none() {
        assert_eq!(provider().rate_override("bodyguard"), None);
    }

    #[test]
    fn base_fee_is_exposed_separately() {
        assert_eq!(provider().base_fee("valet"), Some(Rupees::new(500)));
        assert_eq!(provider().base_fee("bouncer"), None);
    }

    #[test]
    fn haystack_covers_every_searchable_field() {
        let haystack = provider().search_haystack();
        for needle in ["elite", "weddings", "mumbai", "maharashtra", "valet parking", "bandra west"] {
            assert!(haystack.contains(needle), "missing {}", needle);
        }
    }

    #[test]
    fn offers_matches_service_substring() {
        assert!(provider().offers("valet"));
        assert!(provider().offers("bouncer"));
        assert!(!provider().offers("bodyguard"));
    }
}
