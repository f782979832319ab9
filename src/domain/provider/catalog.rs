//! The compiled-in provider catalog.
//!
//! Raw seed records are converted into validated [`ServiceProvider`]s the
//! first time the catalog is read. Records that fail validation are
//! logged and left out rather than aborting the whole listing.

use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashSet};

use super::location::Location;
use super::provider::{ServiceProvider, ServiceRate};
use crate::domain::foundation::{ProviderId, Rating, Rupees, ValidationError};

/// Raw per-service pricing as written in the seed table.
#[derive(Debug, Clone, Copy)]
pub struct PricingSeed {
    pub service: &'static str,
    pub per_hour: Option<u64>,
    pub per_minute: Option<u64>,
    pub base_fee: Option<u64>,
}

/// Raw provider record as written in the seed table.
#[derive(Debug, Clone, Copy)]
pub struct ProviderSeed {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub location: &'static str,
    pub areas: &'static [&'static str],
    pub services: &'static [&'static str],
    pub rating: f64,
    pub review_count: u32,
    pub pricing: &'static [PricingSeed],
    pub verified: bool,
    pub premium: bool,
    pub phone: Option<&'static str>,
    pub email: Option<&'static str>,
}

impl ProviderSeed {
    fn to_provider(&self) -> Result<ServiceProvider, ValidationError> {
        let id = ProviderId::new(self.id)?;
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        let location: Location = self.location.parse()?;
        let rating = Rating::try_new(self.rating)?;

        let pricing_details: BTreeMap<String, ServiceRate> = self
            .pricing
            .iter()
            .map(|seed| {
                (
                    seed.service.to_string(),
                    ServiceRate {
                        per_hour: seed.per_hour.map(Rupees::new),
                        per_minute: seed.per_minute.map(Rupees::new),
                        base_fee: seed.base_fee.map(Rupees::new),
                    },
                )
            })
            .collect();

        Ok(ServiceProvider {
            id,
            name: self.name.to_string(),
            description: self.description.to_string(),
            location,
            areas: self.areas.iter().map(|area| area.to_string()).collect(),
            services: self.services.iter().map(|service| service.to_string()).collect(),
            rating,
            review_count: self.review_count,
            pricing_details,
            verified: self.verified,
            premium: self.premium,
            phone: self.phone.map(str::to_string),
            email: self.email.map(str::to_string),
        })
    }
}

/// Converts seed records into providers, keeping seed order.
///
/// Malformed records and repeated ids are skipped with a warning.
pub fn build_catalog(seeds: &[ProviderSeed]) -> Vec<ServiceProvider> {
    let mut seen = HashSet::new();
    let mut providers = Vec::with_capacity(seeds.len());

    for seed in seeds {
        match seed.to_provider() {
            Ok(provider) => {
                if !seen.insert(provider.id) {
                    tracing::warn!(id = seed.id, "Skipping provider with duplicate id");
                    continue;
                }
                providers.push(provider);
            }
            Err(err) => {
                tracing::warn!(id = seed.id, error = %err, "Skipping malformed provider record");
            }
        }
    }

    tracing::debug!(count = providers.len(), "Provider catalog built");
    providers
}

static CATALOG: Lazy<Vec<ServiceProvider>> = Lazy::new(|| build_catalog(PROVIDER_SEEDS));

/// The validated provider listing, built on first access.
pub fn catalog() -> &'static [ServiceProvider] {
    &CATALOG
}

pub static PROVIDER_SEEDS: &[ProviderSeed] = &[
    ProviderSeed {
        id: 1,
        name: "Royal Valet Services",
        description: "Luxury valet parking for weddings, galas and five-star hotels.",
        location: "Mumbai, Maharashtra",
        areas: &["Andheri West", "Bandra West", "Juhu"],
        services: &["Valet Parking", "Event Security"],
        rating: 4.9,
        review_count: 230,
        pricing: &[PricingSeed {
            service: "valet",
            per_hour: Some(250),
            per_minute: None,
            base_fee: Some(500),
        }],
        verified: true,
        premium: true,
        phone: Some("+91 98765 43210"),
        email: Some("bookings@royalvalet.in"),
    },
    ProviderSeed {
        id: 2,
        name: "Shield Security Solutions",
        description: "Trained bouncers and close protection officers for clubs and offices.",
        location: "Mumbai, Maharashtra",
        areas: &["Powai", "Andheri East"],
        services: &["Bouncers", "Bodyguards", "Corporate Security"],
        rating: 4.7,
        review_count: 184,
        pricing: &[],
        verified: true,
        premium: false,
        phone: Some("+91 98200 11223"),
        email: Some("contact@shieldsecurity.in"),
    },
    ProviderSeed {
        id: 3,
        name: "Capital Guard Force",
        description: "Ex-servicemen bodyguards and crowd control for high-profile events.",
        location: "New Delhi, Delhi",
        areas: &["Connaught Place", "Saket", "Vasant Kunj"],
        services: &["Bodyguards", "Event Security", "Bouncers"],
        rating: 4.8,
        review_count: 312,
        pricing: &[PricingSeed {
            service: "bodyguard",
            per_hour: Some(400),
            per_minute: None,
            base_fee: None,
        }],
        verified: true,
        premium: true,
        phone: Some("+91 99100 45678"),
        email: Some("ops@capitalguard.in"),
    },
    ProviderSeed {
        id: 4,
        name: "Metro Valet Parking",
        description: "Valet crews for malls, restaurants and office complexes.",
        location: "Gurugram, Haryana",
        areas: &["DLF Phase 1", "Cyber City", "Sohna Road"],
        services: &["Valet Parking"],
        rating: 4.5,
        review_count: 96,
        pricing: &[],
        verified: false,
        premium: false,
        phone: None,
        email: Some("hello@metrovalet.in"),
    },
    ProviderSeed {
        id: 5,
        name: "Garden City Protection",
        description: "Event security and bouncers for concerts and tech conferences.",
        location: "Bengaluru, Karnataka",
        areas: &["Koramangala", "Indiranagar", "Whitefield"],
        services: &["Bouncers", "Event Security", "Corporate Security"],
        rating: 4.6,
        review_count: 141,
        pricing: &[PricingSeed {
            service: "event-security",
            per_hour: None,
            per_minute: Some(4),
            base_fee: Some(1000),
        }],
        verified: false,
        premium: true,
        phone: Some("+91 80 4123 9876"),
        email: Some("events@gardencityprotection.in"),
    },
    ProviderSeed {
        id: 6,
        name: "Deccan Valet & Security",
        description: "Combined valet and door security for hotels and banquet halls.",
        location: "Hyderabad, Telangana",
        areas: &["Banjara Hills", "Jubilee Hills", "HITEC City"],
        services: &["Valet Parking", "Bouncers"],
        rating: 4.4,
        review_count: 77,
        pricing: &[],
        verified: true,
        premium: false,
        phone: Some("+91 90000 65432"),
        email: Some("book@deccanvalet.in"),
    },
    ProviderSeed {
        id: 7,
        name: "Marina Event Guards",
        description: "Crowd management for weddings, temple festivals and concerts.",
        location: "Chennai, Tamil Nadu",
        areas: &["T. Nagar", "Adyar", "Anna Nagar"],
        services: &["Event Security", "Bouncers"],
        rating: 4.2,
        review_count: 58,
        pricing: &[],
        verified: false,
        premium: false,
        phone: Some("+91 94440 12345"),
        email: None,
    },
    ProviderSeed {
        id: 8,
        name: "Pune Premier Valets",
        description: "Corporate campus parking and executive security.",
        location: "Pune, Maharashtra",
        areas: &["Koregaon Park", "Hinjewadi", "Viman Nagar"],
        services: &["Valet Parking", "Corporate Security"],
        rating: 4.7,
        review_count: 163,
        pricing: &[PricingSeed {
            service: "corporate-security",
            per_hour: Some(300),
            per_minute: None,
            base_fee: None,
        }],
        verified: true,
        premium: true,
        phone: Some("+91 98220 77889"),
        email: Some("desk@punepremier.in"),
    },
    ProviderSeed {
        id: 9,
        name: "Bandra Bouncers Collective",
        description: "Nightlife door staff for bars and private parties.",
        location: "Mumbai, Maharashtra",
        areas: &["Bandra West", "Khar"],
        services: &["Bouncers"],
        rating: 4.3,
        review_count: 64,
        pricing: &[],
        verified: false,
        premium: false,
        phone: Some("+91 98191 22334"),
        email: None,
    },
    ProviderSeed {
        id: 10,
        name: "SafeHands Corporate Security",
        description: "Guarding and executive protection for IT parks.",
        location: "Bengaluru, Karnataka",
        areas: &["Electronic City", "Whitefield"],
        services: &["Corporate Security", "Bodyguards"],
        rating: 4.8,
        review_count: 205,
        pricing: &[],
        verified: true,
        premium: false,
        phone: Some("+91 80 2850 1100"),
        email: Some("security@safehands.in"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(id: u32, name: &'static str, rating: f64) -> ProviderSeed {
        ProviderSeed {
            id,
            name,
            description: "",
            location: "Mumbai, Maharashtra",
            areas: &[],
            services: &["Valet Parking"],
            rating,
            review_count: 0,
            pricing: &[],
            verified: false,
            premium: false,
            phone: None,
            email: None,
        }
    }

    #[test]
    fn static_catalog_loads_every_seed() {
        assert_eq!(catalog().len(), PROVIDER_SEEDS.len());
    }

    #[test]
    fn static_catalog_ids_are_unique_and_positive() {
        let ids: HashSet<u32> = catalog().iter().map(|p| p.id.value()).collect();
        assert_eq!(ids.len(), catalog().len());
        assert!(ids.iter().all(|id| *id > 0));
    }

    #[test]
    fn catalog_keeps_seed_order() {
        let ids: Vec<u32> = catalog().iter().map(|p| p.id.value()).collect();
        let seed_ids: Vec<u32> = PROVIDER_SEEDS.iter().map(|s| s.id).collect();
        assert_eq!(ids, seed_ids);
    }

    #[test]
    fn malformed_records_are_skipped() {
        let seeds = [
            seed(1, "Good Valets", 4.0),
            seed(0, "Zero Id", 4.0),
            seed(2, "  ", 4.0),
            seed(3, "Too Good", 7.5),
        ];
        let providers = build_catalog(&seeds);
        assert_eq!(providers.len(), 1);
        assert_eq!(providers[0].name, "Good Valets");
    }

    #[test]
    fn duplicate_ids_keep_the_first_record() {
        let seeds = [seed(1, "First", 4.0), seed(1, "Second", 4.5)];
        let providers = build_catalog(&seeds);
        assert_eq!(providers.len(), 1);
        assert_eq!(providers[0].name, "First");
    }

    #[test]
    fn pricing_seeds_become_overrides() {
        let royal = catalog().iter().find(|p| p.id.value() == 1).unwrap();
        assert_eq!(royal.rate_override("valet"), Some(Rupees::new(250)));

        let garden = catalog().iter().find(|p| p.id.value() == 5).unwrap();
        assert_eq!(garden.rate_override("event-security"), Some(Rupees::new(240)));
    }
}
