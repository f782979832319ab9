//! Bookable services and event types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// A service a customer can book, with its quantity ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceKind {
    Valet,
    Bouncer,
    Bodyguard,
    EventSecurity,
    CorporateSecurity,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 5] = [
        ServiceKind::Valet,
        ServiceKind::Bouncer,
        ServiceKind::Bodyguard,
        ServiceKind::EventSecurity,
        ServiceKind::CorporateSecurity,
    ];

    /// Smallest bookable quantity.
    pub const MIN_QUANTITY: u32 = 1;

    /// Key used in provider pricing tables and routes.
    pub fn key(&self) -> &'static str {
        match self {
            ServiceKind::Valet => "valet",
            ServiceKind::Bouncer => "bouncer",
            ServiceKind::Bodyguard => "bodyguard",
            ServiceKind::EventSecurity => "event-security",
            ServiceKind::CorporateSecurity => "corporate-security",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ServiceKind::Valet => "Valet Parking",
            ServiceKind::Bouncer => "Bouncers",
            ServiceKind::Bodyguard => "Bodyguards",
            ServiceKind::EventSecurity => "Event Security",
            ServiceKind::CorporateSecurity => "Corporate Security",
        }
    }

    /// Largest bookable quantity.
    pub fn max_quantity(&self) -> u32 {
        match self {
            ServiceKind::Valet => 50,
            ServiceKind::Bouncer => 20,
            ServiceKind::Bodyguard => 10,
            ServiceKind::EventSecurity => 100,
            ServiceKind::CorporateSecurity => 50,
        }
    }

    /// Clamps a requested quantity into `MIN_QUANTITY..=max_quantity()`.
    pub fn clamp_quantity(&self, quantity: u32) -> u32 {
        quantity.clamp(Self::MIN_QUANTITY, self.max_quantity())
    }
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ServiceKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        ServiceKind::ALL
            .into_iter()
            .find(|kind| kind.key() == key)
            .ok_or_else(|| ValidationError::invalid_format("service", format!("unknown service '{}'", s)))
    }
}

/// Kind of event the booking is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Wedding,
    Corporate,
    Party,
    Concert,
    Conference,
    Other,
}

impl EventType {
    pub fn label(&self) -> &'static str {
        match self {
            EventType::Wedding => "Wedding",
            EventType::Corporate => "Corporate Event",
            EventType::Party => "Private Party",
            EventType::Concert => "Concert",
            EventType::Conference => "Conference",
            EventType::Other => "Other",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip_through_from_str() {
        for kind in ServiceKind::ALL {
            assert_eq!(kind.key().parse::<ServiceKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_service_key_is_rejected() {
        assert!("chauffeur".parse::<ServiceKind>().is_err());
    }

    #[test]
    fn clamp_quantity_respects_floor_and_ceiling() {
        assert_eq!(ServiceKind::Bodyguard.clamp_quantity(0), 1);
        assert_eq!(ServiceKind::Bodyguard.clamp_quantity(5), 5);
        assert_eq!(ServiceKind::Bodyguard.clamp_quantity(11), 10);
        assert_eq!(ServiceKind::EventSecurity.clamp_quantity(500), 100);
    }

    #[test]
    fn service_kind_serializes_as_key() {
        let json = serde_json::to_string(&ServiceKind::EventSecurity).unwrap();
        assert_eq!(json, "\"event-security\"");
    }

    #[test]
    fn event_type_deserializes_from_lowercase() {
        let event: EventType = serde_json::from_str("\"wedding\"").unwrap();
        assert_eq!(event, EventType::Wedding);
        assert_eq!(event.to_string(), "Wedding");
    }
}
