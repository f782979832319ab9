//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use super::ValidationError;

/// Unique identifier for a listed service provider.
///
/// Always a positive integer. Identifiers are assigned in the static
/// catalog and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct ProviderId(NonZeroU32);

impl ProviderId {
    /// Creates a ProviderId, rejecting zero.
    pub fn new(value: u32) -> Result<Self, ValidationError> {
        NonZeroU32::new(value)
            .map(Self)
            .ok_or_else(|| ValidationError::invalid_format("provider_id", "must be a positive integer"))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<u32> for ProviderId {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProviderId> for u32 {
    fn from(id: ProviderId) -> Self {
        id.value()
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProviderId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s
            .trim()
            .parse()
            .map_err(|_| ValidationError::invalid_format("provider_id", format!("'{}' is not a number", s)))?;
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_id_accepts_positive_values() {
        let id = ProviderId::new(7).unwrap();
        assert_eq!(id.value(), 7);
        assert_eq!(id.to_string(), "7");
    }

    #[test]
    fn provider_id_rejects_zero() {
        assert!(ProviderId::new(0).is_err());
    }

    #[test]
    fn provider_id_parses_from_route_segment() {
        assert_eq!("12".parse::<ProviderId>().unwrap().value(), 12);
        assert_eq!(" 3 ".parse::<ProviderId>().unwrap().value(), 3);
    }

    #[test]
    fn provider_id_rejects_garbage_and_negatives() {
        assert!("abc".parse::<ProviderId>().is_err());
        assert!("-4".parse::<ProviderId>().is_err());
        assert!("0".parse::<ProviderId>().is_err());
        assert!("".parse::<ProviderId>().is_err());
    }

    #[test]
    fn provider_id_serializes_as_plain_number() {
        let id = ProviderId::new(42).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
    }

    #[test]
    fn provider_id_deserialization_rejects_zero() {
        assert!(serde_json::from_str::<ProviderId>("0").is_err());
        assert_eq!(serde_json::from_str::<ProviderId>("5").unwrap().value(), 5);
    }
}
