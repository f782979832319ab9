//! Location detector port.
//!
//! Device geolocation and reverse geocoding live outside the search core.
//! The core only ever asks for a city, and "unknown" is a normal answer.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A city name suitable for the search city filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct City(String);

impl City {
    /// Creates a city, returning `None` for blank names.
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            None
        } else {
            Some(Self(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Port for detecting the visitor's city.
///
/// Implementations swallow their own failures and answer `None`.
#[async_trait]
pub trait LocationDetector: Send + Sync {
    async fn detect_location(&self) -> Option<City>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_rejects_blank_names() {
        assert!(City::new("   ").is_none());
        assert_eq!(City::new(" Pune ").unwrap().as_str(), "Pune");
    }

    #[test]
    fn city_serializes_as_string() {
        let city = City::new("Chennai").unwrap();
        assert_eq!(serde_json::to_string(&city).unwrap(), "\"Chennai\"");
    }
}
