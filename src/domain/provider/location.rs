//! `"City, State"` locations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Lower-cases and trims user or catalog text before comparison.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// A provider's base location.
///
/// Stored split into its city and state components; serialized back to
/// the `"City, State"` form the listing uses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Location {
    city: String,
    state: String,
}

impl Location {
    /// Creates a location from its components.
    pub fn new(city: impl Into<String>, state: impl Into<String>) -> Result<Self, ValidationError> {
        let city = city.into().trim().to_string();
        let state = state.into().trim().to_string();
        if city.is_empty() {
            return Err(ValidationError::empty_field("location.city"));
        }
        Ok(Self { city, state })
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    /// True when the city equals, contains, or is contained by `city`.
    ///
    /// `city` must already be normalized.
    pub fn matches_city(&self, city: &str) -> bool {
        overlaps(&normalize(&self.city), city)
    }

    /// True when the state contains or is contained by `state`.
    ///
    /// `state` must already be normalized. A location without a state
    /// component never matches a state filter.
    pub fn matches_state(&self, state: &str) -> bool {
        let own = normalize(&self.state);
        !own.is_empty() && overlaps(&own, state)
    }
}

/// Equality or substring containment in either direction.
pub(crate) fn overlaps(candidate: &str, needle: &str) -> bool {
    if candidate.is_empty() || needle.is_empty() {
        return false;
    }
    candidate == needle || candidate.contains(needle) || needle.contains(candidate)
}

impl FromStr for Location {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(',') {
            Some((city, state)) => Location::new(city, state),
            None => Location::new(s, ""),
        }
    }
}

impl TryFrom<String> for Location {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Location> for String {
    fn from(location: Location) -> Self {
        location.to_string()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.state.is_empty() {
            write!(f, "{}", self.city)
        } else {
            write!(f, "{}, {}", self.city, self.state)
        }
    }
}
