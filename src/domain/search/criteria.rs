//! Search criteria as supplied by a listing page.

use serde::{Deserialize, Serialize};

use crate::domain::provider::normalize;

/// City value meaning "do not filter by city".
pub const ALL_CITIES: &str = "all";

/// Filters for a provider search. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    /// Free-text query.
    #[serde(default, alias = "q")]
    pub query: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    /// Service type filter, e.g. `valet`.
    #[serde(default, alias = "type")]
    pub service_type: Option<String>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = Some(area.into());
        self
    }

    pub fn with_service_type(mut self, service_type: impl Into<String>) -> Self {
        self.service_type = Some(service_type.into());
        self
    }

    /// Normalized city, or `None` when blank or the all-cities sentinel.
    pub fn city_filter(&self) -> Option<String> {
        normalized(&self.city).filter(|city| !is_all_cities(city))
    }

    pub fn state_filter(&self) -> Option<String> {
        normalized(&self.state)
    }

    pub fn area_filter(&self) -> Option<String> {
        normalized(&self.area)
    }

    pub fn query_filter(&self) -> Option<String> {
        normalized(&self.query)
    }

    pub fn service_type_filter(&self) -> Option<String> {
        normalized(&self.service_type)
    }
}

fn normalized(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(normalize)
        .filter(|value| !value.is_empty())
}

fn is_all_cities(city: &str) -> bool {
    city == ALL_CITIES || city == "all cities"
}
