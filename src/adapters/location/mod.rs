//! Location detector adapters.
//!
//! No geolocation service is wired in. Deployments either report nothing
//! or a configured default city.

use async_trait::async_trait;

use crate::ports::{City, LocationDetector};

/// Detector for environments without location support.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocationDetector;

#[async_trait]
impl LocationDetector for NoLocationDetector {
    async fn detect_location(&self) -> Option<City> {
        None
    }
}

/// Detector that always reports one city.
#[derive(Debug, Clone)]
pub struct FixedLocationDetector {
    city: City,
}

impl FixedLocationDetector {
    pub fn new(city: City) -> Self {
        Self { city }
    }

    /// Detector for `city`, or `None` when it is blank.
    pub fn from_name(city: &str) -> Option<Self> {
        City::new(city).map(Self::new)
    }
}

#[async_trait]
impl LocationDetector for FixedLocationDetector {
    async fn detect_location(&self) -> Option<City> {
        Some(self.city.clone())
    }
}
