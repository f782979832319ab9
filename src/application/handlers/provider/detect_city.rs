//! DetectCityHandler - asks the location detector for the visitor's city.

use std::sync::Arc;

use crate::ports::{City, LocationDetector};

/// Handler wrapping the optional location capability.
pub struct DetectCityHandler {
    detector: Arc<dyn LocationDetector>,
}

impl DetectCityHandler {
    pub fn new(detector: Arc<dyn LocationDetector>) -> Self {
        Self { detector }
    }

    /// The detected city, or `None` when detection is unavailable.
    pub async fn handle(&self) -> Option<City> {
        let city = self.detector.detect_location().await;
        tracing::debug!(detected = city.is_some(), "Location detection finished");
        city
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct StubDetector(Option<&'static str>);

    #[async_trait]
    impl LocationDetector for StubDetector {
        async fn detect_location(&self) -> Option<City> {
            self.0.and_then(City::new)
        }
    }

    #[tokio::test]
    async fn returns_detected_city() {
        let handler = DetectCityHandler::new(Arc::new(StubDetector(Some("Hyderabad"))));
        assert_eq!(handler.handle().await, City::new("Hyderabad"));
    }

    #[tokio::test]
    async fn returns_none_when_undetected() {
        let handler = DetectCityHandler::new(Arc::new(StubDetector(None)));
        assert_eq!(handler.handle().await, None);
    }
}
