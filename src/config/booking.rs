//! Booking configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::application::BookingSettings;
use crate::domain::booking::SUPPORT_EMAIL;
use crate::domain::foundation::Rupees;
use crate::domain::provider::DEFAULT_HOURLY_RATE;

/// Booking and handoff configuration
#[derive(Debug, Clone, Deserialize)]
pub struct BookingConfig {
    /// Email recipient when a provider lists none
    #[serde(default = "default_support_email")]
    pub support_email: String,

    /// Hourly rate in rupees for services without a provider override
    #[serde(default = "default_hourly_rate")]
    pub default_hourly_rate: u64,

    /// City reported by the location endpoint, if any
    #[serde(default)]
    pub default_city: Option<String>,
}

impl BookingConfig {
    /// Validate booking configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_hourly_rate == 0 {
            return Err(ValidationError::InvalidHourlyRate);
        }
        let email = self.support_email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(ValidationError::InvalidSupportEmail);
        }
        Ok(())
    }

    /// Settings handed to the booking handlers.
    pub fn settings(&self) -> BookingSettings {
        BookingSettings {
            default_hourly_rate: Rupees::new(self.default_hourly_rate),
            support_email: self.support_email.trim().to_string(),
        }
    }
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            support_email: default_support_email(),
            default_hourly_rate: default_hourly_rate(),
            default_city: None,
        }
    }
}

fn default_support_email() -> String {
    SUPPORT_EMAIL.to_string()
}

fn default_hourly_rate() -> u64 {
    DEFAULT_HOURLY_RATE.value()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_config_defaults() {
        let config = BookingConfig::default();
        assert_eq!(config.support_email, "support@invalser.com");
        assert_eq!(config.default_hourly_rate, 200);
        assert!(config.default_city.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_rate_is_rejected() {
        let config = BookingConfig {
            default_hourly_rate: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidHourlyRate));
    }

    #[test]
    fn test_support_email_needs_at_sign() {
        let config = BookingConfig {
            support_email: "support.invalser.com".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidSupportEmail));
    }

    #[test]
    fn test_settings_carry_rate_and_trimmed_email() {
        let config = BookingConfig {
            support_email: " help@invalser.com ".to_string(),
            default_hourly_rate: 350,
            default_city: None,
        };
        let settings = config.settings();
        assert_eq!(settings.default_hourly_rate, Rupees::new(350));
        assert_eq!(settings.support_email, "help@invalser.com");
    }
}
