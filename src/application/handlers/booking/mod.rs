//! Booking form handlers.
//!
//! The server keeps no booking state. Each request carries the whole form,
//! and the handlers re-derive the step, quote and handoff link from it.

mod advance_booking;
mod quote_booking;
mod submit_booking;

pub use advance_booking::{AdvanceBookingCommand, AdvanceBookingHandler, StepDirection};
pub use quote_booking::{BookingSummary, QuoteBookingCommand, QuoteBookingHandler};
pub use submit_booking::{BookingHandoff, SubmitBookingCommand, SubmitBookingHandler};

use crate::domain::booking::{BookingError, SUPPORT_EMAIL};
use crate::domain::foundation::{ProviderId, Rupees};
use crate::domain::provider::{ServiceProvider, DEFAULT_HOURLY_RATE};
use crate::ports::ProviderReader;

/// Operator settings applied to every quote and handoff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSettings {
    /// Rate for services the provider has no override for.
    pub default_hourly_rate: Rupees,
    /// Recipient when the provider lists no email.
    pub support_email: String,
}

impl Default for BookingSettings {
    fn default() -> Self {
        Self {
            default_hourly_rate: DEFAULT_HOURLY_RATE,
            support_email: SUPPORT_EMAIL.to_string(),
        }
    }
}

/// Looks the provider up, tolerating an id nobody lists.
async fn load_provider(
    reader: &dyn ProviderReader,
    provider_id: ProviderId,
) -> Result<Option<ServiceProvider>, BookingError> {
    let provider = reader.get_by_id(provider_id).await?;
    if provider.is_none() {
        tracing::warn!(id = %provider_id, "Booking for unlisted provider, using defaults");
    }
    Ok(provider)
}
