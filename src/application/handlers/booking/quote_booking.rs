//! QuoteBookingHandler - Query handler for the running price estimate.

use serde::Serialize;
use std::sync::Arc;

use super::{load_provider, BookingSettings};
use crate::domain::booking::{compose_message, email_subject, quote, BookingError, BookingForm, BookingQuote};
use crate::domain::foundation::ProviderId;
use crate::ports::ProviderReader;

/// Query to price a form against a provider.
#[derive(Debug, Clone)]
pub struct QuoteBookingCommand {
    pub provider_id: ProviderId,
    pub form: BookingForm,
}

/// Price estimate plus the summary text the handoff would send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingSummary {
    pub quote: BookingQuote,
    pub subject: String,
    pub message: String,
}

/// Handler for booking quotes.
pub struct QuoteBookingHandler {
    reader: Arc<dyn ProviderReader>,
    settings: BookingSettings,
}

impl QuoteBookingHandler {
    pub fn new(reader: Arc<dyn ProviderReader>, settings: BookingSettings) -> Self {
        Self { reader, settings }
    }

    pub async fn handle(&self, cmd: QuoteBookingCommand) -> Result<BookingSummary, BookingError> {
        let provider = load_provider(self.reader.as_ref(), cmd.provider_id).await?;

        let quote = quote(&cmd.form, provider.as_ref(), self.settings.default_hourly_rate);
        let message = compose_message(&cmd.form, provider.as_ref(), &quote);

        Ok(BookingSummary {
            subject: email_subject(provider.as_ref()),
            quote,
            message,
        })
    }
}
