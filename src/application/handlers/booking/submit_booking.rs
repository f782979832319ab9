//! SubmitBookingHandler - builds the WhatsApp or email handoff link.

use serde::Serialize;
use std::sync::Arc;

use super::{load_provider, BookingSettings};
use crate::domain::booking::{
    compose_message, email_link, email_subject, quote, whatsapp_link, BookingError, BookingForm,
    BookingStep, HandoffChannel,
};
use crate::domain::foundation::{ProviderId, Rupees};
use crate::ports::ProviderReader;

/// Command to hand a completed form off to the provider.
#[derive(Debug, Clone)]
pub struct SubmitBookingCommand {
    pub provider_id: ProviderId,
    pub form: BookingForm,
    pub channel: HandoffChannel,
}

/// Link the client opens to send the booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingHandoff {
    pub channel: HandoffChannel,
    pub url: String,
    pub total: Rupees,
}

/// Handler for booking submission.
pub struct SubmitBookingHandler {
    reader: Arc<dyn ProviderReader>,
    settings: BookingSettings,
}

impl SubmitBookingHandler {
    pub fn new(reader: Arc<dyn ProviderReader>, settings: BookingSettings) -> Self {
        Self { reader, settings }
    }

    pub async fn handle(&self, cmd: SubmitBookingCommand) -> Result<BookingHandoff, BookingError> {
        if cmd.form.step() != BookingStep::Submit {
            return Err(BookingError::invalid_step(format!(
                "Complete the {} step before submitting",
                cmd.form.step().title()
            )));
        }

        let provider = load_provider(self.reader.as_ref(), cmd.provider_id).await?;
        let quote = quote(&cmd.form, provider.as_ref(), self.settings.default_hourly_rate);
        let message = compose_message(&cmd.form, provider.as_ref(), &quote);

        let url = match cmd.channel {
            HandoffChannel::WhatsApp => whatsapp_link(provider.as_ref(), &message)?,
            HandoffChannel::Email => email_link(
                provider.as_ref(),
                &self.settings.support_email,
                &email_subject(provider.as_ref()),
                &message,
            ),
        };

        tracing::info!(
            provider = %cmd.provider_id,
            channel = %cmd.channel,
            total = %quote.total,
            "Booking handed off"
        );

        Ok(BookingHandoff {
            channel: cmd.channel,
            url,
            total: quote.total,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::provider::test_support::MockProviderReader;
    use crate::domain::booking::{FieldUpdate, ServiceKind, TextField};

    fn completed_form() -> BookingForm {
        let mut form = BookingForm::new();
        form.apply(FieldUpdate::ToggleService {
            service: ServiceKind::Valet,
        });
        for (field, value) in [
            (TextField::Name, "Asha Rao"),
            (TextField::Phone, "+91 99887 76655"),
            (TextField::Email, "asha@example.com"),
            (TextField::Date, "2026-12-20"),
            (TextField::Time, "18:30"),
            (TextField::Duration, "3"),
            (TextField::Location, "Taj Lands End, Bandra"),
        ] {
            form.apply(FieldUpdate::SetText {
                field,
                value: value.to_string(),
            });
        }
        while !form.step().is_final() {
            form.next().unwrap();
        }
        form
    }

    fn handler() -> SubmitBookingHandler {
        SubmitBookingHandler::new(
            Arc::new(MockProviderReader::with_catalog()),
            BookingSettings::default(),
        )
    }

    fn command(id: u32, form: BookingForm, channel: HandoffChannel) -> SubmitBookingCommand {
        SubmitBookingCommand {
            provider_id: ProviderId::new(id).unwrap(),
            form,
            channel,
        }
    }

    #[tokio::test]
    async fn whatsapp_link_uses_provider_digits() {
        let handoff = handler()
            .handle(command(1, completed_form(), HandoffChannel::WhatsApp))
            .await
            .unwrap();

        assert!(handoff.url.starts_with("https://wa.me/919876543210?text="));
        assert_eq!(handoff.total, Rupees::new(750));
    }

    #[tokio::test]
    async fn whatsapp_without_phone_is_refused() {
        // Metro Valet Parking lists no phone.
        let err = handler()
            .handle(command(4, completed_form(), HandoffChannel::WhatsApp))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            BookingError::contact_unavailable(HandoffChannel::WhatsApp)
        );
    }

    #[tokio::test]
    async fn email_falls_back_to_support_address() {
        // Marina Event Guards lists no email.
        let handoff = handler()
            .handle(command(7, completed_form(), HandoffChannel::Email))
            .await
            .unwrap();

        assert!(handoff.url.starts_with("mailto:support@invalser.com?subject="));
    }

    #[tokio::test]
    async fn refuses_form_before_final_step() {
        let err = handler()
            .handle(command(1, BookingForm::new(), HandoffChannel::Email))
            .await
            .unwrap_err();

        assert!(matches!(err, BookingError::InvalidStep(_)));
    }
}
