//! Booking price estimates.
//!
//! Each selected service contributes `rate × hours × quantity`. The rate
//! is the provider's override for that service when it has one, the
//! default hourly rate otherwise.

use serde::Serialize;

use super::form::BookingForm;
use super::service::ServiceKind;
use crate::domain::foundation::Rupees;
use crate::domain::provider::ServiceProvider;

/// Whole hours at the start of a duration field.
///
/// `"4"` and `"4 hours"` both give 4. Empty or non-numeric text gives 0.
pub fn parse_duration_hours(duration: &str) -> u64 {
    let digits: String = duration
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(0)
}

/// One service's share of a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteLine {
    pub service: ServiceKind,
    pub label: &'static str,
    pub quantity: u32,
    pub hours: u64,
    pub rate: Rupees,
    /// Listed by the provider; shown to the customer but not part of the total.
    pub base_fee: Option<Rupees>,
    pub subtotal: Rupees,
}

/// Price estimate for a booking form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingQuote {
    pub lines: Vec<QuoteLine>,
    pub hours: u64,
    pub total: Rupees,
}

impl BookingQuote {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Prices every selected service on the form.
pub fn quote(
    form: &BookingForm,
    provider: Option<&ServiceProvider>,
    default_rate: Rupees,
) -> BookingQuote {
    let hours = form.duration_hours();

    let lines: Vec<QuoteLine> = form
        .selected_services()
        .iter()
        .map(|&service| {
            let rate = provider
                .and_then(|p| p.rate_override(service.key()))
                .unwrap_or(default_rate);
            let quantity = form.quantity(service);
            QuoteLine {
                service,
                label: service.label(),
                quantity,
                hours,
                rate,
                base_fee: provider.and_then(|p| p.base_fee(service.key())),
                subtotal: rate.times(hours).times(u64::from(quantity)),
            }
        })
        .collect();

    let total = lines.iter().map(|line| line.subtotal).sum();

    BookingQuote { lines, hours, total }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::booking::{FieldUpdate, TextField};
    use crate::domain::provider::{catalog, DEFAULT_HOURLY_RATE};

    fn form(services: &[(ServiceKind, u32)], duration: &str) -> BookingForm {
        let mut form = BookingForm::new();
        for (service, quantity) in services {
            form.apply(FieldUpdate::ToggleService { service: *service });
            form.apply(FieldUpdate::SetQuantity {
                service: *service,
                quantity: *quantity,
            });
        }
        form.apply(FieldUpdate::SetText {
            field: TextField::Duration,
            value: duration.to_string(),
        });
        form
    }

    #[test]
    fn parses_leading_whole_hours() {
        assert_eq!(parse_duration_hours("3"), 3);
        assert_eq!(parse_duration_hours(" 4 hours"), 4);
        assert_eq!(parse_duration_hours("6.5"), 6);
    }

    #[test]
    fn unparseable_duration_is_zero() {
        assert_eq!(parse_duration_hours(""), 0);
        assert_eq!(parse_duration_hours("all night"), 0);
        assert_eq!(parse_duration_hours("-3"), 0);
    }

    #[test]
    fn single_valet_example_totals_1200() {
        let quote = quote(&form(&[(ServiceKind::Valet, 2)], "3"), None, DEFAULT_HOURLY_RATE);
        assert_eq!(quote.total, Rupees::new(1200));
        assert_eq!(quote.lines.len(), 1);
        assert_eq!(quote.lines[0].subtotal, Rupees::new(1200));
    }

    #[test]
    fn total_is_sum_of_subtotals() {
        let quote = quote(
            &form(&[(ServiceKind::Valet, 2), (ServiceKind::Bouncer, 4)], "5"),
            None,
            DEFAULT_HOURLY_RATE,
        );
        assert_eq!(quote.lines[0].subtotal, Rupees::new(2000));
        assert_eq!(quote.lines[1].subtotal, Rupees::new(4000));
        assert_eq!(quote.total, Rupees::new(6000));
    }

    #[test]
    fn no_services_totals_zero() {
        let quote = quote(&form(&[], "8"), None, DEFAULT_HOURLY_RATE);
        assert!(quote.is_empty());
        assert_eq!(quote.total, Rupees::ZERO);
    }

    #[test]
    fn bad_duration_zeroes_every_line() {
        let quote = quote(
            &form(&[(ServiceKind::Valet, 3), (ServiceKind::Bodyguard, 2)], "soon"),
            None,
            DEFAULT_HOURLY_RATE,
        );
        assert_eq!(quote.hours, 0);
        assert!(quote.lines.iter().all(|line| line.subtotal == Rupees::ZERO));
        assert_eq!(quote.total, Rupees::ZERO);
    }

    #[test]
    fn unselected_quantities_do_not_count() {
        let mut f = form(&[(ServiceKind::Valet, 1)], "2");
        f.apply(FieldUpdate::SetQuantity {
            service: ServiceKind::Bouncer,
            quantity: 10,
        });
        assert_eq!(quote(&f, None, DEFAULT_HOURLY_RATE).total, Rupees::new(400));
    }

    #[test]
    fn provider_override_replaces_default_rate() {
        let royal = catalog().iter().find(|p| p.id.value() == 1).unwrap();
        let quote = quote(
            &form(&[(ServiceKind::Valet, 2), (ServiceKind::EventSecurity, 1)], "3"),
            Some(royal),
            DEFAULT_HOURLY_RATE,
        );
        assert_eq!(quote.lines[0].rate, Rupees::new(250));
        assert_eq!(quote.lines[0].base_fee, Some(Rupees::new(500)));
        assert_eq!(quote.lines[1].rate, DEFAULT_HOURLY_RATE);
        assert_eq!(quote.total, Rupees::new(250 * 3 * 2 + 200 * 3));
    }

    #[test]
    fn configured_default_rate_is_used() {
        let quote = quote(&form(&[(ServiceKind::Bouncer, 1)], "2"), None, Rupees::new(300));
        assert_eq!(quote.total, Rupees::new(600));
    }
}
