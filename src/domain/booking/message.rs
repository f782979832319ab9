//! Booking summary text for WhatsApp and email handoff.

use chrono::{NaiveDate, NaiveTime};

use super::form::BookingForm;
use super::pricing::BookingQuote;
use crate::domain::provider::ServiceProvider;

/// Subject line for the email handoff.
pub fn email_subject(provider: Option<&ServiceProvider>) -> String {
    match provider {
        Some(provider) => format!("Booking Request - {}", provider.name),
        None => "Booking Request".to_string(),
    }
}

/// Builds the fixed-structure booking summary.
///
/// The provider block is left out when no provider is known; optional
/// event fields are left out when empty.
pub fn compose_message(
    form: &BookingForm,
    provider: Option<&ServiceProvider>,
    quote: &BookingQuote,
) -> String {
    let contact = form.contact();
    let schedule = form.schedule();
    let mut text = String::from("*New Booking Request - INVALSER*\n\n");

    if let Some(provider) = provider {
        text.push_str(&format!("*Provider:* {}\n", provider.name));
        text.push_str(&format!("*Location:* {}\n", provider.location));
        text.push_str(&format!(
            "*Rating:* {}/5 ({} reviews)\n\n",
            provider.rating, provider.review_count
        ));
    }

    text.push_str("*Customer Details*\n");
    text.push_str(&format!("Name: {}\n", contact.name.trim()));
    text.push_str(&format!("Phone: {}\n", contact.phone.trim()));
    text.push_str(&format!("Email: {}\n\n", contact.email.trim()));

    text.push_str("*Services Requested*\n");
    for line in &quote.lines {
        text.push_str(&format!(
            "- {}: {} x {} hrs x {}/hr = {}",
            line.label, line.quantity, line.hours, line.rate, line.subtotal
        ));
        if let Some(fee) = line.base_fee {
            text.push_str(&format!(" (base fee {} quoted separately)", fee));
        }
        text.push('\n');
    }
    text.push('\n');

    text.push_str("*Event Details*\n");
    if let Some(event_type) = schedule.event_type {
        text.push_str(&format!("Event Type: {}\n", event_type));
    }
    text.push_str(&format!("Date: {}\n", display_date(&schedule.date)));
    text.push_str(&format!("Time: {}\n", display_time(&schedule.time)));
    text.push_str(&format!("Duration: {} hours\n", quote.hours));
    text.push_str(&format!("Location: {}\n", schedule.location.trim()));
    let requirements = schedule.special_requirements.trim();
    if !requirements.is_empty() {
        text.push_str(&format!("Special Requirements: {}\n", requirements));
    }

    text.push_str(&format!("\n*Total Estimated Price: {}*", quote.total));
    text
}

/// `2026-12-05` becomes `Sat, 05 Dec 2026`; anything else is shown as typed.
fn display_date(date: &str) -> String {
    let date = date.trim();
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|parsed| parsed.format("%a, %d %b %Y").to_string())
        .unwrap_or_else(|_| date.to_string())
}

/// `18:30` becomes `06:30 PM`; anything else is shown as typed.
fn display_time(time: &str) -> String {
    let time = time.trim();
    NaiveTime::parse_from_str(time, "%H:%M")
        .map(|parsed| parsed.format("%I:%M %p").to_string())
        .unwrap_or_else(|_| time.to_string())
}
