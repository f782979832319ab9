//! Step gates for the booking form.

use once_cell::sync::Lazy;
use regex::Regex;

use super::errors::BookingError;
use super::form::BookingForm;
use super::step::BookingStep;

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9+\-\s()]{10,}$").expect("phone pattern is valid"));

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// At least ten digits, spaces, `+`, `-` or parentheses.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

/// `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Checks the gate that guards leaving the form's current step.
pub fn validate_step(form: &BookingForm) -> Result<(), BookingError> {
    match form.step() {
        BookingStep::Services => validate_services(form),
        BookingStep::Personal => validate_personal(form),
        BookingStep::Details => validate_details(form),
        BookingStep::Submit => Ok(()),
    }
}

fn validate_services(form: &BookingForm) -> Result<(), BookingError> {
    if form.selected_services().is_empty() {
        return Err(BookingError::validation(
            "services",
            "Please select at least one service",
        ));
    }
    Ok(())
}

fn validate_personal(form: &BookingForm) -> Result<(), BookingError> {
    let contact = form.contact();
    require(&contact.name, "name", "Please enter your name")?;
    require(&contact.phone, "phone", "Please enter your phone number")?;
    require(&contact.email, "email", "Please enter your email address")?;

    if !is_valid_phone(contact.phone.trim()) {
        return Err(BookingError::validation(
            "phone",
            "Please enter a valid phone number (at least 10 digits)",
        ));
    }
    if !is_valid_email(contact.email.trim()) {
        return Err(BookingError::validation(
            "email",
            "Please enter a valid email address",
        ));
    }
    Ok(())
}

fn validate_details(form: &BookingForm) -> Result<(), BookingError> {
    let schedule = form.schedule();
    require(&schedule.date, "date", "Please select a date")?;
    require(&schedule.time, "time", "Please select a time")?;
    require(&schedule.location, "location", "Please enter the event location")?;
    Ok(())
}

fn require(value: &str, field: &str, message: &str) -> Result<(), BookingError> {
    if value.trim().is_empty() {
        return Err(BookingError::validation(field, message));
    }
    Ok(())
}
