//! External handoff links.
//!
//! Building a link is the whole of "submitting" a booking: the caller
//! opens it, and nothing reports whether a message was ever sent.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::BookingError;
use crate::domain::provider::ServiceProvider;

/// Address used when a provider lists no email.
pub const SUPPORT_EMAIL: &str = "support@invalser.com";

/// Channel a booking is handed off through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandoffChannel {
    WhatsApp,
    Email,
}

impl fmt::Display for HandoffChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandoffChannel::WhatsApp => write!(f, "WhatsApp"),
            HandoffChannel::Email => write!(f, "email"),
        }
    }
}

/// `https://wa.me/{digits}?text={message}` for the provider's phone.
///
/// Fails when there is no provider or its phone has no digits.
pub fn whatsapp_link(
    provider: Option<&ServiceProvider>,
    message: &str,
) -> Result<String, BookingError> {
    let digits: String = provider
        .and_then(|p| p.phone.as_deref())
        .unwrap_or_default()
        .chars()
        .filter(char::is_ascii_digit)
        .collect();

    if digits.is_empty() {
        return Err(BookingError::contact_unavailable(HandoffChannel::WhatsApp));
    }

    Ok(format!(
        "https://wa.me/{}?text={}",
        digits,
        urlencoding::encode(message)
    ))
}

/// `mailto:` link to the provider, or to `fallback_email` when the
/// provider lists none.
pub fn email_link(
    provider: Option<&ServiceProvider>,
    fallback_email: &str,
    subject: &str,
    message: &str,
) -> String {
    let address = provider
        .and_then(|p| p.email.as_deref())
        .map(str::trim)
        .filter(|email| !email.is_empty())
        .unwrap_or(fallback_email);

    format!(
        "mailto:{}?subject={}&body={}",
        address,
        urlencoding::encode(subject),
        urlencoding::encode(message)
    )
}
