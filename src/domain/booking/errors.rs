//! Booking-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

use super::handoff::HandoffChannel;

/// Booking-specific errors.
///
/// None of these is fatal: every one is reported to the customer, who can
/// correct the form and try again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// A step gate refused to advance.
    ValidationFailed { field: String, message: String },
    /// The requested step move is not possible from the current step.
    InvalidStep(String),
    /// The provider has no contact for the requested handoff channel.
    ContactUnavailable { channel: HandoffChannel },
    /// The provider listing could not be read.
    Infrastructure(String),
}

impl BookingError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        BookingError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn invalid_step(message: impl Into<String>) -> Self {
        BookingError::InvalidStep(message.into())
    }
    pub fn contact_unavailable(channel: HandoffChannel) -> Self {
        BookingError::ContactUnavailable { channel }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        BookingError::Infrastructure(message.into())
    }

    /// The form field at fault, for validation failures.
    pub fn field(&self) -> Option<&str> {
        match self {
            BookingError::ValidationFailed { field, .. } => Some(field),
            _ => None,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            BookingError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            BookingError::InvalidStep(_) => ErrorCode::InvalidStateTransition,
            BookingError::ContactUnavailable { .. } => ErrorCode::ContactUnavailable,
            BookingError::Infrastructure(_) => ErrorCode::CatalogError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            BookingError::ValidationFailed { message, .. } => message.clone(),
            BookingError::InvalidStep(msg) => msg.clone(),
            BookingError::ContactUnavailable { channel } => match channel {
                HandoffChannel::WhatsApp => {
                    "This provider has no phone number for WhatsApp. Please use email instead."
                        .to_string()
                }
                HandoffChannel::Email => "This provider has no email address.".to_string(),
            },
            BookingError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for BookingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for BookingError {}

impl From<ValidationError> for BookingError {
    fn from(err: ValidationError) -> Self {
        BookingError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for BookingError {
    fn from(err: DomainError) -> Self {
        BookingError::Infrastructure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_exposes_field_and_message() {
        let err = BookingError::validation("email", "Please enter a valid email address");
        assert_eq!(err.field(), Some("email"));
        assert_eq!(err.to_string(), "Please enter a valid email address");
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }

    #[test]
    fn contact_unavailable_suggests_email() {
        let err = BookingError::contact_unavailable(HandoffChannel::WhatsApp);
        assert!(err.message().contains("email"));
        assert_eq!(err.code(), ErrorCode::ContactUnavailable);
        assert_eq!(err.field(), None);
    }

    #[test]
    fn converts_from_value_object_validation() {
        let err: BookingError = ValidationError::empty_field("date").into();
        assert_eq!(err.field(), Some("date"));
    }

    #[test]
    fn domain_errors_become_infrastructure_errors() {
        let err: BookingError =
            DomainError::new(ErrorCode::CatalogError, "listing unavailable").into();
        assert_eq!(err.code(), ErrorCode::CatalogError);
        assert!(err.message().contains("listing unavailable"));
    }
}
