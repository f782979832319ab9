//! Booking module - the four-step booking form and its handoff.
//!
//! # Module Organization
//!
//! - `service` - bookable services and event types
//! - `step` - the `Services → Personal → Details → Submit` step machine
//! - `form` - form state and the tagged field update schema
//! - `validation` - per-step gates
//! - `pricing` - `rate × hours × quantity` quotes
//! - `message` - the booking summary text
//! - `handoff` - WhatsApp and mailto links
//! - `errors` - booking error type

mod errors;
mod form;
mod handoff;
mod message;
mod pricing;
mod service;
mod step;
mod validation;

pub use errors::BookingError;
pub use form::{
    BookingForm, ContactDetails, FieldKind, FieldUpdate, FormField, ScheduleDetails, TextField,
};
pub use handoff::{email_link, whatsapp_link, HandoffChannel, SUPPORT_EMAIL};
pub use message::{compose_message, email_subject};
pub use pricing::{parse_duration_hours, quote, BookingQuote, QuoteLine};
pub use service::{EventType, ServiceKind};
pub use step::BookingStep;
pub use validation::{is_valid_email, is_valid_phone, validate_step};
