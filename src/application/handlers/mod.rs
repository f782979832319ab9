//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod booking;
pub mod provider;

pub use booking::{
    AdvanceBookingCommand, AdvanceBookingHandler, BookingHandoff, BookingSettings,
    BookingSummary, QuoteBookingCommand, QuoteBookingHandler, StepDirection,
    SubmitBookingCommand, SubmitBookingHandler,
};
pub use provider::{
    DetectCityHandler, GetProviderHandler, GetProviderQuery, ListCitiesHandler,
    SearchProvidersHandler, SearchProvidersQuery,
};
