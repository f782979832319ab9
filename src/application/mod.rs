//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Provider lookups are queries; booking handlers are stateless commands
//! over a form the client sends back on every call.

pub mod handlers;

pub use handlers::{
    // Booking handlers
    AdvanceBookingCommand, AdvanceBookingHandler, BookingHandoff, BookingSettings,
    BookingSummary, QuoteBookingCommand, QuoteBookingHandler, StepDirection,
    SubmitBookingCommand, SubmitBookingHandler,
    // Provider handlers
    DetectCityHandler, GetProviderHandler, GetProviderQuery, ListCitiesHandler,
    SearchProvidersHandler, SearchProvidersQuery,
};
