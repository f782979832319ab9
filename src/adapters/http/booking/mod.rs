//! HTTP adapter for booking form endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AdvanceBookingRequest, BookingFormResponse, HandoffResponse, QuoteBookingRequest,
    QuoteLineResponse, QuoteResponse, SubmitBookingRequest,
};
pub use handlers::BookingHandlers;
pub use routes::booking_routes;
