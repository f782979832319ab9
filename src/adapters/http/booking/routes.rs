//! HTTP routes for booking endpoints.

use axum::{routing::post, Router};

use super::handlers::{advance_booking, quote_booking, submit_booking, BookingHandlers};

/// Creates the booking router, to be nested under `/api`.
pub fn booking_routes(handlers: BookingHandlers) -> Router {
    Router::new()
        .route("/booking/:id/advance", post(advance_booking))
        .route("/booking/:id/quote", post(quote_booking))
        .route("/booking/:id/submit", post(submit_booking))
        .with_state(handlers)
}
