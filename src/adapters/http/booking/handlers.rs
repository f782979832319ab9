//! HTTP handlers for booking endpoints.
//!
//! Booking routes accept any well-formed provider id. An id nobody lists
//! prices at the default rate and hands off to the support address.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{invalid_provider_id, ErrorResponse};
use crate::application::handlers::booking::{
    AdvanceBookingCommand, AdvanceBookingHandler, QuoteBookingCommand, QuoteBookingHandler,
    SubmitBookingCommand, SubmitBookingHandler,
};
use crate::domain::booking::BookingError;
use crate::domain::foundation::ProviderId;

use super::dto::{
    AdvanceBookingRequest, BookingFormResponse, HandoffResponse, QuoteBookingRequest,
    QuoteResponse, SubmitBookingRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct BookingHandlers {
    advance_handler: Arc<AdvanceBookingHandler>,
    quote_handler: Arc<QuoteBookingHandler>,
    submit_handler: Arc<SubmitBookingHandler>,
}

impl BookingHandlers {
    pub fn new(
        advance_handler: Arc<AdvanceBookingHandler>,
        quote_handler: Arc<QuoteBookingHandler>,
        submit_handler: Arc<SubmitBookingHandler>,
    ) -> Self {
        Self {
            advance_handler,
            quote_handler,
            submit_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/booking/:id/advance - Apply updates and change step
pub async fn advance_booking(
    State(handlers): State<BookingHandlers>,
    Path(provider_id): Path<String>,
    Json(req): Json<AdvanceBookingRequest>,
) -> Response {
    if let Err(response) = parse_provider_id(&provider_id) {
        return response;
    }

    let cmd = AdvanceBookingCommand {
        form: req.form,
        updates: req.updates,
        direction: req.direction,
    };

    match handlers.advance_handler.handle(cmd) {
        Ok(form) => {
            let response: BookingFormResponse = form.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_booking_error(e),
    }
}

/// POST /api/booking/:id/quote - Price the form
pub async fn quote_booking(
    State(handlers): State<BookingHandlers>,
    Path(provider_id): Path<String>,
    Json(req): Json<QuoteBookingRequest>,
) -> Response {
    let provider_id = match parse_provider_id(&provider_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = QuoteBookingCommand {
        provider_id,
        form: req.form,
    };

    match handlers.quote_handler.handle(cmd).await {
        Ok(summary) => {
            let response: QuoteResponse = summary.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_booking_error(e),
    }
}

/// POST /api/booking/:id/submit - Build the handoff link
pub async fn submit_booking(
    State(handlers): State<BookingHandlers>,
    Path(provider_id): Path<String>,
    Json(req): Json<SubmitBookingRequest>,
) -> Response {
    let provider_id = match parse_provider_id(&provider_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = SubmitBookingCommand {
        provider_id,
        form: req.form,
        channel: req.channel,
    };

    match handlers.submit_handler.handle(cmd).await {
        Ok(handoff) => {
            let response: HandoffResponse = handoff.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_booking_error(e),
    }
}

fn parse_provider_id(raw: &str) -> Result<ProviderId, Response> {
    raw.parse::<ProviderId>()
        .map_err(|error| invalid_provider_id(raw, &error))
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_booking_error(error: BookingError) -> Response {
    let body = ErrorResponse::new(error.code(), error.message());
    match &error {
        BookingError::ValidationFailed { field, .. } => body
            .with_field(field)
            .into_response_with(StatusCode::UNPROCESSABLE_ENTITY),
        BookingError::InvalidStep(_) => body.into_response_with(StatusCode::CONFLICT),
        BookingError::ContactUnavailable { .. } => {
            body.into_response_with(StatusCode::UNPROCESSABLE_ENTITY)
        }
        BookingError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "Booking request failed");
            body.into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
