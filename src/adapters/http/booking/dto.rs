//! HTTP DTOs for booking endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::booking::{BookingHandoff, BookingSummary, StepDirection};
use crate::domain::booking::{
    BookingForm, BookingStep, FieldUpdate, HandoffChannel, QuoteLine, ServiceKind,
};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to apply updates and move the form one step.
#[derive(Debug, Clone, Deserialize)]
pub struct AdvanceBookingRequest {
    #[serde(default)]
    pub form: BookingForm,
    #[serde(default)]
    pub updates: Vec<FieldUpdate>,
    #[serde(default)]
    pub direction: StepDirection,
}

/// Request to price a form.
#[derive(Debug, Clone, Deserialize)]
pub struct QuoteBookingRequest {
    #[serde(default)]
    pub form: BookingForm,
}

/// Request to hand a completed form off.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitBookingRequest {
    pub form: BookingForm,
    pub channel: HandoffChannel,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Form state after a step change.
#[derive(Debug, Clone, Serialize)]
pub struct BookingFormResponse {
    pub step: BookingStep,
    pub step_number: u8,
    pub step_title: &'static str,
    pub can_go_back: bool,
    pub is_final: bool,
    pub form: BookingForm,
}

impl From<BookingForm> for BookingFormResponse {
    fn from(form: BookingForm) -> Self {
        let step = form.step();
        Self {
            step,
            step_number: step.number(),
            step_title: step.title(),
            can_go_back: step.preceding().is_some(),
            is_final: step.is_final(),
            form,
        }
    }
}

/// One priced service.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteLineResponse {
    pub service: ServiceKind,
    pub label: &'static str,
    pub quantity: u32,
    pub hours: u64,
    pub rate: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_fee: Option<u64>,
    pub subtotal: u64,
    pub subtotal_display: String,
}

impl From<QuoteLine> for QuoteLineResponse {
    fn from(line: QuoteLine) -> Self {
        Self {
            service: line.service,
            label: line.label,
            quantity: line.quantity,
            hours: line.hours,
            rate: line.rate.value(),
            base_fee: line.base_fee.map(|fee| fee.value()),
            subtotal: line.subtotal.value(),
            subtotal_display: line.subtotal.to_string(),
        }
    }
}

/// Running estimate plus the summary that would be sent.
#[derive(Debug, Clone, Serialize)]
pub struct QuoteResponse {
    pub total: u64,
    pub total_display: String,
    pub hours: u64,
    pub lines: Vec<QuoteLineResponse>,
    pub subject: String,
    pub message: String,
}

impl From<BookingSummary> for QuoteResponse {
    fn from(summary: BookingSummary) -> Self {
        Self {
            total: summary.quote.total.value(),
            total_display: summary.quote.total.to_string(),
            hours: summary.quote.hours,
            lines: summary
                .quote
                .lines
                .into_iter()
                .map(QuoteLineResponse::from)
                .collect(),
            subject: summary.subject,
            message: summary.message,
        }
    }
}

/// Link the client should open.
#[derive(Debug, Clone, Serialize)]
pub struct HandoffResponse {
    pub channel: HandoffChannel,
    pub url: String,
    pub total: u64,
    pub total_display: String,
}

impl From<BookingHandoff> for HandoffResponse {
    fn from(handoff: BookingHandoff) -> Self {
        Self {
            channel: handoff.channel,
            url: handoff.url,
            total: handoff.total.value(),
            total_display: handoff.total.to_string(),
        }
    }
}
