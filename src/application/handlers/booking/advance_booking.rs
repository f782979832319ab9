//! AdvanceBookingHandler - Command handler for moving through the form steps.

use serde::{Deserialize, Serialize};

use crate::domain::booking::{BookingError, BookingForm, FieldUpdate};

/// Which way to move the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepDirection {
    #[default]
    Next,
    Previous,
}

/// Command to apply field updates and then change step.
#[derive(Debug, Clone)]
pub struct AdvanceBookingCommand {
    pub form: BookingForm,
    pub updates: Vec<FieldUpdate>,
    pub direction: StepDirection,
}

/// Handler for step navigation.
#[derive(Debug, Default)]
pub struct AdvanceBookingHandler;

impl AdvanceBookingHandler {
    pub fn new() -> Self {
        Self
    }

    /// Returns the form at its new step.
    ///
    /// A refused `Next` reports the first failing field and nothing else.
    pub fn handle(&self, cmd: AdvanceBookingCommand) -> Result<BookingForm, BookingError> {
        let mut form = cmd.form;
        for update in &cmd.updates {
            let field = update.field();
            tracing::trace!(field = ?field, kind = ?field.kind(), "Applying booking form update");
        }
        form.apply_all(cmd.updates);

        let from = form.step();
        match cmd.direction {
            StepDirection::Next => {
                form.next()?;
            }
            StepDirection::Previous => {
                form.previous();
            }
        }

        tracing::debug!(from = ?from, to = ?form.step(), "Booking step changed");
        Ok(form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::booking::{BookingStep, ServiceKind, TextField};

    fn command(form: BookingForm, updates: Vec<FieldUpdate>, direction: StepDirection) -> AdvanceBookingCommand {
        AdvanceBookingCommand {
            form,
            updates,
            direction,
        }
    }

    #[test]
    fn applies_updates_before_checking_the_gate() {
        let handler = AdvanceBookingHandler::new();
        let cmd = command(
            BookingForm::new(),
            vec![FieldUpdate::ToggleService {
                service: ServiceKind::Valet,
            }],
            StepDirection::Next,
        );

        let form = handler.handle(cmd).unwrap();

        assert_eq!(form.step(), BookingStep::Personal);
        assert!(form.is_selected(ServiceKind::Valet));
    }

    #[test]
    fn refuses_next_without_services() {
        let handler = AdvanceBookingHandler::new();
        let err = handler
            .handle(command(BookingForm::new(), vec![], StepDirection::Next))
            .unwrap_err();

        assert_eq!(err.field(), Some("services"));
    }

    #[test]
    fn reports_the_first_missing_contact_field() {
        let handler = AdvanceBookingHandler::new();
        let mut form = BookingForm::new();
        form.apply(FieldUpdate::ToggleService {
            service: ServiceKind::Bouncer,
        });
        form.next().unwrap();

        let updates = vec![FieldUpdate::SetText {
            field: TextField::Phone,
            value: "12345".to_string(),
        }];
        let err = handler
            .handle(command(form, updates, StepDirection::Next))
            .unwrap_err();

        assert_eq!(err.field(), Some("name"));
    }

    #[test]
    fn previous_on_first_step_stays_put() {
        let handler = AdvanceBookingHandler::new();
        let form = handler
            .handle(command(BookingForm::new(), vec![], StepDirection::Previous))
            .unwrap();
        assert_eq!(form.step(), BookingStep::Services);
    }

    #[test]
    fn direction_deserializes_lowercase() {
        let direction: StepDirection = serde_json::from_str("\"previous\"").unwrap();
        assert_eq!(direction, StepDirection::Previous);
    }
}
