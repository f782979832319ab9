//! Booking form state and its field schema.
//!
//! Every field has a declared kind ([`FieldKind`]) and is changed only
//! through a tagged [`FieldUpdate`], so updates never depend on guessing
//! a value's type at runtime.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::errors::BookingError;
use super::pricing::parse_duration_hours;
use super::service::{EventType, ServiceKind};
use super::step::BookingStep;
use super::validation::validate_step;
use crate::domain::foundation::StateMachine;

/// Customer contact fields collected on the Personal step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

/// Scheduling fields collected on the Details step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDetails {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    /// Raw duration text; only the leading whole number of hours counts.
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub event_type: Option<EventType>,
    /// Empty when the customer has none.
    #[serde(default)]
    pub special_requirements: String,
}

/// Free-text fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextField {
    Name,
    Phone,
    Email,
    Date,
    Time,
    Duration,
    Location,
    SpecialRequirements,
}

impl TextField {
    pub fn name(&self) -> &'static str {
        match self {
            TextField::Name => "name",
            TextField::Phone => "phone",
            TextField::Email => "email",
            TextField::Date => "date",
            TextField::Time => "time",
            TextField::Duration => "duration",
            TextField::Location => "location",
            TextField::SpecialRequirements => "special_requirements",
        }
    }
}

/// Declared semantic type of a form field.
///
/// Service selection is a `Choice` (on or off), as is the optional event
/// type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Counter,
    Choice,
}

/// A single addressable field of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Text(TextField),
    Quantity(ServiceKind),
    Service(ServiceKind),
    EventType,
}

impl FormField {
    pub fn kind(&self) -> FieldKind {
        match self {
            FormField::Text(_) => FieldKind::Text,
            FormField::Quantity(_) => FieldKind::Counter,
            FormField::Service(_) | FormField::EventType => FieldKind::Choice,
        }
    }
}

/// A change to one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum FieldUpdate {
    SetText { field: TextField, value: String },
    Increment { service: ServiceKind },
    Decrement { service: ServiceKind },
    SetQuantity { service: ServiceKind, quantity: u32 },
    ToggleService { service: ServiceKind },
    SetEventType { event_type: Option<EventType> },
}

impl FieldUpdate {
    /// The field this update targets.
    pub fn field(&self) -> FormField {
        match self {
            FieldUpdate::SetText { field, .. } => FormField::Text(*field),
            FieldUpdate::Increment { service }
            | FieldUpdate::Decrement { service }
            | FieldUpdate::SetQuantity { service, .. } => FormField::Quantity(*service),
            FieldUpdate::ToggleService { service } => FormField::Service(*service),
            FieldUpdate::SetEventType { .. } => FormField::EventType,
        }
    }
}

/// Transient booking form for one visitor.
///
/// Quantities always stay within each service's `1..=max` range, and the
/// current step is always one the gates would have let the form reach.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "FormSnapshot")]
pub struct BookingForm {
    step: BookingStep,
    selected_services: BTreeSet<ServiceKind>,
    quantities: BTreeMap<ServiceKind, u32>,
    contact: ContactDetails,
    schedule: ScheduleDetails,
}

impl BookingForm {
    /// Creates an empty form at the first step with every quantity at 1.
    pub fn new() -> Self {
        Self {
            step: BookingStep::Services,
            selected_services: BTreeSet::new(),
            quantities: ServiceKind::ALL
                .into_iter()
                .map(|kind| (kind, ServiceKind::MIN_QUANTITY))
                .collect(),
            contact: ContactDetails::default(),
            schedule: ScheduleDetails::default(),
        }
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn selected_services(&self) -> &BTreeSet<ServiceKind> {
        &self.selected_services
    }

    pub fn is_selected(&self, service: ServiceKind) -> bool {
        self.selected_services.contains(&service)
    }

    pub fn quantity(&self, service: ServiceKind) -> u32 {
        self.quantities
            .get(&service)
            .copied()
            .unwrap_or(ServiceKind::MIN_QUANTITY)
    }

    pub fn contact(&self) -> &ContactDetails {
        &self.contact
    }

    pub fn schedule(&self) -> &ScheduleDetails {
        &self.schedule
    }

    /// Duration in whole hours; 0 when empty or not a number.
    pub fn duration_hours(&self) -> u64 {
        parse_duration_hours(&self.schedule.duration)
    }

    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Name => &self.contact.name,
            TextField::Phone => &self.contact.phone,
            TextField::Email => &self.contact.email,
            TextField::Date => &self.schedule.date,
            TextField::Time => &self.schedule.time,
            TextField::Duration => &self.schedule.duration,
            TextField::Location => &self.schedule.location,
            TextField::SpecialRequirements => &self.schedule.special_requirements,
        }
    }

    fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::Name => &mut self.contact.name,
            TextField::Phone => &mut self.contact.phone,
            TextField::Email => &mut self.contact.email,
            TextField::Date => &mut self.schedule.date,
            TextField::Time => &mut self.schedule.time,
            TextField::Duration => &mut self.schedule.duration,
            TextField::Location => &mut self.schedule.location,
            TextField::SpecialRequirements => &mut self.schedule.special_requirements,
        }
    }

    /// Applies one field update. Updates never change the current step.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::SetText { field, value } => *self.text_mut(field) = value,
            FieldUpdate::Increment { service } => {
                let quantity = self.quantity(service).saturating_add(1);
                self.set_quantity(service, quantity);
            }
            FieldUpdate::Decrement { service } => {
                let quantity = self.quantity(service).saturating_sub(1);
                self.set_quantity(service, quantity);
            }
            FieldUpdate::SetQuantity { service, quantity } => self.set_quantity(service, quantity),
            FieldUpdate::ToggleService { service } => {
                if !self.selected_services.remove(&service) {
                    self.selected_services.insert(service);
                }
            }
            FieldUpdate::SetEventType { event_type } => self.schedule.event_type = event_type,
        }
    }

    /// Applies updates in order.
    pub fn apply_all(&mut self, updates: impl IntoIterator<Item = FieldUpdate>) {
        for update in updates {
            self.apply(update);
        }
    }

    fn set_quantity(&mut self, service: ServiceKind, quantity: u32) {
        self.quantities.insert(service, service.clamp_quantity(quantity));
    }

    /// Moves to the following step if the current step's gate passes.
    ///
    /// On failure the form is left exactly as it was.
    pub fn next(&mut self) -> Result<BookingStep, BookingError> {
        let target = self
            .step
            .following()
            .ok_or_else(|| BookingError::invalid_step("The booking is already at the final step"))?;
        validate_step(self)?;
        self.step = self.step.transition_to(target)?;
        Ok(self.step)
    }

    /// Moves back one step. Always permitted; stays put on the first step.
    pub fn previous(&mut self) -> BookingStep {
        if let Some(target) = self.step.preceding() {
            self.step = target;
        }
        self.step
    }
}

impl Default for BookingForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Wire shape of a form as sent back by a client.
///
/// Converted through [`BookingForm::from`], which clamps quantities and
/// walks the step gates so a client cannot claim a step it never reached.
#[derive(Debug, Deserialize)]
struct FormSnapshot {
    #[serde(default)]
    step: BookingStep,
    #[serde(default)]
    selected_services: BTreeSet<ServiceKind>,
    #[serde(default)]
    quantities: BTreeMap<ServiceKind, u32>,
    #[serde(default)]
    contact: ContactDetails,
    #[serde(default)]
    schedule: ScheduleDetails,
}

impl From<FormSnapshot> for BookingForm {
    fn from(snapshot: FormSnapshot) -> Self {
        let mut form = BookingForm::new();
        form.selected_services = snapshot.selected_services;
        for (service, quantity) in snapshot.quantities {
            form.set_quantity(service, quantity);
        }
        form.contact = snapshot.contact;
        form.schedule = snapshot.schedule;

        while form.step < snapshot.step {
            if form.next().is_err() {
                break;
            }
        }
        form
    }
}
