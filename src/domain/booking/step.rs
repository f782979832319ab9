//! Booking form steps.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// The four ordered steps of the booking form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStep {
    #[default]
    Services,
    Personal,
    Details,
    Submit,
}

impl BookingStep {
    /// 1-based position shown in the progress indicator.
    pub fn number(&self) -> u8 {
        match self {
            BookingStep::Services => 1,
            BookingStep::Personal => 2,
            BookingStep::Details => 3,
            BookingStep::Submit => 4,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            BookingStep::Services => "Services",
            BookingStep::Personal => "Personal",
            BookingStep::Details => "Details",
            BookingStep::Submit => "Submit",
        }
    }

    /// The following step, if any.
    pub fn following(&self) -> Option<BookingStep> {
        match self {
            BookingStep::Services => Some(BookingStep::Personal),
            BookingStep::Personal => Some(BookingStep::Details),
            BookingStep::Details => Some(BookingStep::Submit),
            BookingStep::Submit => None,
        }
    }

    /// The preceding step, if any.
    pub fn preceding(&self) -> Option<BookingStep> {
        match self {
            BookingStep::Services => None,
            BookingStep::Personal => Some(BookingStep::Services),
            BookingStep::Details => Some(BookingStep::Personal),
            BookingStep::Submit => Some(BookingStep::Details),
        }
    }

    /// True for the last step, where only the handoff remains.
    pub fn is_final(&self) -> bool {
        self.following().is_none()
    }
}

impl StateMachine for BookingStep {
    fn can_transition_to(&self, target: &Self) -> bool {
        self.following() == Some(*target) || self.preceding() == Some(*target)
    }

    fn valid_transitions(&self) -> Vec<Self> {
        self.preceding().into_iter().chain(self.following()).collect()
    }
}
