use chrono::{DateTime, Utc};

use crate::domain::{ConfirmOutcome, ContactInfo, Order};

/// Custom actions for Order entities.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Overwrites contact details and marks the order submitted.
    /// Re-submission overwrites again; there is no guard against it.
    SubmitContact(ContactInfo),
    /// Compares the supplied confirmation code against the expected one,
    /// recomputed by the caller from the order's current state.
    Confirm {
        supplied: String,
        expected: String,
        at: DateTime<Utc>,
    },
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone)]
pub enum OrderActionResult {
    /// The updated order after contact submission.
    SubmitContact(Order),
    /// What the confirmation-link visit produced.
    Confirm(ConfirmOutcome),
}
