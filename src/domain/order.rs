use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A customer order wrapping one pizza.
///
/// Created empty the moment a pizza is finalized; contact details arrive
/// later via submission, and confirmation happens through the emailed
/// link. `submitted` and `confirmed` are independent flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: Uuid,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub name: Option<String>,
    pub pizza_id: Uuid,
    pub submitted: bool,
    pub confirmed: bool,
    pub confirmed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a new draft order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub pizza_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Contact details collected when the customer submits an order.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub name: String,
}

impl ContactInfo {
    /// Field rules matching the storefront form: a plausible email plus
    /// bounded phone and name.
    pub fn validate(&self) -> Result<(), String> {
        if self.email.is_empty() || !self.email.contains('@') || self.email.len() > 254 {
            return Err(format!("invalid email address: {:?}", self.email));
        }
        if self.phone.len() > 14 {
            return Err("phone must be at most 14 characters".to_string());
        }
        if self.name.len() > 64 {
            return Err("name must be at most 64 characters".to_string());
        }
        Ok(())
    }
}

/// Outcome of visiting a confirmation link. An invalid token is a
/// user-visible message, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmOutcome {
    /// The code matched and the order is now confirmed.
    Confirmed(Order),
    /// The order was already confirmed; returned unchanged, code unchecked.
    AlreadyConfirmed(Order),
    /// The code did not match; nothing changed.
    InvalidToken,
}
