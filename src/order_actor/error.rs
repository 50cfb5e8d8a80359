use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during order operations.
///
/// A mismatched confirmation code is not an error; see
/// [`crate::domain::ConfirmOutcome`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(Uuid),
    #[error("Pizza not found: {0}")]
    PizzaNotFound(Uuid),
    #[error("Malformed order id: {0}")]
    MalformedId(String),
    #[error("Order validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
