use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur while composing or fetching pizzas.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PizzaError {
    #[error("Pizza not found: {0}")]
    NotFound(Uuid),
    #[error("Unrecognized dough: {0}")]
    InvalidDough(String),
    #[error("Unknown ingredient: {0}")]
    UnknownIngredient(Uuid),
    #[error("Pizza validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
