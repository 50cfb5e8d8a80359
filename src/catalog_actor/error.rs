use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Ingredient group not found: {0}")]
    GroupNotFound(Uuid),
    #[error("Ingredient not found: {0}")]
    IngredientNotFound(Uuid),
    #[error("Catalog validation error: {0}")]
    ValidationError(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
