//! Error types for the Inventory actor.

use crate::model::DraftError;
use resource_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    /// The requested catalog item was not found.
    #[error("Catalog item not found: {0}")]
    NotFound(String),

    /// The catalog is reference data and cannot be changed.
    #[error("The catalog is read-only")]
    ReadOnly,

    /// The item was found but could not be attached to the order line.
    #[error("Cannot attach item to line: {0}")]
    Attach(#[from] DraftError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for InventoryError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => InventoryError::NotFound(id),
            other => other
                .entity_error::<InventoryError>()
                .cloned()
                .unwrap_or_else(|| InventoryError::ActorCommunicationError(other.to_string())),
        }
    }
}
