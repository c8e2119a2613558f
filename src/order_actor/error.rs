//! Error types for the Order actor.

use crate::model::{DraftError, OrderStatus};
use resource_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The order payload failed validation.
    #[error("Invalid order: {0}")]
    Invalid(#[from] DraftError),

    /// The configured transition policy refuses this status change.
    #[error("Status change from {from} to {to} is not allowed")]
    TransitionNotAllowed { from: OrderStatus, to: OrderStatus },

    /// Orders cannot be edited after creation; only their status changes.
    #[error("Orders are immutable after creation")]
    Immutable,

    /// The order list could not be rendered for export.
    #[error("Export failed: {0}")]
    Export(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => other
                .entity_error::<OrderError>()
                .cloned()
                .unwrap_or_else(|| OrderError::ActorCommunicationError(other.to_string())),
        }
    }
}
