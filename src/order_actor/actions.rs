//! Custom actions for the Order actor.
//!
//! Orders are immutable after creation except for their status, which moves through
//! [`OrderAction::ChangeStatus`]. The action is handled by
//! [`ResourceEntity::handle_action`](resource_framework::ResourceEntity::handle_action).

use crate::model::{OrderStatus, StatusRecord};

/// Custom actions for SalesOrder entities.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Moves the order to `status` and appends a history record.
    ///
    /// A note that is blank after trimming is stored as absent.
    ///
    /// # Errors
    /// Fails if the configured transition policy does not allow the change.
    ChangeStatus {
        status: OrderStatus,
        note: Option<String>,
    },
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone)]
pub enum OrderActionResult {
    /// The history record that was appended.
    ChangeStatus(StatusRecord),
}
