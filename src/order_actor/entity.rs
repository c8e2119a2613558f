//! ResourceEntity implementation for [`SalesOrder`].
//!
//! - **Create** validates the payload, stamps `createdAt` and the initial history record.
//! - **Update** is refused: orders are immutable apart from their status.
//! - **ChangeStatus** checks the injected [`TransitionPolicy`] and appends to the history.
//! - **List** filters with [`OrderQuery`].

use super::actions::{OrderAction, OrderActionResult};
use super::error::OrderError;
use crate::model::{OrderCreate, OrderQuery, SalesOrder, StatusRecord, TransitionPolicy};
use async_trait::async_trait;
use chrono::{DateTime, Duration, SubsecRound, Utc};
use resource_framework::ResourceEntity;
use uuid::Uuid;

/// Current time at millisecond precision, the resolution history timestamps are kept at.
pub(crate) fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Timestamp for a new history record: `now`, or one millisecond after the last record
/// when the clock has not moved past it.
fn next_timestamp(history: &[StatusRecord], now: DateTime<Utc>) -> DateTime<Utc> {
    match history.last() {
        Some(last) if now <= last.date => last.date + Duration::milliseconds(1),
        _ => now,
    }
}

#[async_trait]
impl ResourceEntity for SalesOrder {
    type Id = Uuid;
    type Create = OrderCreate;
    type Update = ();
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Query = OrderQuery;
    type Context = TransitionPolicy;
    type Error = OrderError;

    fn id(&self) -> &Uuid {
        &self.id
    }

    fn from_create_params(id: Uuid, params: OrderCreate) -> Result<Self, Self::Error> {
        params.validate()?;
        Ok(SalesOrder::from_create(id, params, now()))
    }

    fn matches(&self, query: &OrderQuery) -> bool {
        self.matches_query(query)
    }

    async fn on_update(&mut self, _update: (), _ctx: &TransitionPolicy) -> Result<(), Self::Error> {
        Err(OrderError::Immutable)
    }

    /// Handles custom actions for the SalesOrder entity.
    ///
    /// # Actions
    /// - `ChangeStatus`: replaces `status` and appends `{status, date, note}`
    async fn handle_action(
        &mut self,
        action: OrderAction,
        policy: &TransitionPolicy,
    ) -> Result<OrderActionResult, Self::Error> {
        match action {
            OrderAction::ChangeStatus { status, note } => {
                if !policy.allows(self.status, status) {
                    return Err(OrderError::TransitionNotAllowed {
                        from: self.status,
                        to: status,
                    });
                }
                let record = StatusRecord {
                    status,
                    date: next_timestamp(&self.status_history, now()),
                    note: note
                        .map(|n| n.trim().to_string())
                        .filter(|n| !n.is_empty()),
                };
                self.status = status;
                self.status_history.push(record.clone());
                Ok(OrderActionResult::ChangeStatus(record))
            }
        }
    }
}
