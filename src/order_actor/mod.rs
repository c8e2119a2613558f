//! # Order Actor
//!
//! The sales-order repository: one [`ResourceActor`] owning every [`SalesOrder`], mirrored
//! to a [`Snapshot`] after each change.
//!
//! ## Structure
//!
//! - [`entity`] - [`ResourceEntity`](resource_framework::ResourceEntity) implementation for [`SalesOrder`]
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`actions`] - [`OrderAction`] and [`OrderActionResult`] for status changes
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Context
//!
//! The actor is started with the [`TransitionPolicy`](crate::model::TransitionPolicy)
//! deciding which status changes are accepted.
//!
//! ## Usage
//!
//! ```rust
//! use resource_framework::{MemoryBackend, Snapshot};
//! use sales_orders::model::{OrderDraft, OrderStatus, TransitionPolicy};
//! use sales_orders::order_actor;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let snapshot = Snapshot::new(Arc::new(MemoryBackend::new()), order_actor::STORAGE_KEY);
//!     let (actor, client) = order_actor::new(32, Some(snapshot));
//!     tokio::spawn(actor.run(TransitionPolicy::Free));
//!
//!     let mut draft = OrderDraft::default();
//!     draft.po_number = "PO-100".into();
//!     draft.customer_name = "Acme".into();
//!     draft.customer_address = "Jl. Sudirman 1".into();
//!     let row = draft.first_item_id();
//!     draft.set_description(row, "Valve caps")?;
//!
//!     let id = client.submit(draft).await?;
//!     client.change_status(id, OrderStatus::Done, Some("shipped".into())).await?;
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::OrderClient;
use crate::model::SalesOrder;
use resource_framework::{ResourceActor, Snapshot};
use uuid::Uuid;

/// Storage key the order list is kept under unless configured otherwise.
pub const STORAGE_KEY: &str = "salesOrders";

/// Creates a new Order actor and its client. Ids are random UUID v4s.
pub fn new(
    buffer_size: usize,
    snapshot: Option<Snapshot<SalesOrder>>,
) -> (ResourceActor<SalesOrder>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, Uuid::new_v4);
    let actor = match snapshot {
        Some(snapshot) => actor.with_snapshot(snapshot),
        None => actor,
    };
    (actor, OrderClient::new(generic_client))
}
