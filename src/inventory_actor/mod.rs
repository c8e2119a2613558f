//! # Inventory Actor
//!
//! Read-only item catalog that order lines are looked up from.
//!
//! ## Structure
//!
//! - [`entity`] - [`ResourceEntity`](resource_framework::ResourceEntity) implementation for
//!   [`InventoryItem`] and the [`CatalogQuery`] filter
//! - [`error`] - [`InventoryError`]
//! - [`actions`] - [`InventoryAction::ResolvePrice`]
//! - [`new()`] - Factory function that seeds the actor and creates the client
//!
//! ## Price resolution
//!
//! Catalog records carry no price. `ResolvePrice` asks the actor's
//! [`PricingConfig`](crate::config::PricingConfig) context, which returns a per-material
//! override or the default placeholder price.
//!
//! ```rust
//! use sales_orders::config::PricingConfig;
//! use sales_orders::inventory_actor;
//! use sales_orders::model::{sample_catalog, ItemId};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = inventory_actor::new(32, sample_catalog());
//!     tokio::spawn(actor.run(PricingConfig::default()));
//!
//!     assert_eq!(client.resolve_price(ItemId(1)).await?, 100_000.0);
//!     assert_eq!(client.search("winter").await?.len(), 1);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::CatalogQuery;
pub use error::*;

use crate::clients::InventoryClient;
use crate::model::{InventoryItem, ItemId};
use resource_framework::ResourceActor;
use std::sync::atomic::{AtomicU32, Ordering};

/// Creates an Inventory actor seeded with `items` and its client.
pub fn new(
    buffer_size: usize,
    items: Vec<InventoryItem>,
) -> (ResourceActor<InventoryItem>, InventoryClient) {
    let first_free = items.iter().map(|item| item.id.0).max().unwrap_or(0) + 1;
    let item_id_counter = AtomicU32::new(first_free);
    let next_item_id = move || ItemId(item_id_counter.fetch_add(1, Ordering::SeqCst));

    let (actor, generic_client) = ResourceActor::new(buffer_size, next_item_id);
    (actor.with_items(items), InventoryClient::new(generic_client))
}
