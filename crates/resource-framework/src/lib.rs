//! # Resource Framework
//!
//! Building blocks for keeping typed collections inside actors. Each collection (sales
//! orders, the item catalog, ...) lives in its own [`ResourceActor`], is reached through
//! a cloneable [`ResourceClient`], and can be mirrored to a key/value store as one JSON
//! array through a [`Snapshot`].
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ResourceEntity`]) - the resource, its payloads and its hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - sequential message processing and persistence
//! 3. **Interface Layer** ([`ResourceClient`], [`DomainClient`]) - typed requests
//! 4. **Storage Layer** ([`StorageBackend`], [`Snapshot`]) - where collections are kept
//!
//! ## Context Injection Pattern
//!
//! Dependencies are passed to [`ResourceActor::run`], not to the constructor. An order
//! actor can therefore receive the client of a catalog actor that was created alongside it:
//!
//! ```rust,ignore
//! let (catalog_actor, catalog_client) = ResourceActor::<InventoryItem>::new(32, next_item_id);
//! let (order_actor, order_client) = ResourceActor::<SalesOrder>::new(32, Uuid::new_v4);
//!
//! tokio::spawn(catalog_actor.run(pricing));
//! tokio::spawn(order_actor.run(OrderContext { policy, catalog: catalog_client.clone() }));
//! ```
//!
//! ## Persistence
//!
//! An actor with a snapshot loads the stored array before serving its first request and
//! rewrites it after every successful Create, Update, Delete or Action. A stored array
//! that cannot be decoded is logged and the actor starts empty. A failed write is logged
//! and the request still succeeds; the in-memory collection stays authoritative.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor
//! - Actors shut down when the last client clone is dropped
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers requests from queued expectations so client-side logic can
//! be tested without spawning actors. See the [`mock`] module.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod snapshot;
pub mod storage;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::DomainClient;
pub use entity::ResourceEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use snapshot::Snapshot;
pub use storage::{FileBackend, MemoryBackend, StorageBackend, StorageError};
