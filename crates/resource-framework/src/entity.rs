//! # ResourceEntity Trait
//!
//! The `ResourceEntity` trait is the contract every stored resource (sales orders,
//! catalog items, ...) implements so that a generic [`ResourceActor`](crate::ResourceActor)
//! can own a collection of it. It fixes the associated types for ids, DTOs, actions,
//! list queries, runtime context and errors, and provides lifecycle hooks
//! (`on_create`, `on_update`, `on_delete`, `handle_action`).
//!
//! # Provided Methods (Hooks)
//! - [`ResourceEntity::on_create`]
//! - [`ResourceEntity::on_delete`]
//! - [`ResourceEntity::matches`]
//!
//! The defaults accept everything (`Ok(())` / `true`).
//!
//! # Persistence
//! Entities are `Serialize + DeserializeOwned` so that the actor can write its whole
//! collection through a [`Snapshot`](crate::Snapshot) after every mutation and read it
//! back on start-up.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they can call other actors. The `Context` type is
/// injected into every hook when the actor starts running, which lets dependencies
/// (other clients, policies, pricing tables) be wired after construction.
#[async_trait]
pub trait ResourceEntity: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The unique identifier for this resource (e.g. `Uuid`, `u32`).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Payload required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Payload required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations (e.g. `ChangeStatus`).
    type Action: Send + Sync + Debug;

    /// Result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Filter used by `list` requests.
    type Query: Send + Sync + Debug;

    /// Runtime dependencies injected into the actor. Use `()` if none are needed.
    type Context: Send + Sync;

    /// Per-resource error type, surfaced to callers boxed inside
    /// [`FrameworkError::EntityError`](crate::FrameworkError::EntityError).
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier this instance is stored under.
    ///
    /// Used when a persisted collection is loaded back into the actor.
    fn id(&self) -> &Self::Id;

    /// Construct the full resource from a freshly generated id and its payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Whether this instance is part of the result of a `list` request.
    fn matches(&self, _query: &Self::Query) -> bool {
        true
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called after the resource is constructed and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the resource is removed. Returning an error vetoes the delete.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
