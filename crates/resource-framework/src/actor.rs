//! # Generic Resource Actor
//!
//! `ResourceActor` is the repository half of the framework: it owns one collection,
//! processes requests strictly one at a time, and mirrors the collection to an optional
//! [`Snapshot`] after every successful mutation.

use crate::client::ResourceClient;
use crate::entity::ResourceEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::snapshot::Snapshot;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// The generic actor that owns a collection of resources.
///
/// Each actor processes its messages sequentially inside its own task, so the
/// store needs no `Mutex`. Multiple actors run in parallel.
///
/// # Usage Pattern
///
/// 1. **Create**: `ResourceActor::new()` returns the actor and its client.
/// 2. **Configure**: optionally attach a [`Snapshot`] and seed items.
/// 3. **Run**: spawn `actor.run(context)`.
///
/// ```rust
/// use resource_framework::{MemoryBackend, ResourceActor, ResourceEntity, Snapshot};
/// use async_trait::async_trait;
/// use serde::{Deserialize, Serialize};
/// use std::sync::atomic::{AtomicU32, Ordering};
/// use std::sync::Arc;
///
/// #[derive(Clone, Debug, Serialize, Deserialize)]
/// struct Note { id: u32, text: String }
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// #[async_trait]
/// impl ResourceEntity for Note {
///     type Id = u32; type Create = String; type Update = String;
///     type Action = (); type ActionResult = (); type Query = ();
///     type Context = (); type Error = NoteError;
///     fn id(&self) -> &u32 { &self.id }
///     fn from_create_params(id: u32, text: String) -> Result<Self, NoteError> { Ok(Self { id, text }) }
///     async fn on_update(&mut self, text: String, _: &()) -> Result<(), NoteError> { self.text = text; Ok(()) }
///     async fn handle_action(&mut self, _: (), _: &()) -> Result<(), NoteError> { Ok(()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let counter = AtomicU32::new(1);
///     let (actor, client) =
///         ResourceActor::<Note>::new(10, move || counter.fetch_add(1, Ordering::SeqCst));
///     let actor = actor.with_snapshot(Snapshot::new(Arc::new(MemoryBackend::new()), "notes"));
///     tokio::spawn(actor.run(()));
///
///     let id = client.create("hello".to_string()).await.unwrap();
///     assert_eq!(client.list(()).await.unwrap().len(), 1);
///     client.delete(id).await.unwrap();
/// }
/// ```
///
/// # Operations
///
/// * **Create**: generate an id, call `from_create_params`, then `on_create`, then store and persist.
/// * **Get**: clone of the stored resource, or `None`.
/// * **List**: clones of every resource accepted by `matches`, in insertion order.
/// * **Update**: `on_update` on the stored resource, persist, return the new state.
/// * **Delete**: `on_delete`, remove, persist.
/// * **Action**: `handle_action` on the stored resource, persist on success.
///
/// A failing hook leaves the stored resource untouched for Create and Delete. Update and
/// Action hooks mutate in place, so they should validate before changing fields.
pub struct ResourceActor<T: ResourceEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    order: Vec<T::Id>,
    next_id: Box<dyn Fn() -> T::Id + Send + Sync>,
    snapshot: Option<Snapshot<T>>,
}

impl<T: ResourceEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the request channel. Callers wait when it is full.
    /// * `next_id` - Id generator invoked once per Create request.
    pub fn new(
        buffer_size: usize,
        next_id: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            order: Vec::new(),
            next_id: Box::new(next_id),
            snapshot: None,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Mirrors the collection to `snapshot`: loaded when `run` starts, saved after each change.
    pub fn with_snapshot(mut self, snapshot: Snapshot<T>) -> Self {
        self.snapshot = Some(snapshot);
        self
    }

    /// Inserts resources before the actor starts. Seeded items are not written to the
    /// snapshot until the first mutation.
    pub fn with_items(mut self, items: impl IntoIterator<Item = T>) -> Self {
        for item in items {
            self.insert(item);
        }
        self
    }

    fn insert(&mut self, item: T) {
        let id = item.id().clone();
        if self.store.insert(id.clone(), item).is_none() {
            self.order.push(id);
        }
    }

    fn remove(&mut self, id: &T::Id) {
        if self.store.remove(id).is_some() {
            self.order.retain(|existing| existing != id);
        }
    }

    fn ordered(&self) -> impl Iterator<Item = &T> {
        self.order.iter().filter_map(|id| self.store.get(id))
    }

    async fn restore(&mut self, entity_type: &str) {
        let Some(snapshot) = self.snapshot.clone() else {
            return;
        };
        match snapshot.load().await {
            Ok(items) => {
                for item in items {
                    self.insert(item);
                }
                info!(entity_type, key = snapshot.key(), size = self.store.len(), "Restored");
            }
            Err(e) => {
                warn!(entity_type, key = snapshot.key(), error = %e, "Restore failed, starting empty");
            }
        }
    }

    async fn persist(&self, entity_type: &str) {
        let Some(snapshot) = &self.snapshot else {
            return;
        };
        let items: Vec<T> = self.ordered().cloned().collect();
        if let Err(e) = snapshot.save(&items).await {
            error!(entity_type, key = snapshot.key(), error = %e, "Persist failed");
        }
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// # Context Injection
    /// `context` is passed to every entity hook, which lets entities reach dependencies
    /// that were created after the actor itself.
    pub async fn run(mut self, context: T::Context) {
        // e.g. "SalesOrder" instead of "sales_orders::model::order::SalesOrder"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        self.restore(entity_type).await;
        info!(entity_type, size = self.store.len(), "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = (self.next_id)();

                    let mut item = match T::from_create_params(id.clone(), params) {
                        Ok(item) => item,
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                    };
                    if let Err(e) = item.on_create(&context).await {
                        warn!(entity_type, error = %e, "on_create failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.insert(item);
                    self.persist(entity_type).await;
                    info!(entity_type, %id, size = self.store.len(), "Created");
                    let _ = respond_to.send(Ok(id));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { query, respond_to } => {
                    let items: Vec<T> = self
                        .ordered()
                        .filter(|item| item.matches(&query))
                        .cloned()
                        .collect();
                    debug!(entity_type, ?query, matched = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(item) = self.store.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = item.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    let updated = item.clone();
                    self.persist(entity_type).await;
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(updated));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(item) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = item.on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.remove(&id);
                    self.persist(entity_type).await;
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(()));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(item) = self.store.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let result = item
                        .handle_action(action, &context)
                        .await
                        .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                    match &result {
                        Ok(_) => {
                            self.persist(entity_type).await;
                            info!(entity_type, %id, "Action ok");
                        }
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
