use crate::clients::{InventoryClient, OrderClient};
use crate::config::{BackendKind, Config, ConfigError};
use crate::model::sample_catalog;
use resource_framework::{FileBackend, MemoryBackend, Snapshot, StorageBackend};
use std::sync::Arc;
use tracing::{error, info};

/// The runtime orchestrator for the sales-order desk.
///
/// `OrderDesk` is responsible for:
/// - **Storage**: Building the configured backend and the order list snapshot
/// - **Dependency Wiring**: Injecting the transition policy and pricing into the actors
/// - **Lifecycle Management**: Starting and stopping both actors
///
/// # Architecture
///
/// - **Order Actor**: Owns every sales order, persists the list after each change
/// - **Inventory Actor**: Serves the read-only catalog and resolves lookup prices
///
/// # Example
///
/// ```ignore
/// let desk = OrderDesk::new(&config)?;
///
/// let row = draft.first_item_id();
/// desk.inventory_client.attach_to_line(&mut draft, row, ItemId(1)).await?;
/// let order_id = desk.order_client.submit(draft).await?;
///
/// desk.shutdown().await?;
/// ```
pub struct OrderDesk {
    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    /// Client for interacting with the Inventory actor
    pub inventory_client: InventoryClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderDesk {
    /// Starts the desk on the storage backend named in `config`.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let backend: Arc<dyn StorageBackend> = match config.storage.backend {
            BackendKind::Memory => Arc::new(MemoryBackend::new()),
            BackendKind::File => Arc::new(FileBackend::new(&config.storage.path)),
        };
        Self::with_backend(config, backend)
    }

    /// Starts the desk on an explicit backend; `config.storage.backend` is ignored.
    pub fn with_backend(
        config: &Config,
        backend: Arc<dyn StorageBackend>,
    ) -> Result<Self, ConfigError> {
        let policy = config.lifecycle.transition_policy()?;
        let buffer_size = config.actors.buffer_size;

        // 1. Create actors
        let snapshot = Snapshot::new(backend, config.storage.key.clone());
        let (order_actor, order_client) = crate::order_actor::new(buffer_size, Some(snapshot));
        let (inventory_actor, inventory_client) =
            crate::inventory_actor::new(buffer_size, sample_catalog());

        // 2. Start actors with injected context
        let inventory_handle = tokio::spawn(inventory_actor.run(config.pricing.clone()));
        let order_handle = tokio::spawn(order_actor.run(policy));

        info!(key = %config.storage.key, policy = ?config.lifecycle.policy, "Order desk started");
        Ok(Self {
            order_client,
            inventory_client,
            handles: vec![inventory_handle, order_handle],
        })
    }

    /// Gracefully shuts down both actors.
    ///
    /// Dropping the clients closes the request channels; each actor finishes its queue
    /// and exits. Clones of the clients held elsewhere keep their actor alive, so drop
    /// those first.
    pub async fn shutdown(self) -> Result<(), tokio::task::JoinError> {
        info!("Shutting down order desk...");

        drop(self.order_client);
        drop(self.inventory_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(e);
            }
        }

        info!("Order desk shutdown complete.");
        Ok(())
    }
}
