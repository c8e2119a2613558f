//! # DomainClient Trait
//!
//! Shared `get`, `list` and `delete` for resource-specific clients built on top of a
//! generic [`ResourceClient`].
use crate::{FrameworkError, ResourceClient, ResourceEntity};
use async_trait::async_trait;

/// Trait for domain clients to inherit the standard read and delete operations.
///
/// Implementors provide access to the inner client and a mapping from
/// [`FrameworkError`] to their own error type; everything else is provided.
///
/// ```rust,ignore
/// #[async_trait]
/// impl DomainClient<SalesOrder> for OrderClient {
///     type Error = OrderError;
///     fn inner(&self) -> &ResourceClient<SalesOrder> { &self.inner }
///     fn map_error(e: FrameworkError) -> OrderError { OrderError::from(e) }
/// }
///
/// let orders = order_client.list(OrderQuery::default()).await?;
/// ```
#[async_trait]
pub trait DomainClient<T: ResourceEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic client.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a resource by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// List the resources matching `query`.
    #[tracing::instrument(skip(self))]
    async fn list(&self, query: T::Query) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(query).await.map_err(Self::map_error)
    }

    /// Delete a resource by id.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
