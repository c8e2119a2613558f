//! # Inventory Client
//!
//! Provides a high‑level API for the catalog actor: search, price resolution and
//! filling order lines from catalog items.
use crate::inventory_actor::{CatalogQuery, InventoryAction, InventoryActionResult, InventoryError};
use crate::model::{InventoryItem, ItemId, OrderDraft};
use async_trait::async_trait;
use resource_framework::{DomainClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};
use uuid::Uuid;

/// Client for interacting with the Inventory actor.
#[derive(Clone)]
pub struct InventoryClient {
    inner: ResourceClient<InventoryItem>,
}

#[async_trait]
impl DomainClient<InventoryItem> for InventoryClient {
    type Error = InventoryError;

    fn inner(&self) -> &ResourceClient<InventoryItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        InventoryError::from(e)
    }
}

impl InventoryClient {
    pub fn new(inner: ResourceClient<InventoryItem>) -> Self {
        Self { inner }
    }

    /// Catalog items whose material description contains `term`, in id order.
    pub async fn search(&self, term: &str) -> Result<Vec<InventoryItem>, InventoryError> {
        self.list(CatalogQuery {
            term: term.to_string(),
        })
        .await
    }

    /// The unit price an order line gets for this item.
    #[instrument(skip(self))]
    pub async fn resolve_price(&self, id: ItemId) -> Result<f64, InventoryError> {
        debug!("Resolving price for item {}", id);
        match self
            .inner
            .perform_action(id, InventoryAction::ResolvePrice)
            .await
        {
            Ok(InventoryActionResult::ResolvePrice(price)) => Ok(price),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    /// Fills line `row` of `draft` from catalog item `id`: description from the
    /// catalog, price from [`InventoryClient::resolve_price`], price locked afterwards.
    #[instrument(skip(self, draft))]
    pub async fn attach_to_line(
        &self,
        draft: &mut OrderDraft,
        row: Uuid,
        id: ItemId,
    ) -> Result<(), InventoryError> {
        let item = self
            .get(id)
            .await?
            .ok_or_else(|| InventoryError::NotFound(id.to_string()))?;
        let price = self.resolve_price(id).await?;
        draft.attach_lookup(row, &item, price)?;
        debug!(material = %item.material_ci, price, "Attached catalog item");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{sample_catalog, DraftError};
    use resource_framework::mock::{create_mock_client, expect_action, MockClient};

    #[tokio::test]
    async fn test_resolve_price_returns_action_result() {
        let (client, mut receiver) = create_mock_client::<InventoryItem>(10);
        let inventory_client = InventoryClient::new(client);

        let price_task =
            tokio::spawn(async move { inventory_client.resolve_price(ItemId(3)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, ItemId(3));
        assert!(matches!(action, InventoryAction::ResolvePrice));

        responder
            .send(Ok(InventoryActionResult::ResolvePrice(250_000.0)))
            .unwrap();
        assert_eq!(price_task.await.unwrap(), Ok(250_000.0));
    }

    #[tokio::test]
    async fn attach_fills_the_row_with_catalog_data() {
        let catalog = sample_catalog();
        let mut mock = MockClient::<InventoryItem>::new();
        mock.expect_get(ItemId(2)).return_ok(Some(catalog[1].clone()));
        mock.expect_action(ItemId(2))
            .return_ok(InventoryActionResult::ResolvePrice(100_000.0));

        let mut draft = OrderDraft::default();
        let row = draft.first_item_id();
        draft.edit_quantity(row, "3").unwrap();

        InventoryClient::new(mock.client())
            .attach_to_line(&mut draft, row, ItemId(2))
            .await
            .unwrap();

        let line = draft.item(row).unwrap();
        assert!(line.from_lookup());
        assert_eq!(line.product_description(), "Michelin 255/70/R16 Highway Terrain");
        assert_eq!(line.price(), 100_000.0);
        assert_eq!(draft.total_amount(), 300_000.0);
        assert_eq!(draft.edit_price(row, "1"), Err(DraftError::PriceLocked(row)));
        mock.verify();
    }

    #[tokio::test]
    async fn attach_unknown_item_leaves_the_draft_alone() {
        let mut mock = MockClient::<InventoryItem>::new();
        mock.expect_get(ItemId(99)).return_ok(None);

        let mut draft = OrderDraft::default();
        let before = draft.clone();
        let row = draft.first_item_id();

        let result = InventoryClient::new(mock.client())
            .attach_to_line(&mut draft, row, ItemId(99))
            .await;
        assert_eq!(result, Err(InventoryError::NotFound("99".into())));
        assert_eq!(draft, before);
        mock.verify();
    }

    #[tokio::test]
    async fn attach_to_unknown_row_is_a_draft_error() {
        let mut mock = MockClient::<InventoryItem>::new();
        mock.expect_get(ItemId(1))
            .return_ok(Some(sample_catalog().remove(0)));
        mock.expect_action(ItemId(1))
            .return_ok(InventoryActionResult::ResolvePrice(1.0));

        let mut draft = OrderDraft::default();
        let row = Uuid::new_v4();
        let result = InventoryClient::new(mock.client())
            .attach_to_line(&mut draft, row, ItemId(1))
            .await;
        assert_eq!(
            result,
            Err(InventoryError::Attach(DraftError::UnknownRow(row)))
        );
    }
}
