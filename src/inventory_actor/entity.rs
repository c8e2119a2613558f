//! ResourceEntity implementation for [`InventoryItem`].
//!
//! The catalog is seeded when the actor is built and cannot be created, updated or
//! deleted through it. `Create` and `Update` are uninhabited, and `on_delete` vetoes.
//! Prices come from the injected [`PricingConfig`] rather than from the item.

use super::actions::{InventoryAction, InventoryActionResult};
use super::error::InventoryError;
use crate::config::PricingConfig;
use crate::model::{InventoryItem, ItemId};
use async_trait::async_trait;
use resource_framework::ResourceEntity;
use std::convert::Infallible;

/// Catalog search term, matched against the material description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogQuery {
    pub term: String,
}

#[async_trait]
impl ResourceEntity for InventoryItem {
    type Id = ItemId;
    type Create = Infallible;
    type Update = Infallible;
    type Action = InventoryAction;
    type ActionResult = InventoryActionResult;
    type Query = CatalogQuery;
    type Context = PricingConfig;
    type Error = InventoryError;

    fn id(&self) -> &ItemId {
        &self.id
    }

    fn from_create_params(_id: ItemId, params: Infallible) -> Result<Self, Self::Error> {
        match params {}
    }

    fn matches(&self, query: &CatalogQuery) -> bool {
        self.matches_term(&query.term)
    }

    async fn on_update(
        &mut self,
        update: Infallible,
        _ctx: &PricingConfig,
    ) -> Result<(), Self::Error> {
        match update {}
    }

    async fn on_delete(&self, _ctx: &PricingConfig) -> Result<(), Self::Error> {
        Err(InventoryError::ReadOnly)
    }

    async fn handle_action(
        &mut self,
        action: InventoryAction,
        pricing: &PricingConfig,
    ) -> Result<InventoryActionResult, Self::Error> {
        match action {
            InventoryAction::ResolvePrice => Ok(InventoryActionResult::ResolvePrice(
                pricing.price_for(&self.material_ci),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_catalog;
    use std::collections::HashMap;

    #[tokio::test]
    async fn resolve_price_uses_default_or_override() {
        let mut catalog = sample_catalog();
        let pricing = PricingConfig {
            default_price: 100_000.0,
            overrides: HashMap::from([("T-2557016-MIC".to_string(), 1_250_000.0)]),
        };

        assert_eq!(
            catalog[0]
                .handle_action(InventoryAction::ResolvePrice, &pricing)
                .await
                .unwrap(),
            InventoryActionResult::ResolvePrice(100_000.0)
        );
        assert_eq!(
            catalog[1]
                .handle_action(InventoryAction::ResolvePrice, &pricing)
                .await
                .unwrap(),
            InventoryActionResult::ResolvePrice(1_250_000.0)
        );
    }

    #[tokio::test]
    async fn delete_is_vetoed() {
        let item = sample_catalog().remove(0);
        assert_eq!(
            item.on_delete(&PricingConfig::default()).await,
            Err(InventoryError::ReadOnly)
        );
    }
}
