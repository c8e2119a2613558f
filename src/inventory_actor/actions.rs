//! Custom actions for the Inventory actor.

/// Custom actions for InventoryItem entities.
#[derive(Debug, Clone)]
pub enum InventoryAction {
    /// Looks up the unit price an order line gets when this item is attached.
    ResolvePrice,
}

/// Results from InventoryActions - variants match 1:1 with InventoryAction
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryActionResult {
    ResolvePrice(f64),
}
