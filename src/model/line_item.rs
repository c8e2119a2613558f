//! One product row of an order.

use crate::model::{DraftError, InventoryItem};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A product row with quantity, unit price and the derived row total.
///
/// Fields are private so that `total` always equals `quantity × price`. Rows filled
/// from the catalog are marked `from_lookup` and refuse manual price edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "StoredLineItem")]
pub struct LineItem {
    id: Uuid,
    product_description: String,
    quantity: u32,
    price: f64,
    total: f64,
    from_lookup: bool,
}

/// Persisted row layout. The stored `total` is ignored and recomputed on load.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredLineItem {
    id: Uuid,
    product_description: String,
    quantity: u32,
    price: f64,
    #[serde(default)]
    from_lookup: bool,
}

impl From<StoredLineItem> for LineItem {
    fn from(stored: StoredLineItem) -> Self {
        let mut item = Self {
            id: stored.id,
            product_description: stored.product_description,
            quantity: stored.quantity,
            price: stored.price,
            total: 0.0,
            from_lookup: stored.from_lookup,
        };
        item.recompute();
        item
    }
}

impl Default for LineItem {
    fn default() -> Self {
        Self::new()
    }
}

impl LineItem {
    /// A blank row: no description, quantity 1, price 0.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            product_description: String::new(),
            quantity: 1,
            price: 0.0,
            total: 0.0,
            from_lookup: false,
        }
    }

    /// A manually entered row.
    pub fn manual(description: impl Into<String>, quantity: u32, price: f64) -> Self {
        let mut item = Self::new();
        item.product_description = description.into();
        item.quantity = quantity;
        item.price = price;
        item.recompute();
        item
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn product_description(&self) -> &str {
        &self.product_description
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn from_lookup(&self) -> bool {
        self.from_lookup
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.product_description = description.into();
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.recompute();
    }

    pub fn set_price(&mut self, price: f64) -> Result<(), DraftError> {
        if self.from_lookup {
            return Err(DraftError::PriceLocked(self.id));
        }
        self.price = price;
        self.recompute();
        Ok(())
    }

    /// Applies a typed quantity. Text that is not a whole number is ignored and
    /// `false` is returned; the previous quantity and total stay in place.
    pub fn edit_quantity(&mut self, text: &str) -> bool {
        match text.trim().parse::<u32>() {
            Ok(quantity) => {
                self.set_quantity(quantity);
                true
            }
            Err(_) => false,
        }
    }

    /// Applies a typed price. Text that is not a finite number is ignored
    /// (`Ok(false)`); a catalog row refuses the edit either way.
    pub fn edit_price(&mut self, text: &str) -> Result<bool, DraftError> {
        if self.from_lookup {
            return Err(DraftError::PriceLocked(self.id));
        }
        match text.trim().parse::<f64>() {
            Ok(price) if price.is_finite() => {
                self.set_price(price)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Fills the row from a catalog item at the resolved `price` and locks the price.
    pub fn attach(&mut self, item: &InventoryItem, price: f64) {
        self.product_description = item.material_description.clone();
        self.price = price;
        self.from_lookup = true;
        self.recompute();
    }

    /// Checks the row for submission. `line` is the 1-based position used in errors.
    pub fn validate(&self, line: usize) -> Result<(), DraftError> {
        if self.product_description.trim().is_empty() {
            return Err(DraftError::InvalidItem {
                line,
                reason: "product description is required",
            });
        }
        if self.quantity < 1 {
            return Err(DraftError::InvalidItem {
                line,
                reason: "quantity must be at least 1",
            });
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(DraftError::InvalidItem {
                line,
                reason: "price must be a non-negative number",
            });
        }
        if !(f64::from(self.quantity) * self.price).is_finite() {
            return Err(DraftError::InvalidItem {
                line,
                reason: "line total is out of range",
            });
        }
        Ok(())
    }

    pub(crate) fn recompute(&mut self) {
        self.total = f64::from(self.quantity) * self.price;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_catalog;

    #[test]
    fn total_follows_quantity_and_price() {
        let mut item = LineItem::manual("Valve caps", 2, 50_000.0);
        assert_eq!(item.total(), 100_000.0);

        item.set_quantity(3);
        assert_eq!(item.total(), 150_000.0);

        item.set_price(1_500.5).unwrap();
        assert_eq!(item.total(), 4_501.5);
    }

    #[test]
    fn malformed_text_keeps_previous_values() {
        let mut item = LineItem::manual("Valve caps", 2, 10.0);

        assert!(!item.edit_quantity("two"));
        assert!(!item.edit_quantity("-1"));
        assert_eq!(item.edit_price("abc"), Ok(false));
        assert_eq!(item.edit_price("NaN"), Ok(false));
        assert_eq!((item.quantity(), item.price(), item.total()), (2, 10.0, 20.0));

        assert!(item.edit_quantity(" 4 "));
        assert_eq!(item.edit_price("2.5"), Ok(true));
        assert_eq!(item.total(), 10.0);
    }

    #[test]
    fn attached_rows_lock_the_price() {
        let catalog = sample_catalog();
        let mut item = LineItem::new();
        item.set_quantity(4);
        item.attach(&catalog[0], 100_000.0);

        assert!(item.from_lookup());
        assert_eq!(item.product_description(), "BF Goodrich 205/55/R16 All-Terrain");
        assert_eq!(item.total(), 400_000.0);
        assert_eq!(item.set_price(1.0), Err(DraftError::PriceLocked(item.id())));
        assert_eq!(item.edit_price("1"), Err(DraftError::PriceLocked(item.id())));

        // Quantity stays editable.
        assert!(item.edit_quantity("1"));
        assert_eq!(item.total(), 100_000.0);
    }

    #[test]
    fn validation() {
        assert!(LineItem::manual("Tyre", 1, 0.0).validate(1).is_ok());
        assert!(matches!(
            LineItem::new().validate(2),
            Err(DraftError::InvalidItem { line: 2, .. })
        ));
        assert!(LineItem::manual("Tyre", 0, 1.0).validate(1).is_err());
        assert!(LineItem::manual("Tyre", 1, -1.0).validate(1).is_err());
        assert!(LineItem::manual("Tyre", 1, f64::INFINITY).validate(1).is_err());
    }

    #[test]
    fn overflowing_row_total_is_invalid() {
        let item = LineItem::manual("Tyre", 2, 1e308);
        assert!(item.price().is_finite());
        assert_eq!(
            item.validate(3),
            Err(DraftError::InvalidItem {
                line: 3,
                reason: "line total is out of range",
            })
        );
    }

    #[test]
    fn serializes_in_camel_case() {
        let json = serde_json::to_value(LineItem::manual("Tyre", 2, 5.0)).unwrap();
        assert_eq!(json["productDescription"], "Tyre");
        assert_eq!(json["total"], 10.0);
        assert_eq!(json["fromLookup"], false);
    }

    #[test]
    fn stored_total_is_recomputed_on_load() {
        let json = r#"{
            "id": "6f1d2f8e-8a47-4a7a-9d43-0d3c1e0b9a11",
            "productDescription": "Tyre",
            "quantity": 3,
            "price": 20.0,
            "total": 999.0
        }"#;
        let item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.total(), 60.0);
        assert!(!item.from_lookup());
    }
}
