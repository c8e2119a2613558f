//! Order form state before submission.

use crate::model::{InventoryItem, LineItem, OrderCreate, OrderStatus};
use chrono::{NaiveDate, Utc};
use thiserror::Error;
use uuid::Uuid;

/// Errors raised while editing or submitting a draft.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DraftError {
    /// A required header field is blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The PO date is not a `YYYY-MM-DD` calendar date.
    #[error("Invalid PO date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("An order needs at least one line item")]
    NoItems,

    /// A line item failed validation. `line` is 1-based.
    #[error("Line {line}: {reason}")]
    InvalidItem { line: usize, reason: &'static str },

    /// The row was filled from the catalog; its price cannot be edited.
    #[error("Price of line item {0} comes from the catalog and cannot be edited")]
    PriceLocked(Uuid),

    /// The order total does not fit a finite number.
    #[error("Order total is out of range")]
    TotalOutOfRange,

    #[error("The first line item cannot be removed")]
    FirstRowRequired,

    #[error("Unknown line item: {0}")]
    UnknownRow(Uuid),
}

/// Editable order form.
///
/// A draft always holds at least one line item and keeps `total_amount` equal to
/// the sum of its row totals after every edit. [`OrderDraft::submit`] validates it
/// and turns it into the [`OrderCreate`] payload sent to the order actor.
///
/// ```rust
/// use sales_orders::model::OrderDraft;
///
/// let mut draft = OrderDraft::default();
/// draft.po_number = "PO-100".into();
/// draft.customer_name = "Acme".into();
/// draft.customer_address = "Jl. Sudirman 1".into();
///
/// let row = draft.first_item_id();
/// draft.set_description(row, "Valve caps").unwrap();
/// draft.edit_quantity(row, "2").unwrap();
/// draft.edit_price(row, "50000").unwrap();
/// assert_eq!(draft.total_amount(), 100_000.0);
///
/// let create = draft.submit().unwrap();
/// assert_eq!(create.items.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub po_number: String,
    /// Raw `YYYY-MM-DD` text, parsed on submit.
    pub po_date: String,
    pub customer_name: String,
    pub customer_address: String,
    pub status: OrderStatus,
    items: Vec<LineItem>,
    total_amount: f64,
}

impl Default for OrderDraft {
    /// A blank draft dated today (UTC).
    fn default() -> Self {
        Self::new(Utc::now().date_naive())
    }
}

impl OrderDraft {
    /// A blank draft with one empty row and status `pending-delivery`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            po_number: String::new(),
            po_date: today.format("%Y-%m-%d").to_string(),
            customer_name: String::new(),
            customer_address: String::new(),
            status: OrderStatus::default(),
            items: vec![LineItem::new()],
            total_amount: 0.0,
        }
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn item(&self, id: Uuid) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn first_item_id(&self) -> Uuid {
        self.items[0].id()
    }

    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }

    /// Appends a blank row and returns its id.
    pub fn add_item(&mut self) -> Uuid {
        let item = LineItem::new();
        let id = item.id();
        self.items.push(item);
        self.refresh_total();
        id
    }

    /// Removes a row. The first row is permanent.
    pub fn remove_item(&mut self, id: Uuid) -> Result<(), DraftError> {
        let index = self.index_of(id)?;
        if index == 0 {
            return Err(DraftError::FirstRowRequired);
        }
        self.items.remove(index);
        self.refresh_total();
        Ok(())
    }

    pub fn set_description(&mut self, id: Uuid, text: &str) -> Result<(), DraftError> {
        self.row_mut(id)?.set_description(text);
        Ok(())
    }

    /// See [`LineItem::edit_quantity`]; returns whether the text was applied.
    pub fn edit_quantity(&mut self, id: Uuid, text: &str) -> Result<bool, DraftError> {
        let applied = self.row_mut(id)?.edit_quantity(text);
        self.refresh_total();
        Ok(applied)
    }

    /// See [`LineItem::edit_price`]; returns whether the text was applied.
    pub fn edit_price(&mut self, id: Uuid, text: &str) -> Result<bool, DraftError> {
        let applied = self.row_mut(id)?.edit_price(text)?;
        self.refresh_total();
        Ok(applied)
    }

    /// Fills a row from a catalog item at an already resolved price.
    pub fn attach_lookup(
        &mut self,
        id: Uuid,
        item: &InventoryItem,
        price: f64,
    ) -> Result<(), DraftError> {
        self.row_mut(id)?.attach(item, price);
        self.refresh_total();
        Ok(())
    }

    /// Validates the draft and produces the creation payload.
    pub fn submit(self) -> Result<OrderCreate, DraftError> {
        let po_date = NaiveDate::parse_from_str(self.po_date.trim(), "%Y-%m-%d")
            .map_err(|_| DraftError::InvalidDate(self.po_date.clone()))?;
        let create = OrderCreate {
            po_number: self.po_number.trim().to_string(),
            po_date,
            customer_name: self.customer_name.trim().to_string(),
            customer_address: self.customer_address.trim().to_string(),
            status: self.status,
            items: self.items,
        };
        create.validate()?;
        Ok(create)
    }

    fn index_of(&self, id: Uuid) -> Result<usize, DraftError> {
        self.items
            .iter()
            .position(|item| item.id() == id)
            .ok_or(DraftError::UnknownRow(id))
    }

    fn row_mut(&mut self, id: Uuid) -> Result<&mut LineItem, DraftError> {
        let index = self.index_of(id)?;
        Ok(&mut self.items[index])
    }

    fn refresh_total(&mut self) {
        self.total_amount = crate::model::order_total(&self.items);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_catalog;

    fn filled_draft() -> OrderDraft {
        let mut draft = OrderDraft::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        draft.po_number = "PO-100".into();
        draft.customer_name = "Acme".into();
        draft.customer_address = "Jl. Sudirman 1".into();
        let row = draft.first_item_id();
        draft.set_description(row, "Valve caps").unwrap();
        draft.edit_quantity(row, "2").unwrap();
        draft.edit_price(row, "50000").unwrap();
        draft
    }

    #[test]
    fn new_draft_has_one_blank_row_dated_today() {
        let draft = OrderDraft::new(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
        assert_eq!(draft.po_date, "2024-03-09");
        assert_eq!(draft.status, OrderStatus::PendingDelivery);
        assert_eq!(draft.items().len(), 1);
        assert_eq!(draft.items()[0].quantity(), 1);
        assert_eq!(draft.total_amount(), 0.0);
    }

    #[test]
    fn total_tracks_every_edit() {
        let mut draft = filled_draft();
        assert_eq!(draft.total_amount(), 100_000.0);

        let second = draft.add_item();
        draft.edit_quantity(second, "3").unwrap();
        draft.edit_price(second, "1000").unwrap();
        assert_eq!(draft.total_amount(), 103_000.0);

        // Ignored input leaves the total alone.
        assert_eq!(draft.edit_price(second, "12a"), Ok(false));
        assert_eq!(draft.total_amount(), 103_000.0);

        draft.remove_item(second).unwrap();
        assert_eq!(draft.total_amount(), 100_000.0);
    }

    #[test]
    fn first_row_cannot_be_removed() {
        let mut draft = filled_draft();
        let first = draft.first_item_id();
        assert_eq!(draft.remove_item(first), Err(DraftError::FirstRowRequired));
        assert_eq!(draft.items().len(), 1);

        let unknown = Uuid::new_v4();
        assert_eq!(draft.remove_item(unknown), Err(DraftError::UnknownRow(unknown)));
    }

    #[test]
    fn lookup_locks_the_row_until_it_is_replaced() {
        let catalog = sample_catalog();
        let mut draft = filled_draft();
        let row = draft.add_item();
        draft.edit_quantity(row, "2").unwrap();
        draft.attach_lookup(row, &catalog[2], 100_000.0).unwrap();

        assert_eq!(draft.total_amount(), 300_000.0);
        assert_eq!(draft.edit_price(row, "5"), Err(DraftError::PriceLocked(row)));

        draft.remove_item(row).unwrap();
        let fresh = draft.add_item();
        assert_eq!(draft.edit_price(fresh, "5"), Ok(true));
        assert!(!draft.item(fresh).unwrap().from_lookup());
    }

    #[test]
    fn submit_trims_and_validates() {
        let mut draft = filled_draft();
        draft.customer_name = "  Acme  ".into();
        let create = draft.submit().unwrap();
        assert_eq!(create.customer_name, "Acme");
        assert_eq!(create.po_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

        let mut blank = filled_draft();
        blank.po_number = "   ".into();
        assert_eq!(blank.submit(), Err(DraftError::MissingField("PO number")));

        let mut bad_date = filled_draft();
        bad_date.po_date = "01/02/2024".into();
        assert_eq!(
            bad_date.submit(),
            Err(DraftError::InvalidDate("01/02/2024".into()))
        );

        let mut empty_row = filled_draft();
        empty_row.add_item();
        assert!(matches!(
            empty_row.submit(),
            Err(DraftError::InvalidItem { line: 2, .. })
        ));
    }
}
