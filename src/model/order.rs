//! Sales orders, their status history and the queries run over them.
//!
//! # Resource Framework
//! [`SalesOrder`] implements [`ResourceEntity`](resource_framework::ResourceEntity) in
//! [`order_actor`](crate::order_actor). See that module for:
//! - Creation parameters ([`OrderCreate`])
//! - Status changes ([`OrderAction`](crate::order_actor::OrderAction))
//! - List filtering ([`OrderQuery`])
use crate::model::{Badge, DraftError, LineItem, OrderStatus, StatusFilter};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A submitted sales order, as stored and exported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesOrder {
    pub id: Uuid,
    pub po_number: String,
    pub po_date: NaiveDate,
    pub customer_name: String,
    pub customer_address: String,
    pub items: Vec<LineItem>,
    pub total_amount: f64,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
    #[serde(default)]
    pub status_history: Vec<StatusRecord>,
}

/// One entry of an order's append-only status history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusRecord {
    pub status: OrderStatus,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Payload for creating a new order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCreate {
    pub po_number: String,
    pub po_date: NaiveDate,
    pub customer_name: String,
    pub customer_address: String,
    pub status: OrderStatus,
    pub items: Vec<LineItem>,
}

impl OrderCreate {
    /// Required-field checks: non-blank header strings and at least one valid row.
    pub fn validate(&self) -> Result<(), DraftError> {
        let required = [
            ("PO number", &self.po_number),
            ("Customer name", &self.customer_name),
            ("Customer address", &self.customer_address),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(DraftError::MissingField(field));
            }
        }
        if self.items.is_empty() {
            return Err(DraftError::NoItems);
        }
        for (index, item) in self.items.iter().enumerate() {
            item.validate(index + 1)?;
        }
        if !order_total(&self.items).is_finite() {
            return Err(DraftError::TotalOutOfRange);
        }
        Ok(())
    }
}

/// Filter applied by `list` requests.
///
/// `search` is matched case-insensitively against `"{po_number} {customer_name}"`;
/// an empty term matches everything. Both parts must match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderQuery {
    pub search: String,
    pub status: StatusFilter,
}

impl OrderQuery {
    pub fn new(search: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            search: search.into(),
            status,
        }
    }
}

impl SalesOrder {
    /// Builds a stored order from a validated payload, stamping creation time and
    /// the initial `"Order created"` history entry.
    pub fn from_create(id: Uuid, params: OrderCreate, now: DateTime<Utc>) -> Self {
        let mut items = params.items;
        for item in &mut items {
            item.recompute();
        }
        let total_amount = order_total(&items);
        Self {
            id,
            po_number: params.po_number,
            po_date: params.po_date,
            customer_name: params.customer_name,
            customer_address: params.customer_address,
            items,
            total_amount,
            created_at: now,
            status: params.status,
            status_history: vec![StatusRecord {
                status: params.status,
                date: now,
                note: Some("Order created".to_string()),
            }],
        }
    }

    pub fn matches_query(&self, query: &OrderQuery) -> bool {
        let haystack = format!("{} {}", self.po_number, self.customer_name).to_lowercase();
        haystack.contains(&query.search.to_lowercase()) && query.status.accepts(self.status)
    }
}

/// Sum of the row totals.
pub fn order_total(items: &[LineItem]) -> f64 {
    items.iter().map(LineItem::total).sum()
}

/// Number of orders in one status, with the display data a front end needs to
/// render it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    pub status: OrderStatus,
    pub label: &'static str,
    pub badge: Badge,
    pub count: usize,
}

/// Per-status counts in lifecycle order, zero counts included.
pub fn status_summary(orders: &[SalesOrder]) -> Vec<StatusCount> {
    OrderStatus::ALL
        .into_iter()
        .map(|status| StatusCount {
            status,
            label: status.label(),
            badge: status.badge(),
            count: orders.iter().filter(|o| o.status == status).count(),
        })
        .collect()
}
