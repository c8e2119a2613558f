//! Order lifecycle states and the rule deciding which changes between them are allowed.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Lifecycle state of a sales order.
///
/// Serialized in kebab-case (`pending-delivery`, ...), the same strings the
/// persisted order list and the CLI use. Variants are declared in lifecycle
/// order, which is what `Ord` compares.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    PendingDelivery,
    PendingInvoice,
    PendingItem,
    Delivery,
    Done,
}

/// Colour pair used when a status is shown as a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub background: &'static str,
    pub text: &'static str,
}

impl OrderStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::PendingDelivery,
        OrderStatus::PendingInvoice,
        OrderStatus::PendingItem,
        OrderStatus::Delivery,
        OrderStatus::Done,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::PendingDelivery => "pending-delivery",
            OrderStatus::PendingInvoice => "pending-invoice",
            OrderStatus::PendingItem => "pending-item",
            OrderStatus::Delivery => "delivery",
            OrderStatus::Done => "done",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::PendingDelivery => "Pending Delivery",
            OrderStatus::PendingInvoice => "Pending Invoice",
            OrderStatus::PendingItem => "Pending Item",
            OrderStatus::Delivery => "Delivery",
            OrderStatus::Done => "Done",
        }
    }

    pub fn badge(&self) -> Badge {
        let (background, text) = match self {
            OrderStatus::PendingDelivery => ("bg-yellow-100", "text-yellow-800"),
            OrderStatus::PendingInvoice => ("bg-blue-100", "text-blue-800"),
            OrderStatus::PendingItem => ("bg-purple-100", "text-purple-800"),
            OrderStatus::Delivery => ("bg-indigo-100", "text-indigo-800"),
            OrderStatus::Done => ("bg-green-100", "text-green-800"),
        };
        Badge { background, text }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status string that does not name any [`OrderStatus`].
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unknown order status: {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s.trim())
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

/// Status part of a list query: every order, or only one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    pub fn accepts(&self, status: OrderStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(expected) => *expected == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == "all" {
            return Ok(StatusFilter::All);
        }
        s.parse().map(StatusFilter::Only)
    }
}

/// Which status changes an order accepts.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum TransitionPolicy {
    /// Any status may follow any other, including itself.
    #[default]
    Free,
    /// Only moves to a later status in lifecycle order.
    ForwardOnly,
    /// Explicit table of allowed targets per source status. Sources missing from
    /// the table allow nothing.
    Table(HashMap<OrderStatus, HashSet<OrderStatus>>),
}

impl TransitionPolicy {
    pub fn allows(&self, from: OrderStatus, to: OrderStatus) -> bool {
        match self {
            TransitionPolicy::Free => true,
            TransitionPolicy::ForwardOnly => to > from,
            TransitionPolicy::Table(allowed) => allowed
                .get(&from)
                .is_some_and(|targets| targets.contains(&to)),
        }
    }
}
