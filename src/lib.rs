//! # Sales Orders
//!
//! Sales-order management built on [`resource_framework`]: orders with line items,
//! an optional catalog lookup per line, a fixed status lifecycle with history, and the
//! whole order list persisted as one JSON array.
//!
//! ## Module Tour
//!
//! ### 1. The Data ([`model`])
//! Plain types: [`OrderStatus`](model::OrderStatus) and its
//! [`TransitionPolicy`](model::TransitionPolicy), [`LineItem`](model::LineItem),
//! the editable [`OrderDraft`](model::OrderDraft), [`SalesOrder`](model::SalesOrder),
//! the [`InventoryItem`](model::InventoryItem) catalog, and display helpers.
//!
//! ### 2. The Resources ([`order_actor`], [`inventory_actor`])
//! `ResourceEntity` implementations: validation, status changes, list filtering,
//! price resolution.
//!
//! ### 3. The Interface ([`clients`])
//! [`OrderClient`](clients::OrderClient) and [`InventoryClient`](clients::InventoryClient)
//! wrap the generic clients in domain methods.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`OrderDesk`](lifecycle::OrderDesk) builds storage from [`config`] and starts both actors.
//!
//! ## Quick Start
//!
//! ```bash
//! sales-orders create --po PO-100 --customer Acme --address "Jl. Sudirman 1" \
//!     --item "Valve caps:2:50000" --lookup 1:4
//! sales-orders list --search acme
//! sales-orders status <ID> done --note shipped
//! ```

pub mod clients;
pub mod config;
pub mod inventory_actor;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
