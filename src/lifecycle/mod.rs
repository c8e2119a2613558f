//! # System Lifecycle & Orchestration
//!
//! Starts, wires and stops the actors behind the order desk.
//!
//! ## Dependency Injection via Context
//!
//! Actors are created without dependencies and receive them through `run(context)`:
//!
//! ```rust,ignore
//! impl ResourceEntity for SalesOrder {
//!     type Context = TransitionPolicy;
//! }
//!
//! impl ResourceEntity for InventoryItem {
//!     type Context = PricingConfig;
//! }
//! ```
//!
//! Both contexts come from [`Config`](crate::config::Config), so switching the transition
//! rule or the lookup prices needs no code change.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Actors clean up** - Log final state
//! 4. **Await completion** - Wait for all actor tasks to finish
//!
//! Every mutation is already persisted before its reply is sent, so shutdown has
//! nothing left to flush.

pub mod order_desk;

pub use order_desk::*;
