//! Type-safe wrappers around [`ResourceClient`](resource_framework::ResourceClient).

pub mod inventory_client;
pub mod order_client;

pub use inventory_client::*;
pub use order_client::*;
pub use resource_framework::DomainClient;
