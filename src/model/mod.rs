//! Plain data types of the order desk. The resource implementations live in
//! [`order_actor`](crate::order_actor) and [`inventory_actor`](crate::inventory_actor).

pub mod draft;
pub mod format;
pub mod inventory;
pub mod line_item;
pub mod order;
pub mod status;

pub use draft::*;
pub use format::*;
pub use inventory::*;
pub use line_item::*;
pub use order::*;
pub use status::*;
