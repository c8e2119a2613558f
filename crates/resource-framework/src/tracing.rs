//! # Observability & Tracing
//!
//! Subscriber setup shared by every binary built on the framework.
//!
//! ## Configuration
//!
//! Output is the compact `tracing-subscriber` format without the module prefix
//! (`with_target(false)`); actors tag their events with an `entity_type` field instead.
//!
//! The filter comes from `RUST_LOG` when it is set, otherwise from the directive passed
//! by the caller (typically the `[logging] filter` value of the application config).
//! Events go to stderr so that command output on stdout stays machine readable.
//!
//! ```bash
//! # Lifecycle events only
//! RUST_LOG=info sales-orders list
//!
//! # Request payloads and per-request actor events
//! RUST_LOG=debug sales-orders create ...
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: `Restored`, `Actor started`, `Shutdown`
//! - **Mutations**: `Created`, `Updated`, `Deleted`, `Action ok` with ids and sizes
//! - **Rejections**: `Create failed`, `Action failed`, `Not found` at `warn`
//! - **Persistence**: `Restore failed, starting empty` at `warn`, `Persist failed` at `error`

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// Panics if a global subscriber is already set, like `tracing_subscriber::fmt().init()`.
pub fn setup_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false) // entity_type replaces module paths
        .compact()
        .init();
}
