//! `tracing` subscriber wiring for the demo binary
//!
//! The engine itself never installs a subscriber — a library should not
//! reach for global state. This is purely for `src/bin/demo.rs` to have
//! somewhere to send the `tracing::debug!`/`tracing::trace!` calls emitted
//! at `init`/`destroy`/`limit` boundaries (see [`crate::engine`]).

use tracing_subscriber::{EnvFilter, fmt};

/// Install a stdout subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_target(false).init();
}
