//! Logging initialization.
//!
//! The crate logs through `tracing`; embedders that already install their
//! own subscriber can skip this entirely.

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static INIT: OnceCell<()> = OnceCell::new();

/// Install the global tracing subscriber.
///
/// Filtering follows `RUST_LOG`, defaulting to `info`. Safe to call more
/// than once (tests call it freely); later calls are no-ops, as is the
/// whole function when another subscriber is already installed.
pub fn init() {
    INIT.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    });
}
