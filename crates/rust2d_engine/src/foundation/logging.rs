//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
///
/// Honors `RUST_LOG`; defaults to `info` when it is unset. Safe to call more
/// than once (later calls are ignored), which keeps test binaries happy.
pub fn init() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
