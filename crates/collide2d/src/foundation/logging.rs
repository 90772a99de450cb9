//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
///
/// Reads the filter from `RUST_LOG`. Safe to call more than once; the logger
/// installed first stays in place.
pub fn init() {
    if let Err(e) = env_logger::try_init() {
        log::debug!("Logger already initialized: {}", e);
    }
}
