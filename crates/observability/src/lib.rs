//! Tracing and logging (shared setup).

pub mod tracing;

pub use crate::tracing::LogFormat;

/// Initialize process-wide logging in the given output format.
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init(format: LogFormat) {
    tracing::init(format);
}
