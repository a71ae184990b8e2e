//! Standard binder warning sinks.

use binden_core::BindLogger;

/// A logger that discards every message.
///
/// The binder's default: hosts that never configure logging still get
/// working skip paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl BindLogger for NullLogger {
    fn warn(&self, _message: &str) {}
}

/// Forwards binder warnings to `tracing` at warning level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl BindLogger for TracingLogger {
    fn warn(&self, message: &str) {
        tracing::warn!("{}", message);
    }
}
