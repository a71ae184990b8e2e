//! Warning sink capability for the model binder.

/// Receives binder warnings.
///
/// The binder never requires logging: implementations that discard
/// messages are valid, and skip paths must complete either way. Standard
/// implementations (`NullLogger`, `TracingLogger`) live in `binden-std`.
pub trait BindLogger: Send + Sync {
    /// Report a warning-level message.
    fn warn(&self, message: &str);
}
