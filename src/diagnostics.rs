//! Side-channel diagnostics.
//!
//! Operations that have something worth reporting (an unparsable target while
//! ordering, a record skipped by the owner filter) take a [`Diagnostics`] sink
//! instead of writing to a process-wide logger. Nothing reported here affects
//! the result of the operation.
//!
//! # Example
//!
//! ```
//! use dns_endpoint::{Targets, TracingDiagnostics};
//!
//! let a = Targets::new(["1.2.3.4"]);
//! let b = Targets::new(["1-2-3-4.example.com"]);
//! assert!(a.is_less_with(&b, &TracingDiagnostics));
//! ```

use core::fmt;

/// Receiver for diagnostic messages.
pub trait Diagnostics {
    /// Reports a debug-level message.
    fn debug(&self, message: fmt::Arguments<'_>);
}

/// Sink that discards everything. Used by the plain, sink-less operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnostics;

impl Diagnostics for NoopDiagnostics {
    #[inline]
    fn debug(&self, _message: fmt::Arguments<'_>) {}
}

/// Sink that forwards to [`tracing`] under the `dns_endpoint` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn debug(&self, message: fmt::Arguments<'_>) {
        tracing::debug!(target: "dns_endpoint", "{}", message);
    }
}

impl<D: Diagnostics + ?Sized> Diagnostics for &D {
    fn debug(&self, message: fmt::Arguments<'_>) {
        (**self).debug(message)
    }
}
