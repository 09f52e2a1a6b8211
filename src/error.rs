//! Error types for endpoint construction.

use thiserror::Error;

/// Result type alias for endpoint operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building an [`Endpoint`](crate::Endpoint).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A dot-separated label of the DNS name exceeds 63 octets.
    #[error("label {label} in {dns_name} is longer than 63 characters, cannot create endpoint")]
    LabelTooLong {
        /// The offending label.
        label: String,
        /// The full DNS name as given.
        dns_name: String,
    },
}
