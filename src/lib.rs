//! DNS endpoint records and the comparisons used to reconcile them.
//!
//! An [`Endpoint`] is one DNS record set as produced by a source or read back
//! from a provider: a name, a record type, a list of [`Targets`], a TTL, an
//! optional set identifier, [`Labels`] and a [`ProviderSpecific`] overlay.
//!
//! The interesting parts are the comparison rules, which every consumer must
//! apply identically to avoid spurious updates:
//!
//! - [`Targets::same`]: order- and case-insensitive equality of target lists
//! - [`Targets::is_less`]: the IP-aware ordering that picks the canonical one
//!   of two conflicting target lists
//! - [`Endpoint::key`]: the `(name, type, set identifier)` identity
//! - [`filter_by_owner`]: deduplication by identity plus ownership filtering
//!
//! # Example
//!
//! ```
//! use dns_endpoint::{filter_by_owner, Endpoint, RecordType, Ttl, OWNER_LABEL_KEY};
//!
//! let a = Endpoint::with_ttl("app.example.com.", RecordType::A, Ttl::new(300), ["10.0.0.1"])?
//!     .with_label(OWNER_LABEL_KEY, "cluster-1");
//! let b = Endpoint::new("app.example.com", RecordType::A, ["10.0.0.2"])?
//!     .with_label(OWNER_LABEL_KEY, "cluster-1");
//!
//! assert_eq!(a.key(), b.key());
//! assert!(a.targets.is_less(&b.targets));
//!
//! let records = [a, b];
//! assert_eq!(filter_by_owner("cluster-1", &records).len(), 1);
//! # Ok::<(), dns_endpoint::Error>(())
//! ```
//!
//! # Features
//!
//! - `serde` (default): `Serialize`/`Deserialize` for every data type, using
//!   the camelCase field names of the `DNSEndpoint` resource.

pub mod diagnostics;
pub mod endpoint;
pub mod error;
pub mod filter;
pub mod labels;
pub mod provider_specific;
pub mod resource;
pub mod targets;
pub mod types;

pub use diagnostics::{Diagnostics, NoopDiagnostics, TracingDiagnostics};
pub use endpoint::{Endpoint, EndpointKey};
pub use error::{Error, Result};
pub use filter::{filter_by_owner, filter_by_owner_with};
pub use labels::{Labels, OWNER_LABEL_KEY, RESOURCE_LABEL_KEY};
pub use provider_specific::{ProviderSpecific, ProviderSpecificProperty};
pub use resource::{DnsEndpoint, DnsEndpointList, DnsEndpointSpec, DnsEndpointStatus, ObjectMeta};
pub use targets::Targets;
pub use types::{RecordType, Ttl, MAX_LABEL_LEN};
