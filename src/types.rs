//! Scalar DNS types shared by endpoints.
//!
//! This module provides the small value types an [`Endpoint`](crate::Endpoint)
//! is assembled from:
//! - [`Ttl`]: a signed TTL where non-positive values mean "unconfigured"
//! - [`RecordType`]: an open record-type tag with well-known constants
//!
//! # Size Limits (from RFCs)
//!
//! | Field | Limit | Reference |
//! |-------|-------|-----------|
//! | Label | ≤63 octets | RFC 1035 §2.3.4 |

use core::fmt;
use std::borrow::Cow;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum length of a single DNS label (RFC 1035 §2.3.4).
pub const MAX_LABEL_LEN: usize = 63;

/// Time to live of an endpoint, in seconds.
///
/// Unlike the wire-level TTL, this value is signed: zero or any negative value
/// means the TTL was never configured and the provider default applies.
///
/// # Example
///
/// ```
/// use dns_endpoint::Ttl;
///
/// assert!(!Ttl::UNCONFIGURED.is_configured());
/// assert!(Ttl::new(300).is_configured());
/// assert!(!Ttl::new(-1).is_configured());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Ttl(i64);

impl Ttl {
    /// TTL left to the provider default.
    pub const UNCONFIGURED: Ttl = Ttl(0);

    /// Creates a TTL from seconds.
    #[inline]
    pub const fn new(seconds: i64) -> Self {
        Self(seconds)
    }

    /// Returns the raw value in seconds.
    #[inline]
    pub const fn as_secs(&self) -> i64 {
        self.0
    }

    /// Returns `true` if the TTL holds a positive number of seconds.
    #[inline]
    pub const fn is_configured(&self) -> bool {
        self.0 > 0
    }
}

impl From<i64> for Ttl {
    #[inline]
    fn from(secs: i64) -> Self {
        Self::new(secs)
    }
}

impl From<Ttl> for i64 {
    #[inline]
    fn from(ttl: Ttl) -> Self {
        ttl.0
    }
}

impl fmt::Display for Ttl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// DNS record type tag.
///
/// The set of types is open: providers may introduce tags of their own, so any
/// string is accepted. The well-known tags are available as associated
/// constants.
///
/// # Example
///
/// ```
/// use dns_endpoint::RecordType;
///
/// assert_eq!(RecordType::from("CNAME"), RecordType::CNAME);
/// assert!(RecordType::AAAA.is_well_known());
/// assert!(!RecordType::from("ALIAS").is_well_known());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RecordType(Cow<'static, str>);

impl RecordType {
    /// Host address (RFC 1035).
    pub const A: RecordType = RecordType::from_static("A");
    /// IPv6 host address (RFC 3596).
    pub const AAAA: RecordType = RecordType::from_static("AAAA");
    /// Canonical name for an alias (RFC 1035).
    pub const CNAME: RecordType = RecordType::from_static("CNAME");
    /// Text strings (RFC 1035).
    pub const TXT: RecordType = RecordType::from_static("TXT");
    /// Server selection (RFC 2782).
    pub const SRV: RecordType = RecordType::from_static("SRV");
    /// Authoritative name server (RFC 1035).
    pub const NS: RecordType = RecordType::from_static("NS");
    /// Domain name pointer (RFC 1035).
    pub const PTR: RecordType = RecordType::from_static("PTR");
    /// Mail exchange (RFC 1035).
    pub const MX: RecordType = RecordType::from_static("MX");
    /// Naming authority pointer (RFC 3403).
    pub const NAPTR: RecordType = RecordType::from_static("NAPTR");

    /// Tags every provider is expected to understand.
    pub const WELL_KNOWN: &'static [&'static str] =
        &["A", "AAAA", "CNAME", "TXT", "SRV", "NS", "PTR", "MX", "NAPTR"];

    /// Creates a record type from a static tag without allocating.
    pub const fn from_static(tag: &'static str) -> Self {
        Self(Cow::Borrowed(tag))
    }

    /// Returns the tag as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if no tag is set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if the tag is one of [`RecordType::WELL_KNOWN`].
    ///
    /// The check is exact; `"a"` is a provider-defined tag, not `A`.
    pub fn is_well_known(&self) -> bool {
        Self::WELL_KNOWN.contains(&self.as_str())
    }
}

impl From<&str> for RecordType {
    fn from(tag: &str) -> Self {
        Self(Cow::Owned(tag.to_owned()))
    }
}

impl From<String> for RecordType {
    fn from(tag: String) -> Self {
        Self(Cow::Owned(tag))
    }
}

impl From<&RecordType> for RecordType {
    fn from(tag: &RecordType) -> Self {
        tag.clone()
    }
}

impl PartialEq<str> for RecordType {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for RecordType {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl AsRef<str> for RecordType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
