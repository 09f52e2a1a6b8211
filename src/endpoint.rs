//! The endpoint record and its identity key.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::labels::{Labels, OWNER_LABEL_KEY};
use crate::provider_specific::ProviderSpecific;
use crate::targets::Targets;
use crate::types::{RecordType, Ttl, MAX_LABEL_LEN};

/// Identity of an endpoint: records sharing a key are the same logical DNS
/// entry, whatever their targets or TTL.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EndpointKey {
    /// Hostname of the record.
    pub dns_name: String,
    /// Record type tag.
    pub record_type: RecordType,
    /// Set identifier, empty for simple routing.
    pub set_identifier: String,
}

impl fmt::Display for EndpointKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.dns_name, self.record_type)?;
        if !self.set_identifier.is_empty() {
            write!(f, " {}", self.set_identifier)?;
        }
        Ok(())
    }
}

/// A DNS record as seen by a source or a provider.
///
/// # Example
///
/// ```
/// use dns_endpoint::{Endpoint, RecordType, Ttl};
///
/// let ep = Endpoint::with_ttl("www.example.com.", RecordType::A, Ttl::new(300), ["1.2.3.4"])
///     .unwrap()
///     .with_set_identifier("eu-west")
///     .with_provider_specific("weight", "10");
///
/// assert_eq!(ep.dns_name, "www.example.com");
/// assert_eq!(ep.provider_specific_property("weight"), Some("10"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Endpoint {
    /// Hostname of the record, without trailing dot.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "String::is_empty"))]
    pub dns_name: String,
    /// Values the record points to.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Targets::is_empty"))]
    pub targets: Targets,
    /// Record type, e.g. `A`, `CNAME` or a provider-defined tag.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "RecordType::is_empty"))]
    pub record_type: RecordType,
    /// Distinguishes records sharing name and type, e.g. weighted routing
    /// variants.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "String::is_empty"))]
    pub set_identifier: String,
    /// TTL of the record; unconfigured values are left to the provider.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "recordTTL", default, skip_serializing_if = "ttl_unconfigured")
    )]
    pub record_ttl: Ttl,
    /// Labels, including the owner marker.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Labels::is_empty"))]
    pub labels: Labels,
    /// Provider-specific overlay, not persisted by the registry.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "ProviderSpecific::is_empty")
    )]
    pub provider_specific: ProviderSpecific,
}

#[cfg(feature = "serde")]
fn ttl_unconfigured(ttl: &Ttl) -> bool {
    !ttl.is_configured()
}

impl Endpoint {
    /// Creates an endpoint with an unconfigured TTL.
    ///
    /// See [`Endpoint::with_ttl`].
    pub fn new<T, S>(
        dns_name: &str,
        record_type: impl Into<RecordType>,
        targets: T,
    ) -> Result<Self>
    where
        T: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_ttl(dns_name, record_type, Ttl::UNCONFIGURED, targets)
    }

    /// Creates an endpoint.
    ///
    /// One trailing dot is stripped from the name and from every target.
    /// Fails if any dot-separated label of the name is longer than 63 octets.
    pub fn with_ttl<T, S>(
        dns_name: &str,
        record_type: impl Into<RecordType>,
        ttl: Ttl,
        targets: T,
    ) -> Result<Self>
    where
        T: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if let Some(label) = dns_name.split('.').find(|l| l.len() > MAX_LABEL_LEN) {
            return Err(Error::LabelTooLong {
                label: label.to_owned(),
                dns_name: dns_name.to_owned(),
            });
        }

        let targets = targets
            .into_iter()
            .map(|t| {
                let mut t: String = t.into();
                if t.ends_with('.') {
                    t.pop();
                }
                t
            })
            .collect();

        Ok(Self {
            dns_name: trim_dot(dns_name).to_owned(),
            targets,
            record_type: record_type.into(),
            set_identifier: String::new(),
            record_ttl: ttl,
            labels: Labels::new(),
            provider_specific: ProviderSpecific::new(),
        })
    }

    /// Sets the set identifier.
    pub fn with_set_identifier(mut self, set_identifier: impl Into<String>) -> Self {
        self.set_identifier = set_identifier.into();
        self
    }

    /// Attaches a provider-specific property.
    pub fn with_provider_specific(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.provider_specific.set(name, value);
        self
    }

    /// Adds a label.
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key, value);
        self
    }

    /// Returns the value of a provider-specific property.
    pub fn provider_specific_property(&self, name: &str) -> Option<&str> {
        self.provider_specific.get(name)
    }

    /// Sets a provider-specific property in place.
    pub fn set_provider_specific_property(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.provider_specific.set(name, value);
    }

    /// Removes a provider-specific property, if present.
    pub fn delete_provider_specific_property(&mut self, name: &str) {
        self.provider_specific.delete(name);
    }

    /// Returns the identity key `(dns_name, record_type, set_identifier)`.
    pub fn key(&self) -> EndpointKey {
        EndpointKey {
            dns_name: self.dns_name.clone(),
            record_type: self.record_type.clone(),
            set_identifier: self.set_identifier.clone(),
        }
    }

    /// Returns `true` if the owner label is present and equals `owner_id`.
    pub fn is_owned_by(&self, owner_id: &str) -> bool {
        self.labels.get(OWNER_LABEL_KEY) == Some(owner_id)
    }
}

fn trim_dot(s: &str) -> &str {
    s.strip_suffix('.').unwrap_or(s)
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} IN {} {} {} {}",
            self.dns_name,
            self.record_ttl,
            self.record_type,
            self.set_identifier,
            self.targets,
            self.provider_specific
        )
    }
}
