//! Resource wrapper that embeds a list of endpoints.
//!
//! A `DNSEndpoint` object carries a desired-state record list and an observed
//! generation counter. Its lifecycle belongs to an external controller; the
//! types here only embed and extract the records losslessly.
//!
//! # Example
//!
//! ```
//! use dns_endpoint::{DnsEndpoint, Endpoint, RecordType};
//!
//! let ep = Endpoint::new("a.com", RecordType::A, ["1.1.1.1"]).unwrap();
//! let res = DnsEndpoint::new("web", vec![ep.clone()]);
//!
//! assert_eq!(res.kind, "DNSEndpoint");
//! assert_eq!(res.endpoints(), &[ep]);
//! ```

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::endpoint::Endpoint;

/// API group of the resource.
pub const GROUP: &str = "externaldns.k8s.io";

/// API version of the resource.
pub const VERSION: &str = "v1alpha1";

/// Kind of a single resource.
pub const KIND: &str = "DNSEndpoint";

/// Kind of a resource list.
pub const LIST_KIND: &str = "DNSEndpointList";

/// Object metadata. Only the fields the record list needs are modelled.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ObjectMeta {
    /// Object name.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub name: Option<String>,
    /// Namespace the object lives in.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub namespace: Option<String>,
    /// Generation of the desired state, bumped by the API server.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub generation: Option<i64>,
    /// Object labels.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "BTreeMap::is_empty"))]
    pub labels: BTreeMap<String, String>,
}

/// Desired state: the records to publish.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DnsEndpointSpec {
    /// Records in input order.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Vec::is_empty"))]
    pub endpoints: Vec<Endpoint>,
}

/// Observed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DnsEndpointStatus {
    /// Generation last processed by the controller.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "is_zero"))]
    pub observed_generation: i64,
}

#[cfg(feature = "serde")]
fn is_zero(n: &i64) -> bool {
    *n == 0
}

/// A `DNSEndpoint` resource.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DnsEndpoint {
    /// `group/version`, see [`GROUP`] and [`VERSION`].
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "String::is_empty"))]
    pub api_version: String,
    /// Always [`KIND`] for resources built here.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "String::is_empty"))]
    pub kind: String,
    /// Object metadata.
    #[cfg_attr(feature = "serde", serde(default))]
    pub metadata: ObjectMeta,
    /// Desired state.
    #[cfg_attr(feature = "serde", serde(default))]
    pub spec: DnsEndpointSpec,
    /// Observed state.
    #[cfg_attr(feature = "serde", serde(default))]
    pub status: DnsEndpointStatus,
}

impl DnsEndpoint {
    /// Creates a named resource holding `endpoints`.
    pub fn new(name: impl Into<String>, endpoints: Vec<Endpoint>) -> Self {
        Self {
            api_version: api_version(),
            kind: KIND.to_owned(),
            metadata: ObjectMeta {
                name: Some(name.into()),
                ..ObjectMeta::default()
            },
            spec: DnsEndpointSpec { endpoints },
            status: DnsEndpointStatus::default(),
        }
    }

    /// Returns the embedded records.
    pub fn endpoints(&self) -> &[Endpoint] {
        &self.spec.endpoints
    }

    /// Consumes the resource, returning its records.
    pub fn into_endpoints(self) -> Vec<Endpoint> {
        self.spec.endpoints
    }
}

/// A list of `DNSEndpoint` resources.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DnsEndpointList {
    /// `group/version`, see [`GROUP`] and [`VERSION`].
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "String::is_empty"))]
    pub api_version: String,
    /// Always [`LIST_KIND`] for lists built here.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "String::is_empty"))]
    pub kind: String,
    /// The resources.
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: Vec<DnsEndpoint>,
}

impl DnsEndpointList {
    /// Creates a list holding `items`.
    pub fn new(items: Vec<DnsEndpoint>) -> Self {
        Self {
            api_version: api_version(),
            kind: LIST_KIND.to_owned(),
            items,
        }
    }

    /// Iterates over the records of every item, in order.
    pub fn endpoints(&self) -> impl Iterator<Item = &Endpoint> {
        self.items.iter().flat_map(|item| item.endpoints().iter())
    }
}

fn api_version() -> String {
    format!("{GROUP}/{VERSION}")
}
