//! Provider-specific key/value overlay.
//!
//! Provider-specific properties carry metadata that does not warrant a field of
//! its own on [`Endpoint`](crate::Endpoint). Unlike labels they are not
//! persisted by the registry; they live only for one synchronisation pass.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single provider-specific setting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProviderSpecificProperty {
    /// Property name, unique within a [`ProviderSpecific`] list.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "String::is_empty"))]
    pub name: String,
    /// Property value.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "String::is_empty"))]
    pub value: String,
}

impl ProviderSpecificProperty {
    /// Creates a new property.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Ordered list of provider-specific properties with unique names.
///
/// # Example
///
/// ```
/// use dns_endpoint::ProviderSpecific;
///
/// let mut ps = ProviderSpecific::new();
/// ps.set("weight", "10");
/// ps.set("region", "eu");
/// ps.set("weight", "20");
///
/// assert_eq!(ps.get("weight"), Some("20"));
/// assert_eq!(ps.iter().next().map(|p| p.name.as_str()), Some("weight"));
///
/// ps.delete("weight");
/// assert_eq!(ps.len(), 1);
/// ```
///
/// Deserialized lists go through [`ProviderSpecific::set`], so a payload that
/// repeats a name keeps the first position and the last value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        from = "Vec<ProviderSpecificProperty>",
        into = "Vec<ProviderSpecificProperty>"
    )
)]
pub struct ProviderSpecific(Vec<ProviderSpecificProperty>);

impl ProviderSpecific {
    /// Creates an empty overlay.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of the property named `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    /// Sets a property, replacing an existing one in place or appending.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|p| p.name == name) {
            Some(existing) => existing.value = value,
            None => self.0.push(ProviderSpecificProperty { name, value }),
        }
    }

    /// Removes the property named `name`. Does nothing if it is absent.
    pub fn delete(&mut self, name: &str) {
        if let Some(idx) = self.0.iter().position(|p| p.name == name) {
            self.0.remove(idx);
        }
    }

    /// Returns the number of properties.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the overlay holds no properties.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the properties in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, ProviderSpecificProperty> {
        self.0.iter()
    }
}

impl From<Vec<ProviderSpecificProperty>> for ProviderSpecific {
    fn from(properties: Vec<ProviderSpecificProperty>) -> Self {
        properties.into_iter().map(|p| (p.name, p.value)).collect()
    }
}

impl From<ProviderSpecific> for Vec<ProviderSpecificProperty> {
    fn from(ps: ProviderSpecific) -> Self {
        ps.0
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ProviderSpecific {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut ps = Self::new();
        for (name, value) in iter {
            ps.set(name, value);
        }
        ps
    }
}

impl<'a> IntoIterator for &'a ProviderSpecific {
    type Item = &'a ProviderSpecificProperty;
    type IntoIter = std::slice::Iter<'a, ProviderSpecificProperty>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ProviderSpecific {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, p) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{{{} {}}}", p.name, p.value)?;
        }
        f.write_str("]")
    }
}
