//! The list of values an endpoint points to.

use core::cmp::Ordering;
use core::fmt;
use std::net::{AddrParseError, IpAddr, Ipv6Addr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use thiserror::Error;

use crate::diagnostics::{Diagnostics, NoopDiagnostics};

/// Targets of an endpoint: IP literals or hostnames.
///
/// Comparisons never reorder the lists they are given; they sort private
/// copies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Targets(Vec<String>);

impl Targets {
    /// Creates a target list, copying the values verbatim.
    pub fn new<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(targets.into_iter().map(Into::into).collect())
    }

    /// Returns the number of targets.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no targets.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the targets as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Iterates over the targets in their current order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Appends a target.
    pub fn push(&mut self, target: impl Into<String>) {
        self.0.push(target.into());
    }

    /// Sorts the targets in place by byte-wise string order.
    pub fn sort(&mut self) {
        self.0.sort();
    }

    /// Returns `true` if both lists hold the same targets, ignoring order and
    /// case. Case is compared under simple Unicode case folding, so `ſ`
    /// matches `s` but `ß` does not match `ss`.
    ///
    /// ```
    /// use dns_endpoint::Targets;
    ///
    /// assert!(Targets::new(["b", "a"]).same(&Targets::new(["A", "B"])));
    /// assert!(!Targets::new(["a"]).same(&Targets::new(["a", "a"])));
    /// ```
    pub fn same(&self, other: &Targets) -> bool {
        if self.len() != other.len() {
            return false;
        }

        let mut ours = folded(&self.0);
        let mut theirs = folded(&other.0);
        ours.sort();
        theirs.sort();
        ours == theirs
    }

    /// Decides whether this list is the "lesser" of two candidate target
    /// sets.
    ///
    /// A shorter list is always less. For lists of equal length both are
    /// sorted and compared element by element; at the first difference an IP
    /// address beats a hostname, two IPs compare numerically (IPv4 before
    /// IPv6, then by IPv6 zone), and two hostnames compare as strings.
    ///
    /// ```
    /// use dns_endpoint::Targets;
    ///
    /// let ip = Targets::new(["1.2.3.4"]);
    /// let host = Targets::new(["1-2-3-4.example.com"]);
    /// assert!(ip.is_less(&host));
    /// assert!(Targets::new(["2.0.0.1"]).is_less(&Targets::new(["10.0.0.1"])));
    /// ```
    pub fn is_less(&self, other: &Targets) -> bool {
        self.is_less_with(other, &NoopDiagnostics)
    }

    /// Same as [`Targets::is_less`], reporting unparsable targets to `diag`.
    pub fn is_less_with(&self, other: &Targets, diag: &dyn Diagnostics) -> bool {
        match self.len().cmp(&other.len()) {
            Ordering::Less => return true,
            Ordering::Greater => return false,
            Ordering::Equal => {}
        }

        let mut ours = self.0.clone();
        let mut theirs = other.0.clone();
        ours.sort();
        theirs.sort();

        let Some((a, b)) = ours.iter().zip(theirs.iter()).find(|(a, b)| a != b) else {
            return false;
        };

        let ip_a = parse_ip(a, self, other, diag);
        let ip_b = parse_ip(b, self, other, diag);

        match (ip_a, ip_b) {
            (Some(x), Some(y)) => x < y,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => a < b,
        }
    }
}

fn folded(values: &[String]) -> Vec<String> {
    values.iter().map(|v| v.chars().map(simple_fold).collect()).collect()
}

/// Maps a character to a canonical member of its simple case-folding class.
///
/// Only one-to-one mappings are applied, so `ß` never matches `ss`.
fn simple_fold(c: char) -> char {
    // dotless i only folds under Turkic rules
    if c == '\u{131}' {
        return c;
    }
    let upper = single(c.to_uppercase()).unwrap_or(c);
    single(upper.to_lowercase()).unwrap_or(upper)
}

fn single(mut chars: impl Iterator<Item = char>) -> Option<char> {
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// An IP target. IPv6 literals may carry a zone (`fe80::1%eth0`), which
/// orders after the address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct TargetAddr<'a> {
    ip: IpAddr,
    zone: &'a str,
}

#[derive(Debug, Error)]
enum AddrError {
    #[error(transparent)]
    Invalid(#[from] AddrParseError),
    #[error("IPv6 zone must be a non-empty string")]
    EmptyZone,
}

impl<'a> TargetAddr<'a> {
    fn parse(value: &'a str) -> Result<Self, AddrError> {
        match value.split_once('%') {
            Some((_, "")) => Err(AddrError::EmptyZone),
            Some((addr, zone)) => Ok(Self {
                ip: IpAddr::V6(addr.parse::<Ipv6Addr>()?),
                zone,
            }),
            None => Ok(Self {
                ip: value.parse()?,
                zone: "",
            }),
        }
    }
}

fn parse_ip<'a>(
    value: &'a str,
    targets: &Targets,
    comparison: &Targets,
    diag: &dyn Diagnostics,
) -> Option<TargetAddr<'a>> {
    match TargetAddr::parse(value) {
        Ok(addr) => Some(addr),
        Err(err) => {
            diag.debug(format_args!(
                "couldn't parse {value} as an IP address: {err} \
                 (targets: {targets}, comparison targets: {comparison})"
            ));
            None
        }
    }
}

impl fmt::Display for Targets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(";"))
    }
}

impl From<Vec<String>> for Targets {
    fn from(targets: Vec<String>) -> Self {
        Self(targets)
    }
}

impl From<Targets> for Vec<String> {
    fn from(targets: Targets) -> Self {
        targets.0
    }
}

impl<S: Into<String>> FromIterator<S> for Targets {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a Targets {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Targets {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
