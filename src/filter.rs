//! Owner filtering over a collection of endpoints.

use std::collections::HashSet;

use crate::diagnostics::{Diagnostics, NoopDiagnostics};
use crate::endpoint::Endpoint;

/// Returns the endpoints owned by `owner_id`, keeping input order.
///
/// Endpoints are deduplicated by [`Endpoint::key`]: only the first occurrence
/// of a key is considered, and later ones are dropped even if they are owned.
///
/// # Example
///
/// ```
/// use dns_endpoint::{filter_by_owner, Endpoint, RecordType, OWNER_LABEL_KEY};
///
/// let records = vec![
///     Endpoint::new("a.com", RecordType::A, ["1.1.1.1"]).unwrap().with_label(OWNER_LABEL_KEY, "x"),
///     Endpoint::new("a.com", RecordType::A, ["2.2.2.2"]).unwrap().with_label(OWNER_LABEL_KEY, "x"),
///     Endpoint::new("b.com", RecordType::A, ["3.3.3.3"]).unwrap().with_label(OWNER_LABEL_KEY, "y"),
/// ];
///
/// let owned = filter_by_owner("x", &records);
/// assert_eq!(owned.len(), 1);
/// assert_eq!(owned[0].targets.as_slice(), ["1.1.1.1"]);
/// ```
pub fn filter_by_owner<'a>(owner_id: &str, endpoints: &'a [Endpoint]) -> Vec<&'a Endpoint> {
    filter_by_owner_with(owner_id, endpoints, &NoopDiagnostics)
}

/// Same as [`filter_by_owner`], reporting each decision to `diag`.
pub fn filter_by_owner_with<'a>(
    owner_id: &str,
    endpoints: &'a [Endpoint],
    diag: &dyn Diagnostics,
) -> Vec<&'a Endpoint> {
    let mut seen = HashSet::with_capacity(endpoints.len());
    let mut filtered = Vec::new();

    for ep in endpoints {
        if !seen.insert(ep.key()) {
            diag.debug(format_args!("already loaded endpoint {ep}"));
            continue;
        }

        let found = ep.labels.owner().unwrap_or_default();
        if ep.is_owned_by(owner_id) {
            diag.debug(format_args!(
                "added endpoint {ep} because owner id matches, found: {found:?}, required: {owner_id:?}"
            ));
            filtered.push(ep);
        } else {
            diag.debug(format_args!(
                "skipping endpoint {ep} because owner id does not match, found: {found:?}, required: {owner_id:?}"
            ));
        }
    }

    filtered
}
