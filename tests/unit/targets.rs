//! Unit tests for target equality and ordering.

use dns_endpoint::Targets;

use crate::common::RecordingDiagnostics;

fn t(values: &[&str]) -> Targets {
    Targets::new(values.iter().copied())
}

// =============================================================================
// Same
// =============================================================================

#[test]
fn test_same_ignores_order_and_case() {
    assert!(t(&["b", "a"]).same(&t(&["A", "B"])));
    assert!(t(&["A", "B"]).same(&t(&["b", "a"])));
    assert!(t(&["B", "a"]).same(&t(&["b", "A"])));
    assert!(t(&["Example.COM"]).same(&t(&["example.com"])));
}

#[test]
fn test_same_length_mismatch() {
    assert!(!t(&["a"]).same(&t(&["a", "a"])));
    assert!(!t(&["a", "a"]).same(&t(&["a"])));
}

#[test]
fn test_same_different_values() {
    assert!(!t(&["1.1.1.1"]).same(&t(&["1.1.1.2"])));
    assert!(t(&[]).same(&t(&[])));
}

#[test]
fn test_same_does_not_reorder_arguments() {
    let a = t(&["z", "y", "x"]);
    let b = t(&["x", "y", "z"]);
    assert!(a.same(&b));
    assert_eq!(a.as_slice(), ["z", "y", "x"]);
}

#[test]
fn test_same_uses_simple_case_folding() {
    assert!(t(&["\u{17f}.example.com"]).same(&t(&["s.example.com"])));
    assert!(t(&["\u{212a}"]).same(&t(&["k"])));
    assert!(t(&["\u{3a3}"]).same(&t(&["\u{3c2}"])));
    assert!(!t(&["\u{df}"]).same(&t(&["ss"])));
    assert!(!t(&["\u{131}"]).same(&t(&["i"])));
}

// =============================================================================
// IsLess
// =============================================================================

#[test]
fn test_is_less_by_length() {
    assert!(t(&["a"]).is_less(&t(&["a", "b"])));
    assert!(!t(&["a", "b"]).is_less(&t(&["a"])));
    assert!(t(&["z"]).is_less(&t(&["a", "b"])));
}

#[test]
fn test_is_less_prefers_ip_over_hostname() {
    let ip = t(&["1.2.3.4"]);
    let host = t(&["1-2-3-4.example.com"]);
    // "1-2-3-4..." sorts before "1.2.3.4" as a string
    assert!("1-2-3-4.example.com" < "1.2.3.4");
    assert!(ip.is_less(&host));
    assert!(!host.is_less(&ip));
}

#[test]
fn test_is_less_numeric_ip_order() {
    assert!(t(&["1.2.3.4"]).is_less(&t(&["1.2.3.5"])));
    assert!(!t(&["1.2.3.5"]).is_less(&t(&["1.2.3.4"])));
    // numeric, not lexicographic: "10.0.0.1" < "2.0.0.1" as strings
    assert!(!t(&["10.0.0.1"]).is_less(&t(&["2.0.0.1"])));
    assert!(t(&["2.0.0.1"]).is_less(&t(&["10.0.0.1"])));
}

#[test]
fn test_is_less_ipv4_before_ipv6() {
    assert!(t(&["255.255.255.255"]).is_less(&t(&["::1"])));
    assert!(t(&["2001:db8::1"]).is_less(&t(&["2001:db8::2"])));
}

#[test]
fn test_is_less_zoned_ipv6() {
    let zoned = t(&["fe80::1%eth0"]);
    let plain = t(&["fe80::1"]);
    let host = t(&["a.example.com"]);

    // a zoned literal is still an IP
    assert!(zoned.is_less(&host));
    assert!(!host.is_less(&zoned));

    // same address: no zone sorts before a zone
    assert!(plain.is_less(&zoned));
    assert!(!zoned.is_less(&plain));

    // zones compare after the address
    assert!(t(&["fe80::1%eth0"]).is_less(&t(&["fe80::1%eth1"])));
    assert!(t(&["fe80::1%eth9"]).is_less(&t(&["fe80::2%eth0"])));
    assert!(t(&["10.0.0.1"]).is_less(&zoned));
}

#[test]
fn test_is_less_rejects_bad_zones() {
    let diag = RecordingDiagnostics::default();
    // empty zone and zoned IPv4 are not IPs, so plain string order applies
    assert!(t(&["1.2.3.4%eth0"]).is_less_with(&t(&["fe80::1%"]), &diag));
    assert!(!t(&["fe80::1%"]).is_less(&t(&["a.example.com"])));
    assert_eq!(diag.messages().len(), 2);
}

#[test]
fn test_is_less_hostnames_lexicographic() {
    assert!(t(&["a.example.com"]).is_less(&t(&["b.example.com"])));
    assert!(!t(&["b.example.com"]).is_less(&t(&["a.example.com"])));
}

#[test]
fn test_is_less_equal_lists() {
    let a = t(&["1.1.1.1", "2.2.2.2"]);
    assert!(!a.is_less(&a.clone()));
    assert!(!t(&["2.2.2.2", "1.1.1.1"]).is_less(&a));
}

#[test]
fn test_is_less_compares_sorted_copies() {
    let a = t(&["9.9.9.9", "1.1.1.1"]);
    let b = t(&["1.1.1.1", "8.8.8.8"]);
    assert!(!a.is_less(&b));
    assert!(b.is_less(&a));
    assert_eq!(a.as_slice(), ["9.9.9.9", "1.1.1.1"]);
    assert_eq!(b.as_slice(), ["1.1.1.1", "8.8.8.8"]);
}

#[test]
fn test_is_less_reports_unparsable_targets() {
    let diag = RecordingDiagnostics::default();
    assert!(t(&["1.2.3.4"]).is_less_with(&t(&["host.example.com"]), &diag));

    let messages = diag.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("host.example.com"));
}

#[test]
fn test_is_less_silent_for_ips() {
    let diag = RecordingDiagnostics::default();
    assert!(t(&["1.2.3.4"]).is_less_with(&t(&["1.2.3.5"]), &diag));
    assert!(diag.is_empty());
}

// =============================================================================
// Misc
// =============================================================================

#[test]
fn test_display_joins_with_semicolon() {
    assert_eq!(t(&["1.1.1.1", "2.2.2.2"]).to_string(), "1.1.1.1;2.2.2.2");
    assert_eq!(t(&[]).to_string(), "");
}

#[test]
fn test_new_copies_verbatim() {
    let targets = t(&["example.com."]);
    assert_eq!(targets.as_slice(), ["example.com."]);
}

#[test]
fn test_sort_in_place() {
    let mut targets = t(&["b", "a", "C"]);
    targets.sort();
    assert_eq!(targets.as_slice(), ["C", "a", "b"]);
}
