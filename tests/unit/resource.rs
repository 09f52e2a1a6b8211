//! Unit tests for the DNSEndpoint resource wrapper.

use dns_endpoint::{DnsEndpoint, DnsEndpointList, Endpoint, RecordType};
use serde_json::json;

use crate::common::owned_a;

#[test]
fn test_new_sets_type_meta() {
    let res = DnsEndpoint::new("web", vec![]);
    assert_eq!(res.api_version, "externaldns.k8s.io/v1alpha1");
    assert_eq!(res.kind, "DNSEndpoint");
    assert_eq!(res.metadata.name.as_deref(), Some("web"));
    assert_eq!(res.status.observed_generation, 0);
}

#[test]
fn test_deserialize_resource() {
    let res: DnsEndpoint = serde_json::from_value(json!({
        "apiVersion": "externaldns.k8s.io/v1alpha1",
        "kind": "DNSEndpoint",
        "metadata": { "name": "web", "namespace": "default", "generation": 3 },
        "spec": {
            "endpoints": [
                { "dnsName": "a.com", "recordType": "A", "targets": ["1.1.1.1"], "recordTTL": 180 },
                { "dnsName": "b.com", "recordType": "CNAME", "targets": ["a.com"] }
            ]
        },
        "status": { "observedGeneration": 2 }
    }))
    .unwrap();

    assert_eq!(res.metadata.namespace.as_deref(), Some("default"));
    assert_eq!(res.metadata.generation, Some(3));
    assert_eq!(res.status.observed_generation, 2);

    let endpoints = res.into_endpoints();
    assert_eq!(endpoints.len(), 2);
    assert_eq!(endpoints[0].record_ttl.as_secs(), 180);
    assert_eq!(endpoints[1].record_type, RecordType::CNAME);
}

#[test]
fn test_embed_and_extract_losslessly() {
    let endpoints = vec![
        owned_a("a.com", "1.1.1.1", "x").with_provider_specific("alias", "true"),
        Endpoint::new("b.com", RecordType::AAAA, ["::1"]).unwrap().with_set_identifier("v6"),
    ];

    let res = DnsEndpoint::new("web", endpoints.clone());
    let text = serde_json::to_string(&res).unwrap();
    let back: DnsEndpoint = serde_json::from_str(&text).unwrap();

    assert_eq!(back, res);
    assert_eq!(back.endpoints(), endpoints.as_slice());
}

#[test]
fn test_status_omitted_when_unobserved() {
    let value = serde_json::to_value(DnsEndpoint::new("web", vec![])).unwrap();
    assert_eq!(value["status"], json!({}));
    assert_eq!(value["spec"], json!({}));
}

#[test]
fn test_list_flattens_endpoints() {
    let list = DnsEndpointList::new(vec![
        DnsEndpoint::new("one", vec![owned_a("a.com", "1.1.1.1", "x")]),
        DnsEndpoint::new("two", vec![owned_a("b.com", "2.2.2.2", "x"), owned_a("c.com", "3.3.3.3", "x")]),
    ]);

    assert_eq!(list.kind, "DNSEndpointList");
    let names: Vec<&str> = list.endpoints().map(|ep| ep.dns_name.as_str()).collect();
    assert_eq!(names, ["a.com", "b.com", "c.com"]);
}
