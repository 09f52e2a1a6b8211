#![no_main]

use dns_endpoint::{Endpoint, Error, MAX_LABEL_LEN};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (&str, &str, Vec<&str>)| {
    let (name, typ, targets) = input;
    let has_long_label = name.split('.').any(|l| l.len() > MAX_LABEL_LEN);

    match Endpoint::new(name, typ, targets.iter().copied()) {
        Ok(ep) => {
            assert!(!has_long_label);
            // Exactly one trailing dot is removed
            assert_eq!(ep.dns_name, name.strip_suffix('.').unwrap_or(name));
            assert_eq!(ep.targets.len(), targets.len());
            assert_eq!(ep.record_type.as_str(), typ);
            let _ = ep.to_string();
        }
        Err(Error::LabelTooLong { label, .. }) => {
            assert!(has_long_label);
            assert!(label.len() > MAX_LABEL_LEN);
        }
    }
});
