#![no_main]

use arbitrary::Arbitrary;
use dns_endpoint::ProviderSpecific;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
    Set(String, String),
    Delete(String),
}

fuzz_target!(|ops: Vec<Op>| {
    let mut ps = ProviderSpecific::new();

    for op in ops {
        match op {
            Op::Set(name, value) => {
                let before = ps.len();
                let existed = ps.get(&name).is_some();
                ps.set(name.clone(), value.clone());
                assert_eq!(ps.get(&name), Some(value.as_str()));
                assert_eq!(ps.len(), if existed { before } else { before + 1 });
            }
            Op::Delete(name) => {
                let before = ps.len();
                let existed = ps.get(&name).is_some();
                ps.delete(&name);
                assert!(ps.get(&name).is_none());
                assert_eq!(ps.len(), if existed { before - 1 } else { before });
            }
        }
    }
});
