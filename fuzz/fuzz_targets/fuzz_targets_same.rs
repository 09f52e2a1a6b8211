#![no_main]

use dns_endpoint::Targets;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (Vec<String>, Vec<String>)| {
    let a = Targets::new(input.0.clone());
    let b = Targets::new(input.1);

    assert_eq!(a.same(&b), b.same(&a));
    assert!(a.same(&a.clone()));

    let mut reversed = input.0;
    reversed.reverse();
    assert!(a.same(&Targets::new(reversed)));
});
