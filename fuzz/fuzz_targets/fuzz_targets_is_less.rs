#![no_main]

use dns_endpoint::Targets;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (Vec<String>, Vec<String>)| {
    let a = Targets::new(input.0.clone());
    let b = Targets::new(input.1.clone());

    let ab = a.is_less(&b);
    let ba = b.is_less(&a);

    // Never both directions
    assert!(!(ab && ba));
    assert!(!a.is_less(&a.clone()));

    // Comparison must not reorder the inputs
    assert_eq!(a.as_slice(), input.0.as_slice());
    assert_eq!(b.as_slice(), input.1.as_slice());
});
