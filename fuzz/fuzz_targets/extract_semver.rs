#![no_main]

use libfuzzer_sys::fuzz_target;
use segver::{SEMVER, SIMPLE, compare};

fuzz_target!(|data: (&str, &str)| {
    let (a, b) = data;
    let (Ok(a), Ok(b)) = (SEMVER.extract(a), SIMPLE.extract(b)) else {
        return;
    };
    assert_eq!(compare(&a, &b), compare(&b, &a).reverse());
    assert_eq!(a.core_version().split('.').count(), 3);
});
