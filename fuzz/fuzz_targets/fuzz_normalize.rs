#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (&str, Option<&str>)| {
    let (path, locale) = input;
    // Normalisation never panics and is idempotent
    let once = sidenav::normalize(path, locale);
    assert_eq!(sidenav::normalize(&once, locale), once);
});
