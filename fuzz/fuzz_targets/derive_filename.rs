#![no_main]

use coverage_srcmap::{derive_original_filename, overlap_len};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (&str, &str)| {
    let (prefix, relative) = input;
    let derived = derive_original_filename(prefix, relative);
    let overlap = overlap_len(prefix, relative);
    let prefix = prefix.trim_end_matches('/');

    if prefix.is_empty() {
        assert_eq!(derived, relative);
    } else {
        assert!(derived.starts_with(prefix));
        assert!(overlap <= relative.split('/').filter(|s| !s.is_empty()).count());
    }
});
