#![no_main]

use coverage_srcmap::SourceMap;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(map) = SourceMap::from_reader("fuzz", data) {
        assert!(!map.is_empty());
        for (instrumented, original) in map.iter() {
            assert!(!instrumented.is_empty() && !original.is_empty());
            assert_eq!(map.get(instrumented), Some(original));
        }
    }
});
