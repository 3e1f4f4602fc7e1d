use coverage_srcmap::SourceMap;
use proptest::prelude::*;
use std::collections::BTreeMap;

fn map_path() -> impl Strategy<Value = String> {
    "[a-z_]{1,6}(/[a-zA-Z_]{1,6}){0,3}\\.java"
}

proptest! {
    #[test]
    fn every_written_entry_is_read_back(
        entries in prop::collection::btree_map(map_path(), map_path(), 1..20),
    ) {
        let contents: String = entries
            .iter()
            .map(|(k, v)| format!("{}={}\n", k, v))
            .collect();
        let source_map = SourceMap::parse("sourcemap", &contents).unwrap();

        prop_assert_eq!(source_map.len(), entries.len());
        let read: BTreeMap<String, String> = source_map
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        prop_assert_eq!(read, entries);
    }

    #[test]
    fn parsing_is_deterministic(
        entries in prop::collection::btree_map(map_path(), map_path(), 1..10),
    ) {
        let contents: String = entries
            .iter()
            .map(|(k, v)| format!("  {} = {}  \n# comment\n\n", k, v))
            .collect();
        let first = SourceMap::parse("sourcemap", &contents).unwrap();
        let second = SourceMap::parse("sourcemap", &contents).unwrap();
        prop_assert_eq!(first, second);
    }
}
