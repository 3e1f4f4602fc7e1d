//! Deriving original filenames from a source root and a package-relative path.

/// Split a `/`-separated path into its non-empty segments.
fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

/// Number of trailing segments of `source_root_prefix` that equal the leading
/// segments of `relative_path`.
///
/// Matching is segment-wise, so `test` never overlaps `testing`. The longest
/// overlap wins.
pub fn overlap_len(source_root_prefix: &str, relative_path: &str) -> usize {
    let prefix: Vec<&str> = segments(source_root_prefix).collect();
    let relative: Vec<&str> = segments(relative_path).collect();
    let max = prefix.len().min(relative.len());

    (1..=max)
        .rev()
        .find(|&k| prefix[prefix.len() - k..] == relative[..k])
        .unwrap_or(0)
}

/// Combine a source root with a package-relative path.
///
/// Segments that the end of `source_root_prefix` already shares with the start
/// of `relative_path` are written once:
///
/// ```
/// use coverage_srcmap::derive_original_filename;
///
/// assert_eq!(
///     derive_original_filename("junit_runner/src/build/please/test", "build/please/test/TestCoverage"),
///     "junit_runner/src/build/please/test/TestCoverage",
/// );
/// assert_eq!(
///     derive_original_filename("junit_runner/src", "build/please/test/TestCoverage"),
///     "junit_runner/src/build/please/test/TestCoverage",
/// );
/// assert_eq!(derive_original_filename("", "build/please/test/TestCoverage"), "build/please/test/TestCoverage");
/// ```
pub fn derive_original_filename(source_root_prefix: &str, relative_path: &str) -> String {
    let prefix = source_root_prefix.trim_end_matches('/');
    if prefix.is_empty() {
        return relative_path.to_string();
    }

    let overlap = overlap_len(prefix, relative_path);
    let remainder: Vec<&str> = segments(relative_path).skip(overlap).collect();

    if remainder.is_empty() {
        prefix.to_string()
    } else {
        format!("{}/{}", prefix, remainder.join("/"))
    }
}
