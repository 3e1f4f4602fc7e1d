use crate::source::reader::{FileLocator, SourceMapReader};
use crate::{Result, SourceMapError};
use serde::Serialize;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::io::{self, BufRead};
use std::path::Path;

/// Immutable mapping from instrumented file paths to original file paths.
///
/// The textual form is one `instrumented/path=original/path` entry per line.
/// Blank lines and lines starting with `#` are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SourceMap {
    entries: BTreeMap<String, String>,
}

impl SourceMap {
    /// Parse a source map from an in-memory string.
    pub fn parse(resource: &str, contents: &str) -> Result<Self> {
        Self::from_reader(resource, contents.as_bytes())
    }

    /// Parse a source map from a buffered reader. `resource` names the input
    /// in error messages.
    pub fn from_reader<R: BufRead>(resource: &str, reader: R) -> Result<Self> {
        parse_entries(resource, resource, reader)
    }

    /// Read a source map from an explicit file on disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        SourceMapReader::new(FileLocator::new(path.as_ref())).read_source_map()
    }

    /// Original path recorded for an instrumented path.
    pub fn get(&self, instrumented: &str) -> Option<&str> {
        self.entries.get(instrumented).map(String::as_str)
    }

    pub fn contains_key(&self, instrumented: &str) -> bool {
        self.entries.contains_key(instrumented)
    }

    /// Original path for `path`, or `path` itself when it isn't mapped.
    pub fn resolve<'a>(&'a self, path: &'a str) -> &'a str {
        self.get(path).unwrap_or(path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by instrumented path.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

pub(crate) fn parse_entries<R: BufRead>(
    resource: &str,
    location: &str,
    reader: R,
) -> Result<SourceMap> {
    let mut entries = BTreeMap::new();

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line.map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData => SourceMapError::malformed(
                resource,
                location,
                line_no,
                "line is not valid UTF-8",
            ),
            _ => SourceMapError::unavailable(resource, location, e),
        })?;

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (key, value) = trimmed.split_once('=').ok_or_else(|| {
            SourceMapError::malformed(
                resource,
                location,
                line_no,
                format!("expected `key=value`, got `{}`", trimmed),
            )
        })?;
        let (key, value) = (key.trim(), value.trim());

        if key.is_empty() {
            return Err(SourceMapError::malformed(
                resource,
                location,
                line_no,
                "empty instrumented path",
            ));
        }
        if value.is_empty() {
            return Err(SourceMapError::malformed(
                resource,
                location,
                line_no,
                format!("empty original path for `{}`", key),
            ));
        }

        match entries.entry(key.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(value.to_string());
            }
            Entry::Occupied(existing) if existing.get() == value => {}
            Entry::Occupied(existing) => {
                return Err(SourceMapError::malformed(
                    resource,
                    location,
                    line_no,
                    format!(
                        "`{}` is mapped to both `{}` and `{}`",
                        key,
                        existing.get(),
                        value
                    ),
                ));
            }
        }
    }

    if entries.is_empty() {
        return Err(SourceMapError::malformed(resource, location, 0, "no mappings"));
    }

    Ok(SourceMap { entries })
}
