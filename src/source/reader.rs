//! Locating and reading persisted source maps.
//!
//! The resource is never looked up through process-global state; callers pick a
//! [`ResourceLocator`] and hand it to a [`SourceMapReader`].

use crate::logging;
use crate::source::map::{parse_entries, SourceMap};
use crate::{Result, SourceMapError};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::{Path, PathBuf};

/// Resource name the build writes the source map under.
pub const DEFAULT_RESOURCE: &str = "META-INF/please_sourcemap";

/// An opened resource, ready to be parsed.
pub struct OpenedResource<'a> {
    /// Where the resource was found, for diagnostics.
    pub location: String,
    pub reader: Box<dyn BufRead + 'a>,
}

/// Finds a named resource and opens it for reading.
pub trait ResourceLocator {
    fn open(&self, name: &str) -> Result<OpenedResource<'_>>;

    /// Human-readable description of where this locator looks.
    fn describe(&self) -> String;
}

impl<T: ResourceLocator + ?Sized> ResourceLocator for Box<T> {
    fn open(&self, name: &str) -> Result<OpenedResource<'_>> {
        (**self).open(name)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

fn open_file(name: &str, path: &Path) -> Result<OpenedResource<'static>> {
    let file = File::open(path)
        .map_err(|e| SourceMapError::unavailable(name, path.display().to_string(), e))?;
    Ok(OpenedResource {
        location: path.display().to_string(),
        reader: Box::new(BufReader::new(file)),
    })
}

/// Reads one explicit file regardless of the requested resource name.
#[derive(Debug, Clone)]
pub struct FileLocator {
    path: PathBuf,
}

impl FileLocator {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ResourceLocator for FileLocator {
    fn open(&self, name: &str) -> Result<OpenedResource<'_>> {
        open_file(name, &self.path)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

/// Looks the resource up under an ordered list of root directories; the first
/// root that contains it wins.
#[derive(Debug, Clone, Default)]
pub struct SearchPathLocator {
    roots: Vec<PathBuf>,
}

impl SearchPathLocator {
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// First existing candidate for `name`, if any.
    pub fn find(&self, name: &str) -> Option<PathBuf> {
        self.roots
            .iter()
            .map(|root| root.join(name))
            .find(|candidate| candidate.is_file())
    }
}

impl ResourceLocator for SearchPathLocator {
    fn open(&self, name: &str) -> Result<OpenedResource<'_>> {
        match self.find(name) {
            Some(path) => open_file(name, &path),
            None => Err(SourceMapError::unavailable(
                name,
                self.describe(),
                "not found on search path",
            )),
        }
    }

    fn describe(&self) -> String {
        let roots: Vec<String> = self
            .roots
            .iter()
            .map(|root| root.display().to_string())
            .collect();
        format!("search path [{}]", roots.join(", "))
    }
}

/// Serves resources from memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLocator {
    resources: HashMap<String, Vec<u8>>,
}

impl InMemoryLocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        self.insert(name, contents);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, contents: impl Into<Vec<u8>>) {
        self.resources.insert(name.into(), contents.into());
    }
}

impl ResourceLocator for InMemoryLocator {
    fn open(&self, name: &str) -> Result<OpenedResource<'_>> {
        let contents = self.resources.get(name).ok_or_else(|| {
            SourceMapError::unavailable(name, self.describe(), "no such resource")
        })?;
        Ok(OpenedResource {
            location: format!("memory:{}", name),
            reader: Box::new(Cursor::new(contents.as_slice())),
        })
    }

    fn describe(&self) -> String {
        format!("in-memory ({} resources)", self.resources.len())
    }
}

/// Reads the source map resource through an injected locator.
pub struct SourceMapReader<L = Box<dyn ResourceLocator>> {
    locator: L,
    resource: String,
}

impl<L: ResourceLocator> SourceMapReader<L> {
    /// Reader for [`DEFAULT_RESOURCE`].
    pub fn new(locator: L) -> Self {
        Self::with_resource(locator, DEFAULT_RESOURCE)
    }

    pub fn with_resource(locator: L, resource: impl Into<String>) -> Self {
        Self {
            locator,
            resource: resource.into(),
        }
    }

    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn locator(&self) -> &L {
        &self.locator
    }

    /// Load the full mapping. A missing resource is `ResourceUnavailable`; one
    /// that can't be parsed, or holds no entries, is `MalformedMapping`.
    pub fn read_source_map(&self) -> Result<SourceMap> {
        logging::log_reading_source_map(&self.resource, &self.locator.describe());

        let result = self.locator.open(&self.resource).and_then(|opened| {
            parse_entries(&self.resource, &opened.location, opened.reader)
        });

        match &result {
            Ok(map) => logging::log_source_map_loaded(&self.resource, map.len()),
            Err(err) => logging::log_source_map_failed(&self.resource, err),
        }
        result
    }
}
