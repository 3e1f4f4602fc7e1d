pub mod cli;
pub mod config;
pub mod logging;
pub mod source;
pub mod ui;

use miette::Diagnostic;

pub use config::Config;
pub use source::map::SourceMap;
pub use source::path::{derive_original_filename, overlap_len};
pub use source::reader::{
    FileLocator, InMemoryLocator, ResourceLocator, SearchPathLocator, SourceMapReader,
    DEFAULT_RESOURCE,
};

/// Result type alias for source map operations
pub type Result<T, E = SourceMapError> = std::result::Result<T, E>;

/// Error types for source map loading
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum SourceMapError {
    #[error("Source map resource `{resource}` is unavailable ({location}): {reason}")]
    #[diagnostic(
        code(srcmap::resource_unavailable),
        help("Check that the build wrote the source map and that --map or --search-path points at it.")
    )]
    ResourceUnavailable {
        resource: String,
        location: String,
        reason: String,
    },

    #[error("Malformed source map `{resource}` ({location}) at line {line}: {reason}")]
    #[diagnostic(
        code(srcmap::malformed_mapping),
        help("Each entry must be a single `instrumented/path=original/path` line. Lines starting with `#` are ignored.")
    )]
    MalformedMapping {
        resource: String,
        location: String,
        line: usize,
        reason: String,
    },

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(srcmap::config_error),
        help("Check that the config file exists and is valid TOML.")
    )]
    Config(String),
}

impl SourceMapError {
    pub(crate) fn unavailable(
        resource: impl Into<String>,
        location: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        SourceMapError::ResourceUnavailable {
            resource: resource.into(),
            location: location.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn malformed(
        resource: impl Into<String>,
        location: impl Into<String>,
        line: usize,
        reason: impl ToString,
    ) -> Self {
        SourceMapError::MalformedMapping {
            resource: resource.into(),
            location: location.into(),
            line,
            reason: reason.to_string(),
        }
    }
}
