use crate::config::Config;
use crate::source::reader::{FileLocator, ResourceLocator, SearchPathLocator, SourceMapReader};
use crate::ui::formatter::Formatter;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;
use tracing::warn;

#[derive(Parser)]
#[command(name = "srcmap")]
#[command(
    about = "Map instrumented source paths back to their original locations",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Only print results and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Show internal details such as overlap counts and log output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a config file (default: ./.srcmap.toml if present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else if self.verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
}

impl Verbosity {
    /// Fallback tracing level when `RUST_LOG` isn't set.
    pub fn to_log_level(self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "debug",
        }
    }

    pub fn as_u8(self) -> u8 {
        match self {
            Verbosity::Quiet => 0,
            Verbosity::Normal => 1,
            Verbosity::Verbose => 2,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Derive the original filename for a package-relative path
    Derive(DeriveArgs),

    /// Print the original path recorded for an instrumented path
    Lookup(LookupArgs),

    /// Print every entry of the source map
    Dump(DumpArgs),

    /// Validate the source map and report how many entries it holds
    Check(CheckArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser)]
pub struct DeriveArgs {
    /// Path relative to the package, e.g. build/please/test/TestCoverage
    pub relative: String,

    /// Source root prefix the original file lives under
    #[arg(short, long, value_name = "PREFIX")]
    pub source_root: Option<String>,
}

impl DeriveArgs {
    pub fn merge_config(&mut self, config: &Config) {
        if self.source_root.is_none() {
            self.source_root = config.derive.source_root.clone();
        }
    }
}

/// Where to read the source map from.
#[derive(Args, Clone, Default)]
pub struct SourceArgs {
    /// Read the source map from this file
    #[arg(short, long, value_name = "FILE", conflicts_with = "search_path")]
    pub map: Option<PathBuf>,

    /// Root directory to search for the resource (repeatable, first match wins)
    #[arg(long = "search-path", value_name = "DIR")]
    pub search_path: Vec<PathBuf>,

    /// Resource name to look up on the search path
    #[arg(long, value_name = "NAME")]
    pub resource: Option<String>,
}

impl SourceArgs {
    /// Reader for these arguments, with the config filling whatever wasn't given.
    pub fn reader(&self, config: &Config) -> SourceMapReader {
        let locator: Box<dyn ResourceLocator> = if let Some(map) = &self.map {
            Box::new(FileLocator::new(map.clone()))
        } else if !self.search_path.is_empty() {
            Box::new(SearchPathLocator::new(self.search_path.iter().cloned()))
        } else {
            config.locator()
        };

        let resource = self
            .resource
            .clone()
            .unwrap_or_else(|| config.resource_name().to_string());
        SourceMapReader::with_resource(locator, resource)
    }
}

#[derive(Parser)]
pub struct LookupArgs {
    /// Instrumented path to look up
    pub key: String,

    /// Print the key itself instead of failing when it isn't mapped
    #[arg(long)]
    pub or_self: bool,

    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
pub struct DumpArgs {
    /// Output format (default: text, or `output.format` from the config)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(flatten)]
    pub source: SourceArgs,
}

impl DumpArgs {
    pub fn merge_config(&mut self, config: &Config) {
        if self.format.is_some() {
            return;
        }
        if let Some(format) = config.output.format.as_deref() {
            match OutputFormat::from_str(format, true) {
                Ok(parsed) => self.format = Some(parsed),
                Err(_) => {
                    warn!(format, "Unknown output format in config");
                    eprintln!(
                        "{}",
                        Formatter::warning(format!(
                            "Warning: Unknown output format `{}` in config, using text.",
                            format
                        ))
                    );
                }
            }
        }
    }
}

#[derive(Parser)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Parser)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
