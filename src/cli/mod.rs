pub mod args;
pub mod commands;

pub use args::{
    CheckArgs, Cli, Commands, CompletionsArgs, DeriveArgs, DumpArgs, LookupArgs, OutputFormat,
    SourceArgs, Verbosity,
};
