//! Mapping between instrumented source paths and their original locations.
//!
//! Coverage instrumentation rewrites files into a generated tree; these
//! modules recover where each file originally lived so results can be
//! attributed back to it.

pub mod map;
pub mod path;
pub mod reader;
