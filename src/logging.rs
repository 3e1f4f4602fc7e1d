//! Structured logging utilities for coverage-srcmap.
//!
//! This module provides helper functions for consistent, structured logging
//! across the crate using the `tracing` crate.

use std::fmt;

/// Helper function to format and log multi-line output without structured fields.
/// Used for formatted displays like tables and summaries.
pub fn log_display<D: fmt::Display>(message: D, level: LogLevel) {
    let msg = message.to_string();
    match level {
        LogLevel::Info => tracing::info!("{}", msg),
        LogLevel::Warn => tracing::warn!("{}", msg),
        LogLevel::Error => tracing::error!("{}", msg),
        LogLevel::Debug => tracing::debug!("{}", msg),
    }
}

/// Log levels matching tracing crate levels.
#[derive(Debug, Clone, Copy)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Debug,
}

/// Log the start of a source map read.
pub fn log_reading_source_map(resource: &str, locator: &str) {
    tracing::info!(resource, locator, "Reading source map");
}

/// Log a successful source map read.
pub fn log_source_map_loaded(resource: &str, entries: usize) {
    tracing::info!(resource, entries, "Source map loaded");
}

pub fn log_source_map_failed(resource: &str, error: &dyn std::error::Error) {
    tracing::warn!(resource, error = %error, "Failed to read source map");
}

/// Log a derived original filename.
pub fn log_derived_filename(prefix: &str, relative: &str, overlap: usize, derived: &str) {
    tracing::debug!(prefix, relative, overlap, derived, "Derived original filename");
}

/// Log a lookup that found no entry.
pub fn log_lookup_miss(key: &str) {
    tracing::debug!(key, "No source map entry");
}

/// Log which config file was used.
pub fn log_config_loaded(path: &str) {
    tracing::debug!(path, "Configuration loaded");
}
