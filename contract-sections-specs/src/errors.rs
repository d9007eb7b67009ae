//! Error types for the spec harness.
//!
//! This module defines error types for fixture parsing and fixture loading.

use thiserror::Error;

/// Errors that can occur while running fixtures.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Error parsing a fixture or expected-failures file.
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Error loading a fixture file.
    #[error("failed to load fixture: {path}: {message}")]
    Load { path: String, message: String },
}

impl SpecError {
    /// Build a parse error from a TOML error, resolving its byte span to a
    /// 1-based line number in `content`.
    pub fn from_toml(content: &str, err: &toml::de::Error) -> Self {
        let line = err
            .span()
            .map(|span| {
                let end = span.start.min(content.len());
                content.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() + 1
            })
            .unwrap_or(0);
        SpecError::Parse {
            line,
            message: err.message().to_string(),
        }
    }
}

/// Result type for spec operations.
pub type SpecResult<T> = Result<T, SpecError>;
