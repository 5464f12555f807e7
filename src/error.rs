//! Error types for coursecheck.
//!
//! Validation findings are reported as diagnostics, never as errors. The
//! variants here cover the conditions that stop a run before it starts.

use std::path::PathBuf;

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, CourseError>;

#[derive(Debug, Error)]
pub enum CourseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Course folder not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("{0}")]
    Usage(String),
}

impl CourseError {
    /// Short machine-readable code used in robot output
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io(_) | Self::Walk(_) => "io",
            Self::Json(_) => "json",
            Self::Config(_) => "config",
            Self::NotFound(_) => "not_found",
            Self::NotADirectory(_) => "not_a_directory",
            Self::Usage(_) => "usage",
        }
    }
}
