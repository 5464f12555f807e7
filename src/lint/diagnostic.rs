//! Diagnostic types for course validation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of a finding
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Malformed JSON
    Parse,
    /// Missing file or directory
    NotFound,
    /// Missing or invalid required field
    Schema,
    /// ID mismatch, duplicate, dangling reference
    Reference,
    /// Naming or path-pattern deviation (always a warning)
    Convention,
    /// Diagram syntax failure
    ContentSyntax,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse => write!(f, "parse"),
            Self::NotFound => write!(f, "not_found"),
            Self::Schema => write!(f, "schema"),
            Self::Reference => write!(f, "reference"),
            Self::Convention => write!(f, "convention"),
            Self::ContentSyntax => write!(f, "content_syntax"),
        }
    }
}

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A check that succeeded
    Pass,
    /// Should fix, but does not fail the run
    Warning,
    /// Must fix, fails the run
    Error,
}

impl Severity {
    /// Glyph printed in front of each report line
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Pass => "✓",
            Self::Error => "✗",
            Self::Warning => "⚠",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => write!(f, "pass"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A single finding. Never mutated once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    pub message: String,
}

impl Diagnostic {
    /// Create a passing check
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Pass,
            category: None,
            message: message.into(),
        }
    }

    /// Create an error diagnostic
    pub fn error(category: Category, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            category: Some(category),
            message: message.into(),
        }
    }

    /// Create a warning diagnostic
    pub fn warning(category: Category, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            category: Some(category),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.severity.glyph(), self.message)
    }
}
