//! Diagram syntax checking.
//!
//! The markdown checks hand every diagram block to a [`DiagramChecker`]. The
//! bundled [`MermaidChecker`] covers the structural rules of Mermaid; other
//! checkers can be plugged into [`crate::checks::CourseValidator`].

mod mermaid;

use thiserror::Error;

pub use mermaid::MermaidChecker;

/// A rejected diagram. The message may span several lines; reports only
/// show the first one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DiagramError {
    pub message: String,
}

impl DiagramError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// First line of the message
    #[must_use]
    pub fn headline(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }
}

/// Pass/fail syntax check for one diagram block
pub trait DiagramChecker {
    fn check(&self, source: &str) -> Result<(), DiagramError>;
}

/// Diagram type token of a block: the first whitespace- or brace-delimited
/// token of its first line.
#[must_use]
pub fn diagram_kind(source: &str) -> &str {
    let first_line = source.trim().lines().next().unwrap_or_default().trim();
    first_line
        .split(|c: char| c.is_whitespace() || c == '{')
        .next()
        .unwrap_or_default()
}
