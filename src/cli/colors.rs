//! Terminal colors for the human report.
//!
//! Provides color support detection that respects terminal capabilities,
//! `NO_COLOR` and the configured [`ColorChoice`], plus the styles used for
//! severity glyphs and the summary line.
//!
//! # Usage
//!
//! ```rust,ignore
//! use coursecheck::cli::colors::{ColorSupport, ReportStyles, styled};
//!
//! let support = ColorSupport::detect();
//! let text = styled("passed", ReportStyles::pass, support);
//! ```

use std::io::IsTerminal;

use colored::{ColoredString, Colorize};

use crate::config::ColorChoice;
use crate::lint::Severity;

// ============================================================================
// Color Support Detection
// ============================================================================

/// Whether the report may use ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSupport {
    /// No color (NO_COLOR set, TERM=dumb, piped output, or disabled)
    None,
    /// Basic 16-color support
    Basic,
}

impl ColorSupport {
    /// Detect color support from environment and terminal capabilities
    #[must_use]
    pub fn detect() -> Self {
        // https://no-color.org/
        if std::env::var("NO_COLOR").is_ok() {
            return Self::None;
        }

        if std::env::var("FORCE_COLOR").is_ok() {
            return Self::Basic;
        }

        if !std::io::stdout().is_terminal() {
            return Self::None;
        }

        if std::env::var("TERM").is_ok_and(|term| term == "dumb") {
            return Self::None;
        }

        Self::Basic
    }

    /// Resolve the configured choice. `always` and `never` also pin the
    /// `colored` crate's own detection so styled strings agree.
    #[must_use]
    pub fn from_choice(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::detect(),
            ColorChoice::Always => {
                colored::control::set_override(true);
                Self::Basic
            }
            ColorChoice::Never => {
                colored::control::set_override(false);
                Self::None
            }
        }
    }

    #[must_use]
    pub const fn has_color(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl Default for ColorSupport {
    fn default() -> Self {
        Self::detect()
    }
}

// ============================================================================
// Pre-built Styles
// ============================================================================

/// Styles used by the report
pub struct ReportStyles;

impl ReportStyles {
    /// Passing check (green)
    pub fn pass(text: &str) -> ColoredString {
        text.green()
    }

    /// Error (red, bold)
    pub fn error(text: &str) -> ColoredString {
        text.red().bold()
    }

    /// Warning (yellow)
    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    /// Emphasized text (bold only)
    pub fn bold(text: &str) -> ColoredString {
        text.bold()
    }

    /// Glyph for a severity in its color
    pub fn glyph(severity: Severity) -> ColoredString {
        let glyph = severity.glyph();
        match severity {
            Severity::Pass => Self::pass(glyph).bold(),
            Severity::Warning => Self::warning(glyph),
            Severity::Error => Self::error(glyph),
        }
    }
}

// ============================================================================
// Conditional Styling
// ============================================================================

/// Apply a style conditionally based on color support
///
/// If colors are not supported, returns the plain text.
pub fn styled<S, F>(text: S, style_fn: F, support: ColorSupport) -> String
where
    S: AsRef<str>,
    F: FnOnce(&str) -> ColoredString,
{
    if support.has_color() {
        style_fn(text.as_ref()).to_string()
    } else {
        text.as_ref().to_string()
    }
}

/// Use the colored string when colors are supported, the plain text otherwise
pub fn with_color<S: AsRef<str>>(colored: ColoredString, plain: S, support: ColorSupport) -> String {
    if support.has_color() {
        colored.to_string()
    } else {
        plain.as_ref().to_string()
    }
}

/// Severity glyph (✓ ✗ ⚠)
pub fn format_severity(severity: Severity, support: ColorSupport) -> String {
    with_color(ReportStyles::glyph(severity), severity.glyph(), support)
}
