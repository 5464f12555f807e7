//! Append-only diagnostics log for a single validation run.

use serde::Serialize;

use super::diagnostic::{Category, Diagnostic, Severity};

/// Tally of diagnostics by severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub passed: usize,
    pub errors: usize,
    pub warnings: usize,
}

/// Ordered findings of one run. Each validator appends; nothing is removed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn pass(&mut self, message: impl Into<String>) {
        self.push(Diagnostic::pass(message));
    }

    pub fn error(&mut self, category: Category, message: impl Into<String>) {
        self.push(Diagnostic::error(category, message));
    }

    pub fn warn(&mut self, category: Category, message: impl Into<String>) {
        self.push(Diagnostic::warning(category, message));
    }

    /// All diagnostics in emission order
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.by_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.by_severity(Severity::Warning)
    }

    pub fn passes(&self) -> impl Iterator<Item = &Diagnostic> {
        self.by_severity(Severity::Pass)
    }

    fn by_severity(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |d| d.severity == severity)
    }

    #[must_use]
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    #[must_use]
    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary {
            passed: self.passes().count(),
            errors: self.error_count(),
            warnings: self.warning_count(),
        }
    }

    /// True when no error was recorded. Warnings never fail a run here;
    /// strict mode is applied by the caller.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.error_count() == 0
    }

    /// `Results: P passed, E error(s), W warning(s)`
    #[must_use]
    pub fn summary_line(&self) -> String {
        let summary = self.summary();
        format!(
            "Results: {} passed, {} error{}, {} warning{}",
            summary.passed,
            summary.errors,
            plural(summary.errors),
            summary.warnings,
            plural(summary.warnings)
        )
    }

    /// Whether any diagnostic message contains `needle`
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.diagnostics.iter().any(|d| d.message.contains(needle))
    }

    /// Count diagnostics of `severity` whose message contains `needle`
    #[must_use]
    pub fn count_matching(&self, severity: Severity, needle: &str) -> usize {
        self.by_severity(severity)
            .filter(|d| d.message.contains(needle))
            .count()
    }
}

const fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
