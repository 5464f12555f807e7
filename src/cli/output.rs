//! Report rendering: the human console report and the robot JSON envelope.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::colors::{ColorSupport, ReportStyles, format_severity, styled};
use crate::error::{CourseError, Result};
use crate::lint::{Diagnostic, Summary, ValidationReport};

#[derive(Serialize)]
pub struct RobotResponse<T> {
    pub status: RobotStatus,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub data: T,
}

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RobotStatus {
    Ok,
    Error { code: String, message: String },
}

pub fn robot_ok<T: Serialize>(data: T) -> RobotResponse<T> {
    RobotResponse {
        status: RobotStatus::Ok,
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data,
    }
}

pub fn robot_error(
    code: impl Into<String>,
    message: impl Into<String>,
) -> RobotResponse<serde_json::Value> {
    RobotResponse {
        status: RobotStatus::Error {
            code: code.into(),
            message: message.into(),
        },
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        data: serde_json::Value::Null,
    }
}

pub fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value)
        .map_err(|err| CourseError::Config(format!("serialize output: {err}")))?;
    println!("{payload}");
    Ok(())
}

/// Robot payload for one validation run
#[derive(Debug, Serialize)]
pub struct CourseReport<'a> {
    pub course: &'a str,
    /// Run outcome, strict mode included
    pub passed: bool,
    pub summary: Summary,
    pub diagnostics: &'a [Diagnostic],
}

impl<'a> CourseReport<'a> {
    #[must_use]
    pub fn new(course: &'a str, report: &'a ValidationReport, passed: bool) -> Self {
        Self {
            course,
            passed,
            summary: report.summary(),
            diagnostics: report.diagnostics(),
        }
    }
}

pub struct HumanLayout {
    lines: Vec<String>,
    support: ColorSupport,
}

impl HumanLayout {
    #[must_use]
    pub const fn new(support: ColorSupport) -> Self {
        Self {
            lines: Vec::new(),
            support,
        }
    }

    pub fn title(&mut self, text: &str) -> &mut Self {
        self.lines.push(styled(text, ReportStyles::bold, self.support));
        self.lines.push(String::new());
        self
    }

    /// `  <glyph> <message>`
    pub fn diagnostic(&mut self, diagnostic: &Diagnostic) -> &mut Self {
        self.lines.push(format!(
            "  {} {}",
            format_severity(diagnostic.severity, self.support),
            diagnostic.message
        ));
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    pub fn push_line(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    #[must_use]
    pub fn build(self) -> String {
        self.lines.join("\n")
    }
}

/// Full console report for one course
#[must_use]
pub fn render_human(course: &str, report: &ValidationReport, support: ColorSupport) -> String {
    let mut layout = HumanLayout::new(support);
    layout.title(&format!("Validating course: {course}"));
    for diagnostic in report.diagnostics() {
        layout.diagnostic(diagnostic);
    }
    layout.blank();

    let summary = report.summary_line();
    let summary = if report.error_count() > 0 {
        styled(summary, ReportStyles::error, support)
    } else {
        styled(summary, ReportStyles::bold, support)
    };
    layout.push_line(summary);
    layout.build()
}

pub fn emit_human(course: &str, report: &ValidationReport, support: ColorSupport) {
    println!("{}", render_human(course, report, support));
}
