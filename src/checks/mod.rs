//! Course validators and the pipeline that runs them.
//!
//! Each submodule checks one part of a course and appends to a shared
//! [`ValidationReport`]. [`CourseValidator::validate`] runs them in order:
//! manifest, module/lesson graph (quizzes included), module folder sweep
//! (markdown content included), then top-level layout.

pub mod graph;
pub mod layout;
pub mod manifest;
pub mod markdown;
pub mod quiz;
pub mod sweep;

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::{Config, DiagramsConfig};
use crate::diagram::{DiagramChecker, MermaidChecker};
use crate::lint::ValidationReport;

pub use graph::ReferencedFiles;

/// The course being validated
#[derive(Debug, Clone)]
pub struct CourseContext {
    pub root: PathBuf,
    /// Base name of the course folder
    pub folder_name: String,
}

impl CourseContext {
    #[must_use]
    pub fn new(root: &Path) -> Self {
        let folder_name = root
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            root: root.to_path_buf(),
            folder_name,
        }
    }
}

/// Diagram settings handed to the markdown checks
pub struct DiagramSettings<'a> {
    pub language: &'a str,
    /// `None` when diagram checking is disabled
    pub checker: Option<&'a dyn DiagramChecker>,
}

pub struct CourseValidator<'a> {
    diagrams_config: &'a DiagramsConfig,
    diagrams: Box<dyn DiagramChecker + 'a>,
}

impl<'a> CourseValidator<'a> {
    #[must_use]
    pub fn new(config: &'a Config) -> Self {
        Self {
            diagrams_config: &config.diagrams,
            diagrams: Box::new(MermaidChecker::new()),
        }
    }

    /// Replace the built-in Mermaid checker
    #[must_use]
    pub fn with_diagram_checker(mut self, checker: impl DiagramChecker + 'a) -> Self {
        self.diagrams = Box::new(checker);
        self
    }

    /// Validate the course rooted at `root` and return every diagnostic.
    ///
    /// A missing or unparsable manifest, or one without modules, stops the
    /// run after the manifest diagnostics.
    #[must_use]
    pub fn validate(&self, root: &Path) -> ValidationReport {
        let course = CourseContext::new(root);
        let mut report = ValidationReport::new();

        info!(course = %course.folder_name, root = %course.root.display(), "validating course");

        let Some(manifest) = manifest::validate_manifest(&course, &mut report) else {
            debug!("manifest unusable, stopping");
            return report;
        };
        if manifest.modules().is_empty() {
            debug!("manifest has no modules, stopping");
            return report;
        }

        let referenced = graph::validate_modules(&manifest, &course, &mut report);

        let settings = DiagramSettings {
            language: &self.diagrams_config.language,
            checker: self
                .diagrams_config
                .enabled
                .then_some(self.diagrams.as_ref()),
        };
        sweep::validate_module_files(&course, &referenced, &settings, &mut report);

        layout::validate_directory_structure(&course, &mut report);

        info!(
            passed = report.passes().count(),
            errors = report.error_count(),
            warnings = report.warning_count(),
            "validation finished"
        );
        report
    }
}
