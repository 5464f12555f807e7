//! Module folder sweep: file types, orphans and naming, independent of the
//! manifest. Markdown files found here also get their content checked.

use std::path::Path;

use tracing::{debug, warn};

use super::markdown::validate_markdown_content;
use super::{CourseContext, DiagramSettings, ReferencedFiles};
use crate::course::conventions::is_numbered_name;
use crate::lint::{Category, ValidationReport};
use crate::utils::{list_dirs, list_entries};

const ALLOWED_EXTENSIONS: [&str; 2] = ["md", "json"];

pub fn validate_module_files(
    course: &CourseContext,
    referenced: &ReferencedFiles,
    diagrams: &DiagramSettings<'_>,
    report: &mut ValidationReport,
) {
    let module_dirs = match list_dirs(&course.root) {
        Ok(dirs) => dirs,
        Err(err) => {
            warn!(error = %err, "could not list course root");
            report.error(
                Category::NotFound,
                format!("Could not list course folder: {err}"),
            );
            return;
        }
    };

    for module_dir in module_dirs.iter().filter(|name| is_numbered_name(name)) {
        let entries = match list_entries(course.root.join(module_dir)) {
            Ok(entries) => entries,
            Err(err) => {
                report.error(
                    Category::NotFound,
                    format!("Could not list {module_dir}/: {err}"),
                );
                continue;
            }
        };
        debug!(module = %module_dir, entries = entries.len(), "sweeping module folder");

        for entry in entries {
            let file = entry.name;
            let relative_path = format!("{module_dir}/{file}");
            let extension = Path::new(&file)
                .extension()
                .and_then(|ext| ext.to_str())
                .filter(|ext| ALLOWED_EXTENSIONS.contains(ext));

            let Some(extension) = extension else {
                report.warn(
                    Category::Convention,
                    format!("Unexpected file type in {module_dir}/: {file}"),
                );
                continue;
            };

            if extension == "md" {
                check_markdown_file(course, &relative_path, diagrams, report);
            }

            if !referenced.contains(&relative_path) {
                report.warn(
                    Category::Reference,
                    format!("Orphaned file: \"{relative_path}\" is not referenced in manifest"),
                );
            }

            if !is_numbered_name(&file) {
                report.warn(
                    Category::Convention,
                    format!("File \"{relative_path}\" does not follow ##_Name pattern"),
                );
            }
        }
    }
}

fn check_markdown_file(
    course: &CourseContext,
    relative_path: &str,
    diagrams: &DiagramSettings<'_>,
    report: &mut ValidationReport,
) {
    let content = match std::fs::read_to_string(course.root.join(relative_path)) {
        Ok(content) => content,
        Err(err) => {
            report.error(
                Category::Parse,
                format!("Markdown file \"{relative_path}\" could not be read: {err}"),
            );
            return;
        }
    };

    let trimmed = content.trim();
    if trimmed.is_empty() {
        report.error(
            Category::Schema,
            format!("Markdown file \"{relative_path}\" is empty"),
        );
        return;
    }
    if !trimmed.starts_with("# ") {
        report.warn(
            Category::Convention,
            format!("Markdown file \"{relative_path}\" does not start with a # heading"),
        );
    }

    validate_markdown_content(&content, relative_path, course, diagrams, report);
}
