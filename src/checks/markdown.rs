//! Markdown content checks: heading hierarchy, image references and
//! diagram syntax.

use tracing::debug;

use super::{CourseContext, DiagramSettings};
use crate::course::conventions::{resolve_in_course, strip_course_prefix};
use crate::diagram::{DiagramChecker, diagram_kind};
use crate::lint::{Category, ValidationReport};
use crate::markdown::{self, Block};

pub fn validate_markdown_content(
    content: &str,
    relative_path: &str,
    course: &CourseContext,
    diagrams: &DiagramSettings<'_>,
    report: &mut ValidationReport,
) {
    let blocks = markdown::tokenize(content);
    debug!(file = relative_path, blocks = blocks.len(), "checking markdown");

    check_headings(&blocks, relative_path, report);
    check_images(&blocks, relative_path, course, report);
    if let Some(checker) = diagrams.checker {
        check_diagrams(&blocks, relative_path, diagrams.language, checker, report);
    }
}

fn check_headings(blocks: &[Block], relative_path: &str, report: &mut ValidationReport) {
    let headings = markdown::headings(blocks);
    let Some(&(first_level, _)) = headings.first() else {
        return;
    };

    if first_level != 1 {
        report.warn(
            Category::Convention,
            format!("\"{relative_path}\" first heading is H{first_level}, expected H1"),
        );
    }

    for (level, text) in &headings {
        if text.trim().is_empty() {
            report.error(
                Category::Schema,
                format!("\"{relative_path}\" contains an empty H{level} heading"),
            );
        }
    }

    for pair in headings.windows(2) {
        let (previous, current) = (pair[0].0, pair[1].0);
        if current > previous + 1 {
            report.warn(
                Category::Convention,
                format!("\"{relative_path}\" skips heading level: H{previous} → H{current}"),
            );
        }
    }
}

fn check_images(
    blocks: &[Block],
    relative_path: &str,
    course: &CourseContext,
    report: &mut ValidationReport,
) {
    for image in markdown::images(blocks) {
        let href = image.href;
        if href.starts_with("http://") || href.starts_with("https://") {
            report.warn(
                Category::Reference,
                format!("\"{relative_path}\" references external image: {href}"),
            );
        } else if href.starts_with("/courses/") {
            let asset = strip_course_prefix(href, &course.folder_name);
            if !resolve_in_course(&course.root, asset).exists() {
                report.error(
                    Category::NotFound,
                    format!(
                        "\"{relative_path}\" references missing image: {href} (expected at {asset})"
                    ),
                );
            }
        }
    }
}

fn check_diagrams(
    blocks: &[Block],
    relative_path: &str,
    language: &str,
    checker: &dyn DiagramChecker,
    report: &mut ValidationReport,
) {
    for (position, source) in markdown::code_blocks(blocks, language).into_iter().enumerate() {
        let number = position + 1;
        match checker.check(source) {
            Ok(()) => report.pass(format!(
                "\"{relative_path}\" {language} diagram {number} is valid ({})",
                diagram_kind(source)
            )),
            Err(err) => report.error(
                Category::ContentSyntax,
                format!(
                    "\"{relative_path}\" {language} diagram {number} has syntax error: {}",
                    err.headline()
                ),
            ),
        }
    }
}
