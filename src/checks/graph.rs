//! Module and lesson graph checks.
//!
//! Walks the manifest's module tree once, in array order. Record-level
//! problems are reported and the walk moves on; only a module or lesson
//! missing its required fields is skipped.

use std::collections::HashSet;
use std::path::PathBuf;

use serde_json::{Map, Value};
use tracing::{debug, trace};

use super::{CourseContext, quiz};
use crate::course::conventions::{
    IndexSequence, LESSON_ID_SEPARATOR, check_index_sequence, course_prefix, is_numbered_name,
    lesson_id_module_part, resolve_in_course, strip_course_prefix,
};
use crate::course::{Lesson, LessonKind, Manifest, Module};
use crate::lint::{Category, ValidationReport};

/// Course-relative paths declared by `markdownPath` and `quizPath`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferencedFiles(HashSet<String>);

impl ReferencedFiles {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, relative: impl Into<String>) {
        self.0.insert(relative.into());
    }

    #[must_use]
    pub fn contains(&self, relative: &str) -> bool {
        self.0.contains(relative)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Running state of one walk over the manifest
struct GraphWalk<'a> {
    manifest: &'a Manifest,
    course: &'a CourseContext,
    module_ids: HashSet<&'a str>,
    lesson_ids: HashSet<&'a str>,
    referenced: ReferencedFiles,
}

/// Check every module and lesson and collect the files they reference.
pub fn validate_modules(
    manifest: &Manifest,
    course: &CourseContext,
    report: &mut ValidationReport,
) -> ReferencedFiles {
    let modules = manifest.modules();

    let indices: Vec<Option<&Value>> = modules.iter().map(|m| m.index.as_ref()).collect();
    match check_index_sequence(&indices) {
        IndexSequence::Sequential => report.pass("Module indices are sequential (1-based)"),
        IndexSequence::OutOfOrder { expected, actual } => report.error(
            Category::Schema,
            format!("Module indices are not sequential. Expected [{expected}], got [{actual}]"),
        ),
        IndexSequence::Undeclared => report.warn(
            Category::Convention,
            "Module indices not present, will be inferred from array position",
        ),
    }

    let mut walk = GraphWalk {
        manifest,
        course,
        module_ids: HashSet::new(),
        lesson_ids: HashSet::new(),
        referenced: ReferencedFiles::new(),
    };

    for module in modules {
        walk.check_module(module, report);
    }

    report.pass(format!("All {} lesson IDs are unique", walk.lesson_ids.len()));
    walk.referenced
}

impl<'a> GraphWalk<'a> {
    fn check_module(&mut self, module: &'a Module, report: &mut ValidationReport) {
        let (Some(module_id), Some(_)) = (module.id.as_deref(), module.title.as_deref()) else {
            report.error(
                Category::Schema,
                format!(
                    "Module missing required fields (id, title): {}",
                    present_fields(&[("id", &module.id), ("title", &module.title)])
                ),
            );
            return;
        };

        debug!(module = module_id, "checking module");

        if !self.module_ids.insert(module_id) {
            report.error(
                Category::Reference,
                format!("Duplicate module ID: \"{module_id}\""),
            );
        }

        if !self.course.root.join(module_id).exists() {
            report.error(
                Category::NotFound,
                format!("Module directory not found: {module_id}/"),
            );
        }

        if !is_numbered_name(module_id) {
            report.warn(
                Category::Convention,
                format!("Module ID \"{module_id}\" does not follow ##_Name pattern"),
            );
        }

        let lessons = match module.lessons.as_deref() {
            Some(lessons) if !lessons.is_empty() => lessons,
            _ => {
                report.warn(
                    Category::Schema,
                    format!("Module \"{module_id}\" has no lessons"),
                );
                return;
            }
        };

        // No fallback warning here: partially indexed lessons are not checked.
        let indices: Vec<Option<&Value>> = lessons.iter().map(|l| l.index.as_ref()).collect();
        if let IndexSequence::OutOfOrder { expected, actual } = check_index_sequence(&indices) {
            report.error(
                Category::Schema,
                format!(
                    "Lesson indices in module \"{module_id}\" are not sequential. Expected [{expected}], got [{actual}]"
                ),
            );
        }

        for lesson in lessons {
            self.check_lesson(lesson, module_id, report);
        }
    }

    fn check_lesson(&mut self, lesson: &'a Lesson, module_id: &str, report: &mut ValidationReport) {
        let (Some(lesson_id), Some(_), Some(kind)) = (
            lesson.id.as_deref(),
            lesson.title.as_deref(),
            lesson.kind.as_deref(),
        ) else {
            report.error(
                Category::Schema,
                format!(
                    "Lesson missing required fields (id, title, type): {}",
                    present_fields(&[
                        ("id", &lesson.id),
                        ("title", &lesson.title),
                        ("type", &lesson.kind),
                    ])
                ),
            );
            return;
        };

        trace!(lesson = lesson_id, kind, "checking lesson");

        if !self.lesson_ids.insert(lesson_id) {
            report.error(
                Category::Reference,
                format!("Duplicate lesson ID: \"{lesson_id}\""),
            );
        }

        if let Some(declared) = lesson.module_id.as_deref().filter(|d| *d != module_id) {
            report.error(
                Category::Reference,
                format!(
                    "Lesson \"{lesson_id}\" has moduleId \"{declared}\" but is in module \"{module_id}\""
                ),
            );
        }

        match lesson_id_module_part(lesson_id) {
            None => report.error(
                Category::Schema,
                format!(
                    "Lesson ID \"{lesson_id}\" does not use {{moduleId}}{LESSON_ID_SEPARATOR}{{fileName}} format"
                ),
            ),
            Some(part) if part != module_id => report.error(
                Category::Reference,
                format!(
                    "Lesson ID \"{lesson_id}\": module part does not match parent module \"{module_id}\""
                ),
            ),
            Some(_) => {}
        }

        match LessonKind::parse(kind) {
            Some(LessonKind::Content) => {
                let declared = lesson.markdown_path.as_deref();
                self.check_reference(lesson_id, "markdownPath", "Content", declared, report);
            }
            Some(LessonKind::Quiz) => {
                let declared = lesson.quiz_path.as_deref();
                if let Some(full_path) =
                    self.check_reference(lesson_id, "quizPath", "Quiz", declared, report)
                {
                    quiz::validate_quiz_file(&full_path, report);
                }
            }
            Some(LessonKind::Section) => {}
            None => report.error(
                Category::Schema,
                format!(
                    "Lesson \"{lesson_id}\" has invalid type \"{kind}\". Expected: {}",
                    LessonKind::NAMES.join(", ")
                ),
            ),
        }
    }

    /// Check a declared file path and record it as referenced. Returns the
    /// resolved path when the file exists.
    fn check_reference(
        &mut self,
        lesson_id: &str,
        field: &str,
        label: &str,
        declared: Option<&str>,
        report: &mut ValidationReport,
    ) -> Option<PathBuf> {
        let Some(declared) = declared else {
            report.error(
                Category::Schema,
                format!("{label} lesson \"{lesson_id}\" missing {field}"),
            );
            return None;
        };

        let course_id = self.manifest.course_id();
        if !declared.starts_with(&course_prefix(course_id)) {
            report.error(
                Category::Reference,
                format!(
                    "Lesson \"{lesson_id}\" {field} does not follow /courses/{{courseId}}/... pattern"
                ),
            );
        }

        let relative = strip_course_prefix(declared, course_id);
        let full_path = resolve_in_course(&self.course.root, relative);
        self.referenced.insert(relative);

        if full_path.exists() {
            Some(full_path)
        } else {
            report.error(
                Category::NotFound,
                format!("Lesson \"{lesson_id}\": {field} file not found: {relative}"),
            );
            None
        }
    }
}

/// Compact JSON of the fields that are set, e.g. `{"id":"01_a"}`
fn present_fields(fields: &[(&str, &Option<String>)]) -> String {
    let map: Map<String, Value> = fields
        .iter()
        .filter_map(|(name, value)| {
            value
                .as_ref()
                .map(|v| ((*name).to_string(), Value::String(v.clone())))
        })
        .collect();
    Value::Object(map).to_string()
}
