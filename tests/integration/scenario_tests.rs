use serde_json::json;

use coursecheck::checks::CourseValidator;
use coursecheck::config::Config;
use coursecheck::lint::{Category, Severity};
use coursecheck::test_utils::CourseFixture;

use super::fixture::{TestCourse, quiz};

#[test]
fn test_well_formed_course_has_no_errors() {
    let mut course = TestCourse::new();
    course
        .add_module("01_basics")
        .add_content_lesson("01_basics", "01_welcome", "# Welcome\n\nHello.\n");

    let report = course.validate();

    assert_eq!(report.error_count(), 0);
    assert_eq!(report.warning_count(), 0);
    assert!(report.passed());
    assert!(report.contains("manifest.json exists and is valid JSON"));
    assert!(report.contains("1 modules found"));
    assert!(report.contains("All 1 lesson IDs are unique"));
    assert!(report.contains("assets/ directory exists"));
}

#[test]
fn test_manifest_with_only_id_halts_after_one_error() {
    let fixture = CourseFixture::new("x");
    let _ = fixture.write_manifest(&json!({"id": "x"}));
    fixture.create_dir("not_numbered");

    let report = CourseValidator::new(&Config::default()).validate(fixture.path());

    assert_eq!(
        report.count_matching(Severity::Error, "Missing required manifest fields"),
        1
    );
    assert!(report.contains("Missing required manifest fields: title, description, modules"));
    assert!(!report.passed());
    // Nothing past the manifest runs
    assert!(!report.contains("assets/"));
    assert!(!report.contains("lesson IDs"));
    assert!(!report.contains("not_numbered"));
}

#[test]
fn test_matching_question_missing_one_match_text() {
    let mut course = TestCourse::new();
    course.add_module("01_basics").add_quiz_lesson(
        "01_basics",
        "01_match",
        &quiz(json!([{
            "id": "m1",
            "type": "MATCHING",
            "question": "Match the pairs",
            "answers": [
                {"id": "a", "text": "A", "correct": true, "matchText": "1"},
                {"id": "b", "text": "B", "correct": true, "matchText": "2"},
                {"id": "c", "text": "C", "correct": true}
            ]
        }])),
    );

    let report = course.validate();

    assert_eq!(report.error_count(), 1);
    assert!(report.contains(
        "Quiz \"01_match.json\" MATCHING question \"m1\" has 1 answer(s) missing matchText"
    ));
}

#[test]
fn test_missing_manifest_reports_single_error() {
    let fixture = CourseFixture::new("empty");
    let report = CourseValidator::new(&Config::default()).validate(fixture.path());

    assert_eq!(report.diagnostics().len(), 1);
    assert_eq!(report.errors().next().unwrap().category, Some(Category::NotFound));
}

#[test]
fn test_empty_modules_halts_run() {
    let course = TestCourse::new();
    let report = course.validate();

    assert!(report.contains("modules must be a non-empty array"));
    assert!(!report.contains("assets/ directory exists"));
    assert_eq!(report.error_count(), 1);
}

#[test]
fn test_diagnostics_follow_pipeline_order() {
    let mut course = TestCourse::new();
    course.add_module("01_basics").add_content_lesson(
        "01_basics",
        "01_welcome",
        "# Welcome\n\n```mermaid\ngraph LR\n  A --> B\n```\n",
    );

    let report = course.validate();
    let position = |needle: &str| {
        report
            .diagnostics()
            .iter()
            .position(|d| d.message.contains(needle))
            .unwrap_or_else(|| panic!("missing diagnostic: {needle}"))
    };

    assert!(position("valid JSON") < position("Module indices are sequential"));
    assert!(position("lesson IDs are unique") < position("mermaid diagram 1 is valid (graph)"));
    assert!(position("mermaid diagram 1") < position("assets/ directory exists"));
}

#[test]
fn test_disabled_diagrams_skip_checks() {
    let mut course = TestCourse::new();
    course.add_module("01_basics").add_content_lesson(
        "01_basics",
        "01_welcome",
        "# Welcome\n\n```mermaid\nnot a diagram\n```\n",
    );

    let mut config = Config::default();
    assert_eq!(course.validate_with(&config).error_count(), 1);

    config.diagrams.enabled = false;
    let report = course.validate_with(&config);
    assert!(report.passed());
    assert!(!report.contains("mermaid diagram"));
}
