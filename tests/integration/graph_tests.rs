use serde_json::json;

use coursecheck::lint::{Category, Severity};

use super::fixture::TestCourse;

#[test]
fn test_sequential_module_indices_pass() {
    let mut course = TestCourse::new();
    for module in ["01_a", "02_b", "03_c", "04_d"] {
        course
            .add_module(module)
            .add_content_lesson(module, "01_intro", "# Intro\n");
    }

    let report = course.validate();
    assert!(report.contains("Module indices are sequential (1-based)"));
    assert!(report.passed());
}

#[test]
fn test_swapped_module_indices_give_one_error() {
    let mut course = TestCourse::new();
    for module in ["01_a", "02_b", "03_c"] {
        course
            .add_module(module)
            .add_content_lesson(module, "01_intro", "# Intro\n");
    }
    course.manifest["modules"][0]["index"] = json!(3);
    course.manifest["modules"][2]["index"] = json!(1);

    let report = course.validate();
    assert_eq!(report.count_matching(Severity::Error, "Module indices"), 1);
    assert!(report.contains("Expected [1,2,3], got [3,2,1]"));
    assert_eq!(report.error_count(), 1);
}

#[test]
fn test_duplicate_lesson_id_across_modules() {
    let mut course = TestCourse::new();
    course
        .add_module("01_a")
        .add_content_lesson("01_a", "01_intro", "# Intro\n")
        .add_module("02_b")
        .add_content_lesson("02_b", "01_intro", "# Intro\n");
    course.manifest["modules"][1]["lessons"][0]["id"] = json!("01_a|||01_intro");
    course.manifest["modules"][1]["lessons"][0]
        .as_object_mut()
        .unwrap()
        .remove("moduleId");

    let report = course.validate();

    assert_eq!(
        report.count_matching(Severity::Error, "Duplicate lesson ID: \"01_a|||01_intro\""),
        1
    );
    assert!(report.contains("All 1 lesson IDs are unique"));
}

#[test]
fn test_deleted_markdown_file_gives_exactly_one_error() {
    let mut course = TestCourse::new();
    course
        .add_module("01_a")
        .add_content_lesson("01_a", "01_first", "# First\n")
        .add_content_lesson("01_a", "02_second", "# Second\n")
        .add_content_lesson("01_a", "03_third", "# Third\n");

    assert_eq!(course.validate().error_count(), 0);

    course.fixture.remove_file("01_a/02_second.md");
    let report = course.validate();

    assert_eq!(report.error_count(), 1);
    assert!(report.contains("Lesson \"01_a|||02_second\": markdownPath file not found: 01_a/02_second.md"));
}

#[test]
fn test_wrong_course_prefix_still_checks_existence() {
    let mut course = TestCourse::new();
    course
        .add_module("01_a")
        .add_content_lesson("01_a", "01_first", "# First\n");
    course.manifest["modules"][0]["lessons"][0]["markdownPath"] =
        json!("/courses/another-course/01_a/01_first.md");

    let report = course.validate();

    assert!(report.contains("markdownPath does not follow /courses/{courseId}/... pattern"));
    let prefix = report
        .diagnostics()
        .iter()
        .find(|d| d.message.contains("does not follow /courses/"))
        .unwrap();
    assert_eq!(prefix.severity, Severity::Error);
    assert_eq!(prefix.category, Some(Category::Reference));
    assert!(report.contains(
        "markdownPath file not found: /courses/another-course/01_a/01_first.md"
    ));
    // The real file is never referenced by the manifest now
    assert!(report.contains("Orphaned file: \"01_a/01_first.md\""));
}

#[test]
fn test_missing_module_directory() {
    let mut course = TestCourse::new();
    course
        .add_module("01_a")
        .add_content_lesson("01_a", "01_first", "# First\n");
    course.manifest["modules"]
        .as_array_mut()
        .unwrap()
        .push(json!({"id": "02_missing", "title": "Missing", "index": 2, "lessons": []}));

    let report = course.validate();
    assert!(report.contains("Module directory not found: 02_missing/"));
    assert!(report.contains("Module \"02_missing\" has no lessons"));
}
