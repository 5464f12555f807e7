use coursecheck::lint::Severity;

use super::fixture::TestCourse;

#[test]
fn test_unreferenced_markdown_is_orphaned_once() {
    let mut course = TestCourse::new();
    course
        .add_module("01_a")
        .add_content_lesson("01_a", "01_first", "# First\n");
    let _ = course.fixture.create_file("01_a/02_draft.md", "# Draft\n");
    let _ = course.fixture.create_file("01_a/03_broken.md", "no heading\n\n### deep\n");

    let report = course.validate();

    assert_eq!(report.count_matching(Severity::Warning, "Orphaned file"), 2);
    assert!(report.contains("Orphaned file: \"01_a/02_draft.md\" is not referenced in manifest"));
    assert!(report.contains("Orphaned file: \"01_a/03_broken.md\" is not referenced in manifest"));
    assert!(report.contains("Markdown file \"01_a/03_broken.md\" does not start with a # heading"));
    assert_eq!(report.error_count(), 0);
}

#[test]
fn test_unexpected_files_and_names() {
    let mut course = TestCourse::new();
    course
        .add_module("01_a")
        .add_content_lesson("01_a", "01_first", "# First\n");
    let _ = course.fixture.create_file("01_a/notes.txt", "todo");
    let _ = course.fixture.create_file("01_a/readme.md", "# Readme\n");
    course.fixture.create_dir("extras");
    course.fixture.create_dir(".cache");

    let report = course.validate();

    assert!(report.contains("Unexpected file type in 01_a/: notes.txt"));
    assert!(report.contains("File \"01_a/readme.md\" does not follow ##_Name pattern"));
    assert!(report.contains("Directory \"extras\" does not follow ##_Name pattern"));
    assert!(!report.contains(".cache"));
    assert!(!report.contains("notes.txt\" is not referenced"));
}

#[test]
fn test_missing_image_and_external_image() {
    let mut course = TestCourse::new();
    let _ = course.fixture.create_file("assets/diagram.png", "png");
    course.add_module("01_a").add_content_lesson(
        "01_a",
        "01_first",
        "# First\n\n![ok](/courses/intro-course/assets/diagram.png)\n\n\
         1. Step ![missing](/courses/intro-course/assets/missing.png)\n\
         2. ![remote](https://cdn.example.com/remote.png)\n",
    );

    let report = course.validate();

    assert_eq!(report.error_count(), 1);
    assert!(report.contains(
        "\"01_a/01_first.md\" references missing image: /courses/intro-course/assets/missing.png (expected at assets/missing.png)"
    ));
    assert!(report.contains(
        "\"01_a/01_first.md\" references external image: https://cdn.example.com/remote.png"
    ));
}

#[cfg(unix)]
#[test]
fn test_dangling_symlinks_do_not_stop_the_sweep() {
    use std::os::unix::fs::symlink;

    let mut course = TestCourse::new();
    course
        .add_module("01_a")
        .add_content_lesson("01_a", "01_first", "# First\n");
    let _ = course.fixture.create_file("01_a/notes.md", "# Notes\n");
    course.fixture.create_dir("drafts");
    symlink("/nonexistent/target", course.fixture.path().join("stale-link")).unwrap();
    symlink("/nonexistent/target", course.fixture.path().join("01_a/old-link")).unwrap();

    let report = course.validate();

    assert!(!report.contains("Could not list"));
    assert!(report.contains("Orphaned file: \"01_a/notes.md\" is not referenced in manifest"));
    assert!(report.contains("Directory \"drafts\" does not follow ##_Name pattern"));
    assert!(report.contains("Unexpected file type in 01_a/: old-link"));
    assert!(!report.contains("stale-link"));
    assert_eq!(report.error_count(), 0);
}
