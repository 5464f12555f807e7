use serde_json::json;

use coursecheck::lint::Severity;

use super::fixture::{TestCourse, multiple_choice, quiz};

fn course_with_quiz(questions: serde_json::Value) -> TestCourse {
    let mut course = TestCourse::new();
    course
        .add_module("01_a")
        .add_quiz_lesson("01_a", "01_check", &quiz(questions));
    course
}

#[test]
fn test_valid_quiz_lesson() {
    let course = course_with_quiz(json!([
        multiple_choice("q1", &[false, true, false]),
        {
            "id": "q2",
            "type": "MULTIPLE_RESPONSE",
            "question": "Pick all",
            "answers": [
                {"id": "a", "text": "A", "correct": true},
                {"id": "b", "text": "B", "correct": true},
                {"id": "c", "text": "C", "correct": false}
            ]
        }
    ]));

    let report = course.validate();
    assert_eq!(report.error_count(), 0);
    assert_eq!(report.warning_count(), 0);
    assert!(report.contains("Quiz \"01_check.json\" structure is valid (2 questions)"));
}

#[test]
fn test_is_correct_only_answers() {
    let course = course_with_quiz(json!([{
        "id": "q1",
        "type": "MULTIPLE_CHOICE",
        "question": "Which one?",
        "answers": [
            {"id": "a", "text": "A", "isCorrect": true},
            {"id": "b", "text": "B"}
        ]
    }]));

    let report = course.validate();

    assert_eq!(
        report.count_matching(Severity::Warning, "uses \"isCorrect\" instead of \"correct\""),
        1
    );
    assert_eq!(
        report.count_matching(Severity::Error, "answers missing \"correct\" field"),
        1
    );
    assert!(report.contains("should have exactly 1 correct answer, found 0"));
}

#[test]
fn test_missing_quiz_file_skips_deep_checks() {
    let mut course = TestCourse::new();
    course.add_module("01_a").push_lesson(
        "01_a",
        json!({
            "id": "01_a|||01_gone",
            "title": "Gone",
            "type": "quiz",
            "quizPath": "/courses/intro-course/01_a/01_gone.json"
        }),
    );

    let report = course.validate();
    assert_eq!(report.error_count(), 1);
    assert!(report.contains("quizPath file not found: 01_a/01_gone.json"));
    assert!(!report.contains("Quiz \"01_gone.json\""));
}

#[test]
fn test_broken_quiz_is_one_error_and_not_orphaned() {
    let mut course = TestCourse::new();
    course
        .add_module("01_a")
        .add_quiz_lesson("01_a", "01_check", &json!({}));
    let _ = course
        .fixture
        .create_file("01_a/01_check.json", "{\"questions\": [");

    let report = course.validate();
    assert_eq!(report.error_count(), 1);
    assert!(report.contains("Quiz \"01_check.json\" is not valid JSON"));
    assert!(!report.contains("Orphaned"));
}
