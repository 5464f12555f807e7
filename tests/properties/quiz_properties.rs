use proptest::prelude::*;
use serde_json::{Value, json};

use coursecheck::checks::quiz::validate_quiz_file;
use coursecheck::lint::{Severity, ValidationReport};
use coursecheck::test_utils::CourseFixture;

fn run_multiple_choice(flags: &[bool]) -> ValidationReport {
    let answers: Vec<Value> = flags
        .iter()
        .enumerate()
        .map(|(i, flag)| json!({"id": format!("a{i}"), "text": "answer", "correct": flag}))
        .collect();
    let quiz = json!({
        "title": "Quiz",
        "type": "quiz",
        "passingScore": 50,
        "questions": [{
            "id": "q1",
            "type": "MULTIPLE_CHOICE",
            "question": "Which?",
            "answers": answers
        }]
    });

    let fixture = CourseFixture::new("prop-course");
    let path = fixture.create_json("01_a/01_quiz.json", &quiz);
    let mut report = ValidationReport::new();
    validate_quiz_file(&path, &mut report);
    report
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_multiple_choice_needs_exactly_one_correct(flags in prop::collection::vec(any::<bool>(), 2..8)) {
        let correct = flags.iter().filter(|flag| **flag).count();
        let report = run_multiple_choice(&flags);
        let errors = report.count_matching(Severity::Error, "should have exactly 1 correct answer");

        if correct == 1 {
            prop_assert_eq!(report.error_count(), 0);
        } else {
            prop_assert_eq!(errors, 1);
            let expected = format!("found {correct}");
            prop_assert!(report.contains(&expected));
        }
    }
}
