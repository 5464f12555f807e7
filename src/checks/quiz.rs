//! Quiz file checks.

use std::collections::HashSet;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::course::lenient::display;
use crate::course::{QuestionKind, QuizFile, QuizQuestion};
use crate::lint::{Category, ValidationReport};

/// Parse one quiz file and check its questions and answers.
///
/// A file that cannot be read or parsed gets a single error and nothing else.
pub fn validate_quiz_file(path: &Path, report: &mut ValidationReport) {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            report.error(
                Category::Parse,
                format!("Quiz \"{file_name}\" could not be read: {err}"),
            );
            return;
        }
    };

    let quiz: QuizFile = match serde_json::from_str::<Value>(&raw) {
        Ok(value @ Value::Object(_)) => match serde_json::from_value(value) {
            Ok(quiz) => quiz,
            Err(err) => {
                report.error(
                    Category::Parse,
                    format!("Quiz \"{file_name}\" is not valid JSON: {err}"),
                );
                return;
            }
        },
        Ok(_) => {
            report.error(
                Category::Parse,
                format!("Quiz \"{file_name}\" is not valid JSON: expected a JSON object"),
            );
            return;
        }
        Err(err) => {
            report.error(
                Category::Parse,
                format!("Quiz \"{file_name}\" is not valid JSON: {err}"),
            );
            return;
        }
    };

    debug!(quiz = %file_name, "checking quiz");
    let label = format!("Quiz \"{file_name}\"");

    if quiz.title.is_none() {
        report.error(Category::Schema, format!("{label} missing title"));
    }

    if !matches!(&quiz.kind, Some(Value::String(kind)) if kind == "quiz") {
        let got = quiz.kind.as_ref().map(display).unwrap_or_default();
        report.error(
            Category::Schema,
            format!("{label} type must be \"quiz\", got \"{got}\""),
        );
    }

    match &quiz.passing_score {
        None => report.warn(Category::Schema, format!("{label} missing passingScore")),
        Some(score) => {
            let in_range = score
                .as_f64()
                .is_some_and(|value| (0.0..=100.0).contains(&value));
            if !in_range {
                report.error(
                    Category::Schema,
                    format!("{label} passingScore must be 0-100, got {}", display(score)),
                );
            }
        }
    }

    let questions = match quiz.questions.as_deref() {
        Some(questions) if !questions.is_empty() => questions,
        _ => {
            report.error(
                Category::Schema,
                format!("{label} must have at least one question"),
            );
            return;
        }
    };

    let mut question_ids = HashSet::new();
    for question in questions {
        check_question(question, &label, &mut question_ids, report);
    }

    report.pass(format!(
        "{label} structure is valid ({} questions)",
        questions.len()
    ));
}

fn check_question<'a>(
    question: &'a QuizQuestion,
    label: &str,
    seen: &mut HashSet<&'a str>,
    report: &mut ValidationReport,
) {
    let Some(id) = question.id.as_deref() else {
        report.error(
            Category::Schema,
            format!("{label} has a question without an ID"),
        );
        return;
    };

    if !seen.insert(id) {
        report.error(
            Category::Reference,
            format!("{label} has duplicate question ID \"{id}\""),
        );
    }

    let kind = question.kind.as_deref().and_then(QuestionKind::parse);
    if kind.is_none() {
        report.error(
            Category::Schema,
            format!(
                "{label} question \"{id}\" has invalid type \"{}\"",
                question.kind.as_deref().unwrap_or_default()
            ),
        );
    }

    if question.question.is_none() {
        report.error(
            Category::Schema,
            format!("{label} question \"{id}\" missing question text"),
        );
    }

    let answers = match question.answers.as_deref() {
        Some(answers) if answers.len() >= 2 => answers,
        _ => {
            report.error(
                Category::Schema,
                format!("{label} question \"{id}\" must have at least 2 answers"),
            );
            return;
        }
    };

    let uses_is_correct = answers.iter().any(|a| a.is_correct.is_some());
    if uses_is_correct {
        report.warn(
            Category::Schema,
            format!("{label} question \"{id}\" uses \"isCorrect\" instead of \"correct\""),
        );
    }
    if !answers.iter().any(|a| a.correct.is_some()) {
        report.error(
            Category::Schema,
            format!("{label} question \"{id}\" answers missing \"correct\" field"),
        );
    }

    let correct_count = answers.iter().filter(|a| a.is_marked_correct()).count();
    match kind {
        Some(QuestionKind::MultipleChoice) if correct_count != 1 => report.error(
            Category::Schema,
            format!(
                "{label} MULTIPLE_CHOICE question \"{id}\" should have exactly 1 correct answer, found {correct_count}"
            ),
        ),
        Some(QuestionKind::MultipleResponse) if correct_count < 1 => report.error(
            Category::Schema,
            format!(
                "{label} MULTIPLE_RESPONSE question \"{id}\" should have at least 1 correct answer"
            ),
        ),
        Some(QuestionKind::Matching) => {
            let missing = answers.iter().filter(|a| a.match_text.is_none()).count();
            if missing > 0 {
                report.error(
                    Category::Schema,
                    format!(
                        "{label} MATCHING question \"{id}\" has {missing} answer(s) missing matchText"
                    ),
                );
            }
        }
        _ => {}
    }

    for answer in answers {
        if answer.id.is_none() {
            report.error(
                Category::Schema,
                format!("{label} question \"{id}\" has an answer without an ID"),
            );
        }
        if answer.text.is_none() {
            report.error(
                Category::Schema,
                format!(
                    "{label} question \"{id}\" answer \"{}\" missing text",
                    answer.id.as_deref().unwrap_or_default()
                ),
            );
        }
    }
}
