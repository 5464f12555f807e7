//! Course manifest and quiz file model.
//!
//! Fields are decoded leniently (see [`super::lenient`]): a required field
//! that is absent, empty or of the wrong type reads as `None` so validators
//! can report it instead of failing to decode.

use serde::Deserialize;
use serde_json::Value;

use super::lenient;

/// Top-level `manifest.json`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub cover_image: Option<String>,
    #[serde(default, deserialize_with = "lenient::sequence")]
    pub modules: Option<Vec<Module>>,
}

impl Manifest {
    /// Keys that must be present in the manifest object
    pub const REQUIRED_FIELDS: [&'static str; 4] = ["id", "title", "description", "modules"];

    /// Modules, or an empty slice when the list is absent or malformed
    #[must_use]
    pub fn modules(&self) -> &[Module] {
        self.modules.as_deref().unwrap_or_default()
    }

    /// Manifest id used in `/courses/{id}/` paths
    #[must_use]
    pub fn course_id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Module {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient::present")]
    pub index: Option<Value>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::sequence")]
    pub lessons: Option<Vec<Lesson>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub module_id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient::text")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient::present")]
    pub index: Option<Value>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub markdown_path: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub quiz_path: Option<String>,
}

/// The three lesson types a manifest may declare
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonKind {
    Content,
    Quiz,
    Section,
}

impl LessonKind {
    pub const NAMES: [&'static str; 3] = ["content", "quiz", "section"];

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "content" => Some(Self::Content),
            "quiz" => Some(Self::Quiz),
            "section" => Some(Self::Section),
            _ => None,
        }
    }
}

/// A quiz definition file referenced by a `quizPath`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizFile {
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient::present")]
    pub kind: Option<Value>,
    #[serde(default, deserialize_with = "lenient::present")]
    pub passing_score: Option<Value>,
    #[serde(default, deserialize_with = "lenient::sequence")]
    pub questions: Option<Vec<QuizQuestion>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizQuestion {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient::text")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub question: Option<String>,
    #[serde(default, deserialize_with = "lenient::sequence")]
    pub answers: Option<Vec<QuizAnswer>>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub feedback: Option<String>,
}

/// Question types understood by the quiz player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    MultipleChoice,
    MultipleResponse,
    Matching,
}

impl QuestionKind {
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "MULTIPLE_CHOICE" => Some(Self::MultipleChoice),
            "MULTIPLE_RESPONSE" => Some(Self::MultipleResponse),
            "MATCHING" => Some(Self::Matching),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAnswer {
    #[serde(default, deserialize_with = "lenient::text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "lenient::present")]
    pub correct: Option<Value>,
    /// Legacy spelling. Its presence is reported; its value never counts.
    #[serde(default, deserialize_with = "lenient::present")]
    pub is_correct: Option<Value>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub match_text: Option<String>,
}

impl QuizAnswer {
    /// `correct` is literally `true`
    #[must_use]
    pub fn is_marked_correct(&self) -> bool {
        matches!(self.correct, Some(Value::Bool(true)))
    }
}
