//! Course content model and the conventions it is checked against.

pub mod conventions;
pub mod lenient;
pub mod model;

pub use model::{
    Lesson, LessonKind, Manifest, Module, QuestionKind, QuizAnswer, QuizFile, QuizQuestion,
};
