use serde_json::{Value, json};

use coursecheck::checks::CourseValidator;
use coursecheck::config::Config;
use coursecheck::lint::ValidationReport;
use coursecheck::test_utils::CourseFixture;

pub const COURSE_ID: &str = "intro-course";

/// A course folder built up lesson by lesson, with a manifest that tracks
/// what was added.
pub struct TestCourse {
    pub fixture: CourseFixture,
    pub manifest: Value,
}

impl TestCourse {
    /// Empty course with valid manifest metadata and an assets folder
    pub fn new() -> Self {
        let fixture = CourseFixture::new(COURSE_ID);
        fixture.create_dir("assets");
        let manifest = json!({
            "id": COURSE_ID,
            "title": "Intro course",
            "description": "A course used by the integration tests",
            "color": "#3366ff",
            "modules": []
        });
        Self { fixture, manifest }
    }

    pub fn add_module(&mut self, module_id: &str) -> &mut Self {
        self.fixture.create_dir(module_id);
        let modules = self.modules_mut();
        let index = modules.len() + 1;
        modules.push(json!({
            "id": module_id,
            "title": format!("Module {module_id}"),
            "index": index,
            "lessons": []
        }));
        self
    }

    /// Add a content lesson backed by a markdown file
    pub fn add_content_lesson(&mut self, module_id: &str, file: &str, markdown: &str) -> &mut Self {
        let _ = self
            .fixture
            .create_file(&format!("{module_id}/{file}.md"), markdown);
        self.push_lesson(
            module_id,
            json!({
                "id": format!("{module_id}|||{file}"),
                "moduleId": module_id,
                "title": file,
                "type": "content",
                "markdownPath": format!("/courses/{COURSE_ID}/{module_id}/{file}.md")
            }),
        )
    }

    /// Add a quiz lesson backed by a quiz JSON file
    pub fn add_quiz_lesson(&mut self, module_id: &str, file: &str, quiz: &Value) -> &mut Self {
        let _ = self
            .fixture
            .create_json(&format!("{module_id}/{file}.json"), quiz);
        self.push_lesson(
            module_id,
            json!({
                "id": format!("{module_id}|||{file}"),
                "moduleId": module_id,
                "title": file,
                "type": "quiz",
                "quizPath": format!("/courses/{COURSE_ID}/{module_id}/{file}.json")
            }),
        )
    }

    pub fn push_lesson(&mut self, module_id: &str, lesson: Value) -> &mut Self {
        let module = self
            .modules_mut()
            .iter_mut()
            .find(|m| m["id"] == module_id)
            .expect("module added before its lessons");
        let lessons = module["lessons"].as_array_mut().expect("lessons array");
        let mut lesson = lesson;
        lesson["index"] = json!(lessons.len() + 1);
        lessons.push(lesson);
        self
    }

    pub fn validate(&self) -> ValidationReport {
        self.validate_with(&Config::default())
    }

    pub fn validate_with(&self, config: &Config) -> ValidationReport {
        let _ = self.fixture.write_manifest(&self.manifest);
        let report = CourseValidator::new(config).validate(self.fixture.path());
        for diagnostic in report.diagnostics() {
            println!("[REPORT] {diagnostic}");
        }
        report
    }

    fn modules_mut(&mut self) -> &mut Vec<Value> {
        self.manifest["modules"]
            .as_array_mut()
            .expect("modules array")
    }
}

/// A quiz file with one question per entry
pub fn quiz(questions: Value) -> Value {
    json!({
        "title": "Checkpoint",
        "type": "quiz",
        "passingScore": 80,
        "questions": questions
    })
}

/// A multiple-choice question whose answers carry the given `correct` flags
pub fn multiple_choice(id: &str, correct: &[bool]) -> Value {
    let answers: Vec<Value> = correct
        .iter()
        .enumerate()
        .map(|(i, flag)| json!({"id": format!("a{i}"), "text": format!("Answer {i}"), "correct": flag}))
        .collect();
    json!({
        "id": id,
        "type": "MULTIPLE_CHOICE",
        "question": "Which one?",
        "answers": answers
    })
}
