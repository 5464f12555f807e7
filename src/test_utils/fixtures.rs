use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::TempDir;

/// A course folder inside an isolated temp directory.
///
/// The folder is named after the course id so a manifest written with the
/// same id passes the folder-name check.
pub struct CourseFixture {
    pub temp_dir: TempDir,
    pub course_path: PathBuf,
}

impl CourseFixture {
    #[must_use]
    pub fn new(course_id: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let course_path = temp_dir.path().join(course_id);
        std::fs::create_dir_all(&course_path).expect("Failed to create course dir");

        println!("[FIXTURE] Created course directory: {course_path:?}");

        Self {
            temp_dir,
            course_path,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.course_path
    }

    /// Create a file relative to the course root, with parent directories.
    #[must_use]
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let full_path = self.course_path.join(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        println!(
            "[FIXTURE] Created file: {:?} ({} bytes)",
            full_path,
            content.len()
        );
        full_path
    }

    pub fn create_dir(&self, relative_path: &str) {
        let full_path = self.course_path.join(relative_path);
        std::fs::create_dir_all(&full_path).expect("Failed to create dir");
        println!("[FIXTURE] Created directory: {full_path:?}");
    }

    /// Write pretty-printed JSON relative to the course root.
    #[must_use]
    pub fn create_json(&self, relative_path: &str, value: &Value) -> PathBuf {
        let content = serde_json::to_string_pretty(value).expect("Failed to serialize JSON");
        self.create_file(relative_path, &content)
    }

    /// Write `manifest.json` at the course root.
    #[must_use]
    pub fn write_manifest(&self, manifest: &Value) -> PathBuf {
        self.create_json("manifest.json", manifest)
    }

    pub fn remove_file(&self, relative_path: &str) {
        let full_path = self.course_path.join(relative_path);
        std::fs::remove_file(&full_path).expect("Failed to remove file");
        println!("[FIXTURE] Removed file: {full_path:?}");
    }
}

impl Drop for CourseFixture {
    fn drop(&mut self) {
        println!("[FIXTURE] Cleaning up temp directory: {:?}", self.temp_dir.path());
    }
}
