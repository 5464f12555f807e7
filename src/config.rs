use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CourseError, Result};

/// Name of the per-course config file, looked up in the course root
pub const PROJECT_CONFIG_FILE: &str = "coursecheck.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Treat warnings as failures when computing the exit status
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub diagrams: DiagramsConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

impl Config {
    pub fn load(explicit_path: Option<&Path>, course_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("COURSECHECK_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            match Self::load_patch(&path)? {
                Some(patch) => config.merge_patch(patch),
                None => {
                    return Err(CourseError::Config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_project(course_root)? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides()?;

        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            return Ok(None);
        };
        Self::load_patch(&dir.join("coursecheck/config.toml"))
    }

    fn load_project(course_root: &Path) -> Result<Option<ConfigPatch>> {
        Self::load_patch(&course_root.join(PROJECT_CONFIG_FILE))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| CourseError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw).map_err(|err| {
            CourseError::Config(format!("parse config {}: {err}", path.display()))
        })?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(value) = patch.strict {
            self.strict = value;
        }
        if let Some(patch) = patch.diagrams {
            self.diagrams.merge(patch);
        }
        if let Some(patch) = patch.report {
            self.report.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(value) = env_bool("COURSECHECK_STRICT") {
            self.strict = value;
        }
        if let Some(value) = env_bool("COURSECHECK_DIAGRAMS_ENABLED") {
            self.diagrams.enabled = value;
        }
        if let Some(value) = env_string("COURSECHECK_DIAGRAM_LANGUAGE") {
            self.diagrams.language = value;
        }
        if env_bool("COURSECHECK_ROBOT").unwrap_or(false) {
            self.report.format = ReportFormat::Json;
        }
        if let Some(value) = env_string("COURSECHECK_REPORT_FORMAT") {
            self.report.format = ReportFormat::parse(&value)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagramsConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Fenced code language tag treated as a diagram block
    #[serde(default = "default_diagram_language")]
    pub language: String,
}

impl Default for DiagramsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            language: default_diagram_language(),
        }
    }
}

impl DiagramsConfig {
    fn merge(&mut self, patch: DiagramsPatch) {
        if let Some(value) = patch.enabled {
            self.enabled = value;
        }
        if let Some(value) = patch.language {
            self.language = value;
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Human,
    Json,
}

impl ReportFormat {
    pub fn parse(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "human" | "text" => Ok(Self::Human),
            "json" | "robot" => Ok(Self::Json),
            other => Err(CourseError::Config(format!(
                "invalid report format {other:?} (expected human or json)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: ReportFormat,
    #[serde(default)]
    pub color: ColorChoice,
}

impl ReportConfig {
    fn merge(&mut self, patch: ReportPatch) {
        if let Some(value) = patch.format {
            self.format = value;
        }
        if let Some(value) = patch.color {
            self.color = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    strict: Option<bool>,
    diagrams: Option<DiagramsPatch>,
    report: Option<ReportPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct DiagramsPatch {
    enabled: Option<bool>,
    language: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ReportPatch {
    format: Option<ReportFormat>,
    color: Option<ColorChoice>,
}

const fn default_true() -> bool {
    true
}

fn default_diagram_language() -> String {
    "mermaid".to_string()
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key)
        .ok()
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
}
