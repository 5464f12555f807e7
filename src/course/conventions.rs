//! Naming, path and ordering conventions shared by the validators.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::lenient;

/// Lesson ids are `{moduleId}|||{fileName}`
pub const LESSON_ID_SEPARATOR: &str = "|||";

static NUMBERED_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}_").expect("numbered name pattern is valid"));

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^#([0-9a-f]{3}|[0-9a-f]{6})$").expect("hex color pattern is valid")
});

/// Two digits and an underscore, e.g. `01_intro`
#[must_use]
pub fn is_numbered_name(name: &str) -> bool {
    NUMBERED_NAME.is_match(name)
}

/// `#abc` or `#a1b2c3`, any case
#[must_use]
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}

/// `/courses/{course_id}/`
#[must_use]
pub fn course_prefix(course_id: &str) -> String {
    format!("/courses/{course_id}/")
}

/// Strip `/courses/{course_id}/` from a declared path. Paths without the
/// prefix come back unchanged.
#[must_use]
pub fn strip_course_prefix<'a>(path: &'a str, course_id: &str) -> &'a str {
    path.strip_prefix(&course_prefix(course_id)).unwrap_or(path)
}

/// Join a course-relative path onto the course root. A leading `/` left over
/// from an unprefixed path is dropped so the result stays inside the root.
#[must_use]
pub fn resolve_in_course(course_root: &Path, relative: &str) -> PathBuf {
    course_root.join(relative.trim_start_matches('/'))
}

/// Module part of a lesson id, if the id uses the separator
#[must_use]
pub fn lesson_id_module_part(lesson_id: &str) -> Option<&str> {
    lesson_id
        .split_once(LESSON_ID_SEPARATOR)
        .map(|(module, _)| module)
}

/// Outcome of comparing declared indices against `[1..N]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexSequence {
    /// At least one entry has no `index`
    Undeclared,
    Sequential,
    OutOfOrder { expected: String, actual: String },
}

/// Compare declared indices, in array order, against `1..=N`.
///
/// A key present with `null` counts as declared. Numbers compare by value,
/// so `1.0` matches `1`.
#[must_use]
pub fn check_index_sequence(indices: &[Option<&Value>]) -> IndexSequence {
    if indices.iter().any(Option::is_none) {
        return IndexSequence::Undeclared;
    }

    let declared: Vec<&Value> = indices.iter().flatten().copied().collect();
    let sequential = declared.iter().enumerate().all(|(position, value)| {
        #[allow(clippy::cast_precision_loss)]
        let expected = (position + 1) as f64;
        value.as_f64() == Some(expected)
    });

    if sequential {
        IndexSequence::Sequential
    } else {
        IndexSequence::OutOfOrder {
            expected: (1..=declared.len())
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(","),
            actual: declared
                .iter()
                .map(|value| match value {
                    Value::Null => String::new(),
                    other => lenient::display(other),
                })
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}
