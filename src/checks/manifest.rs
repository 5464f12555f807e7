//! `manifest.json` checks.

use serde_json::Value;
use tracing::debug;

use super::CourseContext;
use crate::course::{Manifest, lenient};
use crate::course::conventions::is_hex_color;
use crate::lint::{Category, ValidationReport};

pub const MANIFEST_FILE: &str = "manifest.json";

/// Parse and check the manifest.
///
/// Returns `None` when the file is absent or not a JSON object; the caller
/// must not run any further checks in that case. A manifest without modules
/// is still returned.
pub fn validate_manifest(course: &CourseContext, report: &mut ValidationReport) -> Option<Manifest> {
    let path = course.root.join(MANIFEST_FILE);

    if !path.exists() {
        report.error(Category::NotFound, "manifest.json not found");
        return None;
    }

    let raw = match std::fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(err) => {
            report.error(
                Category::Parse,
                format!("manifest.json could not be read: {err}"),
            );
            return None;
        }
    };

    let object = match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Object(object)) => object,
        Ok(_) => {
            report.error(
                Category::Parse,
                "manifest.json is not valid JSON: expected a JSON object",
            );
            return None;
        }
        Err(err) => {
            report.error(Category::Parse, format!("manifest.json is not valid JSON: {err}"));
            return None;
        }
    };
    report.pass("manifest.json exists and is valid JSON");

    let missing: Vec<&str> = Manifest::REQUIRED_FIELDS
        .into_iter()
        .filter(|field| !object.contains_key(*field))
        .collect();
    if missing.is_empty() {
        report.pass("Required manifest fields present");
    } else {
        report.error(
            Category::Schema,
            format!("Missing required manifest fields: {}", missing.join(", ")),
        );
    }

    let declared_id = object
        .get("id")
        .filter(|id| lenient::truthy(id))
        .map(lenient::display);

    let manifest: Manifest = match serde_json::from_value(Value::Object(object)) {
        Ok(manifest) => manifest,
        Err(err) => {
            report.error(Category::Parse, format!("manifest.json is not valid JSON: {err}"));
            return None;
        }
    };

    if let Some(id) = &declared_id {
        if *id == course.folder_name {
            report.pass(format!(
                "manifest.id matches folder name \"{}\"",
                course.folder_name
            ));
        } else {
            report.error(
                Category::Reference,
                format!(
                    "manifest.id \"{id}\" does not match folder name \"{}\"",
                    course.folder_name
                ),
            );
        }
    }

    if let Some(color) = &manifest.color {
        if is_hex_color(color) {
            report.pass(format!("Color \"{color}\" is a valid hex color"));
        } else {
            report.error(
                Category::Schema,
                format!("Color \"{color}\" is not a valid hex color"),
            );
        }
    }

    let module_count = manifest.modules().len();
    if module_count == 0 {
        report.error(Category::Schema, "modules must be a non-empty array");
    } else {
        report.pass(format!("{module_count} modules found"));
    }

    debug!(id = manifest.course_id(), modules = module_count, "manifest parsed");
    Some(manifest)
}
