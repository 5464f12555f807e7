//! Top-level course folder layout.

use super::CourseContext;
use crate::course::conventions::is_numbered_name;
use crate::lint::{Category, ValidationReport};
use crate::utils::list_dirs;

pub const ASSETS_DIR: &str = "assets";

pub fn validate_directory_structure(course: &CourseContext, report: &mut ValidationReport) {
    if course.root.join(ASSETS_DIR).exists() {
        report.pass("assets/ directory exists");
    } else {
        report.warn(Category::NotFound, "No assets/ directory found");
    }

    let dirs = match list_dirs(&course.root) {
        Ok(dirs) => dirs,
        Err(err) => {
            report.error(
                Category::NotFound,
                format!("Could not list course folder: {err}"),
            );
            return;
        }
    };

    for dir in dirs
        .iter()
        .filter(|name| name.as_str() != ASSETS_DIR && !name.starts_with('.'))
    {
        if !is_numbered_name(dir) {
            report.warn(
                Category::Convention,
                format!("Directory \"{dir}\" does not follow ##_Name pattern"),
            );
        }
    }
}
