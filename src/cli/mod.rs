//! Command-line interface.

pub mod colors;
pub mod output;

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::error::{CourseError, Result};

/// Lint a course content folder before publishing
#[derive(Parser, Debug)]
#[command(name = "coursecheck", version, about)]
pub struct Cli {
    /// Course folder, relative to the current directory
    #[arg(value_name = "COURSE")]
    pub course: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print the report as JSON
    #[arg(long, global = true)]
    pub robot: bool,

    /// Fail on warnings as well as errors
    #[arg(long)]
    pub strict: bool,

    /// Config file to use instead of the global and course-local ones
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

pub const USAGE: &str = "Usage: coursecheck <path-to-course-folder>\n  \
    e.g. coursecheck content/courses/intro-to-security";

/// Resolve the course argument against the current directory and make sure
/// it names an existing directory.
pub fn resolve_course_path(course: Option<&Path>) -> Result<PathBuf> {
    let course = course.ok_or_else(|| CourseError::Usage(USAGE.to_string()))?;
    let resolved = std::env::current_dir()?.join(course);

    if !resolved.exists() {
        return Err(CourseError::NotFound(resolved));
    }
    if !resolved.is_dir() {
        return Err(CourseError::NotADirectory(resolved));
    }

    Ok(resolved.canonicalize()?)
}
