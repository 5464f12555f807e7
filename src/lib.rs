//! coursecheck - lint a course content tree before it is published.
//!
//! A course is a folder holding a `manifest.json`, numbered module folders
//! with markdown lessons and quiz JSON files, and an `assets/` folder. The
//! [`checks::CourseValidator`] walks all of it and records pass, warning and
//! error diagnostics into a [`lint::ValidationReport`].
//!
//! ```no_run
//! use coursecheck::checks::CourseValidator;
//! use coursecheck::config::Config;
//!
//! let config = Config::default();
//! let report = CourseValidator::new(&config).validate(std::path::Path::new("courses/intro"));
//! println!("{}", report.summary_line());
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod course;
pub mod diagram;
pub mod error;
pub mod lint;
pub mod markdown;
pub mod test_utils;
pub mod utils;

pub use error::{CourseError, Result};
