//! Shared test utilities for coursecheck.

pub mod fixtures;

pub use fixtures::CourseFixture;
