//! Diagnostics collection.
//!
//! - [`Diagnostic`] is one pass/warning/error finding tagged with a [`Category`]
//! - [`ValidationReport`] is the append-only log a run writes into and the
//!   source of the final tally

pub mod diagnostic;
pub mod report;

pub use diagnostic::{Category, Diagnostic, Severity};
pub use report::{Summary, ValidationReport};
