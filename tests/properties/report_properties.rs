use proptest::prelude::*;

use coursecheck::lint::{Category, ValidationReport};

proptest! {
    #[test]
    fn test_summary_line_counts_and_plurals(passes in 0usize..5, errors in 0usize..5, warnings in 0usize..5) {
        let mut report = ValidationReport::new();
        for i in 0..passes {
            report.pass(format!("pass {i}"));
        }
        for i in 0..errors {
            report.error(Category::Schema, format!("error {i}"));
        }
        for i in 0..warnings {
            report.warn(Category::Convention, format!("warning {i}"));
        }

        let error_word = if errors == 1 { "error" } else { "errors" };
        let warning_word = if warnings == 1 { "warning" } else { "warnings" };
        prop_assert_eq!(
            report.summary_line(),
            format!("Results: {passes} passed, {errors} {error_word}, {warnings} {warning_word}")
        );
        prop_assert_eq!(report.passed(), errors == 0);
    }
}
