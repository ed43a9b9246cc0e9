//! Property-based tests for aggregation and path computation.
//!
//! These tests use proptest to verify the report invariants hold across
//! many randomly generated inputs.

use std::collections::HashSet;

use inquest::path::join_path;
use inquest::rules::NumberMin;
use inquest::{
    collect, field, join, prefix_both_paths, Failure, Outcome, Slice, ValidationError, Verdict,
    Violation,
};
use proptest::prelude::*;

fn entry(path: &str, code: &str) -> Outcome {
    Err(Failure::Single(ValidationError::new(
        path,
        vec![Violation::new(code.to_string())],
    )))
}

prop_compose! {
    fn arbitrary_entry()(path in "[a-c](\\.[a-c]){0,2}", code in "[a-z]{1,6}") -> (String, String) {
        (path, code)
    }
}

proptest! {
    #[test]
    fn join_keeps_exact_paths_unique(entries in prop::collection::vec(arbitrary_entry(), 0..20)) {
        let errors = collect(join(entries.iter().map(|(path, code)| entry(path, code))));

        let mut seen = HashSet::new();
        for error in &errors {
            prop_assert!(seen.insert(error.exact_path.clone()));
        }

        let distinct: HashSet<_> = entries.iter().map(|(path, _)| path.clone()).collect();
        prop_assert_eq!(errors.len(), distinct.len());

        let violations: usize = errors.iter().map(|e| e.violations.len()).sum();
        prop_assert_eq!(violations, entries.len());
    }

    #[test]
    fn join_orders_by_first_occurrence(entries in prop::collection::vec(arbitrary_entry(), 0..20)) {
        let errors = collect(join(entries.iter().map(|(path, code)| entry(path, code))));

        let mut expected: Vec<&str> = Vec::new();
        for (path, _) in &entries {
            if !expected.contains(&path.as_str()) {
                expected.push(path);
            }
        }
        let actual: Vec<_> = errors.iter().map(|e| e.exact_path.as_str()).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn field_violations_keep_validator_order(codes in prop::collection::vec("[a-z]{1,6}", 1..6)) {
        let validators: Vec<Box<dyn Fn(&str) -> Verdict>> = codes
            .iter()
            .cloned()
            .map(|code| {
                Box::new(move |_: &str| -> Verdict { Err(Violation::new(code.clone()).into()) })
                    as Box<dyn Fn(&str) -> Verdict>
            })
            .collect();
        let refs: Vec<&dyn inquest::Validator<str>> =
            validators.iter().map(|v| v as &dyn inquest::Validator<str>).collect();

        let errors = collect(field("value", "", &refs));
        prop_assert_eq!(errors.len(), 1);
        let actual: Vec<_> = errors[0].violations.iter().map(|v| v.code.to_string()).collect();
        prop_assert_eq!(actual, codes);
    }

    #[test]
    fn slice_reports_exactly_the_failing_indices(values in prop::collection::vec(-50i64..50, 0..40)) {
        let errors = collect(Slice::new("values", &values).items("n", &[&NumberMin(0)]));

        let expected: Vec<String> = values
            .iter()
            .enumerate()
            .filter(|(_, v)| **v < 0)
            .map(|(i, _)| format!("values.{}.n", i))
            .collect();
        let actual: Vec<_> = errors.iter().map(|e| e.exact_path.clone()).collect();
        prop_assert_eq!(actual, expected);
        prop_assert!(errors.iter().all(|e| e.path == "values.*.n"));
    }

    #[test]
    fn prefixing_composes(outer in "[a-z]{1,5}", inner in "[a-z]{1,5}", leaf in "[a-z]{1,5}") {
        let nested = collect(prefix_both_paths(&outer, prefix_both_paths(&inner, entry(&leaf, "x"))));
        let flat = collect(prefix_both_paths(&join_path(&outer, &inner), entry(&leaf, "x")));
        prop_assert_eq!(nested, flat);
    }
}
