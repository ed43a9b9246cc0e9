//! Path rewriting for validation outcomes.
//!
//! Every function here takes an [`Outcome`] by value and returns it with the
//! paths of its structured entries rewritten. `Ok(())` and fatal errors pass
//! through unchanged. After rewriting, entries that end up sharing an exact
//! path are merged, so the result keeps exact paths unique.

use crate::error::{Failure, ValidationError, ValidationErrors};
use crate::path::{join_path, last_path_segment};
use crate::Outcome;

fn rewrite(outcome: Outcome, mut f: impl FnMut(&mut ValidationError)) -> Outcome {
    match outcome {
        Ok(()) => Ok(()),
        Err(Failure::Single(mut error)) => {
            f(&mut error);
            Err(Failure::Single(error))
        }
        Err(Failure::Many(errors)) => {
            let rewritten: ValidationErrors = errors
                .into_iter()
                .map(|mut error| {
                    f(&mut error);
                    error
                })
                .collect();
            Err(Failure::Many(rewritten))
        }
        Err(fatal @ Failure::Fatal(_)) => Err(fatal),
    }
}

/// Prefixes the template path of every entry with `prefix`.
pub fn prefix_path(prefix: &str, outcome: Outcome) -> Outcome {
    rewrite(outcome, |error| error.path = join_path(prefix, &error.path))
}

/// Prefixes the exact path of every entry with `prefix`.
pub fn prefix_exact_path(prefix: &str, outcome: Outcome) -> Outcome {
    rewrite(outcome, |error| {
        error.exact_path = join_path(prefix, &error.exact_path)
    })
}

/// Prefixes both the template and the exact path of every entry.
///
/// ```rust
/// use inquest::rules::Required;
/// use inquest::{collect, field, prefix_both_paths};
///
/// let errors = collect(prefix_both_paths("billing", field("street", &"", &[&Required])));
/// assert_eq!(errors[0].path, "billing.street");
/// assert_eq!(errors[0].exact_path, "billing.street");
/// ```
pub fn prefix_both_paths(prefix: &str, outcome: Outcome) -> Outcome {
    rewrite(outcome, |error| {
        error.path = join_path(prefix, &error.path);
        error.exact_path = join_path(prefix, &error.exact_path);
    })
}

/// Replaces the template path of every entry with `path`.
pub fn override_path(path: &str, outcome: Outcome) -> Outcome {
    rewrite(outcome, |error| error.path = path.to_string())
}

/// Replaces the exact path of every entry with `path`.
///
/// Entries collapse into one, since they now share an exact path.
pub fn override_exact_path(path: &str, outcome: Outcome) -> Outcome {
    rewrite(outcome, |error| error.exact_path = path.to_string())
}

/// Shortens the template path of every entry to its last segment.
///
/// ```rust
/// use inquest::rules::Iban;
/// use inquest::{collect, field, last_segment};
///
/// let errors = collect(last_segment(field("name.iban", &"invalid", &[&Iban])));
/// assert_eq!(errors[0].path, "iban");
/// assert_eq!(errors[0].exact_path, "name.iban");
/// ```
pub fn last_segment(outcome: Outcome) -> Outcome {
    rewrite(outcome, |error| {
        error.path = last_path_segment(&error.path).to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{collect, join, Violation};

    fn entry(path: &str) -> Outcome {
        Err(Failure::Single(ValidationError::new(path, vec![Violation::new("x")])))
    }

    #[test]
    fn test_prefix_path_only_touches_template() {
        let errors = collect(prefix_path("outer", entry("name")));
        assert_eq!(errors[0].path, "outer.name");
        assert_eq!(errors[0].exact_path, "name");
    }

    #[test]
    fn test_prefix_exact_path_only_touches_exact() {
        let errors = collect(prefix_exact_path("outer", entry("name")));
        assert_eq!(errors[0].path, "name");
        assert_eq!(errors[0].exact_path, "outer.name");
    }

    #[test]
    fn test_prefix_many() {
        let errors = collect(prefix_both_paths("outer", join([entry("a"), entry("b")])));
        let exact: Vec<_> = errors.iter().map(|e| e.exact_path.as_str()).collect();
        assert_eq!(exact, vec!["outer.a", "outer.b"]);
    }

    #[test]
    fn test_override_path() {
        let errors = collect(override_path("replaced", join([entry("a"), entry("b")])));
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| e.path == "replaced"));
    }

    #[test]
    fn test_override_exact_path_merges_entries() {
        let errors = collect(override_exact_path("same", join([entry("a"), entry("b")])));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].violations.len(), 2);
    }

    #[test]
    fn test_rewrite_leaves_ok_and_fatal() {
        assert!(prefix_path("p", Ok(())).is_ok());
        let fatal = override_path("p", Err(Failure::fatal("broken")));
        assert!(matches!(fatal, Err(Failure::Fatal(_))));
    }

    #[test]
    fn test_last_segment_on_nested() {
        let errors = collect(last_segment(entry("a.b.c")));
        assert_eq!(errors[0].path, "c");
        assert_eq!(errors[0].exact_path, "a.b.c");
    }
}
