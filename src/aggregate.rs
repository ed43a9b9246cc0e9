//! Joining outcomes and reading them back.
//!
//! [`join`] merges many outcomes into one exact-path-unique report.
//! [`collect`] and [`collect_error`] flatten an outcome, or any error that
//! wraps one, into the list of entries consumers render.

use std::error::Error as StdError;

use stillwater::Validation;

use crate::error::{Failure, FatalError, ValidationError, ValidationErrors};
use crate::Outcome;

/// Joins outcomes into a single report.
///
/// Entries are merged by exact path: an entry whose exact path was already
/// seen has its violations appended to the earlier entry. Distinct paths
/// keep the order in which they were first seen. If any outcome is fatal,
/// that error is returned immediately and everything collected so far is
/// discarded.
///
/// Returns `Ok(())` if no outcome carried an entry.
///
/// # Example
///
/// ```rust
/// use inquest::rules::{MinLen, Required};
/// use inquest::{collect, field, join};
///
/// let name = "";
/// let result = join([
///     field("name", &name, &[&Required]),
///     field("name", &name, &[&MinLen(2)]),
///     field("iban", &"invalid", &[&Required]),
/// ]);
///
/// let errors = collect(result);
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].violations.len(), 2);
/// ```
pub fn join(outcomes: impl IntoIterator<Item = Outcome>) -> Outcome {
    let mut accumulator = ValidationErrors::new();

    for outcome in outcomes {
        match outcome {
            Ok(()) => {}
            Err(Failure::Single(error)) => accumulator.merge(error),
            Err(Failure::Many(errors)) => accumulator.merge_all(errors),
            Err(Failure::Fatal(fatal)) => {
                tracing::debug!(
                    discarded = accumulator.len(),
                    error = %fatal,
                    "fatal error while joining outcomes"
                );
                return Err(Failure::Fatal(fatal));
            }
        }
    }

    if accumulator.is_empty() {
        Ok(())
    } else {
        Err(Failure::Many(accumulator))
    }
}

/// Flattens an outcome into its entries.
///
/// `Ok(())` yields nothing, a single entry yields one element, a collection
/// yields itself. A fatal error yields nothing unless the error it carries
/// wraps a structured error somewhere in its `source()` chain.
pub fn collect(outcome: Outcome) -> Vec<ValidationError> {
    match outcome {
        Ok(()) => Vec::new(),
        Err(failure) => collect_failure(&failure),
    }
}

/// Like [`collect`], for a borrowed failure.
pub fn collect_failure(failure: &Failure) -> Vec<ValidationError> {
    match failure {
        Failure::Single(error) => vec![error.clone()],
        Failure::Many(errors) => errors.iter().cloned().collect(),
        Failure::Fatal(fatal) => collect_error(fatal.get_ref()),
    }
}

/// Collects entries from an arbitrary error.
///
/// Walks `err` and its `source()` chain and returns the entries of the first
/// structured error found, or an empty list. Never panics.
///
/// # Example
///
/// ```rust
/// use inquest::rules::Required;
/// use inquest::{collect_error, field, Failure};
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("request rejected")]
/// struct Rejected(#[source] Failure);
///
/// let failure = field("name", &"", &[&Required]).unwrap_err();
/// let errors = collect_error(&Rejected(failure));
/// assert_eq!(errors[0].path, "name");
/// ```
pub fn collect_error(err: &(dyn StdError + 'static)) -> Vec<ValidationError> {
    chain(err)
        .find_map(structured)
        .unwrap_or_default()
}

/// Returns true if `err` is, or wraps, a structured validation error.
///
/// Wrapping follows the standard `source()` chain, to any depth. Unrelated
/// errors, and fatal failures that do not wrap a structured error, return
/// false.
///
/// ```rust
/// use inquest::rules::Required;
/// use inquest::{field, is_validation_error};
///
/// let failure = field("name", &"", &[&Required]).unwrap_err();
/// assert!(is_validation_error(&failure));
/// assert!(!is_validation_error(&std::io::Error::other("disk gone")));
/// ```
pub fn is_validation_error(err: &(dyn StdError + 'static)) -> bool {
    chain(err).any(|e| structured(e).is_some())
}

fn chain<'a>(
    err: &'a (dyn StdError + 'static),
) -> impl Iterator<Item = &'a (dyn StdError + 'static)> {
    std::iter::successors(Some(err), |&e| e.source())
}

fn structured(err: &(dyn StdError + 'static)) -> Option<Vec<ValidationError>> {
    if let Some(error) = err.downcast_ref::<ValidationError>() {
        return Some(vec![error.clone()]);
    }
    if let Some(errors) = err.downcast_ref::<ValidationErrors>() {
        return Some(errors.iter().cloned().collect());
    }
    if let Some(fatal) = err.downcast_ref::<FatalError>() {
        return structured(fatal.get_ref());
    }
    match err.downcast_ref::<Failure>() {
        Some(Failure::Single(error)) => Some(vec![error.clone()]),
        Some(Failure::Many(errors)) => Some(errors.iter().cloned().collect()),
        Some(Failure::Fatal(fatal)) => structured(fatal.get_ref()),
        None => None,
    }
}

/// Converts an outcome into a `stillwater` validation.
///
/// The structured cases become `Validation::Failure`; a fatal error is
/// returned separately since it is not a validation result.
///
/// ```rust
/// use inquest::rules::Required;
/// use inquest::{field, into_validation};
///
/// let validation = into_validation(field("name", &"", &[&Required])).unwrap();
/// assert!(validation.is_failure());
/// ```
pub fn into_validation(outcome: Outcome) -> Result<Validation<(), ValidationErrors>, FatalError> {
    match outcome {
        Ok(()) => Ok(Validation::Success(())),
        Err(failure) => failure.into_errors().map(Validation::Failure),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Violation;

    fn entry(path: &str, code: &'static str) -> Outcome {
        Err(Failure::Single(ValidationError::new(path, vec![Violation::new(code)])))
    }

    #[derive(Debug, thiserror::Error)]
    #[error("outer: {0}")]
    struct Outer(#[source] Middle);

    #[derive(Debug, thiserror::Error)]
    #[error("middle")]
    struct Middle(#[source] Failure);

    #[test]
    fn test_join_all_ok() {
        assert!(join([Ok(()), Ok(())]).is_ok());
        assert!(join(Vec::<Outcome>::new()).is_ok());
    }

    #[test]
    fn test_join_merges_same_exact_path() {
        let errors = collect(join([entry("x", "fail"), entry("x", "fail2")]));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].exact_path, "x");
        let codes: Vec<_> = errors[0].violations.iter().map(|v| v.code.as_str()).collect();
        assert_eq!(codes, vec!["fail", "fail2"]);
    }

    #[test]
    fn test_join_nested_many() {
        let inner = join([entry("b", "1"), entry("c", "1")]);
        let errors = collect(join([entry("a", "1"), inner, entry("b", "2")]));

        let paths: Vec<_> = errors.iter().map(|e| e.exact_path.as_str()).collect();
        assert_eq!(paths, vec!["a", "b", "c"]);
        assert_eq!(errors[1].violations.len(), 2);
    }

    #[test]
    fn test_join_fatal_discards_everything() {
        let result = join([entry("a", "1"), Err(Failure::fatal("broken")), entry("b", "1")]);
        match result {
            Err(Failure::Fatal(fatal)) => assert_eq!(fatal.to_string(), "broken"),
            other => panic!("expected fatal, got {:?}", other),
        }
    }

    #[test]
    fn test_collect_shapes() {
        assert!(collect(Ok(())).is_empty());
        assert_eq!(collect(entry("a", "1")).len(), 1);
        assert!(collect(Err(Failure::fatal("broken"))).is_empty());
    }

    #[test]
    fn test_collect_fatal_wrapping_structured() {
        let wrapped = Outer(Middle(join([entry("a", "1"), entry("b", "1")]).unwrap_err()));
        let errors = collect(Err(Failure::fatal(wrapped)));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_is_validation_error_through_wrappers() {
        let wrapped = Outer(Middle(entry("a", "1").unwrap_err()));
        assert!(is_validation_error(&wrapped));

        let fatal = Outer(Middle(Failure::fatal("broken")));
        assert!(!is_validation_error(&fatal));

        let single = ValidationError::new("a", vec![]);
        assert!(is_validation_error(&single));
        assert!(is_validation_error(&ValidationErrors::new()));
    }

    #[test]
    fn test_error_chain_walks_every_source() {
        let wrapped = Outer(Middle(Failure::fatal("broken")));
        let messages: Vec<_> = chain(&wrapped).map(|e| e.to_string()).collect();
        assert_eq!(messages, vec!["outer: middle", "middle", "broken"]);
    }

    #[test]
    fn test_fatal_error_wrapping_structured_errors() {
        let errors: ValidationErrors = collect(join([entry("a", "1"), entry("b", "1")]))
            .into_iter()
            .collect();
        let fatal = FatalError::new(errors);

        assert!(is_validation_error(&fatal));
        assert_eq!(collect_error(&fatal).len(), 2);
        assert!(!is_validation_error(&FatalError::new("broken")));
    }

    #[test]
    fn test_into_validation() {
        assert!(into_validation(Ok(())).unwrap().is_success());
        assert!(into_validation(entry("a", "1")).unwrap().is_failure());
        assert!(into_validation(Err(Failure::fatal("broken"))).is_err());
    }
}
