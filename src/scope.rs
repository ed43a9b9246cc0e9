//! Scope builders for named fields and nested groups.

use crate::error::{Failure, ValidationError};
use crate::path::ScopePath;
use crate::validation::{run, Validator};
use crate::{Args, Outcome};

/// Runs `validators` against `value` and scopes the result under `name`.
///
/// Returns `Ok(())` when every validator passes. Violations are grouped into
/// a single entry whose template and exact path are both `name`, in the order
/// the validators ran. Entries returned by nested validations are re-homed
/// under `name`. A fatal error is returned unchanged.
///
/// # Example
///
/// ```rust
/// use inquest::rules::{MaxLen, Required};
/// use inquest::{collect, field};
///
/// let result = field("last_name", &"Doe's last name is too long", &[&Required, &MaxLen(15)]);
///
/// let errors = collect(result);
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].path, "last_name");
/// assert_eq!(errors[0].violations[0].code, "max.string");
/// ```
pub fn field<T: ?Sized>(name: &str, value: &T, validators: &[&dyn Validator<T>]) -> Outcome {
    let findings = match run(value, validators) {
        Ok(None) => return Ok(()),
        Ok(Some(findings)) => findings,
        Err(fatal) => {
            tracing::debug!(field = name, error = %fatal, "fatal error while validating field");
            return Err(Failure::Fatal(fatal));
        }
    };

    if findings.nested.is_empty() {
        return Err(Failure::Single(ValidationError::new(name, findings.violations)));
    }

    let scope = ScopePath::from_field(name);
    Err(Failure::Many(findings.into_entries(
        &scope.template(),
        &scope.exact(),
        &Args::new(),
    )))
}

/// Prefixes the paths of a nested validation result with `name`.
///
/// `Ok(())` stays `Ok(())` and fatal errors are returned unchanged; only the
/// structured cases are rewritten. This is how struct-of-struct validation
/// composes: each level wraps the outcome of validating its child.
///
/// # Example
///
/// ```rust
/// use inquest::rules::Required;
/// use inquest::{collect, field, group, join};
///
/// let result = group("customer", join([
///     field("first_name", &"", &[&Required]),
///     field("last_name", &"Doe", &[&Required]),
/// ]));
///
/// let errors = collect(result);
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].exact_path, "customer.first_name");
/// ```
pub fn group(name: &str, outcome: Outcome) -> Outcome {
    crate::rewrite::prefix_both_paths(name, outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{Rejection, Verdict};
    use crate::{collect, Violation};

    fn fail(code: &'static str) -> impl Fn(&str) -> Verdict {
        move |_| Err(Violation::new(code).into())
    }

    #[test]
    fn test_field_passes() {
        assert!(field("name", "John", &[]).is_ok());
        assert!(field("name", "John", &[&|_: &str| -> Verdict { Ok(()) }]).is_ok());
    }

    #[test]
    fn test_field_single_entry() {
        let result = field("name", "", &[&fail("a"), &fail("b")]);
        match result {
            Err(Failure::Single(error)) => {
                assert_eq!(error.path, "name");
                assert_eq!(error.exact_path, "name");
                assert_eq!(error.violations.len(), 2);
                assert!(error.args.is_empty());
            }
            other => panic!("expected single entry, got {:?}", other),
        }
    }

    #[test]
    fn test_field_rehomes_nested() {
        let nested = |value: &str| -> Verdict {
            crate::join([
                field("street", value, &[&fail("street")]),
                field("number", value, &[&fail("number")]),
            ])?;
            Ok(())
        };

        let errors = collect(field("address", "x", &[&fail("own"), &nested]));
        let exact: Vec<_> = errors.iter().map(|e| e.exact_path.as_str()).collect();
        assert_eq!(exact, vec!["address", "address.street", "address.number"]);
    }

    #[test]
    fn test_field_returns_fatal_unwrapped() {
        let io = |_: &str| -> Verdict { Err(Rejection::fatal(std::io::Error::other("gone"))) };
        let result = field("name", "", &[&fail("a"), &io]);

        match result {
            Err(Failure::Fatal(fatal)) => {
                assert_eq!(fatal.to_string(), "gone");
                assert!(fatal.is::<std::io::Error>());
            }
            other => panic!("expected fatal, got {:?}", other),
        }
    }

    #[test]
    fn test_group_passthrough() {
        assert!(group("customer", Ok(())).is_ok());

        let fatal = group("customer", Err(Failure::fatal("broken")));
        assert!(matches!(fatal, Err(Failure::Fatal(f)) if f.to_string() == "broken"));
    }

    #[test]
    fn test_group_prefixes_single() {
        let errors = collect(group("customer", field("email", "", &[&fail("email")])));
        assert_eq!(errors[0].path, "customer.email");
        assert_eq!(errors[0].exact_path, "customer.email");
    }
}
