//! The validator contract and the invocation loop.
//!
//! A [`Validator`] inspects one value and returns a [`Verdict`]. The loop in
//! [`run`] applies an ordered list of validators to a value, collecting every
//! violation into [`Findings`] and stopping at the first fatal error.

use std::error::Error as StdError;

use crate::error::{Failure, FatalError, ValidationError, ValidationErrors, Violation};

/// What a single validator call returns.
pub type Verdict = Result<(), Rejection>;

/// A check over values of type `T`.
///
/// Implemented for every `Fn(&T) -> Verdict`, so closures and plain functions
/// are validators. The rules in [`crate::rules`] are unit or tuple structs that
/// implement this trait for every type they can inspect.
///
/// # Example
///
/// ```rust
/// use inquest::{field, Validator, Verdict, Violation};
///
/// fn even(value: &i64) -> Verdict {
///     if value % 2 == 0 {
///         Ok(())
///     } else {
///         Err(Violation::new("even").into())
///     }
/// }
///
/// assert!(even.validate(&4).is_ok());
/// assert!(field("count", &3, &[&even]).is_err());
/// ```
pub trait Validator<T: ?Sized> {
    /// Validates `value`.
    fn validate(&self, value: &T) -> Verdict;
}

impl<T: ?Sized, F> Validator<T> for F
where
    F: Fn(&T) -> Verdict,
{
    fn validate(&self, value: &T) -> Verdict {
        self(value)
    }
}

/// Everything the invocation loop found wrong with one value.
///
/// `violations` belong to the scope that ran the loop. `nested` holds entries
/// returned by validators that themselves called [`field`](crate::field),
/// [`group`](crate::group) or [`join`](crate::join); their paths are relative
/// to that scope.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Findings {
    pub violations: Vec<Violation>,
    pub nested: ValidationErrors,
}

impl Findings {
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty() && self.nested.is_empty()
    }

    /// Folds `other` into these findings, keeping order.
    pub fn absorb(&mut self, other: Findings) {
        self.violations.extend(other.violations);
        self.nested.merge_all(other.nested);
    }

    /// Turns the findings into entries rooted at `template`/`exact`.
    ///
    /// Plain violations become one entry at the scope itself; nested entries
    /// are re-homed under it. Every produced entry gets `args` merged in.
    pub(crate) fn into_entries(
        self,
        template: &str,
        exact: &str,
        args: &crate::Args,
    ) -> ValidationErrors {
        let mut entries = ValidationErrors::new();

        if !self.violations.is_empty() {
            entries.merge(
                ValidationError::new(template, self.violations)
                    .with_exact_path(exact)
                    .with_args(args.clone()),
            );
        }

        for mut error in self.nested {
            error.path = crate::path::join_path(template, &error.path);
            error.exact_path = crate::path::join_path(exact, &error.exact_path);
            error.args = std::mem::take(&mut error.args).merge(args.clone());
            entries.merge(error);
        }

        entries
    }
}

impl From<Violation> for Findings {
    fn from(violation: Violation) -> Self {
        Self {
            violations: vec![violation],
            nested: ValidationErrors::new(),
        }
    }
}

/// The error half of a [`Verdict`].
#[derive(Debug)]
pub enum Rejection {
    /// The value broke one or more rules.
    Invalid(Findings),
    /// Validation itself broke; this aborts every enclosing scope unchanged.
    Fatal(FatalError),
}

impl Rejection {
    /// Wraps an arbitrary error as a fatal rejection.
    pub fn fatal<E>(error: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync + 'static>>,
    {
        Rejection::Fatal(FatalError::new(error))
    }
}

impl From<Violation> for Rejection {
    fn from(violation: Violation) -> Self {
        Rejection::Invalid(Findings::from(violation))
    }
}

impl From<Vec<Violation>> for Rejection {
    fn from(violations: Vec<Violation>) -> Self {
        Rejection::Invalid(Findings {
            violations,
            nested: ValidationErrors::new(),
        })
    }
}

impl From<Findings> for Rejection {
    fn from(findings: Findings) -> Self {
        Rejection::Invalid(findings)
    }
}

/// Lets a validator forward the outcome of a nested validation with `?`.
impl From<Failure> for Rejection {
    fn from(failure: Failure) -> Self {
        match failure.into_errors() {
            Ok(nested) => Rejection::Invalid(Findings {
                violations: Vec::new(),
                nested,
            }),
            Err(fatal) => Rejection::Fatal(fatal),
        }
    }
}

impl From<FatalError> for Rejection {
    fn from(fatal: FatalError) -> Self {
        Rejection::Fatal(fatal)
    }
}

/// Runs every validator against `value`, in order.
///
/// Returns `Ok(None)` if all of them passed, or the accumulated findings
/// otherwise. A fatal rejection stops the loop immediately and is returned
/// unchanged; findings collected before it are discarded.
pub fn run<T: ?Sized>(
    value: &T,
    validators: &[&dyn Validator<T>],
) -> Result<Option<Findings>, FatalError> {
    run_each(value, validators)
}

/// [`run`] over any slice of validator references.
pub(crate) fn run_each<T, V>(value: &T, validators: &[&V]) -> Result<Option<Findings>, FatalError>
where
    T: ?Sized,
    V: Validator<T> + ?Sized,
{
    let mut findings = Findings::default();

    for validator in validators {
        match validator.validate(value) {
            Ok(()) => {}
            Err(Rejection::Invalid(found)) => findings.absorb(found),
            Err(Rejection::Fatal(fatal)) => return Err(fatal),
        }
    }

    if findings.is_empty() {
        Ok(None)
    } else {
        Ok(Some(findings))
    }
}
