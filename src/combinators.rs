//! Validator combinators.
//!
//! This module provides validators built from other validators:
//! - [`FailFirst`]: stop at the first failure
//! - [`AnyOf`]: fail only if every validator fails
//! - [`When`]: run validators only when a condition holds
//! - [`Resolve`] / [`ResolveOwned`]: validate a value derived from the input
//!
//! Combinators borrow their inner validators, so they are built inline at the
//! call site:
//!
//! ```rust
//! use inquest::combinators::{fail_first, when};
//! use inquest::rules::{Email, MaxLen, Required};
//! use inquest::{collect, field};
//!
//! let email = String::new();
//! let result = field("email", &email, &[
//!     &fail_first(&[&Required, &Email]),
//!     &when(!email.is_empty(), &[&MaxLen(64)]),
//! ]);
//!
//! let errors = collect(result);
//! assert_eq!(errors[0].violations.len(), 1);
//! assert_eq!(errors[0].violations[0].code, "required");
//! ```

use std::marker::PhantomData;

use crate::error::FatalError;
use crate::validation::{run, Findings, Rejection, Validator, Verdict};

fn into_verdict(result: Result<Option<Findings>, FatalError>) -> Verdict {
    match result {
        Ok(None) => Ok(()),
        Ok(Some(findings)) => Err(Rejection::Invalid(findings)),
        Err(fatal) => Err(Rejection::Fatal(fatal)),
    }
}

/// Runs validators in order and returns the first failure.
///
/// Use this when later validators presuppose that earlier ones passed.
pub struct FailFirst<'a, T: ?Sized>(pub &'a [&'a dyn Validator<T>]);

/// Creates a [`FailFirst`] validator.
pub fn fail_first<'a, T: ?Sized>(validators: &'a [&'a dyn Validator<T>]) -> FailFirst<'a, T> {
    FailFirst(validators)
}

impl<T: ?Sized> Validator<T> for FailFirst<'_, T> {
    fn validate(&self, value: &T) -> Verdict {
        for validator in self.0 {
            validator.validate(value)?;
        }
        Ok(())
    }
}

/// Passes as soon as one validator passes.
///
/// Every validator is evaluated in order until one succeeds. If all of them
/// fail, the violations of every alternative are reported together. A fatal
/// error from any alternative aborts immediately. An empty list passes.
pub struct AnyOf<'a, T: ?Sized>(pub &'a [&'a dyn Validator<T>]);

/// Creates an [`AnyOf`] validator.
pub fn any_of<'a, T: ?Sized>(validators: &'a [&'a dyn Validator<T>]) -> AnyOf<'a, T> {
    AnyOf(validators)
}

impl<T: ?Sized> Validator<T> for AnyOf<'_, T> {
    fn validate(&self, value: &T) -> Verdict {
        let mut findings = Findings::default();

        for validator in self.0 {
            match validator.validate(value) {
                Ok(()) => return Ok(()),
                Err(Rejection::Invalid(found)) => findings.absorb(found),
                Err(fatal @ Rejection::Fatal(_)) => return Err(fatal),
            }
        }

        if findings.is_empty() {
            Ok(())
        } else {
            Err(Rejection::Invalid(findings))
        }
    }
}

/// Runs validators only when a condition holds at construction time.
///
/// When the condition is false this is a no-op validator.
pub struct When<'a, T: ?Sized> {
    condition: bool,
    validators: &'a [&'a dyn Validator<T>],
}

/// Creates a [`When`] validator.
pub fn when<'a, T: ?Sized>(condition: bool, validators: &'a [&'a dyn Validator<T>]) -> When<'a, T> {
    When {
        condition,
        validators,
    }
}

impl<T: ?Sized> Validator<T> for When<'_, T> {
    fn validate(&self, value: &T) -> Verdict {
        if !self.condition {
            return Ok(());
        }
        into_verdict(run(value, self.validators))
    }
}

/// Validates a part of the input while reporting at the input's scope.
///
/// The projection borrows from the input, which suits struct fields:
///
/// ```rust
/// use inquest::combinators::resolve;
/// use inquest::rules::MinLen;
/// use inquest::{collect, Slice};
///
/// struct Line { sku: String }
///
/// let lines = vec![Line { sku: "AB".into() }];
/// let result = Slice::new("lines", &lines)
///     .items("sku", &[&resolve(|line: &Line| &line.sku, &[&MinLen(3)])]);
///
/// assert_eq!(collect(result)[0].exact_path, "lines.0.sku");
/// ```
pub struct Resolve<'a, O: ?Sized, R: ?Sized, P> {
    project: P,
    validators: &'a [&'a dyn Validator<R>],
    _original: PhantomData<fn(&O)>,
}

/// Creates a [`Resolve`] validator.
pub fn resolve<'a, O, R, P>(project: P, validators: &'a [&'a dyn Validator<R>]) -> Resolve<'a, O, R, P>
where
    O: ?Sized,
    R: ?Sized,
    P: Fn(&O) -> &R,
{
    Resolve {
        project,
        validators,
        _original: PhantomData,
    }
}

impl<O, R, P> Validator<O> for Resolve<'_, O, R, P>
where
    O: ?Sized,
    R: ?Sized,
    P: Fn(&O) -> &R,
{
    fn validate(&self, value: &O) -> Verdict {
        into_verdict(run((self.project)(value), self.validators))
    }
}

/// Like [`Resolve`], but the projection computes an owned value.
pub struct ResolveOwned<'a, O: ?Sized, R, P> {
    project: P,
    validators: &'a [&'a dyn Validator<R>],
    _original: PhantomData<fn(&O)>,
}

/// Creates a [`ResolveOwned`] validator.
pub fn resolve_owned<'a, O, R, P>(
    project: P,
    validators: &'a [&'a dyn Validator<R>],
) -> ResolveOwned<'a, O, R, P>
where
    O: ?Sized,
    P: Fn(&O) -> R,
{
    ResolveOwned {
        project,
        validators,
        _original: PhantomData,
    }
}

impl<O, R, P> Validator<O> for ResolveOwned<'_, O, R, P>
where
    O: ?Sized,
    P: Fn(&O) -> R,
{
    fn validate(&self, value: &O) -> Verdict {
        let resolved = (self.project)(value);
        into_verdict(run(&resolved, self.validators))
    }
}
