//! Scoped validation error types.
//!
//! This module provides [`ValidationError`] for the violations found at one
//! path and [`ValidationErrors`] for an exact-path-unique collection of them.

use std::fmt::{self, Display};

use indexmap::IndexMap;
use stillwater::prelude::*;

use super::{Args, Violation};

/// One or more violations grouped under a template/exact path pair.
///
/// - **path**: the template path. Collection positions use a wildcard
///   (`items.*.name`) so it is stable across instances.
/// - **exact_path**: the concrete path with literal indices and keys
///   (`items.3.name`).
/// - **args**: scope-level parameters, such as the `index` or `key` the entry
///   was produced at.
/// - **violations**: the failed rules, in the order their validators ran.
///
/// # Example
///
/// ```rust
/// use inquest::{Code, ValidationError, Violation};
///
/// let error = ValidationError::new("customer.email", vec![Violation::new(Code::Email)]);
///
/// assert_eq!(error.path, "customer.email");
/// assert_eq!(error.exact_path, "customer.email");
/// assert_eq!(error.field(), "email");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub path: String,
    pub exact_path: String,
    pub args: Args,
    pub violations: Vec<Violation>,
}

impl ValidationError {
    /// Creates an error whose template and exact path are both `path`.
    pub fn new(path: impl Into<String>, violations: Vec<Violation>) -> Self {
        let path = path.into();
        Self {
            exact_path: path.clone(),
            path,
            args: Args::new(),
            violations,
        }
    }

    /// Sets a distinct exact path and returns self for chaining.
    pub fn with_exact_path(mut self, exact_path: impl Into<String>) -> Self {
        self.exact_path = exact_path.into();
        self
    }

    /// Sets the args and returns self for chaining.
    pub fn with_args(mut self, args: Args) -> Self {
        self.args = args;
        self
    }

    /// Returns the last segment of the template path.
    pub fn field(&self) -> &str {
        crate::path::last_path_segment(&self.path)
    }

    /// Returns true if any violation carries `code`.
    pub fn has_code(&self, code: &str) -> bool {
        self.violations.iter().any(|v| v.code == code)
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "validation error for exact path: {}, path: {}, args: {}, violations: [",
            self.exact_path, self.path, self.args
        )?;
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", violation)?;
        }
        write!(f, "]")
    }
}

impl std::error::Error for ValidationError {}

/// An ordered collection of [`ValidationError`] entries with unique exact paths.
///
/// Order is the order in which each distinct exact path was first seen.
/// Adding an entry whose exact path is already present appends its violations
/// to the existing entry instead of creating a duplicate.
///
/// # Combining Errors
///
/// `ValidationErrors` implements `Semigroup`; `combine` merges every entry of
/// the right-hand side into the left-hand side:
///
/// ```rust
/// use inquest::{Code, ValidationError, ValidationErrors, Violation};
/// use stillwater::prelude::*;
///
/// let first = ValidationErrors::single(ValidationError::new("name", vec![Violation::new(Code::Required)]));
/// let second = ValidationErrors::single(ValidationError::new("name", vec![Violation::new(Code::StringMin)]));
///
/// let combined = first.combine(second);
/// assert_eq!(combined.len(), 1);
/// assert_eq!(combined.first().map(|e| e.violations.len()), Some(2));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors(IndexMap<String, ValidationError>);

impl ValidationErrors {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collection containing a single error.
    pub fn single(error: ValidationError) -> Self {
        let mut errors = Self::new();
        errors.merge(error);
        errors
    }

    /// Merges `error` into the collection.
    ///
    /// If an entry with the same exact path exists, the new violations are
    /// appended after the existing ones and the args are merged. Otherwise
    /// the error is appended as a new entry.
    pub fn merge(&mut self, error: ValidationError) {
        match self.0.get_mut(error.exact_path.as_str()) {
            Some(existing) => {
                tracing::trace!(
                    exact_path = %existing.exact_path,
                    added = error.violations.len(),
                    "merging violations into existing entry"
                );
                existing.violations.extend(error.violations);
                existing.args = std::mem::take(&mut existing.args).merge(error.args);
            }
            None => {
                self.0.insert(error.exact_path.clone(), error);
            }
        }
    }

    /// Merges every entry of `errors`, preserving their order.
    pub fn merge_all(&mut self, errors: impl IntoIterator<Item = ValidationError>) {
        for error in errors {
            self.merge(error);
        }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the entries.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.values()
    }

    /// Returns the first entry, if any.
    pub fn first(&self) -> Option<&ValidationError> {
        self.0.first().map(|(_, error)| error)
    }

    /// Returns the entry with the given exact path.
    pub fn at_exact_path(&self, exact_path: &str) -> Option<&ValidationError> {
        self.0.get(exact_path)
    }

    /// Returns all entries with the given template path.
    pub fn at_path(&self, path: &str) -> Vec<&ValidationError> {
        self.iter().filter(|e| e.path == path).collect()
    }

    /// Returns all entries carrying a violation with the given code.
    pub fn with_code(&self, code: &str) -> Vec<&ValidationError> {
        self.iter().filter(|e| e.has_code(code)).collect()
    }

    /// Converts this collection into a `Vec<ValidationError>`.
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0.into_values().collect()
    }
}

// Entry order is part of the report, so equality compares in order.
impl PartialEq for ValidationErrors {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Semigroup for ValidationErrors {
    fn combine(mut self, other: Self) -> Self {
        self.merge_all(other);
        self
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        let mut errors = ValidationErrors::new();
        errors.merge_all(iter);
        errors
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation errors: [")?;
        for (i, error) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", error)?;
        }
        write!(f, "]")
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = indexmap::map::IntoValues<String, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_values()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = indexmap::map::Values<'a, String, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.values()
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationError>();
    assert_sync::<ValidationError>();
    assert_send::<ValidationErrors>();
    assert_sync::<ValidationErrors>();
};
