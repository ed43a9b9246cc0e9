//! The error half of an [`Outcome`](crate::Outcome).
//!
//! A [`Failure`] is either structured (one [`ValidationError`] or a
//! [`ValidationErrors`] collection) or fatal. Fatal errors are anything a
//! validator produced that is not a violation; they pass through every scope
//! builder and aggregator unchanged.

use std::error::Error as StdError;
use std::fmt::{self, Debug, Display};

use super::{ValidationError, ValidationErrors};

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// An unexpected error raised while validating, as opposed to invalid input.
///
/// `FatalError` stores the original error as-is. It is never merged with
/// violations or rewritten by path utilities, and [`FatalError::downcast_ref`]
/// or [`FatalError::into_inner`] give back exactly the value that was raised.
///
/// # Example
///
/// ```rust
/// use inquest::FatalError;
///
/// let fatal = FatalError::new(std::io::Error::other("disk gone"));
///
/// assert!(fatal.downcast_ref::<std::io::Error>().is_some());
/// assert_eq!(fatal.to_string(), "disk gone");
/// ```
pub struct FatalError(BoxError);

impl FatalError {
    /// Wraps an error without altering it.
    pub fn new<E>(error: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self(error.into())
    }

    /// Returns a reference to the wrapped error.
    pub fn get_ref(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.0
    }

    /// Attempts to downcast the wrapped error to a concrete type.
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.0.downcast_ref::<E>()
    }

    /// Returns true if the wrapped error is of type `E`.
    pub fn is<E: StdError + 'static>(&self) -> bool {
        self.0.is::<E>()
    }

    /// Unwraps the original error.
    pub fn into_inner(self) -> BoxError {
        self.0
    }
}

impl Debug for FatalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

impl Display for FatalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl StdError for FatalError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

/// The failure shapes a validation call can return.
///
/// Together with `Ok(())` this forms the closed set of outcomes: empty,
/// single entry, many entries, or fatal.
#[derive(Debug, thiserror::Error)]
pub enum Failure {
    /// A single scoped error, as produced by [`field`](crate::field).
    #[error(transparent)]
    Single(ValidationError),
    /// A merged collection, as produced by [`join`](crate::join) and the
    /// collection traversals.
    #[error(transparent)]
    Many(ValidationErrors),
    /// An unexpected error that aborted validation.
    #[error(transparent)]
    Fatal(FatalError),
}

impl Failure {
    /// Wraps an arbitrary error as a fatal failure.
    pub fn fatal<E>(error: E) -> Self
    where
        E: Into<BoxError>,
    {
        Failure::Fatal(FatalError::new(error))
    }

    /// Returns true for the structured (non-fatal) cases.
    pub fn is_validation(&self) -> bool {
        !self.is_fatal()
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Failure::Fatal(_))
    }

    /// Returns the fatal error, if this is one.
    pub fn as_fatal(&self) -> Option<&FatalError> {
        match self {
            Failure::Fatal(fatal) => Some(fatal),
            _ => None,
        }
    }

    /// Converts the structured cases into a `ValidationErrors` collection.
    ///
    /// Returns the fatal error unchanged in the `Err` case.
    pub fn into_errors(self) -> Result<ValidationErrors, FatalError> {
        match self {
            Failure::Single(error) => Ok(ValidationErrors::single(error)),
            Failure::Many(errors) => Ok(errors),
            Failure::Fatal(fatal) => Err(fatal),
        }
    }
}

impl From<ValidationError> for Failure {
    fn from(error: ValidationError) -> Self {
        Failure::Single(error)
    }
}

impl From<ValidationErrors> for Failure {
    fn from(errors: ValidationErrors) -> Self {
        Failure::Many(errors)
    }
}

impl From<FatalError> for Failure {
    fn from(fatal: FatalError) -> Self {
        Failure::Fatal(fatal)
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Failure>();
    assert_sync::<Failure>();
};
