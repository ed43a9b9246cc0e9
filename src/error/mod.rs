//! Error types for validation failures.
//!
//! This module provides the violation and report types: [`Violation`] for a
//! single failed rule, [`ValidationError`] and [`ValidationErrors`] for
//! violations grouped under paths, and [`Failure`] for the error half of an
//! [`Outcome`](crate::Outcome).

mod args;
mod code;
mod failure;
mod validation_error;
mod violation;

pub use args::Args;
pub use code::Code;
pub use failure::{Failure, FatalError};
pub use validation_error::{ValidationError, ValidationErrors};
pub use violation::Violation;
