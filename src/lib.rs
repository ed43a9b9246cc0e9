//! # Inquest
//!
//! A validation library that reports every failed rule of a value, addressed
//! by where in the value it failed.
//!
//! ## Overview
//!
//! Callers describe checks per field, per slice element, and per map key or
//! value. Each failed check is a [`Violation`] with a machine-readable
//! [`Code`]. Violations are grouped into [`ValidationError`] entries that carry
//! two paths:
//!
//! - a template path, stable across instances (`items.*.name`)
//! - an exact path, naming the concrete instance (`items.3.name`)
//!
//! Within one report no two entries share an exact path: violations for the
//! same place accumulate in one entry.
//!
//! Errors that are not violations (a failed lookup, a broken invariant) are
//! fatal. They travel through every layer unchanged and are never mixed into
//! the report.
//!
//! ## Core Types
//!
//! - [`Outcome`]: what every scope builder returns
//! - [`Failure`]: a single entry, a collection of entries, or a fatal error
//! - [`Validator`]: anything that can check a value; closures included
//! - [`ScopePath`]: the builder behind both path forms
//!
//! ## Example
//!
//! ```rust
//! use inquest::rules::{Email, MinLen, NumberMin, Required};
//! use inquest::{collect, field, group, join, Slice, Verdict};
//!
//! struct Line {
//!     sku: String,
//!     qty: i64,
//! }
//!
//! struct Order {
//!     email: String,
//!     lines: Vec<Line>,
//! }
//!
//! fn line(line: &Line) -> Verdict {
//!     join([
//!         field("sku", &line.sku, &[&Required, &MinLen(4)]),
//!         field("qty", &line.qty, &[&NumberMin(1)]),
//!     ])?;
//!     Ok(())
//! }
//!
//! let order = Order {
//!     email: "not-an-email".into(),
//!     lines: vec![
//!         Line { sku: "AB-1234".into(), qty: 2 },
//!         Line { sku: "".into(), qty: 0 },
//!     ],
//! };
//!
//! let result = group("order", join([
//!     field("email", &order.email, &[&Required, &Email]),
//!     Slice::new("lines", &order.lines).items("", &[&line]),
//! ]));
//!
//! let errors = collect(result);
//! let paths: Vec<_> = errors.iter().map(|e| e.exact_path.as_str()).collect();
//! assert_eq!(paths, ["order.email", "order.lines.1.sku", "order.lines.1.qty"]);
//! assert_eq!(errors[1].path, "order.lines.*.sku");
//! assert_eq!(errors[1].violations.len(), 2);
//! ```

pub mod aggregate;
pub mod collection;
pub mod combinators;
pub mod error;
pub mod path;
pub mod rewrite;
pub mod rules;
pub mod scope;
pub mod validation;

pub use aggregate::{
    collect, collect_error, collect_failure, into_validation, is_validation_error, join,
};
pub use collection::{slice, Keyed, Lookup, Map, Slice};
pub use error::{Args, Code, Failure, FatalError, ValidationError, ValidationErrors, Violation};
pub use path::{last_path_segment, PathSegment, ScopePath};
pub use rewrite::{
    last_segment, override_exact_path, override_path, prefix_both_paths, prefix_exact_path,
    prefix_path,
};
pub use scope::{field, group};
pub use validation::{run, Findings, Rejection, Validator, Verdict};

/// What every scope builder returns: `Ok(())` or a [`Failure`].
pub type Outcome = Result<(), Failure>;
