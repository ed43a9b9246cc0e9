//! A single failed rule.

use std::fmt::{self, Display};

use serde_json::Value;

use super::{Args, Code};

/// One failed check: a stable [`Code`] plus optional named [`Args`].
///
/// Violations are produced by leaf validators and consumed by the scope
/// builders, which group them under a path.
///
/// # Example
///
/// ```rust
/// use inquest::{Code, Violation};
/// use serde_json::json;
///
/// let violation = Violation::new(Code::StringMin).with_arg("min", 5);
///
/// assert_eq!(violation.code, Code::StringMin);
/// assert_eq!(violation.args.get("min"), Some(&json!(5)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub code: Code,
    pub args: Args,
}

impl Violation {
    /// Creates a violation with no args.
    pub fn new(code: impl Into<Code>) -> Self {
        Self {
            code: code.into(),
            args: Args::new(),
        }
    }

    /// Adds an arg and returns self for chaining.
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.args.insert(key, value);
        self
    }

    /// Replaces the args and returns self for chaining.
    pub fn with_args(mut self, args: Args) -> Self {
        self.args = args;
        self
    }
}

impl Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "violation code: {}, args: {}", self.code, self.args)
    }
}

impl std::error::Error for Violation {}
