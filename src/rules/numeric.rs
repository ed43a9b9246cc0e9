//! Numeric bounds.

use serde_json::Value;

use crate::error::{Code, Violation};
use crate::validation::{Validator, Verdict};

/// Requires the value to be at least the wrapped bound (inclusive).
///
/// Works for any ordered type whose bound can be reported as a JSON value,
/// which covers the integer and float primitives.
///
/// # Example
///
/// ```rust
/// use inquest::rules::NumberMin;
/// use inquest::{collect, field};
///
/// let errors = collect(field("age", &15_u8, &[&NumberMin(18_u8)]));
/// assert_eq!(errors[0].violations[0].code, "min.number");
/// assert_eq!(errors[0].violations[0].args.get("min"), Some(&serde_json::json!(18)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NumberMin<N>(pub N);

impl<N> Validator<N> for NumberMin<N>
where
    N: PartialOrd + Copy + Into<Value>,
{
    fn validate(&self, value: &N) -> Verdict {
        if *value < self.0 {
            return Err(Violation::new(Code::NumberMin).with_arg("min", self.0).into());
        }
        Ok(())
    }
}

/// Requires the value to be at most the wrapped bound (inclusive).
#[derive(Debug, Clone, Copy)]
pub struct NumberMax<N>(pub N);

impl<N> Validator<N> for NumberMax<N>
where
    N: PartialOrd + Copy + Into<Value>,
{
    fn validate(&self, value: &N) -> Verdict {
        if *value > self.0 {
            return Err(Violation::new(Code::NumberMax).with_arg("max", self.0).into());
        }
        Ok(())
    }
}
