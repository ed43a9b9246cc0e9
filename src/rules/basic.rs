//! Presence and equality rules.

use serde_json::Value;

use crate::error::{Code, Violation};
use crate::validation::{Validator, Verdict};

/// Rejects the default value of a type.
///
/// An empty string, zero, `false` and `None` all count as missing.
///
/// ```rust
/// use inquest::rules::Required;
/// use inquest::Validator;
///
/// assert!(Required.validate(&"").is_err());
/// assert!(Required.validate(&Some(0)).is_ok());
/// assert!(Required.validate(&None::<i32>).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Required;

impl<T> Validator<T> for Required
where
    T: Default + PartialEq,
{
    fn validate(&self, value: &T) -> Verdict {
        if *value == T::default() {
            return Err(Violation::new(Code::Required).into());
        }
        Ok(())
    }
}

/// Accepts only values equal to the wrapped one.
#[derive(Debug, Clone)]
pub struct Equal<T>(pub T);

impl<T> Validator<T> for Equal<T>
where
    T: PartialEq + Clone + Into<Value>,
{
    fn validate(&self, value: &T) -> Verdict {
        if *value != self.0 {
            return Err(Violation::new(Code::Equal)
                .with_arg("expected", self.0.clone())
                .into());
        }
        Ok(())
    }
}

/// Rejects values equal to the wrapped one.
#[derive(Debug, Clone)]
pub struct Not<T>(pub T);

impl<T> Validator<T> for Not<T>
where
    T: PartialEq + Clone + Into<Value>,
{
    fn validate(&self, value: &T) -> Verdict {
        if *value == self.0 {
            return Err(Violation::new(Code::Not)
                .with_arg("value", self.0.clone())
                .into());
        }
        Ok(())
    }
}

/// Accepts only values contained in the list.
///
/// The violation lists every accepted value under `accepted`.
///
/// ```rust
/// use inquest::rules::OneOf;
/// use inquest::{collect, field};
///
/// let errors = collect(field("plan", &"gold", &[&OneOf(vec!["free", "pro"])]));
/// assert_eq!(errors[0].violations[0].args.get("accepted").unwrap(), &serde_json::json!(["free", "pro"]));
/// ```
#[derive(Debug, Clone)]
pub struct OneOf<T>(pub Vec<T>);

impl<T> Validator<T> for OneOf<T>
where
    T: PartialEq + Clone + Into<Value>,
{
    fn validate(&self, value: &T) -> Verdict {
        if self.0.contains(value) {
            return Ok(());
        }
        let accepted: Vec<Value> = self.0.iter().cloned().map(Into::into).collect();
        Err(Violation::new(Code::OneOf)
            .with_arg("accepted", accepted)
            .into())
    }
}
