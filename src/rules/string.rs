//! String rules.
//!
//! Every rule here applies to any `T: AsRef<str>`, so the same rule value
//! checks `String`, `&str`, `Cow<str>` and friends. Lengths are counted in
//! Unicode scalar values, not bytes.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{Code, Violation};
use crate::validation::{Validator, Verdict};

static EMAIL_REGEX: OnceLock<Option<Regex>> = OnceLock::new();

fn email_regex() -> Option<&'static Regex> {
    EMAIL_REGEX
        .get_or_init(|| {
            Regex::new(
                r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
            )
            .ok()
        })
        .as_ref()
}

/// Requires at least `n` characters.
///
/// # Example
///
/// ```rust
/// use inquest::rules::MinLen;
/// use inquest::Validator;
///
/// assert!(MinLen(5).validate(&"hello").is_ok());
/// assert!(MinLen(5).validate(&"hi").is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MinLen(pub usize);

impl<T> Validator<T> for MinLen
where
    T: AsRef<str> + ?Sized,
{
    fn validate(&self, value: &T) -> Verdict {
        if value.as_ref().chars().count() < self.0 {
            return Err(Violation::new(Code::StringMin).with_arg("min", self.0).into());
        }
        Ok(())
    }
}

/// Allows at most `n` characters.
#[derive(Debug, Clone, Copy)]
pub struct MaxLen(pub usize);

impl<T> Validator<T> for MaxLen
where
    T: AsRef<str> + ?Sized,
{
    fn validate(&self, value: &T) -> Verdict {
        if value.as_ref().chars().count() > self.0 {
            return Err(Violation::new(Code::StringMax).with_arg("max", self.0).into());
        }
        Ok(())
    }
}

/// Requires a syntactically valid email address.
#[derive(Debug, Clone, Copy, Default)]
pub struct Email;

impl<T> Validator<T> for Email
where
    T: AsRef<str> + ?Sized,
{
    fn validate(&self, value: &T) -> Verdict {
        if !email_regex().is_some_and(|re| re.is_match(value.as_ref())) {
            return Err(Violation::new(Code::Email).into());
        }
        Ok(())
    }
}

/// Requires a match of the wrapped regex somewhere in the value.
///
/// Anchor the pattern to match the whole value.
///
/// ```rust
/// use inquest::rules::Pattern;
/// use inquest::Validator;
///
/// let digits = Pattern::new(r"^\d+$").unwrap();
/// assert!(digits.validate(&"12345").is_ok());
/// assert!(digits.validate(&"12a45").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Pattern(pub Regex);

impl Pattern {
    /// Compiles `pattern`.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Regex::new(pattern).map(Self)
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Self(regex)
    }
}

impl<T> Validator<T> for Pattern
where
    T: AsRef<str> + ?Sized,
{
    fn validate(&self, value: &T) -> Verdict {
        if !self.0.is_match(value.as_ref()) {
            return Err(Violation::new(Code::Regex)
                .with_arg("pattern", self.0.as_str())
                .into());
        }
        Ok(())
    }
}

/// Rejects values containing uppercase characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lowercase;

impl<T> Validator<T> for Lowercase
where
    T: AsRef<str> + ?Sized,
{
    fn validate(&self, value: &T) -> Verdict {
        if value.as_ref().chars().any(char::is_uppercase) {
            return Err(Violation::new(Code::Lowercase).into());
        }
        Ok(())
    }
}

/// Rejects values containing lowercase characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uppercase;

impl<T> Validator<T> for Uppercase
where
    T: AsRef<str> + ?Sized,
{
    fn validate(&self, value: &T) -> Verdict {
        if value.as_ref().chars().any(char::is_lowercase) {
            return Err(Violation::new(Code::Uppercase).into());
        }
        Ok(())
    }
}

/// Requires the value to start with the wrapped string.
#[derive(Debug, Clone)]
pub struct Prefix<S>(pub S);

impl<S, T> Validator<T> for Prefix<S>
where
    S: AsRef<str>,
    T: AsRef<str> + ?Sized,
{
    fn validate(&self, value: &T) -> Verdict {
        let prefix = self.0.as_ref();
        if !value.as_ref().starts_with(prefix) {
            return Err(Violation::new(Code::Prefix).with_arg("prefix", prefix).into());
        }
        Ok(())
    }
}

/// Requires the value to end with the wrapped string.
#[derive(Debug, Clone)]
pub struct Suffix<S>(pub S);

impl<S, T> Validator<T> for Suffix<S>
where
    S: AsRef<str>,
    T: AsRef<str> + ?Sized,
{
    fn validate(&self, value: &T) -> Verdict {
        let suffix = self.0.as_ref();
        if !value.as_ref().ends_with(suffix) {
            return Err(Violation::new(Code::Suffix).with_arg("suffix", suffix).into());
        }
        Ok(())
    }
}
