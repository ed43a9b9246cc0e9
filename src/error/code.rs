//! Machine-readable failure codes.
//!
//! Every [`Violation`](crate::Violation) carries a [`Code`]. The well-known codes
//! emitted by this crate's own rules are enum variants; validators written by
//! callers use [`Code::Custom`].

use std::borrow::Cow;
use std::fmt::{self, Display};

/// A stable, machine-readable identifier for a failed rule.
///
/// Codes are never localized text. Use [`Code::as_str`] to get the wire form.
///
/// # Example
///
/// ```rust
/// use inquest::Code;
///
/// assert_eq!(Code::StringMin.as_str(), "min.string");
/// assert_eq!(Code::from("min.string"), Code::StringMin);
/// assert_eq!(Code::from("order.total").as_str(), "order.total");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Code {
    /// A collection traversal referenced a key or index that does not exist.
    UnknownField,
    NotFound,
    Required,
    Not,
    Equal,
    OneOf,
    NumberMin,
    NumberMax,
    StringMin,
    StringMax,
    Email,
    Regex,
    Lowercase,
    Uppercase,
    Prefix,
    Suffix,
    Iban,
    /// A caller-defined code.
    Custom(Cow<'static, str>),
}

impl Code {
    /// Returns the wire form of this code.
    pub fn as_str(&self) -> &str {
        match self {
            Code::UnknownField => "unknown.field",
            Code::NotFound => "not.found",
            Code::Required => "required",
            Code::Not => "not",
            Code::Equal => "equal",
            Code::OneOf => "oneof",
            Code::NumberMin => "min.number",
            Code::NumberMax => "max.number",
            Code::StringMin => "min.string",
            Code::StringMax => "max.string",
            Code::Email => "email",
            Code::Regex => "regex",
            Code::Lowercase => "lowercase",
            Code::Uppercase => "uppercase",
            Code::Prefix => "prefix",
            Code::Suffix => "suffix",
            Code::Iban => "iban",
            Code::Custom(code) => code.as_ref(),
        }
    }

    /// Returns true if this is a caller-defined code.
    pub fn is_custom(&self) -> bool {
        matches!(self, Code::Custom(_))
    }

    fn known(code: &str) -> Option<Self> {
        let known = match code {
            "unknown.field" => Code::UnknownField,
            "not.found" => Code::NotFound,
            "required" => Code::Required,
            "not" => Code::Not,
            "equal" => Code::Equal,
            "oneof" => Code::OneOf,
            "min.number" => Code::NumberMin,
            "max.number" => Code::NumberMax,
            "min.string" => Code::StringMin,
            "max.string" => Code::StringMax,
            "email" => Code::Email,
            "regex" => Code::Regex,
            "lowercase" => Code::Lowercase,
            "uppercase" => Code::Uppercase,
            "prefix" => Code::Prefix,
            "suffix" => Code::Suffix,
            "iban" => Code::Iban,
            _ => return None,
        };
        Some(known)
    }
}

impl From<&'static str> for Code {
    fn from(code: &'static str) -> Self {
        Code::known(code).unwrap_or(Code::Custom(Cow::Borrowed(code)))
    }
}

impl From<String> for Code {
    fn from(code: String) -> Self {
        Code::known(&code).unwrap_or(Code::Custom(Cow::Owned(code)))
    }
}

impl PartialEq<str> for Code {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Code {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
