//! Leaf rules.
//!
//! Each rule is a small struct implementing [`Validator`](crate::Validator)
//! for every value type it can inspect. A failing rule returns exactly one
//! [`Violation`](crate::Violation) whose code is one of the [`Code`] values
//! and whose args carry the rule's parameters.
//!
//! | Rule | Applies to | Code | Args |
//! |------|------------|------|------|
//! | [`Required`] | `Default + PartialEq` | `required` | |
//! | [`Equal`] | `PartialEq` | `equal` | `expected` |
//! | [`Not`] | `PartialEq` | `not` | `value` |
//! | [`OneOf`] | `PartialEq` | `oneof` | `accepted` |
//! | [`NumberMin`] / [`NumberMax`] | `PartialOrd` | `min.number` / `max.number` | `min` / `max` |
//! | [`MinLen`] / [`MaxLen`] | `AsRef<str>` | `min.string` / `max.string` | `min` / `max` |
//! | [`Email`] | `AsRef<str>` | `email` | |
//! | [`Pattern`] | `AsRef<str>` | `regex` | `pattern` |
//! | [`Lowercase`] / [`Uppercase`] | `AsRef<str>` | `lowercase` / `uppercase` | |
//! | [`Prefix`] / [`Suffix`] | `AsRef<str>` | `prefix` / `suffix` | `prefix` / `suffix` |
//! | [`Iban`] | `AsRef<str>` | `iban` | |
//!
//! [`Code`]: crate::Code

mod basic;
mod iban;
mod numeric;
mod string;

pub use basic::{Equal, Not, OneOf, Required};
pub use iban::Iban;
pub use numeric::{NumberMax, NumberMin};
pub use string::{Email, Lowercase, MaxLen, MinLen, Pattern, Prefix, Suffix, Uppercase};
