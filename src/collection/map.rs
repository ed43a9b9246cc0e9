//! Keyed-collection traversal.

use std::fmt::Display;

use serde_json::Value;

use crate::error::{Code, Failure, ValidationError, ValidationErrors, Violation};
use crate::path::ScopePath;
use crate::validation::{run, Findings, Validator};
use crate::{Args, Outcome};

use super::{finish, Keyed, Lookup};

/// Validates the keys or values of a keyed collection.
///
/// For key `k` failing under field `f` of map `name`, the entry has template
/// path `name.f`, exact path `name.k.f`, and `args["key"] = k`. The key keeps
/// its JSON type in the args (`2` for an integer key) and is rendered with
/// `Display` in the exact path. Iteration follows the underlying collection, so for `HashMap`
/// the order of entries across keys is unspecified.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use inquest::rules::Required;
/// use inquest::{collect, Map};
///
/// let data = HashMap::from([
///     ("first".to_string(), "ok".to_string()),
///     ("second".to_string(), String::new()),
/// ]);
///
/// let errors = collect(Map::new("data", &data).values("name", &[&Required]));
///
/// assert_eq!(errors.len(), 1);
/// assert_eq!(errors[0].path, "data.name");
/// assert_eq!(errors[0].exact_path, "data.second.name");
/// ```
pub struct Map<'a, M: ?Sized> {
    name: String,
    map: &'a M,
}

impl<'a, M> Map<'a, M>
where
    M: Keyed + ?Sized,
    M::Key: Display + Clone + Into<Value>,
{
    pub fn new(name: impl Into<String>, map: &'a M) -> Self {
        Self {
            name: name.into(),
            map,
        }
    }

    /// Runs `validators` against the value stored under `key`.
    ///
    /// A missing key yields one `unknown.field` violation and the validators
    /// are not called.
    pub fn key<Q>(&self, field: &str, key: &Q, validators: &[&dyn Validator<M::Value>]) -> Outcome
    where
        M: Lookup<Q>,
        Q: Display + ToOwned + ?Sized,
        Q::Owned: Into<Value>,
    {
        let scope = self.scope(key, field);
        let args = Args::new().with("key", key.to_owned());

        let Some(value) = self.map.lookup(key) else {
            return Err(Failure::Single(
                ValidationError::new(scope.template(), vec![Violation::new(Code::UnknownField)])
                    .with_exact_path(scope.exact())
                    .with_args(args),
            ));
        };

        match run(value, validators) {
            Ok(None) => Ok(()),
            Ok(Some(findings)) => {
                finish(findings.into_entries(&scope.template(), &scope.exact(), &args))
            }
            Err(fatal) => Err(self.fatal(key, fatal)),
        }
    }

    /// Runs `validators` against every key.
    pub fn keys(&self, field: &str, validators: &[&dyn Validator<M::Key>]) -> Outcome {
        self.traverse(field, |key, _| run(key, validators))
    }

    /// Runs `validators` against every value.
    pub fn values(&self, field: &str, validators: &[&dyn Validator<M::Value>]) -> Outcome {
        self.traverse(field, |_, value| run(value, validators))
    }

    fn traverse<F>(&self, field: &str, mut check: F) -> Outcome
    where
        F: FnMut(&M::Key, &M::Value) -> Result<Option<Findings>, crate::FatalError>,
    {
        let mut errors = ValidationErrors::new();

        for (key, value) in self.map.entries() {
            match check(key, value) {
                Ok(None) => {}
                Ok(Some(findings)) => {
                    let scope = self.scope(key, field);
                    errors.merge_all(findings.into_entries(
                        &scope.template(),
                        &scope.exact(),
                        &Args::new().with("key", key.clone()),
                    ));
                }
                Err(fatal) => return Err(self.fatal(key, fatal)),
            }
        }

        finish(errors)
    }

    // Keys are only part of the exact path, so the template stays `name.field`.
    fn scope(&self, key: &(impl Display + ?Sized), field: &str) -> ScopePath {
        ScopePath::from_field(self.name.as_str())
            .push_key(key)
            .push_field(field)
    }

    fn fatal(&self, key: &(impl Display + ?Sized), fatal: crate::FatalError) -> Failure {
        tracing::debug!(
            map = %self.name,
            key = %key,
            error = %fatal,
            "fatal error while validating map entry"
        );
        Failure::Fatal(fatal)
    }
}
