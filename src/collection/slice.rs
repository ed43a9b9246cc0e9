//! Slice traversal.

use crate::error::{Failure, FatalError, ValidationErrors};
use crate::path::ScopePath;
use crate::validation::{run_each, Validator};
use crate::{Args, Outcome};

use super::finish;

/// Validates every element of a slice under a shared template path.
///
/// For element `i` failing under field `f` of slice `name`, the entry has
/// template path `name.*.f`, exact path `name.i.f`, and `args["index"] = i`.
///
/// # Example
///
/// ```rust
/// use inquest::{collect, Slice, Verdict, Violation};
///
/// let totals: Vec<i64> = vec![3, 9, 1];
/// let at_least_five = |total: &i64| -> Verdict {
///     if *total < 5 { Err(Violation::new("total.low").into()) } else { Ok(()) }
/// };
///
/// let errors = collect(Slice::new("data", &totals).items("total", &[&at_least_five]));
///
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors[0].path, "data.*.total");
/// assert_eq!(errors[0].exact_path, "data.0.total");
/// assert_eq!(errors[1].exact_path, "data.2.total");
/// ```
pub struct Slice<'a, T> {
    name: String,
    items: &'a [T],
}

/// Creates a [`Slice`] traversal.
pub fn slice<'a, T>(name: impl Into<String>, items: &'a [T]) -> Slice<'a, T> {
    Slice::new(name, items)
}

impl<'a, T> Slice<'a, T> {
    pub fn new(name: impl Into<String>, items: &'a [T]) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }

    /// Runs `validators` against every element.
    ///
    /// Entries returned by nested validations keep their own segments after
    /// the element's scope (`name.*.field.inner` / `name.i.field.inner`).
    /// A fatal error from any element is returned unchanged and the remaining
    /// elements are not visited.
    pub fn items(&self, field: &str, validators: &[&dyn Validator<T>]) -> Outcome {
        let mut errors = ValidationErrors::new();

        for (index, item) in self.items.iter().enumerate() {
            match run_each(item, validators) {
                Ok(None) => {}
                Ok(Some(findings)) => {
                    let scope = self.scope(index, field);
                    errors.merge_all(findings.into_entries(
                        &scope.template(),
                        &scope.exact(),
                        &Args::new().with("index", index),
                    ));
                }
                Err(fatal) => return Err(self.fatal(index, fatal)),
            }
        }

        finish(errors)
    }

    /// Like [`Slice::items`], but validates elements on the rayon pool.
    ///
    /// Results are merged by the calling thread in index order, so the
    /// report is identical to the sequential one. If several elements fail
    /// fatally, the error of the lowest index is returned.
    #[cfg(feature = "parallel")]
    pub fn par_items(&self, field: &str, validators: &[&(dyn Validator<T> + Sync)]) -> Outcome
    where
        T: Sync,
    {
        use rayon::prelude::*;

        let results: Vec<_> = self
            .items
            .par_iter()
            .map(|item| run_each(item, validators))
            .collect();

        let mut errors = ValidationErrors::new();
        for (index, result) in results.into_iter().enumerate() {
            match result {
                Ok(None) => {}
                Ok(Some(findings)) => {
                    let scope = self.scope(index, field);
                    errors.merge_all(findings.into_entries(
                        &scope.template(),
                        &scope.exact(),
                        &Args::new().with("index", index),
                    ));
                }
                Err(fatal) => return Err(self.fatal(index, fatal)),
            }
        }

        finish(errors)
    }

    fn fatal(&self, index: usize, fatal: FatalError) -> Failure {
        tracing::debug!(
            slice = %self.name,
            index,
            error = %fatal,
            "fatal error while validating slice item"
        );
        Failure::Fatal(fatal)
    }

    fn scope(&self, index: usize, field: &str) -> ScopePath {
        ScopePath::from_field(self.name.as_str())
            .push_index(index)
            .push_field(field)
    }
}
