//! Traversal of sequences and keyed collections.
//!
//! [`Slice`] validates every element of a slice and [`Map`] validates the
//! keys or values of a keyed collection. Each failing position becomes an
//! entry whose template path is shared by all positions and whose exact path
//! names the concrete index or key. Per-position results are merged by exact
//! path; a fatal error from any position aborts the traversal.

mod keyed;
mod map;
mod slice;

pub use keyed::{Keyed, Lookup};
pub use map::Map;
pub use slice::{slice, Slice};

use crate::error::{Failure, ValidationErrors};
use crate::Outcome;

fn finish(errors: ValidationErrors) -> Outcome {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(Failure::Many(errors))
    }
}
