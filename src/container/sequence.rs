//! Growable-sequence handler.

use crate::error::{DotError, DotResult};
use crate::walk::Walk;
use crate::walker::Walker;
use crate::writer::Scenario;

use super::{parse_index, split_head};

/// Index token that appends a new element.
pub const APPEND: i64 = -1;

/// A sequence that can grow at the end.
pub trait SequenceSlot {
    /// Walks into the element at `parts[0]`, or appends one for [`APPEND`].
    ///
    /// Existing elements are updated in place. An appended element starts
    /// from `Default` and is pushed only if the nested walk succeeds.
    ///
    /// # Errors
    ///
    /// - [`DotError::InvalidIndex`] if the index is not an integer
    /// - [`DotError::IndexOutOfRange`] if it is past the end or negative other than `-1`
    fn insert_element(&mut self, walker: &mut Walker<'_>, path: &str, parts: &[&str]) -> DotResult<()>;
}

impl<T: Walk + Default> SequenceSlot for Vec<T> {
    fn insert_element(&mut self, walker: &mut Walker<'_>, path: &str, parts: &[&str]) -> DotResult<()> {
        let (raw, rest) = split_head(parts, path)?;
        let index = parse_index(raw, "sequence")?;

        if index == APPEND {
            let mut value = T::default();
            walker.insert(&mut value, path, rest, Scenario::Sequence)?;
            self.push(value);
            return Ok(());
        }

        let position = usize::try_from(index)
            .ok()
            .filter(|&i| i < self.len())
            .ok_or_else(|| DotError::IndexOutOfRange {
                index,
                path: path.to_string(),
                declared: None,
            })?;
        walker.insert(&mut self[position], path, rest, Scenario::Sequence)
    }
}
