//! Fixed-sequence handler.

use crate::error::{DotError, DotResult};
use crate::walk::Walk;
use crate::walker::Walker;
use crate::writer::Scenario;

use super::{parse_index, split_head};

/// A fixed-size sequence.
pub trait ArraySlot {
    /// Walks `parts[1..]` into a fresh element and stores it at `parts[0]`.
    ///
    /// # Errors
    ///
    /// - [`DotError::InvalidIndex`] if the index is not an integer
    /// - [`DotError::IndexOutOfRange`] unless `0 <= index < N`
    fn insert_element(&mut self, walker: &mut Walker<'_>, path: &str, parts: &[&str]) -> DotResult<()>;
}

impl<T: Walk + Default, const N: usize> ArraySlot for [T; N] {
    fn insert_element(&mut self, walker: &mut Walker<'_>, path: &str, parts: &[&str]) -> DotResult<()> {
        let (raw, rest) = split_head(parts, path)?;
        let index = parse_index(raw, "array")?;

        let position = usize::try_from(index)
            .ok()
            .filter(|&i| i < N)
            .ok_or_else(|| DotError::IndexOutOfRange {
                index,
                path: path.to_string(),
                declared: Some(std::any::type_name::<[T; N]>().to_string()),
            })?;

        let mut value = T::default();
        walker.insert(&mut value, path, rest, Scenario::Array)?;
        self[position] = value;
        Ok(())
    }
}
