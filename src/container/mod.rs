//! Container handlers.
//!
//! Each handler takes the remaining path segments, whose first segment
//! addresses an element of the container, and recurses the [`Walker`]
//! into that element.

mod array;
mod map;
mod queue;
mod sequence;

pub use array::ArraySlot;
pub use map::MapSlot;
pub use queue::{Queue, QueueSlot, QUEUE_CAPACITY};
pub use sequence::{SequenceSlot, APPEND};

use crate::error::{DotError, DotResult};

#[cfg(doc)]
use crate::walker::Walker;

/// Splits off the segment that addresses the element.
fn split_head<'s, 'p>(parts: &'s [&'p str], path: &str) -> DotResult<(&'p str, &'s [&'p str])> {
    parts
        .split_first()
        .map(|(head, rest)| (*head, rest))
        .ok_or_else(|| DotError::unknown_path(path))
}

/// Parses an index segment.
fn parse_index(raw: &str, container: &'static str) -> DotResult<i64> {
    raw.parse::<i64>().map_err(|_| DotError::InvalidIndex {
        raw: raw.to_string(),
        container,
    })
}
