//! The recursive path walker.
//!
//! The walker consumes path segments one at a time and dispatches on the
//! structural kind of the current value:
//! - maps, sequences and arrays take over the rest of the path;
//! - records resolve the segment as a field name and the walk continues in
//!   that field, unless the field is a queue, which takes over the rest;
//! - anything else cannot be descended into.
//!
//! Once the path is exhausted the pending value is written into the value
//! reached, provided the types match.
//!
//! An empty `Option` is filled with a default only when the path descends
//! through it into a container or record; a failed insert never leaves a
//! default behind in the final target or in a wrapped scalar.

use crate::dot::DotConfig;
use crate::error::{DotError, DotResult};
use crate::key::Placeholders;
use crate::path;
use crate::walk::{Node, Walk};
use crate::writer::{self, Pending, Scenario};

/// State of one insert call, handed to container handlers so they can recurse.
pub struct Walker<'p> {
    pending: Option<Pending>,
    placeholders: &'p Placeholders,
    config: &'p DotConfig,
}

impl<'p> Walker<'p> {
    pub(crate) fn new(pending: Pending, placeholders: &'p Placeholders, config: &'p DotConfig) -> Self {
        Self {
            pending: Some(pending),
            placeholders,
            config,
        }
    }

    /// Placeholders consulted for map key tokens.
    #[must_use]
    pub const fn placeholders(&self) -> &'p Placeholders {
        self.placeholders
    }

    /// Configuration of the handle that started this insert.
    #[must_use]
    pub const fn config(&self) -> &'p DotConfig {
        self.config
    }

    /// Walks `parts` from `current` and writes the pending value at the end.
    ///
    /// `previous` is the path already traversed, used to build error paths;
    /// `scenario` names the container that delegated this step.
    ///
    /// # Errors
    ///
    /// Any [`DotError`] raised while resolving the path or writing the value.
    pub fn insert(
        &mut self,
        mut current: &mut dyn Walk,
        previous: &str,
        parts: &[&str],
        scenario: Scenario,
    ) -> DotResult<()> {
        let mut current_path = path::join(previous, parts);

        for (index, segment) in parts.iter().enumerate() {
            current_path = path::join(previous, &parts[..=index]);
            let remaining = &parts[index..];

            let node = current.node().present();
            log::trace!("{} at {current_path:?}", node.kind());

            match node {
                Node::Map(map) => return map.insert_entry(self, &current_path, remaining),
                Node::Sequence(sequence) => return sequence.insert_element(self, &current_path, remaining),
                Node::Array(array) => return array.insert_element(self, &current_path, remaining),
                Node::Record(record) => {
                    let field = record
                        .field_mut(segment)
                        .ok_or_else(|| DotError::unknown_path(current_path.as_str()))?;

                    // A queue receives its value immediately.
                    if field.node().kind() == "queue" {
                        if let Node::Queue(queue) = field.node().present() {
                            return queue.send_value(self, &current_path, remaining);
                        }
                    }

                    current = field;
                }
                Node::Queue(_) | Node::Scalar | Node::Absent(_) => {
                    return Err(DotError::unknown_path(current_path));
                }
            }
        }

        let pending = self
            .pending
            .take()
            .ok_or_else(|| DotError::internal(format!("value already written before {current_path:?}")))?;
        writer::set(current, pending, &current_path, scenario)
    }
}
