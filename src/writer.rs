//! Final typed write at the end of a path.

use std::any::Any;
use std::fmt;

use crate::error::{DotError, DotResult};
use crate::walk::Walk;

/// The container kind that delegated the current recursive step.
///
/// Only selects the wording of a [`DotError::TypeMismatch`]; control flow
/// is driven by the structural kind of each value, never by the scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    /// Element of a fixed-size array.
    Array,
    /// Value handed to a single-slot queue.
    Queue,
    /// Value of a dynamic mapping.
    Map,
    /// Element of a growable sequence.
    Sequence,
    /// The root or a plain record field.
    Field,
}

impl Scenario {
    /// Renders the mismatch message for this scenario.
    #[must_use]
    pub fn describe(self, declared: &str, value: &str, path: &str) -> String {
        match self {
            Self::Array => {
                format!("a {declared} type array cannot contain a {value} type value in path {path}")
            }
            Self::Queue => {
                format!("queue of type {declared} cannot contain a value of type {value} in path {path}")
            }
            Self::Sequence => format!(
                "a sequence of type {declared} cannot contain a value of type {value} in path {path}"
            ),
            Self::Map => format!(
                "the map value is of type {declared} and cannot contain a value of type {value} in path {path}"
            ),
            Self::Field => {
                format!("type {declared} cannot contain a value of type {value} in path {path}")
            }
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Array => "array",
            Self::Queue => "queue",
            Self::Map => "map",
            Self::Sequence => "sequence",
            Self::Field => "field",
        };
        write!(f, "{name}")
    }
}

/// The value waiting to be written by one insert call.
pub(crate) struct Pending {
    value: Box<dyn Any>,
    type_name: &'static str,
}

impl Pending {
    pub(crate) fn new<T: Any>(value: T) -> Self {
        Self {
            value: Box::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    pub(crate) const fn type_name(&self) -> &'static str {
        self.type_name
    }
}

/// Writes `pending` into `slot` if the types are identical.
pub(crate) fn set(slot: &mut dyn Walk, pending: Pending, path: &str, scenario: Scenario) -> DotResult<()> {
    let Pending { value, type_name } = pending;
    let declared = (*slot).type_name();
    slot.put(value).map_err(|_| DotError::TypeMismatch {
        declared,
        value: type_name,
        path: path.to_string(),
        scenario,
    })?;
    log::trace!("wrote {type_name} at {path:?} as {scenario} value");
    Ok(())
}
