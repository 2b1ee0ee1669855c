//! Error types for dotpath.
//!
//! All errors in dotpath are strongly typed using thiserror.
//! Every failure aborts the current insert; containers that were
//! materialized along the path before the failure are left in place.

use std::time::Duration;

use thiserror::Error;

use crate::writer::Scenario;

/// Errors returned by [`Dot::insert`](crate::Dot::insert).
#[derive(Debug, Error)]
pub enum DotError {
    /// The path descends past a terminal value or names a field that does not exist.
    #[error("unknown path: {path}")]
    UnknownPath {
        path: String,
    },

    /// A sequence or array index token is not an integer.
    #[error("invalid value \"{raw}\" as {} {container} index", article(.container))]
    InvalidIndex {
        raw: String,
        container: &'static str,
    },

    /// An index parsed but lies outside the container's bounds.
    #[error("index {index} out of range in path {path}{}", of_type(.declared.as_deref()))]
    IndexOutOfRange {
        index: i64,
        path: String,
        declared: Option<String>,
    },

    /// A map key token failed to parse as the declared primitive key type.
    #[error("the map key has an invalid key-value \"{raw}\" in path \"{path}\" of type {declared}")]
    InvalidMapKey {
        raw: String,
        path: String,
        declared: &'static str,
    },

    /// The map key type is not primitive and no placeholder matched the token.
    #[error("unknown placeholder of type {declared} as map key in path \"{path}\"")]
    UnknownPlaceholder {
        declared: &'static str,
        path: String,
    },

    /// A placeholder matched the token but holds a value of another type.
    #[error("the map key type is {declared} you cannot use the placeholder of type {placeholder} in path \"{path}\"")]
    PlaceholderTypeMismatch {
        declared: &'static str,
        placeholder: &'static str,
        path: String,
    },

    /// The inserted value's type differs from the target slot's type.
    #[error("{}", .scenario.describe(.declared, .value, .path))]
    TypeMismatch {
        declared: &'static str,
        value: &'static str,
        path: String,
        scenario: Scenario,
    },

    /// A queue send did not complete within the configured timeout.
    #[error("queue in path {path} is full, send timed out after {}ms", .timeout.as_millis())]
    QueueTimeout {
        path: String,
        timeout: Duration,
    },

    /// The queue has no receiver left to accept the value.
    #[error("queue in path {path} is disconnected")]
    QueueDisconnected {
        path: String,
    },

    #[error("Internal error: {message}")]
    Internal {
        message: String,
    },
}

fn article(container: &str) -> &'static str {
    match container.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

fn of_type(declared: Option<&str>) -> String {
    declared.map(|ty| format!(" of type {ty}")).unwrap_or_default()
}

impl DotError {
    /// Creates an unknown-path error.
    #[must_use]
    pub fn unknown_path(path: impl Into<String>) -> Self {
        Self::UnknownPath { path: path.into() }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if the path could not be resolved.
    #[must_use]
    pub const fn is_unknown_path(&self) -> bool {
        matches!(self, Self::UnknownPath { .. })
    }

    /// Returns true if this is an index parse or bounds error.
    #[must_use]
    pub const fn is_index_error(&self) -> bool {
        matches!(self, Self::InvalidIndex { .. } | Self::IndexOutOfRange { .. })
    }

    /// Returns true if the map key could not be produced.
    #[must_use]
    pub const fn is_key_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidMapKey { .. }
                | Self::UnknownPlaceholder { .. }
                | Self::PlaceholderTypeMismatch { .. }
        )
    }

    /// Returns true if the final write was rejected for its type.
    #[must_use]
    pub const fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }

    /// Returns true if the queue handoff failed.
    #[must_use]
    pub const fn is_queue_error(&self) -> bool {
        matches!(self, Self::QueueTimeout { .. } | Self::QueueDisconnected { .. })
    }

    /// Returns true if this is an internal error.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal { .. })
    }
}

/// Result type alias for dotpath operations.
pub type DotResult<T> = Result<T, DotError>;
