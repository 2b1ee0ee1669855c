//! The root handle.

use std::any::Any;
use std::time::Duration;

use crate::error::DotResult;
use crate::key::Placeholders;
use crate::path;
use crate::walk::Walk;
use crate::walker::Walker;
use crate::writer::{Pending, Scenario};

/// Handle configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DotConfig {
    /// How long a queue send may wait for the slot to free up.
    ///
    /// `None` blocks until the slot is drained, however long that takes.
    pub queue_send_timeout: Option<Duration>,
}

impl DotConfig {
    /// Sets the queue send timeout.
    #[must_use]
    pub fn with_queue_send_timeout(mut self, timeout: Duration) -> Self {
        self.queue_send_timeout = Some(timeout);
        self
    }
}

/// Inserts values into a mutably borrowed structure by dot-delimited path.
///
/// The handle owns its placeholder registry. It is not meant to be shared
/// between threads; callers that need concurrent inserts must serialize
/// access themselves.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use dotpath::{record, Dot};
///
/// #[derive(Debug, Default)]
/// struct Data {
///     c: HashMap<String, HashMap<String, i32>>,
///     g: [i32; 3],
/// }
///
/// record!(Data { c, g });
///
/// let mut data = Data::default();
/// let mut dot = Dot::new(&mut data);
/// dot.insert("c.a.b", 55).unwrap();
/// dot.insert("g.1", 5).unwrap();
///
/// assert_eq!(data.c["a"]["b"], 55);
/// assert_eq!(data.g, [0, 5, 0]);
/// ```
pub struct Dot<'a, R: Walk> {
    root: &'a mut R,
    placeholders: Placeholders,
    config: DotConfig,
}

impl<'a, R: Walk> Dot<'a, R> {
    /// Creates a handle with the default configuration.
    #[must_use]
    pub fn new(root: &'a mut R) -> Self {
        Self::with_config(root, DotConfig::default())
    }

    /// Creates a handle with `config`.
    #[must_use]
    pub fn with_config(root: &'a mut R, config: DotConfig) -> Self {
        Self {
            root,
            placeholders: Placeholders::new(),
            config,
        }
    }

    /// Writes `value` at `path`.
    ///
    /// Segments are field names, sequence or array indices (`-1` appends to
    /// a sequence) or map key tokens. The empty path replaces the root.
    ///
    /// # Errors
    ///
    /// Any [`DotError`](crate::DotError). Containers created along the path
    /// before the failure stay in place.
    pub fn insert<T: Any>(&mut self, path: &str, value: T) -> DotResult<()> {
        let parts = path::split(path);
        let pending = Pending::new(value);
        log::trace!("insert {} at {path:?}", pending.type_name());

        let mut walker = Walker::new(pending, &self.placeholders, &self.config);
        walker.insert(&mut *self.root, "", &parts, Scenario::Field)
    }

    /// Registers `value` as a substitute for the map key token `name`.
    ///
    /// e.g. after `replace("mapKey", SpecificConstant)`, inserting at
    /// `"data.mapKey"` is equivalent to `data[SpecificConstant] = value`.
    pub fn replace<T: Any>(&mut self, name: impl Into<String>, value: T) {
        self.placeholders.insert(name, value);
    }

    /// The registered placeholders.
    #[must_use]
    pub const fn placeholders(&self) -> &Placeholders {
        &self.placeholders
    }

    /// The handle configuration.
    #[must_use]
    pub const fn config(&self) -> &DotConfig {
        &self.config
    }

    /// Borrows the root.
    #[must_use]
    pub fn get(&self) -> &R {
        &*self.root
    }

    /// Mutably borrows the root.
    pub fn get_mut(&mut self) -> &mut R {
        &mut *self.root
    }

    /// Releases the handle, returning the root borrow.
    #[must_use]
    pub fn into_inner(self) -> &'a mut R {
        self.root
    }
}
