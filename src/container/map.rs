//! Dynamic-mapping handler.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::error::DotResult;
use crate::key::MapKey;
use crate::walk::Walk;
use crate::walker::Walker;
use crate::writer::Scenario;

use super::split_head;

/// A key/value container addressed by key tokens.
///
/// The value for the key is always rebuilt from `Default` and replaces any
/// existing entry, so an insert overwrites the whole value under that key.
pub trait MapSlot {
    /// Resolves `parts[0]` to a key, walks `parts[1..]` into a fresh value
    /// and stores it under that key.
    ///
    /// # Errors
    ///
    /// Key resolution errors, or any error from the nested walk.
    fn insert_entry(&mut self, walker: &mut Walker<'_>, path: &str, parts: &[&str]) -> DotResult<()>;
}

impl<K, V, S> MapSlot for HashMap<K, V, S>
where
    K: MapKey + Eq + Hash,
    V: Walk + Default,
    S: BuildHasher,
{
    fn insert_entry(&mut self, walker: &mut Walker<'_>, path: &str, parts: &[&str]) -> DotResult<()> {
        let (raw, rest) = split_head(parts, path)?;
        let key: K = walker.placeholders().resolve(raw, path)?;

        let mut value = V::default();
        walker.insert(&mut value, path, rest, Scenario::Map)?;
        self.insert(key, value);
        Ok(())
    }
}

impl<K, V> MapSlot for BTreeMap<K, V>
where
    K: MapKey + Ord,
    V: Walk + Default,
{
    fn insert_entry(&mut self, walker: &mut Walker<'_>, path: &str, parts: &[&str]) -> DotResult<()> {
        let (raw, rest) = split_head(parts, path)?;
        let key: K = walker.placeholders().resolve(raw, path)?;

        let mut value = V::default();
        walker.insert(&mut value, path, rest, Scenario::Map)?;
        self.insert(key, value);
        Ok(())
    }
}
