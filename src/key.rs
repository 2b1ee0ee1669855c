//! Map key codec and placeholder registry.
//!
//! A key token from the path is resolved in two steps:
//! 1. an exact-name lookup in the [`Placeholders`] registry, whose value must
//!    have exactly the declared key type;
//! 2. otherwise a primitive parse via [`MapKey::parse_key`].
//!
//! Key types that cannot be written as text (enums, arrays, structs) only
//! work through placeholders.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

use num_complex::Complex;
use ordered_float::OrderedFloat;

use crate::error::{DotError, DotResult};

/// Outcome of parsing a key token as a primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyParse<K> {
    /// The token is a valid literal for the key type.
    Parsed(K),
    /// The key type is primitive but the token is not a valid literal.
    Malformed,
    /// The key type has no text form.
    Unsupported,
}

impl<K> KeyParse<K> {
    fn from_result<E>(result: Result<K, E>) -> Self {
        result.map_or(Self::Malformed, Self::Parsed)
    }
}

/// A type usable as a map key in a path.
///
/// The default `parse_key` reports [`KeyParse::Unsupported`], so a key type
/// that should only be reachable through placeholders needs an empty impl:
///
/// ```
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Key { First, Second }
///
/// impl dotpath::MapKey for Key {}
/// ```
pub trait MapKey: Any + Clone {
    /// Parses a raw path segment as a key.
    fn parse_key(raw: &str) -> KeyParse<Self> {
        let _ = raw;
        KeyParse::Unsupported
    }
}

macro_rules! signed_key {
    ($($ty:ty),*) => {
        $(impl MapKey for $ty {
            fn parse_key(raw: &str) -> KeyParse<Self> {
                KeyParse::from_result(raw.parse::<i128>().map_err(drop).and_then(|v| Self::try_from(v).map_err(drop)))
            }
        })*
    };
}

macro_rules! unsigned_key {
    ($($ty:ty),*) => {
        $(impl MapKey for $ty {
            fn parse_key(raw: &str) -> KeyParse<Self> {
                KeyParse::from_result(raw.parse::<u128>().map_err(drop).and_then(|v| Self::try_from(v).map_err(drop)))
            }
        })*
    };
}

signed_key!(i8, i16, i32, i64, i128, isize);
unsigned_key!(u8, u16, u32, u64, u128, usize);

// `.` separates path segments, so float tokens spell the decimal point as `,`.
fn parse_float(raw: &str) -> Option<f64> {
    raw.replace(',', ".").parse::<f64>().ok()
}

fn parse_complex(raw: &str) -> Option<Complex<f64>> {
    let inner = raw
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(raw);
    inner.replace(',', ".").parse::<Complex<f64>>().ok()
}

impl MapKey for OrderedFloat<f64> {
    fn parse_key(raw: &str) -> KeyParse<Self> {
        parse_float(raw).map_or(KeyParse::Malformed, |v| KeyParse::Parsed(OrderedFloat(v)))
    }
}

impl MapKey for OrderedFloat<f32> {
    #[allow(clippy::cast_possible_truncation)]
    fn parse_key(raw: &str) -> KeyParse<Self> {
        parse_float(raw).map_or(KeyParse::Malformed, |v| KeyParse::Parsed(OrderedFloat(v as f32)))
    }
}

impl MapKey for Complex<OrderedFloat<f64>> {
    fn parse_key(raw: &str) -> KeyParse<Self> {
        parse_complex(raw).map_or(KeyParse::Malformed, |c| {
            KeyParse::Parsed(Complex::new(OrderedFloat(c.re), OrderedFloat(c.im)))
        })
    }
}

impl MapKey for Complex<OrderedFloat<f32>> {
    #[allow(clippy::cast_possible_truncation)]
    fn parse_key(raw: &str) -> KeyParse<Self> {
        parse_complex(raw).map_or(KeyParse::Malformed, |c| {
            KeyParse::Parsed(Complex::new(OrderedFloat(c.re as f32), OrderedFloat(c.im as f32)))
        })
    }
}

impl MapKey for bool {
    fn parse_key(raw: &str) -> KeyParse<Self> {
        match raw {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => KeyParse::Parsed(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => KeyParse::Parsed(false),
            _ => KeyParse::Malformed,
        }
    }
}

impl MapKey for String {
    fn parse_key(raw: &str) -> KeyParse<Self> {
        KeyParse::Parsed(raw.to_string())
    }
}

impl MapKey for char {
    fn parse_key(raw: &str) -> KeyParse<Self> {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => KeyParse::Parsed(c),
            _ => KeyParse::Malformed,
        }
    }
}

impl<K: MapKey, const N: usize> MapKey for [K; N] {}
impl<A: MapKey, B: MapKey> MapKey for (A, B) {}
impl<A: MapKey, B: MapKey, C: MapKey> MapKey for (A, B, C) {}

struct Placeholder {
    value: Box<dyn Any>,
    type_name: &'static str,
}

/// Named, pre-typed substitutes for map key tokens.
///
/// Owned by one [`Dot`](crate::Dot) handle. The last registration for a
/// name wins; there is no removal.
#[derive(Default)]
pub struct Placeholders {
    entries: HashMap<String, Placeholder>,
}

impl Placeholders {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `value` under `name`, replacing any previous entry.
    pub fn insert<T: Any>(&mut self, name: impl Into<String>, value: T) {
        let name = name.into();
        let type_name = std::any::type_name::<T>();
        log::debug!("placeholder {name:?} registered as {type_name}");
        self.entries.insert(
            name,
            Placeholder {
                value: Box::new(value),
                type_name,
            },
        );
    }

    /// Returns true if a placeholder called `name` exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns the type name of the placeholder called `name`.
    #[must_use]
    pub fn type_name_of(&self, name: &str) -> Option<&'static str> {
        self.entries.get(name).map(|p| p.type_name)
    }

    /// Number of registered placeholders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves a key token to a key of type `K`.
    ///
    /// # Errors
    ///
    /// - [`DotError::PlaceholderTypeMismatch`] if a placeholder named `raw` holds another type
    /// - [`DotError::InvalidMapKey`] if `raw` is not a valid literal for a primitive `K`
    /// - [`DotError::UnknownPlaceholder`] if `K` has no text form and no placeholder matched
    pub fn resolve<K: MapKey>(&self, raw: &str, path: &str) -> DotResult<K> {
        let declared = std::any::type_name::<K>();

        if let Some(placeholder) = self.entries.get(raw) {
            log::trace!("key {raw:?} resolved through placeholder of type {}", placeholder.type_name);
            return placeholder
                .value
                .downcast_ref::<K>()
                .cloned()
                .ok_or_else(|| DotError::PlaceholderTypeMismatch {
                    declared,
                    placeholder: placeholder.type_name,
                    path: path.to_string(),
                });
        }

        match K::parse_key(raw) {
            KeyParse::Parsed(key) => Ok(key),
            KeyParse::Malformed => Err(DotError::InvalidMapKey {
                raw: raw.to_string(),
                path: path.to_string(),
                declared,
            }),
            KeyParse::Unsupported => Err(DotError::UnknownPlaceholder {
                declared,
                path: path.to_string(),
            }),
        }
    }
}

impl fmt::Debug for Placeholders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(name, p)| (name, p.type_name)))
            .finish()
    }
}
