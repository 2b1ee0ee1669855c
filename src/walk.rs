//! Structural kinds a path can traverse.
//!
//! Every value reachable by a path implements [`Walk`], which reports the
//! value's [`Node`] kind. Containers expose a capability trait from
//! [`crate::container`]; records expose their fields by name through
//! [`Record`]; everything else is a terminal [`Node::Scalar`].
//!
//! # Examples
//!
//! ```
//! use dotpath::{record, Dot};
//!
//! #[derive(Debug, Default)]
//! struct Info {
//!     title: String,
//!     pages: Vec<u32>,
//! }
//!
//! record!(Info { title, pages });
//!
//! let mut info = Info::default();
//! let mut dot = Dot::new(&mut info);
//! dot.insert("title", "Dune".to_string()).unwrap();
//! dot.insert("pages.-1", 412_u32).unwrap();
//! assert_eq!(info.pages, vec![412]);
//! ```

use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use num_complex::Complex;
use ordered_float::OrderedFloat;

use crate::container::{ArraySlot, MapSlot, Queue, QueueSlot, SequenceSlot};
use crate::key::MapKey;

/// Type-checked assignment, implemented for every `'static` type.
pub trait Slot: Any {
    /// Moves `value` into `self` when it holds exactly `Self`, otherwise hands it back.
    ///
    /// # Errors
    ///
    /// Returns the untouched box when the runtime types differ.
    fn put(&mut self, value: Box<dyn Any>) -> Result<(), Box<dyn Any>>;

    /// The declared type of this slot, as used in error messages.
    fn type_name(&self) -> &'static str;
}

impl<T: Any> Slot for T {
    fn put(&mut self, value: Box<dyn Any>) -> Result<(), Box<dyn Any>> {
        let value = value.downcast::<T>()?;
        *self = *value;
        Ok(())
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// The structural kind of a value, with access to its capability.
pub enum Node<'a> {
    /// Named-field aggregate.
    Record(&'a mut dyn Record),
    /// Key/value container; consumes the rest of the path itself.
    Map(&'a mut dyn MapSlot),
    /// Growable sequence; index `-1` appends.
    Sequence(&'a mut dyn SequenceSlot),
    /// Fixed-size sequence.
    Array(&'a mut dyn ArraySlot),
    /// Single-slot queue; only entered when reached as a record field.
    Queue(&'a mut dyn QueueSlot),
    /// Terminal value.
    Scalar,
    /// A lazy wrapper that holds nothing yet.
    Absent(&'a mut dyn Absent),
}

impl<'a> Node<'a> {
    /// Short name of the kind, for logging.
    ///
    /// An absent wrapper reports the kind of the value it would hold.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Record(_) => "record",
            Self::Map(_) => "map",
            Self::Sequence(_) => "sequence",
            Self::Array(_) => "array",
            Self::Queue(_) => "queue",
            Self::Scalar => "scalar",
            Self::Absent(absent) => absent.kind(),
        }
    }

    /// Materializes absent wrappers that can be descended into.
    ///
    /// An absent wrapper around a scalar stays empty and is reported as
    /// [`Node::Scalar`].
    #[must_use]
    pub fn present(self) -> Self {
        match self {
            Self::Absent(absent) if absent.kind() != "scalar" => absent.materialize().node().present(),
            Self::Absent(_) => Self::Scalar,
            node => node,
        }
    }
}

/// An empty lazy wrapper.
pub trait Absent {
    /// Kind of the value a materialized wrapper would hold.
    fn kind(&self) -> &'static str;

    /// Stores a default value and returns it.
    fn materialize(&mut self) -> &mut dyn Walk;
}

/// A value that a dot-delimited path can be walked into.
///
/// The default kind is [`Node::Scalar`], so opaque types only need an
/// empty impl:
///
/// ```
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Key { First, Second }
///
/// impl dotpath::Walk for Key {}
/// ```
pub trait Walk: Slot {
    /// Reports the structural kind of this value.
    fn node(&mut self) -> Node<'_> {
        Node::Scalar
    }
}

/// Field access by exact name.
///
/// Usually generated with [`record!`](crate::record).
pub trait Record {
    /// Returns the field called `name`, or `None` if there is no such field.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Walk>;
}

/// Implements [`Walk`] and [`Record`] for a struct from its field list.
///
/// Path segments match field names exactly.
///
/// ```
/// use dotpath::record;
///
/// #[derive(Default)]
/// struct Part {
///     slug: String,
///     count: i64,
/// }
///
/// record!(Part { slug, count });
/// ```
#[macro_export]
macro_rules! record {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::Walk for $ty {
            fn node(&mut self) -> $crate::Node<'_> {
                $crate::Node::Record(self)
            }
        }

        impl $crate::Record for $ty {
            fn field_mut(&mut self, name: &str) -> ::core::option::Option<&mut dyn $crate::Walk> {
                match name {
                    $(stringify!($field) => ::core::option::Option::Some(&mut self.$field),)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    };
}

macro_rules! scalar_walk {
    ($($ty:ty),* $(,)?) => {
        $(impl Walk for $ty {})*
    };
}

scalar_walk!(
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64, bool, char, String, (),
    OrderedFloat<f32>, OrderedFloat<f64>,
    Complex<f32>, Complex<f64>,
    Complex<OrderedFloat<f32>>, Complex<OrderedFloat<f64>>,
);

// `None` stays `None` until a path descends through it.
impl<T: Walk + Default> Walk for Option<T> {
    fn node(&mut self) -> Node<'_> {
        match self {
            Some(value) => value.node(),
            None => Node::Absent(self),
        }
    }
}

impl<T: Walk + Default> Absent for Option<T> {
    fn kind(&self) -> &'static str {
        T::default().node().kind()
    }

    fn materialize(&mut self) -> &mut dyn Walk {
        log::trace!("materializing {}", std::any::type_name::<T>());
        self.get_or_insert_with(T::default)
    }
}

impl<T: Walk> Walk for Box<T> {
    fn node(&mut self) -> Node<'_> {
        (**self).node()
    }
}

impl<K, V, S> Walk for HashMap<K, V, S>
where
    K: MapKey + Eq + Hash,
    V: Walk + Default,
    S: BuildHasher + 'static,
{
    fn node(&mut self) -> Node<'_> {
        Node::Map(self)
    }
}

impl<K, V> Walk for BTreeMap<K, V>
where
    K: MapKey + Ord,
    V: Walk + Default,
{
    fn node(&mut self) -> Node<'_> {
        Node::Map(self)
    }
}

impl<T: Walk + Default> Walk for Vec<T> {
    fn node(&mut self) -> Node<'_> {
        Node::Sequence(self)
    }
}

impl<T: Walk + Default, const N: usize> Walk for [T; N] {
    fn node(&mut self) -> Node<'_> {
        Node::Array(self)
    }
}

impl<T: Walk + Default> Walk for Queue<T> {
    fn node(&mut self) -> Node<'_> {
        Node::Queue(self)
    }
}
