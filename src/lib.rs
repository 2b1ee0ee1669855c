//! # dotpath - Insert values by dot-delimited path
//!
//! dotpath writes a value into an arbitrarily nested structure addressed by
//! a path such as `"a.first.title"`, without hand-written field, index or
//! key access code. The shape is discovered while the path is walked.
//!
//! ## Core Concepts
//!
//! - **Walk**: every reachable value reports its structural kind: record,
//!   map, growable sequence, fixed array, single-slot queue or scalar
//! - **Container handlers**: each container kind consumes the segment that
//!   addresses its element and recurses into it, creating missing
//!   containers on the way
//! - **Key codec**: map key tokens are parsed into typed keys, or taken from
//!   pre-registered placeholders for keys with no text form
//! - **Typed write**: the final value must have exactly the type of its slot
//!
//! ## Usage
//!
//! ```rust
//! use std::collections::HashMap;
//! use dotpath::{record, Dot, Queue};
//!
//! #[derive(Debug, Default)]
//! struct Info {
//!     title: String,
//! }
//!
//! #[derive(Debug, Default)]
//! struct Data {
//!     a: HashMap<String, Info>,
//!     e: Vec<i32>,
//!     i: Queue<i32>,
//! }
//!
//! record!(Info { title });
//! record!(Data { a, e, i });
//!
//! let mut data = Data::default();
//! let mut dot = Dot::new(&mut data);
//!
//! dot.insert("a.first.title", "Title from map".to_string())?;
//! dot.insert("e.-1", 3)?;
//! dot.insert("i", 99)?;
//!
//! assert_eq!(data.a["first"].title, "Title from map");
//! assert_eq!(data.e, vec![3]);
//! assert_eq!(data.i.try_recv(), Some(99));
//! # Ok::<(), dotpath::DotError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod container;
pub mod dot;
pub mod error;
pub mod key;
pub mod path;
pub mod walk;
pub mod walker;
pub mod writer;

// Re-export primary types at crate root for convenience
pub use container::{ArraySlot, MapSlot, Queue, QueueSlot, SequenceSlot, APPEND, QUEUE_CAPACITY};
pub use dot::{Dot, DotConfig};
pub use error::{DotError, DotResult};
pub use key::{KeyParse, MapKey, Placeholders};
pub use walk::{Absent, Node, Record, Slot, Walk};
pub use walker::Walker;
pub use writer::Scenario;
