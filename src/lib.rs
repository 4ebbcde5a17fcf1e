//! Node-based containers.
//!
//! The crate provides an ordered [`Map`] and [`Set`] based on an unbalanced binary search
//! tree whose nodes link to their parents, a doubly linked [`List`], and the supporting
//! [`Queue`], [`Stack`] and [`Vector`].
//!
//! Positions in the node-based containers are [`Cursor`]s. A cursor does not borrow its
//! container, so the container can be modified while cursors are held; a cursor whose
//! element has been erased is rejected with [`Error::InvalidCursor`] rather than followed.
//!
//! Structural operations emit `tracing` events at the `debug` and `trace` levels. The
//! crate installs no subscriber.

mod arena;
mod error;
mod node;

pub mod list;
pub mod map;
pub mod queue;
pub mod set;
pub mod stack;
pub mod vector;

#[cfg(feature = "ordered_iter")]
mod ordered_iter;

#[cfg(feature = "quickcheck")]
mod quickcheck;

pub use arena::Cursor;
pub use error::{Error, Result};
pub use list::List;
pub use map::Map;
pub use queue::Queue;
pub use set::Set;
pub use stack::Stack;
pub use vector::Vector;
