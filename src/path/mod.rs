//! # Path Module
//!
//! A path is a singly-linked sequence of nodes stored in an arena. Nodes are
//! addressed by index rather than by reference so that a node's successor can
//! be any node at all, including an earlier one or itself.
//!
//! ## Key Components
//!
//! - **PathStore**: the arena plus the index of the first node
//! - **PathShape**: a `(before, cycle)` description used to build test paths
//! - **END**: the sentinel index meaning "no node"
//!
//! ## Example
//!
//! ```
//! use tortoise_hare::path::{END, PathStore};
//!
//! let mut path = PathStore::new();
//! let a = path.add_node();
//! let b = path.add_node();
//!
//! // END as the source addresses the virtual predecessor of the first node
//! path.set_next(END, a);
//! path.set_next(a, b);
//! path.set_next(b, a);
//!
//! assert_eq!(path.start(), a);
//! assert_eq!(path.next(b), a);
//! ```

mod shape;
mod store;

pub use shape::PathShape;
pub use store::{END, NodeIndex, PathStore};
