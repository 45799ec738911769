//! # Cycle Detection Module
//!
//! This module finds out whether a path loops back on itself and, if so,
//! where the loop begins and how long it is.
//!
//! ## Algorithm
//!
//! We use Floyd's tortoise-and-hare scan. A slow runner advances one link per
//! round while a fast runner advances two, checking the end of the path and
//! the slow runner after each single link. A meeting point is on the loop;
//! measuring the loop from there and re-running two runners from the start,
//! one of them a loop length ahead, lands both on the loop's first node. The
//! scan is O(n) time and O(1) extra space.
//!
//! ## Key Components
//!
//! - **find_cycle_start**: the loop's first node, or the end sentinel
//! - **cycle_length** / **distance_from_start**: measurements along the path
//! - **analyze**: all of the above bundled into a [`CycleAnalysis`]
//!
//! ## Example
//!
//! ```
//! use tortoise_hare::detector::{cycle_length, distance_from_start, find_cycle_start};
//! use tortoise_hare::path::{PathShape, PathStore};
//!
//! // Three nodes of lead-in, then a loop of four
//! let path = PathStore::from_shape(PathShape::new(3, 4));
//!
//! let cycle_start = find_cycle_start(&path);
//! assert_ne!(cycle_start, path.end());
//! assert_eq!(distance_from_start(&path, cycle_start), 3);
//! assert_eq!(cycle_length(&path, cycle_start), 4);
//! ```

mod detector_impl;

pub use detector_impl::*;
