//! # Graph Construction and Rendering Module
//!
//! This module turns a path into a `petgraph` directed graph and renders it.
//! Nodes carry their role relative to the walk from the start (lead-in, loop
//! entry, loop, unreached), so renderers can highlight the loop.
//!
//! ## Components
//!
//! - **to_digraph**: builds the graph view of a `PathStore`
//! - **PathRenderer**: renders that graph as ASCII, Mermaid or DOT
//!
//! ## Example
//!
//! ```
//! use tortoise_hare::graph::{PathRenderer, to_digraph};
//! use tortoise_hare::path::{PathShape, PathStore};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let path = PathStore::from_shape(PathShape::new(2, 3));
//! let graph = to_digraph(&path);
//!
//! let renderer = PathRenderer::new(true);
//! let mut output = Vec::new();
//! renderer.render_dot(&graph, &mut output)?;
//!
//! let dot_output = String::from_utf8(output)?;
//! assert!(dot_output.contains("digraph"));
//! assert!(dot_output.contains("\"n4\" -> \"n2\""));
//! # Ok(())
//! # }
//! ```

mod builder;
mod renderer;
mod types;

pub use builder::{PathGraph, to_digraph};
pub use renderer::PathRenderer;
pub use types::{LinkKind, NodeRole, PathNode};
