//! Graph node and edge types
//!
//! This module contains the data stored on the nodes and edges of a rendered
//! path graph.

use std::fmt;

use crate::path::NodeIndex;

/// Where a node sits relative to the walk from the start of the path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeRole {
    /// Visited before the loop (or before the end)
    Chain,
    /// First node of the loop
    CycleEntry,
    /// Any other node of the loop
    Cycle,
    /// Present in the arena but never visited from the start
    Unreached,
}

impl NodeRole {
    pub fn on_cycle(&self) -> bool {
        matches!(self, NodeRole::CycleEntry | NodeRole::Cycle)
    }
}

/// A node of the path graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathNode {
    /// Synthetic node standing for the start field
    Start,
    Node { index: NodeIndex, role: NodeRole },
}

impl PathNode {
    /// Identifier usable in DOT and Mermaid output
    pub fn id(&self) -> String {
        match self {
            PathNode::Start => "start".to_string(),
            PathNode::Node { index, .. } => format!("n{index}"),
        }
    }

    pub fn role(&self) -> Option<NodeRole> {
        match self {
            PathNode::Start => None,
            PathNode::Node { role, .. } => Some(*role),
        }
    }

    pub fn on_cycle(&self) -> bool {
        self.role().is_some_and(|role| role.on_cycle())
    }
}

/// Kind of link between two graph nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LinkKind {
    /// From the synthetic start node to the first node
    Start,
    /// Any link not between two loop nodes
    Chain,
    /// A link between two loop nodes, including the one closing the loop
    Cycle,
}

impl fmt::Display for LinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkKind::Start => write!(f, "start"),
            LinkKind::Chain => write!(f, "chain"),
            LinkKind::Cycle => write!(f, "cycle"),
        }
    }
}
