use std::fmt;

use serde::{Deserialize, Serialize};

/// Length of the lead-in chain and of the loop of a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PathShape {
    pub nodes_before_cycle: usize,
    pub nodes_in_cycle: usize,
}

impl PathShape {
    pub fn new(nodes_before_cycle: usize, nodes_in_cycle: usize) -> Self {
        Self {
            nodes_before_cycle,
            nodes_in_cycle,
        }
    }

    pub fn has_cycle(&self) -> bool {
        self.nodes_in_cycle > 0
    }

    /// Total number of nodes, or `None` when it does not fit in a `usize`
    pub fn node_count(&self) -> Option<usize> {
        self.nodes_before_cycle.checked_add(self.nodes_in_cycle)
    }
}

impl fmt::Display for PathShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "before={} cycle={}",
            self.nodes_before_cycle, self.nodes_in_cycle
        )
    }
}
