use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::path::{NodeIndex, PathStore};

/// Summary of a path's layout as seen by the detector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleAnalysis {
    pub node_count: usize,
    pub is_empty: bool,
    /// First node of the loop, `None` when the path ends
    pub cycle_start: Option<NodeIndex>,
    /// Nodes walked from the start before the loop (or before the end)
    pub nodes_before_cycle: usize,
    pub nodes_in_cycle: usize,
}

impl CycleAnalysis {
    pub fn has_cycle(&self) -> bool {
        self.cycle_start.is_some()
    }
}

/// Whether the path has no first node
pub fn is_empty(path: &PathStore) -> bool {
    path.start() == path.end()
}

/// Follow `count` links starting at `node`
///
/// # Panics
///
/// Panics if the walk runs off the end of the path before `count` steps.
pub fn advance(path: &PathStore, mut node: NodeIndex, mut count: usize) -> NodeIndex {
    while count > 0 {
        node = path.next(node);
        count -= 1;
    }

    node
}

/// Number of nodes in the loop that contains `node`, or 0 for the end sentinel
///
/// # Panics
///
/// Panics if `node` does not lie on a loop.
pub fn cycle_length(path: &PathStore, node: NodeIndex) -> usize {
    if node == path.end() {
        return 0;
    }

    let mut current = node;
    let mut length = 0;

    loop {
        assert!(
            current != path.end(),
            "node {node} does not lie on a cycle: walk reached the end of the path"
        );
        current = path.next(current);
        length += 1;

        if current == node {
            break;
        }

        assert!(
            length < path.node_count(),
            "node {node} does not lie on a cycle: walk never returned to it"
        );
    }

    length
}

/// Number of links walked from the start of the path until `target`
///
/// Passing the end sentinel on a path without a loop yields the length of
/// the path.
///
/// # Panics
///
/// Panics if `target` cannot be reached from the start.
pub fn distance_from_start(path: &PathStore, target: NodeIndex) -> usize {
    let mut current = path.start();
    let mut distance = 0;

    while current != target {
        assert!(
            distance < path.node_count(),
            "node {target} is not reachable from the start of the path"
        );
        current = path.next(current);
        distance += 1;
    }

    distance
}

/// First node of the loop the path falls into, or the end sentinel
///
/// Runs Floyd's two-runner scan: the fast runner takes two single steps per
/// round and each of them is checked against the end of the path and against
/// the slow runner before the slow runner moves. Any meeting point lies on the
/// loop and is handed to [`start_of_cycle_containing`].
pub fn find_cycle_start(path: &PathStore) -> NodeIndex {
    let start = path.start();

    if start == path.end() {
        return start;
    }

    let mut slow = start;
    let mut fast = start;

    loop {
        fast = path.next(fast);

        if fast == path.end() {
            return fast;
        }

        if fast == slow {
            return start_of_cycle_containing(path, slow);
        }

        fast = path.next(fast);

        if fast == path.end() {
            return fast;
        }

        if fast == slow {
            return start_of_cycle_containing(path, slow);
        }

        slow = path.next(slow);

        // The slow runner can only step onto the parked fast runner at the
        // entry of the loop.
        if slow == fast {
            return start_of_cycle_containing(path, slow);
        }
    }
}

/// Whether following the path from its start ever revisits a node
pub fn has_cycle(path: &PathStore) -> bool {
    find_cycle_start(path) != path.end()
}

/// Locate the loop entry given any node known to be on the loop
///
/// A lead runner placed one loop length ahead of the start meets the trailing
/// runner exactly at the entry.
fn start_of_cycle_containing(path: &PathStore, witness: NodeIndex) -> NodeIndex {
    let length = cycle_length(path, witness);
    let mut trailing = path.start();
    let mut leading = advance(path, trailing, length);

    while trailing != leading {
        trailing = path.next(trailing);
        leading = path.next(leading);
    }

    trace!(witness, length, entry = trailing, "located cycle entry");
    trailing
}

/// Run every measurement over `path`
pub fn analyze(path: &PathStore) -> CycleAnalysis {
    let cycle_start = find_cycle_start(path);

    CycleAnalysis {
        node_count: path.node_count(),
        is_empty: is_empty(path),
        cycle_start: (cycle_start != path.end()).then_some(cycle_start),
        nodes_before_cycle: distance_from_start(path, cycle_start),
        nodes_in_cycle: cycle_length(path, cycle_start),
    }
}
