use super::shape::PathShape;

/// Handle of a node inside a [`PathStore`]
pub type NodeIndex = usize;

/// Reserved index that never names a node
///
/// Used both as the "no successor" link and, when passed as the source of
/// [`PathStore::set_next`], as the virtual predecessor of the first node.
pub const END: NodeIndex = NodeIndex::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Node {
    next: NodeIndex,
}

impl Default for Node {
    fn default() -> Self {
        Self { next: END }
    }
}

/// Arena of singly-linked nodes addressed by stable indices
///
/// Nodes are only ever appended. Links may point at any existing node,
/// including the node itself or an earlier one, so cycles are ordinary
/// content rather than an error state.
///
/// Index misuse is a programming error: every accessor asserts that the
/// index it receives is in range and panics otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStore {
    start: NodeIndex,
    nodes: Vec<Node>,
}

impl Default for PathStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PathStore {
    /// Create an empty path
    pub fn new() -> Self {
        Self {
            start: END,
            nodes: Vec::new(),
        }
    }

    /// Build a path with `shape.nodes_before_cycle` chain nodes followed by a
    /// loop of `shape.nodes_in_cycle` nodes
    ///
    /// Chain nodes get indices `0..before` and loop nodes get
    /// `before..before + cycle`. Without loop nodes the last chain node keeps
    /// its end link.
    pub fn from_shape(shape: PathShape) -> Self {
        let mut path = Self::new();
        let mut prev = END;

        for _ in 0..shape.nodes_before_cycle {
            let node = path.add_node();
            path.set_next(prev, node);
            prev = node;
        }

        let mut cycle_start = END;

        for _ in 0..shape.nodes_in_cycle {
            let node = path.add_node();
            if cycle_start == END {
                cycle_start = node;
            }
            path.set_next(prev, node);
            prev = node;
        }

        if prev != END {
            path.set_next(prev, cycle_start);
        }

        path
    }

    /// The sentinel value standing for "no node"
    pub const fn end(&self) -> NodeIndex {
        END
    }

    /// First node of the path, or [`END`] when the path is empty
    pub fn start(&self) -> NodeIndex {
        self.start
    }

    /// Number of nodes ever added
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Append a node whose link is [`END`] and return its index
    pub fn add_node(&mut self) -> NodeIndex {
        let index = self.nodes.len();
        self.nodes.push(Node::default());
        index
    }

    /// Point `from` at `to`
    ///
    /// Passing [`END`] as `from` redirects the start of the path instead, and
    /// `set_next(END, END)` empties it again. Otherwise `from` must name an
    /// existing node. In both cases `to` must name an existing node or be
    /// [`END`].
    ///
    /// # Panics
    ///
    /// Panics when either index violates the rules above.
    #[doc(alias = "set_link")]
    pub fn set_next(&mut self, from: NodeIndex, to: NodeIndex) {
        if from == END {
            self.check_maybe_node_index(to);
            self.start = to;
            return;
        }

        self.check_maybe_node_index(to);
        self.node_mut(from).next = to;
    }

    /// Successor of `index`, possibly [`END`]
    ///
    /// # Panics
    ///
    /// Panics when `index` does not name an existing node.
    pub fn next(&self, index: NodeIndex) -> NodeIndex {
        self.node(index).next
    }

    /// Iterate `(index, next)` pairs in arena order
    pub fn links(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (index, node.next))
    }

    fn node(&self, index: NodeIndex) -> &Node {
        self.check_node_index(index);
        &self.nodes[index]
    }

    fn node_mut(&mut self, index: NodeIndex) -> &mut Node {
        self.check_node_index(index);
        &mut self.nodes[index]
    }

    fn check_maybe_node_index(&self, index: NodeIndex) {
        if index == END {
            return;
        }

        self.check_node_index(index);
    }

    fn check_node_index(&self, index: NodeIndex) {
        assert!(
            index < self.nodes.len(),
            "node index {index} out of range for path with {} nodes",
            self.nodes.len()
        );
    }
}
