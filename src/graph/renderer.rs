use std::collections::HashSet;
use std::io::Write;

use miette::Result;
use petgraph::graph::NodeIndex as GraphIndex;
use petgraph::visit::EdgeRef;

use super::builder::PathGraph;
use super::types::{LinkKind, NodeRole, PathNode};
use crate::error::TortoiseHareError;

// Blue-Orange Accessible Palette
mod colors {
    pub const NORMAL_NODE_FILL: &str = "#E3F2FD"; // Light blue
    pub const NORMAL_NODE_STROKE: &str = "#1976D2"; // Medium blue
    pub const CYCLE_NODE_FILL: &str = "#FFF3E0"; // Light orange
    pub const CYCLE_NODE_STROKE: &str = "#F57C00"; // Vibrant orange
    pub const START_NODE_FILL: &str = "#E8F5E9"; // Light green
    pub const START_NODE_STROKE: &str = "#388E3C"; // Medium green
    pub const UNREACHED_NODE_FILL: &str = "#F5F5F5"; // Light grey
    pub const UNREACHED_NODE_STROKE: &str = "#9E9E9E"; // Medium grey
    pub const NORMAL_EDGE: &str = "#64B5F6"; // Soft blue
    pub const CYCLE_EDGE: &str = "#FF6500"; // Deep orange
}

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(TortoiseHareError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(TortoiseHareError::from)
    };
}

pub struct PathRenderer {
    highlight_cycle: bool,
}

impl PathRenderer {
    pub fn new(highlight_cycle: bool) -> Self {
        Self { highlight_cycle }
    }

    /// Walk the path from its start and print one line per visited node
    pub fn render_ascii(&self, graph: &PathGraph, output: &mut dyn Write) -> Result<()> {
        let Some(start) = find_start(graph) else {
            writeln_out!(output, "Path is empty - nothing to visualize")?;
            return Ok(());
        };

        writeln_out!(
            output,
            "\n📍 Path ({} nodes)\n",
            graph.node_count().saturating_sub(1)
        )?;
        writeln_out!(output, "start")?;

        let mut visited = HashSet::new();
        let mut current = successor(graph, start);

        while let Some(node_idx) = current {
            let node = &graph[node_idx];

            if !visited.insert(node_idx) {
                writeln_out!(output, "  ↺ back to {}", node.id())?;
                break;
            }

            let marker = match node.role() {
                Some(NodeRole::CycleEntry) if self.highlight_cycle => " ⚠️  CYCLE ENTRY",
                Some(NodeRole::Cycle) if self.highlight_cycle => " [cycle]",
                _ => "",
            };
            writeln_out!(output, "  └─> {}{}", node.id(), marker)?;

            current = successor(graph, node_idx);
            if current.is_none() {
                writeln_out!(output, "  └─> end")?;
            }
        }

        let unreached: Vec<String> = graph
            .node_weights()
            .filter(|node| node.role() == Some(NodeRole::Unreached))
            .map(PathNode::id)
            .collect();
        if !unreached.is_empty() {
            writeln_out!(output, "\nUnreached nodes: {}", unreached.join(", "))?;
        }

        Ok(())
    }

    pub fn render_mermaid(&self, graph: &PathGraph, output: &mut dyn Write) -> Result<()> {
        writeln_out!(output, "flowchart LR")?;

        for node in graph.node_weights() {
            let id = node.id();
            let shape = match node {
                PathNode::Start => format!("    {id}((\"start\"))"),
                PathNode::Node { .. } => format!("    {id}[\"{id}\"]"),
            };
            writeln_out!(output, "{}", shape)?;

            let (fill, stroke) = self.node_colors(node);
            let width = if self.highlight_cycle && node.on_cycle() {
                3
            } else {
                2
            };
            writeln_out!(
                output,
                "    style {} fill:{},stroke:{},stroke-width:{}px",
                id,
                fill,
                stroke,
                width
            )?;
        }

        writeln_out!(output)?;

        for (link_style_index, edge) in graph.edge_references().enumerate() {
            let source = &graph[edge.source()];
            let target = &graph[edge.target()];
            let kind = *edge.weight();

            if kind == LinkKind::Cycle && self.highlight_cycle {
                writeln_out!(
                    output,
                    "    {} ==>|cycle| {}",
                    source.id(),
                    target.id()
                )?;
                writeln_out!(
                    output,
                    "    linkStyle {} stroke:{},stroke-width:3px",
                    link_style_index,
                    colors::CYCLE_EDGE
                )?;
            } else {
                writeln_out!(output, "    {} --> {}", source.id(), target.id())?;
                writeln_out!(
                    output,
                    "    linkStyle {} stroke:{},stroke-width:2px",
                    link_style_index,
                    colors::NORMAL_EDGE
                )?;
            }
        }

        Ok(())
    }

    pub fn render_dot(&self, graph: &PathGraph, output: &mut dyn Write) -> Result<()> {
        writeln_out!(output, "digraph path {{")?;
        writeln_out!(output, "    rankdir=LR;")?;
        writeln_out!(output, "    node [shape=box, style=rounded];")?;
        writeln_out!(output)?;

        for node in graph.node_weights() {
            let (fill, stroke) = self.node_colors(node);
            let shape = match node {
                PathNode::Start => "circle",
                PathNode::Node { .. } => "box",
            };
            writeln_out!(
                output,
                r#"    "{}" [shape={}, style=filled, fillcolor="{}", color="{}", penwidth=2];"#,
                node.id(),
                shape,
                fill,
                stroke
            )?;
        }

        writeln_out!(output)?;

        for edge in graph.edge_references() {
            let source = &graph[edge.source()];
            let target = &graph[edge.target()];
            let kind = *edge.weight();

            let (color, width) = if kind == LinkKind::Cycle && self.highlight_cycle {
                (colors::CYCLE_EDGE, 3)
            } else {
                (colors::NORMAL_EDGE, 2)
            };
            writeln_out!(
                output,
                r#"    "{}" -> "{}" [label="{}", color="{}", penwidth={}];"#,
                source.id(),
                target.id(),
                kind,
                color,
                width
            )?;
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }

    fn node_colors(&self, node: &PathNode) -> (&'static str, &'static str) {
        match node.role() {
            None => (colors::START_NODE_FILL, colors::START_NODE_STROKE),
            Some(role) if role.on_cycle() && self.highlight_cycle => {
                (colors::CYCLE_NODE_FILL, colors::CYCLE_NODE_STROKE)
            }
            Some(NodeRole::Unreached) => (colors::UNREACHED_NODE_FILL, colors::UNREACHED_NODE_STROKE),
            Some(_) => (colors::NORMAL_NODE_FILL, colors::NORMAL_NODE_STROKE),
        }
    }
}

fn find_start(graph: &PathGraph) -> Option<GraphIndex> {
    graph
        .node_indices()
        .find(|&idx| graph[idx] == PathNode::Start)
}

fn successor(graph: &PathGraph, node: GraphIndex) -> Option<GraphIndex> {
    graph.neighbors(node).next()
}
