use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{FormatArgs, ShapeArgs, sweep_bound_parser};
use crate::constants::output::DEFAULT_GRAPH_FORMAT;
use crate::constants::sweep::{DEFAULT_MAX_BEFORE, DEFAULT_MAX_CYCLE};

#[derive(Parser)]
#[command(
    name = "tortoise-hare",
    about = "🐢🐇 Find where a linked path loops back on itself",
    long_about = "tortoise-hare builds singly-linked paths of a chosen shape (a lead-in chain \
                  followed by a loop) and runs Floyd's tortoise-and-hare detector over them to \
                  find where the loop starts and how long it is. It can check a single shape, \
                  sweep a whole grid of shapes, or draw a path as a diagram.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect a single path for a cycle
    ///
    /// Builds a path with the given lead-in and loop lengths and reports
    /// where the detector finds the loop.
    #[command(
        long_about = "Build a path of the given shape, run cycle detection over it and report \
                      the loop's first node, the number of nodes before it and the loop length. \
                      The report also says whether these agree with the shape the path was \
                      built from."
    )]
    Inspect {
        #[command(flatten)]
        shape: ShapeArgs,

        #[command(flatten)]
        format: FormatArgs,

        /// Exit with error code if the detector disagrees with the shape
        #[arg(long, env = "TORTOISE_HARE_ERROR_ON_MISMATCH")]
        error_on_mismatch: bool,
    },

    /// Sweep a grid of path shapes through the detector
    ///
    /// Checks every combination of lead-in and loop length below the given
    /// bounds, in parallel.
    #[command(
        long_about = "Build every path with a lead-in length in [0, max-before) and a loop \
                      length in [0, max-cycle), run cycle detection on each and verify the \
                      detector recovers the shape exactly. Use --format junit to feed the \
                      results to a CI system."
    )]
    Sweep {
        /// Exclusive upper bound on the lead-in length
        #[arg(
            long,
            default_value_t = DEFAULT_MAX_BEFORE,
            value_parser = sweep_bound_parser(),
            env = "TORTOISE_HARE_MAX_BEFORE"
        )]
        max_before: usize,

        /// Exclusive upper bound on the loop length
        #[arg(
            long,
            default_value_t = DEFAULT_MAX_CYCLE,
            value_parser = sweep_bound_parser(),
            env = "TORTOISE_HARE_MAX_CYCLE"
        )]
        max_cycle: usize,

        #[command(flatten)]
        format: FormatArgs,

        /// Maximum number of failing shapes to list (shows all by default)
        #[arg(long, env = "TORTOISE_HARE_MAX_FAILURES")]
        max_failures: Option<usize>,

        /// Exit with error code if any shape fails
        #[arg(long, env = "TORTOISE_HARE_ERROR_ON_FAILURES")]
        error_on_failures: bool,
    },

    /// Draw a path as a diagram
    ///
    /// Renders the path as ASCII art, a Mermaid flowchart or a Graphviz DOT
    /// file, with the loop highlighted.
    #[command(
        long_about = "Render a path of the given shape as ASCII art, a Mermaid flowchart or a \
                      Graphviz DOT graph. Loop nodes and links are highlighted unless \
                      --highlight-cycle false is passed."
    )]
    Render {
        #[command(flatten)]
        shape: ShapeArgs,

        /// Diagram format
        #[arg(
            short,
            long,
            value_enum,
            default_value = DEFAULT_GRAPH_FORMAT,
            env = "TORTOISE_HARE_GRAPH_FORMAT"
        )]
        format: GraphFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "TORTOISE_HARE_OUTPUT")]
        output: Option<PathBuf>,

        /// Highlight the loop in the diagram
        #[arg(
            long,
            default_value_t = true,
            action = clap::ArgAction::Set,
            env = "TORTOISE_HARE_HIGHLIGHT_CYCLE"
        )]
        highlight_cycle: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Junit,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum GraphFormat {
    Ascii,
    Mermaid,
    Dot,
}
