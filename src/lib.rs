//! # Tortoise-Hare - Find Where a Path Loops Back
//!
//! Tortoise-Hare models a singly-linked path as an arena of nodes and finds
//! out whether following the path from its start ever revisits a node. When
//! it does, the detector reports the first node of the loop, the number of
//! nodes before it and the loop's length, in linear time and constant space.
//!
//! ## Main Components
//!
//! - **Path**: the node arena with index-based links and an end sentinel
//! - **Detector**: Floyd's tortoise-and-hare scan plus path measurements
//! - **Sweep**: builds paths of known shape and checks the detector agrees
//! - **Graph**: renders a path as ASCII, Mermaid or DOT
//! - **Reports**: human-readable and machine-readable results
//!
//! ## Usage
//!
//! ### Example: Finding a Loop
//!
//! ```
//! use tortoise_hare::detector::{analyze, find_cycle_start};
//! use tortoise_hare::path::{END, PathStore};
//!
//! // start -> a -> b -> c -> b
//! let mut path = PathStore::new();
//! let a = path.add_node();
//! let b = path.add_node();
//! let c = path.add_node();
//! path.set_next(END, a);
//! path.set_next(a, b);
//! path.set_next(b, c);
//! path.set_next(c, b);
//!
//! assert_eq!(find_cycle_start(&path), b);
//!
//! let analysis = analyze(&path);
//! assert_eq!(analysis.nodes_before_cycle, 1);
//! assert_eq!(analysis.nodes_in_cycle, 2);
//! ```
//!
//! ### Example: Sweeping Shapes
//!
//! ```
//! use tortoise_hare::reports::{JsonReportGenerator, ReportGenerator};
//! use tortoise_hare::sweep::ShapeSweep;
//!
//! # fn main() -> miette::Result<()> {
//! let results = ShapeSweep::new(5, 5).run(None);
//! assert!(results.all_passed());
//!
//! let json = JsonReportGenerator::new().generate_report(&results)?;
//! assert!(json.contains("\"case_count\": 25"));
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod progress;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod detector;
pub mod error;
pub mod executors;
pub mod graph;
pub mod path;
pub mod reports;
pub mod sweep;

pub use common::ConfigBuilder;

/// Install the tracing subscriber used by the CLI
///
/// Filter directives come from `TORTOISE_HARE_LOG`; output goes to stderr so
/// it never mixes with reports on stdout.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    use crate::constants::logging::{DEFAULT_FILTER, FILTER_ENV};

    let filter = EnvFilter::try_from_env(FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    init_tracing();

    let cli = Cli::parse();
    execute_command(cli.command)
}
