//! Command implementations for the tortoise-hare CLI
//!
//! This module contains the implementations for each CLI command:
//! - inspect: Check a single path shape for a cycle
//! - sweep: Check a whole grid of path shapes
//! - render: Draw a path as a diagram

pub mod inspect;
pub mod render;
pub mod sweep;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Inspect { .. } => inspect::execute_inspect_command(command),
        Commands::Sweep { .. } => sweep::execute_sweep_command(command),
        Commands::Render { .. } => render::execute_render_command(command),
    }
}
