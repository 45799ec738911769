//! Inspect command executor

use console::style;
use miette::Result;
use tracing::info;

use super::{CommandExecutor, print_report, print_setting};
use crate::config::InspectConfig;
use crate::progress::ProgressReporter;
use crate::sweep::{ShapeCheck, SweepResults};

pub struct InspectExecutor;

impl CommandExecutor for InspectExecutor {
    type Config = InspectConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!("{} Inspecting path for a cycle...", style("🐢").cyan());
        print_setting("Nodes before cycle", config.shape.nodes_before_cycle);
        print_setting("Nodes in cycle", config.shape.nodes_in_cycle);

        // Create progress reporter if we're in an interactive terminal
        let progress = if console::Term::stderr().is_term() {
            Some(ProgressReporter::new())
        } else {
            None
        };

        if let Some(p) = progress.as_ref() {
            p.building_path(config.shape);
        }

        let check = ShapeCheck::run(config.shape);
        info!(shape = %config.shape, passed = check.passed(), "inspected path");

        if let Some(p) = progress.as_ref() {
            p.finish_analysis(check.analysis.has_cycle());
        }

        let passed = check.passed();
        print_report(&SweepResults::from(vec![check]), config.format, None)?;

        // Exit with error code if the detector disagrees and it was requested
        if config.error_on_mismatch && !passed {
            std::process::exit(1);
        }

        Ok(())
    }
}
