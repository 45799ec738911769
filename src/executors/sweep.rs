//! Sweep command executor

use console::style;
use miette::Result;
use tracing::info;

use super::{CommandExecutor, print_report, print_setting};
use crate::config::SweepConfig;
use crate::progress::ProgressReporter;

pub struct SweepExecutor;

impl CommandExecutor for SweepExecutor {
    type Config = SweepConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!("{} Sweeping path shapes...", style("🐇").cyan());
        print_setting("Nodes before cycle", format!("0..{}", config.max_before));
        print_setting("Nodes in cycle", format!("0..{}", config.max_cycle));

        let sweep = config.sweep();

        // Create progress reporter if we're in an interactive terminal
        let mut progress = if console::Term::stderr().is_term() {
            Some(ProgressReporter::new())
        } else {
            None
        };

        if let (Some(p), Some(case_count)) = (progress.as_mut(), sweep.case_count()) {
            p.start_sweep(case_count);
        }

        let results = sweep.run(progress.as_ref());
        info!(
            cases = results.checks().len(),
            passed = results.passed_count(),
            "sweep finished"
        );

        if let Some(p) = progress.as_mut() {
            p.finish_sweep(results.passed_count(), results.checks().len());
        }

        print_report(&results, config.format, config.max_failures)?;

        // Exit with error code if any shape failed and it was requested
        if config.error_on_failures && !results.all_passed() {
            std::process::exit(1);
        }

        Ok(())
    }
}
