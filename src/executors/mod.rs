//! Command executors that handle the actual logic for each command

pub mod inspect;
pub mod render;
pub mod sweep;

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::OutputFormat;
use crate::reports::{
    HumanReportGenerator, JsonReportGenerator, JunitReportGenerator, ReportGenerator,
};
use crate::sweep::SweepResults;

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Print the report for `results` in `format` to stdout
fn print_report(
    results: &SweepResults,
    format: OutputFormat,
    max_failures: Option<usize>,
) -> Result<()> {
    let report_result = match format {
        OutputFormat::Human => HumanReportGenerator::new(max_failures).generate_report(results),
        OutputFormat::Json => JsonReportGenerator::new().generate_report(results),
        OutputFormat::Junit => JunitReportGenerator::new().generate_report(results),
    };

    let report = report_result
        .into_diagnostic()
        .wrap_err("Failed to generate report")?;
    print!("{report}");

    Ok(())
}

fn print_setting(label: &str, value: impl std::fmt::Display) {
    eprintln!("  {} {}: {}", style("→").dim(), label, style(value).yellow());
}
