//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::error::TortoiseHareError;
use crate::sweep::{ShapeCheck, SweepResults};
use crate::utils::string::Counted;

pub struct HumanReportGenerator {
    max_failures: Option<usize>,
}

impl HumanReportGenerator {
    pub fn new(max_failures: Option<usize>) -> Self {
        Self { max_failures }
    }

    fn write_check(output: &mut String, check: &ShapeCheck) -> Result<(), TortoiseHareError> {
        let analysis = &check.analysis;
        let marker = if check.passed() {
            style("✓").green().bold()
        } else {
            style("✗").red().bold()
        };

        writeln!(output, "{} Path {}", marker, style(check.shape).bold())?;
        writeln!(
            output,
            "    {} Nodes: {}",
            style("•").dim(),
            analysis.node_count
        )?;

        match analysis.cycle_start {
            Some(cycle_start) => {
                writeln!(
                    output,
                    "    {} Cycle starts at node {} after {}",
                    style("🔄").yellow(),
                    style(cycle_start).yellow(),
                    Counted::new(analysis.nodes_before_cycle, "node")
                )?;
                writeln!(
                    output,
                    "    {} Cycle length: {}",
                    style("•").dim(),
                    analysis.nodes_in_cycle
                )?;
            }
            None if analysis.is_empty => {
                writeln!(output, "    {} Path is empty", style("•").dim())?;
            }
            None => {
                writeln!(
                    output,
                    "    {} No cycle: path ends after {}",
                    style("•").dim(),
                    Counted::new(analysis.nodes_before_cycle, "node")
                )?;
            }
        }

        for mismatch in check.mismatches() {
            writeln!(output, "    {} {}", style("→").red(), mismatch)?;
        }

        Ok(())
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, results: &SweepResults) -> Result<String, TortoiseHareError> {
        let mut output = String::new();
        let total = results.checks().len();

        // A single check is printed in full whether it passed or not
        if total == 1 {
            writeln!(output)?;
            Self::write_check(&mut output, &results.checks()[0])?;
        }

        if results.all_passed() {
            write!(
                output,
                "\n{} {} checked, the detector agrees with every one.\n",
                style("✅").green().bold(),
                style(Counted::new(total, "shape")).green().bold()
            )?;
            return Ok(output);
        }

        let failures: Vec<&ShapeCheck> = results.failed().collect();
        let failure_count = failures.len();

        if total > 1 {
            write!(
                output,
                "\n{} {} of {} disagree with the detector:\n\n",
                style("❌").red().bold(),
                style(failure_count).red().bold(),
                Counted::new(total, "shape")
            )?;

            let limit = self.max_failures.unwrap_or(failure_count);
            for check in failures.iter().take(limit) {
                Self::write_check(&mut output, check)?;
                writeln!(output)?;
            }

            if limit < failure_count {
                writeln!(
                    output,
                    "{} Showing {} of {} failures. Use --max-failures to see more.",
                    style("ℹ️").blue(),
                    style(limit).yellow(),
                    style(failure_count).yellow()
                )?;
            }
        } else {
            write!(
                output,
                "\n{} The detector disagrees with the constructed shape.\n",
                style("❌").red().bold()
            )?;
        }

        Ok(output)
    }
}
