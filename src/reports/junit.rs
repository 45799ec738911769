//! JUnit XML format report generation

use std::fmt::Write;

use super::ReportGenerator;
use crate::error::TortoiseHareError;
use crate::sweep::SweepResults;

pub struct JunitReportGenerator;

impl Default for JunitReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JunitReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JunitReportGenerator {
    fn generate_report(&self, results: &SweepResults) -> Result<String, TortoiseHareError> {
        let mut output = String::new();
        let tests = results.checks().len();
        let failures = tests - results.passed_count();

        writeln!(output, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            output,
            r#"<testsuites name="tortoise-hare" tests="{tests}" failures="{failures}">"#
        )?;
        writeln!(
            output,
            r#"  <testsuite name="path-shapes" tests="{tests}" failures="{failures}">"#
        )?;

        for check in results.checks() {
            let name = format!(
                "before-{}-cycle-{}",
                check.shape.nodes_before_cycle, check.shape.nodes_in_cycle
            );

            if check.passed() {
                writeln!(
                    output,
                    r#"    <testcase name="{name}" classname="tortoise-hare" />"#
                )?;
                continue;
            }

            writeln!(
                output,
                r#"    <testcase name="{name}" classname="tortoise-hare">"#
            )?;
            writeln!(
                output,
                r#"      <failure message="Detector disagrees with constructed shape">"#
            )?;
            for mismatch in check.mismatches() {
                writeln!(output, "{mismatch}")?;
            }
            writeln!(output, r#"      </failure>"#)?;
            writeln!(output, r#"    </testcase>"#)?;
        }

        writeln!(output, r#"  </testsuite>"#)?;
        writeln!(output, r#"</testsuites>"#)?;

        Ok(output)
    }
}
