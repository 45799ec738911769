//! Report generation modules for different output formats
//!
//! This module contains report generators for various output formats:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use
//! - junit: JUnit XML format for CI/CD integration

pub mod human;
pub mod json;
pub mod junit;

use crate::error::TortoiseHareError;
use crate::sweep::SweepResults;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from a set of shape checks
    fn generate_report(&self, results: &SweepResults) -> Result<String, TortoiseHareError>;
}

// Re-export for convenience
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
pub use junit::JunitReportGenerator;
