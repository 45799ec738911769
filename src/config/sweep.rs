//! Sweep command configuration

use crate::cli::OutputFormat;
use crate::common::{check_sweep_bound, missing_field};
use crate::constants::sweep::{DEFAULT_MAX_BEFORE, DEFAULT_MAX_CYCLE};
use crate::error::TortoiseHareError;
use crate::sweep::ShapeSweep;

/// Configuration for the sweep command
///
/// Every shape with a lead-in length below `max_before` and a loop length
/// below `max_cycle` is checked.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Exclusive upper bound on the lead-in length
    pub max_before: usize,
    /// Exclusive upper bound on the loop length
    pub max_cycle: usize,
    /// Output format for the report
    pub format: OutputFormat,
    /// Maximum number of failing shapes to list (None = all)
    pub max_failures: Option<usize>,
    /// Whether to exit with error code if any shape fails
    pub error_on_failures: bool,
}

impl SweepConfig {
    pub fn builder() -> SweepConfigBuilder {
        SweepConfigBuilder::new()
    }

    pub fn sweep(&self) -> ShapeSweep {
        ShapeSweep::new(self.max_before, self.max_cycle)
    }
}

pub struct SweepConfigBuilder {
    max_before: usize,
    max_cycle: usize,
    format: Option<OutputFormat>,
    max_failures: Option<usize>,
    error_on_failures: bool,
}

impl Default for SweepConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SweepConfigBuilder {
    pub fn new() -> Self {
        Self {
            max_before: DEFAULT_MAX_BEFORE,
            max_cycle: DEFAULT_MAX_CYCLE,
            format: None,
            max_failures: None,
            error_on_failures: false,
        }
    }

    pub fn with_max_before(mut self, max_before: usize) -> Self {
        self.max_before = max_before;
        self
    }

    pub fn with_max_cycle(mut self, max_cycle: usize) -> Self {
        self.max_cycle = max_cycle;
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_max_failures(mut self, max_failures: Option<usize>) -> Self {
        self.max_failures = max_failures;
        self
    }

    pub fn with_error_on_failures(mut self, error_on_failures: bool) -> Self {
        self.error_on_failures = error_on_failures;
        self
    }
}

impl crate::common::ConfigBuilder for SweepConfigBuilder {
    type Config = SweepConfig;

    fn build(self) -> Result<Self::Config, TortoiseHareError> {
        Ok(SweepConfig {
            max_before: check_sweep_bound("max_before", self.max_before)?,
            max_cycle: check_sweep_bound("max_cycle", self.max_cycle)?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            max_failures: self.max_failures,
            error_on_failures: self.error_on_failures,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    #[test]
    fn test_defaults_cover_standard_grid() {
        let config = SweepConfig::builder()
            .with_format(OutputFormat::Human)
            .build()
            .unwrap();

        assert_eq!(config.max_before, DEFAULT_MAX_BEFORE);
        assert_eq!(config.max_cycle, DEFAULT_MAX_CYCLE);
        assert_eq!(config.sweep().case_count(), Some(100));
        assert_eq!(config.max_failures, None);
    }

    #[test]
    fn test_oversized_grid_is_rejected() {
        let error = SweepConfig::builder()
            .with_max_before(1 << 33)
            .with_max_cycle(1 << 33)
            .with_format(OutputFormat::Json)
            .build()
            .unwrap_err();

        assert_eq!(
            error.to_string(),
            "Configuration error: max_before is 8589934592, which exceeds the limit of 1024"
        );
    }

    #[test]
    fn test_missing_format_is_rejected() {
        let error = SweepConfig::builder().build().unwrap_err();

        assert_eq!(
            error.to_string(),
            "Configuration error: Missing required field: format"
        );
    }
}
