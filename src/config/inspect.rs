//! Inspect command configuration

use crate::cli::OutputFormat;
use crate::common::{check_shape, missing_field};
use crate::error::TortoiseHareError;
use crate::path::PathShape;

/// Configuration for the inspect command
#[derive(Debug, Clone)]
pub struct InspectConfig {
    /// Shape of the path to build and analyze
    pub shape: PathShape,
    /// Output format for the report
    pub format: OutputFormat,
    /// Whether to exit with error code if the detector disagrees with the shape
    pub error_on_mismatch: bool,
}

impl InspectConfig {
    pub fn builder() -> InspectConfigBuilder {
        InspectConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct InspectConfigBuilder {
    shape: Option<PathShape>,
    format: Option<OutputFormat>,
    error_on_mismatch: Option<bool>,
}

impl InspectConfigBuilder {
    pub fn new() -> Self {
        Self {
            shape: None,
            format: None,
            error_on_mismatch: None,
        }
    }

    pub fn with_shape(mut self, shape: PathShape) -> Self {
        self.shape = Some(shape);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_error_on_mismatch(mut self, error_on_mismatch: bool) -> Self {
        self.error_on_mismatch = Some(error_on_mismatch);
        self
    }
}

impl crate::common::ConfigBuilder for InspectConfigBuilder {
    type Config = InspectConfig;

    fn build(self) -> Result<Self::Config, TortoiseHareError> {
        Ok(InspectConfig {
            shape: check_shape(self.shape.ok_or_else(|| missing_field("shape"))?)?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            error_on_mismatch: self
                .error_on_mismatch
                .ok_or_else(|| missing_field("error_on_mismatch"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    #[test]
    fn test_build_complete_config() {
        let config = InspectConfig::builder()
            .with_shape(PathShape::new(1, 2))
            .with_format(OutputFormat::Human)
            .with_error_on_mismatch(true)
            .build()
            .unwrap();

        assert_eq!(config.shape, PathShape::new(1, 2));
        assert_eq!(config.format, OutputFormat::Human);
        assert!(config.error_on_mismatch);
    }

    #[test]
    fn test_oversized_shape_is_rejected() {
        let error = InspectConfig::builder()
            .with_shape(PathShape::new(usize::MAX, 1))
            .with_format(OutputFormat::Human)
            .with_error_on_mismatch(false)
            .build()
            .unwrap_err();

        assert!(error.to_string().contains("too large"));
    }

    #[test]
    fn test_missing_shape_is_rejected() {
        let error = InspectConfig::builder()
            .with_format(OutputFormat::Json)
            .with_error_on_mismatch(false)
            .build()
            .unwrap_err();

        assert_eq!(
            error.to_string(),
            "Configuration error: Missing required field: shape"
        );
    }
}
