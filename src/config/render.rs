//! Render command configuration

use std::path::PathBuf;

use crate::cli::GraphFormat;
use crate::common::{check_shape, missing_field};
use crate::error::TortoiseHareError;
use crate::path::PathShape;

/// Configuration for the render command
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Shape of the path to draw
    pub shape: PathShape,
    /// Diagram format
    pub format: GraphFormat,
    /// Output file (None = stdout)
    pub output: Option<PathBuf>,
    /// Whether to highlight the loop
    pub highlight_cycle: bool,
}

impl RenderConfig {
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct RenderConfigBuilder {
    shape: Option<PathShape>,
    format: Option<GraphFormat>,
    output: Option<PathBuf>,
    highlight_cycle: Option<bool>,
}

impl RenderConfigBuilder {
    pub fn new() -> Self {
        Self {
            shape: None,
            format: None,
            output: None,
            highlight_cycle: None,
        }
    }

    pub fn with_shape(mut self, shape: PathShape) -> Self {
        self.shape = Some(shape);
        self
    }

    pub fn with_format(mut self, format: GraphFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn with_highlight_cycle(mut self, highlight_cycle: bool) -> Self {
        self.highlight_cycle = Some(highlight_cycle);
        self
    }
}

impl crate::common::ConfigBuilder for RenderConfigBuilder {
    type Config = RenderConfig;

    fn build(self) -> Result<Self::Config, TortoiseHareError> {
        Ok(RenderConfig {
            shape: check_shape(self.shape.ok_or_else(|| missing_field("shape"))?)?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            output: self.output,
            highlight_cycle: self
                .highlight_cycle
                .ok_or_else(|| missing_field("highlight_cycle"))?,
        })
    }
}
