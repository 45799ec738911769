//! Common functionality shared across commands

use clap::Args;
use clap::builder::RangedU64ValueParser;

use crate::constants::path::MAX_SEGMENT_LENGTH;
use crate::constants::sweep::MAX_BOUND;
use crate::path::PathShape;

/// Shape of the path to build
#[derive(Args, Debug, Clone, Copy)]
pub struct ShapeArgs {
    /// Number of nodes before the loop
    #[arg(
        short,
        long,
        default_value_t = 0,
        value_parser = segment_length_parser(),
        env = "TORTOISE_HARE_BEFORE"
    )]
    pub before: usize,

    /// Number of nodes in the loop (0 for a path without a loop)
    #[arg(
        short,
        long,
        default_value_t = 0,
        value_parser = segment_length_parser(),
        env = "TORTOISE_HARE_CYCLE"
    )]
    pub cycle: usize,
}

impl ShapeArgs {
    pub fn shape(&self) -> PathShape {
        PathShape::new(self.before, self.cycle)
    }
}

/// Parser for lead-in and loop lengths of a single path
pub(crate) fn segment_length_parser() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::new().range(..=MAX_SEGMENT_LENGTH as u64)
}

/// Parser for the per-axis bounds of a shape sweep
pub(crate) fn sweep_bound_parser() -> RangedU64ValueParser<usize> {
    RangedU64ValueParser::new().range(..=MAX_BOUND as u64)
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "TORTOISE_HARE_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::TortoiseHareError>;
}

/// Trait for configurations that can be created from CLI commands
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands)
    -> Result<Self, crate::error::TortoiseHareError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::TortoiseHareError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

/// Error for a builder field that was never set
pub(crate) fn missing_field(field: &str) -> crate::error::TortoiseHareError {
    crate::error::TortoiseHareError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}

/// Reject shapes whose segments exceed [`MAX_SEGMENT_LENGTH`]
pub(crate) fn check_shape(
    shape: PathShape,
) -> Result<PathShape, crate::error::TortoiseHareError> {
    let longest = shape.nodes_before_cycle.max(shape.nodes_in_cycle);
    if longest > MAX_SEGMENT_LENGTH {
        return Err(crate::error::TortoiseHareError::ConfigurationError {
            message: format!(
                "Path shape {shape} is too large: each segment is limited to {MAX_SEGMENT_LENGTH} nodes"
            ),
        });
    }

    Ok(shape)
}

/// Reject a sweep bound above [`MAX_BOUND`]
pub(crate) fn check_sweep_bound(
    field: &str,
    bound: usize,
) -> Result<usize, crate::error::TortoiseHareError> {
    if bound > MAX_BOUND {
        return Err(crate::error::TortoiseHareError::ConfigurationError {
            message: format!("{field} is {bound}, which exceeds the limit of {MAX_BOUND}"),
        });
    }

    Ok(bound)
}
