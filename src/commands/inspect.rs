//! Inspect command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::InspectConfig;
use crate::error::TortoiseHareError;

impl FromCommand for InspectConfig {
    fn from_command(command: Commands) -> Result<Self, TortoiseHareError> {
        match command {
            Commands::Inspect {
                shape,
                format,
                error_on_mismatch,
            } => InspectConfig::builder()
                .with_shape(shape.shape())
                .with_format(format.format)
                .with_error_on_mismatch(error_on_mismatch)
                .build(),
            _ => Err(TortoiseHareError::ConfigurationError {
                message: "Invalid command type for InspectConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(InspectConfig);

/// Execute the inspect command for a single path shape
pub fn execute_inspect_command(command: Commands) -> Result<()> {
    let config = InspectConfig::from_command(command)
        .wrap_err("Failed to parse inspect command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::inspect::InspectExecutor;
    InspectExecutor::execute(config)
}
