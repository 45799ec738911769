//! Sweep command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::SweepConfig;
use crate::error::TortoiseHareError;

impl FromCommand for SweepConfig {
    fn from_command(command: Commands) -> Result<Self, TortoiseHareError> {
        match command {
            Commands::Sweep {
                max_before,
                max_cycle,
                format,
                max_failures,
                error_on_failures,
            } => SweepConfig::builder()
                .with_max_before(max_before)
                .with_max_cycle(max_cycle)
                .with_format(format.format)
                .with_max_failures(max_failures)
                .with_error_on_failures(error_on_failures)
                .build(),
            _ => Err(TortoiseHareError::ConfigurationError {
                message: "Invalid command type for SweepConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(SweepConfig);

/// Execute the sweep command over a grid of path shapes
pub fn execute_sweep_command(command: Commands) -> Result<()> {
    let config = SweepConfig::from_command(command)
        .wrap_err("Failed to parse sweep command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::sweep::SweepExecutor;
    SweepExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::common::FormatArgs;

    #[test]
    fn test_config_from_sweep_command() {
        let command = Commands::Sweep {
            max_before: 3,
            max_cycle: 7,
            format: FormatArgs {
                format: OutputFormat::Json,
            },
            max_failures: Some(2),
            error_on_failures: true,
        };

        let config = SweepConfig::try_from(command).unwrap();
        assert_eq!(config.max_before, 3);
        assert_eq!(config.max_cycle, 7);
        assert_eq!(config.max_failures, Some(2));
        assert!(config.error_on_failures);
    }
}
