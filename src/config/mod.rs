//! # Configuration Module
//!
//! This module provides configuration structures for all tortoise-hare
//! commands. Each command has its own config module with a builder.
//!
//! ## Command Configurations
//!
//! - **InspectConfig**: Configuration for the `inspect` command on one shape
//! - **SweepConfig**: Configuration for the `sweep` command over a shape grid
//! - **RenderConfig**: Configuration for the `render` command
//!
//! ## Example
//!
//! ```
//! use tortoise_hare::ConfigBuilder;
//! use tortoise_hare::cli::OutputFormat;
//! use tortoise_hare::config::SweepConfig;
//!
//! let config = SweepConfig::builder()
//!     .with_max_before(4)
//!     .with_max_cycle(6)
//!     .with_format(OutputFormat::Json)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.max_before, 4);
//! assert!(!config.error_on_failures);
//! ```

pub mod inspect;
pub mod render;
pub mod sweep;

pub use inspect::InspectConfig;
pub use render::RenderConfig;
pub use sweep::SweepConfig;
