//! Configuration constants for tortoise-hare
//!
//! This module contains the defaults used throughout the application. CLI
//! flags and their environment variables override them.

use std::time::Duration;

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames for the racing animation
    pub const SPINNER_FRAMES: &[&str] = &[
        "🐢 ", // Tortoise alone
        "🐢·", // Tortoise, one step
        "🐢🐇", // Hare catching up
        "🐇·", // Hare ahead
        "🐇 ", // Hare alone
        "·🐇", // Hare lapping
    ];
}

/// Output formatting configuration
pub mod output {
    /// Default report format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Default diagram format when not specified
    pub const DEFAULT_GRAPH_FORMAT: &str = "ascii";
}

/// Path construction limits
pub mod path {
    /// Largest lead-in or loop length accepted for a single path
    pub const MAX_SEGMENT_LENGTH: usize = 1 << 24;
}

/// Shape sweep configuration
pub mod sweep {
    /// Default exclusive upper bound on lead-in lengths
    pub const DEFAULT_MAX_BEFORE: usize = 10;

    /// Default exclusive upper bound on loop lengths
    pub const DEFAULT_MAX_CYCLE: usize = 10;

    /// Largest accepted bound on either axis of the grid
    pub const MAX_BOUND: usize = 1024;
}

/// Logging configuration
pub mod logging {
    /// Environment variable holding the tracing filter directives
    pub const FILTER_ENV: &str = "TORTOISE_HARE_LOG";

    /// Filter used when the environment variable is unset or invalid
    pub const DEFAULT_FILTER: &str = "warn";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_constants() {
        assert_eq!(progress::TICK_INTERVAL, Duration::from_millis(100));
        assert_eq!(progress::SPINNER_FRAMES.len(), 6);
    }

    #[test]
    fn test_output_constants() {
        assert_eq!(output::DEFAULT_FORMAT, "human");
        assert_eq!(output::DEFAULT_GRAPH_FORMAT, "ascii");
    }

    #[test]
    fn test_sweep_defaults_cover_ten_by_ten() {
        assert_eq!(sweep::DEFAULT_MAX_BEFORE * sweep::DEFAULT_MAX_CYCLE, 100);
    }

    #[test]
    fn test_limits_keep_node_counts_in_range() {
        assert!(sweep::DEFAULT_MAX_BEFORE <= sweep::MAX_BOUND);
        assert!(sweep::MAX_BOUND.checked_mul(sweep::MAX_BOUND).is_some());
        assert!(path::MAX_SEGMENT_LENGTH.checked_mul(2).is_some());
    }
}
