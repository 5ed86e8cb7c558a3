//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod generate;
pub mod run;
pub mod validate;

use swallow_core::seed::time_seed;
use tracing::info;

use crate::config::SimConfig;

/// Configured seed, or one derived from the current time.
pub(crate) fn resolve_seed(config: &SimConfig) -> u64 {
    match config.seed {
        Some(seed) => {
            info!(seed, "Using configured seed");
            seed
        }
        None => {
            let seed = time_seed();
            info!(seed, "Derived seed from current time");
            seed
        }
    }
}
