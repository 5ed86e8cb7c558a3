//! Generate command implementation
//!
//! Prints a raw middle-square sequence without validating it.

use std::io::Write;

use swallow_core::rng::MiddleSquareRng;
use tracing::{info, warn};

use crate::config::SimConfig;
use crate::report;
use crate::Result;

/// Run the generate command
pub fn run(config: &SimConfig, count: usize) -> Result<()> {
    let seed = super::resolve_seed(config);
    let stdout = std::io::stdout();
    write_sequence(seed, count, &mut stdout.lock())
}

/// Generates `count` values from `seed` and lists them on `out`.
pub fn write_sequence<W: Write>(seed: u64, count: usize, out: &mut W) -> Result<()> {
    info!(seed, count, "Generating middle-square sequence");
    let mut rng = MiddleSquareRng::from_seed(seed);
    let mut collapsed_at = None;
    let sequence: Vec<f64> = (0..count)
        .map(|step| {
            let value = rng.gen_uniform();
            if collapsed_at.is_none() && rng.is_degenerate() {
                collapsed_at = Some(step);
            }
            value
        })
        .collect();

    if let Some(step) = collapsed_at {
        warn!(seed, step, "Sequence collapsed to zero");
    }

    report::write_sequence(out, seed, &sequence)
}
