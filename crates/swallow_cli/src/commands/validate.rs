//! Validate command implementation
//!
//! Generates a sequence and runs the uniformity gate on it, without
//! simulating any answers.

use std::io::Write;

use swallow_core::rng::generate;
use swallow_core::stats::{validate, UniformityVerdict};
use tracing::info;

use crate::config::{OutputFormat, SimConfig};
use crate::report;
use crate::Result;

/// Run the validate command
///
/// `count` defaults to the number of configured questions.
pub fn run(config: &SimConfig, count: Option<usize>) -> Result<()> {
    let seed = super::resolve_seed(config);
    let count = count.unwrap_or_else(|| config.questions().len());
    let stdout = std::io::stdout();
    let verdict = write_validation(seed, count, config.format, &mut stdout.lock())?;
    info!(
        seed,
        count,
        statistic = verdict.statistic,
        passed = verdict.passed,
        "Uniformity gate evaluated"
    );
    Ok(())
}

/// Generates and validates, writing the verdict in `format` to `out`.
pub fn write_validation<W: Write>(
    seed: u64,
    count: usize,
    format: OutputFormat,
    out: &mut W,
) -> Result<UniformityVerdict> {
    let sequence = generate(count, seed);
    let verdict = validate(&sequence);

    match format {
        OutputFormat::Text => {
            report::write_generation_banner(out)?;
            report::write_sequence(out, seed, &sequence)?;
            report::write_verdict(out, &verdict)?;
            writeln!(
                out,
                "Buckets: {} below 0.5, {} at or above 0.5",
                verdict.below, verdict.above
            )?;
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&verdict)?)?;
        }
    }
    Ok(verdict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_validation_text() {
        let mut buffer = Vec::new();
        let verdict = write_validation(0, 4, OutputFormat::Text, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert_relative_eq!(verdict.statistic, 4.0);
        assert!(!verdict.passed);
        assert!(text.contains("Buckets: 4 below 0.5, 0 at or above 0.5"));
    }

    #[test]
    fn test_validation_json() {
        let mut buffer = Vec::new();
        write_validation(1234, 7, OutputFormat::Json, &mut buffer).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(value["passed"], true);
        assert_eq!(value["below"], 6);
        assert_eq!(value["above"], 1);
    }

    #[test]
    fn test_validation_empty_sequence_passes() {
        let mut buffer = Vec::new();
        let verdict = write_validation(5, 0, OutputFormat::Json, &mut buffer).unwrap();
        assert!(verdict.passed);
        assert_eq!(verdict.statistic, 0.0);
    }
}
