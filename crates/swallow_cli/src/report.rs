//! Human-readable and JSON rendering of pipeline results.

use std::io::Write;

use swallow_core::pipeline::PipelineOutcome;
use swallow_core::sim::{AnsweredQuestion, Question, SimulationResult};
use swallow_core::stats::UniformityVerdict;

use crate::Result;

const SEPARATOR_WIDTH: usize = 30;

/// Banner printed before generation.
pub fn write_generation_banner<W: Write>(out: &mut W) -> Result<()> {
    writeln!(
        out,
        "Generating pseudo-random numbers with the von Neumann middle-square method..."
    )?;
    Ok(())
}

/// Chi-square statistic, critical value and the verdict sentence.
pub fn write_verdict<W: Write>(out: &mut W, verdict: &UniformityVerdict) -> Result<()> {
    writeln!(
        out,
        "\nRunning the chi-square test to check the uniformity of the generated numbers..."
    )?;
    writeln!(out, "\nObserved chi-square: {:.4}", verdict.statistic)?;
    writeln!(out, "Critical value: {}", verdict.critical_value)?;
    if verdict.passed {
        writeln!(
            out,
            "\nThe null hypothesis is not rejected: the generated numbers follow a uniform distribution."
        )?;
    } else {
        writeln!(
            out,
            "\nThe null hypothesis is rejected: the generated numbers do not follow a uniform distribution."
        )?;
    }
    Ok(())
}

/// Line printed when the gate rejects the sequence.
pub fn write_rejection<W: Write>(out: &mut W) -> Result<()> {
    writeln!(
        out,
        "\nThe simulation cannot start because the generated numbers do not follow a uniform distribution."
    )?;
    Ok(())
}

/// Line printed before the simulation loop.
pub fn write_simulation_start<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\nStarting survey response simulation...")?;
    Ok(())
}

/// Progress line printed before waiting on a question.
pub fn write_answering<W: Write>(out: &mut W, question: &Question) -> Result<()> {
    writeln!(out, "\nAnswering question: {}", question)?;
    out.flush()?;
    Ok(())
}

/// Answer and measured time for one question, followed by a separator.
pub fn write_answered<W: Write>(out: &mut W, record: &AnsweredQuestion) -> Result<()> {
    writeln!(out, "Answer: {}", record.answer)?;
    writeln!(
        out,
        "Response time: {:.2} seconds",
        record.response_time_seconds
    )?;
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH))?;
    Ok(())
}

/// Final results list and total elapsed time.
pub fn write_summary<W: Write>(out: &mut W, result: &SimulationResult) -> Result<()> {
    writeln!(out, "Simulation complete.")?;
    writeln!(out, "\nSimulated survey results:")?;
    for record in result {
        writeln!(out, "- {}: ", record.question)?;
        writeln!(
            out,
            "   > Answer: {}, Response time: {:.2} seconds",
            record.answer, record.response_time_seconds
        )?;
    }
    writeln!(
        out,
        "\nTotal simulation time: {:.2} seconds",
        result.total_elapsed_seconds
    )?;
    Ok(())
}

/// Generated values, one per line with its index.
pub fn write_sequence<W: Write>(out: &mut W, seed: u64, sequence: &[f64]) -> Result<()> {
    writeln!(out, "Seed: {}", seed)?;
    for (index, value) in sequence.iter().enumerate() {
        writeln!(out, "{:>4}  {:.4}", index, value)?;
    }
    Ok(())
}

/// Pretty-printed JSON of a pipeline outcome.
pub fn render_json(outcome: &PipelineOutcome) -> Result<String> {
    Ok(serde_json::to_string_pretty(outcome)?)
}
