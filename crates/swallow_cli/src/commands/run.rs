//! Run command implementation
//!
//! Generates the sequence, applies the uniformity gate and, when it passes,
//! simulates the patient answering every question.

use std::io::Write;
use std::ops::ControlFlow;

use swallow_core::pipeline::{PipelineOutcome, SurveyPipeline};
use swallow_core::sim::{SimulationEvent, SystemClock, VirtualClock, Wait};
use tracing::{debug, info, warn};

use crate::config::{ClockMode, OutputFormat, SimConfig};
use crate::report;
use crate::Result;

/// Run the full survey simulation
pub fn run(config: &SimConfig) -> Result<()> {
    let seed = super::resolve_seed(config);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match config.clock {
        ClockMode::Real => execute(config, seed, SystemClock::new(), &mut out),
        ClockMode::Virtual => execute(config, seed, VirtualClock::new(), &mut out),
    }
}

/// Runs the pipeline on `clock`, writing the report to `out`.
pub fn execute<C, W>(config: &SimConfig, seed: u64, clock: C, out: &mut W) -> Result<()>
where
    C: Wait,
    W: Write,
{
    let pipeline = SurveyPipeline::new(config.questions());
    info!(
        seed,
        questions = pipeline.questions().len(),
        clock = %config.clock,
        "Starting survey pipeline"
    );

    let outcome = match config.format {
        OutputFormat::Json => {
            let outcome = pipeline.run(seed, clock)?;
            writeln!(out, "{}", report::render_json(&outcome)?)?;
            outcome
        }
        OutputFormat::Text => run_text(&pipeline, seed, clock, out)?,
    };

    let verdict = outcome.verdict();
    match &outcome {
        PipelineOutcome::Completed { result, .. } => info!(
            statistic = verdict.statistic,
            total_seconds = result.total_elapsed_seconds,
            "Survey simulation completed"
        ),
        PipelineOutcome::Rejected { .. } => warn!(
            statistic = verdict.statistic,
            critical_value = verdict.critical_value,
            "Uniformity gate rejected the sequence"
        ),
    }
    Ok(())
}

/// Streams the human-readable report while the simulation runs.
fn run_text<C, W>(
    pipeline: &SurveyPipeline,
    seed: u64,
    clock: C,
    out: &mut W,
) -> Result<PipelineOutcome>
where
    C: Wait,
    W: Write,
{
    report::write_generation_banner(out)?;

    let gated = pipeline.prepare(seed);
    report::write_verdict(out, &gated.verdict)?;
    if gated.verdict.passed {
        report::write_simulation_start(out)?;
    }

    let mut write_error = None;
    let outcome = pipeline.complete_with(gated, clock, |event| {
        let written = match event {
            SimulationEvent::Answering { question, .. } => report::write_answering(out, question),
            SimulationEvent::Answered { index, record } => {
                debug!(
                    index,
                    answer = %record.answer,
                    seconds = record.response_time_seconds,
                    "Question answered"
                );
                report::write_answered(out, record)
            }
        };
        match written {
            Ok(()) => ControlFlow::Continue(()),
            Err(e) => {
                write_error = Some(e);
                ControlFlow::Break(())
            }
        }
    })?;
    if let Some(e) = write_error {
        return Err(e);
    }

    match &outcome {
        PipelineOutcome::Completed { result, .. } => report::write_summary(out, result)?,
        PipelineOutcome::Rejected { .. } => report::write_rejection(out)?,
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;
    use std::io;

    /// Writer that fails once `marker` is written.
    struct FailingWriter {
        marker: &'static str,
        written: Vec<u8>,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if String::from_utf8_lossy(buf).contains(self.marker) {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn virtual_config(seed: u64, format: OutputFormat) -> SimConfig {
        SimConfig {
            seed: Some(seed),
            clock: ClockMode::Virtual,
            format,
            ..Default::default()
        }
    }

    fn capture(config: &SimConfig) -> String {
        let mut buffer = Vec::new();
        let seed = config.seed.unwrap();
        execute(config, seed, VirtualClock::new(), &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_text_report_completed() {
        let text = capture(&virtual_config(1234, OutputFormat::Text));

        assert!(text.contains("Observed chi-square: 3.5714"));
        assert!(text.contains("Starting survey response simulation..."));
        assert_eq!(text.matches("Answering question:").count(), 7);
        assert!(text.contains("Response time: 15.23 seconds"));
        assert!(text.contains("Total simulation time: 93.57 seconds"));
        assert!(!text.contains("cannot start"));
    }

    #[test]
    fn test_text_report_rejected() {
        let text = capture(&virtual_config(0, OutputFormat::Text));

        assert!(text.contains("Observed chi-square: 7.0000"));
        assert!(text.contains("cannot start"));
        assert!(!text.contains("Answering question:"));
        assert!(!text.contains("Total simulation time"));
    }

    #[test]
    fn test_json_report() {
        let text = capture(&virtual_config(1234, OutputFormat::Json));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["outcome"], "completed");
        assert_eq!(value["result"]["answers"].as_array().unwrap().len(), 7);
        assert_eq!(value["result"]["answers"][0]["answer"], "No");
    }

    #[test]
    fn test_custom_questions_drive_sequence_length() {
        let config = SimConfig {
            questions: vec!["Only one?".to_string()],
            ..virtual_config(1234, OutputFormat::Text)
        };
        let text = capture(&config);

        assert_eq!(text.matches("Answering question: Only one?").count(), 1);
        assert!(text.contains("Answer: No"));
    }

    #[test]
    fn test_write_failure_stops_before_next_wait() {
        let config = virtual_config(1234, OutputFormat::Text);
        let mut clock = VirtualClock::new();
        let mut out = FailingWriter {
            marker: "Answering question",
            written: Vec::new(),
        };

        let err = execute(&config, 1234, &mut clock, &mut out).unwrap_err();

        assert!(matches!(err, CliError::Io(_)));
        assert!(clock.waits() <= 1, "waited {} times", clock.waits());
    }

    #[test]
    fn test_write_failure_after_first_answer_stops_loop() {
        let config = virtual_config(1234, OutputFormat::Text);
        let mut clock = VirtualClock::new();
        let mut out = FailingWriter {
            marker: "Answer: ",
            written: Vec::new(),
        };

        let err = execute(&config, 1234, &mut clock, &mut out).unwrap_err();

        assert!(matches!(err, CliError::Io(_)));
        assert_eq!(clock.waits(), 1);
        let text = String::from_utf8(out.written).unwrap();
        assert!(!text.contains("Total simulation time"));
    }
}
