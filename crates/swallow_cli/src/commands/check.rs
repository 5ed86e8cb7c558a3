//! Check command implementation
//!
//! Prints the effective configuration after all sources are merged.

use std::io::Write;

use tracing::info;

use crate::config::SimConfig;
use crate::Result;

/// Run the check command
pub fn run(config: &SimConfig) -> Result<()> {
    info!("Checking configuration...");
    let stdout = std::io::stdout();
    write_check(config, &mut stdout.lock())?;
    info!("Configuration OK");
    Ok(())
}

/// Writes the effective configuration to `out`.
pub fn write_check<W: Write>(config: &SimConfig, out: &mut W) -> Result<()> {
    config.validate()?;

    match config.seed {
        Some(seed) => writeln!(out, "Seed:       {}", seed)?,
        None => writeln!(out, "Seed:       derived from current time")?,
    }
    writeln!(out, "Clock:      {}", config.clock)?;
    writeln!(out, "Format:     {}", config.format)?;
    writeln!(out, "Log level:  {}", config.log_level)?;

    let questions = config.questions();
    let source = if config.questions.is_empty() {
        "built-in"
    } else {
        "configured"
    };
    writeln!(out, "Questions:  {} ({})", questions.len(), source)?;
    for (index, question) in questions.iter().enumerate() {
        writeln!(out, "  {}. {}", index + 1, question)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;

    #[test]
    fn test_check_defaults() {
        let mut buffer = Vec::new();
        write_check(&SimConfig::default(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("Seed:       derived from current time"));
        assert!(text.contains("Clock:      real"));
        assert!(text.contains("Questions:  7 (built-in)"));
        assert!(text.contains("  7. Did you feel pain or discomfort when swallowing?"));
    }

    #[test]
    fn test_check_rejects_blank_question() {
        let config = SimConfig {
            questions: vec![String::new()],
            ..Default::default()
        };
        let mut buffer = Vec::new();
        let err = write_check(&config, &mut buffer).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }
}
