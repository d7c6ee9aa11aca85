use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use figsum_lib::{render_markdown, Config, FigsumError, LandingSummary, SummaryOutput};

use crate::cli::OutputFormat;

/// Render the whole document in memory; nothing is written until this succeeds.
pub fn render_body(
    summary: &LandingSummary,
    config: &Config,
    format: OutputFormat,
) -> Result<String, FigsumError> {
    match format {
        OutputFormat::Markdown => Ok(render_markdown(summary, &config.render)),
        OutputFormat::Json => {
            let mut content = serde_json::to_string_pretty(&SummaryOutput::from_summary(summary))?;
            content.push('\n');
            Ok(content)
        }
    }
}

/// Write output to file or stdout.
pub fn write_output(body: &str, output: Option<&Path>) -> Result<(), FigsumError> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, body)?;
            log::debug!("Wrote {} bytes to {}", body.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(body.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Report an error on stderr and return the fatal exit code.
pub fn render_error(err: FigsumError, format: OutputFormat) -> ExitCode {
    eprint!("{}", format_error(&err, format));
    // Exit code 1 is reserved for usage errors.
    ExitCode::from(2)
}

pub fn format_error(err: &FigsumError, format: OutputFormat) -> String {
    let payload = err.to_payload();
    match format {
        OutputFormat::Json => {
            let content = serde_json::to_string(&payload)
                .unwrap_or_else(|_| "{\"category\":\"input\"}".into());
            format!("{content}\n")
        }
        OutputFormat::Markdown => match &payload.remediation {
            Some(hint) => format!("Error: {}\nHint: {}\n", payload.message, hint),
            None => format!("Error: {}\n", payload.message),
        },
    }
}
