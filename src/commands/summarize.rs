use std::path::Path;
use std::process::ExitCode;

use figsum_lib::{summarize, FigmaExport};

use crate::cli::OutputFormat;
use crate::formatting::{render_body, render_error, write_output};
use crate::settings::{load_config, log_effective_config};

/// Run the summarize command: load, walk, classify, render, write.
pub fn run_summarize(
    input: &Path,
    config_path: Option<&Path>,
    format: OutputFormat,
    output: Option<&Path>,
) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(cfg) => cfg,
        Err(err) => return render_error(err, format),
    };
    log_effective_config(&config, config_path);

    log::debug!("Loading Figma export from {}", input.display());
    let export = match FigmaExport::load(input) {
        Ok(export) => export,
        Err(err) => return render_error(err, format),
    };

    let summary = summarize(&export, &config);
    let body = match render_body(&summary, &config, format) {
        Ok(body) => body,
        Err(err) => return render_error(err, format),
    };

    if let Err(err) = write_output(&body, output) {
        return render_error(err, format);
    }
    ExitCode::SUCCESS
}
