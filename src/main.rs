mod cli;
mod commands;
mod formatting;
mod settings;

use std::process::ExitCode;

use commands::run_summarize;

fn main() -> ExitCode {
    let args = match cli::parse() {
        Ok(args) => args,
        Err(err) => return cli::handle_parse_error(err),
    };
    init_logging(args.verbose);

    run_summarize(
        &args.input,
        args.config.as_deref(),
        args.format,
        args.output.as_deref(),
    )
}

/// Logs go to stderr; `RUST_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
