use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

pub const USAGE: &str = "Usage: figsum <landing-page.json>";

#[derive(Debug, Parser)]
#[command(name = "figsum")]
#[command(
    version,
    about = "Summarize a Figma landing-page export as ordered, classified text",
    long_about = "figsum\n\nReads a Figma file export (JSON) and prints every text layer in top-to-bottom reading order, tagged HEADING/SUBHEAD/CTA/BODY by font size and shape, with the last few layer names it sits in."
)]
pub struct Cli {
    #[arg(
        value_name = "FILE",
        allow_hyphen_values = true,
        help = "Figma file export (JSON with a top-level `document`)"
    )]
    pub input: PathBuf,

    #[arg(long, value_enum, default_value = "markdown", help = "Output format")]
    pub format: OutputFormat,

    #[arg(long, short, help = "Output file path (stdout if omitted)")]
    pub output: Option<PathBuf>,

    #[arg(long, help = "Enable verbose (debug) logging on stderr")]
    pub verbose: bool,

    #[arg(
        long,
        value_name = "PATH",
        help = "Optional config file (TOML) with classifier thresholds and render settings"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    #[value(alias = "md")]
    Markdown,
    Json,
}

pub fn parse() -> Result<Cli, clap::Error> {
    parse_from(std::env::args_os())
}

pub fn parse_from<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Help and version exit cleanly; every other argument problem prints the usage line
/// to stdout and exits with status 1.
pub fn handle_parse_error(err: clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            ExitCode::SUCCESS
        }
        _ => {
            eprint!("{}", err.render());
            println!("{USAGE}");
            ExitCode::from(1)
        }
    }
}
