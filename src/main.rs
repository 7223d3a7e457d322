use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use tracing_subscriber::EnvFilter;

use cedict_json::{PinyinEngine, convert_file};

/// CLI arguments
#[derive(Parser)]
#[command(name = "cedict-json")]
#[command(about = "Parse CC-CEDICT dictionary files and convert them to JSON")]
#[command(version)]
struct Cli {
    /// Path to the input CC-CEDICT file
    #[arg(env = "CEDICT_INPUT")]
    input_dict_path: PathBuf,

    /// Path to the output JSON file
    #[arg(env = "CEDICT_OUTPUT")]
    output_path: PathBuf,

    /// Only report warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_logging(cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // also installs the `log` bridge the library logs through
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let summary = convert_file(&cli.input_dict_path, &cli.output_path, PinyinEngine::new())
        .with_context(|| format!("failed to convert '{}'", cli.input_dict_path.display()))?;

    if summary.warnings > 0 {
        info!(
            "{} of {} lines could not be parsed",
            summary.warnings, summary.lines_read
        );
    }
    Ok(())
}
