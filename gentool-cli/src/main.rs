//! gentool CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use gentool::observability;
use gentool_cli_lib::{GenerateCommand, GenerationTypeArg};

#[derive(Parser)]
#[command(name = "gentool")]
#[command(version)]
#[command(
    about = "Generate a module or CRUD package from an example directory",
    long_about = "Copies the example directory into <GEN_DIR>/<name><suffix> and replaces \
                  the placeholder tokens (Example, CrudExample, ...) in file names and \
                  file contents with the given domain name."
)]
struct Cli {
    /// Example (template) directory to copy
    src_dir: PathBuf,

    /// Directory the generated module or package is created in
    gen_dir: PathBuf,

    /// What to generate (asked interactively when omitted)
    #[arg(short = 't', long = "type", value_enum)]
    gen_type: Option<GenerationTypeArg>,

    /// Domain name replacing the placeholders (asked interactively when omitted)
    #[arg(short, long)]
    name: Option<String>,

    /// Configuration file layered over ./gentool.toml
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Copy straight into the target directory instead of staging
    #[arg(long)]
    no_staging: bool,

    /// Delay between progress bar ticks (0 disables the bar)
    #[arg(long, value_name = "MS")]
    progress_delay_ms: Option<u64>,

    /// Verbose logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl From<Cli> for GenerateCommand {
    fn from(cli: Cli) -> Self {
        Self {
            src_dir: cli.src_dir,
            gen_dir: cli.gen_dir,
            gen_type: cli.gen_type.map(Into::into),
            name: cli.name,
            config: cli.config,
            no_staging: cli.no_staging,
            progress_delay_ms: cli.progress_delay_ms,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    observability::init(cli.verbose)?;

    let cmd = GenerateCommand::from(cli);
    cmd.execute()?;

    Ok(())
}
