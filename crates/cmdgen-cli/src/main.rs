//! protoc-gen-cmd - protoc plugin for command-oriented protocols
//!
//! Invoked by protoc with no arguments: reads a `CodeGeneratorRequest` from
//! stdin and writes a `CodeGeneratorResponse` to stdout.
//!
//! The debug flags allow running it by hand on a captured request:
//! - `--input` / `--output` replace stdin / stdout
//! - `--parameter` overrides the parameter string carried in the request
//! - `--config` layers a TOML options file under the parameter string
//! - `--describe` prints the normalized model and command ids as JSON

use clap::Parser;
use std::path::PathBuf;

mod logging;
mod run;

#[derive(Parser)]
#[command(name = "protoc-gen-cmd")]
#[command(author, version, about = "protoc plugin for command-oriented protocols", long_about = None)]
struct Cli {
    /// Read the encoded request from a file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Write the encoded response to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Parameter string, replacing the one in the request (e.g. "cmd,pack,usetabs")
    #[arg(short, long)]
    parameter: Option<String>,

    /// TOML file with default generator options
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the normalized files and their command ids as JSON
    #[arg(long)]
    describe: bool,

    /// Log filter directive (e.g. "debug", "cmdgen_emit=trace")
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(cli.log_level.as_deref())?;

    let invocation = run::Invocation {
        input: cli.input,
        output: cli.output,
        parameter: cli.parameter,
        config: cli.config,
        describe: cli.describe,
    };
    run::run(&invocation)
}
