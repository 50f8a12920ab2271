//! Process-startup introspection: arguments, environment, auxiliary vector.
//!
//! Prints the process's argument list and environment, then decodes and
//! dumps the auxiliary vector the loader handed this process. The dump is
//! one `label(key) => value` line per entry by default, or a JSON array
//! with `--format json`.

use clap::Parser;
use procprobe::auxv::{self, DEFAULT_SCAN_LIMIT};
use procprobe::cli::{self, ExitCode, OutputFormat};
use procprobe::source;
use std::env;
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "startup-info",
    version,
    about = "Dump process startup state: args, environment, auxiliary vector"
)]
struct Args {
    /// Output format for the auxiliary-vector section
    #[arg(short = 'f', long = "format", value_enum, default_value_t)]
    format: OutputFormat,

    /// Maximum auxiliary-vector entries to scan before giving up
    #[arg(long = "max-entries", default_value_t = DEFAULT_SCAN_LIMIT)]
    max_entries: usize,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbosity: u8,
}

fn main() {
    let args = Args::parse();
    cli::init_tracing(args.verbosity);
    process::exit(run(&args));
}

fn run(args: &Args) -> i32 {
    let argv: Vec<String> = env::args().collect();
    println!("there are {} args", argv.len());
    for arg in &argv {
        println!("  {arg}");
    }

    let vars: Vec<(String, String)> = env::vars().collect();
    println!("there are {} env vars", vars.len());
    for (key, value) in &vars {
        println!("  {key}={value}");
    }

    let entries = match source::read_self() {
        Ok(entries) => entries,
        Err(err) => {
            tracing::error!(%err, "cannot acquire the auxiliary vector");
            eprintln!("startup-info: {err}");
            return ExitCode::USER_ERROR;
        }
    };
    tracing::debug!(entries = entries.len(), "acquired raw auxiliary vector");

    println!("auxiliary vector");
    match args.format {
        OutputFormat::Human => {
            for result in auxv::decode_with_limit(&entries, args.max_entries) {
                match result {
                    Ok(labeled) => println!("  {labeled}"),
                    Err(err) => {
                        eprintln!("startup-info: {err}");
                        return ExitCode::RUNTIME_ERROR;
                    }
                }
            }
        }
        OutputFormat::Json => {
            let labeled = match auxv::decode_all(&entries, args.max_entries) {
                Ok(labeled) => labeled,
                Err(err) => {
                    eprintln!("startup-info: {err}");
                    return ExitCode::RUNTIME_ERROR;
                }
            };
            match serde_json::to_string_pretty(&labeled) {
                Ok(json) => println!("{json}"),
                Err(err) => {
                    eprintln!("startup-info: serializing entries: {err}");
                    return ExitCode::INTERNAL_ERROR;
                }
            }
        }
    }

    ExitCode::SUCCESS
}
