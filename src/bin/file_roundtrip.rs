//! Elementary file I/O demo: write a greeting, seek back, read it again.

use clap::Parser;
use procprobe::cli::{self, ExitCode};
use procprobe::fsdemo::{self, DEFAULT_PAYLOAD};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "file-roundtrip",
    version,
    about = "Write to a file, seek back, and read the content again"
)]
struct Args {
    /// File to write and read back (default: under the system temp dir)
    path: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbosity: u8,
}

fn main() {
    let args = Args::parse();
    cli::init_tracing(args.verbosity);

    let path = args
        .path
        .unwrap_or_else(|| std::env::temp_dir().join("file-roundtrip.txt"));
    println!("file: {}", path.display());

    match fsdemo::write_seek_read(&path, DEFAULT_PAYLOAD) {
        Ok(outcome) => {
            println!("bytes written: {}", outcome.bytes_written);
            println!("bytes read: {}", outcome.bytes_read);
            println!("read: '{}'", outcome.content);
        }
        Err(err) => {
            eprintln!("file-roundtrip: {}: {err}", path.display());
            process::exit(ExitCode::RUNTIME_ERROR);
        }
    }
}
