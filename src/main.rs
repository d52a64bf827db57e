//! zenloop CLI entry point
//!
//! Parses nothing and opens nothing itself. All logic lives in the CLI
//! module; `main` only maps failure to a non-zero exit.

use zenloop::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
