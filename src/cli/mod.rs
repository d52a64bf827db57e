//! CLI module for zenloop
//!
//! One command per invocation, one JSON response on stdout:
//! - check-text: detector only
//! - intention, state: start the day
//! - chain, entry: Gates 2 and 3
//! - coherence: Gate 4
//! - insight, show, reset-day

mod args;
mod commands;
mod errors;
mod io;

pub use args::{ChainArgs, Cli, CoherenceAnswer, Command, DebugArgs};
pub use commands::{run, run_command, Config, Response, Session};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_blocked, write_error, write_rejected, write_response};
