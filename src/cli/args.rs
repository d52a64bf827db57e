//! CLI argument definitions using clap
//!
//! Every command works on one day: `--date`, or today when omitted.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::model::Category;

/// zenloop - a strict daily-journaling gate engine
#[derive(Parser, Debug)]
#[command(name = "zenloop")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true, default_value = "./zenloop.json")]
    pub config: PathBuf,

    /// Day to work on (YYYY-MM-DD). Earlier days are read-only.
    #[arg(long, global = true)]
    pub date: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run text through the vague-language detector without recording it
    CheckText { text: String },

    /// Set the day's intention
    Intention { text: String },

    /// Gate 1: rate inner-state clarity (1-10)
    State {
        #[arg(allow_hyphen_values = true)]
        score: i64,
    },

    /// Gate 2 only: validate a chain without recording it
    Chain {
        #[command(flatten)]
        chain: ChainArgs,
    },

    /// Gates 2 and 3: record a category's entry
    Entry {
        #[command(flatten)]
        chain: ChainArgs,

        /// Edge score (1-10); below the debug threshold a trace is required
        #[arg(long, allow_hyphen_values = true)]
        edge: i64,

        #[command(flatten)]
        debug: DebugArgs,
    },

    /// Gate 4: does inner state match today's actions?
    Coherence {
        #[command(flatten)]
        answer: CoherenceAnswer,
    },

    /// Record the day's tiny change
    Insight {
        text: String,

        /// Replacement when the first wording is not concrete
        #[arg(long)]
        revised: Option<String>,

        #[arg(long)]
        not_concrete: bool,
    },

    /// Print the day's record
    Show,

    /// Discard the day's entries and start over
    ResetDay,
}

#[derive(Args, Debug, Clone)]
pub struct ChainArgs {
    #[arg(long)]
    pub category: Category,

    #[arg(long)]
    pub attention: String,

    #[arg(long)]
    pub action: String,

    #[arg(long)]
    pub result: String,

    /// Answer "no" to "can you trace each layer to the previous?"
    #[arg(long)]
    pub deny: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct DebugArgs {
    #[arg(long)]
    pub bad_result: Option<String>,

    #[arg(long)]
    pub wrong_action: Option<String>,

    #[arg(long)]
    pub wrong_words: Option<String>,

    #[arg(long)]
    pub wrong_attention: Option<String>,

    #[arg(long)]
    pub root_cause: Option<String>,
}

#[derive(Args, Debug, Clone, Copy)]
#[group(required = true, multiple = false)]
pub struct CoherenceAnswer {
    #[arg(long)]
    pub consistent: bool,

    #[arg(long)]
    pub inconsistent: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
