//! CLI command implementations
//!
//! Each invocation loads the config, opens (or creates) one day's record,
//! runs a single controller call and saves the updated record only when
//! the controller handed one back.

use std::fs;
use std::path::Path;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config::EngineConfig;
use crate::enforcement::{
    DailyOutcome, EntryOutcome, InsightOutcome, IntentionOutcome, LoopController, StateOutcome,
};
use crate::gates::{ChainAnswers, ChainVerdict, DailyPrompt, DebugAnswers, Rejection, ResetAction};
use crate::language::Verdict;
use crate::model::DayRecord;
use crate::observability::{log_event, Event, Logger, Severity};
use crate::store::JournalStore;

use super::args::{ChainArgs, Cli, Command, DebugArgs};
use super::errors::{CliError, CliResult};
use super::io::{write_blocked, write_error, write_rejected, write_response};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Journal directory (required)
    pub data_dir: String,

    /// Gate thresholds and detector policy (optional)
    #[serde(default)]
    pub engine: EngineConfig,

    /// Lowest severity written to stderr (optional, default "info")
    #[serde(default = "default_log_level")]
    pub log_level: Severity,
}

fn default_log_level() -> Severity {
    Severity::Info
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.data_dir.trim().is_empty() {
            return Err(CliError::config_error("data_dir must not be empty"));
        }
        self.engine.validate()?;
        Ok(())
    }

    /// Get data directory as Path
    pub fn data_path(&self) -> &Path {
        Path::new(&self.data_dir)
    }
}

/// What a command produced, before it is printed.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Ok(Value),
    Rejected(Rejection),
    Blocked(Value),
}

/// One day's working context.
pub struct Session {
    controller: LoopController,
    store: JournalStore,
    date: NaiveDate,
}

impl Session {
    /// `today` bounds what may be changed; `date` defaults to it.
    pub fn new(config: &Config, today: NaiveDate, date: Option<NaiveDate>) -> Self {
        Self {
            controller: LoopController::new(&config.engine, today),
            store: JournalStore::new(config.data_path()),
            date: date.unwrap_or(today),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    fn day(&self) -> CliResult<DayRecord> {
        Ok(self.store.open_or_create(self.date, &self.controller)?)
    }

    /// Save `record` and render it for the response.
    fn commit(&self, record: &DayRecord) -> CliResult<Value> {
        self.store.save(record)?;
        Ok(serde_json::to_value(record)?)
    }

    /// Run one command against the session's day.
    pub fn execute(&self, command: Command) -> CliResult<Response> {
        match command {
            Command::CheckText { text } => Ok(self.check_text(&text)),
            Command::Intention { text } => self.intention(&text),
            Command::State { score } => self.state(score),
            Command::Chain { chain } => self.chain(&chain),
            Command::Entry { chain, edge, debug } => self.entry(&chain, edge, &debug),
            Command::Coherence { answer } => self.coherence(answer.consistent),
            Command::Insight {
                text,
                revised,
                not_concrete,
            } => self.insight(&text, !not_concrete, revised.as_deref()),
            Command::Show => self.show(),
            Command::ResetDay => self.reset_day(),
        }
    }

    fn check_text(&self, text: &str) -> Response {
        match self.controller.chain_gate().detector().check(text) {
            Verdict::Accepted => Response::Ok(json!({ "verdict": "accepted" })),
            Verdict::Rejected(reason) => Response::Ok(json!({
                "verdict": "rejected",
                "reason": reason.to_string(),
            })),
        }
    }

    fn intention(&self, text: &str) -> CliResult<Response> {
        match self.controller.set_intention(&self.day()?, text)? {
            IntentionOutcome::Set { record } => Ok(Response::Ok(self.commit(&record)?)),
            IntentionOutcome::Rejected(rejection) => Ok(Response::Rejected(rejection)),
        }
    }

    fn state(&self, score: i64) -> CliResult<Response> {
        match self.controller.evaluate_state(&self.day()?, score)? {
            StateOutcome::Pass { record } => Ok(Response::Ok(self.commit(&record)?)),
            StateOutcome::Blocked {
                score,
                reset_options,
            } => Ok(Response::Blocked(json!({
                "score": score.value(),
                "reset_options": reset_json(reset_options),
            }))),
        }
    }

    fn chain(&self, args: &ChainArgs) -> CliResult<Response> {
        let verdict =
            self.controller
                .check_chain(&self.day()?, args.category, &chain_answers(args))?;
        match verdict {
            ChainVerdict::Accepted(chain) => Ok(Response::Ok(json!({
                "category": chain.category().label(),
                "attention": chain.attention(),
                "action": chain.action(),
                "result": chain.result(),
            }))),
            ChainVerdict::Rejected(rejection) => Ok(Response::Rejected(rejection)),
        }
    }

    fn entry(&self, args: &ChainArgs, edge: i64, debug: &DebugArgs) -> CliResult<Response> {
        let outcome = self.controller.record_entry(
            &self.day()?,
            args.category,
            &chain_answers(args),
            edge,
            &debug_answers(debug),
        )?;
        match outcome {
            EntryOutcome::Committed {
                record,
                daily_check_due,
            } => {
                let prompt = self.controller.daily_coherence_prompt(&record);
                Ok(Response::Ok(json!({
                    "record": self.commit(&record)?,
                    "daily_check_due": daily_check_due,
                    "daily_prompt": prompt.as_ref().map(prompt_json),
                })))
            }
            EntryOutcome::Rejected(rejection) => Ok(Response::Rejected(rejection)),
        }
    }

    fn coherence(&self, consistent: bool) -> CliResult<Response> {
        match self.controller.daily_coherence(&self.day()?, consistent)? {
            DailyOutcome::Consistent { record } => Ok(Response::Ok(json!({
                "verdict": "consistent",
                "record": self.commit(&record)?,
            }))),
            DailyOutcome::Inconsistent {
                record,
                reset_options,
            } => Ok(Response::Ok(json!({
                "verdict": "inconsistent",
                "reset_options": reset_json(reset_options),
                "record": self.commit(&record)?,
            }))),
            DailyOutcome::AlreadyChecked => {
                Ok(Response::Ok(json!({ "verdict": "already_checked" })))
            }
        }
    }

    fn insight(&self, text: &str, concrete: bool, revised: Option<&str>) -> CliResult<Response> {
        match self
            .controller
            .record_insight(&self.day()?, text, concrete, revised)?
        {
            InsightOutcome::Kept { record } => Ok(Response::Ok(json!({
                "verdict": "kept",
                "record": self.commit(&record)?,
            }))),
            InsightOutcome::Dropped => Ok(Response::Ok(json!({ "verdict": "dropped" }))),
        }
    }

    fn show(&self) -> CliResult<Response> {
        let day = self.day()?;
        let prompt = self.controller.daily_coherence_prompt(&day);
        Ok(Response::Ok(json!({
            "record": serde_json::to_value(&day)?,
            "daily_prompt": prompt.as_ref().map(prompt_json),
        })))
    }

    fn reset_day(&self) -> CliResult<Response> {
        let record = self.controller.reset_day(&self.day()?)?;
        Ok(Response::Ok(self.commit(&record)?))
    }
}

fn chain_answers(args: &ChainArgs) -> ChainAnswers {
    ChainAnswers::new(
        args.attention.as_str(),
        args.action.as_str(),
        args.result.as_str(),
        !args.deny,
    )
}

fn debug_answers(args: &DebugArgs) -> DebugAnswers {
    DebugAnswers {
        bad_result: args.bad_result.clone(),
        wrong_action: args.wrong_action.clone(),
        wrong_words: args.wrong_words.clone(),
        wrong_attention: args.wrong_attention.clone(),
        root_cause_state: args.root_cause.clone(),
    }
}

fn reset_json(options: &[ResetAction]) -> Vec<Value> {
    options
        .iter()
        .map(|a| json!({ "action": a.as_str(), "description": a.description() }))
        .collect()
}

fn prompt_json(prompt: &DailyPrompt) -> Value {
    let completed: Vec<&str> = prompt.completed.iter().map(|c| c.label()).collect();
    json!({ "intention": prompt.intention, "completed": completed })
}

/// Main CLI entry point
///
/// Parses arguments, runs the command and prints exactly one response.
/// An error is printed as a response too, then returned so `main` can
/// exit non-zero.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    match run_command(&cli.config, cli.date, cli.command) {
        Ok(()) => Ok(()),
        Err(e) => {
            write_error(e.code_str(), e.message())?;
            Err(e)
        }
    }
}

/// Load config and run one command for `date` (today when `None`).
pub fn run_command(
    config_path: &Path,
    date: Option<NaiveDate>,
    command: Command,
) -> CliResult<()> {
    let config = Config::load(config_path)?;
    Logger::set_min_severity(config.log_level);
    log_event(
        Event::ConfigLoaded,
        &[("data_dir", config.data_dir.as_str())],
    );

    let session = Session::new(&config, Local::now().date_naive(), date);
    match session.execute(command)? {
        Response::Ok(data) => write_response(data),
        Response::Rejected(rejection) => write_rejected(&rejection),
        Response::Blocked(data) => write_blocked(data),
    }
}
