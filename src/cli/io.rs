//! JSON output for the CLI
//!
//! - One JSON object per command on stdout
//! - `status` is `ok`, `rejected`, `blocked` or `error`
//! - Logs go to stderr and never mix with responses

use std::io::{self, Write};

use serde_json::{json, Value};

use super::errors::CliResult;
use crate::gates::Rejection;

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    emit(&mut io::stdout(), &ok_body(data))
}

/// Write a gate rejection to stdout. The user re-answers `stage`.
pub fn write_rejected(rejection: &Rejection) -> CliResult<()> {
    emit(&mut io::stdout(), &rejected_body(rejection))
}

/// Write a Gate 1 block to stdout. Nothing was recorded.
pub fn write_blocked(data: Value) -> CliResult<()> {
    emit(&mut io::stdout(), &json!({ "status": "blocked", "data": data }))
}

/// Write an error response to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    emit(&mut io::stdout(), &error_body(code, message))
}

fn ok_body(data: Value) -> Value {
    json!({ "status": "ok", "data": data })
}

fn rejected_body(rejection: &Rejection) -> Value {
    json!({
        "status": "rejected",
        "code": Rejection::CODE,
        "stage": rejection.stage.as_str(),
        "reason": rejection.reason.as_str(),
        "message": rejection.reason.to_string(),
    })
}

fn error_body(code: &str, message: &str) -> Value {
    json!({ "status": "error", "code": code, "message": message })
}

fn emit<W: Write>(out: &mut W, body: &Value) -> CliResult<()> {
    serde_json::to_writer(&mut *out, body)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
