//! CLI response formatting and output.
//!
//! Provides the plain-text renderer, the JSON envelope, and exit code mapping.

use drillbox::error::Hint;
use drillbox::{Error, ErrorCode, Result};
use serde::Serialize;
use std::fmt::Display;
use std::io::{self, Write};

#[derive(Debug, Serialize)]
pub struct CliResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CliError>,
}

#[derive(Debug, Serialize)]
pub struct CliError {
    pub code: String,
    pub message: String,
    pub details: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hints: Option<Vec<Hint>>,
}

impl<T: Serialize> CliResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            Error::internal_json(e.to_string(), Some("serialize response".to_string()))
        })
    }
}

impl CliResponse<()> {
    pub fn from_error(err: &Error) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(CliError {
                code: err.code.as_str().to_string(),
                message: err.message.clone(),
                details: err.details.clone(),
                hints: if err.hints.is_empty() {
                    None
                } else {
                    Some(err.hints.clone())
                },
            }),
        }
    }
}

fn write_line(mut handle: impl Write, payload: &str, context: &str) -> Result<()> {
    if let Err(e) = writeln!(handle, "{}", payload) {
        if e.kind() == io::ErrorKind::BrokenPipe {
            return Ok(()); // Exit gracefully on SIGPIPE
        }
        return Err(Error::internal_io(e.to_string(), Some(context.to_string())));
    }
    Ok(())
}

fn print_response<T: Serialize>(response: &CliResponse<T>) -> Result<()> {
    let payload = response.to_json()?;
    write_line(io::stdout().lock(), &payload, "write stdout")
}

pub fn print_success<T: Serialize>(data: T) -> Result<()> {
    print_response(&CliResponse::success(data))
}

pub fn print_json_result(result: Result<serde_json::Value>) -> Result<()> {
    match result {
        Ok(data) => print_success(data),
        Err(err) => print_response(&CliResponse::<()>::from_error(&err)),
    }
}

pub fn map_cmd_result_to_json<T: Serialize>(
    result: Result<(T, i32)>,
) -> (Result<serde_json::Value>, i32) {
    match result {
        Ok((data, exit_code)) => match serde_json::to_value(data) {
            Ok(value) => (Ok(value), exit_code),
            Err(err) => (
                Err(Error::internal_json(
                    err.to_string(),
                    Some("serialize response".to_string()),
                )),
                1,
            ),
        },
        Err(err) => {
            let exit_code = exit_code_for_error(err.code);
            (Err(err), exit_code)
        }
    }
}

/// Bad operator data is reported and treated as a normal run; a missing value
/// file is a caller mistake and gets its own status.
pub fn exit_code_for_error(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::ValidationInvalidInput | ErrorCode::ArithmeticDivisionByZero => 0,

        ErrorCode::InputFileNotFound => 2,

        ErrorCode::InternalIoError
        | ErrorCode::InternalJsonError
        | ErrorCode::InternalUnexpected => 1,
    }
}

/// One human-readable line for an error in plain-text mode.
pub fn error_line(err: &Error) -> String {
    match err.code {
        ErrorCode::ValidationInvalidInput => format!("Invalid input: {}", err.message),
        ErrorCode::InputFileNotFound => err.message.clone(),
        _ => match err.details.get("error").and_then(|e| e.as_str()) {
            Some(cause) => format!("Error: {} ({})", err.message, cause),
            None => format!("Error: {}", err.message),
        },
    }
}

/// Print a command result as plain text and return the exit code.
///
/// User-input errors go to stdout like any other answer; everything else goes
/// to stderr.
pub fn print_text_result<T: Display>(result: Result<(T, i32)>) -> i32 {
    let outcome = match result {
        Ok((data, exit_code)) => {
            write_line(io::stdout().lock(), &data.to_string(), "write stdout").map(|_| exit_code)
        }
        Err(err) => {
            let exit_code = exit_code_for_error(err.code);
            let line = error_line(&err);
            let written = if err.code.is_user_input() {
                write_line(io::stdout().lock(), &line, "write stdout")
            } else {
                write_line(io::stderr().lock(), &line, "write stderr")
            };
            written.map(|_| exit_code)
        }
    };

    outcome.unwrap_or_else(|err| {
        eprintln!("{}", error_line(&err));
        1
    })
}

/// Render a command result in the requested mode and return the exit code.
pub fn emit<T: Serialize + Display>(result: Result<(T, i32)>, json: bool) -> i32 {
    if !json {
        return print_text_result(result);
    }

    let (json_result, exit_code) = map_cmd_result_to_json(result);
    match print_json_result(json_result) {
        Ok(()) => exit_code,
        Err(err) => {
            eprintln!("{}", error_line(&err));
            1
        }
    }
}
