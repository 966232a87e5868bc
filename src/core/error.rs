use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ValidationInvalidInput,

    ArithmeticDivisionByZero,

    InputFileNotFound,

    InternalIoError,
    InternalJsonError,
    InternalUnexpected,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationInvalidInput => "validation.invalid_input",

            ErrorCode::ArithmeticDivisionByZero => "arithmetic.division_by_zero",

            ErrorCode::InputFileNotFound => "input.file_not_found",

            ErrorCode::InternalIoError => "internal.io_error",
            ErrorCode::InternalJsonError => "internal.json_error",
            ErrorCode::InternalUnexpected => "internal.unexpected",
        }
    }

    /// Bad data from the operator, reported and then treated as a normal exit.
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            ErrorCode::ValidationInvalidInput | ErrorCode::ArithmeticDivisionByZero
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
    pub hints: Vec<Hint>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidInputDetails {
    pub field: String,
    pub problem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DivisionByZeroDetails {
    pub operator: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileNotFoundDetails {
    pub path: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalIoErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InternalJsonErrorDetails {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
            hints: Vec::new(),
        }
    }

    /// Unparseable number, unknown operator, negative repeat count and friends.
    ///
    /// `problem` becomes the message, so it should read as a complete sentence
    /// fragment after "Invalid input: ".
    pub fn validation_invalid_input(
        field: impl Into<String>,
        problem: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        let problem = problem.into();
        let details = serde_json::to_value(InvalidInputDetails {
            field: field.into(),
            problem: problem.clone(),
            value,
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(ErrorCode::ValidationInvalidInput, problem, details)
    }

    pub fn division_by_zero(operator: impl Into<String>, message: impl Into<String>) -> Self {
        let details = serde_json::to_value(DivisionByZeroDetails {
            operator: operator.into(),
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(ErrorCode::ArithmeticDivisionByZero, message, details)
    }

    pub fn input_file_not_found(path: impl Into<String>) -> Self {
        let path = path.into();
        let details = serde_json::to_value(FileNotFoundDetails { path: path.clone() })
            .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(
            ErrorCode::InputFileNotFound,
            format!("File not found: {}", path),
            details,
        )
        .with_hint("Pass a path to an existing UTF-8 text file with one value per line")
    }

    pub fn internal_io(error: impl Into<String>, context: Option<String>) -> Self {
        let details = serde_json::to_value(InternalIoErrorDetails {
            error: error.into(),
            context,
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(ErrorCode::InternalIoError, "IO error", details)
    }

    pub fn internal_json(error: impl Into<String>, context: Option<String>) -> Self {
        let details = serde_json::to_value(InternalJsonErrorDetails {
            error: error.into(),
            context,
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(ErrorCode::InternalJsonError, "JSON error", details)
    }

    pub fn internal_unexpected(error: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InternalUnexpected,
            "Unexpected error",
            serde_json::json!({ "error": error.into() }),
        )
    }

    pub fn with_hint(mut self, message: impl Into<String>) -> Self {
        self.hints.push(Hint {
            message: message.into(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_uses_problem_as_message() {
        let err = Error::validation_invalid_input("times", "repeat count must be >= 0", None);
        assert_eq!(err.code.as_str(), "validation.invalid_input");
        assert_eq!(err.message, "repeat count must be >= 0");
        assert_eq!(err.details["field"], "times");
        assert!(err.details.get("value").is_none());
    }

    #[test]
    fn file_not_found_carries_path_and_hint() {
        let err = Error::input_file_not_found("values.txt");
        assert_eq!(err.message, "File not found: values.txt");
        assert_eq!(err.details["path"], "values.txt");
        assert_eq!(err.hints.len(), 1);
    }

    #[test]
    fn user_input_codes() {
        assert!(ErrorCode::ValidationInvalidInput.is_user_input());
        assert!(ErrorCode::ArithmeticDivisionByZero.is_user_input());
        assert!(!ErrorCode::InputFileNotFound.is_user_input());
        assert!(!ErrorCode::InternalIoError.is_user_input());
    }
}
