//! Value collection for the concatenation exercise.
//!
//! Values come from `--value` groups and an optional file. When those yield
//! nothing, and the operator may be asked, the collector falls back to a
//! comma-separated prompt and then to two single-value prompts.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::prompt::LineSource;
use crate::utils::{io, parser};

pub const COMMA_PROMPT: &str =
    "Enter values separated by commas (or just ENTER to type two values): ";
pub const FIRST_VALUE_PROMPT: &str = "Enter the first value: ";
pub const SECOND_VALUE_PROMPT: &str = "Enter the second value: ";

/// One step of the fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Flattened `--value` groups followed by file lines.
    Arguments,
    /// A single comma-separated line from the operator.
    CommaPrompt,
    /// Two separate lines from the operator.
    PairPrompt,
}

#[derive(Debug, Clone, Default)]
pub struct ValueCollector {
    groups: Vec<Vec<String>>,
    file: Option<PathBuf>,
    interactive: bool,
}

impl ValueCollector {
    pub fn new(groups: Vec<Vec<String>>) -> Self {
        Self {
            groups,
            file: None,
            interactive: true,
        }
    }

    pub fn with_file(mut self, file: Option<PathBuf>) -> Self {
        self.file = file;
        self
    }

    /// Allow or suppress operator prompts (`--quiet` suppresses them).
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Strategies in the order they are tried.
    pub fn strategies(&self) -> Vec<Strategy> {
        let mut strategies = vec![Strategy::Arguments];
        if self.interactive {
            strategies.push(Strategy::CommaPrompt);
            strategies.push(Strategy::PairPrompt);
        }
        strategies
    }

    /// Run the strategies in order and return the first answer.
    ///
    /// Only a missing value file is an error; running out of sources yields
    /// an empty list.
    pub fn collect(&self, lines: &mut dyn LineSource) -> Result<Vec<String>> {
        for strategy in self.strategies() {
            if let Some(values) = self.provide(strategy, lines)? {
                return Ok(values);
            }
        }
        Ok(Vec::new())
    }

    /// `Ok(None)` means the strategy declined and the next one should run.
    fn provide(
        &self,
        strategy: Strategy,
        lines: &mut dyn LineSource,
    ) -> Result<Option<Vec<String>>> {
        match strategy {
            Strategy::Arguments => {
                let mut values = flatten_groups(&self.groups);
                if let Some(path) = &self.file {
                    values.extend(read_values_file(path)?);
                }
                Ok(if values.is_empty() { None } else { Some(values) })
            }
            Strategy::CommaPrompt => {
                let raw = lines.read_line_or_empty(COMMA_PROMPT)?;
                if raw.is_empty() {
                    Ok(None)
                } else {
                    // A non-empty answer is final, even if every piece was blank.
                    Ok(Some(parser::split_comma_list(&raw)))
                }
            }
            Strategy::PairPrompt => {
                let first = lines.read_line_or_empty(FIRST_VALUE_PROMPT)?;
                let second = lines.read_line_or_empty(SECOND_VALUE_PROMPT)?;
                Ok(Some(vec![first, second]))
            }
        }
    }
}

/// Flatten `--value` groups in encounter order.
///
/// Comma-bearing tokens expand into their trimmed non-empty pieces; every
/// other token is kept verbatim, including empty ones.
pub fn flatten_groups(groups: &[Vec<String>]) -> Vec<String> {
    let mut flat = Vec::new();
    for group in groups {
        for token in group {
            if token.contains(',') {
                flat.extend(parser::split_comma_list(token));
            } else {
                flat.push(token.clone());
            }
        }
    }
    flat
}

/// Read one value per line, removing only the line terminator.
pub fn read_values_file(path: &Path) -> Result<Vec<String>> {
    let expanded = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned());
    crate::log_status!("concat", "Reading values from {}", expanded.display());
    let content = io::read_input_file(&expanded)?;
    Ok(parser::lines_to_vec(&content))
}
