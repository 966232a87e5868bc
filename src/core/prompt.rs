//! Operator input as an injectable capability.
//!
//! The exercises never touch stdin directly. They ask a [`LineSource`] for one
//! line at a time, which keeps collection logic testable without a terminal.

use std::collections::VecDeque;

use crate::error::Result;

/// Something that can hand back one line of text typed by an operator.
pub trait LineSource {
    /// Show `prompt` and read one line.
    ///
    /// The returned line has its terminator removed. `Ok(None)` means the
    /// input ended before any data was read.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Like [`read_line`](Self::read_line), treating end-of-input as an empty line.
    fn read_line_or_empty(&mut self, prompt: &str) -> Result<String> {
        Ok(self.read_line(prompt)?.unwrap_or_default())
    }
}

/// Replays a fixed script of lines, then reports end-of-input.
///
/// Records every prompt it was shown so callers can assert on the dialogue.
#[derive(Debug, Default)]
pub struct ScriptedLines {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedLines {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// A source that is already at end-of-input.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedLines {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front())
    }
}

/// Strip one trailing line terminator (`\n` or `\r\n`) and nothing else.
pub fn strip_line_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_lines_replays_then_ends() {
        let mut lines = ScriptedLines::new(["first", ""]);
        assert_eq!(lines.read_line("a: ").unwrap().as_deref(), Some("first"));
        assert_eq!(lines.read_line("b: ").unwrap().as_deref(), Some(""));
        assert_eq!(lines.read_line("c: ").unwrap(), None);
        assert_eq!(lines.prompts(), ["a: ", "b: ", "c: "]);
    }

    #[test]
    fn read_line_or_empty_maps_eof_to_empty() {
        let mut lines = ScriptedLines::empty();
        assert_eq!(lines.read_line_or_empty("x: ").unwrap(), "");
    }

    #[test]
    fn strip_line_terminator_keeps_inner_whitespace() {
        assert_eq!(strip_line_terminator("  a b \n"), "  a b ");
        assert_eq!(strip_line_terminator("value\r\n"), "value");
        assert_eq!(strip_line_terminator("no newline"), "no newline");
        assert_eq!(strip_line_terminator("\n"), "");
    }
}
