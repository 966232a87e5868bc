use std::fmt;

use clap::Args;
use serde::Serialize;

use drillbox::average;
use drillbox::LineSource;

use super::{CmdResult, GlobalArgs};

const NOTE_PROMPTS: [&str; 3] = [
    "Enter the first note: ",
    "Enter the second note: ",
    "Enter the third note: ",
];

#[derive(Args, Debug, Default)]
pub struct AverageArgs {
    /// Exactly three notes; any other count prompts for all three
    #[arg(value_name = "NOTE", allow_negative_numbers = true)]
    pub notes: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AverageOutput {
    pub notes: [f64; 3],
    pub average: f64,
    pub formatted: String,
}

impl fmt::Display for AverageOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Average: {}", self.formatted)
    }
}

pub fn run(
    args: AverageArgs,
    _global: &GlobalArgs,
    lines: &mut dyn LineSource,
) -> CmdResult<AverageOutput> {
    let mut notes = [0.0; 3];

    if args.notes.len() == notes.len() {
        for (slot, raw) in notes.iter_mut().zip(&args.notes) {
            *slot = average::parse_note(raw)?;
        }
    } else {
        if !args.notes.is_empty() {
            crate::tty::status(&format!(
                "Expected 3 notes, got {}; asking for each one instead",
                args.notes.len()
            ));
        }
        for (slot, prompt) in notes.iter_mut().zip(NOTE_PROMPTS) {
            *slot = average::parse_note(&lines.read_line_or_empty(prompt)?)?;
        }
    }

    let value = average::calculate_average(notes[0], notes[1], notes[2]);

    Ok((
        AverageOutput {
            notes,
            average: value,
            formatted: average::format_average(value),
        },
        0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use drillbox::ScriptedLines;

    fn global() -> GlobalArgs {
        GlobalArgs { json: false }
    }

    #[test]
    fn three_arguments() {
        let args = AverageArgs {
            notes: vec!["8.5".into(), "7".into(), "9".into()],
        };
        let mut lines = ScriptedLines::empty();
        let (output, _) = run(args, &global(), &mut lines).unwrap();
        assert_eq!(output.to_string(), "Average: 8.17");
        assert!(lines.prompts().is_empty());
    }

    #[test]
    fn wrong_count_prompts_for_all_three() {
        let args = AverageArgs {
            notes: vec!["1".into(), "2".into()],
        };
        let mut lines = ScriptedLines::new(["10", "5", "6"]);
        let (output, _) = run(args, &global(), &mut lines).unwrap();
        assert_eq!(output.formatted, "7.00");
        assert_eq!(lines.prompts(), NOTE_PROMPTS);
    }

    #[test]
    fn invalid_note_stops_prompting() {
        let mut lines = ScriptedLines::new(["8", "eight", "9"]);
        let err = run(AverageArgs::default(), &global(), &mut lines).unwrap_err();
        assert_eq!(err.message, average::INVALID_NUMBER);
        assert_eq!(lines.remaining(), 1);
    }
}
