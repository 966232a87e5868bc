use std::fmt;

use clap::Args;
use serde::Serialize;

use drillbox::repeat;
use drillbox::LineSource;

use super::{arg_or_prompt, CmdResult, GlobalArgs};

#[derive(Args, Debug, Default)]
pub struct RepeatArgs {
    /// Text to repeat (prompted for when omitted)
    pub text: Option<String>,

    /// Number of repetitions (prompted for when omitted)
    #[arg(allow_negative_numbers = true)]
    pub times: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RepeatOutput {
    pub text: String,
    pub times: i64,
    pub result: String,
}

impl fmt::Display for RepeatOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Result:\n{}", self.result)
    }
}

pub fn run(
    args: RepeatArgs,
    _global: &GlobalArgs,
    lines: &mut dyn LineSource,
) -> CmdResult<RepeatOutput> {
    let text = arg_or_prompt(args.text, lines, "Enter the text: ")?;
    let raw_times = arg_or_prompt(args.times, lines, "Enter the number of repetitions: ")?;
    let times = repeat::parse_times(&raw_times)?;
    let result = repeat::repeat_text(&text, times)?;

    Ok((RepeatOutput { text, times, result }, 0))
}
