use std::fmt;

use clap::Args;
use serde::Serialize;

use drillbox::parity::{self, ParityCheck};
use drillbox::LineSource;

use super::{arg_or_prompt, CmdResult, GlobalArgs};

#[derive(Args, Debug, Default)]
pub struct ParityArgs {
    /// Integer to check (prompted for when omitted)
    #[arg(allow_negative_numbers = true)]
    pub number: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParityOutput {
    #[serde(flatten)]
    pub check: ParityCheck,
    pub parity: &'static str,
}

impl fmt::Display for ParityOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is {}.", self.check.number, self.parity)
    }
}

pub fn run(
    args: ParityArgs,
    _global: &GlobalArgs,
    lines: &mut dyn LineSource,
) -> CmdResult<ParityOutput> {
    let raw = arg_or_prompt(args.number, lines, "Enter an integer: ")?;
    let check = parity::check_number(&raw)?;
    let parity = check.label();

    Ok((ParityOutput { check, parity }, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use drillbox::ScriptedLines;

    fn global() -> GlobalArgs {
        GlobalArgs { json: false }
    }

    #[test]
    fn odd_from_prompt() {
        let mut lines = ScriptedLines::new(["7"]);
        let (output, _) = run(ParityArgs::default(), &global(), &mut lines).unwrap();
        assert_eq!(output.to_string(), "7 is odd.");
    }

    #[test]
    fn even_from_argument() {
        let args = ParityArgs {
            number: Some("-10".into()),
        };
        let (output, _) = run(args, &global(), &mut ScriptedLines::empty()).unwrap();
        assert_eq!(output.to_string(), "-10 is even.");
    }

    #[test]
    fn not_an_integer() {
        let args = ParityArgs {
            number: Some("abc".into()),
        };
        let err = run(args, &global(), &mut ScriptedLines::empty()).unwrap_err();
        assert_eq!(err.message, parity::INVALID_INTEGER);
    }

    #[test]
    fn end_of_input_is_invalid() {
        let err = run(ParityArgs::default(), &global(), &mut ScriptedLines::empty()).unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_input");
    }
}
