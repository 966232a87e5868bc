use std::fmt;

use clap::Args;
use serde::Serialize;

use drillbox::arithmetic::{self, Number, Operation};
use drillbox::LineSource;

use super::{arg_or_prompt, CmdResult, GlobalArgs};

#[derive(Args, Debug, Default)]
pub struct CalcArgs {
    /// First number
    #[arg(allow_negative_numbers = true)]
    pub a: Option<String>,

    /// Second number
    #[arg(allow_negative_numbers = true)]
    pub b: Option<String>,

    /// Operation: +, -, *, /, //, %, ** (also x and pow)
    pub op: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CalcOutput {
    pub a: Number,
    pub b: Number,
    pub operation: Operation,
    pub result: Number,
}

impl fmt::Display for CalcOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Result:\n{}", self.result)
    }
}

pub fn run(
    args: CalcArgs,
    _global: &GlobalArgs,
    lines: &mut dyn LineSource,
) -> CmdResult<CalcOutput> {
    let raw_a = arg_or_prompt(args.a, lines, "Enter the first number: ")?;
    let a = arithmetic::parse_number(&raw_a)?;

    let raw_b = arg_or_prompt(args.b, lines, "Enter the second number: ")?;
    let b = arithmetic::parse_number(&raw_b)?;

    let op_prompt = format!("Choose the operation ({}): ", Operation::SUPPORTED);
    let operation = Operation::parse(&arg_or_prompt(args.op, lines, &op_prompt)?)?;

    let result = arithmetic::perform_operation(a, b, operation)?;

    Ok((
        CalcOutput {
            a,
            b,
            operation,
            result,
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
    fn prompted_division() {
        let mut lines = ScriptedLines::new(["10", "3", "/"]);
        let (output, _) = run(CalcArgs::default(), &global(), &mut lines).unwrap();
        assert_eq!(output.to_string(), "Result:\n3.3333333333333335");
    }

    #[test]
    fn bad_first_number_stops_before_more_prompts() {
        let mut lines = ScriptedLines::new(["ten", "3", "+"]);
        let err = run(CalcArgs::default(), &global(), &mut lines).unwrap_err();
        assert_eq!(err.code.as_str(), "validation.invalid_input");
        assert_eq!(lines.prompts().len(), 1);
    }

    #[test]
    fn division_by_zero_is_reported() {
        let args = CalcArgs {
            a: Some("5".into()),
            b: Some("0".into()),
            op: Some("//".into()),
        };
        let err = run(args, &global(), &mut ScriptedLines::empty()).unwrap_err();
        assert_eq!(err.code.as_str(), "arithmetic.division_by_zero");
        assert_eq!(err.message, "Integer division by zero");
    }

    #[test]
    fn unknown_operation_is_reported() {
        let args = CalcArgs {
            a: Some("5".into()),
            b: Some("2".into()),
            op: Some("^".into()),
        };
        let err = run(args, &global(), &mut ScriptedLines::empty()).unwrap_err();
        assert_eq!(err.message, "unknown operation: ^");
    }

    #[test]
    fn serializes_operands_and_symbol() {
        let args = CalcArgs {
            a: Some("-7".into()),
            b: Some("2".into()),
            op: Some("%".into()),
        };
        let (output, _) = run(args, &global(), &mut ScriptedLines::empty()).unwrap();
        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["operation"], "%");
        assert_eq!(value["result"], 1);
        assert_eq!(value["a"], -7);
    }
}
