use std::fmt;

use clap::Args;
use serde::Serialize;

use drillbox::palindrome::{self, PalindromeCheck};
use drillbox::{Error, LineSource};

use super::{CmdResult, GlobalArgs};

#[derive(Args, Debug, Default)]
pub struct PalindromeArgs {
    /// Word or phrase; several words are joined with spaces
    #[arg(value_name = "WORDS")]
    pub words: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PalindromeOutput {
    pub input: String,
    #[serde(flatten)]
    pub check: PalindromeCheck,
}

impl fmt::Display for PalindromeOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.check.is_palindrome {
            writeln!(f, "Result: It is a palindrome!")?;
        } else {
            writeln!(f, "Result: It is not a palindrome.")?;
        }
        write!(
            f,
            "(Normalized form used for the check: '{}')",
            self.check.normalized
        )
    }
}

pub fn run(
    args: PalindromeArgs,
    _global: &GlobalArgs,
    lines: &mut dyn LineSource,
) -> CmdResult<PalindromeOutput> {
    let input = if args.words.is_empty() {
        lines
            .read_line_or_empty("Enter a word or phrase: ")?
            .trim()
            .to_string()
    } else {
        args.words.join(" ")
    };

    if input.is_empty() {
        return Err(Error::validation_invalid_input(
            "text",
            "empty input, please enter a word or phrase.",
            None,
        ));
    }

    let check = palindrome::check(&input);
    Ok((PalindromeOutput { input, check }, 0))
}
