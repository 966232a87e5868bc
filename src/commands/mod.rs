use drillbox::LineSource;

pub type CmdResult<T> = drillbox::Result<(T, i32)>;

pub(crate) struct GlobalArgs {
    /// Print the JSON envelope instead of plain text
    pub json: bool,
}

pub mod average;
pub mod calc;
pub mod concat;
pub mod palindrome;
pub mod parity;
pub mod repeat;

/// Read `value` from the command line, or ask the operator for it.
pub(crate) fn arg_or_prompt(
    value: Option<String>,
    lines: &mut dyn LineSource,
    prompt: &str,
) -> drillbox::Result<String> {
    match value {
        Some(value) => Ok(value),
        None => lines.read_line_or_empty(prompt),
    }
}

/// Dispatch a command to its handler and render the result.
macro_rules! dispatch {
    ($args:expr, $global:expr, $lines:expr, $module:ident) => {
        crate::output::emit($module::run($args, $global, $lines), $global.json)
    };
}

pub(crate) fn run(
    command: crate::Commands,
    global: &GlobalArgs,
    lines: &mut dyn LineSource,
) -> i32 {
    match command {
        crate::Commands::Concat(args) => dispatch!(args, global, lines, concat),
        crate::Commands::Repeat(args) => dispatch!(args, global, lines, repeat),
        crate::Commands::Calc(args) => dispatch!(args, global, lines, calc),
        crate::Commands::Parity(args) => dispatch!(args, global, lines, parity),
        crate::Commands::Average(args) => dispatch!(args, global, lines, average),
        crate::Commands::Palindrome(args) => dispatch!(args, global, lines, palindrome),
    }
}
