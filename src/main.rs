use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};

use commands::GlobalArgs;

mod commands;
mod output;
mod tty;

use commands::{average, calc, concat, palindrome, parity, repeat};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "drillbox")]
#[command(version = VERSION)]
#[command(about = "Small single-purpose text and number exercises")]
struct Cli {
    /// Print a JSON envelope instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Concatenate values from flags, a file, or prompts
    Concat(concat::ConcatArgs),
    /// Repeat a text a number of times
    Repeat(repeat::RepeatArgs),
    /// Apply one arithmetic operation to two numbers
    #[command(visible_alias = "calculate")]
    Calc(calc::CalcArgs),
    /// Tell whether an integer is even or odd
    Parity(parity::ParityArgs),
    /// Average three notes
    Average(average::AverageArgs),
    /// Check whether a word or phrase is a palindrome
    Palindrome(palindrome::PalindromeArgs),
}

fn main() -> std::process::ExitCode {
    let matches = Cli::command().get_matches();

    let mut cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(e) => {
            e.exit();
        }
    };

    // Derive flattens repeated `--value` uses; recover the per-use groups.
    if let (Commands::Concat(args), Some(("concat", sub_matches))) =
        (&mut cli.command, matches.subcommand())
    {
        args.groups = concat::value_groups(sub_matches);
    }

    let global = GlobalArgs { json: cli.json };
    let mut lines = tty::StdinLines;

    let exit_code = commands::run(cli.command, &global, &mut lines);

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
