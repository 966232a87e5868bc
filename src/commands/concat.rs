use std::fmt;
use std::path::PathBuf;

use clap::{ArgMatches, Args};
use serde::Serialize;

use drillbox::collect::ValueCollector;
use drillbox::concat::{self, ConcatOptions};
use drillbox::LineSource;

use super::{CmdResult, GlobalArgs};

#[derive(Args, Debug, Default)]
pub struct ConcatArgs {
    /// Value(s) to concatenate (repeatable; each use accepts several values,
    /// and comma-separated values are split)
    #[arg(
        short = 'v',
        long = "value",
        num_args = 1..,
        value_name = "VALUE",
        allow_negative_numbers = true
    )]
    pub value: Vec<String>,

    /// `--value` uses grouped by occurrence, filled from the raw matches
    #[arg(skip)]
    pub groups: Vec<Vec<String>>,

    /// File with values, one per line
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Separator between values (default: none)
    #[arg(long, value_name = "SEP", allow_hyphen_values = true)]
    pub sep: Option<String>,

    /// Trim whitespace from both ends of each value before joining
    #[arg(long)]
    pub strip: bool,

    /// Convert the result to lowercase
    #[arg(long)]
    pub lower: bool,

    /// Convert the result to uppercase (applied after --lower, so it wins)
    #[arg(long)]
    pub upper: bool,

    /// Never prompt; with no values the result is empty
    #[arg(long)]
    pub quiet: bool,
}

impl ConcatArgs {
    /// Value groups in encounter order, one group per `--value` use.
    fn value_groups(&self) -> Vec<Vec<String>> {
        if self.groups.is_empty() && !self.value.is_empty() {
            vec![self.value.clone()]
        } else {
            self.groups.clone()
        }
    }
}

/// Extract `--value` occurrences from the concat subcommand matches.
pub fn value_groups(matches: &ArgMatches) -> Vec<Vec<String>> {
    matches
        .get_occurrences::<String>("value")
        .map(|occurrences| {
            occurrences
                .map(|group| group.cloned().collect())
                .collect()
        })
        .unwrap_or_default()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConcatOutput {
    pub result: String,
    pub values: Vec<String>,
    pub options: ConcatOptions,
}

impl fmt::Display for ConcatOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.result)
    }
}

pub fn run(
    args: ConcatArgs,
    _global: &GlobalArgs,
    lines: &mut dyn LineSource,
) -> CmdResult<ConcatOutput> {
    let options = ConcatOptions {
        separator: args.sep.clone().unwrap_or_default(),
        trim_each_value: args.strip,
        force_lower: args.lower,
        force_upper: args.upper,
    };

    let values = ValueCollector::new(args.value_groups())
        .with_file(args.file.clone())
        .interactive(!args.quiet)
        .collect(lines)?;

    let result = concat::concat_values(&values, &options);

    Ok((
        ConcatOutput {
            result,
            values,
            options,
        },
        0,
    ))
}
