use serde::Serialize;

use crate::error::Result;
use crate::utils::validation;

pub const INVALID_INTEGER: &str = "please enter an integer (e.g. 4, -3).";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParityCheck {
    pub number: i64,
    pub is_even: bool,
}

impl ParityCheck {
    pub fn label(&self) -> &'static str {
        if self.is_even {
            "even"
        } else {
            "odd"
        }
    }
}

pub fn is_even(n: i64) -> bool {
    n % 2 == 0
}

pub fn parse_int(raw: &str) -> Result<i64> {
    validation::parse_int(raw, "number", INVALID_INTEGER)
}

/// Parse `raw` and classify it.
pub fn check_number(raw: &str) -> Result<ParityCheck> {
    let number = parse_int(raw)?;
    Ok(ParityCheck {
        number,
        is_even: is_even(number),
    })
}
