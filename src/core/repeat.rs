use crate::error::{Error, Result};
use crate::utils::validation;

/// Return `text` repeated `times` times.
pub fn repeat_text(text: &str, times: i64) -> Result<String> {
    if times < 0 {
        return Err(Error::validation_invalid_input(
            "times",
            "repeat count must be >= 0",
            Some(times.to_string()),
        ));
    }

    if text.is_empty() || times == 0 {
        return Ok(String::new());
    }

    let too_large = || {
        Error::validation_invalid_input(
            "times",
            "repeat count is too large",
            Some(times.to_string()),
        )
    };

    // Allocations are capped at isize::MAX bytes.
    let count = usize::try_from(times).map_err(|_| too_large())?;
    let total = text
        .len()
        .checked_mul(count)
        .filter(|total| *total <= isize::MAX as usize)
        .ok_or_else(too_large)?;

    let mut repeated = String::new();
    repeated.try_reserve_exact(total).map_err(|_| too_large())?;
    for _ in 0..count {
        repeated.push_str(text);
    }

    Ok(repeated)
}

pub fn parse_times(raw: &str) -> Result<i64> {
    validation::parse_int(raw, "times", "repeat count must be a whole number")
}
