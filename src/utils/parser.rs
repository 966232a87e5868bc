//! Text splitting primitives shared by the exercises.

/// Convert content into a Vec of owned line strings.
///
/// Only the line terminator is removed; leading and trailing whitespace
/// inside a line survives, and blank lines stay as empty values.
/// Lines end at `\n` or `\r\n`; a lone `\r` is not a line break.
pub fn lines_to_vec(content: &str) -> Vec<String> {
    content.lines().map(|s| s.to_string()).collect()
}

/// Split a comma-separated list, trimming each piece and dropping empties.
pub fn split_comma_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
