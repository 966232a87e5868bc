use serde::Serialize;

/// Which differences the palindrome check ignores.
///
/// Both toggles default to on. Turning either one on compares the fully
/// normalized text; only turning both off compares the raw text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PalindromeOptions {
    pub ignore_case: bool,
    pub ignore_non_alnum: bool,
}

impl Default for PalindromeOptions {
    fn default() -> Self {
        Self {
            ignore_case: true,
            ignore_non_alnum: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PalindromeCheck {
    pub is_palindrome: bool,
    pub normalized: String,
}

/// Lowercase, then keep only ASCII letters and digits.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| matches!(c, 'a'..='z' | '0'..='9'))
        .collect()
}

pub fn is_palindrome(text: &str) -> bool {
    is_palindrome_with(text, PalindromeOptions::default())
}

pub fn is_palindrome_with(text: &str, options: PalindromeOptions) -> bool {
    if options.ignore_case || options.ignore_non_alnum {
        reads_same_backwards(&normalize(text))
    } else {
        reads_same_backwards(text)
    }
}

/// Run the default check and keep the normalized form for display.
pub fn check(text: &str) -> PalindromeCheck {
    PalindromeCheck {
        is_palindrome: is_palindrome(text),
        normalized: normalize(text),
    }
}

fn reads_same_backwards(text: &str) -> bool {
    text.chars().eq(text.chars().rev())
}
