use serde::Serialize;

/// How a value list is turned into one string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConcatOptions {
    pub separator: String,
    pub trim_each_value: bool,
    pub force_lower: bool,
    /// Applied after `force_lower`, so it wins when both are set.
    pub force_upper: bool,
}

/// Join `values` into one string according to `options`.
///
/// An empty list always yields an empty string, whatever the options say.
pub fn concat_values<S: AsRef<str>>(values: &[S], options: &ConcatOptions) -> String {
    if values.is_empty() {
        return String::new();
    }

    let processed: Vec<&str> = values
        .iter()
        .map(|v| {
            let v = v.as_ref();
            if options.trim_each_value {
                v.trim()
            } else {
                v
            }
        })
        .collect();

    let mut result = processed.join(&options.separator);

    if options.force_lower {
        result = result.to_lowercase();
    }
    if options.force_upper {
        result = result.to_uppercase();
    }

    result
}
