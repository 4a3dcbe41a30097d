//! Multi-value field codec. Several schema columns pack more than one
//! logical value into a single string cell: min/max ranges ("40-75") and
//! comma-joined lists ("05/01, 06/15"). Decoding is best-effort and never
//! fails; a malformed cell degrades to a partial decode so one odd value
//! can't poison a whole file load.

/// `"min-max"` when both sides are present, whichever side exists otherwise,
/// empty when neither does.
pub fn encode_range(min: &str, max: &str) -> String {
    let min = min.trim();
    let max = max.trim();
    if !min.is_empty() && !max.is_empty() {
        format!("{min}-{max}")
    } else if !min.is_empty() {
        min.to_string()
    } else {
        max.to_string()
    }
}

/// Split on the first `-`. A value with no `-` is treated as a lone minimum.
/// Ranges in this domain are non-negative, so a leading minus sign is not a
/// concern.
pub fn decode_range(value: &str) -> (String, String) {
    match value.split_once('-') {
        Some((min, max)) => (min.trim().to_string(), max.trim().to_string()),
        None => (value.trim().to_string(), String::new()),
    }
}

/// Join with `", "`, preserving insertion order, skipping blanks and exact
/// duplicates.
pub fn encode_list<'a, I>(values: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut kept: Vec<&str> = Vec::new();
    for value in values {
        let value = value.trim();
        if value.is_empty() || kept.contains(&value) {
            continue;
        }
        kept.push(value);
    }
    kept.join(", ")
}

/// Split on `,`, trim whitespace, drop empty tokens.
pub fn decode_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
