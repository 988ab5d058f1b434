use super::domain::AnswerValue;

/// Split a multi-select answer into its chosen options.
///
/// Absent answers and non-text scalars yield no selections. Tokens are
/// trimmed and tokens that are empty after trimming are dropped; order and
/// duplicates are preserved.
pub fn split_selections(answer: &AnswerValue) -> Vec<String> {
    let AnswerValue::Text(raw) = answer else {
        return Vec::new();
    };
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
