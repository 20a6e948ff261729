//! Line normalization.
//!
//! Every line is trimmed and each internal whitespace run collapses to a
//! single space, so the line classifier never has to care about indentation
//! or alignment. Blank lines are dropped.

/// Normalize raw source text into a sequence of non-blank lines
pub fn normalize(source: &str) -> Vec<String> {
    source
        .lines()
        .map(collapse_whitespace)
        .filter(|line| !line.is_empty())
        .collect()
}

fn collapse_whitespace(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}
