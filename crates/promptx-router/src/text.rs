//! Small text helpers shared by the validator and the chain planner.

use std::collections::HashSet;

/// Splits text into lower-cased alphanumeric word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Fraction of the distinct input tokens that also appear in the output.
///
/// `|tokens(output) ∩ tokens(input)| / |tokens(input)|`. An input without any
/// tokens has nothing to retain and scores 1.0.
pub fn token_overlap(output: &str, input: &str) -> f64 {
    let input_tokens: HashSet<String> = tokenize(input).into_iter().collect();
    if input_tokens.is_empty() {
        return 1.0;
    }

    let output_tokens: HashSet<String> = tokenize(output).into_iter().collect();
    let shared = input_tokens.intersection(&output_tokens).count();

    shared as f64 / input_tokens.len() as f64
}

/// Collapses whitespace and keeps at most `max_chars` characters.
///
/// Returns the preview and whether anything was cut.
pub fn preview(text: &str, max_chars: usize) -> (String, bool) {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return (collapsed, false);
    }
    (collapsed.chars().take(max_chars).collect(), true)
}
