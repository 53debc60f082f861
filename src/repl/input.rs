//! Input normalisation for the REPL.

/// Splits a raw input line on whitespace and lower-cases every word.
///
/// Punctuation is kept; only case and spacing are normalised.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}
