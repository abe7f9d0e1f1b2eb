//! Tokenizer over class attribute text

use std::str::SplitWhitespace;

/// Iterate the tokens of `text` in order.
///
/// Separators are runs of Unicode whitespace; leading and trailing
/// whitespace produce no empty tokens.
pub fn tokens(text: &str) -> SplitWhitespace<'_> {
    text.split_whitespace()
}

/// Join tokens with single spaces
pub fn join<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = String::new();
    for token in tokens {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(token);
    }
    out
}

/// Collapse separators to single spaces and trim the ends
pub fn normalize(text: &str) -> String {
    join(tokens(text))
}

/// Whether `s` can stand as a single token (non-empty, no whitespace)
pub fn is_token(s: &str) -> bool {
    !s.is_empty() && !s.chars().any(char::is_whitespace)
}
