//! Primitive parsers: literal, character set, pattern and end of input.
//!
//! All primitives slice the input with `str::get`, so a position past the
//! end or inside a multi-byte character is a clean failure rather than a
//! panic.

use regex::Regex;
use std::collections::HashSet;

use super::core::{ParseOutcome, Parser};

/// Match the exact string `sample` at the current position.
///
/// Case-sensitive and byte exact. On success the outcome text is `sample`
/// and the position advances by `sample.len()`.
#[must_use]
pub fn literal(sample: impl Into<String>) -> Parser {
    let sample: String = sample.into();
    let label = format!("literal({sample:?})");
    Parser::new(label, move |input, position| {
        match input.get(position..) {
            Some(rest) if rest.starts_with(sample.as_str()) => {
                ParseOutcome::success(sample.as_str(), position + sample.len())
            }
            _ => ParseOutcome::failure(position),
        }
    })
}

/// Match exactly one character belonging to `accepted`.
#[must_use]
pub fn char_set(accepted: &str) -> Parser {
    let set: HashSet<char> = accepted.chars().collect();
    let label = format!("char_set({accepted:?})");
    Parser::new(label, move |input, position| {
        let next = input.get(position..).and_then(|rest| rest.chars().next());
        match next {
            Some(c) if set.contains(&c) => {
                ParseOutcome::success(c.to_string(), position + c.len_utf8())
            }
            _ => ParseOutcome::failure(position),
        }
    })
}

/// Match a compiled regular expression anchored at the current position.
///
/// The regex is run against the suffix starting at `position`; a match that
/// begins anywhere other than the first byte of that suffix is a failure.
#[must_use]
pub fn pattern(regex: Regex) -> Parser {
    let label = format!("pattern({:?})", regex.as_str());
    Parser::new(label, move |input, position| {
        let Some(rest) = input.get(position..) else {
            return ParseOutcome::failure(position);
        };
        match regex.find(rest) {
            Some(m) if m.start() == 0 => ParseOutcome::success(m.as_str(), position + m.end()),
            _ => ParseOutcome::failure(position),
        }
    })
}

/// Compile `source` and wrap it with [`pattern`].
pub fn pattern_str(source: &str) -> Result<Parser, regex::Error> {
    Regex::new(source).map(pattern)
}

/// Succeed with empty text only when `position` is exactly the end of input.
#[must_use]
pub fn end_of_input() -> Parser {
    Parser::new("end_of_input", |input: &str, position| {
        if position == input.len() {
            ParseOutcome::success("", position)
        } else {
            ParseOutcome::failure(position)
        }
    })
}
