//! Composite combinators.
//!
//! Every combinator here reports failure at the position it was invoked at,
//! never at the position where a sub-parser gave up. There is no partial
//! commit and no lookahead replay.

use super::core::{merge_attributes, Attributes, ParseOutcome, Parser};

fn joined_label(name: &str, parsers: &[Parser]) -> String {
    let inner: Vec<&str> = parsers.iter().map(Parser::label).collect();
    format!("{name}({})", inner.join(", "))
}

/// Run every parser in order, each starting where the previous one stopped.
///
/// Text is concatenated and attributes are merged in order. If any
/// sub-parser fails the whole sequence fails at the original position.
/// An empty sequence matches the empty string.
#[must_use]
pub fn sequence<I>(parsers: I) -> Parser
where
    I: IntoIterator<Item = Parser>,
{
    let parsers: Vec<Parser> = parsers.into_iter().collect();
    let label = joined_label("sequence", &parsers);
    Parser::new(label, move |input, position| {
        let mut cursor = position;
        let mut text = String::new();
        let mut collected: Vec<Attributes> = Vec::with_capacity(parsers.len());

        for parser in &parsers {
            let outcome = parser.parse(input, cursor);
            if !outcome.matched {
                return ParseOutcome::failure(position);
            }
            cursor = outcome.next_position;
            text.push_str(&outcome.text);
            collected.push(outcome.attributes);
        }

        ParseOutcome::success_with(text, cursor, merge_attributes(collected))
    })
}

/// Try each parser in order and return the first success unchanged.
#[must_use]
pub fn choice<I>(parsers: I) -> Parser
where
    I: IntoIterator<Item = Parser>,
{
    let parsers: Vec<Parser> = parsers.into_iter().collect();
    let label = joined_label("choice", &parsers);
    Parser::new(label, move |input, position| {
        parsers
            .iter()
            .map(|parser| parser.parse(input, position))
            .find(|outcome| outcome.matched)
            .unwrap_or_else(|| ParseOutcome::failure(position))
    })
}

/// Apply `parser` zero or more times. Never fails.
///
/// Stops at the first failure, or at the first success that consumed
/// nothing (a zero-width match would otherwise repeat forever).
#[must_use]
pub fn many(parser: Parser) -> Parser {
    let label = format!("many({})", parser.label());
    Parser::new(label, move |input, position| {
        let mut cursor = position;
        let mut text = String::new();
        let mut collected: Vec<Attributes> = Vec::new();

        loop {
            let outcome = parser.parse(input, cursor);
            if !outcome.matched || outcome.next_position == cursor {
                break;
            }
            cursor = outcome.next_position;
            text.push_str(&outcome.text);
            collected.push(outcome.attributes);
        }

        ParseOutcome::success_with(text, cursor, merge_attributes(collected))
    })
}

/// Apply `parser` one or more times: `sequence([parser, many(parser)])`.
#[must_use]
pub fn one_or_more(parser: Parser) -> Parser {
    let repeated = many(parser.clone());
    sequence([parser, repeated])
}

/// Apply `parser`; on failure succeed with empty text at the same position.
#[must_use]
pub fn optional(parser: Parser) -> Parser {
    let label = format!("optional({})", parser.label());
    Parser::new(label, move |input, position| {
        let outcome = parser.parse(input, position);
        if outcome.matched {
            outcome
        } else {
            ParseOutcome::success("", position)
        }
    })
}

/// Rewrite the matched text of `parser` with `f`.
///
/// Position passes through; incoming attributes are discarded. Failure is
/// passed through untouched.
#[must_use]
pub fn transform<F>(parser: Parser, f: F) -> Parser
where
    F: Fn(&str) -> String + Send + Sync + 'static,
{
    let label = format!("transform({})", parser.label());
    Parser::new(label, move |input, position| {
        let outcome = parser.parse(input, position);
        if !outcome.matched {
            return outcome;
        }
        ParseOutcome::success(f(&outcome.text), outcome.next_position)
    })
}

/// Attach extra attributes computed from the matched text of `parser`.
///
/// The annotation is merged after the sub-parser's own attributes, so it
/// wins on key collision.
#[must_use]
pub fn annotate<F>(parser: Parser, f: F) -> Parser
where
    F: Fn(&str) -> Attributes + Send + Sync + 'static,
{
    let label = format!("annotate({})", parser.label());
    Parser::new(label, move |input, position| {
        let outcome = parser.parse(input, position);
        if !outcome.matched {
            return outcome;
        }
        let extra = f(&outcome.text);
        ParseOutcome::success_with(
            outcome.text,
            outcome.next_position,
            merge_attributes([outcome.attributes, extra]),
        )
    })
}
