//! Parse outcome, parser handle and attribute merge - the types every
//! combinator in this crate produces and consumes.

use serde::Serialize;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Parameter bindings accumulated by a parser and its sub-parsers.
///
/// A `BTreeMap` keeps printed and serialized outcomes deterministic.
pub type Attributes = BTreeMap<String, String>;

/// Result of attempting one parser at one position.
///
/// On failure `text` and `attributes` are always empty and `next_position`
/// is the position the parser was invoked at. `matched` is the only field
/// callers need to trust.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseOutcome {
    /// Whether the parser consumed input successfully
    pub matched: bool,
    /// The consumed text (empty on failure)
    pub text: String,
    /// Byte offset after this parser (unchanged input position on failure)
    pub next_position: usize,
    /// Parameter bindings (empty on failure)
    pub attributes: Attributes,
}

impl ParseOutcome {
    /// A successful outcome with no attributes.
    #[inline]
    #[must_use]
    pub fn success(text: impl Into<String>, next_position: usize) -> Self {
        Self::success_with(text, next_position, Attributes::new())
    }

    /// A successful outcome carrying `attributes`.
    #[inline]
    #[must_use]
    pub fn success_with(
        text: impl Into<String>,
        next_position: usize,
        attributes: Attributes,
    ) -> Self {
        Self {
            matched: true,
            text: text.into(),
            next_position,
            attributes,
        }
    }

    /// The canonical failure outcome at `position`.
    #[inline]
    #[must_use]
    pub fn failure(position: usize) -> Self {
        Self {
            matched: false,
            text: String::new(),
            next_position: position,
            attributes: Attributes::new(),
        }
    }

    /// Look up one attribute by key.
    #[inline]
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// Merge attribute mappings in evaluation order.
///
/// Uses "last write wins" semantics: when two mappings bind the same key the
/// later one's value is kept. Colliding names are not an error.
#[must_use]
pub fn merge_attributes<I>(mappings: I) -> Attributes
where
    I: IntoIterator<Item = Attributes>,
{
    let mut merged = Attributes::new();
    for mapping in mappings {
        merged.extend(mapping);
    }
    merged
}

type ParseFn = dyn Fn(&str, usize) -> ParseOutcome + Send + Sync;

/// A pure function from `(input, position)` to a [`ParseOutcome`].
///
/// `Parser` is a shared handle: cloning it is an `Arc` increment, and the
/// same value may be invoked from any number of threads at once. Parsers
/// never mutate state on invocation.
#[derive(Clone)]
pub struct Parser {
    run: Arc<ParseFn>,
    label: Cow<'static, str>,
}

impl Parser {
    /// Wrap a closure as a parser.
    ///
    /// The closure must return [`ParseOutcome::failure`] at the input
    /// position whenever it does not match.
    pub fn new<F>(label: impl Into<Cow<'static, str>>, run: F) -> Self
    where
        F: Fn(&str, usize) -> ParseOutcome + Send + Sync + 'static,
    {
        Self {
            run: Arc::new(run),
            label: label.into(),
        }
    }

    /// Run the parser against `input` starting at byte offset `position`.
    #[inline]
    #[must_use]
    pub fn parse(&self, input: &str, position: usize) -> ParseOutcome {
        (self.run)(input, position)
    }

    /// Replace the label, keeping the behaviour.
    #[must_use]
    pub fn named(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.label = label.into();
        self
    }

    /// Short description used in `Debug` output and log fields.
    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parser({})", self.label)
    }
}
