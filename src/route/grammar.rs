//! Grammar for route templates, written with the combinators it compiles to.
//!
//! The fragments are process-wide immutable parsers built once on first
//! use. They hold no mutable state, so sharing them across threads and
//! call sites needs no coordination.

use once_cell::sync::Lazy;

use crate::parser::{annotate, char_set, choice, literal, one_or_more, sequence, Attributes, Parser};

/// Characters allowed in a segment name or value.
pub const SEGMENT_ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-_.~!*'()";

/// Attribute key holding the segment kind (`static` or `params`).
pub const TYPE_KEY: &str = "type";
/// Attribute key holding the segment phrase without its prefix.
pub const PHRASE_KEY: &str = "phrase";
/// `type` value for a literal segment.
pub const STATIC_TYPE: &str = "static";
/// `type` value for a `:name` segment.
pub const PARAMS_TYPE: &str = "params";

static PHRASE: Lazy<Parser> =
    Lazy::new(|| one_or_more(char_set(SEGMENT_ALPHABET)).named("phrase"));

static SLASH_PHRASE: Lazy<Parser> =
    Lazy::new(|| sequence([literal("/"), PHRASE.clone()]).named("slash_phrase"));

static STATIC_SEGMENT: Lazy<Parser> = Lazy::new(|| {
    annotate(SLASH_PHRASE.clone(), |text| {
        let phrase = text.strip_prefix('/').unwrap_or(text);
        Attributes::from([
            (TYPE_KEY.to_string(), STATIC_TYPE.to_string()),
            (PHRASE_KEY.to_string(), phrase.to_string()),
        ])
    })
    .named("static_segment")
});

static PARAM_SEGMENT: Lazy<Parser> = Lazy::new(|| {
    let raw = sequence([literal("/"), literal(":"), PHRASE.clone()]);
    annotate(raw, |text| {
        let name = text.strip_prefix("/:").unwrap_or(text);
        // Placeholder first so a parameter called `type` or `phrase` cannot
        // clobber the segment description.
        let mut attributes = Attributes::from([(name.to_string(), String::new())]);
        attributes.insert(TYPE_KEY.to_string(), PARAMS_TYPE.to_string());
        attributes.insert(PHRASE_KEY.to_string(), name.to_string());
        attributes
    })
    .named("param_segment")
});

static TEMPLATE_SEGMENT: Lazy<Parser> = Lazy::new(|| {
    choice([PARAM_SEGMENT.clone(), STATIC_SEGMENT.clone()]).named("template_segment")
});

/// One or more characters from [`SEGMENT_ALPHABET`].
#[must_use]
pub fn phrase() -> Parser {
    PHRASE.clone()
}

/// `/` followed by a phrase.
///
/// Records `{type: "static", phrase: <phrase>}`.
#[must_use]
pub fn static_segment() -> Parser {
    STATIC_SEGMENT.clone()
}

/// `/:` followed by a phrase.
///
/// Records `{type: "params", phrase: <name>, <name>: ""}`. The empty binding
/// under the parameter's own name is a placeholder that the compiled route
/// overwrites at match time.
#[must_use]
pub fn param_segment() -> Parser {
    PARAM_SEGMENT.clone()
}

/// Either a parameter segment or a static segment, tried in that order.
#[must_use]
pub fn template_segment() -> Parser {
    TEMPLATE_SEGMENT.clone()
}

/// Match one concrete path segment and bind its value to `name`.
#[must_use]
pub fn param_value_segment(name: &str) -> Parser {
    let key = name.to_string();
    annotate(SLASH_PHRASE.clone(), move |text| {
        let value = text.strip_prefix('/').unwrap_or(text);
        Attributes::from([(key.clone(), value.to_string())])
    })
    .named(format!("param({name})"))
}
