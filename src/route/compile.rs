//! Route template compiler.
//!
//! A template such as `/api/v1/entries/:id/:name` is scanned once with the
//! route grammar and turned into a single [`sequence`] parser of literal and
//! parameter-value parsers. Running that parser against a concrete path
//! yields one attribute per `:name` segment.

use std::collections::HashSet;
use std::fmt;
use tracing::{debug, warn};

use super::grammar::{param_value_segment, template_segment, PARAMS_TYPE, PHRASE_KEY, TYPE_KEY};
use crate::parser::{literal, sequence, ParseOutcome, Parser};

/// Template rejected by strict compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// The template is the empty string
    Empty,
    /// Scanning stopped before the end of the template
    UnparsedRemainder {
        /// The rejected template
        template: String,
        /// Byte offset of the first unparsable character
        position: usize,
    },
    /// A parameter name appears more than once
    DuplicateParameter {
        /// The rejected template
        template: String,
        /// The repeated parameter name
        name: String,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::Empty => write!(f, "route template is empty"),
            TemplateError::UnparsedRemainder { template, position } => {
                write!(
                    f,
                    "route template '{}' cannot be parsed from byte {}: '{}'",
                    template,
                    position,
                    template.get(*position..).unwrap_or_default()
                )
            }
            TemplateError::DuplicateParameter { template, name } => {
                write!(
                    f,
                    "route template '{}' uses parameter ':{}' more than once",
                    template, name
                )
            }
        }
    }
}

impl std::error::Error for TemplateError {}

/// Segments recognised by one scan of a template.
struct Scan {
    parsers: Vec<Parser>,
    param_names: Vec<String>,
    position: usize,
}

fn scan(template: &str) -> Scan {
    let segment = template_segment();
    let mut parsers = Vec::new();
    let mut param_names = Vec::new();
    let mut cursor = 0;

    loop {
        let outcome = segment.parse(template, cursor);
        if !outcome.matched {
            break;
        }
        match segment_param(&outcome) {
            Some(name) => {
                parsers.push(param_value_segment(name));
                param_names.push(name.to_string());
            }
            None => parsers.push(literal(outcome.text.as_str())),
        }
        cursor = outcome.next_position;
    }

    debug!(
        template = %template,
        segments = parsers.len(),
        params = ?param_names,
        consumed = cursor,
        "Route template scanned"
    );

    Scan {
        parsers,
        param_names,
        position: cursor,
    }
}

fn segment_param(outcome: &ParseOutcome) -> Option<&str> {
    if outcome.attribute(TYPE_KEY) == Some(PARAMS_TYPE) {
        outcome.attribute(PHRASE_KEY)
    } else {
        None
    }
}

fn build(template: &str, parsers: Vec<Parser>) -> Parser {
    sequence(parsers).named(format!("route({template})"))
}

/// Compile `template` into a parser for concrete paths.
///
/// Total: scanning stops at the first position where no segment matches and
/// the rest of the template is ignored. Use [`compile_strict`] to reject such
/// templates instead.
#[must_use]
pub fn compile(template: &str) -> Parser {
    CompiledRoute::lenient(template).parser
}

/// Compile `template`, rejecting empty templates, templates with an
/// unparsable remainder and templates that repeat a parameter name.
pub fn compile_strict(template: &str) -> Result<Parser, TemplateError> {
    CompiledRoute::new(template, true).map(|route| route.parser)
}

/// A compiled template together with its parameter names.
#[derive(Debug, Clone)]
pub struct CompiledRoute {
    template: String,
    param_names: Vec<String>,
    parser: Parser,
}

impl CompiledRoute {
    /// Compile `template`; when `strict` is false this never fails.
    pub fn new(template: &str, strict: bool) -> Result<Self, TemplateError> {
        if strict {
            Self::strict(template)
        } else {
            Ok(Self::lenient(template))
        }
    }

    fn lenient(template: &str) -> Self {
        let Scan {
            parsers,
            param_names,
            position,
        } = scan(template);
        if position < template.len() {
            warn!(
                template = %template,
                position,
                remainder = %template.get(position..).unwrap_or_default(),
                "Route template truncated at unparsable remainder"
            );
        }
        Self {
            template: template.to_string(),
            param_names,
            parser: build(template, parsers),
        }
    }

    fn strict(template: &str) -> Result<Self, TemplateError> {
        if template.is_empty() {
            return Err(TemplateError::Empty);
        }
        let Scan {
            parsers,
            param_names,
            position,
        } = scan(template);
        if position < template.len() {
            return Err(TemplateError::UnparsedRemainder {
                template: template.to_string(),
                position,
            });
        }
        let mut seen = HashSet::with_capacity(param_names.len());
        if let Some(name) = param_names.iter().find(|name| !seen.insert(name.as_str())) {
            return Err(TemplateError::DuplicateParameter {
                template: template.to_string(),
                name: name.clone(),
            });
        }

        Ok(Self {
            template: template.to_string(),
            param_names,
            parser: build(template, parsers),
        })
    }

    /// Run the compiled parser against `path` from position 0.
    #[inline]
    #[must_use]
    pub fn parse(&self, path: &str) -> ParseOutcome {
        self.parser.parse(path, 0)
    }

    /// The source template.
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Parameter names in template order.
    #[must_use]
    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    /// The compiled parser.
    #[must_use]
    pub fn parser(&self) -> &Parser {
        &self.parser
    }
}
