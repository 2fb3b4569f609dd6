//! Lazy reference for self-referential and forward-referenced grammars.
//!
//! A [`LazyParser`] is a single-assignment cell. [`LazyParser::parser`]
//! hands out a [`Parser`] that resolves the cell on every invocation, so it
//! can be embedded in a grammar before the parser it points to exists:
//!
//! ```rust
//! use pathcomb::parser::{literal, optional, sequence, LazyParser};
//!
//! let cell = LazyParser::new();
//! let repeated = optional(sequence([literal("ab"), cell.parser()]));
//! cell.define(repeated.clone()).unwrap();
//!
//! assert_eq!(repeated.parse("ababab", 0).text, "ababab");
//! ```
//!
//! A grammar that refers to itself forms an `Arc` cycle and stays alive for
//! as long as the process does.

use once_cell::sync::OnceCell;
use std::fmt;
use std::sync::Arc;
use tracing::error;

use super::core::{ParseOutcome, Parser};

/// Error returned when a lazy cell is assigned twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LazyError {
    /// The cell already holds a parser
    AlreadyDefined {
        /// Label of the parser already stored in the cell
        existing: String,
    },
}

impl fmt::Display for LazyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LazyError::AlreadyDefined { existing } => {
                write!(f, "lazy parser is already defined as {existing}")
            }
        }
    }
}

impl std::error::Error for LazyError {}

/// Single-assignment indirection cell holding a parser.
#[derive(Clone, Default)]
pub struct LazyParser {
    cell: Arc<OnceCell<Parser>>,
}

impl LazyParser {
    /// Create an empty cell.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A parser that dereferences this cell each time it is invoked.
    ///
    /// # Panics
    ///
    /// The returned parser panics when invoked before [`LazyParser::define`]
    /// has been called. That is a grammar construction defect, not an input
    /// failure, so it is never reported as `matched = false`.
    #[must_use]
    #[allow(clippy::panic)]
    pub fn parser(&self) -> Parser {
        let cell = Arc::clone(&self.cell);
        Parser::new("lazy", move |input: &str, position| -> ParseOutcome {
            match cell.get() {
                Some(parser) => parser.parse(input, position),
                None => {
                    error!(position, "lazy parser invoked before it was defined");
                    panic!("lazy parser invoked before it was defined")
                }
            }
        })
    }

    /// Assign the cell. Only the first assignment succeeds.
    pub fn define(&self, parser: Parser) -> Result<(), LazyError> {
        self.cell.set(parser).map_err(|_| LazyError::AlreadyDefined {
            existing: self
                .cell
                .get()
                .map(|p| p.label().to_string())
                .unwrap_or_default(),
        })
    }

    /// Whether [`LazyParser::define`] has been called.
    #[must_use]
    pub fn is_defined(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl fmt::Debug for LazyParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyParser")
            .field("defined", &self.is_defined())
            .finish()
    }
}
