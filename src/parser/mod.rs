//! # Parser Module
//!
//! A small combinator engine operating over a `&str` and a byte position.
//!
//! ## Overview
//!
//! - **[`ParseOutcome`]** - success flag, consumed text, next position and
//!   extracted attributes
//! - **Primitives** - [`literal`], [`char_set`], [`pattern`], [`end_of_input`]
//! - **Composites** - [`sequence`], [`choice`], [`many`], [`one_or_more`],
//!   [`optional`], [`transform`], [`annotate`]
//! - **Lazy reference** - [`LazyParser`] for recursive grammars
//!
//! Parsers are pure: invoking one never mutates shared state, so a single
//! [`Parser`] can serve concurrent callers. Failure is always reported at the
//! position the parser was invoked at.
//!
//! ## Example
//!
//! ```rust
//! use pathcomb::parser::{choice, literal, sequence};
//!
//! let greeting = sequence([literal("hello, "), choice([literal("world"), literal("rust")])]);
//! let outcome = greeting.parse("hello, rust", 0);
//! assert!(outcome.matched);
//! assert_eq!(outcome.next_position, 11);
//! ```

mod combinators;
mod core;
mod lazy;
mod primitives;

pub use self::core::{merge_attributes, Attributes, ParseOutcome, Parser};
pub use combinators::{annotate, choice, many, one_or_more, optional, sequence, transform};
pub use lazy::{LazyError, LazyParser};
pub use primitives::{char_set, end_of_input, literal, pattern, pattern_str};
