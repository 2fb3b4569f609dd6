//! # Route Module
//!
//! Route templates and the compiler that turns them into parsers.
//!
//! ## Template Syntax
//!
//! A template is a sequence of `/`-prefixed segments:
//!
//! - `/users` - a static segment, matched literally
//! - `/:id` - a parameter segment, matching one concrete segment and binding
//!   its value to `id`
//!
//! Segment names and values use [`SEGMENT_ALPHABET`]. The grammar that reads
//! templates is itself built from the [`crate::parser`] combinators.
//!
//! ## Example
//!
//! ```rust
//! use pathcomb::route::compile;
//!
//! let parser = compile("/api/v1/entries/:id/:name");
//! let outcome = parser.parse("/api/v1/entries/123/hoge", 0);
//!
//! assert!(outcome.matched);
//! assert_eq!(outcome.attribute("id"), Some("123"));
//! assert_eq!(outcome.attribute("name"), Some("hoge"));
//! ```

mod compile;
mod grammar;
#[cfg(test)]
mod tests;

pub use compile::{compile, compile_strict, CompiledRoute, TemplateError};
pub use grammar::{
    param_segment, param_value_segment, phrase, static_segment, template_segment, PARAMS_TYPE,
    PHRASE_KEY, SEGMENT_ALPHABET, STATIC_TYPE, TYPE_KEY,
};
