//! # pathcomb
//!
//! **pathcomb** is a small parser-combinator engine and a path-template
//! router built on top of it.
//!
//! ## Overview
//!
//! A route template such as `/api/v1/entries/:id/:name` is compiled into a
//! parser that recognises concrete paths fitting the template and extracts
//! the named parameters. The grammar that reads templates is written with the
//! same combinators it produces.
//!
//! ## Architecture
//!
//! - **[`parser`]** - Parse outcomes, primitive and composite combinators,
//!   attribute merge and lazy references
//! - **[`route`]** - Route template grammar and compiler
//! - **[`router`]** - Ordered registry with first-match dispatch
//! - **[`config`]** - Environment driven router configuration
//! - **[`logging`]** - `tracing` subscriber setup for binaries
//! - **[`cli`]** - The `pathcomb` command line front end
//!
//! ### Request Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant App
//!     participant Router
//!     participant Compiler as route::compile
//!     participant Parser as Compiled Parser
//!     participant Handler
//!
//!     App->>Router: register("/pets/:id", handler)
//!     Router->>Compiler: scan template with route grammar
//!     Compiler-->>Router: sequence(literal("/pets"), param(id))
//!
//!     App->>Router: dispatch("/pets/42")
//!     Router->>Parser: parse("/pets/42", 0)
//!     Parser-->>Router: ParseOutcome { matched, attributes: {id: "42"} }
//!     Router->>Handler: handler({id: "42"})
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use pathcomb::router::Router;
//! use std::sync::{Arc, Mutex};
//!
//! let router = Router::new();
//! let seen = Arc::new(Mutex::new(String::new()));
//! let sink = Arc::clone(&seen);
//!
//! router
//!     .register("/api/v1/entries/:id/:name", move |params| {
//!         *sink.lock().unwrap() = format!("{}={}", params["id"], params["name"]);
//!     })
//!     .unwrap();
//!
//! assert!(router.dispatch("/api/v1/entries/123/hoge"));
//! assert_eq!(*seen.lock().unwrap(), "123=hoge");
//! ```

pub mod cli;
pub mod config;
pub mod logging;
pub mod parser;
pub mod route;
pub mod router;

pub use parser::{Attributes, ParseOutcome, Parser};
pub use route::{compile, compile_strict, TemplateError};
pub use router::Router;
