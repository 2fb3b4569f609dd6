//! # Router Module
//!
//! The router holds an ordered list of compiled route templates and their
//! handlers, and dispatches an incoming path to the first template that
//! matches it.
//!
//! ## Architecture
//!
//! The router uses a two-phase approach:
//!
//! 1. **Compilation**: At registration, a template such as `/pets/:id` is
//!    compiled into a [`Parser`](crate::parser::Parser) by
//!    [`CompiledRoute`](crate::route::CompiledRoute).
//!
//! 2. **Matching**: For each incoming path, the router runs every compiled
//!    parser at position 0 in registration order until one matches, then
//!    hands the extracted parameters to that route's handler.
//!
//! An unmatched path is a silent no-op: no handler runs and no error is
//! raised. Mapping that to a "not found" response is the caller's concern.
//!
//! ## Example
//!
//! ```rust
//! use pathcomb::router::Router;
//!
//! let router = Router::new();
//! router
//!     .register("/pets/:id", |params| println!("pet {}", params["id"]))
//!     .unwrap();
//!
//! assert!(router.dispatch("/pets/42"));
//! assert!(!router.dispatch("/owners/7"));
//! ```

mod core;

pub use self::core::{Handler, RouteMatch, Router};
