//! # Router Configuration Module
//!
//! Environment variable based configuration for [`crate::router::Router`].
//!
//! ## Environment Variables
//!
//! ### `PATHCOMB_STRICT_TEMPLATES`
//!
//! When `true`, templates are compiled with
//! [`compile_strict`](crate::route::compile_strict) and malformed templates
//! are rejected at registration. When `false` the compiler truncates at the
//! first unparsable remainder.
//!
//! Default: `false`
//!
//! ### `PATHCOMB_EXACT_MATCH`
//!
//! When `true`, a route only matches if its compiled parser consumes the
//! whole path. When `false` a matching prefix is enough, so `/users/:id`
//! also matches `/users/7/posts`.
//!
//! Default: `false`
//!
//! ### `PATHCOMB_SLOW_MATCH_US`
//!
//! Lookups slower than this many microseconds are logged at `warn` instead
//! of `debug`. Accepts decimal or `0x`-prefixed hexadecimal.
//!
//! Default: `1000`
//!
//! ## Usage
//!
//! ```rust
//! use pathcomb::config::RouterConfig;
//!
//! let config = RouterConfig::from_env();
//! println!("strict templates: {}", config.strict_templates);
//! ```

use std::env;
use std::time::Duration;

const DEFAULT_SLOW_MATCH_US: u64 = 1000;

/// Router configuration loaded from environment variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouterConfig {
    /// Reject malformed templates at registration (default: false)
    pub strict_templates: bool,
    /// Require the whole path to be consumed (default: false)
    pub exact_match: bool,
    /// Threshold above which a lookup is reported as slow
    pub slow_match_threshold: Duration,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            strict_templates: false,
            exact_match: false,
            slow_match_threshold: Duration::from_micros(DEFAULT_SLOW_MATCH_US),
        }
    }
}

impl RouterConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let flag = |key: &str, default: bool| {
            lookup(key)
                .and_then(|val| parse_bool(&val))
                .unwrap_or(default)
        };
        let slow_us = lookup("PATHCOMB_SLOW_MATCH_US")
            .and_then(|val| parse_number(&val))
            .unwrap_or(DEFAULT_SLOW_MATCH_US);

        Self {
            strict_templates: flag("PATHCOMB_STRICT_TEMPLATES", defaults.strict_templates),
            exact_match: flag("PATHCOMB_EXACT_MATCH", defaults.exact_match),
            slow_match_threshold: Duration::from_micros(slow_us),
        }
    }
}

fn parse_bool(val: &str) -> Option<bool> {
    match val.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_number(val: &str) -> Option<u64> {
    let val = val.trim();
    if let Some(hex) = val.strip_prefix("0x") {
        u64::from_str_radix(hex, 16).ok()
    } else {
        val.parse().ok()
    }
}
