//! # CLI Module
//!
//! Command line front end for compiling templates and dispatching paths.
//!
//! ## Commands
//!
//! ### `match`
//!
//! Compile one template and print the outcome of matching each path as a
//! JSON line:
//!
//! ```bash
//! pathcomb match /api/v1/entries/:id/:name /api/v1/entries/123/hoge
//! ```
//!
//! ### `dispatch`
//!
//! Register several templates in order and print which one each path is
//! dispatched to:
//!
//! ```bash
//! pathcomb dispatch --route /users/:id --route /posts/:id /posts/7
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::sync::{Arc, Mutex};

use crate::config::RouterConfig;
use crate::route::CompiledRoute;
use crate::router::Router;

#[derive(Parser)]
#[command(name = "pathcomb")]
#[command(about = "Compile route templates and match paths against them", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Match paths against a single template
    Match {
        /// Route template, e.g. /users/:id
        template: String,

        /// Paths to match
        #[arg(required = true)]
        paths: Vec<String>,

        /// Reject malformed templates instead of truncating them
        #[arg(long, default_value_t = false)]
        strict: bool,
    },
    /// Dispatch paths through a router built from several templates
    Dispatch {
        /// Route templates in registration order
        #[arg(short, long = "route", required = true)]
        routes: Vec<String>,

        /// Paths to dispatch
        #[arg(required = true)]
        paths: Vec<String>,

        /// Require templates to consume the whole path
        #[arg(long, default_value_t = false)]
        exact: bool,

        /// Reject malformed templates instead of truncating them
        #[arg(long, default_value_t = false)]
        strict: bool,
    },
}

/// Run `command` and return its output, one JSON document per line.
pub fn execute(command: &Commands) -> Result<Vec<String>> {
    match command {
        Commands::Match {
            template,
            paths,
            strict,
        } => {
            let route = CompiledRoute::new(template, *strict)
                .with_context(|| format!("failed to compile template '{template}'"))?;
            paths
                .iter()
                .map(|path| {
                    let outcome = route.parse(path);
                    serde_json::to_string(&json!({ "path": path, "outcome": outcome }))
                        .context("failed to serialize outcome")
                })
                .collect()
        }
        Commands::Dispatch {
            routes,
            paths,
            exact,
            strict,
        } => {
            let env = RouterConfig::from_env();
            let router = Router::with_config(RouterConfig {
                exact_match: *exact || env.exact_match,
                strict_templates: *strict || env.strict_templates,
                ..env
            });

            let hits: Arc<Mutex<Vec<serde_json::Value>>> = Arc::new(Mutex::new(Vec::new()));
            for template in routes {
                let sink = Arc::clone(&hits);
                let name = template.clone();
                router
                    .register(template, move |params| {
                        if let Ok(mut hits) = sink.lock() {
                            hits.push(json!({ "template": name, "params": params }));
                        }
                    })
                    .with_context(|| format!("failed to register template '{template}'"))?;
            }

            let mut lines = Vec::with_capacity(paths.len());
            for path in paths {
                let line = if router.dispatch(path) {
                    let hit = hits
                        .lock()
                        .ok()
                        .and_then(|mut hits| hits.pop())
                        .unwrap_or(serde_json::Value::Null);
                    json!({ "path": path, "matched": true, "route": hit })
                } else {
                    json!({ "path": path, "matched": false })
                };
                lines.push(serde_json::to_string(&line).context("failed to serialize dispatch")?);
            }
            Ok(lines)
        }
    }
}

/// Parse arguments from the process and print the command output.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    for line in execute(&cli.command)? {
        println!("{line}");
    }
    Ok(())
}
