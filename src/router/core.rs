//! Router core - ordered registry and first-match dispatch.

use arc_swap::ArcSwap;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::config::RouterConfig;
use crate::parser::{Attributes, ParseOutcome};
use crate::route::{CompiledRoute, TemplateError};

/// Callback invoked with the attributes of a matched path.
pub type Handler = Arc<dyn Fn(&Attributes) + Send + Sync>;

/// A registered template and its handler.
struct Route {
    compiled: CompiledRoute,
    handler: Handler,
}

/// Result of successfully matching a path to a registered route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// The template the path matched
    pub template: String,
    /// Registration index of the matched route
    pub index: usize,
    /// Parameters extracted from the path (e.g., `:id` -> `{"id": "123"}`)
    pub attributes: Attributes,
}

impl RouteMatch {
    /// Get a path parameter by name
    #[inline]
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

/// Ordered collection of compiled templates and their handlers.
///
/// Lookups scan routes in registration order and stop at the first whose
/// compiled parser matches at position 0. The registry is an [`ArcSwap`]
/// snapshot: lookups never block, and a registration racing with lookups
/// publishes a new snapshot that later lookups observe.
pub struct Router {
    routes: ArcSwap<Vec<Arc<Route>>>,
    config: RouterConfig,
}

impl Default for Router {
    fn default() -> Self {
        Self::with_config(RouterConfig::default())
    }
}

impl Router {
    /// Create an empty router with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty router with `config`
    #[must_use]
    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            routes: ArcSwap::from_pointee(Vec::new()),
            config,
        }
    }

    /// The configuration this router was built with
    #[must_use]
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Compile `template` and append it with `handler`.
    ///
    /// The template is compiled once here and never re-parsed per request.
    /// Fails only when strict templates are enabled and the template is
    /// malformed.
    pub fn register<F>(&self, template: &str, handler: F) -> Result<(), TemplateError>
    where
        F: Fn(&Attributes) + Send + Sync + 'static,
    {
        let compiled = match CompiledRoute::new(template, self.config.strict_templates) {
            Ok(compiled) => compiled,
            Err(err) => {
                warn!(template = %template, error = %err, "Route registration rejected");
                return Err(err);
            }
        };
        let params = compiled.param_names().to_vec();
        let route = Arc::new(Route {
            compiled,
            handler: Arc::new(handler),
        });

        self.routes.rcu(|routes| {
            let mut next: Vec<Arc<Route>> = routes.iter().map(Arc::clone).collect();
            next.push(Arc::clone(&route));
            next
        });

        info!(
            template = %template,
            params = ?params,
            routes_count = self.len(),
            "Route registered"
        );
        Ok(())
    }

    /// Find the first matching route and invoke its handler.
    ///
    /// Returns whether a handler ran. An unmatched path runs nothing.
    pub fn dispatch(&self, path: &str) -> bool {
        match self.find(path) {
            Some((route, _, outcome)) => {
                (route.handler)(&outcome.attributes);
                true
            }
            None => false,
        }
    }

    /// Find the first matching route without invoking its handler.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<RouteMatch> {
        self.find(path).map(|(route, index, outcome)| RouteMatch {
            template: route.compiled.template().to_string(),
            index,
            attributes: outcome.attributes,
        })
    }

    /// Registered templates in registration order
    #[must_use]
    pub fn templates(&self) -> Vec<String> {
        self.routes
            .load()
            .iter()
            .map(|route| route.compiled.template().to_string())
            .collect()
    }

    /// Number of registered routes
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.load().len()
    }

    /// Whether no route has been registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.load().is_empty()
    }

    fn accepts(&self, path: &str, outcome: &ParseOutcome) -> bool {
        outcome.matched && (!self.config.exact_match || outcome.next_position == path.len())
    }

    fn find(&self, path: &str) -> Option<(Arc<Route>, usize, ParseOutcome)> {
        debug!(path = %path, "Route match attempt");

        let match_start = Instant::now();
        let routes = self.routes.load();
        let found = routes.iter().enumerate().find_map(|(index, route)| {
            let outcome = route.compiled.parse(path);
            self.accepts(path, &outcome)
                .then(|| (Arc::clone(route), index, outcome))
        });
        let match_duration = match_start.elapsed();

        match &found {
            Some((route, index, outcome)) => {
                if match_duration > self.config.slow_match_threshold {
                    warn!(
                        path = %path,
                        template = %route.compiled.template(),
                        index,
                        duration_us = match_duration.as_micros(),
                        "Slow route matching detected"
                    );
                } else {
                    debug!(
                        path = %path,
                        template = %route.compiled.template(),
                        index,
                        params = ?outcome.attributes,
                        duration_us = match_duration.as_micros(),
                        "Route matched"
                    );
                }
            }
            None => {
                debug!(
                    path = %path,
                    routes_count = routes.len(),
                    duration_us = match_duration.as_micros(),
                    "No route matched"
                );
            }
        }

        found
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("templates", &self.templates())
            .field("config", &self.config)
            .finish()
    }
}
