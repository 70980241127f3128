//! # Navigation
//!
//! The single navigation hook over the static route table: log the
//! destination, then let the navigation through.

use loregraph_core::{ROUTES, Route, resolve};

/// Resolves navigation targets against the route table.
#[derive(Debug, Clone, Copy, Default)]
pub struct Navigator;

impl Navigator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Navigate to `path`.
    ///
    /// Always allowed. Returns the matching route, or `None` for paths the
    /// table does not declare.
    pub fn navigate(&self, path: &str) -> Option<&'static Route> {
        tracing::info!(path, "route change");
        let route = resolve(path);
        if route.is_none() {
            tracing::debug!(path, "no route declared for path");
        }
        route
    }

    /// All declared routes, in declaration order.
    #[must_use]
    pub fn routes(&self) -> &'static [Route] {
        ROUTES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loregraph_core::View;

    #[test]
    fn navigation_resolves_declared_views() {
        let nav = Navigator::new();
        assert_eq!(nav.navigate("/events").map(|r| r.view), Some(View::Events));
        assert_eq!(nav.navigate("/").map(|r| r.view), Some(View::Home));
    }

    #[test]
    fn navigation_to_unknown_path_yields_nothing() {
        assert!(Navigator::new().navigate("/admin").is_none());
    }

    #[test]
    fn routes_lists_the_whole_table() {
        assert_eq!(Navigator::new().routes().len(), 7);
    }
}
