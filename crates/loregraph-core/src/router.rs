//! # Route Table
//!
//! Static mapping from URL paths to views.
//!
//! The table is declarative: no guards, no redirects, and no catch-all.
//! Paths that are not declared resolve to `None`.
//!
//! Matching is lenient in the same ways the view layer's router is:
//! - query string (`?..`) and fragment (`#..`) are ignored
//! - one trailing `/` is ignored
//! - ASCII case is ignored

use serde::Serialize;
use std::fmt;

/// A view the client can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum View {
    Home,
    ArticleAnalysis,
    WorkAnalysis,
    CharacterDetails,
    Events,
    Factions,
    KnowledgeGraph,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Page chrome wrapped around a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Layout {
    /// Navigation shell shared by the main pages.
    Default,
}

/// One entry of the route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
    /// `None` means the view renders standalone.
    pub layout: Option<Layout>,
    /// Loaded on first navigation instead of at startup.
    pub lazy: bool,
}

const fn page(path: &'static str, name: &'static str, view: View, lazy: bool) -> Route {
    Route {
        path,
        name,
        view,
        layout: Some(Layout::Default),
        lazy,
    }
}

/// Every declared route, in declaration order.
pub const ROUTES: &[Route] = &[
    page("/", "Home", View::Home, false),
    page(
        "/article-analysis",
        "ArticleAnalysis",
        View::ArticleAnalysis,
        false,
    ),
    page("/work-analysis", "WorkAnalysis", View::WorkAnalysis, false),
    page(
        "/character-details",
        "CharacterDetails",
        View::CharacterDetails,
        true,
    ),
    page("/events", "Events", View::Events, false),
    page("/factions", "Factions", View::Factions, false),
    Route {
        path: "/knowledge-graph",
        name: "KnowledgeGraph",
        view: View::KnowledgeGraph,
        layout: None,
        lazy: true,
    },
];

/// Strip query, fragment and one trailing slash.
fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}

/// Find the route declared for `path`.
#[must_use]
pub fn resolve(path: &str) -> Option<&'static Route> {
    let wanted = normalize(path);
    let wanted = if wanted.is_empty() { "/" } else { wanted };
    ROUTES.iter().find(|r| r.path.eq_ignore_ascii_case(wanted))
}

/// Find a route by its name (exact match).
#[must_use]
pub fn find_by_name(name: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|r| r.name == name)
}

// =============================================================================
// TESTS
// =============================================================================
