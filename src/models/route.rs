//! Hash-based routing between the tool grid and individual tools.

use super::operation::Operation;

/// Application routes for hash-based navigation.
/// URL format: `#/` for the tool grid, `#/<operation-slug>` for a tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// Tool grid: #/ or empty hash
    Home,
    /// A single operation form, e.g. #/merge
    Tool(Operation),
}

impl AppRoute {
    /// Parse URL hash into AppRoute. Unknown slugs fall back to Home.
    pub fn from_hash(hash: &str) -> Self {
        let slug = hash
            .trim_start_matches('#')
            .trim_start_matches('/')
            .trim_end_matches('/');

        Operation::from_slug(slug).map_or(Self::Home, Self::Tool)
    }

    /// Convert AppRoute to URL hash
    pub fn to_hash(&self) -> String {
        match self {
            Self::Home => "#/".to_string(),
            Self::Tool(op) => format!("#/{}", op.slug()),
        }
    }

    /// Get current route from browser URL
    pub fn current() -> Self {
        Self::from_hash(&crate::utils::dom::get_hash())
    }
}
