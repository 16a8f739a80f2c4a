//! Protected route table.

use crate::GuardConfig;

/// Which paths require a session, and where to send visitors without one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    protected_prefixes: Vec<String>,
    login_path: String,
}

impl RouteTable {
    /// Create a table from protected prefixes and the login path.
    ///
    /// Trailing slashes on prefixes are ignored.
    #[must_use]
    pub fn new(protected_prefixes: &[String], login_path: impl Into<String>) -> Self {
        let protected_prefixes = protected_prefixes
            .iter()
            .map(|prefix| prefix.trim_end_matches('/').to_string())
            .filter(|prefix| !prefix.is_empty())
            .collect();

        Self {
            protected_prefixes,
            login_path: login_path.into(),
        }
    }

    /// Create a table from guard configuration.
    #[must_use]
    pub fn from_config(config: &GuardConfig) -> Self {
        Self::new(&config.protected_prefixes, config.login_path.clone())
    }

    /// Where unauthenticated visitors are sent.
    #[must_use]
    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    /// Returns `true` if `path` requires a session.
    ///
    /// Prefixes match whole segments, so `/profile` protects `/profile/5`
    /// but not `/profiles`. Query strings and fragments are ignored. The
    /// login path is never protected.
    #[must_use]
    pub fn is_protected(&self, path: &str) -> bool {
        let path = path.split(['?', '#']).next().unwrap_or_default();

        if path == self.login_path {
            return false;
        }

        self.protected_prefixes.iter().any(|prefix| {
            path.strip_prefix(prefix.as_str())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
        })
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::from_config(&GuardConfig::default())
    }
}
