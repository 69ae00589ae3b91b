//! Configuration types for category walks

use std::collections::HashSet;

use crate::error::ConfigError;

/// Configuration for a category walk. Immutable for the duration of a walk.
#[derive(Debug, Clone)]
pub struct WalkConfig {
    /// Skip any category already discovered anywhere in this run
    pub unique: bool,
    /// Maximum number of expansion levels. 1 = direct children of the root only.
    pub depth_limit: usize,
    /// Allow re-expanding a category that is already on the ancestor path
    pub allow_loop: bool,
    /// Categories that are neither emitted nor expanded
    pub exclude: HashSet<String>,
    /// Also collect pages contained in every expanded category
    pub include_pages: bool,
}

impl WalkConfig {
    pub fn with_depth_limit(mut self, depth_limit: usize) -> Self {
        self.depth_limit = depth_limit;
        self
    }

    pub fn with_unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    pub fn with_loop(mut self, allow_loop: bool) -> Self {
        self.allow_loop = allow_loop;
        self
    }

    pub fn with_exclude<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_pages(mut self, include_pages: bool) -> Self {
        self.include_pages = include_pages;
        self
    }

    /// Reject configurations that cannot describe a walk.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth_limit < 1 {
            return Err(ConfigError::InvalidDepthLimit(self.depth_limit));
        }
        Ok(())
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.exclude.contains(name)
    }
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            unique: false,
            depth_limit: 1,
            allow_loop: false,
            exclude: HashSet::new(),
            include_pages: false,
        }
    }
}
