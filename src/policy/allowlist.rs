use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Ordered set of domain suffixes and full addresses considered internal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllowListPolicy {
    entries: IndexSet<String>,
}

impl AllowListPolicy {
    #[must_use]
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Case-sensitive suffix match against every entry.
    ///
    /// `gmail.com` admits `alice@gmail.com`; a full address admits only itself
    /// (and anything ending in it).
    #[must_use]
    pub fn allows(&self, email: &str) -> bool {
        self.entries.iter().any(|entry| email.ends_with(entry.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

#[cfg(test)]
#[path = "allowlist_tests.rs"]
mod tests;
