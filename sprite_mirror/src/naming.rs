//! Canonical names that the remote catalog spells differently.

use std::collections::BTreeMap;

/// Known mismatches between canonical creature names and remote file names.
///
/// Only the remote request uses the translated name; local files keep the
/// canonical one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameExceptions {
    remote_names: BTreeMap<String, String>,
}

impl Default for NameExceptions {
    fn default() -> Self {
        Self::empty()
            .with_exception("mewtwo-mega-x", "mewtwo-megax")
            .with_exception("mewtwo-mega-y", "mewtwo-megay")
            .with_exception("charizard-mega-x", "charizard-megax")
            .with_exception("charizard-mega-y", "charizard-megay")
            .with_exception("floette-eternalflower", "floette-eternal")
    }
}

impl NameExceptions {
    /// A set with no exceptions.
    pub fn empty() -> Self {
        Self {
            remote_names: BTreeMap::new(),
        }
    }

    pub fn with_exception(mut self, canonical: impl Into<String>, remote: impl Into<String>) -> Self {
        self.remote_names.insert(canonical.into(), remote.into());
        self
    }

    /// Add every pair of `extra`, replacing existing entries.
    pub fn extend(&mut self, extra: impl IntoIterator<Item = (String, String)>) {
        self.remote_names.extend(extra);
    }

    /// Name to request from the remote source for `canonical`.
    pub fn remote_name<'a>(&'a self, canonical: &'a str) -> &'a str {
        self.remote_names
            .get(canonical)
            .map(String::as_str)
            .unwrap_or(canonical)
    }

    pub fn len(&self) -> usize {
        self.remote_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.remote_names.is_empty()
    }
}
