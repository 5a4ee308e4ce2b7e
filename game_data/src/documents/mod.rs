//! Denormalized entity documents.
//!
//! Each document is self-contained: every foreign key of the source tables
//! has already been replaced by the display value it points at.

mod ability;
mod creature;
mod moves;

pub use ability::*;
pub use creature::*;
pub use moves::*;

use std::collections::BTreeMap;

use crate::error::{DataError, Result};

/// All documents of one kind, keyed by display name.
pub type Collection<D> = BTreeMap<String, D>;

/// The three top-level kinds of entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Creature,
    Move,
    Ability,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Creature => "creature",
            EntityKind::Move => "move",
            EntityKind::Ability => "ability",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Insert a freshly assembled document; a display name may only appear once.
pub(crate) fn insert_document<D>(
    collection: &mut Collection<D>,
    kind: EntityKind,
    table: &'static str,
    name: &str,
    document: D,
) -> Result<()> {
    if collection.contains_key(name) {
        return Err(DataError::DuplicateDocument {
            kind: kind.as_str(),
            table,
            name: name.to_string(),
        });
    }
    collection.insert(name.to_string(), document);
    Ok(())
}
