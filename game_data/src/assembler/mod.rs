//! Entity assemblers: join base tables against lookups and fan-outs.
//!
//! Every lookup and fan-out an assembler needs is built in full before the
//! entity base table is scanned. The scan then performs plain map lookups
//! keyed by the entity id.

mod ability;
mod creature;
mod moves;

pub use ability::*;
pub use creature::*;
pub use moves::*;

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashSet;

use crate::documents::{Collection, EntityKind};
use crate::error::Result;
use crate::tables::TableSource;

/// Builds the full document collection of one entity kind.
pub trait Assembler {
    type Document: Serialize + DeserializeOwned;

    fn kind(&self) -> EntityKind;

    /// Assemble every document, or fail without producing any.
    fn assemble(&self, source: &dyn TableSource) -> Result<Collection<Self::Document>>;
}

/// Log junction owners that never appeared in the base table.
///
/// Such owners are left out of the output.
fn report_orphans<'a>(
    kind: EntityKind,
    junction: &'static str,
    owners: impl Iterator<Item = &'a str>,
    seen: &HashSet<String>,
) {
    let orphans = owners.filter(|owner| !seen.contains(*owner)).count();
    if orphans > 0 {
        tracing::warn!(
            "{} {} owners in {} have no {} row and were skipped",
            orphans,
            kind,
            junction,
            kind
        );
    }
}
