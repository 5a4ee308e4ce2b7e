//! Ability pipeline: effect text keyed by id, re-keyed by display name.

use super::Assembler;
use crate::config::{GeneratorConfig, DEFAULT_MAX_ABILITY_ID, ENGLISH_LANGUAGE_ID};
use crate::documents::{insert_document, AbilityDocument, Collection, EntityKind};
use crate::error::Result;
use crate::lookup::{past_bound, IdBound, LookupBuilder};
use crate::tables::{catalog, TableSource};

/// Assembles one [`AbilityDocument`] per main-series ability.
///
/// Effect texts are first collected by ability id; a second scan over the
/// `abilities` table copies each one into a new collection keyed by the
/// ability's identifier. Both scans stop at `max_ability_id`.
#[derive(Debug, Clone, Copy)]
pub struct AbilityAssembler {
    pub max_ability_id: IdBound,
    pub language_id: Option<i64>,
}

impl Default for AbilityAssembler {
    fn default() -> Self {
        Self {
            max_ability_id: DEFAULT_MAX_ABILITY_ID,
            language_id: Some(ENGLISH_LANGUAGE_ID),
        }
    }
}

impl AbilityAssembler {
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            max_ability_id: config.max_ability_id,
            language_id: config.language_id,
        }
    }
}

impl Assembler for AbilityAssembler {
    type Document = AbilityDocument;

    fn kind(&self) -> EntityKind {
        EntityKind::Ability
    }

    fn assemble(&self, source: &dyn TableSource) -> Result<Collection<AbilityDocument>> {
        let effects = LookupBuilder::new(&catalog::ABILITY_PROSE, "short_effect")
            .bounded(Some(self.max_ability_id))
            .only_where("local_language_id", self.language_id)
            .build(source)?;

        let mut abilities = Collection::new();

        for row in source.open(&catalog::ABILITIES)?.rows() {
            let row = row?;
            if past_bound(&row, Some(self.max_ability_id))? {
                break;
            }

            let effect = effects.resolve(&row, "id")?;
            insert_document(
                &mut abilities,
                self.kind(),
                catalog::ABILITIES.name,
                row.text("identifier")?,
                AbilityDocument::new(effect),
            )?;
        }

        tracing::debug!("Assembled {} ability documents", abilities.len());
        Ok(abilities)
    }
}
