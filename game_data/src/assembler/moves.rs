//! Move pipeline: single resolved values per row of the `moves` table.

use super::Assembler;
use crate::config::{GeneratorConfig, ENGLISH_LANGUAGE_ID};
use crate::documents::{insert_document, Collection, EntityKind, MoveDocument};
use crate::error::Result;
use crate::lookup::{past_bound, IdBound, LookupBuilder};
use crate::tables::{catalog, TableSource};

/// Assembles one [`MoveDocument`] per row of the `moves` table.
#[derive(Debug, Clone, Copy)]
pub struct MoveAssembler {
    /// Moves past this id are not scanned.
    pub max_move_id: Option<IdBound>,
    /// Language of the effect prose.
    pub language_id: Option<i64>,
}

impl Default for MoveAssembler {
    fn default() -> Self {
        Self {
            max_move_id: None,
            language_id: Some(ENGLISH_LANGUAGE_ID),
        }
    }
}

impl MoveAssembler {
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            max_move_id: config.max_move_id,
            language_id: config.language_id,
        }
    }
}

impl Assembler for MoveAssembler {
    type Document = MoveDocument;

    fn kind(&self) -> EntityKind {
        EntityKind::Move
    }

    fn assemble(&self, source: &dyn TableSource) -> Result<Collection<MoveDocument>> {
        let types = LookupBuilder::new(&catalog::TYPES, "identifier").build(source)?;
        let damage_classes =
            LookupBuilder::new(&catalog::MOVE_DAMAGE_CLASSES, "identifier").build(source)?;
        let targets = LookupBuilder::new(&catalog::MOVE_TARGETS, "identifier").build(source)?;
        let effects = LookupBuilder::new(&catalog::MOVE_EFFECT_PROSE, "short_effect")
            .only_where("local_language_id", self.language_id)
            .build(source)?;

        let mut moves = Collection::new();

        for row in source.open(&catalog::MOVES)?.rows() {
            let row = row?;
            if past_bound(&row, self.max_move_id)? {
                break;
            }

            let document = MoveDocument {
                move_type: types.resolve(&row, "type_id")?.to_string(),
                power: row.optional_integer("power")?,
                pp: row.optional_integer("pp")?,
                accuracy: row.optional_integer("accuracy")?,
                priority: row.integer("priority")?,
                target: targets.resolve(&row, "target_id")?.to_string(),
                dmg_class: damage_classes.resolve(&row, "damage_class_id")?.to_string(),
                effect: effects.resolve(&row, "effect_id")?.to_string(),
                effect_chance: row.optional_integer("effect_chance")?,
            };

            insert_document(
                &mut moves,
                self.kind(),
                catalog::MOVES.name,
                row.text("identifier")?,
                document,
            )?;
        }

        tracing::debug!("Assembled {} move documents", moves.len());
        Ok(moves)
    }
}
