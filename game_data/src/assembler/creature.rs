//! Creature pipeline: four fan-outs joined onto the `pokemon` table.

use std::collections::HashSet;

use super::{report_orphans, Assembler};
use crate::documents::{insert_document, Collection, CreatureDocument, EntityKind};
use crate::error::Result;
use crate::fanout::{FanOutAggregator, KeyedAggregator};
use crate::config::GeneratorConfig;
use crate::lookup::{IdBound, LookupBuilder};
use crate::tables::{catalog, TableSource};

/// Assembles one [`CreatureDocument`] per row of the `pokemon` table.
///
/// Learnable moves past `max_move_id` are dropped, so every listed move has
/// a document in the move collection built with the same bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct CreatureAssembler {
    pub max_move_id: Option<IdBound>,
}

impl CreatureAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            max_move_id: config.max_move_id,
        }
    }
}

impl Assembler for CreatureAssembler {
    type Document = CreatureDocument;

    fn kind(&self) -> EntityKind {
        EntityKind::Creature
    }

    fn assemble(&self, source: &dyn TableSource) -> Result<Collection<CreatureDocument>> {
        let abilities = LookupBuilder::new(&catalog::ABILITIES, "identifier").build(source)?;
        let creature_abilities =
            FanOutAggregator::new(&catalog::POKEMON_ABILITIES, "pokemon_id", "ability_id")
                .aggregate(source, &abilities)?;

        let stats = LookupBuilder::new(&catalog::STATS, "identifier").build(source)?;
        let creature_stats =
            KeyedAggregator::new(&catalog::POKEMON_STATS, "pokemon_id", "stat_id", "base_stat")
                .aggregate(source, &stats)?;

        let types = LookupBuilder::new(&catalog::TYPES, "identifier").build(source)?;
        let creature_types =
            FanOutAggregator::new(&catalog::POKEMON_TYPES, "pokemon_id", "type_id")
                .aggregate(source, &types)?;

        let moves = LookupBuilder::new(&catalog::MOVES, "identifier")
            .bounded(self.max_move_id)
            .build(source)?;
        let creature_moves =
            FanOutAggregator::new(&catalog::POKEMON_MOVES, "pokemon_id", "move_id")
                .skip_children_past(self.max_move_id)
                .aggregate(source, &moves)?;

        let mut creatures = Collection::new();
        let mut seen = HashSet::new();

        for row in source.open(&catalog::POKEMON)?.rows() {
            let row = row?;
            let id = row.id();

            let document = CreatureDocument {
                types: creature_types.children(id).to_vec(),
                abilities: creature_abilities.children(id).to_vec(),
                stats: creature_stats.values(id),
                moves: creature_moves.children(id).to_vec(),
            };

            insert_document(
                &mut creatures,
                self.kind(),
                catalog::POKEMON.name,
                row.text("identifier")?,
                document,
            )?;
            seen.insert(id.to_string());
        }

        report_orphans(self.kind(), catalog::POKEMON_ABILITIES.name, creature_abilities.owners(), &seen);
        report_orphans(self.kind(), catalog::POKEMON_STATS.name, creature_stats.owners(), &seen);
        report_orphans(self.kind(), catalog::POKEMON_TYPES.name, creature_types.owners(), &seen);
        report_orphans(self.kind(), catalog::POKEMON_MOVES.name, creature_moves.owners(), &seen);

        tracing::debug!("Assembled {} creature documents", creatures.len());
        Ok(creatures)
    }
}
