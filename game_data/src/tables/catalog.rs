//! Schemas of every source table the pipelines read.
//!
//! Only columns some step parses carry an integer kind; the rest are `text`
//! and only count toward the row's width.

use super::{FieldDef, TableSchema};

pub static TYPES: TableSchema = TableSchema::new(
    "types",
    &[
        FieldDef::id("id"),
        FieldDef::text("identifier"),
        FieldDef::text("generation_id"),
        FieldDef::text("damage_class_id"),
    ],
);

pub static STATS: TableSchema = TableSchema::new(
    "stats",
    &[
        FieldDef::id("id"),
        FieldDef::text("damage_class_id"),
        FieldDef::text("identifier"),
        FieldDef::text("is_battle_only"),
        FieldDef::text("game_index"),
    ],
);

pub static MOVE_DAMAGE_CLASSES: TableSchema = TableSchema::new(
    "move_damage_classes",
    &[FieldDef::id("id"), FieldDef::text("identifier")],
);

pub static MOVE_TARGETS: TableSchema = TableSchema::new(
    "move_targets",
    &[FieldDef::id("id"), FieldDef::text("identifier")],
);

pub static ABILITIES: TableSchema = TableSchema::new(
    "abilities",
    &[
        FieldDef::id("id"),
        FieldDef::text("identifier"),
        FieldDef::text("generation_id"),
        FieldDef::text("is_main_series"),
    ],
);

pub static MOVES: TableSchema = TableSchema::new(
    "moves",
    &[
        FieldDef::id("id"),
        FieldDef::text("identifier"),
        FieldDef::text("generation_id"),
        FieldDef::optional_integer("type_id"),
        FieldDef::optional_integer("power"),
        FieldDef::optional_integer("pp"),
        FieldDef::optional_integer("accuracy"),
        FieldDef::integer("priority"),
        FieldDef::optional_integer("target_id"),
        FieldDef::optional_integer("damage_class_id"),
        FieldDef::optional_integer("effect_id"),
        FieldDef::optional_integer("effect_chance"),
        FieldDef::text("contest_type_id"),
        FieldDef::text("contest_effect_id"),
        FieldDef::text("super_contest_effect_id"),
    ],
);

pub static MOVE_EFFECT_PROSE: TableSchema = TableSchema::new(
    "move_effect_prose",
    &[
        FieldDef::id("move_effect_id"),
        FieldDef::integer("local_language_id"),
        FieldDef::text("short_effect"),
        FieldDef::text("effect"),
    ],
);

pub static ABILITY_PROSE: TableSchema = TableSchema::new(
    "ability_prose",
    &[
        FieldDef::id("ability_id"),
        FieldDef::integer("local_language_id"),
        FieldDef::text("short_effect"),
        FieldDef::text("effect"),
    ],
);

pub static POKEMON: TableSchema = TableSchema::new(
    "pokemon",
    &[
        FieldDef::id("id"),
        FieldDef::text("identifier"),
        FieldDef::text("species_id"),
        FieldDef::text("height"),
        FieldDef::text("weight"),
        FieldDef::text("base_experience"),
        FieldDef::text("order"),
        FieldDef::text("is_default"),
    ],
);

pub static POKEMON_ABILITIES: TableSchema = TableSchema::new(
    "pokemon_abilities",
    &[
        FieldDef::id("pokemon_id"),
        FieldDef::integer("ability_id"),
        FieldDef::text("is_hidden"),
        FieldDef::text("slot"),
    ],
);

pub static POKEMON_STATS: TableSchema = TableSchema::new(
    "pokemon_stats",
    &[
        FieldDef::id("pokemon_id"),
        FieldDef::integer("stat_id"),
        FieldDef::integer("base_stat"),
        FieldDef::text("effort"),
    ],
);

pub static POKEMON_TYPES: TableSchema = TableSchema::new(
    "pokemon_types",
    &[
        FieldDef::id("pokemon_id"),
        FieldDef::integer("type_id"),
        FieldDef::text("slot"),
    ],
);

pub static POKEMON_MOVES: TableSchema = TableSchema::new(
    "pokemon_moves",
    &[
        FieldDef::id("pokemon_id"),
        FieldDef::text("version_group_id"),
        FieldDef::integer("move_id"),
        FieldDef::text("pokemon_move_method_id"),
        FieldDef::text("level"),
        FieldDef::text("order"),
    ],
);

/// Every table, in the order the generator first touches them.
pub static ALL: [&TableSchema; 13] = [
    &ABILITY_PROSE,
    &ABILITIES,
    &TYPES,
    &MOVE_DAMAGE_CLASSES,
    &MOVE_TARGETS,
    &MOVE_EFFECT_PROSE,
    &MOVES,
    &POKEMON_ABILITIES,
    &STATS,
    &POKEMON_STATS,
    &POKEMON_TYPES,
    &POKEMON_MOVES,
    &POKEMON,
];
