//! Small, internally consistent table snapshot shared by unit tests.

use crate::tables::InMemoryTables;

pub(crate) const TYPES: &str = "\
id,identifier,generation_id,damage_class_id
1,normal,1,2
4,poison,1,2
10,fire,1,3
12,grass,1,3
";

pub(crate) const STATS: &str = "\
id,damage_class_id,identifier,is_battle_only,game_index
1,,hp,0,1
2,2,attack,0,2
3,2,defense,0,3
";

pub(crate) const MOVE_DAMAGE_CLASSES: &str = "\
id,identifier
1,status
2,physical
3,special
";

pub(crate) const MOVE_TARGETS: &str = "\
id,identifier
10,selected-pokemon
11,all-opponents
";

pub(crate) const ABILITIES: &str = "\
id,identifier,generation_id,is_main_series
1,stench,3,1
34,chlorophyll,3,1
47,thick-fat,3,1
65,overgrow,3,1
189,synthetic-ability,7,1
10001,mountaineer,4,0
";

pub(crate) const ABILITY_PROSE: &str = "\
ability_id,local_language_id,short_effect,effect
1,9,\"Has a 10% chance of making target Pokémon flinch with each hit.\",x
34,9,Doubles Speed during strong sunlight.,x
47,9,Halves damage from fire and ice moves.,x
65,9,\"Strengthens grass moves to inflict 1.5× damage at 1/3 max HP or less.\",x
189,9,Not a real ability.,x
10001,9,Takes no damage from rock moves.,x
";

pub(crate) const MOVES: &str = "\
id,identifier,generation_id,type_id,power,pp,accuracy,priority,target_id,damage_class_id,effect_id,effect_chance,contest_type_id,contest_effect_id,super_contest_effect_id
1,pound,1,1,40,35,100,0,10,2,1,,5,1,5
22,vine-whip,1,12,45,25,100,0,10,2,1,,2,1,5
33,tackle,1,1,40,35,100,0,10,2,1,,5,1,5
45,growl,1,1,,40,100,0,11,1,19,,2,22,13
";

pub(crate) const MOVE_EFFECT_PROSE: &str = "\
move_effect_id,local_language_id,short_effect,effect
1,9,Inflicts regular damage.,x
19,9,Lowers the target's Attack by one stage.,x
";

pub(crate) const POKEMON: &str = "\
id,identifier,species_id,height,weight,base_experience,order,is_default
1,bulbasaur,1,7,69,64,1,1
2,ivysaur,2,10,130,142,2,1
10033,venusaur-mega,3,24,1555,281,4,0
";

pub(crate) const POKEMON_ABILITIES: &str = "\
pokemon_id,ability_id,is_hidden,slot
1,65,0,1
1,34,1,3
2,65,0,1
10033,47,0,1
";

pub(crate) const POKEMON_STATS: &str = "\
pokemon_id,stat_id,base_stat,effort
1,1,45,0
1,2,49,0
1,3,49,0
2,1,60,0
2,2,62,0
2,3,63,1
10033,1,80,0
";

pub(crate) const POKEMON_TYPES: &str = "\
pokemon_id,type_id,slot
1,12,1
1,4,2
2,12,1
2,4,2
10033,12,1
10033,4,2
99,10,1
";

pub(crate) const POKEMON_MOVES: &str = "\
pokemon_id,version_group_id,move_id,pokemon_move_method_id,level,order
1,1,33,1,1,
1,1,45,1,3,
1,1,22,1,9,
2,1,33,1,1,
";

/// Every table the generator reads.
pub(crate) fn tables() -> InMemoryTables {
    InMemoryTables::new()
        .with_table("types", TYPES)
        .with_table("stats", STATS)
        .with_table("move_damage_classes", MOVE_DAMAGE_CLASSES)
        .with_table("move_targets", MOVE_TARGETS)
        .with_table("abilities", ABILITIES)
        .with_table("ability_prose", ABILITY_PROSE)
        .with_table("moves", MOVES)
        .with_table("move_effect_prose", MOVE_EFFECT_PROSE)
        .with_table("pokemon", POKEMON)
        .with_table("pokemon_abilities", POKEMON_ABILITIES)
        .with_table("pokemon_stats", POKEMON_STATS)
        .with_table("pokemon_types", POKEMON_TYPES)
        .with_table("pokemon_moves", POKEMON_MOVES)
}
