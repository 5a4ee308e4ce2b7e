//! Ability documents.

use serde::{Deserialize, Serialize};

/// An ability's short effect text.
///
/// Serializes as a bare string so the ability collection reads as
/// `{"stench": "Has a 10% chance of making target Pokémon flinch ..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AbilityDocument {
    pub effect: String,
}

impl AbilityDocument {
    pub fn new(effect: impl Into<String>) -> Self {
        Self {
            effect: effect.into(),
        }
    }
}
