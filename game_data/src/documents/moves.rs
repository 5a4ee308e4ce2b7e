//! Move documents.

use serde::{Deserialize, Serialize};

/// Everything known about one move.
///
/// Numeric attributes that are blank in the source serialize as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDocument {
    #[serde(rename = "type")]
    pub move_type: String,
    pub power: Option<u32>,
    pub pp: Option<u32>,
    pub accuracy: Option<u32>,
    pub priority: i32,
    pub target: String,
    pub dmg_class: String,
    /// Short effect text.
    pub effect: String,
    pub effect_chance: Option<u32>,
}
