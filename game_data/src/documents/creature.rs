//! Creature documents.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything known about one creature form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureDocument {
    /// Type names, in slot order.
    #[serde(rename = "type")]
    pub types: Vec<String>,

    /// Ability names, in slot order.
    #[serde(rename = "ability")]
    pub abilities: Vec<String>,

    /// Stat name -> base value.
    pub stats: BTreeMap<String, i64>,

    /// Learnable move names, one entry per learn method and version group.
    pub moves: Vec<String>,
}
