//! Sprite variants offered by the remote catalog.

use serde::{Deserialize, Serialize};

/// One rendering of a creature's sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpriteVariant {
    Normal,
    Shiny,
    BackNormal,
    BackShiny,
}

impl SpriteVariant {
    /// Every variant, in the order a mirror run fetches them.
    pub const ALL: [SpriteVariant; 4] = [
        SpriteVariant::BackShiny,
        SpriteVariant::Shiny,
        SpriteVariant::BackNormal,
        SpriteVariant::Normal,
    ];

    /// Directory of this variant on the remote source.
    pub fn remote_dir(&self) -> &'static str {
        match self {
            SpriteVariant::Normal => "xyani",
            SpriteVariant::Shiny => "xyani-shiny",
            SpriteVariant::BackNormal => "xyani-back",
            SpriteVariant::BackShiny => "xyani-back-shiny",
        }
    }

    /// Directory of this variant under the local output directory.
    pub fn local_dir(&self) -> &'static str {
        match self {
            SpriteVariant::Normal => "sprites",
            SpriteVariant::Shiny => "sprites-shiny",
            SpriteVariant::BackNormal => "back-sprites",
            SpriteVariant::BackShiny => "back-sprites-shiny",
        }
    }
}

impl std::fmt::Display for SpriteVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.local_dir())
    }
}
