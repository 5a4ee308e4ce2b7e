//! Mirror configuration, read from TOML.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{MirrorError, Result};

/// Configuration for a sprite mirror run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MirrorConfig {
    /// Root of the remote sprite catalog.
    pub base_url: String,

    /// Directory the variant directories are created in.
    pub output_dir: PathBuf,

    /// Creature document collection whose keys are mirrored.
    pub documents: PathBuf,

    pub user_agent: String,

    /// Canonical -> remote name pairs added to the built-in exceptions.
    pub exceptions: BTreeMap<String, String>,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            base_url: "http://play.pokemonshowdown.com/sprites".to_string(),
            output_dir: PathBuf::from("data"),
            documents: PathBuf::from("data/pokemon.json"),
            user_agent: "Mozilla/5.0".to_string(),
            exceptions: BTreeMap::new(),
        }
    }
}

impl MirrorConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| MirrorError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}
